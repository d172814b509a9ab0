//! Classification of inbound platform launch requests.
//!
//! A launch request either maps to a browser navigation or it does not;
//! there is no error surface. Rejection is silent: casting devices and
//! launchers routinely fire requests we must ignore.

use tracing::debug;

use hearth_core::urls;
use hearth_core::SessionSnapshot;

/// Extra key DIAL casting devices attach launch parameters under.
pub const DIAL_PARAMS_KEY: &str = "com.amazon.extra.DIAL_PARAM";

/// Action kinds a platform launch request can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchAction {
    View,
    Send,
    Main,
}

/// Accessor view of an inbound launch request. `action` is `None` for
/// action kinds this app does not recognize.
#[derive(Debug, Clone, Default)]
pub struct LaunchRequest {
    pub action: Option<LaunchAction>,
    pub data_uri: Option<String>,
    pub text_extra: Option<String>,
    pub dial_params: Option<String>,
    pub from_history: bool,
    pub from_restore: bool,
}

impl LaunchRequest {
    pub fn view(uri: impl Into<String>) -> Self {
        Self {
            action: Some(LaunchAction::View),
            data_uri: Some(uri.into()),
            ..Self::default()
        }
    }

    /// Some senders fire view actions with no URI at all.
    pub fn view_without_uri() -> Self {
        Self {
            action: Some(LaunchAction::View),
            ..Self::default()
        }
    }

    pub fn send(text: impl Into<String>) -> Self {
        Self {
            action: Some(LaunchAction::Send),
            text_extra: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn main() -> Self {
        Self {
            action: Some(LaunchAction::Main),
            ..Self::default()
        }
    }

    pub fn with_dial_params(mut self, params: impl Into<String>) -> Self {
        self.dial_params = Some(params.into());
        self
    }

    pub fn launched_from_history(mut self) -> Self {
        self.from_history = true;
        self
    }

    pub fn launched_from_restore(mut self) -> Self {
        self.from_restore = true;
        self
    }
}

/// How a validated navigation request originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentSource {
    DirectView,
    Share,
}

/// Classification outcome. `Invalid` is the only rejection signal and
/// carries no reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedIntent {
    Navigate { url: String, source: IntentSource },
    Invalid,
}

impl ClassifiedIntent {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Navigate { .. })
    }
}

pub fn validate(request: &LaunchRequest) -> ClassifiedIntent {
    if request.from_history || request.from_restore {
        debug!("dropping launch request replayed from history/restore");
        return ClassifiedIntent::Invalid;
    }

    match request.action {
        Some(LaunchAction::View) => match &request.data_uri {
            Some(uri) => ClassifiedIntent::Navigate {
                url: uri.clone(),
                source: IntentSource::DirectView,
            },
            None => ClassifiedIntent::Invalid,
        },

        Some(LaunchAction::Send) => {
            let text = match request.text_extra.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => text,
                _ => return ClassifiedIntent::Invalid,
            };
            let url = if urls::is_url(text) {
                text.to_string()
            } else {
                urls::build_search_url(hearth_config::SEARCH_URL_TEMPLATE, text)
            };
            ClassifiedIntent::Navigate {
                url,
                source: IntentSource::Share,
            }
        }

        Some(LaunchAction::Main) => match request.dial_params.as_deref() {
            Some(params) if !params.is_empty() => ClassifiedIntent::Navigate {
                url: urls::dial_url(hearth_config::YOUTUBE_TV_URL, params),
                source: IntentSource::DirectView,
            },
            _ => ClassifiedIntent::Invalid,
        },

        None => ClassifiedIntent::Invalid,
    }
}

/// On-create variant: an activity re-created from saved state must not
/// re-process the launch request that originally started it.
pub fn validate_on_create(
    request: &LaunchRequest,
    saved_state: Option<&SessionSnapshot>,
) -> ClassifiedIntent {
    if saved_state.is_some() {
        return ClassifiedIntent::Invalid;
    }
    validate(request)
}
