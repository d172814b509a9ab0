use std::sync::{Arc, Mutex};

/// Toast variants the overlay can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    SitePinned,
    SiteUnpinned,
    DesktopSiteRequested,
    MobileSiteRequested,
}

impl Toast {
    pub fn message(self) -> &'static str {
        match self {
            Toast::SitePinned => "Pinned to your home screen",
            Toast::SiteUnpinned => "Removed from your home screen",
            Toast::DesktopSiteRequested => "Requesting desktop site",
            Toast::MobileSiteRequested => "Requesting mobile site",
        }
    }
}

/// One-shot actions the toolbar asks the navigation overlay to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    ShowTopToast(Toast),
    ShowBottomToast(Toast),
    SetOverlayVisible(bool),
}

/// Envelope whose value can be taken exactly once.
pub struct Consumable<T> {
    value: Mutex<Option<T>>,
}

impl<T> Consumable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(Some(value)),
        }
    }

    pub fn take_once(&self) -> Option<T> {
        self.value.lock().unwrap().take()
    }

    pub fn is_consumed(&self) -> bool {
        self.value.lock().unwrap().is_none()
    }
}

/// Single-observer channel for overlay actions.
///
/// At most one unconsumed event is buffered; emitting replaces it. A
/// registered observer runs synchronously on the emitter's stack, so an
/// observer sees every action in order even when several are emitted from
/// one click handler.
#[derive(Clone)]
pub struct ActionEvents {
    pending: Arc<Mutex<Option<Arc<Consumable<OverlayAction>>>>>,
    observer: Arc<Mutex<Option<Observer>>>,
}

type Observer = Arc<dyn Fn(&Consumable<OverlayAction>) + Send + Sync>;

impl ActionEvents {
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(None)),
            observer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn emit(&self, action: OverlayAction) {
        let envelope = Arc::new(Consumable::new(action));
        *self.pending.lock().unwrap() = Some(Arc::clone(&envelope));

        let observer = self.observer.lock().unwrap().clone();
        if let Some(observer) = observer {
            observer(&envelope);
        }
    }

    /// Register the downstream observer, replacing any previous one.
    pub fn observe(&self, observer: impl Fn(&Consumable<OverlayAction>) + Send + Sync + 'static) {
        *self.observer.lock().unwrap() = Some(Arc::new(observer));
    }

    /// Consume the buffered event, if one is pending and unconsumed.
    pub fn take_pending(&self) -> Option<OverlayAction> {
        let envelope = self.pending.lock().unwrap().clone();
        envelope.and_then(|e| e.take_once())
    }
}

impl Default for ActionEvents {
    fn default() -> Self {
        Self::new()
    }
}
