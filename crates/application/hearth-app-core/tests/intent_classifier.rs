use hearth_app_core::intent::{self, ClassifiedIntent, IntentSource, LaunchRequest};
use hearth_core::SessionSnapshot;

const TEST_URL: &str = "https://github.com/rust-lang/rust";

fn saved_state() -> SessionSnapshot {
    SessionSnapshot {
        stack: vec![TEST_URL.to_string()],
        index: 0,
    }
}

#[test]
fn view_intent_with_uri_is_a_direct_view() {
    let outcome = intent::validate(&LaunchRequest::view(TEST_URL));
    assert_eq!(
        outcome,
        ClassifiedIntent::Navigate {
            url: TEST_URL.to_string(),
            source: IntentSource::DirectView,
        }
    );
}

#[test]
fn view_intent_without_a_uri_is_invalid() {
    let outcome = intent::validate(&LaunchRequest::view_without_uri());
    assert_eq!(outcome, ClassifiedIntent::Invalid);
}

#[test]
fn history_flagged_intent_is_invalid_regardless_of_uri() {
    let request = LaunchRequest::view(TEST_URL).launched_from_history();
    assert_eq!(intent::validate(&request), ClassifiedIntent::Invalid);
}

#[test]
fn restore_flagged_intent_is_invalid() {
    let request = LaunchRequest::view(TEST_URL).launched_from_restore();
    assert_eq!(intent::validate(&request), ClassifiedIntent::Invalid);
}

#[test]
fn saved_state_suppresses_an_otherwise_valid_view_intent() {
    let request = LaunchRequest::view(TEST_URL);
    let outcome = intent::validate_on_create(&request, Some(&saved_state()));
    assert_eq!(outcome, ClassifiedIntent::Invalid);
}

#[test]
fn on_create_without_saved_state_defers_to_the_normal_rules() {
    let request = LaunchRequest::view(TEST_URL);
    let outcome = intent::validate_on_create(&request, None);
    assert!(outcome.is_valid());
}

#[test]
fn share_intent_with_url_text_keeps_the_exact_url() {
    let outcome = intent::validate(&LaunchRequest::send(TEST_URL));
    assert_eq!(
        outcome,
        ClassifiedIntent::Navigate {
            url: TEST_URL.to_string(),
            source: IntentSource::Share,
        }
    );
}

#[test]
fn share_intent_with_free_text_becomes_a_search() {
    let text = "hello world tv browser";
    let outcome = intent::validate(&LaunchRequest::send(text));
    match outcome {
        ClassifiedIntent::Navigate { url, source } => {
            assert_eq!(source, IntentSource::Share);
            for token in text.split_whitespace() {
                assert!(url.contains(token), "expected {url} to contain {token}");
            }
        }
        ClassifiedIntent::Invalid => panic!("expected share intent to be valid"),
    }
}

#[test]
fn share_intent_without_usable_text_is_invalid() {
    assert_eq!(
        intent::validate(&LaunchRequest::send("")),
        ClassifiedIntent::Invalid
    );
    assert_eq!(
        intent::validate(&LaunchRequest::send("   ")),
        ClassifiedIntent::Invalid
    );
}

#[test]
fn main_intent_with_dial_params_targets_the_tv_endpoint() {
    let request = LaunchRequest::main().with_dial_params("parameter");
    assert_eq!(
        intent::validate(&request),
        ClassifiedIntent::Navigate {
            url: "https://www.youtube.com/tv?parameter".to_string(),
            source: IntentSource::DirectView,
        }
    );
}

#[test]
fn main_intent_without_dial_params_is_invalid() {
    assert_eq!(
        intent::validate(&LaunchRequest::main()),
        ClassifiedIntent::Invalid
    );
    assert_eq!(
        intent::validate_on_create(&LaunchRequest::main(), None),
        ClassifiedIntent::Invalid
    );
}

#[test]
fn unrecognized_action_is_invalid() {
    assert_eq!(
        intent::validate(&LaunchRequest::default()),
        ClassifiedIntent::Invalid
    );
}
