use hearth_core::urls;
use hearth_core::{SessionSnapshot, SnapshotError};

#[test]
fn scheme_qualified_urls_are_recognized() {
    assert!(urls::is_url("https://github.com/mozilla-mobile/focus-android"));
    assert!(urls::is_url("http://example.org"));
    assert!(urls::is_url(urls::APP_URL_HOME));
}

#[test]
fn bare_host_forms_are_recognized() {
    assert!(urls::is_url("example.org"));
    assert!(urls::is_url("news.ycombinator.com/item"));
}

#[test]
fn free_text_is_not_a_url() {
    assert!(!urls::is_url("Hello World TV"));
    assert!(!urls::is_url("rust borrow checker"));
    assert!(!urls::is_url(""));
    assert!(!urls::is_url("nodotshere"));
}

#[test]
fn normalize_prefixes_scheme_onto_bare_hosts() {
    assert_eq!(urls::normalize("example.org"), "http://example.org");
    assert_eq!(urls::normalize("https://example.org"), "https://example.org");
}

#[test]
fn url_bar_is_blank_on_home() {
    assert_eq!(urls::to_url_bar_display(urls::APP_URL_HOME), "");
}

#[test]
fn url_bar_strips_scheme_and_trailing_slash() {
    assert_eq!(
        urls::to_url_bar_display("https://www.mozilla.org/"),
        "www.mozilla.org"
    );
    assert_eq!(
        urls::to_url_bar_display("http://example.org/tv"),
        "example.org/tv"
    );
}

#[test]
fn search_url_contains_every_query_token() {
    let query = "rust reactive state projection";
    let url = urls::build_search_url("https://duckduckgo.com/html/?q=%s", query);
    for token in query.split_whitespace() {
        assert!(url.contains(token), "expected {url} to contain {token}");
    }
    assert!(url.starts_with("https://duckduckgo.com/html/?q="));
}

#[test]
fn search_url_encodes_separators() {
    let url = urls::build_search_url("https://duckduckgo.com/html/?q=%s", "a b&c");
    assert!(!url.contains(' '));
    assert!(!url.contains("b&c"));
}

#[test]
fn dial_url_appends_raw_params_as_query() {
    assert_eq!(
        urls::dial_url("https://www.youtube.com/tv", "parameter"),
        "https://www.youtube.com/tv?parameter"
    );
}

#[test]
fn snapshot_validation_rejects_impossible_shapes() {
    let empty = SessionSnapshot {
        stack: vec![],
        index: 0,
    };
    assert!(matches!(empty.validate(), Err(SnapshotError::Empty)));

    let out_of_bounds = SessionSnapshot {
        stack: vec!["https://example.org".into()],
        index: 3,
    };
    assert!(matches!(
        out_of_bounds.validate(),
        Err(SnapshotError::IndexOutOfBounds { index: 3, len: 1 })
    ));

    let ok = SessionSnapshot {
        stack: vec!["https://example.org".into()],
        index: 0,
    };
    assert!(ok.validate().is_ok());
    assert_eq!(ok.current_url(), Some("https://example.org"));
}
