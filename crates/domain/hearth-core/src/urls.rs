use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

/// Internal URL the home screen renders under. Never shown in the URL bar.
pub const APP_URL_HOME: &str = "hearth:home";

/// Characters escaped inside a search query component, beyond controls.
const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'?');

pub fn is_home(url: &str) -> bool {
    url == APP_URL_HOME
}

/// Decide whether free text names a page rather than a search.
///
/// Accepts scheme-qualified URLs with a host, internal pages, and bare
/// `host.tld` forms. Anything containing whitespace is a search.
pub fn is_url(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    if is_home(trimmed) {
        return true;
    }
    if let Ok(parsed) = Url::parse(trimmed) {
        return parsed.has_host();
    }
    // Bare host form: a dot with something on both sides.
    match trimmed.split_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// Prefix `http://` onto bare host forms; scheme-qualified input passes
/// through untouched.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if Url::parse(trimmed).is_ok() {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Address-bar rendering: blank on the home screen, scheme- and
/// trailing-slash-stripped everywhere else.
pub fn to_url_bar_display(url: &str) -> String {
    if is_home(url) {
        return String::new();
    }
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    stripped.strip_suffix('/').unwrap_or(stripped).to_string()
}

/// Substitute the percent-encoded query into a `%s` search template.
pub fn build_search_url(template: &str, query: &str) -> String {
    let encoded = utf8_percent_encode(query.trim(), QUERY_SET).to_string();
    template.replacen("%s", &encoded, 1)
}

/// DIAL launch target: the TV endpoint with the raw parameter blob appended
/// as the query string, exactly as the casting device sent it.
pub fn dial_url(base: &str, params: &str) -> String {
    format!("{base}?{params}")
}
