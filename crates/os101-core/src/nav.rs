//! Navigation targets between the registration views, and the fixed
//! outbound links the summary view shows.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Registration entry point; also the recovery action of the summary view.
pub const REGISTER_PATH: &str = "/opensource101";
pub const SUMMARY_PATH: &str = "/opensource101/summary";
pub const PROJECTS_PATH: &str = "/opensource101/projects";

/// Query parameter carrying the registration identifier.
pub const REGISTRATION_ID_PARAM: &str = "registrationId";

/// Community channels linked from the summary view.
pub const COMMUNITY_LINKS: &[(&str, &str)] = &[
    ("WhatsApp community", "https://chat.whatsapp.com/COcY1cBocEzJxRJUo2JObp"),
    ("Instagram", "https://www.instagram.com/iste.hit.sc"),
    ("LinkedIn", "https://www.linkedin.com/company/iste-hit-sc/"),
];

/// Characters `encodeURIComponent` leaves alone, besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one URI component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Where a successful submission navigates to.
pub fn summary_target(registration_id: &str) -> String {
    format!(
        "{SUMMARY_PATH}?{REGISTRATION_ID_PARAM}={}",
        encode_component(registration_id)
    )
}

/// Extract `registrationId` from a query string.
///
/// Accepts a bare query (`a=b&c=d`), one with a leading `?`, or a full path
/// such as the output of [`summary_target`]. The first occurrence wins; an
/// empty value counts as missing.
pub fn registration_id_from_query(input: &str) -> Option<String> {
    let query = match input.split_once('?') {
        Some((_, q)) => q,
        None => input,
    };
    let query = query.split('#').next().unwrap_or("");

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| form_decode(key) == REGISTRATION_ID_PARAM)
        .map(|(_, value)| form_decode(value))
        .filter(|value| !value.is_empty())
}

fn form_decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
