use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";
pub const NEXT_PARAM_NAME: &str = "next";

/// Escapes for the `next` login parameter. `/` stays literal.
const NEXT_PARAM: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_next(path_and_query: &str) -> String {
    utf8_percent_encode(path_and_query, NEXT_PARAM).to_string()
}

/// Reads `key` from a raw `?a=b&c=d` query string, percent-decoded.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            percent_decode_str(&v.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned()
        })
}

/// Absolute path on this origin. Browsers read `\` as `/` and strip tabs and
/// newlines, so neither may appear anywhere in the target.
fn is_same_site_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/' | '\\'))
        && !path
            .chars()
            .any(|c| c == '\\' || c.is_ascii_control() || c.is_whitespace())
}

/// Post-login destination. Only same-site absolute paths are honoured.
pub fn safe_next_target(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if is_same_site_path(path) && !path.starts_with("/login") => path.to_string(),
        _ => DEFAULT_AFTER_LOGIN.to_string(),
    }
}
