use url::Url;

/// True iff `candidate` parses as an absolute URL whose scheme is http or https.
pub fn is_valid_link(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Derive a display title from a URL's host name.
///
/// A leading `www.` is dropped and the first character is upper-cased.
/// Falls back to the raw input when it does not parse as a URL.
pub fn extract_title_from_url(url: &str) -> String {
    let host = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => return url.to_string(),
        },
        Err(_) => return url.to_string(),
    };

    let host = host.strip_prefix("www.").unwrap_or(&host);
    let mut chars = host.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => url.to_string(),
    }
}
