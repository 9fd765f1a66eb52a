use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub fn get_default_datadir() -> PathBuf {
    if let Ok(path) = std::env::var("LINKVAULT_DATA_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(path).join("linkvault");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/linkvault");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("linkvault");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("linkvault");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/linkvault");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("linkvault");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Host name of a URL, or the input unchanged if it does not parse
pub fn extract_domain(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// Cut `text` to `max_len` characters, appending "..." when shortened
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str("...");
    out
}

/// e.g. "Jan 5, 2024"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode the handful of entities `escape_html` produces.
/// `&amp;` goes last so "&amp;lt;" decodes to "&lt;", not "<".
pub fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.example.com/a/b", "www.example.com")]
    #[case("not a url", "not a url")]
    fn test_extract_domain(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract_domain(input), expected);
    }

    #[rstest]
    #[case("short", 10, "short")]
    #[case("exactly10!", 10, "exactly10!")]
    #[case("this is too long", 7, "this is...")]
    #[case("ünïcödé", 3, "ünï...")]
    fn test_truncate_text(#[case] input: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(truncate_text(input, max), expected);
    }

    #[test]
    fn test_format_date() {
        let date: DateTime<Utc> = "2024-01-05T10:00:00Z".parse().unwrap();
        assert_eq!(format_date(&date), "Jan 5, 2024");
    }

    #[rstest]
    #[case("Tom & Jerry", "Tom &amp; Jerry")]
    #[case("<b>\"hi\"</b>", "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;")]
    #[case("it's", "it&#39;s")]
    fn test_escape_unescape(#[case] raw: &str, #[case] escaped: &str) {
        assert_eq!(escape_html(raw), escaped);
        assert_eq!(unescape_html(escaped), raw);
    }

    #[test]
    fn test_unescape_double_encoded() {
        assert_eq!(unescape_html("&amp;lt;"), "&lt;");
    }
}
