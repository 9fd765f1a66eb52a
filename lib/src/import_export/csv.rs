//! Minimal CSV line handling shared by the CSV importer and exporter.

/// Split one CSV line into trimmed fields.
///
/// A `"` toggles the in-quotes state and commas inside quotes do not split.
/// Inside a quoted field a doubled `""` yields one literal quote.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Wrap a field in double quotes, doubling any quotes inside it
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Non-blank CSV rows of `content`.
///
/// Rows end at LF or CRLF outside quotes; a line break inside a quoted
/// field stays part of the row.
pub fn records(content: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in content.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            '\n' if !in_quotes => {
                if current.ends_with('\r') {
                    current.pop();
                }
                rows.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    rows.push(current);

    rows.retain(|row| !row.trim().is_empty());
    rows
}

/// Non-blank lines of `content`, split on LF or CRLF
pub fn non_blank_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| !line.trim().is_empty())
}
