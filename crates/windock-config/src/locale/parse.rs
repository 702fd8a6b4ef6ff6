use std::collections::HashMap;

/// Parse a `Key="Value"` table.
///
/// Blank lines and lines starting with `#` or `;` are ignored, as are lines
/// without `=`. Surrounding quotes on the value are optional; `\n` and `\"`
/// escapes are expanded. Later duplicates win.
pub fn parse_table(text: &str) -> HashMap<String, String> {
    let mut strings = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        strings.insert(key.to_string(), unescape(unquote(value.trim())));
    }
    strings
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
