//! Songbook markup around the transliteration engine: `{y}…{/y}` line tags
//! and `---[Verse:N]---` markers extracted from numeric line prefixes.

/// The 1-2 digit verse prefix, when the line starts with one followed by
/// `.` or whitespace.
pub fn verse_number(text: &str) -> Option<&str> {
    let digits = text.chars().take_while(char::is_ascii_digit).count();
    if !(1..=2).contains(&digits) {
        return None;
    }
    match text[digits..].chars().next() {
        Some(c) if c == '.' || c.is_whitespace() => Some(&text[..digits]),
        _ => None,
    }
}

pub fn verse_tag(number: &str) -> String {
    format!("---[Verse:{number}]---")
}

fn with_markup_tag(text: &str) -> String {
    format!("{{y}}{text}{{/y}}")
}

/// Wrap a source line for the songbook format. Blank lines pass through;
/// verse-numbered lines get a preceding verse tag line.
pub fn format_source_line(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    match verse_number(text) {
        Some(number) => format!("{}\r\n{}", verse_tag(number), with_markup_tag(text)),
        None => with_markup_tag(text),
    }
}

/// Strip the verse prefix from converted text and capitalize its first
/// letter. The digit prefix survives conversion untouched, so this runs on
/// the engine's output.
pub fn format_converted_line(text: &str) -> String {
    let stripped = match verse_number(text) {
        Some(number) => {
            let after = &text[number.len()..];
            // Skip the delimiter itself.
            let delim = after.chars().next().map_or(0, char::len_utf8);
            &after[delim..]
        }
        None => text,
    };
    capitalize(stripped.trim())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
