//! Color markup translation.
//!
//! Configuration text marks colors with `&` followed by a code character
//! (`&a`, `&l`, ...). Presentation text uses the section sign instead.

/// Marker used in configuration files.
pub const MARKUP_CHAR: char = '&';

/// Marker understood by clients.
pub const COLOR_CHAR: char = '§';

/// Valid code characters (lower-case form).
const COLOR_CODES: &str = "0123456789abcdefklmnorx";

/// Replaces every `&<code>` pair with `§<code>`.
///
/// Codes are matched case-insensitively and emitted lower-case. A marker that
/// is not followed by a valid code is left untouched.
pub fn translate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == MARKUP_CHAR
            && let Some(&next) = chars.peek()
        {
            let code = next.to_ascii_lowercase();
            if COLOR_CODES.contains(code) {
                out.push(COLOR_CHAR);
                out.push(code);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Translates each line independently.
pub fn translate_lines(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| translate(line)).collect()
}
