//! Whitespace canonicalization and character-class predicates.
//!
//! Whitespace is the form-input set (`is_form_whitespace`), not Rust's
//! `char::is_whitespace`: U+FEFF counts, U+0085 does not. Digits are ASCII
//! `0-9` only.

/// True for the whitespace and line-terminator characters browsers trim
/// from input values: `\t \n \v \f \r`, space, U+00A0, U+1680,
/// U+2000-U+200A, U+2028, U+2029, U+202F, U+205F, U+3000 and U+FEFF.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Remove every whitespace character, wherever it appears.
///
/// Example: `"1234 5678\t90"` -> `"1234567890"`
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|&c| !is_form_whitespace(c)).collect()
}

/// True when the value is empty after trimming surrounding whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim_matches(is_form_whitespace).is_empty()
}

/// True when the value is exactly `len` ASCII digits and nothing else.
pub fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}
