//! Card-number display grouping for the live preview.

use crate::constants::CARD_NUMBER_GROUP;

use super::text::strip_whitespace;

/// Strip all whitespace from the raw card number, then separate each run of
/// four characters with a single space. No trailing space.
///
/// Characters are grouped by position whether or not they are digits, and a
/// partial final group is kept as-is. The empty string maps to the empty
/// string; substituting a placeholder is the caller's job.
///
/// Example: `"1234567890123456"` -> `"1234 5678 9012 3456"`
pub fn group_card_number(raw: &str) -> String {
    let chars: Vec<char> = strip_whitespace(raw).chars().collect();
    let mut s = String::with_capacity(chars.len() + chars.len() / CARD_NUMBER_GROUP);
    for (i, group) in chars.chunks(CARD_NUMBER_GROUP).enumerate() {
        if i != 0 {
            s.push(' ');
        }
        s.extend(group);
    }
    s
}
