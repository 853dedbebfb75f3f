//! Per-slot rules. Each returns the single failure for its slot, if any;
//! the blank check always runs first.

use crate::constants::{CARD_NUMBER_DIGITS, CVV_DIGITS, EXP_MONTH_DIGITS, EXP_YEAR_DIGITS};
use crate::error::FieldError;
use crate::utils::{is_blank, is_digits, strip_whitespace};

/// Outcome of one rule: `None` when the slot validates.
pub type Check = Option<FieldError>;

/// `cardholderName`: blank check only.
pub fn cardholder_name(name: &str) -> Check {
    is_blank(name).then_some(FieldError::Blank)
}

/// `cardNumber`: blank, then 16 digits. Format is checked on the canonical
/// form (whitespace removed).
///
/// ```
/// use cardform::FieldError;
/// use cardform::validation::rules::card_number;
///
/// assert_eq!(card_number("1234 5678 9012 3456"), None);
/// assert_eq!(card_number("   "), Some(FieldError::Blank));
/// assert_eq!(card_number("1234"), Some(FieldError::FormatMismatch));
/// ```
pub fn card_number(number: &str) -> Check {
    if is_blank(number) {
        Some(FieldError::Blank)
    } else if !is_digits(&strip_whitespace(number), CARD_NUMBER_DIGITS) {
        Some(FieldError::FormatMismatch)
    } else {
        None
    }
}

/// `expDate`: month and year validated as a pair into one slot, on their
/// raw text.
pub fn expiry(month: &str, year: &str) -> Check {
    if is_blank(month) || is_blank(year) {
        Some(FieldError::Blank)
    } else if !is_digits(month, EXP_MONTH_DIGITS) || !is_digits(year, EXP_YEAR_DIGITS) {
        Some(FieldError::FormatMismatch)
    } else {
        None
    }
}

/// `cvv`: blank, then exactly 3 digits on the raw text.
pub fn cvv(cvv: &str) -> Check {
    if is_blank(cvv) {
        Some(FieldError::Blank)
    } else if !is_digits(cvv, CVV_DIGITS) {
        Some(FieldError::FormatMismatch)
    } else {
        None
    }
}
