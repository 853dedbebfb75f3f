// cardform/src/constants.rs
//! Common constants used across the crate

/// Advisory message for a value that is empty after trimming
pub const MSG_BLANK: &str = "Can't be blank";

/// Advisory message for a value with the wrong character pattern or length
pub const MSG_FORMAT: &str = "Wrong format, numbers only";

/// Digits in a card number, after whitespace is removed
pub const CARD_NUMBER_DIGITS: usize = 16;
/// Digits in the expiry month
pub const EXP_MONTH_DIGITS: usize = 2;
/// Digits in the expiry year
pub const EXP_YEAR_DIGITS: usize = 2;
/// Digits in the security code
pub const CVV_DIGITS: usize = 3;

/// Card number display group width
pub const CARD_NUMBER_GROUP: usize = 4;

/// Preview card number when the raw value is the empty string
pub const PLACEHOLDER_CARD_NUMBER: &str = "0000 0000 0000 0000";
/// Preview cardholder name when the raw value is the empty string
pub const PLACEHOLDER_CARDHOLDER_NAME: &str = "JANE APPLESEED";
/// Preview expiry month when the raw value is the empty string
pub const PLACEHOLDER_EXP_MONTH: &str = "00";
/// Preview expiry year when the raw value is the empty string
pub const PLACEHOLDER_EXP_YEAR: &str = "00";
/// Preview security code when the raw value is the empty string
pub const PLACEHOLDER_CVV: &str = "000";

/// Form label for the cardholder name input
pub const LABEL_CARDHOLDER_NAME: &str = "CARDHOLDER NAME";
/// Form label for the card number input
pub const LABEL_CARD_NUMBER: &str = "CARD NUMBER";
/// Form label shared by the expiry month and year inputs
pub const LABEL_EXP_DATE: &str = "EXP. DATE (MM/YY)";
/// Form label for the security code input
pub const LABEL_CVV: &str = "CVC";

/// Hint for an empty cardholder name input
pub const HINT_CARDHOLDER_NAME: &str = "e.g. Jane Appleseed";
/// Hint for an empty card number input
pub const HINT_CARD_NUMBER: &str = "e.g. 1234 5678 9123 0000";
/// Hint for an empty expiry month input
pub const HINT_EXP_MONTH: &str = "MM";
/// Hint for an empty expiry year input
pub const HINT_EXP_YEAR: &str = "YY";
/// Hint for an empty security code input
pub const HINT_CVV: &str = "e.g. 123";

/// Submit button copy
pub const BUTTON_CONFIRM: &str = "Confirm";
/// Button that dismisses the confirmation view
pub const BUTTON_CONTINUE: &str = "Continue";
/// Confirmation view heading
pub const CONFIRMATION_TITLE: &str = "THANK YOU!";
/// Confirmation view body text
pub const CONFIRMATION_BODY: &str = "We've added your card details";
