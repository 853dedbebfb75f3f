// cardform/src/types.rs
//! Field keys, error slots and the session state.

use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// FieldName - one of the five raw inputs held by a `FieldStore`
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum FieldName {
    /// `cardholderName`
    #[display(fmt = "cardholderName")]
    CardholderName,
    /// `cardNumber`
    #[display(fmt = "cardNumber")]
    CardNumber,
    /// `expMonth`
    #[display(fmt = "expMonth")]
    ExpMonth,
    /// `expYear`
    #[display(fmt = "expYear")]
    ExpYear,
    /// `cvv`
    #[display(fmt = "cvv")]
    Cvv,
}

impl FieldName {
    /// All inputs in form order.
    pub const ALL: [FieldName; 5] = [
        FieldName::CardholderName,
        FieldName::CardNumber,
        FieldName::ExpMonth,
        FieldName::ExpYear,
        FieldName::Cvv,
    ];

    /// The error slot this input reports into. Month and year share `expDate`.
    pub fn error_key(&self) -> ErrorKey {
        match self {
            FieldName::CardholderName => ErrorKey::CardholderName,
            FieldName::CardNumber => ErrorKey::CardNumber,
            FieldName::ExpMonth | FieldName::ExpYear => ErrorKey::ExpDate,
            FieldName::Cvv => ErrorKey::Cvv,
        }
    }

    /// Input hint shown while the field is empty.
    pub fn hint(&self) -> &'static str {
        use crate::constants::*;
        match self {
            FieldName::CardholderName => HINT_CARDHOLDER_NAME,
            FieldName::CardNumber => HINT_CARD_NUMBER,
            FieldName::ExpMonth => HINT_EXP_MONTH,
            FieldName::ExpYear => HINT_EXP_YEAR,
            FieldName::Cvv => HINT_CVV,
        }
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|f| f.to_string() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// ErrorKey - an error slot in the `ErrorMap`
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ErrorKey {
    /// `cardholderName`
    #[display(fmt = "cardholderName")]
    CardholderName,
    /// `cardNumber`
    #[display(fmt = "cardNumber")]
    CardNumber,
    /// `expDate`, shared by month and year
    #[display(fmt = "expDate")]
    ExpDate,
    /// `cvv`
    #[display(fmt = "cvv")]
    Cvv,
}

impl ErrorKey {
    /// All slots in form order.
    pub const ALL: [ErrorKey; 4] = [
        ErrorKey::CardholderName,
        ErrorKey::CardNumber,
        ErrorKey::ExpDate,
        ErrorKey::Cvv,
    ];

    /// Inputs whose validity this slot describes.
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            ErrorKey::CardholderName => &[FieldName::CardholderName],
            ErrorKey::CardNumber => &[FieldName::CardNumber],
            ErrorKey::ExpDate => &[FieldName::ExpMonth, FieldName::ExpYear],
            ErrorKey::Cvv => &[FieldName::Cvv],
        }
    }

    /// Form label for the input group owning this slot.
    pub fn label(&self) -> &'static str {
        use crate::constants::*;
        match self {
            ErrorKey::CardholderName => LABEL_CARDHOLDER_NAME,
            ErrorKey::CardNumber => LABEL_CARD_NUMBER,
            ErrorKey::ExpDate => LABEL_EXP_DATE,
            ErrorKey::Cvv => LABEL_CVV,
        }
    }
}

impl FromStr for ErrorKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKey::ALL
            .iter()
            .copied()
            .find(|k| k.to_string() == s)
            .ok_or_else(|| Error::UnknownErrorKey(s.to_string()))
    }
}

/// SessionState - editable form vs. post-submission confirmation
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    /// Form shown, accepting edits.
    #[default]
    Editing,
    /// Confirmation shown.
    Submitted,
}

impl SessionState {
    /// Forward edge: Editing -> Submitted, only when validation came back clean.
    pub fn after_submit(self, valid: bool) -> Self {
        match (self, valid) {
            (SessionState::Editing, true) => SessionState::Submitted,
            (state, _) => state,
        }
    }

    /// Backward edge: Submitted -> Editing, unconditional.
    pub fn after_continue(self) -> Self {
        match self {
            SessionState::Submitted => SessionState::Editing,
            SessionState::Editing => SessionState::Editing,
        }
    }

    /// True in the confirmation view.
    pub fn is_submitted(&self) -> bool {
        matches!(self, SessionState::Submitted)
    }
}
