// fixtures.rs — provides commonly used field values and stores

use cardform::store::FieldStore;

pub const NAME: &str = "Jane Appleseed";
pub const SHORT_NAME: &str = "Jane";
pub const NUMBER: &str = "1234567890123456";
pub const NUMBER_GROUPED: &str = "1234 5678 9012 3456";
pub const NUMBER_15_SPACED: &str = "1234 5678 9012 345";
pub const MONTH: &str = "04";
pub const YEAR: &str = "25";
pub const CVV: &str = "123";

pub fn store_with_number(number: &str) -> FieldStore {
    FieldStore::builder()
        .cardholder_name(SHORT_NAME)
        .card_number(number)
        .exp_month(MONTH)
        .exp_year(YEAR)
        .cvv(CVV)
        .build()
}

pub fn complete_store() -> FieldStore {
    FieldStore::builder()
        .cardholder_name(NAME)
        .card_number(NUMBER)
        .exp_month(MONTH)
        .exp_year(YEAR)
        .cvv(CVV)
        .build()
}
