use super::cnpj::Cnpj;
use super::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An outstanding invoice owned by a company.
///
/// `liquid_value` stays `None` until the discount engine attaches the present value.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Invoice {
    pub cnpj: Cnpj,
    pub number: u32,
    pub face_value: Money,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_value: Option<Money>,
}

impl Invoice {
    pub fn new(cnpj: Cnpj, number: u32, face_value: Money, due_date: NaiveDate) -> Self {
        Self {
            cnpj,
            number,
            face_value,
            due_date,
            liquid_value: None,
        }
    }

    /// Whole days from `today` until the due date; negative once overdue.
    pub fn days_to_maturity(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}
