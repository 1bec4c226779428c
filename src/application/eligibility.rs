//! Ordered validation stages of an anticipation request.
//!
//! Every stage returns `Ok(())` or the first violated rule. The engine applies
//! them in a fixed order and stops at the first failure.

use crate::domain::company::Company;
use crate::domain::credit::{self, MINIMUM_CREDIT_LIMIT};
use crate::domain::invoice::Invoice;
use crate::domain::money::Money;
use crate::error::{FintecError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// A check applied to each resolved invoice.
pub type InvoiceRule = fn(&Invoice, NaiveDate) -> Result<()>;

/// Per-invoice rules, in the order they are evaluated for each invoice.
pub const INVOICE_RULES: [InvoiceRule; 2] = [positive_face_value, matures_after_today];

pub fn reject_duplicates(numbers: &[u32]) -> Result<()> {
    let mut seen = HashSet::with_capacity(numbers.len());
    if numbers.iter().all(|number| seen.insert(number)) {
        Ok(())
    } else {
        Err(FintecError::DuplicateInvoiceSelection)
    }
}

/// Tiered ceiling for `company`, refused when it falls under the absolute minimum.
pub fn credit_ceiling(company: &Company) -> Result<Money> {
    let limit = credit::credit_limit(company.monthly_revenue, company.sector)?;
    if limit < MINIMUM_CREDIT_LIMIT {
        return Err(FintecError::CreditLimitTooLow(limit));
    }
    Ok(limit)
}

pub fn reject_empty(numbers: &[u32]) -> Result<()> {
    if numbers.is_empty() {
        Err(FintecError::EmptySelection)
    } else {
        Ok(())
    }
}

pub fn positive_face_value(invoice: &Invoice, _today: NaiveDate) -> Result<()> {
    if invoice.face_value.is_positive() {
        Ok(())
    } else {
        Err(FintecError::InvalidFaceValue(invoice.number))
    }
}

pub fn matures_after_today(invoice: &Invoice, today: NaiveDate) -> Result<()> {
    if invoice.due_date > today {
        Ok(())
    } else {
        Err(FintecError::ExpiredInvoice(invoice.number))
    }
}

/// Validates the resolved invoice set: non-empty, every invoice passing
/// [`INVOICE_RULES`] in resolution order, and the face total within `ceiling`.
pub fn validate_resolved(invoices: &[Invoice], ceiling: Money, today: NaiveDate) -> Result<()> {
    if invoices.is_empty() {
        return Err(FintecError::NoInvoicesFound);
    }

    for invoice in invoices {
        for rule in INVOICE_RULES {
            rule(invoice, today)?;
        }
    }

    within_ceiling(invoices, ceiling)
}

/// A total that overflows `Decimal` is reported as `Decimal::MAX`.
pub fn within_ceiling(invoices: &[Invoice], ceiling: Money) -> Result<()> {
    let total = invoices
        .iter()
        .try_fold(Money::ZERO, |total, invoice| total.checked_add(invoice.face_value))
        .unwrap_or(Money::new(Decimal::MAX));
    if total > ceiling {
        return Err(FintecError::CreditLimitExceeded {
            total,
            limit: ceiling,
        });
    }
    Ok(())
}
