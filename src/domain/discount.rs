//! Present-value discounting of invoices.
//!
//! `liquid = round(face / (1 + rate)^(days / 30), 2)` with a monthly rate of 4.65%.
//! The whole-period part of the exponent is computed exactly with `powu`; only the
//! fractional remainder goes through `powd`.

use super::invoice::Invoice;
use super::money::Money;
use crate::error::{FintecError, Result};
use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

pub const MONTHLY_RATE: Decimal = dec!(0.0465);
pub const DAYS_PER_PERIOD: i64 = 30;

/// `(1 + MONTHLY_RATE) ^ (days / 30)`, or `None` on overflow.
pub fn discount_factor(days: i64) -> Option<Decimal> {
    if days < 0 {
        return None;
    }

    let base = Decimal::ONE + MONTHLY_RATE;
    let periods = u64::try_from(days / DAYS_PER_PERIOD).ok()?;
    let whole = base.checked_powu(periods)?;

    let remainder = days % DAYS_PER_PERIOD;
    if remainder == 0 {
        return Some(whole);
    }

    let fraction = Decimal::from(remainder) / Decimal::from(DAYS_PER_PERIOD);
    whole.checked_mul(base.checked_powd(fraction)?)
}

/// Present value of `face_value` maturing in `days`, rounded to cents.
pub fn liquid_value(face_value: Money, days: i64) -> Option<Money> {
    let factor = discount_factor(days)?;
    let present = face_value.value().checked_div(factor)?;
    Some(Money::new(present).round_cents())
}

/// Attaches a liquid value to every invoice, preserving order.
///
/// Expects pre-validated invoices; an invoice not strictly in the future
/// still fails with [`FintecError::ExpiredInvoice`] rather than producing a value.
pub fn discount(invoices: Vec<Invoice>, today: NaiveDate) -> Result<Vec<Invoice>> {
    invoices
        .into_iter()
        .map(|mut invoice| {
            let days = invoice.days_to_maturity(today);
            if days <= 0 {
                return Err(FintecError::ExpiredInvoice(invoice.number));
            }
            let liquid = liquid_value(invoice.face_value, days)
                .ok_or(FintecError::DiscountOverflow(invoice.number))?;
            invoice.liquid_value = Some(liquid);
            Ok(invoice)
        })
        .collect()
}
