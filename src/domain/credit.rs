//! Tiered credit-limit policy.
//!
//! | monthly revenue      | services | products |
//! |----------------------|----------|----------|
//! | <= 10,000            | rejected | rejected |
//! | (10,000, 50,000]     | 50%      | 50%      |
//! | (50,000, 100,000]    | 55%      | 60%      |
//! | > 100,000            | 60%      | 65%      |

use super::company::Sector;
use super::money::Money;
use crate::error::{FintecError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Revenue at or below this amount is not eligible for anticipation.
pub const REVENUE_FLOOR: Decimal = dec!(10000);
pub const MID_TIER_START: Decimal = dec!(50000);
pub const UPPER_TIER_START: Decimal = dec!(100000);

/// Absolute floor applied to the computed ceiling, independent of the tiers.
pub const MINIMUM_CREDIT_LIMIT: Money = Money::new(dec!(5000));

/// Fraction of monthly revenue a company may anticipate.
pub fn credit_rate(monthly_revenue: Money, sector: Sector) -> Result<Decimal> {
    let revenue = monthly_revenue.value();

    let rate = if revenue <= REVENUE_FLOOR {
        return Err(FintecError::InsufficientRevenue(monthly_revenue));
    } else if revenue <= MID_TIER_START {
        dec!(0.50)
    } else if revenue <= UPPER_TIER_START {
        match sector {
            Sector::Services => dec!(0.55),
            Sector::Products => dec!(0.60),
        }
    } else {
        match sector {
            Sector::Services => dec!(0.60),
            Sector::Products => dec!(0.65),
        }
    };

    Ok(rate)
}

/// Maximum aggregate face value a company may anticipate.
pub fn credit_limit(monthly_revenue: Money, sector: Sector) -> Result<Money> {
    let rate = credit_rate(monthly_revenue, sector)?;
    Ok(Money::new(monthly_revenue.value() * rate))
}
