//! Brazilian company tax identifier (CNPJ): normalization and mod-11 checksum.

use crate::error::FintecError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CNPJ_LENGTH: usize = 14;

const FIRST_DIGIT_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_DIGIT_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Strips every non-digit character (dots, slashes, dashes, whitespace).
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Validates a pre-stripped identifier: exactly 14 ASCII digits whose last
/// two digits match the weighted mod-11 check digits.
pub fn is_valid(cnpj: &str) -> bool {
    let bytes = cnpj.as_bytes();
    if bytes.len() != CNPJ_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let digits: Vec<u32> = bytes.iter().map(|b| u32::from(b - b'0')).collect();
    let first = check_digit(&digits[..12], &FIRST_DIGIT_WEIGHTS);
    let second = check_digit(&digits[..13], &SECOND_DIGIT_WEIGHTS);

    digits[12] == first && digits[13] == second
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// A normalized, checksum-valid CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Normalizes `raw` and validates the result.
    pub fn parse(raw: &str) -> Result<Self, FintecError> {
        let digits = normalize(raw);
        if is_valid(&digits) {
            Ok(Self(digits))
        } else {
            Err(FintecError::InvalidIdentifier(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Cnpj {
    type Error = FintecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
