use crate::domain::money::Money;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FintecError {
    #[error("Invalid CNPJ: '{0}'")]
    InvalidIdentifier(String),
    #[error("Company with CNPJ {0} not found")]
    CompanyNotFound(String),
    #[error("Company with CNPJ {0} is already registered")]
    CompanyAlreadyRegistered(String),
    #[error("Company name is required")]
    MissingCompanyName,
    #[error("Monthly revenue must be positive")]
    InvalidRevenue,

    #[error("Invoice number must be greater than zero")]
    InvalidInvoiceNumber,
    #[error("Invoice {0} is already registered")]
    InvoiceAlreadyRegistered(u32),
    #[error("Invoice {0} not found")]
    InvoiceNotFound(u32),

    #[error("Invoice selection contains duplicate numbers")]
    DuplicateInvoiceSelection,
    #[error("Monthly revenue of {0} is insufficient for anticipation (must exceed 10000)")]
    InsufficientRevenue(Money),
    #[error("Credit limit of {0} is below the minimum required for anticipation")]
    CreditLimitTooLow(Money),
    #[error("Invoice selection is empty")]
    EmptySelection,
    #[error("No invoices found for the given numbers")]
    NoInvoicesFound,
    #[error("Invoice {0} has an invalid face value")]
    InvalidFaceValue(u32),
    #[error("Invoice {0} is past its due date")]
    ExpiredInvoice(u32),
    #[error("Invoice total {total} exceeds credit limit {limit}")]
    CreditLimitExceeded { total: Money, limit: Money },
    #[error("Discounting invoice {0} overflowed")]
    DiscountOverflow(u32),
    #[error("Invoice {0} has not been discounted")]
    UndiscountedInvoice(u32),

    #[error("Lookup failure: {0}")]
    LookupFailure(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FintecError {
    pub fn lookup<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::LookupFailure(err.into())
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for FintecError {
    fn from(err: rocksdb::Error) -> Self {
        Self::lookup(err)
    }
}

pub type Result<T> = std::result::Result<T, FintecError>;
