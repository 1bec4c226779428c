use super::cnpj::Cnpj;
use super::company::Company;
use super::invoice::Invoice;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};

#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn store(&self, company: Company) -> Result<()>;
    async fn get(&self, cnpj: &Cnpj) -> Result<Option<Company>>;
    /// Returns `false` when no company was registered under `cnpj`.
    async fn remove(&self, cnpj: &Cnpj) -> Result<bool>;
}

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn store(&self, invoice: Invoice) -> Result<()>;
    async fn get(&self, number: u32) -> Result<Option<Invoice>>;
    /// All invoices owned by `cnpj`, ordered by number.
    async fn find_by_company(&self, cnpj: &Cnpj) -> Result<Vec<Invoice>>;
    /// Invoices owned by `cnpj` among `numbers`, in the order of `numbers`.
    /// Unknown numbers are skipped.
    async fn find_by_numbers(&self, cnpj: &Cnpj, numbers: &[u32]) -> Result<Vec<Invoice>>;
    async fn remove(&self, number: u32) -> Result<bool>;
}

pub type CompanyStoreBox = Box<dyn CompanyStore>;
pub type InvoiceStoreBox = Box<dyn InvoiceStore>;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type ClockBox = Box<dyn Clock>;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
