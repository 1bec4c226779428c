use crate::domain::cnpj::Cnpj;
use crate::domain::company::Company;
use crate::domain::invoice::Invoice;
use crate::domain::ports::{CompanyStore, InvoiceStore};
use crate::error::{FintecError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Column Family for company records, keyed by the 14-digit CNPJ.
pub const CF_COMPANIES: &str = "companies";
/// Column Family for invoices, keyed by the big-endian invoice number.
pub const CF_INVOICES: &str = "invoices";

/// A persistent store implementation using RocksDB.
///
/// Companies and invoices live in separate Column Families, values encoded as JSON.
/// `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path`, creating missing column families.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_companies = ColumnFamilyDescriptor::new(CF_COMPANIES, Options::default());
        let cf_invoices = ColumnFamilyDescriptor::new(CF_INVOICES, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_companies, cf_invoices])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| FintecError::lookup(format!("{name} column family not found")))
    }

    fn put<T: Serialize>(&self, cf_name: &str, key: &[u8], value: &T) -> Result<()> {
        let cf = self.cf(cf_name)?;
        let bytes = serde_json::to_vec(value).map_err(FintecError::lookup)?;
        self.db.put_cf(cf, key, bytes)?;
        Ok(())
    }

    fn fetch<T: DeserializeOwned>(&self, cf_name: &str, key: &[u8]) -> Result<Option<T>> {
        let cf = self.cf(cf_name)?;
        match self.db.get_cf(cf, key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes).map_err(FintecError::lookup)?)),
            None => Ok(None),
        }
    }

    fn delete(&self, cf_name: &str, key: &[u8]) -> Result<bool> {
        let cf = self.cf(cf_name)?;
        // Only the key is checked; the value is not decoded.
        if self.db.get_pinned_cf(cf, key)?.is_none() {
            return Ok(false);
        }
        self.db.delete_cf(cf, key)?;
        Ok(true)
    }
}

#[async_trait]
impl CompanyStore for RocksDBStore {
    async fn store(&self, company: Company) -> Result<()> {
        self.put(CF_COMPANIES, company.cnpj.as_str().as_bytes(), &company)
    }

    async fn get(&self, cnpj: &Cnpj) -> Result<Option<Company>> {
        self.fetch(CF_COMPANIES, cnpj.as_str().as_bytes())
    }

    async fn remove(&self, cnpj: &Cnpj) -> Result<bool> {
        self.delete(CF_COMPANIES, cnpj.as_str().as_bytes())
    }
}

#[async_trait]
impl InvoiceStore for RocksDBStore {
    async fn store(&self, invoice: Invoice) -> Result<()> {
        self.put(CF_INVOICES, &invoice.number.to_be_bytes(), &invoice)
    }

    async fn get(&self, number: u32) -> Result<Option<Invoice>> {
        self.fetch(CF_INVOICES, &number.to_be_bytes())
    }

    async fn find_by_company(&self, cnpj: &Cnpj) -> Result<Vec<Invoice>> {
        let cf = self.cf(CF_INVOICES)?;

        // Big-endian keys iterate in ascending invoice number.
        let mut invoices = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            let invoice: Invoice = serde_json::from_slice(&value).map_err(FintecError::lookup)?;
            if &invoice.cnpj == cnpj {
                invoices.push(invoice);
            }
        }

        Ok(invoices)
    }

    async fn find_by_numbers(&self, cnpj: &Cnpj, numbers: &[u32]) -> Result<Vec<Invoice>> {
        let mut invoices = Vec::with_capacity(numbers.len());
        for number in numbers {
            if let Some(invoice) = self.fetch::<Invoice>(CF_INVOICES, &number.to_be_bytes())?
                && &invoice.cnpj == cnpj
            {
                invoices.push(invoice);
            }
        }
        Ok(invoices)
    }

    async fn remove(&self, number: u32) -> Result<bool> {
        self.delete(CF_INVOICES, &number.to_be_bytes())
    }
}
