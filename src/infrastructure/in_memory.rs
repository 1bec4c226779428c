use crate::domain::cnpj::Cnpj;
use crate::domain::company::Company;
use crate::domain::invoice::Invoice;
use crate::domain::ports::{CompanyStore, InvoiceStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for companies.
///
/// Clones share the same underlying map.
#[derive(Default, Clone)]
pub struct InMemoryCompanyStore {
    companies: Arc<RwLock<HashMap<Cnpj, Company>>>,
}

impl InMemoryCompanyStore {
    /// Creates a new, empty in-memory company store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyStore for InMemoryCompanyStore {
    async fn store(&self, company: Company) -> Result<()> {
        let mut companies = self.companies.write().await;
        companies.insert(company.cnpj.clone(), company);
        Ok(())
    }

    async fn get(&self, cnpj: &Cnpj) -> Result<Option<Company>> {
        let companies = self.companies.read().await;
        Ok(companies.get(cnpj).cloned())
    }

    async fn remove(&self, cnpj: &Cnpj) -> Result<bool> {
        let mut companies = self.companies.write().await;
        Ok(companies.remove(cnpj).is_some())
    }
}

/// A thread-safe in-memory store for invoices, keyed by invoice number.
#[derive(Default, Clone)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<HashMap<u32, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Creates a new, empty in-memory invoice store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn store(&self, invoice: Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        invoices.insert(invoice.number, invoice);
        Ok(())
    }

    async fn get(&self, number: u32) -> Result<Option<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.get(&number).cloned())
    }

    async fn find_by_company(&self, cnpj: &Cnpj) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        let mut owned: Vec<Invoice> = invoices
            .values()
            .filter(|invoice| &invoice.cnpj == cnpj)
            .cloned()
            .collect();
        owned.sort_by_key(|invoice| invoice.number);
        Ok(owned)
    }

    async fn find_by_numbers(&self, cnpj: &Cnpj, numbers: &[u32]) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(numbers
            .iter()
            .filter_map(|number| invoices.get(number))
            .filter(|invoice| &invoice.cnpj == cnpj)
            .cloned()
            .collect())
    }

    async fn remove(&self, number: u32) -> Result<bool> {
        let mut invoices = self.invoices.write().await;
        Ok(invoices.remove(&number).is_some())
    }
}
