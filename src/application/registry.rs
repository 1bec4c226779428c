use crate::domain::cnpj::Cnpj;
use crate::domain::company::Company;
use crate::domain::invoice::Invoice;
use crate::domain::ports::{ClockBox, CompanyStoreBox, InvoiceStoreBox};
use crate::error::{FintecError, Result};
use tracing::debug;

/// Registration and lookup of companies and their invoices.
///
/// Identifiers arriving as raw strings are normalized and checksum-validated
/// before any store is touched.
pub struct Registry {
    company_store: CompanyStoreBox,
    invoice_store: InvoiceStoreBox,
    clock: ClockBox,
}

impl Registry {
    pub fn new(
        company_store: CompanyStoreBox,
        invoice_store: InvoiceStoreBox,
        clock: ClockBox,
    ) -> Self {
        Self {
            company_store,
            invoice_store,
            clock,
        }
    }

    pub async fn register_company(&self, company: Company) -> Result<()> {
        validate_company(&company)?;

        if self.company_store.get(&company.cnpj).await?.is_some() {
            return Err(FintecError::CompanyAlreadyRegistered(company.cnpj.to_string()));
        }

        debug!(cnpj = %company.cnpj, "registering company");
        self.company_store.store(company).await
    }

    pub async fn update_company(&self, company: Company) -> Result<()> {
        if self.company_store.get(&company.cnpj).await?.is_none() {
            return Err(FintecError::CompanyNotFound(company.cnpj.to_string()));
        }

        validate_company(&company)?;
        self.company_store.store(company).await
    }

    pub async fn remove_company(&self, cnpj: &str) -> Result<()> {
        let cnpj = Cnpj::parse(cnpj)?;
        if self.company_store.remove(&cnpj).await? {
            Ok(())
        } else {
            Err(FintecError::CompanyNotFound(cnpj.to_string()))
        }
    }

    pub async fn find_company(&self, cnpj: &str) -> Result<Option<Company>> {
        if cnpj.trim().is_empty() {
            return Err(FintecError::InvalidIdentifier(cnpj.to_string()));
        }
        let cnpj = Cnpj::parse(cnpj)?;
        self.company_store.get(&cnpj).await
    }

    /// Stores a new invoice for an existing company. Any liquid value is discarded.
    pub async fn register_invoice(&self, mut invoice: Invoice) -> Result<()> {
        if self.company_store.get(&invoice.cnpj).await?.is_none() {
            return Err(FintecError::CompanyNotFound(invoice.cnpj.to_string()));
        }
        if invoice.number == 0 {
            return Err(FintecError::InvalidInvoiceNumber);
        }
        if !invoice.face_value.is_positive() {
            return Err(FintecError::InvalidFaceValue(invoice.number));
        }
        if invoice.due_date <= self.clock.today() {
            return Err(FintecError::ExpiredInvoice(invoice.number));
        }
        if self.invoice_store.get(invoice.number).await?.is_some() {
            return Err(FintecError::InvoiceAlreadyRegistered(invoice.number));
        }

        invoice.liquid_value = None;
        debug!(cnpj = %invoice.cnpj, number = invoice.number, "registering invoice");
        self.invoice_store.store(invoice).await
    }

    pub async fn list_invoices(&self, cnpj: &str) -> Result<Vec<Invoice>> {
        let cnpj = Cnpj::parse(cnpj)?;
        self.invoice_store.find_by_company(&cnpj).await
    }

    pub async fn remove_invoice(&self, number: u32) -> Result<()> {
        if self.invoice_store.remove(number).await? {
            Ok(())
        } else {
            Err(FintecError::InvoiceNotFound(number))
        }
    }
}

fn validate_company(company: &Company) -> Result<()> {
    if company.name.trim().is_empty() {
        return Err(FintecError::MissingCompanyName);
    }
    if !company.monthly_revenue.is_positive() {
        return Err(FintecError::InvalidRevenue);
    }
    Ok(())
}
