use super::eligibility;
use crate::domain::cnpj::Cnpj;
use crate::domain::discount;
use crate::domain::offer::Offer;
use crate::domain::ports::{ClockBox, CompanyStoreBox, InvoiceStoreBox};
use crate::error::{FintecError, Result};
use tracing::{debug, info};

/// Computes receivables-anticipation offers.
///
/// `AnticipationEngine` owns the lookup ports and a clock. It keeps no state
/// between requests, so concurrent calls need no coordination.
pub struct AnticipationEngine {
    company_store: CompanyStoreBox,
    invoice_store: InvoiceStoreBox,
    clock: ClockBox,
}

impl AnticipationEngine {
    /// Creates a new `AnticipationEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `company_store` - Lookup for registered companies.
    /// * `invoice_store` - Lookup for outstanding invoices.
    /// * `clock` - Source of the date invoices are discounted against.
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

    /// Validates the selection and returns the discounted offer.
    ///
    /// Stops at the first violated rule; no partial offer is ever returned.
    /// The only suspension points are the company and invoice lookups.
    pub async fn anticipate(&self, cnpj: &str, numbers: &[u32]) -> Result<Offer> {
        let today = self.clock.today();
        let cnpj = Cnpj::parse(cnpj)?;

        let company = self
            .company_store
            .get(&cnpj)
            .await?
            .ok_or_else(|| FintecError::CompanyNotFound(cnpj.to_string()))?;

        eligibility::reject_duplicates(numbers)?;
        let ceiling = eligibility::credit_ceiling(&company)?;
        debug!(%cnpj, %ceiling, "credit ceiling computed");
        eligibility::reject_empty(numbers)?;

        let invoices = self.invoice_store.find_by_numbers(&cnpj, numbers).await?;
        debug!(%cnpj, requested = numbers.len(), resolved = invoices.len(), "invoices resolved");
        eligibility::validate_resolved(&invoices, ceiling, today)?;

        let discounted = discount::discount(invoices, today)?;
        let offer = Offer::assemble(&company, &discounted, ceiling)?;

        info!(
            %cnpj,
            invoices = offer.invoices.len(),
            total_face_value = %offer.total_face_value,
            total_liquid_value = %offer.total_liquid_value,
            "anticipation offer computed"
        );
        Ok(offer)
    }
}
