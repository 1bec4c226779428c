use super::cnpj::Cnpj;
use super::company::Company;
use super::invoice::Invoice;
use super::money::Money;
use crate::error::{FintecError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OfferItem {
    pub number: u32,
    pub face_value: Money,
    pub liquid_value: Money,
}

/// The advisory anticipation offer returned to the caller.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Offer {
    pub company_name: String,
    pub cnpj: Cnpj,
    pub credit_limit: Money,
    pub invoices: Vec<OfferItem>,
    pub total_face_value: Money,
    pub total_liquid_value: Money,
}

impl Offer {
    /// Builds the offer from already discounted invoices.
    ///
    /// Totals are plain sums of the per-invoice values; no further rounding.
    pub fn assemble(company: &Company, invoices: &[Invoice], credit_limit: Money) -> Result<Self> {
        let items = invoices
            .iter()
            .map(|invoice| {
                let liquid_value = invoice
                    .liquid_value
                    .ok_or(FintecError::UndiscountedInvoice(invoice.number))?;
                Ok(OfferItem {
                    number: invoice.number,
                    face_value: invoice.face_value,
                    liquid_value,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total_face_value: Money = items.iter().map(|item| item.face_value).sum();
        let total_liquid_value: Money = items.iter().map(|item| item.liquid_value).sum();

        Ok(Self {
            company_name: company.name.clone(),
            cnpj: company.cnpj.clone(),
            credit_limit,
            invoices: items,
            total_face_value,
            total_liquid_value,
        })
    }
}
