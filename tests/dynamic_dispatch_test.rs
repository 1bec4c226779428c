use chrono::NaiveDate;
use fintec::domain::cnpj::Cnpj;
use fintec::domain::company::{Company, Sector};
use fintec::domain::invoice::Invoice;
use fintec::domain::money::Money;
use fintec::domain::ports::{CompanyStoreBox, InvoiceStoreBox};
use fintec::infrastructure::in_memory::{InMemoryCompanyStore, InMemoryInvoiceStore};
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_stores_as_trait_objects() {
    let company_store: CompanyStoreBox = Box::new(InMemoryCompanyStore::new());
    let invoice_store: InvoiceStoreBox = Box::new(InMemoryInvoiceStore::new());

    let cnpj = Cnpj::parse("11222333000181").unwrap();
    let company = Company::new(cnpj.clone(), "Acme", Money::new(dec!(60000)), Sector::Services);
    let invoice = Invoice::new(
        cnpj.clone(),
        1,
        Money::new(dec!(1000)),
        NaiveDate::from_ymd_opt(2025, 2, 9).unwrap(),
    );

    // Verify Send + Sync by spawning tasks
    let lookup = cnpj.clone();
    let company_handle = tokio::spawn(async move {
        company_store.store(company).await.unwrap();
        company_store.get(&lookup).await.unwrap().unwrap()
    });

    let invoice_handle = tokio::spawn(async move {
        invoice_store.store(invoice).await.unwrap();
        invoice_store.find_by_numbers(&cnpj, &[1]).await.unwrap()
    });

    let retrieved_company = company_handle.await.unwrap();
    assert_eq!(retrieved_company.name, "Acme");

    let retrieved_invoices = invoice_handle.await.unwrap();
    assert_eq!(retrieved_invoices.len(), 1);
}
