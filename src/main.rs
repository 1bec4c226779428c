use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fintec::application::engine::AnticipationEngine;
use fintec::application::registry::Registry;
use fintec::domain::company::Company;
use fintec::domain::invoice::Invoice;
use fintec::domain::ports::{
    ClockBox, CompanyStoreBox, FixedClock, InvoiceStoreBox, SystemClock,
};
use fintec::error::FintecError;
use fintec::infrastructure::in_memory::{InMemoryCompanyStore, InMemoryInvoiceStore};
use fintec::interfaces::csv::record_reader::RecordReader;
use fintec::interfaces::json::writer::JsonWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "FINTEC_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Companies CSV to register before running the command
    #[arg(long)]
    companies: Option<PathBuf>,

    /// Invoices CSV to register before running the command
    #[arg(long)]
    invoices: Option<PathBuf>,

    /// Date to evaluate maturities against (YYYY-MM-DD); defaults to the local date
    #[arg(long, env = "FINTEC_TODAY")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute an anticipation offer for the selected invoices
    Anticipate {
        /// Company CNPJ, punctuation allowed
        #[arg(long)]
        cnpj: String,

        /// Invoice numbers, space or comma separated
        #[arg(value_delimiter = ',')]
        numbers: Vec<u32>,
    },
    /// Show a registered company
    Company { cnpj: String },
    /// List the invoices of a company
    Invoices { cnpj: String },
    /// Delete a registered company
    RemoveCompany { cnpj: String },
    /// Delete an invoice by number
    RemoveInvoice { number: u32 },
}

/// Registry company store, engine company store, registry invoice store, engine invoice store.
type Stores = (CompanyStoreBox, CompanyStoreBox, InvoiceStoreBox, InvoiceStoreBox);

fn clock(today: Option<NaiveDate>) -> ClockBox {
    match today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}

#[cfg(feature = "storage-rocksdb")]
fn open_stores(db_path: Option<&Path>) -> Result<Stores> {
    use fintec::infrastructure::rocksdb::RocksDBStore;

    if let Some(db_path) = db_path {
        let store = RocksDBStore::open(db_path).into_diagnostic()?;
        return Ok((
            Box::new(store.clone()),
            Box::new(store.clone()),
            Box::new(store.clone()),
            Box::new(store),
        ));
    }
    Ok(in_memory_stores())
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_stores(db_path: Option<&Path>) -> Result<Stores> {
    if db_path.is_some() {
        warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(in_memory_stores())
}

fn in_memory_stores() -> Stores {
    let companies = InMemoryCompanyStore::new();
    let invoices = InMemoryInvoiceStore::new();
    (
        Box::new(companies.clone()),
        Box::new(companies),
        Box::new(invoices.clone()),
        Box::new(invoices),
    )
}

async fn seed(
    registry: &Registry,
    companies: Option<&Path>,
    invoices: Option<&Path>,
) -> Result<()> {
    if let Some(path) = companies {
        let file = File::open(path).into_diagnostic()?;
        for record in RecordReader::new(file).records::<Company>() {
            match record {
                Ok(company) => {
                    if let Err(e) = registry.register_company(company).await {
                        warn!("Error registering company: {e}");
                    }
                }
                Err(e) => warn!("Error reading company: {e}"),
            }
        }
    }

    if let Some(path) = invoices {
        let file = File::open(path).into_diagnostic()?;
        for record in RecordReader::new(file).records::<Invoice>() {
            match record {
                Ok(invoice) => {
                    if let Err(e) = registry.register_invoice(invoice).await {
                        warn!("Error registering invoice: {e}");
                    }
                }
                Err(e) => warn!("Error reading invoice: {e}"),
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (registry_companies, engine_companies, registry_invoices, engine_invoices) =
        open_stores(cli.db_path.as_deref())?;
    let registry = Registry::new(registry_companies, registry_invoices, clock(cli.today));
    let engine = AnticipationEngine::new(engine_companies, engine_invoices, clock(cli.today));

    seed(&registry, cli.companies.as_deref(), cli.invoices.as_deref()).await?;

    let stdout = io::stdout();
    let mut writer = JsonWriter::new(stdout.lock());

    match cli.command {
        Command::Anticipate { cnpj, numbers } => {
            let offer = engine.anticipate(&cnpj, &numbers).await.into_diagnostic()?;
            writer.write(&offer).into_diagnostic()?;
        }
        Command::Company { cnpj } => {
            let company = registry
                .find_company(&cnpj)
                .await
                .into_diagnostic()?
                .ok_or_else(|| FintecError::CompanyNotFound(cnpj.clone()))
                .into_diagnostic()?;
            writer.write(&company).into_diagnostic()?;
        }
        Command::Invoices { cnpj } => {
            let invoices = registry.list_invoices(&cnpj).await.into_diagnostic()?;
            writer.write(&invoices).into_diagnostic()?;
        }
        Command::RemoveCompany { cnpj } => {
            registry.remove_company(&cnpj).await.into_diagnostic()?;
        }
        Command::RemoveInvoice { number } => {
            registry.remove_invoice(number).await.into_diagnostic()?;
        }
    }

    Ok(())
}
