//! Application layer orchestrating the domain rules over the storage ports.
//!
//! `AnticipationEngine` runs the staged eligibility pipeline and produces offers;
//! `Registry` maintains the companies and invoices it reads from.

pub mod eligibility;
pub mod engine;
pub mod registry;
