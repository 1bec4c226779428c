//! Domain model: identifiers, money, companies, invoices, and the pure
//! credit and discount rules, plus the ports the application layer consumes.

pub mod cnpj;
pub mod company;
pub mod credit;
pub mod discount;
pub mod invoice;
pub mod money;
pub mod offer;
pub mod ports;
