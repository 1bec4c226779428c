#![allow(dead_code)]

use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const TODAY: &str = "2025-01-10";
pub const ACME: &str = "11.222.333/0001-81";
pub const GLOBEX: &str = "12345678000195";

/// `cnpj, name, monthly_revenue, sector` rows under a header.
pub fn companies_csv(rows: &[[&str; 4]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "cnpj,name,monthly_revenue,sector")?;
    for row in rows {
        writeln!(file, "{}", row.join(","))?;
    }
    file.flush()?;
    Ok(file)
}

/// `cnpj, number, face_value, due_date` rows under a header.
pub fn invoices_csv(rows: &[[&str; 4]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "cnpj,number,face_value,due_date")?;
    for row in rows {
        writeln!(file, "{}", row.join(","))?;
    }
    file.flush()?;
    Ok(file)
}

/// Acme (services, revenue 60000) and Globex (products, revenue 150000)
/// with invoices maturing 30 days after [`TODAY`].
pub fn default_fixtures() -> Result<(NamedTempFile, NamedTempFile), Error> {
    let companies = companies_csv(&[
        ["11222333000181", "Acme", "60000", "services"],
        [GLOBEX, "Globex", "150000", "products"],
    ])?;
    let invoices = invoices_csv(&[
        ["11222333000181", "1", "10000", "2025-02-09"],
        ["11222333000181", "2", "15000", "2025-02-09"],
        ["11222333000181", "3", "15000", "2025-02-09"],
        [GLOBEX, "10", "1000", "2025-02-09"],
    ])?;
    Ok((companies, invoices))
}
