use super::cnpj::Cnpj;
use super::money::Money;
use serde::{Deserialize, Serialize};

/// Coarse business classification driving the credit-limit percentages.
///
/// Accepts the legacy numeric codes (`1` = services, `2` = products) on input.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    #[serde(alias = "1")]
    Services,
    #[serde(alias = "2")]
    Products,
}

/// A registered company, identified by its CNPJ.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Company {
    pub cnpj: Cnpj,
    pub name: String,
    pub monthly_revenue: Money,
    pub sector: Sector,
}

impl Company {
    pub fn new(
        cnpj: Cnpj,
        name: impl Into<String>,
        monthly_revenue: Money,
        sector: Sector,
    ) -> Self {
        Self {
            cnpj,
            name: name.into(),
            monthly_revenue,
            sector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_company_deserialization_normalizes_cnpj() {
        let csv = "cnpj,name,monthly_revenue,sector\n11.222.333/0001-81,Acme,60000.00,services";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let company: Company = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(company.cnpj.as_str(), "11222333000181");
        assert_eq!(company.monthly_revenue, Money::new(dec!(60000.00)));
        assert_eq!(company.sector, Sector::Services);
    }

    #[test]
    fn test_sector_accepts_numeric_codes() {
        assert_eq!(serde_json::from_str::<Sector>("\"1\"").unwrap(), Sector::Services);
        assert_eq!(serde_json::from_str::<Sector>("\"2\"").unwrap(), Sector::Products);
        assert_eq!(serde_json::from_str::<Sector>("\"products\"").unwrap(), Sector::Products);
        assert!(serde_json::from_str::<Sector>("\"3\"").is_err());
    }
}
