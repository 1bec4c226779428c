use crate::error::{FintecError, Result};
use serde::Serialize;
use std::io::Write;

/// Writes command results as pretty-printed JSON, one document per call.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value).map_err(std::io::Error::from)?;
        writeln!(self.writer)?;
        self.writer.flush().map_err(FintecError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cnpj::Cnpj;
    use crate::domain::money::Money;
    use crate::domain::offer::{Offer, OfferItem};
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_offer() {
        let offer = Offer {
            company_name: "Acme".to_string(),
            cnpj: Cnpj::parse("11222333000181").unwrap(),
            credit_limit: Money::new(dec!(33000.00)),
            invoices: vec![OfferItem {
                number: 1,
                face_value: Money::new(dec!(1000)),
                liquid_value: Money::new(dec!(955.57)),
            }],
            total_face_value: Money::new(dec!(1000)),
            total_liquid_value: Money::new(dec!(955.57)),
        };

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write(&offer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["cnpj"], "11222333000181");
        assert_eq!(parsed["invoices"][0]["liquid_value"], "955.57");
        assert_eq!(parsed["credit_limit"], "33000.00");
    }
}
