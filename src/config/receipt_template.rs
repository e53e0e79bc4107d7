//! Receipt template loading from `receipt_template.toml`.
//!
//! The template decides which business details appear in the receipt header,
//! which line-item columns are printed and what goes into the footer. Any
//! section or field missing from the file falls back to the built-in default.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the template file, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "receipt_template.toml";

/// Complete receipt template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptTemplate {
    /// Business identity printed in the header
    pub business_info: BusinessInfo,
    /// Which line-item columns to render
    pub columns: ColumnVisibility,
    /// Terms and notes printed at the bottom
    pub footer: Footer,
}

/// Business identity block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessInfo {
    /// Business name, used as the receipt title
    pub name: String,
    /// Postal address, may span several lines
    pub address: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email address
    pub email: String,
    /// Public website
    pub website: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "Cabinet Shop".to_string(),
            address: "123 Workshop Lane\nSpringfield".to_string(),
            phone: "(555) 010-0100".to_string(),
            email: "orders@cabinetshop.example".to_string(),
            website: "www.cabinetshop.example".to_string(),
        }
    }
}

/// Column visibility flags for the line-item table.
///
/// The whole table is only rendered when `space_name` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnVisibility {
    /// Space (room) column, also gates the table itself
    pub space_name: bool,
    /// Product column
    pub product_type: bool,
    /// Material column
    pub material_name: bool,
    /// Dimensions column
    pub dimensions: bool,
    /// Price column
    pub price: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            space_name: true,
            product_type: true,
            material_name: true,
            dimensions: true,
            price: true,
        }
    }
}

/// Footer text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Terms and conditions, may span several lines
    pub terms_and_conditions: String,
    /// Closing note
    pub notes: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            terms_and_conditions: "Payment is due within 14 days of the receipt date.\n\
                                   Deposits are non-refundable once production has started."
                .to_string(),
            notes: "Thank you for your business!".to_string(),
        }
    }
}

/// Loads a receipt template from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or is not valid TOML.
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<ReceiptTemplate> {
    let path_ref = path.as_ref();
    debug!("Loading receipt template from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read receipt template {}: {e}", path_ref.display()),
    })?;

    parse_template(&contents)
}

/// Parses a receipt template from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the text is not valid TOML for a template.
pub fn parse_template(contents: &str) -> Result<ReceiptTemplate> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse receipt template: {e}"),
    })
}

/// Resolves the template the server should use.
///
/// If `RECEIPT_TEMPLATE_PATH` is set the file must exist and parse. Otherwise
/// `receipt_template.toml` is used when present, and the built-in default when
/// it is not.
pub fn load_template_from_env() -> Result<ReceiptTemplate> {
    if let Ok(path) = std::env::var("RECEIPT_TEMPLATE_PATH") {
        info!("Using receipt template from RECEIPT_TEMPLATE_PATH: {}", path);
        return load_template(path);
    }

    if Path::new(DEFAULT_TEMPLATE_PATH).exists() {
        info!("Using receipt template {}", DEFAULT_TEMPLATE_PATH);
        return load_template(DEFAULT_TEMPLATE_PATH);
    }

    info!("No receipt template file found, using built-in default");
    Ok(ReceiptTemplate::default())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_template() {
        let toml_str = r#"
            [business_info]
            name = "Oak & Pine Cabinetry"
            address = "1 Mill Road\nPortland, OR"
            phone = "555-0101"
            email = "hello@oakpine.example"
            website = "oakpine.example"

            [columns]
            space_name = true
            product_type = false
            material_name = true
            dimensions = false
            price = true

            [footer]
            terms_and_conditions = "Net 14"
            notes = "Thanks!"
        "#;

        let template = parse_template(toml_str).unwrap();
        assert_eq!(template.business_info.name, "Oak & Pine Cabinetry");
        assert_eq!(template.business_info.address, "1 Mill Road\nPortland, OR");
        assert!(template.columns.space_name);
        assert!(!template.columns.product_type);
        assert!(!template.columns.dimensions);
        assert_eq!(template.footer.notes, "Thanks!");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let template = parse_template(
            r#"
            [columns]
            price = false
            "#,
        )
        .unwrap();

        assert_eq!(template.business_info, BusinessInfo::default());
        assert_eq!(template.footer, Footer::default());
        assert!(template.columns.space_name);
        assert!(!template.columns.price);
    }

    #[test]
    fn test_parse_invalid_template() {
        let result = parse_template("[columns]\nprice = \"sometimes\"");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_template("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
