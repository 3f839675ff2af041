use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Issuing company identity shown in the header and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub name: String,
    pub tagline: String,
    pub registration_number: String,
    pub tax_id: String,
    pub website: String,
    pub email: String,
    pub phone: String,
}

/// Postal address printed on the header address line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

impl CompanyAddress {
    /// Single-line rendering: "street | city, state | country".
    pub fn as_line(&self) -> String {
        format!(
            "{} | {}, {} | {}",
            self.street, self.city, self.state, self.country
        )
    }
}

/// Bank transfer details for the payment instructions panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDetails {
    pub name: String,
    pub account_name: String,
    pub account_number: String,
    pub bank_code: String,
    pub swift_code: String,
}

/// Static issuer configuration consumed by every render.
///
/// Supplied once at call time and never re-read per render; the layout engine
/// treats it as a pure lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company: CompanyIdentity,
    pub address: CompanyAddress,
    pub bank: BankDetails,
}

impl CompanyProfile {
    /// Load a profile from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for CompanyProfile {
    /// Built-in demo profile, used when the caller supplies none.
    fn default() -> Self {
        CompanyProfile {
            company: CompanyIdentity {
                name: "MERIDIAN CONSULTING".to_string(),
                tagline: "Enterprise Consulting & Professional Development".to_string(),
                registration_number: "CRN-2024-001234".to_string(),
                tax_id: "GST-12AB-34CD-5678".to_string(),
                website: "www.meridian.example".to_string(),
                email: "billing@meridian.example".to_string(),
                phone: "+234-800-000-0000".to_string(),
            },
            address: CompanyAddress {
                street: "Plot 234, Lekki-Epe Expressway".to_string(),
                city: "Lagos".to_string(),
                state: "Lagos".to_string(),
                country: "Nigeria".to_string(),
                postal_code: "106104".to_string(),
            },
            bank: BankDetails {
                name: "First Bank of Nigeria".to_string(),
                account_name: "MERIDIAN CONSULTING LIMITED".to_string(),
                account_number: "3123456789".to_string(),
                bank_code: "011".to_string(),
                swift_code: "FBNGNGLA".to_string(),
            },
        }
    }
}
