//! Customer address payloads.
//!
//! These mirror the customer-record service's wire shapes; the backend never
//! interprets them, it only serializes them onto the forwarded request.

use serde::{Deserialize, Serialize};

/// A postal address as the customer-record service stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// Address id (absent for new addresses).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Address line 1.
    pub address_1: String,
    /// Address line 2 (apt, suite, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    /// City.
    pub city: String,
    /// State/province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Country code (e.g., "US").
    pub country_code: String,
    /// Postal/ZIP code.
    pub postal_code: String,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether this is the default shipping address.
    #[serde(default)]
    pub is_default_shipping: bool,
    /// Whether this is the default billing address.
    #[serde(default)]
    pub is_default_billing: bool,
}

impl Address {
    /// Create a minimal address.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address_1: impl Into<String>,
        city: impl Into<String>,
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            company: None,
            address_1: address_1.into(),
            address_2: None,
            city: city.into(),
            province: None,
            country_code: country_code.into(),
            postal_code: postal_code.into(),
            phone: None,
            is_default_shipping: false,
            is_default_billing: false,
        }
    }
}

/// Address payload forwarded on an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressUpsert {
    /// Addresses to create or update (those with ids are updated).
    pub addresses: Vec<Address>,
}

impl AddressUpsert {
    /// Wrap addresses for forwarding.
    pub fn new(addresses: Vec<Address>) -> Self {
        Self { addresses }
    }
}

/// The customer record as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer id.
    pub id: String,
    /// Email.
    pub email: String,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The customer's addresses after the write.
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// Deletion acknowledgement from the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedAddress {
    /// Id of the deleted address.
    pub id: String,
    /// Whether the delete was applied.
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_serializes_without_empty_optionals() {
        let address = Address::new("Amy", "Chen", "1 Pike St", "Seattle", "US", "98101");
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["first_name"], "Amy");
        assert!(json.get("id").is_none());
        assert!(json.get("company").is_none());
    }

    #[test]
    fn test_customer_record_tolerates_missing_addresses() {
        let record: CustomerRecord =
            serde_json::from_str(r#"{"id":"cus_1","email":"amy@example.com"}"#).unwrap();
        assert!(record.addresses.is_empty());
        assert_eq!(record.id, "cus_1");
    }

    #[test]
    fn test_upsert_roundtrip() {
        let upsert = AddressUpsert::new(vec![Address::new(
            "Amy", "Chen", "1 Pike St", "Seattle", "US", "98101",
        )]);
        let json = serde_json::to_string(&upsert).unwrap();
        let back: AddressUpsert = serde_json::from_str(&json).unwrap();
        assert_eq!(back.addresses.len(), 1);
        assert_eq!(back.addresses[0].city, "Seattle");
    }
}
