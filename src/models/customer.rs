use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
pub struct Customer {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub display_name: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub accepts_marketing: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub default_address: Option<MailingAddress>,
    /// Hydrated from the `addresses` connection
    #[serde(default)]
    pub addresses: Vec<MailingAddress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
pub struct MailingAddress {
    pub id: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    /// The customer's name as they'd expect to see it, falling back to the
    /// storefront's display name
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.display_name.clone(),
        }
    }

    /// The default address first, followed by the rest of the address book
    pub fn addresses_by_preference(&self) -> Vec<&MailingAddress> {
        let default_id = self.default_address.as_ref().map(|a| a.id.as_str());
        let mut addresses: Vec<&MailingAddress> = self.default_address.iter().collect();
        addresses.extend(
            self.addresses
                .iter()
                .filter(|address| Some(address.id.as_str()) != default_id),
        );
        addresses
    }
}
