use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The storefront's opaque identifier for a checkout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutId(String);

impl CheckoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CheckoutId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CheckoutId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for CheckoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
pub struct Checkout {
    pub id: CheckoutId,
    pub web_url: String,
    #[serde(default)]
    pub ready: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Checkout {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
