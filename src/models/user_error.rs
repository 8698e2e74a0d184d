use serde::{Deserialize, Serialize};

use crate::CustomerError;

/// A validation error the storefront reported inside a mutation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Vec<String>>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CustomerError {
    /// The individual user errors behind a [`CustomerError::UserErrors`]
    pub fn user_errors(&self) -> Option<Vec<UserError>> {
        match self {
            Self::UserErrors(raw) => serde_json::from_str(raw).ok(),
            _ => None,
        }
    }
}
