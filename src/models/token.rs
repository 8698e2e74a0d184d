use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The token a customer receives on login
///
/// The raw token is kept out of `Debug` output so it doesn't end up in logs.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
pub struct CustomerAccessToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl CustomerAccessToken {
    pub fn time_till_expiry(&self) -> Duration {
        self.expires_at - Utc::now()
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

impl fmt::Debug for CustomerAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerAccessToken")
            .field("access_token", &"[redacted]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
