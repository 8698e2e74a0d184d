#![allow(dead_code)]
mod constants;
mod graphql;
mod logs;

pub use app::{spawn_storefront, spawn_storefront_with, TestStorefront};
pub use constants::*;
pub use graphql::*;
pub use logs::CapturedLogs;

use lazy_static::lazy_static;
use serde_json::json;

use storefront_customer::telemetry::{generate_subscriber, init_subscriber};

lazy_static! {
    /// To ensure logs are only outputted in tests when required, by default
    /// tests run with all logs being written to a sink
    ///
    /// In order to see logs during tests run them with:
    /// `TEST_LOG=true cargo test | bunyan`
    pub static ref TRACING: () = {
        let filter = String::from("debug");
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = generate_subscriber("test".into(), filter, std::io::stdout);
            init_subscriber(subscriber).expect("failed to initialise tracing");
        } else {
            let subscriber = generate_subscriber("test".into(), filter, std::io::sink);
            init_subscriber(subscriber).expect("failed to initialise tracing");
        }
    };

    /// The storefront's raw (unhydrated) representation of the test customer
    pub static ref DEFAULT_CUSTOMER: serde_json::Value = {
        json!({
            "id": "gid://shopify/Customer/007",
            "email": DEFAULT_EMAIL,
            "firstName": "James",
            "lastName": "Bond",
            "displayName": "James Bond",
            "phone": "+447700900007",
            "acceptsMarketing": false,
            "createdAt": "2021-01-10T15:22:01Z",
            "updatedAt": "2021-01-12T09:30:00Z",
            "defaultAddress": {
                "id": "gid://shopify/MailingAddress/1",
                "address1": "85 Albert Embankment",
                "address2": null,
                "city": "London",
                "province": null,
                "country": "United Kingdom",
                "zip": "SE1 7TP",
                "firstName": "James",
                "lastName": "Bond",
                "phone": null
            },
            "addresses": {
                "edges": [
                    { "node": { "id": "gid://shopify/MailingAddress/1", "city": "London" } },
                    { "node": { "id": "gid://shopify/MailingAddress/2", "city": "Istanbul" } }
                ]
            }
        })
    };

    pub static ref DEFAULT_CHECKOUT: serde_json::Value = {
        json!({
            "id": DEFAULT_CHECKOUT_ID,
            "webUrl": "https://bazaar.myshopify.com/checkouts/abc123",
            "ready": true,
            "completedAt": null
        })
    };
}
