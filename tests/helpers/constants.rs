pub const DEFAULT_EMAIL: &str = "007@test.com";
pub const DEFAULT_PASSWORD: &str = "l3xSucks!";
pub const DEFAULT_ACCESS_TOKEN: &str = "c5e3b1bd8f6f4e0f9ed7a3a4d9d4f2aa";
pub const DEFAULT_CHECKOUT_ID: &str = "gid://shopify/Checkout/abc123";

pub const STOREFRONT_TOKEN_HEADER: &str = "x-shopify-storefront-access-token";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub static APP_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
