mod checkout;
mod customer;
mod token;
mod user_error;

pub use checkout::{Checkout, CheckoutId};
pub use customer::{Customer, MailingAddress};
pub use token::CustomerAccessToken;
pub use user_error::UserError;
