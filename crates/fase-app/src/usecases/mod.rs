//! Use cases, one file per user-visible action.

pub mod password_reset;
pub mod register_account;
pub mod submission;

pub use password_reset::{ConfirmPasswordReset, RequestPasswordReset};
pub use register_account::RegisterAccount;
pub use submission::{
    BeginCardPayment, PaymentRedirect, SubmitApplication, SubmitForInvoice, SubscriptionRedirect,
};
