//! # qube-pm-rs
//!
//! A Rust client for the Qube Property Management purchase-ledger SOAP API.
//!
//! This crate covers the purchase-ledger surface of the Qube web service:
//! authentication, user/property/fund/heading lookups, and invoice posting
//! to the draft register.
//!
//! ## Features
//!
//! - **Authentication**: client-side session keys, login validation with
//!   vendor error codes, scoped session acquisition with guaranteed logout
//! - **Lookups**: wildcard-capable user and property lookups, fund and
//!   fund-heading queries
//! - **Invoice posting**: header-level journal postings to the draft
//!   register, with optional externally hosted document links
//! - **Raw responses**: the vendor marks success inside the payload, so
//!   operations hand back status code and body for the caller to interpret
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qube_pm_rs::{QubeClient, Session};
//!
//! #[tokio::main]
//! async fn main() -> qube_pm_rs::Result<()> {
//!     let client = QubeClient::new(
//!         "https://qube.example.com/qubews/",
//!         "username",
//!         "password",
//!         "GROUP",
//!     )?;
//!
//!     let session = client.get_session().await?;
//!
//!     // List every property the account can see
//!     let properties = session.get_properties(Session::WILDCARD, false).await?;
//!     println!("{}", properties.text());
//!
//!     // Release the report cursor before the next lookup
//!     session.close_report().await?;
//!
//!     session.logout().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Posting an invoice
//!
//! ```rust,no_run
//! use qube_pm_rs::{FundQuery, Invoice, QubeClient};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> qube_pm_rs::Result<()> {
//!     let client = QubeClient::new("https://qube.example.com/qubews/", "u", "p", "G")?;
//!
//!     let invoice = Invoice::builder()
//!         .supplier_ref("SUP001")
//!         .invoice_number("INV-2024-001")
//!         .invoice_date("2024-01-15")
//!         .period_start("2024-01-01")
//!         .period_finish("2024-01-31")
//!         .prompt_payment_due("2024-02-01")
//!         .payment_due("2024-02-15")
//!         .nett(dec!(100.00))
//!         .vat(dec!(20.00))
//!         .gross(dec!(120.00))
//!         .vat_code("S")
//!         .invoice_link("https://docs.example.com/INV-2024-001.pdf")
//!         .build()?;
//!
//!     client
//!         .with_session(|session| async move {
//!             let response = session
//!                 .post_invoice(&invoice, "BLOCKA", "USER1", "FH-9")
//!                 .await?;
//!             assert!(response.is_success());
//!             Ok(())
//!         })
//!         .await
//! }
//! ```
//!
//! ## Caveats
//!
//! - Values are interpolated into the vendor's XML verbatim; this layer
//!   performs no escaping, so callers must supply XML-safe values.
//! - The server holds one report cursor per session; call
//!   [`Session::close_report`] between lookups/posts and do not issue
//!   concurrent operations on one session.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod soap;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, Credentials, QubeClient, PARTNER_PORTAL_URL};
pub use error::{Error, Result};
pub use models::{Invoice, InvoiceBuilder, SessionKey};
pub use session::{FundQuery, Session};
pub use soap::{SoapAction, SoapResponse};

/// Prelude module for convenient imports.
///
/// ```rust
/// use qube_pm_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{ClientConfig, Credentials, QubeClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Invoice, InvoiceBuilder, SessionKey};
    pub use crate::session::{FundQuery, Session};
    pub use crate::soap::{SoapAction, SoapResponse};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_keys_per_login_attempt() {
        // A shared default key across sessions is a defect; keys must be
        // minted per attempt.
        assert_ne!(SessionKey::generate(), SessionKey::generate());
    }

    #[test]
    fn test_action_strings_are_vendor_uris() {
        for action in [
            SoapAction::Login,
            SoapAction::Logout,
            SoapAction::CloseReport,
            SoapAction::QubeProcess,
        ] {
            assert!(action.as_str().starts_with(soap::WEB_NS));
        }
    }
}
