//! Client entry point for the Qube PM purchase-ledger API.
//!
//! [`QubeClient`] holds the long-lived credentials and performs login to
//! mint an authenticated [`Session`](crate::Session).
//!
//! # Example
//!
//! ```no_run
//! use qube_pm_rs::QubeClient;
//!
//! # async fn example() -> qube_pm_rs::Result<()> {
//! let client = QubeClient::new(
//!     "https://qube.example.com/qubews/",
//!     "username",
//!     "password",
//!     "GROUP",
//! )?;
//!
//! let session = client.get_session().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, PARTNER_PORTAL_URL};
pub use http::{Credentials, QubeClient};
pub(crate) use http::SoapTransport;
