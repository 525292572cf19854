//! Authenticated sessions and their purchase-ledger operations.
//!
//! A [`Session`] represents one authenticated conversation with the Qube
//! PM service: reference lookups, fund and heading lookups, invoice
//! posting, report release and logout.

mod session;

pub use session::{FundQuery, Session};
