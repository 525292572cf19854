//! Data models for the Qube PM purchase-ledger API.

mod invoice;
mod primitives;

pub use invoice::{Invoice, InvoiceBuilder};
pub use primitives::SessionKey;
