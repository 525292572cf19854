//! Invoice model for purchase-ledger postings.

use rust_decimal::Decimal;

use crate::{Error, Result};

/// A purchase-ledger invoice to be posted to the draft register.
///
/// Use [`InvoiceBuilder`] for a convenient way to construct invoices.
///
/// Date fields are passed through to the vendor verbatim, in whatever
/// format the target Qube instance expects; this layer performs no
/// conversion and no XML escaping, so values must be XML-safe.
///
/// Invoice documents cannot be posted directly. A document must be hosted
/// on a web server reachable by Qube and linked via [`invoice_link`]
/// (saved-as name = invoice number).
///
/// [`invoice_link`]: Invoice::invoice_link
///
/// # Example
///
/// ```
/// use qube_pm_rs::Invoice;
/// use rust_decimal_macros::dec;
///
/// let invoice = Invoice::builder()
///     .supplier_ref("SUP001")
///     .invoice_number("INV-2024-001")
///     .invoice_date("2024-01-15")
///     .period_start("2024-01-01")
///     .period_finish("2024-01-31")
///     .prompt_payment_due("2024-02-01")
///     .payment_due("2024-02-15")
///     .nett(dec!(100.00))
///     .vat(dec!(20.00))
///     .gross(dec!(120.00))
///     .vat_code("S")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    /// Supplier reference in the ledger
    pub supplier_ref: String,
    /// Invoice number; also used as the saved-as name of a linked document
    pub invoice_number: String,
    /// Invoice date
    pub invoice_date: String,
    /// Service period start
    pub period_start: String,
    /// Service period finish
    pub period_finish: String,
    /// Prompt payment due date
    pub prompt_payment_due: String,
    /// Payment due date
    pub payment_due: String,
    /// Nett amount
    pub nett: Decimal,
    /// VAT amount
    pub vat: Decimal,
    /// Gross amount
    pub gross: Decimal,
    /// VAT code
    pub vat_code: String,
    /// Link to the externally hosted invoice document, if any
    pub invoice_link: Option<String>,
}

impl Invoice {
    /// Create a builder for a new invoice.
    pub fn builder() -> InvoiceBuilder {
        InvoiceBuilder::default()
    }
}

/// Builder for creating invoices with validation.
///
/// All fields except `invoice_link` are required; [`build`] fails with a
/// validation error naming the first missing field.
///
/// [`build`]: InvoiceBuilder::build
#[derive(Debug, Default, Clone)]
pub struct InvoiceBuilder {
    supplier_ref: Option<String>,
    invoice_number: Option<String>,
    invoice_date: Option<String>,
    period_start: Option<String>,
    period_finish: Option<String>,
    prompt_payment_due: Option<String>,
    payment_due: Option<String>,
    nett: Option<Decimal>,
    vat: Option<Decimal>,
    gross: Option<Decimal>,
    vat_code: Option<String>,
    invoice_link: Option<String>,
}

impl InvoiceBuilder {
    /// Create a new invoice builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supplier reference.
    pub fn supplier_ref(mut self, supplier_ref: impl Into<String>) -> Self {
        self.supplier_ref = Some(supplier_ref.into());
        self
    }

    /// Set the invoice number.
    pub fn invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = Some(invoice_number.into());
        self
    }

    /// Set the invoice date.
    pub fn invoice_date(mut self, invoice_date: impl Into<String>) -> Self {
        self.invoice_date = Some(invoice_date.into());
        self
    }

    /// Set the service period start.
    pub fn period_start(mut self, period_start: impl Into<String>) -> Self {
        self.period_start = Some(period_start.into());
        self
    }

    /// Set the service period finish.
    pub fn period_finish(mut self, period_finish: impl Into<String>) -> Self {
        self.period_finish = Some(period_finish.into());
        self
    }

    /// Set the prompt payment due date.
    pub fn prompt_payment_due(mut self, prompt_payment_due: impl Into<String>) -> Self {
        self.prompt_payment_due = Some(prompt_payment_due.into());
        self
    }

    /// Set the payment due date.
    pub fn payment_due(mut self, payment_due: impl Into<String>) -> Self {
        self.payment_due = Some(payment_due.into());
        self
    }

    /// Set the nett amount.
    pub fn nett(mut self, nett: Decimal) -> Self {
        self.nett = Some(nett);
        self
    }

    /// Set the VAT amount.
    pub fn vat(mut self, vat: Decimal) -> Self {
        self.vat = Some(vat);
        self
    }

    /// Set the gross amount.
    pub fn gross(mut self, gross: Decimal) -> Self {
        self.gross = Some(gross);
        self
    }

    /// Set the VAT code.
    pub fn vat_code(mut self, vat_code: impl Into<String>) -> Self {
        self.vat_code = Some(vat_code.into());
        self
    }

    /// Set the link to the externally hosted invoice document.
    pub fn invoice_link(mut self, invoice_link: impl Into<String>) -> Self {
        self.invoice_link = Some(invoice_link.into());
        self
    }

    /// Build the invoice, validating that all required fields are present.
    pub fn build(self) -> Result<Invoice> {
        fn required<T>(value: Option<T>, name: &str) -> Result<T> {
            value.ok_or_else(|| Error::Validation(format!("invoice field `{name}` is required")))
        }

        Ok(Invoice {
            supplier_ref: required(self.supplier_ref, "supplier_ref")?,
            invoice_number: required(self.invoice_number, "invoice_number")?,
            invoice_date: required(self.invoice_date, "invoice_date")?,
            period_start: required(self.period_start, "period_start")?,
            period_finish: required(self.period_finish, "period_finish")?,
            prompt_payment_due: required(self.prompt_payment_due, "prompt_payment_due")?,
            payment_due: required(self.payment_due, "payment_due")?,
            nett: required(self.nett, "nett")?,
            vat: required(self.vat, "vat")?,
            gross: required(self.gross, "gross")?,
            vat_code: required(self.vat_code, "vat_code")?,
            invoice_link: self.invoice_link.filter(|link| !link.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn complete_builder() -> InvoiceBuilder {
        Invoice::builder()
            .supplier_ref("SUP001")
            .invoice_number("INV-1")
            .invoice_date("2024-01-15")
            .period_start("2024-01-01")
            .period_finish("2024-01-31")
            .prompt_payment_due("2024-02-01")
            .payment_due("2024-02-15")
            .nett(dec!(100))
            .vat(dec!(20))
            .gross(dec!(120))
            .vat_code("S")
    }

    #[test]
    fn test_build_complete_invoice() {
        let invoice = complete_builder().build().unwrap();
        assert_eq!(invoice.supplier_ref, "SUP001");
        assert_eq!(invoice.invoice_link, None);
    }

    #[test]
    fn test_build_rejects_missing_field() {
        let err = Invoice::builder().supplier_ref("SUP001").build().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("invoice_number"));
    }

    #[test]
    fn test_empty_link_treated_as_absent() {
        let invoice = complete_builder().invoice_link("").build().unwrap();
        assert_eq!(invoice.invoice_link, None);

        let invoice = complete_builder()
            .invoice_link("https://docs.example.com/INV-1.pdf")
            .build()
            .unwrap();
        assert_eq!(
            invoice.invoice_link.as_deref(),
            Some("https://docs.example.com/INV-1.pdf")
        );
    }
}
