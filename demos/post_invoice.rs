//! Invoice posting example.
//!
//! Resolves the fund heading for a property and posts a header-level
//! invoice to the draft register, releasing the session on every exit
//! path via scoped acquisition.
//!
//! Run with: cargo run --example post_invoice

use qube_pm_rs::{Invoice, QubeClient};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> qube_pm_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("QUBE_PM_API_URL")
        .expect("QUBE_PM_API_URL environment variable required");
    let username = std::env::var("QUBE_PM_USERNAME")
        .expect("QUBE_PM_USERNAME environment variable required");
    let password = std::env::var("QUBE_PM_PASSWORD")
        .expect("QUBE_PM_PASSWORD environment variable required");
    let group = std::env::var("QUBE_PM_GROUP")
        .expect("QUBE_PM_GROUP environment variable required");

    let property_ref = std::env::var("QUBE_PM_PROPERTY").unwrap_or_else(|_| "BLOCKA".into());
    let user_id = std::env::var("QUBE_PM_USER_ID").unwrap_or_else(|_| "USER1".into());

    let invoice = Invoice::builder()
        .supplier_ref("SUP001")
        .invoice_number("INV-2024-001")
        .invoice_date("2024-01-15")
        .period_start("2024-01-01")
        .period_finish("2024-01-31")
        .prompt_payment_due("2024-02-01")
        .payment_due("2024-02-15")
        .nett(dec!(100.00))
        .vat(dec!(20.00))
        .gross(dec!(120.00))
        .vat_code("S")
        .invoice_link("https://docs.example.com/INV-2024-001.pdf")
        .build()?;

    let client = QubeClient::new(base_url, username, password, group)?;

    client
        .with_session(|session| async move {
            // Resolve the fund heading the posting will land under
            let headings = session
                .get_fund_heading(&property_ref, "Service Charge")
                .await?;
            println!("Heading lookup response:\n{}", headings.text());

            // In a real integration the heading unique id is parsed out of
            // the lookup response; it is fixed here for demonstration.
            let fund_heading_uid = "FH-9";

            session.close_report().await?;

            let response = session
                .post_invoice(&invoice, &property_ref, &user_id, fund_heading_uid)
                .await?;

            println!(
                "Posted to the draft register, HTTP {}:\n{}",
                response.status_code(),
                response.text()
            );
            Ok(())
        })
        .await
}
