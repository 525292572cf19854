//! Basic login example.
//!
//! Logs in, lists users visible to the account, and logs out again.
//!
//! Run with: cargo run --example basic_login

use qube_pm_rs::{QubeClient, Session};

#[tokio::main]
async fn main() -> qube_pm_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get endpoint and credentials from environment variables
    let base_url = std::env::var("QUBE_PM_API_URL")
        .expect("QUBE_PM_API_URL environment variable required");
    let username = std::env::var("QUBE_PM_USERNAME")
        .expect("QUBE_PM_USERNAME environment variable required");
    let password = std::env::var("QUBE_PM_PASSWORD")
        .expect("QUBE_PM_PASSWORD environment variable required");
    let group = std::env::var("QUBE_PM_GROUP")
        .expect("QUBE_PM_GROUP environment variable required");

    println!("Connecting to {base_url}...");

    let client = QubeClient::new(base_url, username, password, group)?;
    let session = client.get_session().await?;

    println!("Session established (key {})", session.key());

    // "?" matches every user the account can see
    let users = session.get_users(Session::WILDCARD, false).await?;
    println!("User lookup returned HTTP {}:", users.status_code());
    println!("{}", users.text());

    // Release the report cursor, then the session
    session.close_report().await?;
    session.logout().await?;

    println!("Logged out.");
    Ok(())
}
