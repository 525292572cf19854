//! Integration tests against a real Qube PM endpoint.
//!
//! These are ignored by default; run them against a partner-portal or test
//! instance with:
//!
//! ```text
//! QUBE_PM_API_URL=... QUBE_PM_USERNAME=... QUBE_PM_PASSWORD=... \
//! QUBE_PM_GROUP=... cargo test --test live_tests -- --ignored --test-threads=1
//! ```
//!
//! Single-threaded because the server holds one report cursor per session
//! and lookups on a shared account interfere.

use std::env;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

use qube_pm_rs::{QubeClient, Session};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn test_client() -> QubeClient {
    init_logging();
    let base_url = env::var("QUBE_PM_API_URL").expect("QUBE_PM_API_URL must be set");
    let username = env::var("QUBE_PM_USERNAME").expect("QUBE_PM_USERNAME must be set");
    let password = env::var("QUBE_PM_PASSWORD").expect("QUBE_PM_PASSWORD must be set");
    let group = env::var("QUBE_PM_GROUP").expect("QUBE_PM_GROUP must be set");
    QubeClient::new(base_url, username, password, group).expect("failed to create client")
}

#[tokio::test]
#[ignore = "requires QUBE_PM_* credentials and a reachable endpoint"]
async fn test_login_logout_round_trip() {
    let client = test_client();

    let session = client.get_session().await.expect("login should succeed");

    let response = session.logout().await.expect("logout should succeed");
    assert_eq!(response.status_code(), 200);
    assert!(response.contains("LogoutResponse"));
}

#[tokio::test]
#[ignore = "requires QUBE_PM_* credentials and a reachable endpoint"]
async fn test_get_users_returns_success_marker() {
    let client = test_client();

    client
        .with_session(|session| async move {
            let response = session.get_users(Session::WILDCARD, false).await?;
            assert_eq!(response.status_code(), 200);
            assert!(response.contains(r#"<user-lookup success="true">"#));
            Ok(())
        })
        .await
        .expect("lookup should succeed");
}

#[tokio::test]
#[ignore = "requires QUBE_PM_* credentials and a reachable endpoint"]
async fn test_close_report_after_lookup() {
    let client = test_client();

    client
        .with_session(|session| async move {
            session.get_properties(Session::WILDCARD, false).await?;

            let response = session.close_report().await?;
            assert_eq!(response.status_code(), 200);
            assert!(response.contains("CloseReportResponse"));

            // the cursor is released; a second lookup is allowed again
            let response = session.get_users(Session::WILDCARD, false).await?;
            assert_eq!(response.status_code(), 200);
            Ok(())
        })
        .await
        .expect("close_report flow should succeed");
}

#[tokio::test]
#[ignore = "requires QUBE_PM_* credentials and a reachable endpoint"]
async fn test_bad_credentials_carry_vendor_error() {
    init_logging();
    let base_url = env::var("QUBE_PM_API_URL").expect("QUBE_PM_API_URL must be set");
    let client = QubeClient::new(base_url, "no-such-user", "wrong", "NOGROUP").unwrap();

    let err = client.get_session().await.unwrap_err();
    assert!(err.is_auth_error(), "expected auth error, got {err:?}");
    assert!(err.to_string().contains("ErrorCode["));
}
