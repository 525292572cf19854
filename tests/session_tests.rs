//! Offline behavioral tests for session construction and validation.
//!
//! These tests never reach a real Qube endpoint: validation failures are
//! raised before any network I/O, and the cases that do dispatch point at
//! an unroutable local port and assert on the transport error.

use qube_pm_rs::{Error, FundQuery, QubeClient, Session, SessionKey};

/// An endpoint nothing listens on; connections are refused immediately.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/qubews/";

fn dead_session() -> Session {
    Session::new(SessionKey::generate(), DEAD_ENDPOINT).unwrap()
}

#[tokio::test]
async fn test_get_fund_without_identifying_reference_fails_before_network() {
    let session = dead_session();

    // No identifying field at all
    let err = session.get_fund(&FundQuery::new()).await.unwrap_err();
    assert!(err.is_validation(), "expected validation error, got {err:?}");

    // A description alone is insufficient
    let err = session
        .get_fund(&FundQuery::new().description("Reserve fund"))
        .await
        .unwrap_err();
    assert!(err.is_validation(), "expected validation error, got {err:?}");
}

#[tokio::test]
async fn test_get_fund_with_any_identifying_reference_reaches_transport() {
    let session = dead_session();

    for query in [
        FundQuery::new().property_ref("BLOCKA"),
        FundQuery::new().fund_uid("F-1"),
        FundQuery::new().owner_ref("OWN1"),
    ] {
        // Validation passes; the refused connection proves the request
        // was actually dispatched.
        let err = session.get_fund(&query).await.unwrap_err();
        assert!(
            matches!(err, Error::Http(_)),
            "expected transport error, got {err:?}"
        );
    }
}

#[tokio::test]
async fn test_transport_errors_propagate_unwrapped() {
    let session = dead_session();
    for result in [
        session.get_users(Session::WILDCARD, false).await,
        session.close_report().await,
        session.logout().await,
    ] {
        assert!(matches!(result, Err(Error::Http(_))));
    }
}

#[tokio::test]
async fn test_get_session_surfaces_transport_failure() {
    let client = QubeClient::new(DEAD_ENDPOINT, "user", "pass", "GROUP").unwrap();
    let err = client.get_session().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[test]
fn test_session_direct_constructor_binds_key_and_endpoint() {
    let key = SessionKey::new("0c5ad33c-5cf4-4a53-9de2-05b0f47510f1");
    let session = Session::new(key.clone(), "https://qube.example.com/qubews/").unwrap();
    assert_eq!(session.key(), &key);
    assert_eq!(session.base_url(), "https://qube.example.com/qubews/");
}

#[test]
fn test_session_rejects_invalid_endpoint() {
    let result = Session::new(SessionKey::generate(), "qubews");
    assert!(matches!(result, Err(Error::UrlParse(_))));
}
