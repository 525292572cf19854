//! SOAP transport and the main client.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use std::future::Future;
use url::Url;

use crate::models::SessionKey;
use crate::session::Session;
use crate::soap::{self, body, LoginStatus, SoapAction, SoapResponse};
use crate::{Error, Result};

use super::config::ClientConfig;

/// Long-lived credentials for the Qube PM service.
///
/// The password is held as a [`SecretString`] and redacted from `Debug`
/// output.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
    group: String,
}

impl Credentials {
    /// Create a new set of credentials.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            group: group.into(),
        }
    }

    /// The account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The Qube group the account belongs to.
    pub fn group(&self) -> &str {
        &self.group
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("group", &self.group)
            .finish()
    }
}

/// Shared request dispatch for [`QubeClient`] and [`Session`].
///
/// Both components wrap body fragments in the SOAP envelope and POST them
/// to the same endpoint; this helper is composed into each rather than
/// shared through inheritance-style layering.
#[derive(Clone)]
pub(crate) struct SoapTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl SoapTransport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Wrap `body` in the envelope and POST it with the operation's
    /// SOAPAction. Non-200 statuses are returned to the caller, not raised.
    pub(crate) async fn send(&self, action: SoapAction, body: &str) -> Result<SoapResponse> {
        let envelope = soap::envelope(body);
        tracing::debug!(action = action.as_str(), "dispatching SOAP request");

        let response = self
            .http
            .post(self.base_url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("text/xml; charset=utf-8"))
            .header("xmlns", HeaderValue::from_static(soap::XMLNS_HEADER))
            .header("SOAPAction", HeaderValue::from_static(action.as_str()))
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), "received SOAP response");
        Ok(SoapResponse::new(status, text))
    }
}

/// The main client for the Qube PM purchase-ledger API.
///
/// Holds long-lived credentials and mints authenticated [`Session`]s.
///
/// # Example
///
/// ```no_run
/// use qube_pm_rs::{QubeClient, Session};
///
/// # async fn example() -> qube_pm_rs::Result<()> {
/// let client = QubeClient::new(
///     "https://qube.example.com/qubews/",
///     "username",
///     "password",
///     "GROUP",
/// )?;
///
/// let session = client.get_session().await?;
/// let users = session.get_users(Session::WILDCARD, false).await?;
/// println!("{}", users.text());
/// session.logout().await?;
/// # Ok(())
/// # }
/// ```
pub struct QubeClient {
    transport: SoapTransport,
    credentials: Credentials,
}

impl QubeClient {
    /// Create a client for the given endpoint and credentials.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        group: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            ClientConfig::new(base_url),
            Credentials::new(username, password, group),
        )
    }

    /// Create a client with explicit configuration.
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Ok(Self {
            transport: SoapTransport::new(&config)?,
            credentials,
        })
    }

    /// The endpoint this client POSTs to.
    pub fn base_url(&self) -> &str {
        self.transport.base_url().as_str()
    }

    /// Authenticate with the vendor under the given session key.
    ///
    /// Returns the raw login response. Most callers want
    /// [`get_session`](Self::get_session), which also validates the
    /// response and binds a [`Session`] to the key.
    pub async fn login(&self, key: &SessionKey) -> Result<SoapResponse> {
        let body = body::login(
            key,
            &self.credentials.username,
            self.credentials.password.expose_secret(),
            &self.credentials.group,
        );
        self.transport.send(SoapAction::Login, &body).await
    }

    /// Log in under a fresh session key and return the bound [`Session`].
    ///
    /// The login response is parsed for the vendor's `status` element; a
    /// non-empty `error-message` attribute fails with
    /// [`Error::Authentication`] carrying the vendor's error code and
    /// message.
    pub async fn get_session(&self) -> Result<Session> {
        let key = SessionKey::generate();
        let response = self.login(&key).await?;

        if let Some(status) = LoginStatus::parse(response.text())? {
            if status.is_failure() {
                return Err(Error::Authentication {
                    code: status.error_code.unwrap_or_default(),
                    message: status.error_message.unwrap_or_default(),
                });
            }
        }

        tracing::debug!(key = key.as_str(), "session established");
        Ok(Session::from_transport(self.transport.clone(), key))
    }

    /// Run `f` with a freshly minted session, then release it.
    ///
    /// Logout is attempted on every exit path, including when `f` fails;
    /// release is best-effort and a failed logout never masks the
    /// closure's result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: qube_pm_rs::QubeClient) -> qube_pm_rs::Result<()> {
    /// let body = client
    ///     .with_session(|session| async move {
    ///         let response = session.get_properties("BLOCKA", true).await?;
    ///         Ok(response.text().to_string())
    ///     })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn with_session<T, F, Fut>(&self, f: F) -> Result<T>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let session = self.get_session().await?;
        let cleanup = session.clone();
        let result = f(session).await;
        if let Err(err) = cleanup.logout().await {
            tracing::warn!(error = %err, "logout during scoped session release failed");
        }
        result
    }
}

impl std::fmt::Debug for QubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QubeClient")
            .field("base_url", &self.transport.base_url().as_str())
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let client = QubeClient::new(
            "https://qube.example.com/qubews/",
            "jdoe",
            "super-secret",
            "KTS",
        )
        .unwrap();
        let debug_str = format!("{client:?}");
        assert!(!debug_str.contains("super-secret"));
        assert!(debug_str.contains("[REDACTED]"));
        assert!(debug_str.contains("jdoe"));
    }

    #[test]
    fn test_invalid_base_url_fails_at_construction() {
        let result = QubeClient::new("not a url", "u", "p", "g");
        assert!(matches!(result, Err(Error::UrlParse(_))));
    }
}
