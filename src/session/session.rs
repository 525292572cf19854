//! Session operations against the purchase-ledger web API.

use crate::client::{ClientConfig, SoapTransport};
use crate::models::{Invoice, SessionKey};
use crate::soap::body::{self, LookupKind};
use crate::soap::{SoapAction, SoapResponse};
use crate::{Error, Result};

/// One authenticated conversation with the Qube PM service.
///
/// A session owns its [`SessionKey`] (constant for its lifetime) and the
/// endpoint it talks to. Obtain one from
/// [`QubeClient::get_session`](crate::QubeClient::get_session), or bind a
/// known key directly with [`Session::new`].
///
/// The server holds one implicit report cursor per session: call
/// [`close_report`](Self::close_report) before issuing another lookup or
/// post, or subsequent calls fail and the session may need to be thrown
/// away and restarted. This is server-side state; nothing here enforces
/// it, and callers must serialize operations on a session themselves.
///
/// Every operation returns the raw [`SoapResponse`]; interpretation of
/// success markers (e.g. `<success>true</success>`,
/// `CloseReportResponse`) is left to the caller.
///
/// Release the session explicitly with [`logout`](Self::logout), or use
/// [`QubeClient::with_session`](crate::QubeClient::with_session) to get
/// logout on every exit path. Dropping a `Session` does not contact the
/// server.
#[derive(Clone)]
pub struct Session {
    transport: SoapTransport,
    key: SessionKey,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("key", &self.key)
            .field("base_url", &self.base_url())
            .finish()
    }
}

impl Session {
    /// The match-everything reference wildcard.
    pub const WILDCARD: &'static str = "?";

    /// Bind an existing session key to an endpoint.
    ///
    /// This does not contact the server; the key must already be valid
    /// (e.g. minted by a previous login).
    pub fn new(key: SessionKey, base_url: impl Into<String>) -> Result<Self> {
        let transport = SoapTransport::new(&ClientConfig::new(base_url))?;
        Ok(Self::from_transport(transport, key))
    }

    pub(crate) fn from_transport(transport: SoapTransport, key: SessionKey) -> Self {
        Self { transport, key }
    }

    /// The key correlating all requests of this session.
    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    /// The endpoint this session POSTs to.
    pub fn base_url(&self) -> &str {
        self.transport.base_url().as_str()
    }

    /// Terminate the session server-side.
    pub async fn logout(&self) -> Result<SoapResponse> {
        let body = body::logout(&self.key);
        self.transport.send(SoapAction::Logout, &body).await
    }

    /// Close the current report.
    ///
    /// Must be called before making another lookup call or posting a new
    /// transaction on this session.
    pub async fn close_report(&self) -> Result<SoapResponse> {
        let body = body::close_report(&self.key);
        self.transport.send(SoapAction::CloseReport, &body).await
    }

    /// Look up users by reference.
    ///
    /// [`Session::WILDCARD`] matches all users; `exact` selects
    /// exact-match semantics server-side instead of substring/wildcard
    /// matching.
    pub async fn get_users(&self, reference: &str, exact: bool) -> Result<SoapResponse> {
        let body = body::reference_lookup(&self.key, LookupKind::Users, reference, exact);
        self.transport.send(SoapAction::QubeProcess, &body).await
    }

    /// Look up properties by reference.
    ///
    /// [`Session::WILDCARD`] matches all properties; `exact` selects
    /// exact-match semantics server-side.
    pub async fn get_properties(&self, reference: &str, exact: bool) -> Result<SoapResponse> {
        let body = body::reference_lookup(&self.key, LookupKind::Properties, reference, exact);
        self.transport.send(SoapAction::QubeProcess, &body).await
    }

    /// Look up funds.
    ///
    /// Fails with [`Error::Validation`] before any network call unless at
    /// least one of `property_ref`, `fund_uid` or `owner_ref` is supplied
    /// (a description alone is insufficient).
    pub async fn get_fund(&self, query: &FundQuery) -> Result<SoapResponse> {
        query.validate()?;
        let body = body::fund_lookup(
            &self.key,
            query.owner_ref.as_deref().unwrap_or_default(),
            query.property_ref.as_deref().unwrap_or_default(),
            query.description.as_deref().unwrap_or_default(),
            query.fund_uid.as_deref().unwrap_or_default(),
        );
        self.transport.send(SoapAction::QubeProcess, &body).await
    }

    /// Look up the fund heading for a property and fund type.
    pub async fn get_fund_heading(
        &self,
        property_ref: &str,
        fund_type: &str,
    ) -> Result<SoapResponse> {
        let body = body::heading_lookup(&self.key, property_ref, fund_type);
        self.transport.send(SoapAction::QubeProcess, &body).await
    }

    /// Post an invoice to the draft register.
    ///
    /// Header-level only: a single detail line carries the invoice totals.
    /// Invoices always land in the draft register for manual review and
    /// are never auto-committed. If the invoice has a document link, the
    /// posting references the externally hosted file (saved under the
    /// invoice number).
    pub async fn post_invoice(
        &self,
        invoice: &Invoice,
        property_ref: &str,
        user_id: &str,
        fund_heading_uid: &str,
    ) -> Result<SoapResponse> {
        let body = body::post_invoice(&self.key, invoice, property_ref, user_id, fund_heading_uid);
        self.transport.send(SoapAction::QubeProcess, &body).await
    }
}

/// Parameters for a fund lookup.
///
/// At least one of `property_ref`, `fund_uid` or `owner_ref` must be
/// supplied; `description` alone does not identify a fund.
///
/// # Example
///
/// ```
/// use qube_pm_rs::FundQuery;
///
/// let query = FundQuery::new().property_ref("BLOCKA").description("Reserve fund");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundQuery {
    /// Property the fund belongs to
    pub property_ref: Option<String>,
    /// Unique id of the fund
    pub fund_uid: Option<String>,
    /// Owner of the fund
    pub owner_ref: Option<String>,
    /// Fund description
    pub description: Option<String>,
}

impl FundQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by property reference.
    pub fn property_ref(mut self, property_ref: impl Into<String>) -> Self {
        self.property_ref = Some(property_ref.into());
        self
    }

    /// Filter by fund unique id.
    pub fn fund_uid(mut self, fund_uid: impl Into<String>) -> Self {
        self.fund_uid = Some(fund_uid.into());
        self
    }

    /// Filter by owner reference.
    pub fn owner_ref(mut self, owner_ref: impl Into<String>) -> Self {
        self.owner_ref = Some(owner_ref.into());
        self
    }

    /// Filter by description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let identifying = [&self.property_ref, &self.fund_uid, &self.owner_ref];
        if identifying
            .iter()
            .any(|field| field.as_deref().is_some_and(|s| !s.is_empty()))
        {
            Ok(())
        } else {
            Err(Error::Validation(
                "you must provide at least one of property_ref, fund_uid, or owner_ref \
                 to look up a fund"
                    .to_string(),
            ))
        }
    }
}
