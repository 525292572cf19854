//! SOAP wire layer: envelope, actions, and response handling.
//!
//! The wire format here is dictated entirely by the Qube web service. Body
//! fragments are interpolated into the envelope verbatim; no escaping is
//! performed at any point, so callers must supply XML-safe values.

pub(crate) mod body;
mod response;

pub use response::{LoginStatus, SoapResponse};

/// SOAP 1.1 envelope namespace.
pub const SOAPENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Qube web service namespace; also the prefix of every SOAPAction URI.
pub const WEB_NS: &str = "http://qube.qubeglobal.com/ns/webservice/";

/// Value of the bare `xmlns` HTTP header the vendor expects on every
/// request (no trailing slash, unlike the envelope namespace).
pub(crate) const XMLNS_HEADER: &str = "http://qube.qubeglobal.com/ns/webservice";

/// Qube process name routing lookup requests to the purchase-ledger web API.
pub(crate) const PROCESS_LOOKUP: &str = "PURAPI:webAPI";

/// Qube process name routing journal postings to the invoice web service.
pub(crate) const PROCESS_INVOICE: &str = "PUR:Invoice.ws";

/// Application name sent in the login payload.
pub(crate) const APPLICATION: &str = "Purchase Ledger";

/// Session timeout interval sent in the login payload.
pub(crate) const TIMEOUT_INTERVAL: u32 = 1000;

/// The SOAPAction of a request, one per vendor operation.
///
/// Lookups and postings all dispatch through the generic `QubeProcess-1ia`
/// operation; the embedded process name selects the actual behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoapAction {
    /// `Login-Overload-4`: authenticate and open a session
    Login,
    /// `Logout`: terminate a session
    Logout,
    /// `CloseReport`: release the session's open report cursor
    CloseReport,
    /// `QubeProcess-1ia`: generic process dispatch (lookups, postings)
    QubeProcess,
}

impl SoapAction {
    /// The full SOAPAction header value for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "http://qube.qubeglobal.com/ns/webservice/Login-Overload-4",
            Self::Logout => "http://qube.qubeglobal.com/ns/webservice/Logout",
            Self::CloseReport => "http://qube.qubeglobal.com/ns/webservice/CloseReport",
            Self::QubeProcess => "http://qube.qubeglobal.com/ns/webservice/QubeProcess-1ia",
        }
    }
}

/// Wrap a body fragment in the fixed SOAP 1.1 envelope.
///
/// Pure function of the body; the fragment is inserted verbatim.
pub fn envelope(body: &str) -> String {
    format!(
        r#"<soapenv:Envelope xmlns:soapenv="{SOAPENV_NS}" xmlns:web="{WEB_NS}">
   <soapenv:Header/>
   <soapenv:Body>
      {body}
   </soapenv:Body>
</soapenv:Envelope>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wraps_body_verbatim() {
        let wrapped = envelope("<web:Logout/>");
        assert!(wrapped.starts_with("<soapenv:Envelope"));
        assert!(wrapped.contains("<web:Logout/>"));
        assert!(wrapped.contains(SOAPENV_NS));
        assert!(wrapped.contains(WEB_NS));
        assert!(wrapped.ends_with("</soapenv:Envelope>"));
    }

    #[test]
    fn test_action_uris() {
        assert_eq!(
            SoapAction::Login.as_str(),
            "http://qube.qubeglobal.com/ns/webservice/Login-Overload-4"
        );
        assert!(SoapAction::Logout.as_str().starts_with(WEB_NS));
        assert!(SoapAction::CloseReport.as_str().ends_with("CloseReport"));
        assert!(SoapAction::QubeProcess.as_str().ends_with("QubeProcess-1ia"));
    }
}
