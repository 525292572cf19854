//! Response handling: raw SOAP responses and login status parsing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use reqwest::StatusCode;

use crate::Result;

/// A raw SOAP response: HTTP status plus the unparsed body text.
///
/// Apart from login (whose status element the client inspects), the vendor
/// marks success inside the payload, e.g. `<success>true</success>` for
/// lookups or a `CloseReportResponse` element. Interpretation is left to
/// the caller.
///
/// # Example
///
/// ```no_run
/// # async fn example(session: qube_pm_rs::Session) -> qube_pm_rs::Result<()> {
/// let response = session.close_report().await?;
/// if response.is_success() && response.contains("CloseReportResponse") {
///     println!("report closed");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SoapResponse {
    status: StatusCode,
    body: String,
}

impl SoapResponse {
    pub(crate) fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    /// The HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The HTTP status as a bare number.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Whether the HTTP status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The raw response body.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Whether the body contains the given marker string.
    pub fn contains(&self, marker: &str) -> bool {
        self.body.contains(marker)
    }
}

/// The vendor's login status, read from the first `status` element of a
/// login response (`error-code` / `error-message` attributes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginStatus {
    /// Vendor error code, if reported
    pub error_code: Option<String>,
    /// Vendor error message; non-empty means the login failed
    pub error_message: Option<String>,
}

impl LoginStatus {
    /// Parse the first `status` element out of a login response body.
    ///
    /// Returns `None` if the document has no `status` element at all.
    /// Malformed XML is an error; the transport succeeded but the payload
    /// is not something this client can interpret.
    pub fn parse(xml: &str) -> Result<Option<LoginStatus>> {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) => {
                    if e.local_name().as_ref() == b"status" {
                        return Ok(Some(Self::from_element(&e)));
                    }
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    /// Whether the vendor reported a failure (non-empty `error-message`).
    pub fn is_failure(&self) -> bool {
        self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }

    fn from_element(element: &BytesStart<'_>) -> LoginStatus {
        let mut status = LoginStatus::default();
        for attr in element.attributes().flatten() {
            let Ok(value) = attr.unescape_value() else {
                continue;
            };
            match attr.key.as_ref() {
                b"error-code" => status.error_code = Some(value.into_owned()),
                b"error-message" => status.error_message = Some(value.into_owned()),
                _ => {}
            }
        }
        status
    }
}
