//! Request body fragments, one builder per vendor operation.
//!
//! Each function renders the inner XML that [`envelope`](super::envelope)
//! wraps. Values are interpolated verbatim; amounts are the only fields
//! with a fixed rendering (exactly two decimal places).

use rust_decimal::Decimal;

use crate::models::{Invoice, SessionKey};

use super::{APPLICATION, PROCESS_INVOICE, PROCESS_LOOKUP, TIMEOUT_INTERVAL};

/// Which reference lookup a [`reference_lookup`] body targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LookupKind {
    Users,
    Properties,
}

impl LookupKind {
    fn element(&self) -> &'static str {
        match self {
            Self::Users => "user-lookup",
            Self::Properties => "property-lookup",
        }
    }
}

/// Render an amount with exactly two decimal places.
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

pub(crate) fn login(key: &SessionKey, username: &str, password: &str, group: &str) -> String {
    format!(
        r#"<web:Login-Overload-4>
    <!--Optional:-->
    <web:LoginData>
        <logondata userdirectory="" xmlns="">
            <clientsessionkey>{key}</clientsessionkey>
            <username>{username}</username>
            <password>{password}</password>
            <group>{group}</group>
            <application>{APPLICATION}</application>
            <timeoutinterval>{TIMEOUT_INTERVAL}</timeoutinterval>
        </logondata>
    </web:LoginData>
</web:Login-Overload-4>"#
    )
}

pub(crate) fn logout(key: &SessionKey) -> String {
    format!(
        r#"<web:Logout>
    <!--Optional:-->
    <web:ClientSessionKey>{key}</web:ClientSessionKey>
</web:Logout>"#
    )
}

pub(crate) fn close_report(key: &SessionKey) -> String {
    format!(
        r#"<web:CloseReport>
    <web:ClientSessionKey>{key}</web:ClientSessionKey>
</web:CloseReport>"#
    )
}

pub(crate) fn reference_lookup(
    key: &SessionKey,
    kind: LookupKind,
    reference: &str,
    exact: bool,
) -> String {
    let lookup = kind.element();
    format!(
        r#"<web:QubeProcess-1ia>
<web:ClientSessionKey>{key}</web:ClientSessionKey>
<web:QubeProcessName>{PROCESS_LOOKUP}</web:QubeProcessName>
<web:Data>
        <request-to-qube>
          <{lookup}>
            <reference exact="{exact}">{reference}</reference>
          </{lookup}>
        </request-to-qube>
    </web:Data>
    </web:QubeProcess-1ia>"#
    )
}

pub(crate) fn fund_lookup(
    key: &SessionKey,
    owner_ref: &str,
    property_ref: &str,
    description: &str,
    fund_uid: &str,
) -> String {
    format!(
        r#"<web:QubeProcess-1ia>
<web:ClientSessionKey>{key}</web:ClientSessionKey>
<web:QubeProcessName>{PROCESS_LOOKUP}</web:QubeProcessName>
<web:Data>
        <request-to-qube>
          <fund-lookup>
            <owner-reference>{owner_ref}</owner-reference>
            <property-reference>{property_ref}</property-reference>
            <description>{description}</description>
            <unique-id>{fund_uid}</unique-id>
          </fund-lookup>
        </request-to-qube>
    </web:Data>
    </web:QubeProcess-1ia>"#
    )
}

pub(crate) fn heading_lookup(key: &SessionKey, property_ref: &str, fund_type: &str) -> String {
    format!(
        r#"<web:QubeProcess-1ia>
    <web:ClientSessionKey>{key}</web:ClientSessionKey>
    <web:QubeProcessName>{PROCESS_LOOKUP}</web:QubeProcessName>
    <web:Data>
        <request-to-qube>
            <heading-lookup>
                <property-reference>{property_ref}</property-reference>
                <fund-type>{fund_type}</fund-type>
            </heading-lookup>
        </request-to-qube>
    </web:Data>
</web:QubeProcess-1ia>"#
    )
}

/// Journal posting body. Always targets the draft register, header level,
/// with a single aggregate detail line.
pub(crate) fn post_invoice(
    key: &SessionKey,
    invoice: &Invoice,
    property_ref: &str,
    user_id: &str,
    fund_heading_uid: &str,
) -> String {
    let document = match invoice.invoice_link.as_deref() {
        Some(link) => format!(
            r#"<document shortcut="false" saveas="{}">{}</document>"#,
            invoice.invoice_number, link
        ),
        None => "<!-- document -->".to_string(),
    };
    let nett = format_amount(invoice.nett);
    let vat = format_amount(invoice.vat);
    let gross = format_amount(invoice.gross);

    format!(
        r#"<web:QubeProcess-1ia>
    <web:ClientSessionKey>{key}</web:ClientSessionKey>
    <web:QubeProcessName>{PROCESS_INVOICE}</web:QubeProcessName>
    <web:Data>
        <request-to-qube>
            <version>1</version>
            <pass-register-warnings>true</pass-register-warnings>
            <pass-ledger-warnings>false</pass-ledger-warnings>
            <post-journal>
                <to-register>true</to-register>
                <type>invoice</type>
                <user-id>{user_id}</user-id>
                {document}
                <supplier-reference>{supplier_ref}</supplier-reference>
                <invoice-number>{invoice_number}</invoice-number>
                <invoice-date>{invoice_date}</invoice-date>
                <period-start>{period_start}</period-start>
                <period-finish>{period_finish}</period-finish>
                <prompt-payment-due>{prompt_payment_due}</prompt-payment-due>
                <payment-due>{payment_due}</payment-due>
                <nett>{nett}</nett>
                <vat>{vat}</vat>
                <gross>{gross}</gross>
                <vat-on-pay>false</vat-on-pay>
                <detail>
                    <line-type>Property expenditure</line-type>
                    <vat-code>{vat_code}</vat-code>
                    <nett>{nett}</nett>
                    <vat>{vat}</vat>
                    <gross>{gross}</gross>
                    <property-reference>{property_ref}</property-reference>
                    <heading-unique-id>{fund_heading_uid}</heading-unique-id>
                </detail>
            </post-journal>
        </request-to-qube>
    </web:Data>
</web:QubeProcess-1ia>"#,
        supplier_ref = invoice.supplier_ref,
        invoice_number = invoice.invoice_number,
        invoice_date = invoice.invoice_date,
        period_start = invoice.period_start,
        period_finish = invoice.period_finish,
        prompt_payment_due = invoice.prompt_payment_due,
        payment_due = invoice.payment_due,
        vat_code = invoice.vat_code,
    )
}
