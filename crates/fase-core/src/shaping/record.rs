//! Shaping the draft into a persistence-ready application record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::clean::clean_value;
use crate::fees::membership_fee;
use crate::ids::IdempotencyToken;
use crate::registration::{Address, Consents, MembershipClass, RegistrationDraft};

/// Persisted lifecycle status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Awaiting payment or review.
    Pending,
    /// An invoice has been emailed; payment is settled out of band.
    InvoiceSent,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::InvoiceSent => "invoice_sent",
        }
    }
}

/// Assemble the persistence record for `draft`.
///
/// The record is recursively cleaned of empty leaves, never includes the
/// password, and always carries the client idempotency token. The invoice
/// status forces all consent flags true (the invoice action is only reachable
/// after the consent step). Individual applicants have no separate company
/// identity, so their organisation block and invoicing contact are
/// synthesized from personal fields.
pub fn shape_application(
    draft: &RegistrationDraft,
    status: ApplicationStatus,
    token: &IdempotencyToken,
    submitted_at: DateTime<Utc>,
) -> Value {
    let consents = if status == ApplicationStatus::InvoiceSent {
        Consents::all_granted()
    } else {
        draft.consents
    };

    let full_name = draft.account.full_name();
    let organisation_name = match draft.class {
        MembershipClass::Individual => full_name.clone(),
        MembershipClass::Corporate => draft.organisation.name.clone(),
    };

    let invoicing_contact = match draft.class {
        MembershipClass::Individual => json!({
            "name": full_name,
            "email": draft.account.email,
        }),
        MembershipClass::Corporate => {
            json!(draft.team.primary().map(|primary| json!({
                "name": primary.name,
                "email": primary.email,
            })))
        }
    };

    let premiums = if draft.premium.is_entered() {
        json!({
            "currency": draft.premium.currency.code(),
            "total": draft.premium.total(),
            "eurEquivalent": crate::fees::convert_to_eur(
                draft.premium.total() as f64,
                draft.premium.currency,
            ).round() as u64,
        })
    } else {
        Value::Null
    };

    let record = json!({
        "status": status.as_str(),
        "submittedAt": submitted_at.to_rfc3339(),
        "idempotencyToken": token.as_str(),
        "membershipClass": draft.class,
        "organizationType": draft.organization_type,
        "applicant": {
            "firstName": draft.account.first_name,
            "surname": draft.account.surname,
            "email": draft.account.email,
        },
        "organisation": {
            "name": organisation_name,
            "tradingName": draft.organisation.trading_name,
            "regulatorReference": draft.organisation.regulator_reference,
        },
        "registeredAddress": address_value(&draft.registered_address),
        "invoicingAddress": address_value(draft.effective_invoicing_address()),
        "invoicingContact": invoicing_contact,
        "team": draft.team.members(),
        "grossWrittenPremiums": premiums,
        "memberOfOtherAssociation": draft.member_of_other_association,
        "otherAssociations": draft.other_associations,
        "portfolio": draft.portfolio.shares().map(|(line, pct)| {
            json!({ "line": line, "percent": pct })
        }).collect::<Vec<_>>(),
        "carrier": draft.carrier,
        "provider": draft.provider,
        "consents": {
            "privacy": consents.privacy,
            "dataProcessing": consents.data_processing,
            "codeOfConduct": consents.code_of_conduct,
        },
        "demographics": draft.demographics,
        "referralSource": draft.referral_source,
        "membershipFeeEur": membership_fee(draft),
    });

    // The status and token fields are always present, so the cleaned record
    // can never collapse to nothing.
    clean_value(record).unwrap_or_else(|| json!({}))
}

fn address_value(address: &Address) -> Value {
    json!({
        "line1": address.line1,
        "line2": address.line2,
        "city": address.city,
        "county": address.county,
        "postcode": address.postcode,
        "country": address.country,
    })
}
