//! Remittance information builders.
//!
//! Remittance information lets the creditor match an incoming payment with
//! the items it settles, such as invoices in an accounts-receivable system.

use crate::error::{Error, Result};
use crate::types::{
    CreditorReference, RemittanceInfo, MAX_STRUCTURED_REF_LEN, MAX_UNSTRUCTURED_LEN,
};

/// Build unstructured remittance information from free text.
///
/// The text must be 1 to 140 characters long and is kept verbatim; escaping
/// is left to the XML serializer.
///
/// # Examples
///
/// ```
/// use sepa_pain001::create_unstructured_remittance;
///
/// let rmt_inf = create_unstructured_remittance("Invoice 2024-0042")?;
/// assert_eq!(rmt_inf.unstructured(), Some("Invoice 2024-0042"));
///
/// assert!(create_unstructured_remittance("").is_err());
/// # Ok::<(), sepa_pain001::Error>(())
/// ```
pub fn create_unstructured_remittance(text: impl Into<String>) -> Result<RemittanceInfo> {
    let text = text.into();
    check_length("unstructured remittance", &text, MAX_UNSTRUCTURED_LEN)?;
    Ok(RemittanceInfo::Unstructured(text))
}

/// Build structured remittance information from a creditor reference.
///
/// The reference must be 1 to 35 characters long. It is always typed `SCOR`.
pub fn create_structured_remittance(reference: impl Into<String>) -> Result<RemittanceInfo> {
    let reference = reference.into();
    check_length("creditor reference", &reference, MAX_STRUCTURED_REF_LEN)?;
    Ok(RemittanceInfo::Structured(CreditorReference::scor(reference)))
}

/// Lengths are counted in characters, as the XSD length facets do.
fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        tracing::debug!(field, len, max, "rejected: value too long");
        return Err(Error::invalid(format!("{} maxLength: {}, got {}", field, max, len)));
    }
    if len < 1 {
        tracing::debug!(field, "rejected: value empty");
        return Err(Error::invalid(format!("{} minLength: 1", field)));
    }
    Ok(())
}
