//! Element types of the outbound pain.001 data model.
//!
//! Each type is an immutable value produced by one of the builder functions.
//! Fields carrying a schema invariant are private, so the only way to get a
//! value is through its builder. Serialization uses the ISO 20022
//! pain.001.001.03 element names.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Currency of every amount produced by [`crate::create_amount`].
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Type code of structured creditor references (ISO 11649).
pub const CREDITOR_REFERENCE_CODE: &str = "SCOR";

/// Maximum length of unstructured remittance text.
pub const MAX_UNSTRUCTURED_LEN: usize = 140;

/// Maximum length of a structured creditor reference.
pub const MAX_STRUCTURED_REF_LEN: usize = 35;

/// Remittance information, either free text or a structured reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemittanceInfo {
    /// Free text, 1 to 140 characters.
    Unstructured(String),
    /// Structured creditor reference.
    Structured(CreditorReference),
}

impl RemittanceInfo {
    /// Unstructured text, if this is the unstructured form.
    pub fn unstructured(&self) -> Option<&str> {
        match self {
            RemittanceInfo::Unstructured(text) => Some(text.as_str()),
            RemittanceInfo::Structured(_) => None,
        }
    }

    /// Creditor reference, if this is the structured form.
    pub fn structured(&self) -> Option<&CreditorReference> {
        match self {
            RemittanceInfo::Unstructured(_) => None,
            RemittanceInfo::Structured(reference) => Some(reference),
        }
    }
}

/// Structured creditor reference with its type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditorReference {
    reference: String,
    reference_type: CreditorReferenceType,
}

impl CreditorReference {
    pub(crate) fn scor(reference: String) -> Self {
        Self {
            reference,
            reference_type: CreditorReferenceType::Scor,
        }
    }

    /// The reference text, 1 to 35 characters.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Type code of the reference, always `SCOR`.
    pub fn reference_type(&self) -> CreditorReferenceType {
        self.reference_type
    }
}

/// Creditor reference type codes. SEPA only allows `SCOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditorReferenceType {
    /// Structured Creditor Reference.
    Scor,
}

impl CreditorReferenceType {
    /// Convert to ISO 20022 code.
    pub fn code(&self) -> &'static str {
        match self {
            CreditorReferenceType::Scor => CREDITOR_REFERENCE_CODE,
        }
    }
}

/// Account identification schemes. Only IBAN is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountIdentification {
    Iban(String),
}

/// A cash account identified by IBAN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountIdentification,
    currency: Option<String>,
}

impl Account {
    pub(crate) fn new(iban: String, currency: Option<String>) -> Self {
        Self {
            id: AccountIdentification::Iban(iban),
            currency,
        }
    }

    /// Account identification, always by IBAN.
    pub fn id(&self) -> &AccountIdentification {
        &self.id
    }

    /// The IBAN identifying this account.
    pub fn iban(&self) -> &str {
        match &self.id {
            AccountIdentification::Iban(iban) => iban.as_str(),
        }
    }

    /// Account currency code, if one was given.
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }
}

/// A named participant (debtor, creditor, initiating party).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    name: String,
}

impl Party {
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }

    /// Display name, as given.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Financial institution identification schemes. Only BIC is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FinancialInstitutionIdentification {
    Bic(String),
}

/// A financial institution (debtor or creditor agent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialInstitution {
    id: FinancialInstitutionIdentification,
}

impl FinancialInstitution {
    pub(crate) fn new(bic: String) -> Self {
        Self {
            id: FinancialInstitutionIdentification::Bic(bic),
        }
    }

    /// Institution identification, always by BIC.
    pub fn id(&self) -> &FinancialInstitutionIdentification {
        &self.id
    }

    /// The BIC identifying this institution.
    pub fn bic(&self) -> &str {
        match &self.id {
            FinancialInstitutionIdentification::Bic(bic) => bic.as_str(),
        }
    }
}

/// Instructed amount of a credit transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonetaryAmount {
    value: Decimal,
    currency: &'static str,
}

impl MonetaryAmount {
    pub(crate) fn eur(value: Decimal) -> Self {
        Self {
            value,
            currency: DEFAULT_CURRENCY,
        }
    }

    /// Amount value, unrounded.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Currency code, always `EUR`.
    pub fn currency(&self) -> &str {
        self.currency
    }
}

impl Serialize for RemittanceInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let xml = match self {
            RemittanceInfo::Unstructured(text) => RemittanceInformationXml {
                ustrd: Some(text.as_str()),
                strd: None,
            },
            RemittanceInfo::Structured(reference) => RemittanceInformationXml {
                ustrd: None,
                strd: Some(StructuredRemittanceXml {
                    cdtr_ref_inf: CreditorReferenceXml {
                        tp: CreditorReferenceTypeXml {
                            cd_or_prtry: CodeXml {
                                cd: reference.reference_type.code(),
                            },
                        },
                        ref_val: &reference.reference,
                    },
                }),
            },
        };
        xml.serialize(serializer)
    }
}

impl Serialize for Account {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CashAccountXml {
            id: AccountIdXml { iban: self.iban() },
            ccy: self.currency(),
        }
        .serialize(serializer)
    }
}

impl Serialize for Party {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PartyXml { nm: &self.name }.serialize(serializer)
    }
}

impl Serialize for FinancialInstitution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AgentXml {
            fin_instn_id: FinancialInstitutionIdXml { bic: self.bic() },
        }
        .serialize(serializer)
    }
}

impl Serialize for MonetaryAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AmountChoiceXml {
            instd_amt: AmountXml {
                ccy: self.currency,
                value: self.value.to_string(),
            },
        }
        .serialize(serializer)
    }
}

// XML structure definitions
#[derive(Serialize)]
struct RemittanceInformationXml<'a> {
    #[serde(rename = "Ustrd", skip_serializing_if = "Option::is_none")]
    ustrd: Option<&'a str>,
    #[serde(rename = "Strd", skip_serializing_if = "Option::is_none")]
    strd: Option<StructuredRemittanceXml<'a>>,
}

#[derive(Serialize)]
struct StructuredRemittanceXml<'a> {
    #[serde(rename = "CdtrRefInf")]
    cdtr_ref_inf: CreditorReferenceXml<'a>,
}

#[derive(Serialize)]
struct CreditorReferenceXml<'a> {
    #[serde(rename = "Tp")]
    tp: CreditorReferenceTypeXml,
    #[serde(rename = "Ref")]
    ref_val: &'a str,
}

#[derive(Serialize)]
struct CreditorReferenceTypeXml {
    #[serde(rename = "CdOrPrtry")]
    cd_or_prtry: CodeXml,
}

#[derive(Serialize)]
struct CodeXml {
    #[serde(rename = "Cd")]
    cd: &'static str,
}

#[derive(Serialize)]
struct CashAccountXml<'a> {
    #[serde(rename = "Id")]
    id: AccountIdXml<'a>,
    #[serde(rename = "Ccy", skip_serializing_if = "Option::is_none")]
    ccy: Option<&'a str>,
}

#[derive(Serialize)]
struct AccountIdXml<'a> {
    #[serde(rename = "IBAN")]
    iban: &'a str,
}

#[derive(Serialize)]
struct PartyXml<'a> {
    #[serde(rename = "Nm")]
    nm: &'a str,
}

#[derive(Serialize)]
struct AgentXml<'a> {
    #[serde(rename = "FinInstnId")]
    fin_instn_id: FinancialInstitutionIdXml<'a>,
}

#[derive(Serialize)]
struct FinancialInstitutionIdXml<'a> {
    #[serde(rename = "BIC")]
    bic: &'a str,
}

#[derive(Serialize)]
struct AmountChoiceXml {
    #[serde(rename = "InstdAmt")]
    instd_amt: AmountXml,
}

#[derive(Serialize)]
struct AmountXml {
    #[serde(rename = "@Ccy")]
    ccy: &'static str,
    #[serde(rename = "$value")]
    value: String,
}
