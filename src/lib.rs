//! SEPA pain.001 Element Builder
//!
//! Validated construction of the building blocks of an ISO 20022 pain.001
//! (Customer Credit Transfer Initiation) message for SEPA.
//!
//! # Elements
//!
//! - **Remittance information**: free text (1-140 chars) or a structured
//!   `SCOR` creditor reference (1-35 chars)
//! - **Accounts**: identified by IBAN only
//! - **Parties**: display name
//! - **Financial institutions**: identified by BIC only
//! - **Amounts**: instructed amount in EUR
//! - **Dates**: `ISODateTime` without fraction or offset, and `ISODate`
//!
//! Assembling the full document, serializing it and validating it against
//! the XSD is left to the caller. Every element implements
//! `serde::Serialize` with the pain.001.001.03 element names.
//!
//! # Examples
//!
//! ```
//! use chrono::Local;
//! use rust_decimal::Decimal;
//! use sepa_pain001::{
//!     create_account, create_amount, create_date, create_fin_instn_id, create_party,
//!     create_structured_remittance,
//! };
//!
//! let creditor = create_party("Acme B.V.");
//! let creditor_account = create_account("NL91ABNA0417164300");
//! let creditor_agent = create_fin_instn_id("ABNANL2A")?;
//! let amount = create_amount(Decimal::new(10050, 2));
//! let rmt_inf = create_structured_remittance("RF18539007547034")?;
//! let execution_date = create_date(&Local::now());
//!
//! assert_eq!(amount.currency(), "EUR");
//! assert_eq!(creditor_agent.bic(), "ABNANL2A");
//! # let _ = (creditor, creditor_account, rmt_inf, execution_date);
//! # Ok::<(), sepa_pain001::Error>(())
//! ```

pub mod error;
pub mod types;
pub mod datetime;
pub mod remittance;
pub mod identification;
pub mod amount;

// Re-export the builders and element types
pub use error::{Error, Result};
pub use types::{
    Account, AccountIdentification, CreditorReference, CreditorReferenceType,
    FinancialInstitution, FinancialInstitutionIdentification, MonetaryAmount, Party,
    RemittanceInfo,
};
pub use datetime::{create_date, create_date_time, NormalizedDate, NormalizedDateTime};
pub use remittance::{create_structured_remittance, create_unstructured_remittance};
pub use identification::{
    create_account, create_account_with_currency, create_checked_account,
    create_checked_account_with_currency, create_fin_instn_id, create_party, validate_iban,
};
pub use amount::create_amount;
