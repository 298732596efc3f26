//! Account, party and financial institution builders.
//!
//! SEPA restricts the schema's identification choices: accounts are
//! identified by IBAN only and institutions by BIC only.

use crate::error::{Error, Result};
use crate::types::{Account, FinancialInstitution, Party};
use regex::Regex;
use std::sync::OnceLock;

/// Institution code, country code, location code, optional branch code.
const BIC_PATTERN: &str = r"^[a-zA-Z]{4}[a-zA-Z]{2}[a-zA-Z0-9]{2}([a-zA-Z0-9]{3})?$";

const IBAN_MIN_LEN: usize = 15;
const IBAN_MAX_LEN: usize = 34;

/// IBAN lengths of the SEPA countries (ISO 13616 registry).
const SEPA_IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AT", 20), ("BE", 16), ("BG", 22), ("CH", 21), ("CY", 28),
    ("CZ", 24), ("DE", 22), ("DK", 18), ("EE", 20), ("ES", 24), ("FI", 18),
    ("FR", 27), ("GB", 22), ("GI", 23), ("GR", 27), ("HR", 21), ("HU", 28),
    ("IE", 22), ("IS", 26), ("IT", 27), ("LI", 21), ("LT", 20), ("LU", 20),
    ("LV", 21), ("MC", 27), ("MT", 31), ("NL", 18), ("NO", 15), ("PL", 28),
    ("PT", 25), ("RO", 24), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27),
    ("VA", 22),
];

static BIC_REGEX: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

fn bic_regex() -> Result<&'static Regex> {
    BIC_REGEX
        .get_or_init(|| Regex::new(BIC_PATTERN))
        .as_ref()
        .map_err(pattern_error)
}

fn pattern_error(e: &regex::Error) -> Error {
    tracing::error!(error = %e, "BIC pattern failed to compile");
    Error::Configuration(format!("BIC pattern: {}", e))
}

/// Build an account identified by IBAN, without currency.
///
/// The IBAN is not validated; use [`create_checked_account`] to enforce
/// the ISO 13616 checksum.
pub fn create_account(iban: impl Into<String>) -> Account {
    Account::new(iban.into(), None)
}

/// Build an account identified by IBAN, with a currency code.
///
/// The currency is kept verbatim.
pub fn create_account_with_currency(iban: impl Into<String>, currency: impl Into<String>) -> Account {
    Account::new(iban.into(), Some(currency.into()))
}

/// Like [`create_account`], but rejects IBANs failing [`validate_iban`].
pub fn create_checked_account(iban: impl Into<String>) -> Result<Account> {
    let iban = iban.into();
    validate_iban(&iban)?;
    Ok(Account::new(iban, None))
}

/// Like [`create_account_with_currency`], but rejects IBANs failing [`validate_iban`].
pub fn create_checked_account_with_currency(
    iban: impl Into<String>,
    currency: impl Into<String>,
) -> Result<Account> {
    let iban = iban.into();
    validate_iban(&iban)?;
    Ok(Account::new(iban, Some(currency.into())))
}

/// Build a party from its display name. Any name is accepted.
pub fn create_party(name: impl Into<String>) -> Party {
    Party::new(name.into())
}

/// Build a financial institution identified by BIC.
///
/// # Examples
///
/// ```
/// use sepa_pain001::create_fin_instn_id;
///
/// let agent = create_fin_instn_id("ABNANL2A")?;
/// assert_eq!(agent.bic(), "ABNANL2A");
///
/// assert!(create_fin_instn_id("1234").is_err());
/// # Ok::<(), sepa_pain001::Error>(())
/// ```
pub fn create_fin_instn_id(bic: impl Into<String>) -> Result<FinancialInstitution> {
    let bic = bic.into();
    if !bic_regex()?.is_match(&bic) {
        tracing::debug!(bic = %bic, "rejected: BIC pattern mismatch");
        return Err(Error::invalid(format!(
            "This doesn't look like a correct BIC id '{}'",
            bic
        )));
    }
    Ok(FinancialInstitution::new(bic))
}

/// Check an IBAN in electronic format (no spaces) against ISO 13616.
///
/// Verifies the length (per country for SEPA countries), the country code,
/// check digits in `02..=98`, that the rest is alphanumeric, and that the
/// mod-97 checksum equals 1.
pub fn validate_iban(iban: &str) -> Result<()> {
    let reject = |reason: &str| {
        tracing::debug!(iban, reason, "rejected: invalid IBAN");
        Err(Error::invalid(format!(
            "This doesn't look like a correct IBAN id '{}': {}",
            iban, reason
        )))
    };

    let bytes = iban.as_bytes();
    if bytes.len() < IBAN_MIN_LEN || bytes.len() > IBAN_MAX_LEN {
        return reject("length out of range");
    }
    if !bytes.iter().all(u8::is_ascii_alphanumeric) {
        return reject("non-alphanumeric character");
    }
    if !bytes[..2].iter().all(u8::is_ascii_alphabetic) {
        return reject("country code must be letters");
    }
    if !bytes[2..4].iter().all(u8::is_ascii_digit) {
        return reject("check digits must be numeric");
    }
    let check_digits = (bytes[2] - b'0') * 10 + (bytes[3] - b'0');
    if !(2..=98).contains(&check_digits) {
        return reject("check digits out of range 02-98");
    }
    let country = iban[..2].to_ascii_uppercase();
    if let Some(&(_, len)) = SEPA_IBAN_LENGTHS.iter().find(|(cc, _)| *cc == country.as_str()) {
        if bytes.len() != len {
            return reject("length does not match country");
        }
    }
    if iban_mod97(bytes) != 1 {
        return reject("checksum mismatch");
    }
    Ok(())
}

/// Move the first four characters to the end, expand letters to 10..=35 and
/// reduce modulo 97. Expects ASCII alphanumerics only.
fn iban_mod97(bytes: &[u8]) -> u32 {
    bytes[4..]
        .iter()
        .chain(&bytes[..4])
        .fold(0u32, |acc, &b| {
            if b.is_ascii_digit() {
                (acc * 10 + u32::from(b - b'0')) % 97
            } else {
                let value = u32::from(b.to_ascii_uppercase() - b'A') + 10;
                (acc * 100 + value) % 97
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountIdentification, FinancialInstitutionIdentification};

    #[test]
    fn test_account_without_currency() {
        let account = create_account("NL91ABNA0417164300");
        assert_eq!(account.iban(), "NL91ABNA0417164300");
        assert_eq!(account.currency(), None);
    }

    #[test]
    fn test_account_with_currency() {
        let account = create_account_with_currency("NL91ABNA0417164300", "EUR");
        assert_eq!(
            account.id(),
            &AccountIdentification::Iban("NL91ABNA0417164300".into())
        );
        assert_eq!(account.currency(), Some("EUR"));
    }

    #[test]
    fn test_unchecked_account_keeps_anything() {
        assert_eq!(create_account("not an iban").iban(), "not an iban");
    }

    #[test]
    fn test_party() {
        assert_eq!(create_party("Jan Jansen").name(), "Jan Jansen");
        assert_eq!(create_party("").name(), "");
    }

    #[test]
    fn test_bic_valid() {
        for bic in ["ABNANL2A", "ABNANL2AXXX", "deutdeff500", "RABONL2U"] {
            let fi = create_fin_instn_id(bic).unwrap();
            assert_eq!(fi.id(), &FinancialInstitutionIdentification::Bic(bic.into()));
        }
    }

    #[test]
    fn test_bic_invalid() {
        for bic in ["1234", "TOOLONGCODE1234", "", "ABNANL2", "ABNANL2AXX", "ABN1NL2A", "ABNA NL2A"] {
            let err = create_fin_instn_id(bic).unwrap_err();
            assert!(err.is_invalid_argument(), "{bic} accepted");
        }
    }

    #[test]
    fn test_bic_error_names_value() {
        let err = create_fin_instn_id("1234").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: This doesn't look like a correct BIC id '1234'"
        );
    }

    #[test]
    fn test_validate_iban() {
        for iban in [
            "NL91ABNA0417164300",
            "DE89370400440532013000",
            "GB82WEST12345698765432",
            "nl91abna0417164300",
        ] {
            assert!(validate_iban(iban).is_ok(), "{iban} rejected");
        }
    }

    #[test]
    fn test_validate_iban_rejects() {
        for iban in [
            "NL92ABNA0417164300",
            "NL91ABNA04171",
            "NL91 ABNA 0417 1643 00",
            "1291ABNA0417164300",
            "NLX1ABNA0417164300",
            "DE99370400440532000016",
            "NL58ABNA041716430",
            "",
        ] {
            assert!(validate_iban(iban).unwrap_err().is_invalid_argument(), "{iban} accepted");
        }
    }

    #[test]
    fn test_check_digit_bounds() {
        // 02 and 99 both satisfy mod-97 for this BBAN; only 02 is allowed
        assert!(validate_iban("DE02370400440532000016").is_ok());
        let err = validate_iban("DE99370400440532000016").unwrap_err();
        assert!(err.to_string().ends_with("check digits out of range 02-98"));
    }

    #[test]
    fn test_country_length() {
        // checksum is valid, length is one short for NL
        let err = validate_iban("NL58ABNA041716430").unwrap_err();
        assert!(err.to_string().ends_with("length does not match country"));
    }

    #[test]
    fn test_pattern_error_is_configuration() {
        let err = Regex::new("[a-z").map_err(|e| pattern_error(&e)).unwrap_err();
        assert!(matches!(err, Error::Configuration(ref msg) if msg.starts_with("BIC pattern: ")));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_checked_account() {
        let account = create_checked_account_with_currency("DE89370400440532013000", "EUR").unwrap();
        assert_eq!(account.iban(), "DE89370400440532013000");
        assert_eq!(account.currency(), Some("EUR"));
        assert!(create_checked_account("DE89370400440532013001").is_err());
    }
}
