//! Property-based tests for the element builders
//!
//! - Remittance text within bounds is kept verbatim, out of bounds is rejected
//! - Structured references are always typed SCOR
//! - BIC-shaped strings are accepted unchanged, anything else is rejected
//! - Date normalization keeps local fields and drops fraction and offset

use chrono::{DateTime, FixedOffset, Timelike, TimeZone};
use proptest::prelude::*;
use rust_decimal::Decimal;
use sepa_pain001::{
    create_amount, create_date, create_date_time, create_fin_instn_id,
    create_structured_remittance, create_unstructured_remittance, CreditorReferenceType, Error,
};

/// Strategy for strings with a character count in `len`
fn text_strategy(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), len).prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Strategy for timestamps with sub-second precision and a random offset
fn timestamp_strategy() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (
        0i64..4_102_444_800,
        0u32..1_000_000_000,
        -(14 * 3600)..=(14 * 3600),
    )
        .prop_map(|(secs, nanos, offset)| {
            FixedOffset::east_opt(offset)
                .unwrap()
                .timestamp_opt(secs, nanos)
                .unwrap()
        })
}

proptest! {
    #[test]
    fn unstructured_within_bounds_is_verbatim(text in text_strategy(1..=140)) {
        let rmt_inf = create_unstructured_remittance(text.clone()).unwrap();
        prop_assert_eq!(rmt_inf.unstructured(), Some(text.as_str()));
    }

    #[test]
    fn unstructured_too_long_is_rejected(text in text_strategy(141..=400)) {
        prop_assert!(matches!(
            create_unstructured_remittance(text),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn structured_within_bounds_is_scor(reference in text_strategy(1..=35)) {
        let rmt_inf = create_structured_remittance(reference.clone()).unwrap();
        let creditor_ref = rmt_inf.structured().unwrap();
        prop_assert_eq!(creditor_ref.reference(), reference.as_str());
        prop_assert_eq!(creditor_ref.reference_type(), CreditorReferenceType::Scor);
    }

    #[test]
    fn structured_too_long_is_rejected(reference in text_strategy(36..=200)) {
        prop_assert!(matches!(
            create_structured_remittance(reference),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn bic_shaped_is_accepted(bic in "[A-Za-z]{6}[A-Za-z0-9]{2}([A-Za-z0-9]{3})?") {
        let fi = create_fin_instn_id(bic.clone()).unwrap();
        prop_assert_eq!(fi.bic(), bic.as_str());
    }

    #[test]
    fn bic_with_wrong_length_is_rejected(bic in "[A-Z0-9]{0,7}|[A-Z0-9]{9,10}|[A-Z0-9]{12,20}") {
        prop_assert!(create_fin_instn_id(bic).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn amount_is_always_eur(mantissa in any::<i64>(), scale in 0u32..=10) {
        let value = Decimal::new(mantissa, scale);
        let amount = create_amount(value);
        prop_assert_eq!(amount.value(), value);
        prop_assert_eq!(amount.currency(), "EUR");
    }

    #[test]
    fn date_time_keeps_local_fields(ts in timestamp_strategy()) {
        let local = ts.naive_local();
        let normalized = create_date_time(&ts);
        prop_assert_eq!(normalized.date(), local.date());
        prop_assert_eq!(normalized.hour(), local.hour());
        prop_assert_eq!(normalized.minute(), local.minute());
        prop_assert_eq!(normalized.second(), local.second());
        prop_assert_eq!(normalized.to_naive().nanosecond(), 0);
        prop_assert_eq!(normalized.to_string(), local.format("%Y-%m-%dT%H:%M:%S").to_string());
    }

    #[test]
    fn date_keeps_local_calendar_date(ts in timestamp_strategy()) {
        let date = create_date(&ts);
        prop_assert_eq!(date.to_naive(), ts.date_naive());
        prop_assert_eq!(date.to_string(), ts.format("%Y-%m-%d").to_string());
    }
}
