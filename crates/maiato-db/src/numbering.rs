//! Human-facing sequence numbers for historial entries and receipts.
//!
//! Both are derived from what is already stored: historial numbers from the
//! customer's highest entry number, receipt numbers from the most recent receipt.

use chrono::NaiveDate;

/// Historial number following the highest of a customer's stored numbers:
/// `H0001`, `H0002`, ...
///
/// Numbers that do not carry `prefix` are ignored, so a gap left by a deleted
/// entry is never reused.
#[must_use]
pub fn next_historial_number<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let highest = existing
        .into_iter()
        .filter_map(|number| number.strip_prefix(prefix)?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:04}", highest + 1)
}

/// Receipt number for a receipt issued on `today`, given the last stored number.
///
/// Format is `PREFIX-YYYYMMDD-NNN`. The sequence continues from `last` when it
/// carries the same prefix and date, and restarts at `001` otherwise.
#[must_use]
pub fn next_receipt_number(prefix: &str, last: Option<&str>, today: NaiveDate) -> String {
    let date = today.format("%Y%m%d").to_string();
    let sequence = last
        .and_then(|number| receipt_sequence(prefix, &date, number))
        .map_or(1, |seq| seq + 1);
    format!("{prefix}-{date}-{sequence:03}")
}

fn receipt_sequence(prefix: &str, date: &str, number: &str) -> Option<u32> {
    let rest = number.strip_prefix(prefix)?.strip_prefix('-')?;
    let (day, seq) = rest.split_once('-')?;
    if day != date {
        return None;
    }
    seq.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[rstest]
    #[case(&[], "H0001")]
    #[case(&["H0001"], "H0002")]
    #[case(&["H0001", "H0041", "H0007"], "H0042")]
    #[case(&["H0002"], "H0003")]
    #[case(&["H9999"], "H10000")]
    #[case(&["X0005", "Hnone"], "H0001")]
    fn historial_numbers(#[case] existing: &[&str], #[case] expected: &str) {
        assert_eq!(next_historial_number("H", existing.iter().copied()), expected);
    }

    #[test]
    fn first_receipt_of_the_day() {
        assert_eq!(next_receipt_number("REC", None, day()), "REC-20261017-001");
    }

    #[test]
    fn continues_same_day_sequence() {
        assert_eq!(
            next_receipt_number("REC", Some("REC-20261017-009"), day()),
            "REC-20261017-010"
        );
    }

    #[rstest]
    #[case("REC-20261016-014")]
    #[case("legacy-7")]
    #[case("REC-20261017-abc")]
    #[case("OLD-20261017-003")]
    fn restarts_when_last_number_does_not_continue(#[case] last: &str) {
        assert_eq!(
            next_receipt_number("REC", Some(last), day()),
            "REC-20261017-001"
        );
    }

    #[test]
    fn sequence_grows_past_three_digits() {
        assert_eq!(
            next_receipt_number("REC", Some("REC-20261017-999"), day()),
            "REC-20261017-1000"
        );
    }
}
