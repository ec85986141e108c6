//! Phone number input mask.
//!
//! Phone numbers are entered as free text and displayed as
//! `(DDD)-DDD-DDDD`. The mask always starts from the digits found in its
//! input, so masking is idempotent and the raw number can be recovered from a
//! masked value with [`phone_digits`].

/// Number of digits in a complete phone number.
pub const PHONE_DIGITS: usize = 10;

/// Length of a fully masked phone number, `(DDD)-DDD-DDDD`.
pub const MASKED_PHONE_LEN: usize = 14;

const AREA_CODE_LEN: usize = 3;
const EXCHANGE_END: usize = 6;

/// Format keystroke input as a masked phone number.
///
/// Non-digit characters are discarded and only the first
/// [`PHONE_DIGITS`] digits are kept.
///
/// # Examples
///
/// ```
/// use records::domain::mask_phone;
///
/// assert_eq!(mask_phone(""), "");
/// assert_eq!(mask_phone("55"), "(55");
/// assert_eq!(mask_phone("5551"), "(555)-1");
/// assert_eq!(mask_phone("5551234"), "(555)-123-4");
/// assert_eq!(mask_phone("555.123.4567 ext 9"), "(555)-123-4567");
/// ```
pub fn mask_phone(input: &str) -> String {
    let mut masked = String::with_capacity(MASKED_PHONE_LEN);
    let digits = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS);

    for (index, digit) in digits.enumerate() {
        match index {
            0 => masked.push('('),
            AREA_CODE_LEN => masked.push_str(")-"),
            EXCHANGE_END => masked.push('-'),
            _ => {}
        }
        masked.push(digit);
    }
    masked
}

/// Extract every ASCII digit from a (possibly masked) phone value.
///
/// Unlike [`mask_phone`] this does not truncate, so validation can tell an
/// over-long number apart from a complete one.
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    //! Covers the mask grouping, truncation and idempotency.

    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "")]
    #[case("abc", "")]
    #[case("5", "(5")]
    #[case("555", "(555")]
    #[case("5551", "(555)-1")]
    #[case("555123", "(555)-123")]
    #[case("5551234", "(555)-123-4")]
    #[case("5551234567", "(555)-123-4567")]
    #[case("(555)-123-4567", "(555)-123-4567")]
    #[case("+1 555 123 45", "(155)-512-345")]
    fn groups_digits(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(mask_phone(input), expected);
    }

    #[test]
    fn keeps_only_first_ten_digits() {
        assert_eq!(mask_phone("123456789012345"), "(123)-456-7890");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        assert_eq!(mask_phone("٥٥٥123"), "(123");
    }

    #[rstest]
    #[case("(555)-123-4567", "5551234567")]
    #[case("(555)-123-45678", "55512345678")]
    #[case("", "")]
    fn digits_are_recovered_without_truncation(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(phone_digits(input), expected);
    }

    proptest! {
        #[test]
        fn masking_is_idempotent(input in ".*") {
            let once = mask_phone(&input);
            prop_assert_eq!(mask_phone(&once), once);
        }

        #[test]
        fn masked_value_never_exceeds_pattern(input in ".*") {
            prop_assert!(mask_phone(&input).len() <= MASKED_PHONE_LEN);
        }

        #[test]
        fn long_inputs_use_first_ten_digits(digits in "[0-9]{10,20}") {
            let masked = mask_phone(&digits);
            prop_assert_eq!(masked.len(), MASKED_PHONE_LEN);
            prop_assert_eq!(phone_digits(&masked), digits.get(..PHONE_DIGITS).unwrap_or_default());
        }
    }
}
