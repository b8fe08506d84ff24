//! Luhn mod-10 checksum validation.

/// Validate a digits-only value with the Luhn checksum.
///
/// Walking from the right-most digit, every second digit is doubled and
/// doubled values of ten or more are reduced by nine. The value is valid iff
/// the accumulated sum is divisible by ten. Anchoring the alternation at the
/// right end keeps the doubling positions correct for both 15- and 16-digit
/// card numbers.
pub fn is_valid(digits: &str) -> bool {
    let digits: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.is_empty() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
