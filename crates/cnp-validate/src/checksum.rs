//! Check digit computation for Romanian CNPs.

/// Fixed weighting key applied to the first 12 digits of a CNP when
/// computing the check digit.
pub const VERIFICATION_KEY: [u8; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

/// Compute the check digit for a 12-digit CNP payload.
///
/// Each payload digit is multiplied by the matching verification key digit
/// and the products are summed. The check digit is the sum modulo 11, with
/// a remainder of 10 folded to 1 since a single digit cannot carry it.
pub fn check_digit(payload: &[u8; 12]) -> u8 {
    let total: u32 = payload
        .iter()
        .zip(VERIFICATION_KEY.iter())
        .map(|(&digit, &key)| u32::from(digit) * u32::from(key))
        .sum();

    match total % 11 {
        10 => 1,
        remainder => remainder as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit(&[1, 0, 0, 0, 1, 0, 1, 0, 1, 5, 6, 6]), 2);
        assert_eq!(check_digit(&[5, 0, 0, 0, 1, 0, 1, 0, 1, 9, 6, 2]), 4);
        assert_eq!(check_digit(&[0; 12]), 0);
    }

    #[test]
    fn test_remainder_ten_folds_to_one() {
        // 2*2 + 1*4 + 1*3 + 1*8 + 6*2 + 5*9 = 76, and 76 % 11 == 10
        assert_eq!(check_digit(&[2, 0, 0, 0, 1, 0, 1, 0, 1, 6, 0, 5]), 1);
    }
}
