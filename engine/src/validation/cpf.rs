// CPF (Cadastro de Pessoas Físicas) normalization and checksum validation.

pub const CPF_LENGTH: usize = 11;

/// Reduces a raw cell to its digits, restoring leading zeros that spreadsheets
/// drop when a CPF is typed as a number.
///
/// Absent input yields an empty string, which callers read as "not informed".
/// Results with more than 11 digits are returned as-is and fail validation later.
pub fn normalize_cpf(raw: Option<&str>) -> String {
    let digits: String = match raw {
        Some(text) => text.chars().filter(|c| c.is_ascii_digit()).collect(),
        None => return String::new(),
    };

    if (1..CPF_LENGTH).contains(&digits.len()) {
        format!("{:0>width$}", digits, width = CPF_LENGTH)
    } else {
        digits
    }
}

/// Formal validation using the two modulo-11 check digits.
pub fn is_valid_cpf(code: &str) -> bool {
    if code.len() != CPF_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = code.bytes().map(|b| u32::from(b - b'0')).collect();
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let first = check_digit(&digits[..9]);
    let second = check_digit(&digits[..10]);
    digits[9] == first && digits[10] == second
}

// Weights run from len+1 down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top_weight - i as u32))
        .sum();
    (sum * 10 % 11) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [&str; 4] = ["12345678909", "52998224725", "11144477735", "01234567890"];

    #[test]
    fn test_known_cpfs_are_valid() {
        for cpf in VALID {
            assert!(is_valid_cpf(cpf), "{} should be valid", cpf);
        }
    }

    #[test]
    fn test_changed_last_digit_is_invalid() {
        for cpf in VALID {
            let (body, last) = cpf.split_at(10);
            let last = last.parse::<u32>().unwrap();
            let tampered = format!("{}{}", body, (last + 1) % 10);
            assert!(!is_valid_cpf(&tampered), "{} should be invalid", tampered);
        }
    }

    #[test]
    fn test_repeated_digits_are_invalid() {
        for d in 0..=9 {
            let code = d.to_string().repeat(11);
            assert!(!is_valid_cpf(&code), "{} should be invalid", code);
        }
    }

    #[test]
    fn test_wrong_shape_is_invalid() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("1234567890"));
        assert!(!is_valid_cpf("123456789090"));
        assert!(!is_valid_cpf("123.456.789-09"));
        assert!(!is_valid_cpf("1234567890a"));
        assert!(!is_valid_cpf("１２３４５６７８９０９"));
    }

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize_cpf(Some("123.456.789-09")), "12345678909");
        assert_eq!(normalize_cpf(Some(" 529 982 247/25 ")), "52998224725");
    }

    #[test]
    fn test_normalize_pads_short_codes() {
        assert_eq!(normalize_cpf(Some("1234")), "00000001234");
        assert_eq!(normalize_cpf(Some("1234567890")), "01234567890");
        assert_eq!(normalize_cpf(Some("7")), "00000000007");
    }

    #[test]
    fn test_normalize_passes_through_other_lengths() {
        assert_eq!(normalize_cpf(None), "");
        assert_eq!(normalize_cpf(Some("")), "");
        assert_eq!(normalize_cpf(Some("n/a")), "");
        assert_eq!(normalize_cpf(Some("123456789012")), "123456789012");
    }

    #[test]
    fn test_padded_code_can_validate() {
        assert!(is_valid_cpf(&normalize_cpf(Some("1234567890"))));
    }
}
