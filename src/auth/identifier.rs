// CPF normalization
// Accepts the identifier as typed (with or without punctuation) and rewrites
// it into the punctuated form used as the credential table key.

/// Number of digits in a CPF
const CPF_DIGITS: usize = 11;

/// Strip every non-digit and format the first eleven digits as `DDD.DDD.DDD-DD`.
///
/// Digits past the eleventh are kept unchanged after the formatted prefix.
/// Inputs with fewer than eleven digits come back as the bare digit string,
/// which never matches a table key.
pub fn normalize_cpf(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < CPF_DIGITS {
        return digits;
    }

    let (cpf, rest) = digits.split_at(CPF_DIGITS);
    format!(
        "{}.{}.{}-{}{}",
        &cpf[0..3],
        &cpf[3..6],
        &cpf[6..9],
        &cpf[9..11],
        rest
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_input_is_unchanged() {
        assert_eq!(normalize_cpf("590.167.064-70"), "590.167.064-70");
    }

    #[test]
    fn test_bare_digits_are_formatted() {
        assert_eq!(normalize_cpf("59016706470"), "590.167.064-70");
    }

    #[test]
    fn test_stray_characters_are_stripped() {
        assert_eq!(normalize_cpf(" 590 167/064_70 "), "590.167.064-70");
        assert_eq!(normalize_cpf("cpf: 093-149-994.16"), "093.149.994-16");
    }

    #[test]
    fn test_short_input_keeps_bare_digits() {
        assert_eq!(normalize_cpf("123.456"), "123456");
        assert_eq!(normalize_cpf(""), "");
    }

    #[test]
    fn test_extra_digits_follow_the_formatted_prefix() {
        assert_eq!(normalize_cpf("1234567890012"), "123.456.789-0012");
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        // Arabic-Indic digits are not CPF digits
        assert_eq!(normalize_cpf("١٢٣59016706470"), "590.167.064-70");
    }
}
