//! Address display helpers.

/// Shorten an account address to `GABC...WXYZ`.
///
/// Empty input yields an empty string. Works on characters, so short or
/// non-ASCII input never panics.
///
/// ```
/// use inheritx_core::format_address;
///
/// assert_eq!(format_address("GABCDEFGHIJKLMNOPQRSTUVWXYZ"), "GABC...WXYZ");
/// assert_eq!(format_address(""), "");
/// ```
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(4).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stellar_address() {
        let address = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";
        assert_eq!(format_address(address), "GBRP...OX2H");
    }

    #[test]
    fn test_short_input() {
        assert_eq!(format_address("abc"), "abc...abc");
        assert_eq!(format_address("abcdefgh"), "abcd...efgh");
    }

    #[test]
    fn test_multibyte_input() {
        assert_eq!(format_address("ééééxyzwüüüü"), "éééé...üüüü");
    }
}
