use crate::units::error::UnitError;
use crate::units::types::ConversionRequest;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Shape of a conversion line: number, unit, "to", unit.
    /// Examples: "100 ft to m", "-40 c to f", "2.5e3 mm to km"
    static ref CONVERSION_PATTERN: Regex = Regex::new(
        r"(?i)^-?\d+(\.\d+)?([eE][+-]?\d+)?\s+[a-zA-Z]+\s+to\s+[a-zA-Z]+"
    ).unwrap();
}

/// Check if a line looks like a conversion expression
pub fn looks_like_conversion(s: &str) -> bool {
    CONVERSION_PATTERN.is_match(s.trim())
}

/// Parse a conversion expression like "100 ft to m".
///
/// Splits on whitespace; at least four tokens are required and the third
/// must be the word "to". Tokens past the fourth are ignored. Unit tokens
/// are returned exactly as written; `convert` lowercases them at dispatch.
pub fn parse_conversion(expression: &str) -> Result<ConversionRequest, UnitError> {
    let tokens: Vec<&str> = expression.split_whitespace().collect();

    if tokens.len() < 4 || !tokens[2].eq_ignore_ascii_case("to") {
        return Err(UnitError::InvalidFormat);
    }

    let value: f64 = tokens[0]
        .parse()
        .map_err(|_| UnitError::InvalidNumber(tokens[0].to_string()))?;

    Ok(ConversionRequest {
        value,
        from_unit: tokens[1].to_string(),
        to_unit: tokens[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_conversion() {
        let request = parse_conversion("100 ft to m").unwrap();
        assert_eq!(request.value, 100.0);
        assert_eq!(request.from_unit, "ft");
        assert_eq!(request.to_unit, "m");
    }

    #[test]
    fn test_parse_preserves_unit_case() {
        let request = parse_conversion("100 FT To M").unwrap();
        assert_eq!(request.from_unit, "FT");
        assert_eq!(request.to_unit, "M");
    }

    #[test]
    fn test_parse_negative_and_decimal_values() {
        let request = parse_conversion("-40 c to f").unwrap();
        assert_eq!(request.value, -40.0);

        let request = parse_conversion("2.5 km to mi").unwrap();
        assert_eq!(request.value, 2.5);
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let request = parse_conversion("100 ft to m please").unwrap();
        assert_eq!(request.value, 100.0);
        assert_eq!(request.to_unit, "m");
    }

    #[test]
    fn test_parse_missing_to_keyword() {
        assert_eq!(
            parse_conversion("100 ft m").unwrap_err(),
            UnitError::InvalidFormat
        );
        assert_eq!(
            parse_conversion("100 ft into m").unwrap_err(),
            UnitError::InvalidFormat
        );
    }

    #[test]
    fn test_parse_too_few_tokens() {
        assert_eq!(parse_conversion("").unwrap_err(), UnitError::InvalidFormat);
        assert_eq!(
            parse_conversion("100 ft to").unwrap_err(),
            UnitError::InvalidFormat
        );
    }

    #[test]
    fn test_parse_invalid_number() {
        assert_eq!(
            parse_conversion("abc ft to m").unwrap_err(),
            UnitError::InvalidNumber("abc".to_string())
        );
    }

    #[test]
    fn test_conversion_detection() {
        assert!(looks_like_conversion("100 ft to m"));
        assert!(looks_like_conversion("-40 c to f"));
        assert!(looks_like_conversion("2.5e3 mm to km"));
        assert!(looks_like_conversion("  100 FT TO M  "));

        assert!(!looks_like_conversion("2 + 3"));
        assert!(!looks_like_conversion("100"));
        assert!(!looks_like_conversion("ft to m"));
        assert!(!looks_like_conversion(""));
    }
}
