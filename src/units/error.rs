use crate::units::tables::{symbols, Category, LENGTH_UNITS, TEMP_UNITS, WEIGHT_UNITS};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Symbol not present in the table for the category being used
    UnsupportedUnit { category: Category, unit: String },
    /// from/to do not both belong to a single category
    CategoryMismatch,
    /// Input does not match the "<value> <unit> to <unit>" shape
    InvalidFormat,
    /// The value token is not a floating-point literal
    InvalidNumber(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::UnsupportedUnit { category, unit } => write!(
                f,
                "Unsupported {} unit '{}'. Supported: {}",
                category,
                unit,
                valid_symbols(*category).join(", ")
            ),
            UnitError::CategoryMismatch => {
                write!(f, "Cannot convert between different unit types")
            }
            UnitError::InvalidFormat => {
                write!(f, "Invalid conversion format. Use: 'value unit to unit'")
            }
            UnitError::InvalidNumber(token) => {
                write!(f, "Invalid number in conversion: '{}'", token)
            }
        }
    }
}

impl std::error::Error for UnitError {}

fn valid_symbols(category: Category) -> Vec<&'static str> {
    match category {
        Category::Length => symbols(LENGTH_UNITS),
        Category::Weight => symbols(WEIGHT_UNITS),
        Category::Temperature => TEMP_UNITS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_unit_message_enumerates_symbols() {
        let err = UnitError::UnsupportedUnit {
            category: Category::Length,
            unit: "xx".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'xx'"));
        for sym in ["mm", "cm", "m", "km", "in", "ft", "yd", "mi"] {
            assert!(msg.contains(sym), "message should list '{}': {}", sym, msg);
        }
    }

    #[test]
    fn test_category_mismatch_message() {
        assert_eq!(
            UnitError::CategoryMismatch.to_string(),
            "Cannot convert between different unit types"
        );
    }
}
