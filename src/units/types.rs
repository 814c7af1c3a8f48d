/// Result of parsing a conversion expression
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Numeric value to convert
    pub value: f64,
    /// Source unit symbol, exactly as written in the input
    pub from_unit: String,
    /// Target unit symbol, exactly as written in the input
    pub to_unit: String,
}
