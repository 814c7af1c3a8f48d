// Unit conversion: category-scoped linear conversions pivoted through a
// common base unit (meters, kilograms), affine temperature formulas, and
// parsing of free-text conversion expressions like "100 ft to m".

pub mod convert;
pub mod error;
pub mod parser;
pub mod tables;
pub mod types;

pub use convert::{convert, convert_length, convert_temperature, convert_weight};
pub use error::UnitError;
pub use parser::{looks_like_conversion, parse_conversion};
pub use tables::{supported_units, Category, CategoryUnits};
pub use types::ConversionRequest;
