use serde::Serialize;

/// Conversion family a unit symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Length factors: meters per 1 of the symbol.
/// Slice order is the order symbols are listed to users.
pub const LENGTH_UNITS: &[(&str, f64)] = &[
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

/// Weight factors: kilograms per 1 of the symbol.
pub const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("mg", 0.000001),
    ("g", 0.001),
    ("kg", 1.0),
    ("oz", 0.0283495),
    ("lb", 0.453592),
    ("ton", 907.185),
];

/// Temperature symbols. Affine, handled by formula rather than table.
pub const TEMP_UNITS: &[&str] = &["c", "f", "k"];

/// Look up the base-unit factor for a symbol in a linear table.
pub(crate) fn factor(table: &[(&str, f64)], unit: &str) -> Option<f64> {
    table.iter().find(|(sym, _)| *sym == unit).map(|(_, f)| *f)
}

pub(crate) fn symbols(table: &[(&'static str, f64)]) -> Vec<&'static str> {
    table.iter().map(|(sym, _)| *sym).collect()
}

/// Symbols known for one category, in listing order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryUnits {
    pub category: Category,
    pub units: Vec<&'static str>,
}

/// All supported units grouped by category.
/// Length and weight lists follow table order; temperature is [c, f, k].
pub fn supported_units() -> Vec<CategoryUnits> {
    vec![
        CategoryUnits {
            category: Category::Length,
            units: symbols(LENGTH_UNITS),
        },
        CategoryUnits {
            category: Category::Weight,
            units: symbols(WEIGHT_UNITS),
        },
        CategoryUnits {
            category: Category::Temperature,
            units: TEMP_UNITS.to_vec(),
        },
    ]
}
