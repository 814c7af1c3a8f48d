use crate::units::error::UnitError;
use crate::units::tables::{factor, Category, LENGTH_UNITS, TEMP_UNITS, WEIGHT_UNITS};

/// Convert a length value between two symbols from the length table.
/// Pivots through meters: `value * factor[from] / factor[to]`.
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitError> {
    linear_convert(value, from_unit, to_unit, LENGTH_UNITS, Category::Length)
}

/// Convert a weight value between two symbols from the weight table.
/// Pivots through kilograms.
pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitError> {
    linear_convert(value, from_unit, to_unit, WEIGHT_UNITS, Category::Weight)
}

fn linear_convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    table: &[(&str, f64)],
    category: Category,
) -> Result<f64, UnitError> {
    let from_unit = from_unit.to_lowercase();
    let to_unit = to_unit.to_lowercase();

    let from_factor = factor(table, &from_unit).ok_or_else(|| UnitError::UnsupportedUnit {
        category,
        unit: from_unit.clone(),
    })?;
    let to_factor = factor(table, &to_unit).ok_or_else(|| UnitError::UnsupportedUnit {
        category,
        unit: to_unit.clone(),
    })?;

    // To base units first, then to the target unit. No rounding.
    Ok(value * from_factor / to_factor)
}

/// Convert a temperature between c, f, and k.
///
/// Always pivots through Celsius, mirroring the base-unit pivot of the
/// linear tables, so round-trips cancel.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitError> {
    let from_unit = from_unit.to_lowercase();
    let to_unit = to_unit.to_lowercase();

    if !TEMP_UNITS.contains(&from_unit.as_str()) {
        return Err(UnitError::UnsupportedUnit {
            category: Category::Temperature,
            unit: from_unit,
        });
    }
    if !TEMP_UNITS.contains(&to_unit.as_str()) {
        return Err(UnitError::UnsupportedUnit {
            category: Category::Temperature,
            unit: to_unit,
        });
    }

    // Source to Celsius
    let celsius = match from_unit.as_str() {
        "c" => value,
        "f" => (value - 32.0) * 5.0 / 9.0,
        _ => value - 273.15, // k
    };

    // Celsius to target
    Ok(match to_unit.as_str() {
        "c" => celsius,
        "f" => celsius * 9.0 / 5.0 + 32.0,
        _ => celsius + 273.15, // k
    })
}

/// Convert between two unit symbols, inferring the conversion family from
/// the symbols themselves.
///
/// Membership is tested length, then weight, then temperature; the order
/// is the tie-break policy should the tables ever grow an overlapping
/// symbol. Both symbols must land in a single family.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitError> {
    let from_unit = from_unit.to_lowercase();
    let to_unit = to_unit.to_lowercase();

    if factor(LENGTH_UNITS, &from_unit).is_some() && factor(LENGTH_UNITS, &to_unit).is_some() {
        convert_length(value, &from_unit, &to_unit)
    } else if factor(WEIGHT_UNITS, &from_unit).is_some()
        && factor(WEIGHT_UNITS, &to_unit).is_some()
    {
        convert_weight(value, &from_unit, &to_unit)
    } else if TEMP_UNITS.contains(&from_unit.as_str()) && TEMP_UNITS.contains(&to_unit.as_str()) {
        convert_temperature(value, &from_unit, &to_unit)
    } else {
        Err(UnitError::CategoryMismatch)
    }
}
