//! Unit conversion and small domain calculators.
//!
//! Length and mass conversions go through a pivot unit (meters,
//! kilograms) with a multiplicative factor; temperature is affine with
//! Celsius as the pivot. The generic [`convert`] entry point
//! dispatches on string category/unit names, matching the way the
//! catalog is called from dynamically-typed hosts.
//!
//! The finance calculators return a full breakdown struct with every
//! intermediate term, not just the headline figure.

use crate::error::MathError;

/// Converts `value` between two units of the given category.
///
/// Categories: `"length"` (mm, cm, m, km), `"mass"` (g, kg, t),
/// `"temperature"` (celsius, fahrenheit, kelvin). Unit names are
/// case-insensitive.
///
/// # Errors
/// - [`MathError::UnsupportedOperation`] for an unknown category.
/// - [`MathError::UnsupportedUnit`] for an unknown unit within a
///   known category.
///
/// # Examples
/// ```
/// use mathkit::convert::convert;
/// assert_eq!(convert(2.5, "km", "m", "length").unwrap(), 2500.0);
/// assert_eq!(convert(100.0, "celsius", "fahrenheit", "temperature").unwrap(), 212.0);
/// ```
pub fn convert(value: f64, from: &str, to: &str, category: &str) -> Result<f64, MathError> {
    match category.to_ascii_lowercase().as_str() {
        "length" => convert_linear(value, from, to, category, length_factor),
        "mass" => convert_linear(value, from, to, category, mass_factor),
        "temperature" => {
            let celsius = to_celsius(value, from)?;
            from_celsius(celsius, to)
        }
        other => Err(MathError::UnsupportedOperation(format!(
            "unknown conversion category {other:?}"
        ))),
    }
}

fn convert_linear(
    value: f64,
    from: &str,
    to: &str,
    category: &str,
    factor: fn(&str) -> Option<f64>,
) -> Result<f64, MathError> {
    let from_factor = factor(&from.to_ascii_lowercase())
        .ok_or_else(|| unsupported(from, category))?;
    let to_factor = factor(&to.to_ascii_lowercase()).ok_or_else(|| unsupported(to, category))?;
    Ok(value * from_factor / to_factor)
}

fn unsupported(unit: &str, category: &str) -> MathError {
    MathError::UnsupportedUnit {
        unit: unit.to_string(),
        category: category.to_string(),
    }
}

/// Multiplicative factor to meters.
fn length_factor(unit: &str) -> Option<f64> {
    match unit {
        "mm" | "millimeter" | "millimeters" => Some(0.001),
        "cm" | "centimeter" | "centimeters" => Some(0.01),
        "m" | "meter" | "meters" => Some(1.0),
        "km" | "kilometer" | "kilometers" => Some(1000.0),
        _ => None,
    }
}

/// Multiplicative factor to kilograms.
fn mass_factor(unit: &str) -> Option<f64> {
    match unit {
        "g" | "gram" | "grams" => Some(0.001),
        "kg" | "kilogram" | "kilograms" => Some(1.0),
        "t" | "tonne" | "tonnes" => Some(1000.0),
        _ => None,
    }
}

fn to_celsius(value: f64, unit: &str) -> Result<f64, MathError> {
    match unit.to_ascii_lowercase().as_str() {
        "celsius" | "c" => Ok(value),
        "fahrenheit" | "f" => Ok((value - 32.0) * 5.0 / 9.0),
        "kelvin" | "k" => Ok(value - 273.15),
        _ => Err(unsupported(unit, "temperature")),
    }
}

fn from_celsius(celsius: f64, unit: &str) -> Result<f64, MathError> {
    match unit.to_ascii_lowercase().as_str() {
        "celsius" | "c" => Ok(celsius),
        "fahrenheit" | "f" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" | "k" => Ok(celsius + 273.15),
        _ => Err(unsupported(unit, "temperature")),
    }
}

/// Converts meters to kilometers.
pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / 1000.0
}

/// Converts kilometers to meters.
pub fn kilometers_to_meters(kilometers: f64) -> f64 {
    kilometers * 1000.0
}

/// Converts grams to kilograms.
pub fn grams_to_kilograms(grams: f64) -> f64 {
    grams / 1000.0
}

/// Converts kilograms to grams.
pub fn kilograms_to_grams(kilograms: f64) -> f64 {
    kilograms * 1000.0
}

/// Converts kilograms to tonnes.
pub fn kilograms_to_tonnes(kilograms: f64) -> f64 {
    kilograms / 1000.0
}

/// Converts tonnes to kilograms.
pub fn tonnes_to_kilograms(tonnes: f64) -> f64 {
    tonnes * 1000.0
}

/// Applies a caller-supplied conversion factor.
pub fn custom_conversion(value: f64, factor: f64) -> f64 {
    value * factor
}

// ============================================================================
// Finance calculators
// ============================================================================

/// VAT breakdown of a net amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VatBreakdown {
    pub net: f64,
    /// Rate as a percentage, e.g. 20.0 for 20 %.
    pub rate: f64,
    pub tax: f64,
    pub gross: f64,
}

/// Computes VAT on a net amount at the given percentage rate.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `rate` is negative.
///
/// # Examples
/// ```
/// let v = mathkit::convert::vat(100.0, 20.0).unwrap();
/// assert_eq!(v.tax, 20.0);
/// assert_eq!(v.gross, 120.0);
/// ```
pub fn vat(net: f64, rate: f64) -> Result<VatBreakdown, MathError> {
    if rate < 0.0 {
        return Err(MathError::InvalidRange(format!(
            "VAT rate must be non-negative, got {rate}"
        )));
    }
    let tax = net * rate / 100.0;
    Ok(VatBreakdown {
        net,
        rate,
        tax,
        gross: net + tax,
    })
}

/// One year of a straight-line depreciation schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepreciationEntry {
    /// 1-based year number.
    pub year: u32,
    pub expense: f64,
    pub accumulated: f64,
    pub book_value: f64,
}

/// Straight-line depreciation schedule with its per-year entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationSchedule {
    pub cost: f64,
    pub salvage: f64,
    pub years: u32,
    /// Constant annual expense, `(cost − salvage) / years`.
    pub annual_expense: f64,
    pub entries: Vec<DepreciationEntry>,
}

/// Builds a straight-line depreciation schedule.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `years` is zero, either
/// amount is negative, or `salvage` exceeds `cost`.
///
/// # Examples
/// ```
/// let s = mathkit::convert::straight_line_depreciation(10_000.0, 1_000.0, 3).unwrap();
/// assert_eq!(s.annual_expense, 3_000.0);
/// assert_eq!(s.entries.last().unwrap().book_value, 1_000.0);
/// ```
pub fn straight_line_depreciation(
    cost: f64,
    salvage: f64,
    years: u32,
) -> Result<DepreciationSchedule, MathError> {
    if years == 0 {
        return Err(MathError::InvalidRange(
            "depreciation period must be at least one year".into(),
        ));
    }
    if cost < 0.0 || salvage < 0.0 || salvage > cost {
        return Err(MathError::InvalidRange(format!(
            "need 0 <= salvage <= cost, got cost={cost}, salvage={salvage}"
        )));
    }

    let annual_expense = (cost - salvage) / years as f64;
    let mut entries = Vec::with_capacity(years as usize);
    let mut accumulated = 0.0;
    for year in 1..=years {
        accumulated += annual_expense;
        entries.push(DepreciationEntry {
            year,
            expense: annual_expense,
            accumulated,
            book_value: cost - accumulated,
        });
    }
    Ok(DepreciationSchedule {
        cost,
        salvage,
        years,
        annual_expense,
        entries,
    })
}

/// Working-capital figures derived from current assets and liabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingCapital {
    pub current_assets: f64,
    pub current_liabilities: f64,
    /// `assets − liabilities`.
    pub working_capital: f64,
    /// `assets / liabilities`; `None` when liabilities are zero.
    pub current_ratio: Option<f64>,
}

/// Computes working capital and the current ratio.
///
/// # Examples
/// ```
/// let w = mathkit::convert::working_capital(150.0, 100.0);
/// assert_eq!(w.working_capital, 50.0);
/// assert_eq!(w.current_ratio, Some(1.5));
/// ```
pub fn working_capital(current_assets: f64, current_liabilities: f64) -> WorkingCapital {
    let ratio = if current_liabilities == 0.0 {
        None
    } else {
        Some(current_assets / current_liabilities)
    };
    WorkingCapital {
        current_assets,
        current_liabilities,
        working_capital: current_assets - current_liabilities,
        current_ratio: ratio,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        assert_eq!(convert(2.5, "km", "m", "length").unwrap(), 2500.0);
        assert_eq!(convert(150.0, "cm", "m", "length").unwrap(), 1.5);
        assert_eq!(convert(1.0, "m", "mm", "length").unwrap(), 1000.0);
    }

    #[test]
    fn test_mass_conversion() {
        assert_eq!(convert(500.0, "g", "kg", "mass").unwrap(), 0.5);
        assert_eq!(convert(2.0, "t", "kg", "mass").unwrap(), 2000.0);
    }

    #[test]
    fn test_temperature_conversion() {
        assert_eq!(
            convert(100.0, "celsius", "fahrenheit", "temperature").unwrap(),
            212.0
        );
        assert_eq!(
            convert(32.0, "fahrenheit", "celsius", "temperature").unwrap(),
            0.0
        );
        assert_eq!(
            convert(0.0, "celsius", "kelvin", "temperature").unwrap(),
            273.15
        );
        // fahrenheit → kelvin pivots through celsius
        let k = convert(212.0, "f", "k", "temperature").unwrap();
        assert!((k - 373.15).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_unit_and_category() {
        assert!(matches!(
            convert(1.0, "furlong", "m", "length"),
            Err(MathError::UnsupportedUnit { unit, .. }) if unit == "furlong"
        ));
        assert!(matches!(
            convert(1.0, "m", "parsec", "length"),
            Err(MathError::UnsupportedUnit { unit, .. }) if unit == "parsec"
        ));
        assert!(matches!(
            convert(1.0, "m", "kg", "volume"),
            Err(MathError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_direct_helpers() {
        assert_eq!(meters_to_kilometers(1500.0), 1.5);
        assert_eq!(kilometers_to_meters(1.5), 1500.0);
        assert_eq!(grams_to_kilograms(250.0), 0.25);
        assert_eq!(kilograms_to_grams(0.25), 250.0);
        assert_eq!(kilograms_to_tonnes(500.0), 0.5);
        assert_eq!(tonnes_to_kilograms(0.5), 500.0);
        assert_eq!(custom_conversion(3.0, 2.54), 7.62);
    }

    #[test]
    fn test_vat() {
        let v = vat(100.0, 20.0).unwrap();
        assert_eq!(v.tax, 20.0);
        assert_eq!(v.gross, 120.0);
        assert_eq!(v.net, 100.0);
        assert!(matches!(vat(100.0, -1.0), Err(MathError::InvalidRange(_))));
    }

    #[test]
    fn test_depreciation_schedule() {
        let s = straight_line_depreciation(10_000.0, 1_000.0, 3).unwrap();
        assert_eq!(s.annual_expense, 3_000.0);
        assert_eq!(s.entries.len(), 3);
        assert_eq!(s.entries[0].book_value, 7_000.0);
        assert_eq!(s.entries[1].accumulated, 6_000.0);
        assert_eq!(s.entries[2].book_value, 1_000.0);
        assert_eq!(s.entries[2].year, 3);

        assert!(straight_line_depreciation(1000.0, 0.0, 0).is_err());
        assert!(straight_line_depreciation(1000.0, 2000.0, 5).is_err());
    }

    #[test]
    fn test_working_capital() {
        let w = working_capital(150.0, 100.0);
        assert_eq!(w.working_capital, 50.0);
        assert_eq!(w.current_ratio, Some(1.5));

        let zero = working_capital(150.0, 0.0);
        assert_eq!(zero.working_capital, 150.0);
        assert_eq!(zero.current_ratio, None);
    }
}
