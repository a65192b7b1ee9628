// This file is part of Vernier.
//
// Vernier is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Vernier is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Vernier.  If not, see <http://www.gnu.org/licenses/>.
use crate::{dimension::SiDimensions, scalar::ScalarKind};
use std::fmt;
use thiserror::Error;

// Dimensionless
pub(crate) mod degrees;
pub(crate) mod dimensionless;
pub(crate) mod percent;
pub(crate) mod radians;

// Distance
pub(crate) mod centimeters;
pub(crate) mod feet;
pub(crate) mod inches;
pub(crate) mod kilometers;
pub(crate) mod meters;
pub(crate) mod miles;
pub(crate) mod millimeters;
pub(crate) mod nautical_miles;

// Area and volume
pub(crate) mod cubic_meters;
pub(crate) mod hectares;
pub(crate) mod liters;
pub(crate) mod square_meters;

// Mass
pub(crate) mod grams;
pub(crate) mod kilograms;
pub(crate) mod pounds;
pub(crate) mod tonnes;

// Time
pub(crate) mod days;
pub(crate) mod hours;
pub(crate) mod milliseconds;
pub(crate) mod minutes;
pub(crate) mod seconds;
pub(crate) mod weeks;

// Temperature
pub(crate) mod celsius;
pub(crate) mod fahrenheit;
pub(crate) mod kelvin;
pub(crate) mod rankine;

// Electrical
pub(crate) mod amperes;
pub(crate) mod coulombs;
pub(crate) mod ohms;
pub(crate) mod volts;

// Substance and luminosity
pub(crate) mod candela;
pub(crate) mod moles;

// Money
pub(crate) mod dollars;
pub(crate) mod euros;

// Named derived units
pub(crate) mod hertz;
pub(crate) mod joules;
pub(crate) mod kilometers_per_hour;
pub(crate) mod knots;
pub(crate) mod meters_per_second;
pub(crate) mod newtons;
pub(crate) mod pascals;
pub(crate) mod watts;

/// Every cataloged unit, in registration order. The process-wide registry is
/// preloaded from this table before any arithmetic runs.
pub(crate) const STANDARD_UNITS: &[&UnitDef] = &[
    &dimensionless::DIMENSIONLESS,
    &radians::RADIANS,
    &degrees::DEGREES,
    &percent::PERCENT,
    &meters::METERS,
    &kilometers::KILOMETERS,
    &centimeters::CENTIMETERS,
    &millimeters::MILLIMETERS,
    &feet::FEET,
    &inches::INCHES,
    &miles::MILES,
    &nautical_miles::NAUTICAL_MILES,
    &square_meters::SQUARE_METERS,
    &hectares::HECTARES,
    &cubic_meters::CUBIC_METERS,
    &liters::LITERS,
    &kilograms::KILOGRAMS,
    &grams::GRAMS,
    &pounds::POUNDS,
    &tonnes::TONNES,
    &seconds::SECONDS,
    &milliseconds::MILLISECONDS,
    &minutes::MINUTES,
    &hours::HOURS,
    &days::DAYS,
    &weeks::WEEKS,
    &amperes::AMPERES,
    &kelvin::KELVIN,
    &celsius::CELSIUS,
    &fahrenheit::FAHRENHEIT,
    &rankine::RANKINE,
    &moles::MOLES,
    &candela::CANDELA,
    &dollars::DOLLARS,
    &euros::EUROS,
    &newtons::NEWTONS,
    &joules::JOULES,
    &watts::WATTS,
    &hertz::HERTZ,
    &pascals::PASCALS,
    &meters_per_second::METERS_PER_SECOND,
    &kilometers_per_hour::KILOMETERS_PER_HOUR,
    &knots::KNOTS,
    &coulombs::COULOMBS,
    &volts::VOLTS,
    &ohms::OHMS,
];

/// The static description a unit is registered from: one entry per cataloged
/// unit, defined next to its constructor macro in this module's submodules.
/// `scale` and `offset` express the affine conversion to the standard unit of
/// `dimensions`: `standard_value = value * scale + offset`.
#[derive(Clone, Copy, Debug)]
pub struct UnitDef {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub dimensions: SiDimensions,
    pub scale: f64,
    pub offset: f64,
    pub standard: bool,
}

/// A measurement unit interned by a registry: its dimension vector, its
/// abbreviation, and the affine conversion to the standard unit of its
/// dimension. Exactly one unit per dimension is standard (scale 1, offset 0);
/// all scalar magnitudes are stored in that unit. Units are never destroyed
/// or mutated once interned, so `&'static Unit` handles are the working
/// currency and pointer identity is meaningful within a registry.
#[derive(Debug)]
pub struct Unit {
    name: String,
    abbreviation: String,
    dimensions: SiDimensions,
    scale: f64,
    offset: f64,
    standard: bool,
}

impl Unit {
    pub(crate) fn from_def(def: &UnitDef) -> Self {
        Self {
            name: def.name.to_owned(),
            abbreviation: def.abbreviation.to_owned(),
            dimensions: def.dimensions,
            scale: def.scale,
            offset: def.offset,
            standard: def.standard,
        }
    }

    /// A unit minted by the registry for a dimension vector no cataloged
    /// standard unit covers. It coincides with the standard unit of its
    /// dimension: scale 1, offset 0.
    pub(crate) fn synthesized(dimensions: SiDimensions) -> Self {
        Self {
            name: dimensions.canonical_key(),
            abbreviation: dimensions.si_abbreviation(),
            dimensions,
            scale: 1.0,
            offset: 0.0,
            standard: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn dimensions(&self) -> SiDimensions {
        self.dimensions
    }

    pub fn is_standard(&self) -> bool {
        self.standard
    }

    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// Convert a point on this unit's scale to the standard unit of its
    /// dimension: both scale and offset apply, so 0°C lands on 273.15K.
    pub fn to_standard(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Convert a point expressed in the standard unit of this unit's
    /// dimension back onto this unit's scale. Inverse of `to_standard` up to
    /// floating-point rounding.
    pub fn from_standard(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }

    /// Convert a difference expressed in this unit to the standard unit.
    /// Differences scale but do not shift: a span of 20°C is a span of 20K.
    pub fn delta_to_standard(&self, value: f64) -> f64 {
        value * self.scale
    }

    /// Inverse of `delta_to_standard` up to floating-point rounding.
    pub fn delta_from_standard(&self, value: f64) -> f64 {
        value / self.scale
    }

    /// The Unit-assignment boundary check: fails unless this unit measures
    /// `expected`.
    pub(crate) fn ensure_dimension(&self, expected: SiDimensions) -> Result<(), UnitError> {
        if self.dimensions == expected {
            Ok(())
        } else {
            Err(UnitError::DimensionMismatch {
                unit: self.abbreviation.clone(),
                unit_dimensions: self.dimensions.canonical_key(),
                expected: expected.canonical_key(),
            })
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.abbreviation)
    }
}

/// The failures this engine surfaces explicitly. Numeric edge cases are not
/// among them: division by zero, overflow, and NaN all propagate per IEEE-754.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum UnitError {
    #[error("no unit is registered under the abbreviation '{0}'")]
    UnknownUnit(String),

    #[error("unit '{unit}' measures {unit_dimensions}, not {expected}")]
    DimensionMismatch {
        unit: String,
        unit_dimensions: String,
        expected: String,
    },

    #[error("cannot {op} {lhs} and {rhs} scalars")]
    KindMismatch {
        op: &'static str,
        lhs: ScalarKind,
        rhs: ScalarKind,
    },

    #[error("the abbreviation '{0}' is already registered")]
    DuplicateAbbreviation(String),

    #[error("the {0} dimension already has a standard unit")]
    DuplicateStandard(String),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::registry::registry;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_trip_all_cataloged_units() {
        for def in crate::unit::STANDARD_UNITS {
            let unit = Unit::from_def(def);
            for v in [-273.15, -1.0, 0.0, 0.5, 1.0, 100.0, 36_089.0] {
                assert_abs_diff_eq!(
                    unit.from_standard(unit.to_standard(v)),
                    v,
                    epsilon = 1e-9 * v.abs().max(1.0)
                );
                assert_abs_diff_eq!(
                    unit.delta_from_standard(unit.delta_to_standard(v)),
                    v,
                    epsilon = 1e-9 * v.abs().max(1.0)
                );
            }
        }
    }

    #[test]
    fn test_affine_conversions() {
        let celsius = Unit::from_def(&celsius::CELSIUS);
        assert_abs_diff_eq!(celsius.to_standard(0.0), 273.15);
        assert_abs_diff_eq!(celsius.to_standard(100.0), 373.15, epsilon = 1e-12);
        let fahrenheit = Unit::from_def(&fahrenheit::FAHRENHEIT);
        assert_abs_diff_eq!(fahrenheit.to_standard(32.0), 273.15, epsilon = 1e-9);
        assert_abs_diff_eq!(fahrenheit.to_standard(212.0), 373.15, epsilon = 1e-9);
        assert!(celsius.is_affine());
        assert!(!Unit::from_def(&kelvin::KELVIN).is_affine());
    }

    #[test]
    fn test_hours_to_seconds_factor() {
        let hours = Unit::from_def(&hours::HOURS);
        assert_abs_diff_eq!(hours.to_standard(2.0), 7200.0);
    }

    #[test]
    fn test_catalog_is_loadable_and_accessors_resolve() {
        // Forces the global registry through the whole table; a defect in any
        // def panics here rather than in downstream arithmetic.
        assert!(registry().unit("m").is_ok());
        assert!(std::ptr::eq(crate::meters(), crate::meters()));
        assert_eq!(crate::hours().abbreviation(), "h");
        assert_eq!(crate::celsius().dimensions(), kelvin::KELVIN.dimensions);
    }

    #[test]
    fn test_dimension_guard() {
        let meters = Unit::from_def(&meters::METERS);
        assert!(meters.ensure_dimension(meters.dimensions()).is_ok());
        let err = meters
            .ensure_dimension(seconds::SECONDS.dimensions)
            .unwrap_err();
        assert!(matches!(err, UnitError::DimensionMismatch { .. }));
    }
}
