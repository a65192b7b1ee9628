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
use crate::{
    dimension::SiDimensions,
    float::ScalarFloat,
    unit::{Unit, UnitError},
};
use approx::AbsDiffEq;
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// Whether a scalar is a point on a measurement scale or a difference
/// between two points. An absolute 14:02 plus a relative 3s is an absolute
/// 14:02:03; an absolute 14:02 minus an absolute 14:01 is a relative 60s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Absolute,
    Relative,
}

impl ScalarKind {
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            Self::Absolute => "Abs ",
            Self::Relative => "Rel ",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Absolute => write!(f, "Absolute"),
            Self::Relative => write!(f, "Relative"),
        }
    }
}

/// A value with a unit. The magnitude is stored once, in the standard unit
/// of the unit's dimension; the attached unit only says how to display it.
/// Scalars are immutable `Copy` values: all arithmetic mints new ones.
///
/// The float representation is the caller's choice between `f64` (the
/// default) and `f32` (as [Scalar32]). Numeric edge cases are never errors:
/// division by zero yields IEEE infinity or NaN, and NaN propagates through
/// arithmetic per IEEE-754.
#[derive(Clone, Copy, Debug)]
pub struct Scalar<F: ScalarFloat = f64> {
    si: OrderedFloat<F>,
    unit: &'static Unit,
    kind: ScalarKind,
}

/// Single-precision scalars, for callers trading accuracy for space.
pub type Scalar32 = Scalar<f32>;

impl<F: ScalarFloat> Scalar<F> {
    /// A scalar from a magnitude expressed in `unit`; the magnitude is
    /// converted to SI-canonical form immediately and stored once. Absolute
    /// scalars convert as points on the unit's scale (offset applies),
    /// relative scalars as differences (scale only).
    pub fn new(kind: ScalarKind, value: F, unit: &'static Unit) -> Self {
        let si = match kind {
            ScalarKind::Absolute => unit.to_standard(value.into_f64()),
            ScalarKind::Relative => unit.delta_to_standard(value.into_f64()),
        };
        Self {
            si: OrderedFloat(F::from_f64(si)),
            unit,
            kind,
        }
    }

    pub fn relative(value: F, unit: &'static Unit) -> Self {
        Self::new(ScalarKind::Relative, value, unit)
    }

    pub fn absolute(value: F, unit: &'static Unit) -> Self {
        Self::new(ScalarKind::Absolute, value, unit)
    }

    pub(crate) fn from_si(si: F, unit: &'static Unit, kind: ScalarKind) -> Self {
        Self {
            si: OrderedFloat(si),
            unit,
            kind,
        }
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn is_absolute(&self) -> bool {
        self.kind == ScalarKind::Absolute
    }

    pub fn is_relative(&self) -> bool {
        self.kind == ScalarKind::Relative
    }

    pub fn unit(&self) -> &'static Unit {
        self.unit
    }

    pub fn dimensions(&self) -> SiDimensions {
        self.unit.dimensions()
    }

    /// The stored magnitude, in the standard unit of this scalar's
    /// dimension.
    pub fn si_value(&self) -> F {
        self.si.0
    }

    fn display_value_in(&self, unit: &Unit) -> F {
        let si = self.si.0.into_f64();
        let v = match self.kind {
            ScalarKind::Absolute => unit.from_standard(si),
            ScalarKind::Relative => unit.delta_from_standard(si),
        };
        F::from_f64(v)
    }

    /// The magnitude expressed in this scalar's own unit. Converting to SI
    /// and back is idempotent up to floating-point rounding.
    pub fn value_in_unit(&self) -> F {
        self.display_value_in(self.unit)
    }

    /// The magnitude expressed in another unit of the same dimension.
    pub fn value_in(&self, unit: &'static Unit) -> Result<F, UnitError> {
        unit.ensure_dimension(self.dimensions())?;
        Ok(self.display_value_in(unit))
    }

    /// The same scalar displayed in another unit of the same dimension. The
    /// SI magnitude is untouched.
    pub fn with_display_unit(&self, unit: &'static Unit) -> Result<Self, UnitError> {
        unit.ensure_dimension(self.dimensions())?;
        Ok(Self {
            si: self.si,
            unit,
            kind: self.kind,
        })
    }

    pub fn f64(&self) -> f64 {
        self.value_in_unit().into_f64()
    }

    pub fn f32(&self) -> f32 {
        self.value_in_unit().into_f64() as f32
    }

    pub(crate) fn map_display(&self, op: impl FnOnce(F) -> F) -> Self {
        Self::new(self.kind, op(self.value_in_unit()), self.unit)
    }
}

/// The elementary math functions. Every one of these applies to the
/// *displayed* magnitude and returns a scalar of the same kind and unit:
/// `sqrt` of 9 m² is 3 m², not 3 m, and `sin` of a length is accepted
/// without complaint. The engine stays out of the way here; dimensional
/// sense is the caller's responsibility.
impl<F: ScalarFloat> Scalar<F> {
    pub fn abs(&self) -> Self {
        self.map_display(F::abs)
    }

    pub fn acos(&self) -> Self {
        self.map_display(F::acos)
    }

    pub fn asin(&self) -> Self {
        self.map_display(F::asin)
    }

    pub fn atan(&self) -> Self {
        self.map_display(F::atan)
    }

    pub fn cbrt(&self) -> Self {
        self.map_display(F::cbrt)
    }

    pub fn ceil(&self) -> Self {
        self.map_display(F::ceil)
    }

    pub fn cos(&self) -> Self {
        self.map_display(F::cos)
    }

    pub fn cosh(&self) -> Self {
        self.map_display(F::cosh)
    }

    pub fn exp(&self) -> Self {
        self.map_display(F::exp)
    }

    pub fn exp_m1(&self) -> Self {
        self.map_display(F::exp_m1)
    }

    pub fn floor(&self) -> Self {
        self.map_display(F::floor)
    }

    pub fn ln(&self) -> Self {
        self.map_display(F::ln)
    }

    pub fn ln_1p(&self) -> Self {
        self.map_display(F::ln_1p)
    }

    pub fn log10(&self) -> Self {
        self.map_display(F::log10)
    }

    pub fn powf(&self, exponent: F) -> Self {
        self.map_display(|v| v.powf(exponent))
    }

    pub fn powi(&self, exponent: i32) -> Self {
        self.map_display(|v| v.powi(exponent))
    }

    pub fn recip(&self) -> Self {
        self.map_display(F::recip)
    }

    pub fn round(&self) -> Self {
        self.map_display(F::round)
    }

    pub fn signum(&self) -> Self {
        self.map_display(F::signum)
    }

    pub fn sin(&self) -> Self {
        self.map_display(F::sin)
    }

    pub fn sinh(&self) -> Self {
        self.map_display(F::sinh)
    }

    pub fn sqrt(&self) -> Self {
        self.map_display(F::sqrt)
    }

    pub fn tan(&self) -> Self {
        self.map_display(F::tan)
    }

    pub fn tanh(&self) -> Self {
        self.map_display(F::tanh)
    }

    pub fn to_degrees(&self) -> Self {
        self.map_display(F::to_degrees)
    }

    pub fn to_radians(&self) -> Self {
        self.map_display(F::to_radians)
    }
}

/// Equal means: same kind, same dimension, identical SI magnitude. An
/// absolute and a relative scalar never compare equal, whatever their
/// magnitudes. The display units play no part: 100 cm equals 1 m.
impl<F: ScalarFloat> PartialEq for Scalar<F> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.dimensions() == other.dimensions()
            && self.si == other.si
    }
}

impl<F: ScalarFloat> Eq for Scalar<F> {}

impl<F: ScalarFloat> Hash for Scalar<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.dimensions().hash(state);
        self.si.hash(state);
    }
}

/// Scalars order by SI magnitude, but only against the same kind and
/// dimension; any other pairing has no defined order.
impl<F: ScalarFloat> PartialOrd for Scalar<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.kind == other.kind && self.dimensions() == other.dimensions() {
            Some(self.si.cmp(&other.si))
        } else {
            None
        }
    }
}

impl<F: ScalarFloat> AbsDiffEq for Scalar<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.kind == other.kind
            && self.dimensions() == other.dimensions()
            && self.si.0.abs_diff_eq(&other.si.0, epsilon)
    }
}

impl<F: ScalarFloat> fmt::Display for Scalar<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.kind.prefix())?;
        }
        write!(
            f,
            "{:0.4}{}",
            self.value_in_unit().into_f64(),
            self.unit.abbreviation()
        )
    }
}

#[cfg(test)]
mod test {
    use crate::{
        abs_celsius, abs_kelvin, celsius, centimeters, hours, kelvin, meters, scalar, seconds,
        unit::UnitError, Scalar, Scalar32,
    };
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn test_si_storage_and_round_trip() {
        let d = hours!(2);
        assert_abs_diff_eq!(d.si_value(), 7_200.0);
        assert_abs_diff_eq!(d.value_in_unit(), 2.0);
        assert_abs_diff_eq!(d.value_in(crate::seconds()).unwrap(), 7_200.0);
    }

    #[test]
    fn test_value_in_rejects_foreign_dimension() {
        let err = meters!(1).value_in(crate::seconds()).unwrap_err();
        assert!(matches!(err, UnitError::DimensionMismatch { .. }));
        assert!(meters!(1).with_display_unit(crate::seconds()).is_err());
    }

    #[test]
    fn test_display_unit_is_cosmetic() {
        let m = meters!(1).with_display_unit(crate::centimeters()).unwrap();
        assert_abs_diff_eq!(m.value_in_unit(), 100.0);
        assert_abs_diff_eq!(m.si_value(), 1.0);
        assert_eq!(m, meters!(1));
    }

    #[test]
    fn test_relative_conversions_ignore_the_offset() {
        // A 20°C reading sits at 293.15K; a 20°C span is a 20K span.
        assert_abs_diff_eq!(abs_celsius!(20).si_value(), 293.15, epsilon = 1e-12);
        assert_abs_diff_eq!(celsius!(20).si_value(), 20.0);
        assert_eq!(celsius!(20), kelvin!(20));
        assert_abs_diff_eq!(
            abs_celsius!(20).value_in(crate::kelvin()).unwrap(),
            293.15,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_kinds_never_compare_equal() {
        assert_ne!(abs_kelvin!(300), kelvin!(300));
        assert_eq!(kelvin!(300), kelvin!(300));
        assert!(abs_kelvin!(300).partial_cmp(&kelvin!(300)).is_none());
    }

    #[test]
    fn test_equality_ignores_display_unit() {
        assert_eq!(hours!(2), seconds!(7_200));
        let mut set = HashSet::new();
        set.insert(hours!(2));
        set.insert(seconds!(7_200));
        assert_eq!(set.len(), 1);
        assert_abs_diff_eq!(centimeters!(100), meters!(1));
    }

    #[test]
    fn test_ordering() {
        assert!(meters!(1) < meters!(2));
        assert!(centimeters!(150) > meters!(1));
        assert!(meters!(1).partial_cmp(&seconds!(1)).is_none());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(format!("{}", meters!(1.5)), "1.5000m");
        assert_eq!(format!("{:#}", abs_kelvin!(300)), "Abs 300.0000K");
        assert_eq!(format!("{:#}", hours!(2)), "Rel 2.0000h");
        assert_eq!(format!("{}", scalar!(0.25)), "0.2500");
    }

    #[test]
    fn test_math_functions_use_display_magnitude() {
        let nine = Scalar::relative(9.0, crate::square_meters());
        let three = nine.sqrt();
        assert_abs_diff_eq!(three.value_in_unit(), 3.0);
        assert!(std::ptr::eq(three.unit(), nine.unit()));

        // 26.6°C rounds as 27°C, not as its 299.75K SI magnitude.
        let warm = abs_celsius!(26.6).round();
        assert_abs_diff_eq!(warm.value_in_unit(), 27.0, epsilon = 1e-12);
        assert!(warm.is_absolute());

        let k = kelvin!(4).recip();
        assert_abs_diff_eq!(k.value_in_unit(), 0.25);
        assert_eq!(k.unit().abbreviation(), "K");
    }

    #[test]
    fn test_f32_scalars() {
        let d = Scalar32::relative(2.0, crate::hours());
        assert_abs_diff_eq!(d.si_value(), 7_200.0f32);
        assert_abs_diff_eq!(d.value_in(crate::seconds()).unwrap(), 7_200.0f32);
        assert_eq!(format!("{}", d), "2.0000h");
    }

    #[test]
    fn test_nan_propagates_silently() {
        let q = scalar!(0.0).recip();
        assert!(q.value_in_unit().is_infinite());
        let nan = meters!(f64::NAN);
        assert!(nan.si_value().is_nan());
        // OrderedFloat semantics: NaN equals NaN, so scalars stay Eq-lawful.
        assert_eq!(nan, meters!(f64::NAN));
    }
}
