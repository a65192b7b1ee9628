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
    float::ScalarFloat,
    registry::{registry, UnitRegistry},
    scalar::{Scalar, ScalarKind},
    unit::{Unit, UnitError},
};
use std::ops::{Div, Mul, Neg};

impl<F: ScalarFloat> Scalar<F> {
    /// The display unit for the result of a same-dimension combination: the
    /// left operand's unit when both sides share it, the standard unit of
    /// the dimension otherwise.
    fn combined_unit(&self, other: &Self) -> &'static Unit {
        if std::ptr::eq(self.unit(), other.unit()) {
            self.unit()
        } else {
            registry().resolve(self.dimensions())
        }
    }

    /// Kind-aware addition over a shared dimension: Relative + Relative is
    /// Relative, Absolute + Relative (either order) is Absolute. Adding two
    /// Absolute scalars is meaningless and rejected, as is adding across
    /// dimensions.
    pub fn plus(&self, other: &Self) -> Result<Self, UnitError> {
        other.unit().ensure_dimension(self.dimensions())?;
        let kind = match (self.kind(), other.kind()) {
            (ScalarKind::Relative, ScalarKind::Relative) => ScalarKind::Relative,
            (ScalarKind::Absolute, ScalarKind::Relative)
            | (ScalarKind::Relative, ScalarKind::Absolute) => ScalarKind::Absolute,
            (ScalarKind::Absolute, ScalarKind::Absolute) => {
                return Err(UnitError::KindMismatch {
                    op: "add",
                    lhs: self.kind(),
                    rhs: other.kind(),
                })
            }
        };
        Ok(Self::from_si(
            self.si_value() + other.si_value(),
            self.combined_unit(other),
            kind,
        ))
    }

    /// Kind-aware subtraction over a shared dimension: Relative − Relative
    /// is Relative, Absolute − Relative is Absolute, Absolute − Absolute is
    /// the Relative span between the two points. Relative − Absolute is
    /// meaningless and rejected.
    pub fn minus(&self, other: &Self) -> Result<Self, UnitError> {
        other.unit().ensure_dimension(self.dimensions())?;
        let kind = match (self.kind(), other.kind()) {
            (ScalarKind::Relative, ScalarKind::Relative) => ScalarKind::Relative,
            (ScalarKind::Absolute, ScalarKind::Relative) => ScalarKind::Absolute,
            (ScalarKind::Absolute, ScalarKind::Absolute) => ScalarKind::Relative,
            (ScalarKind::Relative, ScalarKind::Absolute) => {
                return Err(UnitError::KindMismatch {
                    op: "subtract",
                    lhs: self.kind(),
                    rhs: other.kind(),
                })
            }
        };
        Ok(Self::from_si(
            self.si_value() - other.si_value(),
            self.combined_unit(other),
            kind,
        ))
    }

    /// Multiplication across arbitrary dimensions: SI magnitudes multiply
    /// and the product's dimension vector resolves through the process-wide
    /// registry. The result is Absolute only when both operands are.
    pub fn multiply(&self, other: &Self) -> Self {
        self.multiply_in(other, registry())
    }

    pub fn multiply_in(&self, other: &Self, registry: &UnitRegistry) -> Self {
        let kind = if self.is_absolute() && other.is_absolute() {
            ScalarKind::Absolute
        } else {
            ScalarKind::Relative
        };
        Self::from_si(
            self.si_value() * other.si_value(),
            registry.resolve(self.dimensions().multiply(other.dimensions())),
            kind,
        )
    }

    /// Division across arbitrary dimensions; see [Scalar::multiply].
    /// Dividing by a zero magnitude yields IEEE infinity or NaN, never an
    /// error.
    pub fn divide(&self, other: &Self) -> Self {
        self.divide_in(other, registry())
    }

    pub fn divide_in(&self, other: &Self, registry: &UnitRegistry) -> Self {
        let kind = if self.is_absolute() && other.is_absolute() {
            ScalarKind::Absolute
        } else {
            ScalarKind::Relative
        };
        Self::from_si(
            self.si_value() / other.si_value(),
            registry.resolve(self.dimensions().divide(other.dimensions())),
            kind,
        )
    }
}

/// Linear interpolation between two scalars of the same kind and dimension:
/// `zero*(1-ratio) + one*ratio`, expressed in the unit of `zero`. Ratios
/// outside [0, 1] extrapolate.
pub fn interpolate<F: ScalarFloat>(
    zero: &Scalar<F>,
    one: &Scalar<F>,
    ratio: F,
) -> Result<Scalar<F>, UnitError> {
    one.unit().ensure_dimension(zero.dimensions())?;
    if zero.kind() != one.kind() {
        return Err(UnitError::KindMismatch {
            op: "interpolate",
            lhs: zero.kind(),
            rhs: one.kind(),
        });
    }
    let si = zero.si_value() * (F::one() - ratio) + one.si_value() * ratio;
    Ok(Scalar::from_si(si, zero.unit(), zero.kind()))
}

impl<F: ScalarFloat> Neg for Scalar<F> {
    type Output = Scalar<F>;

    fn neg(self) -> Self::Output {
        Self::from_si(-self.si_value(), self.unit(), self.kind())
    }
}

impl<F: ScalarFloat> Mul for Scalar<F> {
    type Output = Scalar<F>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<F: ScalarFloat> Div for Scalar<F> {
    type Output = Scalar<F>;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(&rhs)
    }
}

impl<F: ScalarFloat> Mul<F> for Scalar<F> {
    type Output = Scalar<F>;

    fn mul(self, rhs: F) -> Self::Output {
        Self::from_si(self.si_value() * rhs, self.unit(), self.kind())
    }
}

impl<F: ScalarFloat> Div<F> for Scalar<F> {
    type Output = Scalar<F>;

    fn div(self, rhs: F) -> Self::Output {
        Self::from_si(self.si_value() / rhs, self.unit(), self.kind())
    }
}

impl Mul<Scalar<f64>> for f64 {
    type Output = Scalar<f64>;

    fn mul(self, rhs: Scalar<f64>) -> Self::Output {
        rhs * self
    }
}

impl Mul<Scalar<f32>> for f32 {
    type Output = Scalar<f32>;

    fn mul(self, rhs: Scalar<f32>) -> Self::Output {
        rhs * self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        abs_celsius, abs_hours, abs_kelvin, centimeters, hours, kelvin, meters, meters_per_second,
        scalar, seconds,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_kind_closure() {
        assert!(meters!(1).plus(&meters!(2)).unwrap().is_relative());
        assert!(abs_kelvin!(300).plus(&kelvin!(5)).unwrap().is_absolute());
        assert!(kelvin!(5).plus(&abs_kelvin!(300)).unwrap().is_absolute());
        assert!(abs_kelvin!(300).plus(&abs_kelvin!(1)).is_err());

        assert!(meters!(3).minus(&meters!(1)).unwrap().is_relative());
        assert!(abs_hours!(14).minus(&hours!(1)).unwrap().is_absolute());
        assert!(abs_hours!(14).minus(&abs_hours!(13)).unwrap().is_relative());
        assert!(hours!(1).minus(&abs_hours!(13)).is_err());
    }

    #[test]
    fn test_absolute_difference_is_the_span() {
        let span = abs_hours!(14).minus(&abs_hours!(13)).unwrap();
        assert_abs_diff_eq!(span.si_value(), 3_600.0);
        assert_eq!(span, hours!(1));

        // Differencing an affine scale drops the offset with the kind.
        let degree = abs_celsius!(21).minus(&abs_celsius!(20)).unwrap();
        assert_abs_diff_eq!(degree.si_value(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(degree.value_in_unit(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_result_unit_rules() {
        // Shared unit: the left operand's unit survives.
        let sum = meters!(1).plus(&meters!(2)).unwrap();
        assert!(std::ptr::eq(sum.unit(), crate::meters()));
        // Differing units of one dimension: combined in SI, displayed in the
        // standard unit.
        let sum = centimeters!(50).plus(&meters!(1)).unwrap();
        assert_abs_diff_eq!(sum.si_value(), 1.5);
        assert!(std::ptr::eq(sum.unit(), crate::meters()));
    }

    #[test]
    fn test_cross_dimension_addition_is_rejected() {
        let err = meters!(1).plus(&seconds!(1)).unwrap_err();
        assert!(matches!(err, crate::UnitError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_multiply_divide_round_trip() {
        let area = meters!(100).multiply(&meters!(5));
        assert!(area.is_relative());
        assert_abs_diff_eq!(area.si_value(), 500.0);
        assert_eq!(area.unit().abbreviation(), "m2");
        assert!(std::ptr::eq(area.unit(), crate::square_meters()));

        let length = area.divide(&meters!(5));
        assert_abs_diff_eq!(length.si_value(), 100.0);
        assert!(std::ptr::eq(length.unit(), crate::meters()));
        assert_eq!(length, meters!(100));
    }

    #[test]
    fn test_identical_products_share_a_unit_instance() {
        let a = meters!(2) * meters!(3);
        let b = meters!(4) * meters!(5);
        assert!(std::ptr::eq(a.unit(), b.unit()));
    }

    #[test]
    fn test_division_synthesizes_through_the_catalog() {
        let v = meters!(100) / seconds!(10);
        assert_abs_diff_eq!(v.si_value(), 10.0);
        assert!(std::ptr::eq(v.unit(), crate::meters_per_second()));
        assert_eq!(v, meters_per_second!(10));

        let ratio = meters!(6) / meters!(3);
        assert!(ratio.dimensions().is_dimensionless());
        assert_eq!(ratio, scalar!(2));
    }

    #[test]
    fn test_multiply_kind_rules() {
        assert!(abs_kelvin!(2).multiply(&abs_kelvin!(3)).is_absolute());
        assert!(abs_kelvin!(2).multiply(&kelvin!(3)).is_relative());
        assert!(kelvin!(2).multiply(&kelvin!(3)).is_relative());
    }

    #[test]
    fn test_isolated_registry_resolution() {
        let isolated = UnitRegistry::empty();
        let area = meters!(2).multiply_in(&meters!(2), &isolated);
        assert_eq!(area.unit().abbreviation(), "m2");
        // A separate cache mints its own instance.
        assert!(!std::ptr::eq(area.unit(), crate::square_meters()));
        assert!(std::ptr::eq(
            area.unit(),
            meters!(1).multiply_in(&meters!(1), &isolated).unit()
        ));
    }

    #[test]
    fn test_interpolate_boundaries() {
        let zero = meters!(10);
        let one = centimeters!(2_000);
        assert_eq!(interpolate(&zero, &one, 0.0).unwrap(), zero);
        assert_eq!(interpolate(&zero, &one, 1.0).unwrap(), one);
        let mid = interpolate(&zero, &one, 0.5).unwrap();
        assert_abs_diff_eq!(mid.si_value(), 15.0);
        assert!(std::ptr::eq(mid.unit(), zero.unit()));
        // Extrapolation is permitted.
        let past = interpolate(&zero, &one, 2.0).unwrap();
        assert_abs_diff_eq!(past.si_value(), 30.0);
    }

    #[test]
    fn test_interpolate_rejects_mixed_operands() {
        assert!(interpolate(&abs_kelvin!(1), &kelvin!(2), 0.5).is_err());
        assert!(interpolate(&meters!(1), &seconds!(2), 0.5).is_err());
    }

    #[test]
    fn test_division_by_zero_magnitude() {
        let q = meters!(1) / seconds!(0);
        assert!(q.si_value().is_infinite());
        let q = meters!(0) / seconds!(0);
        assert!(q.si_value().is_nan());
    }

    #[test]
    fn test_scalar_float_sugar() {
        assert_eq!(meters!(2) * 3.0, meters!(6));
        assert_eq!(3.0 * meters!(2), meters!(6));
        assert_eq!(meters!(6) / 3.0, meters!(2));
        assert_eq!(-meters!(5), meters!(-5));
    }
}
