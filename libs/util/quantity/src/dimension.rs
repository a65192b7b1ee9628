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
use std::{
    fmt,
    fmt::Write,
    ops::{Div, Mul},
};

/// The number of base dimensions we track exponents for.
pub const DIMENSION_COUNT: usize = 8;

/// Base dimension abbreviations, in component order: mass (kg), length (m),
/// time (s), current (A), temperature (K), amount of substance (mol),
/// luminous intensity (cd), and money ($).
pub const BASE_ABBREVIATIONS: [&str; DIMENSION_COUNT] = ["kg", "m", "s", "A", "K", "mol", "cd", "$"];

/// The exponents of a unit over the base dimensions. Speed is length = 1,
/// time = -1 with all other components zero; the all-zero vector is
/// dimensionless. These are pure values: two vectors are equal exactly when
/// every component is equal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SiDimensions([i8; DIMENSION_COUNT]);

impl SiDimensions {
    pub const DIMENSIONLESS: Self = Self([0; DIMENSION_COUNT]);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        mass: i8,
        length: i8,
        time: i8,
        current: i8,
        temperature: i8,
        substance: i8,
        luminosity: i8,
        money: i8,
    ) -> Self {
        Self([
            mass,
            length,
            time,
            current,
            temperature,
            substance,
            luminosity,
            money,
        ])
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0 == [0; DIMENSION_COUNT]
    }

    pub fn exponents(&self) -> &[i8; DIMENSION_COUNT] {
        &self.0
    }

    /// Component-wise sum of exponents; the dimension of a product of two
    /// quantities.
    pub fn multiply(self, other: Self) -> Self {
        let mut out = self.0;
        for (c, o) in out.iter_mut().zip(&other.0) {
            *c += o;
        }
        Self(out)
    }

    /// Component-wise difference of exponents; the dimension of a quotient.
    /// Inverse-consistent with multiply: `a.multiply(b).divide(b) == a`.
    pub fn divide(self, other: Self) -> Self {
        let mut out = self.0;
        for (c, o) in out.iter_mut().zip(&other.0) {
            *c -= o;
        }
        Self(out)
    }

    pub fn recip(self) -> Self {
        let mut out = self.0;
        for c in out.iter_mut() {
            *c = -*c;
        }
        Self(out)
    }

    pub fn pow(self, n: i8) -> Self {
        let mut out = self.0;
        for c in out.iter_mut() {
            *c *= n;
        }
        Self(out)
    }

    /// The deterministic registry key for this vector: nonzero components in
    /// base order, each with its exponent, e.g. `kg1.m2.s-2`. The
    /// dimensionless vector keys as `1`.
    pub fn canonical_key(&self) -> String {
        if self.is_dimensionless() {
            return "1".to_owned();
        }
        let mut key = String::new();
        for (abbrev, exp) in BASE_ABBREVIATIONS.iter().zip(&self.0) {
            if *exp != 0 {
                if !key.is_empty() {
                    key.push('.');
                }
                // String formatting cannot fail.
                let _ = write!(key, "{}{}", abbrev, exp);
            }
        }
        key
    }

    /// A human-readable abbreviation synthesized from the exponents, in
    /// numerator/denominator form: length¹·time⁻² renders as `m/s2`,
    /// mass¹·length¹·time⁻² as `kg.m/s2`, time⁻¹ as `1/s`.
    pub fn si_abbreviation(&self) -> String {
        let mut numerator = String::new();
        let mut denominator = String::new();
        for (abbrev, exp) in BASE_ABBREVIATIONS.iter().zip(&self.0) {
            let (side, magnitude) = match exp {
                0 => continue,
                e if *e > 0 => (&mut numerator, *e),
                e => (&mut denominator, -*e),
            };
            if !side.is_empty() {
                side.push('.');
            }
            side.push_str(abbrev);
            if magnitude > 1 {
                let _ = write!(side, "{}", magnitude);
            }
        }
        match (numerator.is_empty(), denominator.is_empty()) {
            (true, true) => "1".to_owned(),
            (false, true) => numerator,
            (true, false) => format!("1/{}", denominator),
            (false, false) => format!("{}/{}", numerator, denominator),
        }
    }
}

impl Mul for SiDimensions {
    type Output = SiDimensions;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Div for SiDimensions {
    type Output = SiDimensions;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl fmt::Display for SiDimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.si_abbreviation())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LENGTH: SiDimensions = SiDimensions::new(0, 1, 0, 0, 0, 0, 0, 0);
    const FORCE: SiDimensions = SiDimensions::new(1, 1, -2, 0, 0, 0, 0, 0);
    const FREQUENCY: SiDimensions = SiDimensions::new(0, 0, -1, 0, 0, 0, 0, 0);
    const COST_RATE: SiDimensions = SiDimensions::new(0, 0, -1, 0, 0, 0, 0, 1);

    #[test]
    fn test_inverse_law() {
        for a in [LENGTH, FORCE, FREQUENCY, COST_RATE, SiDimensions::DIMENSIONLESS] {
            for b in [LENGTH, FORCE, FREQUENCY, COST_RATE] {
                assert_eq!(a.multiply(b).divide(b), a);
                assert_eq!(a.divide(b).multiply(b), a);
            }
        }
    }

    #[test]
    fn test_associative_multiply() {
        assert_eq!(
            LENGTH.multiply(FORCE).multiply(FREQUENCY),
            LENGTH.multiply(FORCE.multiply(FREQUENCY))
        );
    }

    #[test]
    fn test_self_division_is_dimensionless() {
        assert!(FORCE.divide(FORCE).is_dimensionless());
        assert_eq!(FORCE.divide(FORCE), SiDimensions::DIMENSIONLESS);
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(LENGTH.canonical_key(), "m1");
        assert_eq!(FORCE.canonical_key(), "kg1.m1.s-2");
        assert_eq!(LENGTH.multiply(LENGTH).canonical_key(), "m2");
        assert_eq!(SiDimensions::DIMENSIONLESS.canonical_key(), "1");
    }

    #[test]
    fn test_si_abbreviation() {
        assert_eq!(LENGTH.si_abbreviation(), "m");
        assert_eq!(FORCE.si_abbreviation(), "kg.m/s2");
        assert_eq!(FREQUENCY.si_abbreviation(), "1/s");
        assert_eq!(FORCE.multiply(LENGTH).si_abbreviation(), "kg.m2/s2");
        assert_eq!(COST_RATE.si_abbreviation(), "$/s");
        assert_eq!(SiDimensions::DIMENSIONLESS.si_abbreviation(), "1");
    }

    #[test]
    fn test_recip_and_pow() {
        assert_eq!(FREQUENCY.recip().canonical_key(), "s1");
        assert_eq!(LENGTH.pow(3).canonical_key(), "m3");
        assert_eq!(SiDimensions::DIMENSIONLESS, LENGTH.pow(0));
    }

    #[test]
    fn test_operator_sugar() {
        assert_eq!(LENGTH * LENGTH, LENGTH.pow(2));
        assert_eq!(LENGTH / FREQUENCY.recip(), LENGTH.multiply(FREQUENCY));
    }
}
