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
use approx::AbsDiffEq;
use num_traits::Float;
use std::fmt::Debug;

/// The floating point representations a scalar may store its magnitude in.
/// Unit conversions always pass through f64; f32 scalars narrow after
/// converting.
pub trait ScalarFloat:
    Float + AbsDiffEq<Epsilon = Self> + Copy + Debug + Default + Send + Sync + 'static
{
    fn from_f64(v: f64) -> Self;
    fn into_f64(self) -> f64;
}

impl ScalarFloat for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }

    fn into_f64(self) -> f64 {
        self
    }
}

impl ScalarFloat for f32 {
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn into_f64(self) -> f64 {
        self as f64
    }
}
