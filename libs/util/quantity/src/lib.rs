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

pub(crate) mod dimension;
pub(crate) mod float;
pub(crate) mod ops;
pub(crate) mod registry;
pub(crate) mod scalar;
pub(crate) mod unit;

pub use crate::{
    dimension::{SiDimensions, BASE_ABBREVIATIONS, DIMENSION_COUNT},
    float::ScalarFloat,
    ops::interpolate,
    registry::{registry, UnitRegistry},
    scalar::{Scalar, Scalar32, ScalarKind},
    unit::{Unit, UnitDef, UnitError},
};

pub use crate::unit::{
    amperes::amperes, candela::candela, celsius::celsius, centimeters::centimeters,
    coulombs::coulombs, cubic_meters::cubic_meters, days::days, degrees::degrees,
    dimensionless::dimensionless, dollars::dollars, euros::euros, fahrenheit::fahrenheit,
    feet::feet, grams::grams, hectares::hectares, hertz::hertz, hours::hours, inches::inches,
    joules::joules, kelvin::kelvin, kilograms::kilograms, kilometers::kilometers,
    kilometers_per_hour::kilometers_per_hour, knots::knots, liters::liters, meters::meters,
    meters_per_second::meters_per_second, miles::miles, milliseconds::milliseconds,
    millimeters::millimeters, minutes::minutes, moles::moles, nautical_miles::nautical_miles,
    newtons::newtons, ohms::ohms, pascals::pascals, percent::percent, pounds::pounds,
    radians::radians, rankine::rankine, seconds::seconds, square_meters::square_meters,
    tonnes::tonnes, volts::volts, watts::watts, weeks::weeks,
};

pub use ordered_float;
