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
    registry::builtin_unit,
    unit::{Unit, UnitDef},
};

pub(crate) const MILES: UnitDef = UnitDef {
    name: "miles",
    abbreviation: "mi",
    dimensions: SiDimensions::new(0, 1, 0, 0, 0, 0, 0, 0),
    scale: 1_609.344,
    offset: 0.0,
    standard: false,
};

pub fn miles() -> &'static Unit {
    builtin_unit(&MILES)
}

#[macro_export]
macro_rules! miles {
    ($num:expr) => {
        $crate::Scalar::relative($num as f64, $crate::miles())
    };
}
