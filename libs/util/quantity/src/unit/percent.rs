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

pub(crate) const PERCENT: UnitDef = UnitDef {
    name: "percent",
    abbreviation: "%",
    dimensions: SiDimensions::new(0, 0, 0, 0, 0, 0, 0, 0),
    scale: 0.01,
    offset: 0.0,
    standard: false,
};

pub fn percent() -> &'static Unit {
    builtin_unit(&PERCENT)
}

#[macro_export]
macro_rules! percent {
    ($num:expr) => {
        $crate::Scalar::relative($num as f64, $crate::percent())
    };
}
