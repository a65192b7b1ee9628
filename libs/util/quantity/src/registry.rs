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
    unit::{Unit, UnitDef, UnitError, STANDARD_UNITS},
};
use fxhash::FxHashMap;
use log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

#[derive(Default)]
struct Index {
    by_dimension: FxHashMap<String, &'static Unit>,
    by_abbreviation: FxHashMap<String, &'static Unit>,
}

/// An interning cache of units, keyed by canonical dimension key and by
/// abbreviation. Append-only: interned units are leaked and live for the
/// process lifetime, so lookups hand out `&'static Unit` and pointer identity
/// holds for equal dimension vectors. The cache grows monotonically, bounded
/// by the dimension combinations arithmetic actually produces.
///
/// Most callers want the preloaded process-wide instance from [registry];
/// tests that need isolation construct their own.
pub struct UnitRegistry {
    index: RwLock<Index>,
}

impl UnitRegistry {
    pub fn empty() -> Self {
        Self {
            index: RwLock::new(Index::default()),
        }
    }

    /// A registry preloaded with the full built-in catalog.
    pub fn with_standard_units() -> Result<Self, UnitError> {
        let registry = Self::empty();
        for def in STANDARD_UNITS {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Intern a unit from its static description. Rejects an abbreviation
    /// that is already bound and a second standard unit for a dimension that
    /// has one.
    pub fn register(&self, def: &UnitDef) -> Result<&'static Unit, UnitError> {
        let mut index = self.index.write();
        if index.by_abbreviation.contains_key(def.abbreviation) {
            return Err(UnitError::DuplicateAbbreviation(def.abbreviation.to_owned()));
        }
        let key = def.dimensions.canonical_key();
        if def.standard && index.by_dimension.contains_key(&key) {
            return Err(UnitError::DuplicateStandard(key));
        }
        let unit: &'static Unit = Box::leak(Box::new(Unit::from_def(def)));
        index.by_abbreviation.insert(def.abbreviation.to_owned(), unit);
        if def.standard {
            index.by_dimension.insert(key, unit);
        }
        Ok(unit)
    }

    /// The unit for a dimension vector, synthesizing and caching a scale-1
    /// unit on first occurrence. Identity-stable: every call with an equal
    /// vector observes the same `&'static Unit`, including concurrent
    /// first-use.
    pub fn resolve(&self, dimensions: SiDimensions) -> &'static Unit {
        let key = dimensions.canonical_key();
        if let Some(unit) = self.index.read().by_dimension.get(&key) {
            return unit;
        }
        let mut index = self.index.write();
        // Racing first-resolvers serialize here; whoever inserted first wins.
        if let Some(unit) = index.by_dimension.get(&key) {
            return unit;
        }
        let unit: &'static Unit = Box::leak(Box::new(Unit::synthesized(dimensions)));
        debug!("synthesized unit '{}' for {}", unit.abbreviation(), key);
        index.by_dimension.insert(key, unit);
        index
            .by_abbreviation
            .entry(unit.abbreviation().to_owned())
            .or_insert(unit);
        unit
    }

    /// The unit registered under an abbreviation; the entry point for parsed
    /// external input.
    pub fn unit(&self, abbreviation: &str) -> Result<&'static Unit, UnitError> {
        self.index
            .read()
            .by_abbreviation
            .get(abbreviation)
            .copied()
            .ok_or_else(|| UnitError::UnknownUnit(abbreviation.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.index.read().by_abbreviation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static REGISTRY: Lazy<UnitRegistry> = Lazy::new(|| match UnitRegistry::with_standard_units() {
    Ok(registry) => registry,
    Err(e) => panic!("the standard unit table failed to load: {}", e),
});

/// The process-wide registry, preloaded with the standard catalog on first
/// use. Arithmetic operators and the constructor macros resolve through it.
pub fn registry() -> &'static UnitRegistry {
    &REGISTRY
}

pub(crate) fn builtin_unit(def: &'static UnitDef) -> &'static Unit {
    match registry().unit(def.abbreviation) {
        Ok(unit) => unit,
        Err(_) => panic!(
            "builtin unit '{}' is missing from the standard table",
            def.name
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::thread;

    const AREA: SiDimensions = SiDimensions::new(0, 2, 0, 0, 0, 0, 0, 0);
    const HYPERVOLUME: SiDimensions = SiDimensions::new(0, 4, 0, 0, 0, 0, 0, 0);

    #[test]
    fn test_resolve_prefers_cataloged_standard() {
        let registry = registry();
        let unit = registry.resolve(AREA);
        assert_eq!(unit.abbreviation(), "m2");
        assert!(std::ptr::eq(unit, crate::square_meters()));
    }

    #[test]
    fn test_resolve_is_identity_stable() {
        let registry = UnitRegistry::with_standard_units().unwrap();
        let first = registry.resolve(HYPERVOLUME);
        let second = registry.resolve(HYPERVOLUME);
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.abbreviation(), "m4");
        assert!(first.is_standard());
        // Synthesized units become findable by their abbreviation.
        assert!(std::ptr::eq(registry.unit("m4").unwrap(), first));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            registry().unit("parsec").unwrap_err(),
            UnitError::UnknownUnit("parsec".to_owned())
        );
    }

    #[test]
    fn test_rejects_duplicate_abbreviation() {
        const BOGUS_METER: UnitDef = UnitDef {
            name: "bogus meters",
            abbreviation: "m",
            dimensions: SiDimensions::new(0, 1, 0, 0, 0, 0, 0, 0),
            scale: 2.0,
            offset: 0.0,
            standard: false,
        };
        let registry = UnitRegistry::with_standard_units().unwrap();
        assert_eq!(
            registry.register(&BOGUS_METER).unwrap_err(),
            UnitError::DuplicateAbbreviation("m".to_owned())
        );
    }

    #[test]
    fn test_rejects_duplicate_standard() {
        const SECOND_LENGTH_STANDARD: UnitDef = UnitDef {
            name: "alternate meters",
            abbreviation: "m'",
            dimensions: SiDimensions::new(0, 1, 0, 0, 0, 0, 0, 0),
            scale: 1.0,
            offset: 0.0,
            standard: true,
        };
        let registry = UnitRegistry::with_standard_units().unwrap();
        assert_eq!(
            registry.register(&SECOND_LENGTH_STANDARD).unwrap_err(),
            UnitError::DuplicateStandard("m1".to_owned())
        );
    }

    #[test]
    fn test_concurrent_first_use_is_idempotent() {
        let registry = UnitRegistry::empty();
        let units = thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| registry.resolve(HYPERVOLUME)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });
        for unit in &units {
            assert!(std::ptr::eq(*unit, units[0]));
        }
    }
}
