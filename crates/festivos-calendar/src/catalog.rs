//! The holiday-catalog provider seam.
//!
//! The catalog is external, authoritative data: the core only ever reads
//! it.  Implementations may sit on top of any record store; the service
//! layer is handed a provider and stays oblivious to where the
//! definitions live or how they are cached.

use crate::definition::HolidayDefinition;

/// Read-only provider of the full holiday-definition catalog.
pub trait HolidayCatalog: Send + Sync {
    /// Return every definition in the catalog.
    ///
    /// Order is preserved by the callers, so providers should return a
    /// stable ordering if their consumers care about one.
    fn fetch_all(&self) -> Vec<HolidayDefinition>;
}

/// A catalog held directly in memory.
///
/// The built-in country catalogs (see [`crate::catalogs`]) produce one
/// of these; it is also the natural provider for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    definitions: Vec<HolidayDefinition>,
}

impl InMemoryCatalog {
    /// Build a catalog from a list of definitions.
    pub fn new(definitions: Vec<HolidayDefinition>) -> Self {
        Self { definitions }
    }

    /// Number of definitions in the catalog.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl HolidayCatalog for InMemoryCatalog {
    fn fetch_all(&self) -> Vec<HolidayDefinition> {
        self.definitions.clone()
    }
}
