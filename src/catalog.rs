use super::zone::Zone;
use std::collections::HashMap;
use tracing::debug;

/// A catalog of zones, keyed by root domain name.
///
/// A plain lookup table: it performs no validation of the zones placed into
/// it and carries no cross-zone invariants. Callers needing concurrent
/// access must serialize it themselves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    zones: HashMap<String, Zone>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            zones: HashMap::new(),
        }
    }

    /// Bind a zone under a root domain name, replacing any zone already
    /// bound there.
    pub fn add_zone(&mut self, name: impl Into<String>, zone: Zone) {
        let name = name.into();
        if self.zones.contains_key(&name) {
            debug!("rebinding zone {}", name);
        }
        self.zones.insert(name, zone);
    }

    /// Get a zone by root domain name
    pub fn zone(&self, name: &str) -> Option<&Zone> {
        self.zones.get(name)
    }

    /// Remove a zone, returning it if it was present
    pub fn remove_zone(&mut self, name: &str) -> Option<Zone> {
        self.zones.remove(name)
    }

    /// All root domain names in the catalog
    pub fn zone_names(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }

    /// Iterate over all (name, zone) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Zone)> {
        self.zones.iter().map(|(name, zone)| (name.as_str(), zone))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Name, RData, RecordClass, RecordType, ResourceRecord};

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.add_zone("example.com.", Zone::new());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.zone("example.com.").is_some());
        assert!(catalog.zone("example.org.").is_none());
    }

    #[test]
    fn test_catalog_rebinding() {
        let mut catalog = Catalog::new();

        let mut first = Zone::new();
        first.add_record(ResourceRecord::new(
            Name::from("example.com."),
            RecordType::A,
            RecordClass::IN,
            3600,
            RData::A("192.0.2.1".parse().unwrap()),
        ));
        catalog.add_zone("example.com.", first);

        // Rebinding replaces the prior zone outright
        catalog.add_zone("example.com.", Zone::new());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.zone("example.com.").unwrap().is_empty());
    }

    #[test]
    fn test_remove_zone() {
        let mut catalog = Catalog::new();
        catalog.add_zone("example.com.", Zone::new());

        assert!(catalog.remove_zone("example.com.").is_some());
        assert!(catalog.remove_zone("example.com.").is_none());
        assert!(catalog.is_empty());
    }
}
