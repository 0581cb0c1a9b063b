use super::constants;
use super::record::{RecordType, ResourceRecord};
use std::collections::HashMap;

/// A zone in the domain name space: a map from domain names to the
/// resource records held under them, in file order.
#[derive(Debug, Clone)]
pub struct Zone {
    /// Records indexed by owner name, exactly as written in the source
    records: HashMap<String, Vec<ResourceRecord>>,
    default_ttl: u32,
}

impl Zone {
    /// Create a new empty zone
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            default_ttl: constants::DEFAULT_TTL,
        }
    }

    /// Bind a record set under a domain name, replacing any existing set.
    ///
    /// This is the bulk-insert path. It never merges: two calls with the
    /// same name keep only the second set. The parser's incremental path is
    /// [`Zone::add_record`], which appends.
    pub fn add_node(&mut self, name: impl Into<String>, record_set: Vec<ResourceRecord>) {
        self.records.insert(name.into(), record_set);
    }

    /// Append a single record under its owner name, creating the entry if
    /// the name has not been seen yet.
    pub fn add_record(&mut self, record: ResourceRecord) {
        self.records
            .entry(record.name.as_str().to_string())
            .or_default()
            .push(record);
    }

    /// TTL applied to records whose master-file line omits one
    pub fn default_ttl(&self) -> u32 {
        self.default_ttl
    }

    /// Records held under a name, empty if the name is absent
    pub fn records(&self, name: &str) -> &[ResourceRecord] {
        self.records.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any record set is bound under a name
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Iterate over all (name, record set) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ResourceRecord])> {
        self.records
            .iter()
            .map(|(name, set)| (name.as_str(), set.as_slice()))
    }

    /// All domain names with records in the zone
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Total number of records across all names
    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-type record counts
    pub fn stats(&self) -> ZoneStats {
        let mut stats = ZoneStats::default();

        for record in self.records.values().flatten() {
            stats.total_records += 1;
            match record.rtype {
                RecordType::A => stats.a_records += 1,
                RecordType::CNAME => stats.cname_records += 1,
                RecordType::NS => stats.ns_records += 1,
            }
        }

        stats
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::new()
    }
}

/// Zone statistics
#[derive(Debug, Default, Clone)]
pub struct ZoneStats {
    pub total_records: usize,
    pub a_records: usize,
    pub cname_records: usize,
    pub ns_records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Name, RData, RecordClass, RecordType};

    fn a_record(name: &str, addr: &str) -> ResourceRecord {
        ResourceRecord::new(
            Name::from(name),
            RecordType::A,
            RecordClass::IN,
            3600,
            RData::A(addr.parse().unwrap()),
        )
    }

    #[test]
    fn test_zone_creation() {
        let zone = Zone::new();
        assert!(zone.is_empty());
        assert_eq!(zone.default_ttl(), 7200);
        assert_eq!(zone.record_count(), 0);
    }

    #[test]
    fn test_add_node_replaces() {
        let mut zone = Zone::new();
        zone.add_node(
            "example.com.",
            vec![a_record("example.com.", "192.0.2.1"), a_record("example.com.", "192.0.2.2")],
        );
        assert_eq!(zone.records("example.com.").len(), 2);

        // Second call replaces, never merges
        zone.add_node("example.com.", vec![a_record("example.com.", "192.0.2.3")]);
        let records = zone.records("example.com.");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rdata.to_string(), "192.0.2.3");
    }

    #[test]
    fn test_add_record_appends() {
        let mut zone = Zone::new();
        zone.add_record(a_record("example.com.", "192.0.2.1"));
        zone.add_record(a_record("example.com.", "192.0.2.2"));

        let records = zone.records("example.com.");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rdata.to_string(), "192.0.2.1");
        assert_eq!(records[1].rdata.to_string(), "192.0.2.2");
    }

    #[test]
    fn test_lookup_missing_name() {
        let zone = Zone::new();
        assert!(zone.records("missing.example.com.").is_empty());
        assert!(!zone.contains("missing.example.com."));
    }

    #[test]
    fn test_stats() {
        let mut zone = Zone::new();
        zone.add_record(a_record("example.com.", "192.0.2.1"));
        zone.add_record(ResourceRecord::new(
            Name::from("example.com."),
            RecordType::NS,
            RecordClass::IN,
            7200,
            RData::NS(Name::from("ns1.example.com.")),
        ));

        let stats = zone.stats();
        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.a_records, 1);
        assert_eq!(stats.ns_records, 1);
        assert_eq!(stats.cname_records, 0);
    }
}
