//! In-memory DNS zones loaded from RFC 1035 master files.
//!
//! A restricted master-file grammar (class `IN`; types `A`, `CNAME`, `NS`;
//! no directives, comments, or multi-line records) is parsed into [`Zone`]
//! structures, which are grouped under a [`Catalog`] keyed by root domain.

pub mod catalog;
pub mod errors;
pub mod parser;
pub mod record;
pub mod zone;

pub use catalog::Catalog;
pub use errors::{Result, ZoneError};
pub use parser::MasterFileParser;
pub use record::{Name, RData, RecordClass, RecordType, ResourceRecord};
pub use zone::{Zone, ZoneStats};

/// Zone constants
pub mod constants {
    /// TTL applied to records without an explicit TTL (2 hours)
    pub const DEFAULT_TTL: u32 = 7200;
}
