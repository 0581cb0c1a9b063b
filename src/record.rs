use super::errors::{Result, ZoneError};
use std::fmt;
use std::net::Ipv4Addr;

/// A domain name as written in the master file.
///
/// No normalization is applied: trailing dots and letter case are kept
/// exactly as they appear in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name(name.to_string())
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record class. Only the Internet class is recognized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RecordClass {
    #[default]
    IN,
}

impl RecordClass {
    /// Look up a class by its master-file literal. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "IN" => Some(RecordClass::IN),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
        }
    }
}

/// Record type. Restricted to the types the master-file subset supports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecordType {
    A,
    CNAME,
    NS,
}

impl RecordType {
    /// Look up a type by its master-file literal. Case-sensitive,
    /// uppercase only.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "A" => Some(RecordType::A),
            "CNAME" => Some(RecordType::CNAME),
            "NS" => Some(RecordType::NS),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::CNAME => "CNAME",
            RecordType::NS => "NS",
        }
    }
}

/// Parsed record data, one variant per supported record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    CNAME(Name),
    NS(Name),
}

impl RData {
    /// Build record data from its master-file text form.
    ///
    /// All type-specific validation lives here: `A` requires a dotted-quad
    /// IPv4 address, `CNAME`/`NS` take the token as a domain name.
    pub fn from_text(rtype: RecordType, text: &str) -> Result<Self> {
        match rtype {
            RecordType::A => {
                let addr: Ipv4Addr = text
                    .parse()
                    .map_err(|_| ZoneError::InvalidRecord(format!("invalid IPv4 address: {text}")))?;
                Ok(RData::A(addr))
            }
            RecordType::CNAME => Ok(RData::CNAME(Name::from(text))),
            RecordType::NS => Ok(RData::NS(Name::from(text))),
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{addr}"),
            RData::CNAME(name) | RData::NS(name) => write!(f, "{name}"),
        }
    }
}

/// A single resource record as loaded from a master file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner domain name
    pub name: Name,
    /// Record type
    pub rtype: RecordType,
    /// Record class (always IN in this subset)
    pub class: RecordClass,
    /// Time to live in seconds
    pub ttl: u32,
    /// Parsed record data
    pub rdata: RData,
}

impl ResourceRecord {
    /// Create a new resource record
    pub fn new(name: Name, rtype: RecordType, class: RecordClass, ttl: u32, rdata: RData) -> Self {
        Self {
            name,
            rtype,
            class,
            ttl,
            rdata,
        }
    }
}
