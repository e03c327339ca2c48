//! Records of the NRO delegated-extended statistics format.
//!
//! Each record line looks like
//!
//! ```text
//! apnic|AU|ipv4|1.0.0.0|256|20110811|assigned|A91872ED|e-stats
//! ```
//!
//! The columns are registry, country code, object type, start value, length, date, allocation
//! status, opaque id and extension marker. Note that `length` counts addresses for `ipv4` records
//! but is a prefix length for `ipv6` records.
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Allocation statuses marking a block as not in use by anyone.
pub const UNASSIGNED_STATUSES: [AllocationStatus; 4] = [
    AllocationStatus::Available,
    AllocationStatus::IanaPool,
    AllocationStatus::Ietf,
    AllocationStatus::Reserved,
];

/// Resource type of a delegation record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Asn,
    Ipv4,
    Ipv6,
    Other(String),
}

impl FromStr for ObjectType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "asn" => ObjectType::Asn,
            "ipv4" => ObjectType::Ipv4,
            "ipv6" => ObjectType::Ipv6,
            other => ObjectType::Other(other.to_string()),
        })
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectType::Asn => write!(f, "asn"),
            ObjectType::Ipv4 => write!(f, "ipv4"),
            ObjectType::Ipv6 => write!(f, "ipv6"),
            ObjectType::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Allocation status of a delegation record.
///
/// Values outside the known vocabulary are kept as [AllocationStatus::Other] and never count as
/// unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AllocationStatus {
    Allocated,
    Assigned,
    Available,
    IanaPool,
    Ietf,
    Reserved,
    Other(String),
}

impl AllocationStatus {
    pub fn is_unassigned(&self) -> bool {
        UNASSIGNED_STATUSES.contains(self)
    }
}

impl FromStr for AllocationStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "allocated" => AllocationStatus::Allocated,
            "assigned" => AllocationStatus::Assigned,
            "available" => AllocationStatus::Available,
            "ianapool" => AllocationStatus::IanaPool,
            "ietf" => AllocationStatus::Ietf,
            "reserved" => AllocationStatus::Reserved,
            other => AllocationStatus::Other(other.to_string()),
        })
    }
}

impl Display for AllocationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationStatus::Allocated => write!(f, "allocated"),
            AllocationStatus::Assigned => write!(f, "assigned"),
            AllocationStatus::Available => write!(f, "available"),
            AllocationStatus::IanaPool => write!(f, "ianapool"),
            AllocationStatus::Ietf => write!(f, "ietf"),
            AllocationStatus::Reserved => write!(f, "reserved"),
            AllocationStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// One row of a delegated-extended statistics file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationRecord {
    pub registry: String,
    pub country_code: String,
    pub object_type: ObjectType,
    /// Dotted IPv4 address, IPv6 address or AS number, depending on `object_type`.
    pub start_value: String,
    /// Address count for `ipv4`, prefix length for `ipv6`, number of ASNs for `asn`.
    pub length: u64,
    pub date: String,
    pub allocation_status: AllocationStatus,
}

impl DelegationRecord {
    /// Whether this record describes unassigned IPv4 or IPv6 address space.
    pub fn is_unassigned_address_space(&self) -> bool {
        matches!(self.object_type, ObjectType::Ipv4 | ObjectType::Ipv6)
            && self.allocation_status.is_unassigned()
    }
}
