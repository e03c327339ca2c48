//! Parse delegated extended stats
//!
//! The NRO publishes a combined delegated-extended file covering all five registries. Its first
//! line is a version header, followed by one summary line per resource type:
//!
//! ```text
//! 2|nro|20200214|574416|19821213|20200214|+0000
//! nro|*|asn|*|91534|summary
//! nro|*|ipv4|*|214428|summary
//! nro|*|ipv6|*|268454|summary
//! ```
//!
//! Every following line is one pipe-delimited record.
use crate::error::SlurmError;
use crate::models::{AllocationStatus, DelegationRecord, ObjectType};
use crate::parser::summarize::{ipv6_network_from_prefix, summarize_ipv4_range};
use ipnet::{Ipv4Net, Ipv6Net};
use log::debug;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Number of header and summary lines at the top of a delegated-extended file.
pub const HEADER_LINES: usize = 4;

/// Number of `|` separated columns of every record line.
pub const RECORD_FIELDS: usize = 9;

/// Parse a single record line. `line_no` is only used for error reporting.
pub fn parse_delegation_record(
    line: &str,
    line_no: usize,
) -> Result<DelegationRecord, SlurmError> {
    let fields: Vec<&str> = line.split('|').collect();
    let [registry, country_code, object_type, start_value, length, date, status, _opaque_id, _extension] =
        fields.as_slice()
    else {
        return Err(SlurmError::format(
            line_no,
            format!(
                "expected {} fields, found {}",
                RECORD_FIELDS,
                fields.len()
            ),
        ));
    };

    let length = u64::from_str(length).map_err(|e| {
        SlurmError::format(line_no, format!("cannot parse length from {:?}: {}", length, e))
    })?;

    Ok(DelegationRecord {
        registry: registry.to_string(),
        country_code: country_code.to_string(),
        object_type: ObjectType::from_str(object_type).unwrap_or_else(|e| match e {}),
        start_value: start_value.to_string(),
        length,
        date: date.to_string(),
        allocation_status: AllocationStatus::from_str(status).unwrap_or_else(|e| match e {}),
    })
}

/// Parse the raw text of a delegated-extended file into its records, in file order.
///
/// The first [HEADER_LINES] lines are skipped without looking at them. Any malformed record
/// aborts the whole parse, as the following columns can no longer be trusted.
pub fn parse_delegations(data: &str) -> Result<Vec<DelegationRecord>, SlurmError> {
    let mut lines: Vec<&str> = data.split('\n').collect();
    // ignore final blank line
    if lines.last() == Some(&"") {
        lines.pop();
    }
    debug!("loaded {} delegated stats lines", lines.len());

    let records = lines
        .iter()
        .enumerate()
        .skip(HEADER_LINES)
        .map(|(index, line)| parse_delegation_record(line.trim_end_matches('\r'), index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("parsed {} delegation records", records.len());
    Ok(records)
}

/// Unassigned address space found in delegation records, per address family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnassignedNetworks {
    pub ipv4: Vec<Ipv4Net>,
    pub ipv6: Vec<Ipv6Net>,
}

impl UnassignedNetworks {
    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}

/// Collect the networks of all unassigned `ipv4` and `ipv6` records.
///
/// IPv4 records are summarized from their address count into CIDR networks, IPv6 records
/// already carry a prefix length. Records of other types or statuses are skipped.
pub fn unassigned_networks(
    records: &[DelegationRecord],
) -> Result<UnassignedNetworks, SlurmError> {
    let mut networks = UnassignedNetworks::default();

    for record in records.iter().filter(|r| r.is_unassigned_address_space()) {
        match record.object_type {
            ObjectType::Ipv4 => {
                let start = Ipv4Addr::from_str(&record.start_value).map_err(|e| {
                    SlurmError::value(format!(
                        "invalid IPv4 start value {:?}: {}",
                        record.start_value, e
                    ))
                })?;
                networks
                    .ipv4
                    .extend(summarize_ipv4_range(start, record.length)?);
            }
            ObjectType::Ipv6 => {
                let base = Ipv6Addr::from_str(&record.start_value).map_err(|e| {
                    SlurmError::value(format!(
                        "invalid IPv6 start value {:?}: {}",
                        record.start_value, e
                    ))
                })?;
                networks
                    .ipv6
                    .push(ipv6_network_from_prefix(base, record.length)?);
            }
            _ => {}
        }
    }

    debug!(
        "found {} unassigned IPv4 and {} unassigned IPv6 networks",
        networks.ipv4.len(),
        networks.ipv6.len()
    );
    Ok(networks)
}
