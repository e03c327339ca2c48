//! Parse full bogon lists, one CIDR prefix per line.
use crate::error::SlurmError;
use ipnet::IpNet;
use log::{debug, warn};
use std::str::FromStr;

/// Parse the body of a bogon list into networks, in list order.
///
/// The list's comment header is expected to be stripped already. Blank lines are ignored, any
/// other line must be a CIDR prefix. Prefixes with host bits set are truncated to their network.
///
/// # Example
///
/// ```rust
/// use rpki_as0_bogons::parser::parse_bogon_list;
///
/// let networks = parse_bogon_list("0.0.0.0/8\n10.0.0.0/8\n").unwrap();
/// assert_eq!(networks.len(), 2);
/// assert_eq!(networks[1].to_string(), "10.0.0.0/8");
/// ```
pub fn parse_bogon_list(data: &str) -> Result<Vec<IpNet>, SlurmError> {
    let mut networks = vec![];
    for (index, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let network = IpNet::from_str(line).map_err(|e| {
            SlurmError::format(index + 1, format!("cannot parse prefix from {:?}: {}", line, e))
        })?;
        let truncated = network.trunc();
        if truncated != network {
            warn!("{} has host bits set, using {}", network, truncated);
        }
        networks.push(truncated);
    }

    debug!("loaded {} bogon prefixes", networks.len());
    Ok(networks)
}
