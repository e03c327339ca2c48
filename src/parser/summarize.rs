//! Conversion of registry address ranges into CIDR networks.
use crate::error::SlurmError;
use ipnet::{Ipv4Net, Ipv6Net};
use log::warn;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Summarize the `count` IPv4 addresses starting at `start` into the minimal list of CIDR
/// networks covering exactly that range, in ascending order.
///
/// # Example
///
/// ```rust
/// use std::net::Ipv4Addr;
/// use rpki_as0_bogons::parser::summarize_ipv4_range;
///
/// let networks = summarize_ipv4_range(Ipv4Addr::new(192, 0, 2, 0), 3).unwrap();
/// let networks: Vec<String> = networks.iter().map(|n| n.to_string()).collect();
/// assert_eq!(networks, vec!["192.0.2.0/31", "192.0.2.2/32"]);
/// ```
pub fn summarize_ipv4_range(start: Ipv4Addr, count: u64) -> Result<Vec<Ipv4Net>, SlurmError> {
    if count == 0 {
        return Err(SlurmError::value(format!(
            "empty IPv4 range starting at {}",
            start
        )));
    }

    let mut current = u64::from(u32::from(start));
    // inclusive
    let last = current + (count - 1);
    if last > u64::from(u32::MAX) {
        return Err(SlurmError::value(format!(
            "IPv4 range of {} addresses starting at {} exceeds the address space",
            count, start
        )));
    }

    let mut networks = vec![];
    while current <= last {
        // largest block aligned on `current`
        let align_bits = match current {
            0 => 32,
            _ => current.trailing_zeros().min(32),
        };
        // largest block fitting in what is left of the range
        let fit_bits = 63 - (last - current + 1).leading_zeros();
        let host_bits = align_bits.min(fit_bits);

        let network = Ipv4Net::new(Ipv4Addr::from(current as u32), (32 - host_bits) as u8)?;
        networks.push(network);
        current += 1u64 << host_bits;
    }

    Ok(networks)
}

/// Build the IPv6 network `base/prefix_len`.
///
/// Bits of `base` beyond the prefix length are cleared rather than rejected.
pub fn ipv6_network_from_prefix(base: Ipv6Addr, prefix_len: u64) -> Result<Ipv6Net, SlurmError> {
    if prefix_len > 128 {
        return Err(SlurmError::value(format!(
            "IPv6 prefix length {} for {} is larger than 128",
            prefix_len, base
        )));
    }

    let network = Ipv6Net::new(base, prefix_len as u8)?;
    let truncated = network.trunc();
    if truncated != network {
        warn!("{} has host bits set, using {}", network, truncated);
    }
    Ok(truncated)
}
