use crate::models::{Afi, PrefixAssertion, SlurmDocument};
use crate::parser::UnassignedNetworks;
use ipnet::IpNet;
use log::debug;

/// Map every network to an AS0 assertion with the given `maxPrefixLength`.
///
/// Order is preserved and nothing is filtered or de-duplicated: overlapping networks produce
/// overlapping assertions.
pub fn build_assertions<I, N>(networks: I, max_prefix_length: u8) -> Vec<PrefixAssertion>
where
    I: IntoIterator<Item = N>,
    N: Into<IpNet>,
{
    networks
        .into_iter()
        .map(|network| PrefixAssertion::as0(network.into(), max_prefix_length))
        .collect()
}

/// Wrap assertions into a SLURM document, keeping their order.
pub fn assemble_document(assertions: Vec<PrefixAssertion>) -> SlurmDocument {
    SlurmDocument::new(assertions)
}

/// Collects networks of both address families and exports them as one SLURM document.
///
/// IPv4 assertions always come before IPv6 assertions, each family in the order its networks
/// were processed. The `maxPrefixLength` of an assertion is the address length of its family.
#[derive(Debug, Default)]
pub struct SlurmEncoder {
    ipv4_networks: Vec<IpNet>,
    ipv6_networks: Vec<IpNet>,
}

impl SlurmEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.ipv4_networks.clear();
        self.ipv6_networks.clear();
    }

    pub fn process_network<N: Into<IpNet>>(&mut self, network: N) {
        let network = network.into();
        match Afi::of(&network) {
            Afi::Ipv4 => self.ipv4_networks.push(network),
            Afi::Ipv6 => self.ipv6_networks.push(network),
        }
    }

    pub fn process_networks<I, N>(&mut self, networks: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<IpNet>,
    {
        for network in networks {
            self.process_network(network);
        }
    }

    pub fn process_unassigned(&mut self, networks: UnassignedNetworks) {
        self.process_networks(networks.ipv4);
        self.process_networks(networks.ipv6);
    }

    /// Assertions for all processed networks, IPv4 first.
    pub fn assertions(&self) -> Vec<PrefixAssertion> {
        let mut assertions = build_assertions(
            self.ipv4_networks.iter().copied(),
            Afi::Ipv4.max_prefix_length(),
        );
        assertions.extend(build_assertions(
            self.ipv6_networks.iter().copied(),
            Afi::Ipv6.max_prefix_length(),
        ));
        assertions
    }

    pub fn export_document(&self) -> SlurmDocument {
        let assertions = self.assertions();
        debug!(
            "exporting {} assertions ({} IPv4, {} IPv6)",
            assertions.len(),
            self.ipv4_networks.len(),
            self.ipv6_networks.len()
        );
        assemble_document(assertions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipnet::{Ipv4Net, Ipv6Net};
    use std::str::FromStr;

    fn net(s: &str) -> IpNet {
        IpNet::from_str(s).unwrap()
    }

    #[test]
    fn test_build_assertions() {
        let assertions = build_assertions(vec![net("0.0.0.0/8"), net("10.0.0.0/8")], 32);
        assert_eq!(
            assertions,
            vec![
                PrefixAssertion::as0(net("0.0.0.0/8"), 32),
                PrefixAssertion::as0(net("10.0.0.0/8"), 32),
            ]
        );
        assert!(assertions.iter().all(|a| a.asn == 0));
    }

    #[test]
    fn test_build_assertions_keeps_overlaps() {
        let networks = vec![
            Ipv4Net::from_str("10.0.0.0/8").unwrap(),
            Ipv4Net::from_str("10.1.0.0/16").unwrap(),
            Ipv4Net::from_str("10.0.0.0/8").unwrap(),
        ];
        let assertions = build_assertions(networks.clone(), 32);
        assert_eq!(assertions.len(), 3);
        for (network, assertion) in networks.iter().zip(assertions.iter()) {
            assert_eq!(assertion.prefix, IpNet::V4(*network));
            assert_eq!(assertion.max_prefix_length, 32);
        }
    }

    #[test]
    fn test_assemble_document() {
        let document = assemble_document(build_assertions(vec![net("fc00::/7")], 128));
        assert_eq!(document.slurm_version, 1);
        assert!(document.validation_output_filters.prefix_filters.is_empty());
        assert!(document.validation_output_filters.bgpsec_filter.is_empty());
        assert!(document.locally_added_assertions.bgpsec_assertions.is_empty());
        assert_eq!(
            document.prefix_assertions(),
            &[PrefixAssertion::as0(net("fc00::/7"), 128)]
        );
    }

    #[test]
    fn test_encoder_groups_by_family() {
        let mut encoder = SlurmEncoder::new();
        encoder.process_network(net("2001:db8::/32"));
        encoder.process_network(net("192.0.2.0/24"));
        encoder.process_network(Ipv6Net::from_str("fc00::/7").unwrap());
        encoder.process_network(Ipv4Net::from_str("198.51.100.0/24").unwrap());

        let prefixes: Vec<(String, u8)> = encoder
            .assertions()
            .iter()
            .map(|a| (a.prefix.to_string(), a.max_prefix_length))
            .collect();
        assert_eq!(
            prefixes,
            vec![
                ("192.0.2.0/24".to_string(), 32),
                ("198.51.100.0/24".to_string(), 32),
                ("2001:db8::/32".to_string(), 128),
                ("fc00::/7".to_string(), 128),
            ]
        );

        encoder.reset();
        assert!(encoder.export_document().prefix_assertions().is_empty());
    }

    #[test]
    fn test_encoder_unassigned() {
        let mut encoder = SlurmEncoder::new();
        encoder.process_unassigned(UnassignedNetworks {
            ipv4: vec![Ipv4Net::from_str("240.0.0.0/4").unwrap()],
            ipv6: vec![Ipv6Net::from_str("3ffe::/16").unwrap()],
        });
        let document = encoder.export_document();
        assert_eq!(
            document.prefix_assertions(),
            &[
                PrefixAssertion::as0(net("240.0.0.0/4"), 32),
                PrefixAssertion::as0(net("3ffe::/16"), 128),
            ]
        );
    }
}
