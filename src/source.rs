//! The two ways of finding bogon space, and the pipelines turning them into SLURM documents.
use crate::encoder::{assemble_document, build_assertions, SlurmEncoder};
use crate::error::SlurmError;
use crate::models::{Afi, PrefixAssertion, SlurmDocument};
use crate::parser::{parse_bogon_list, parse_delegations, unassigned_networks};
use log::{debug, warn};

/// Raw text of a bogon data source. The two variants are alternatives, never combined.
#[derive(Debug, Clone)]
pub enum BogonSource {
    /// Full bogon lists, one prefix per line, with the comment header already removed.
    FullBogons { ipv4: String, ipv6: String },
    /// A delegated-extended statistics file, bogons being its unassigned address space.
    DelegatedStats(String),
}

impl BogonSource {
    /// Build the AS0 assertions for this source.
    pub fn to_assertions(&self) -> Result<Vec<PrefixAssertion>, SlurmError> {
        match self {
            BogonSource::FullBogons { ipv4, ipv6 } => {
                let mut assertions = bogon_list_assertions(ipv4, Afi::Ipv4)?;
                assertions.extend(bogon_list_assertions(ipv6, Afi::Ipv6)?);
                Ok(assertions)
            }
            BogonSource::DelegatedStats(data) => delegated_stats_assertions(data),
        }
    }
}

/// Assertions for every prefix of a bogon list of the given family, in list order.
///
/// The `maxPrefixLength` is the address length of `afi`.
pub fn bogon_list_assertions(data: &str, afi: Afi) -> Result<Vec<PrefixAssertion>, SlurmError> {
    let networks = parse_bogon_list(data)?;
    for network in networks.iter().filter(|n| Afi::of(n) != afi) {
        warn!("{} found in {} bogon list", network, afi);
    }
    Ok(build_assertions(networks, afi.max_prefix_length()))
}

/// Assertions for the unassigned address space of a delegated-extended file, IPv4 first.
pub fn delegated_stats_assertions(data: &str) -> Result<Vec<PrefixAssertion>, SlurmError> {
    let records = parse_delegations(data)?;
    let networks = unassigned_networks(&records)?;

    let mut encoder = SlurmEncoder::new();
    encoder.process_unassigned(networks);
    Ok(encoder.assertions())
}

/// Generate the complete SLURM document for a source. Any error aborts the generation.
pub fn generate_slurm(source: &BogonSource) -> Result<SlurmDocument, SlurmError> {
    let assertions = source.to_assertions()?;
    debug!("generated {} AS0 assertions", assertions.len());
    Ok(assemble_document(assertions))
}
