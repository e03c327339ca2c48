//! Parsers turning raw bogon lists and delegated stats into networks.

pub mod bogons;
pub mod delegation;
pub mod summarize;

pub use bogons::parse_bogon_list;
pub use delegation::{
    parse_delegation_record, parse_delegations, unassigned_networks, UnassignedNetworks,
};
pub use summarize::{ipv6_network_from_prefix, summarize_ipv4_range};
