//! SLURM (RFC 8416) document structures
//!
//! A SLURM file lets an operator filter and add to the validated payloads produced by an RPKI
//! relying-party. This crate only ever adds prefix assertions, all of them for AS0, but the
//! document carries the empty filter and BGPsec sections so that validators accept it.
//!
//! # Example
//!
//! ```rust
//! use rpki_as0_bogons::models::rpki::slurm::*;
//!
//! let assertion = PrefixAssertion::as0("10.0.0.0/8".parse().unwrap(), 32);
//! let document = SlurmDocument::new(vec![assertion]);
//! assert_eq!(document.slurm_version, 1);
//! assert_eq!(document.locally_added_assertions.prefix_assertions.len(), 1);
//! ```

use ipnet::IpNet;
use serde::{Deserialize, Serialize};

/// AS number reserved to mark a prefix as never validly originated (RFC 7607).
pub const AS0: u32 = 0;

/// Only SLURM version defined so far.
pub const SLURM_VERSION: u32 = 1;

/// A ROA-like assertion added locally to the validated payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixAssertion {
    pub asn: u32,
    pub prefix: IpNet,
    pub max_prefix_length: u8,
}

impl PrefixAssertion {
    /// Assertion of the given network for AS0.
    pub fn as0(prefix: IpNet, max_prefix_length: u8) -> Self {
        PrefixAssertion {
            asn: AS0,
            prefix,
            max_prefix_length,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutputFilters {
    pub prefix_filters: Vec<serde_json::Value>,
    pub bgpsec_filter: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocallyAddedAssertions {
    pub prefix_assertions: Vec<PrefixAssertion>,
    pub bgpsec_assertions: Vec<serde_json::Value>,
}

/// Root of a SLURM file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlurmDocument {
    pub slurm_version: u32,
    pub validation_output_filters: ValidationOutputFilters,
    pub locally_added_assertions: LocallyAddedAssertions,
}

impl SlurmDocument {
    /// Wraps the assertions, in the given order, into a version 1 document with no filters.
    pub fn new(prefix_assertions: Vec<PrefixAssertion>) -> Self {
        SlurmDocument {
            slurm_version: SLURM_VERSION,
            validation_output_filters: ValidationOutputFilters::default(),
            locally_added_assertions: LocallyAddedAssertions {
                prefix_assertions,
                bgpsec_assertions: vec![],
            },
        }
    }

    pub fn prefix_assertions(&self) -> &[PrefixAssertion] {
        &self.locally_added_assertions.prefix_assertions
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for SlurmDocument {
    fn default() -> Self {
        SlurmDocument::new(vec![])
    }
}
