//! RPKI (Resource Public Key Infrastructure) related data structures.
//!
//! This module provides data structures for RPKI local overrides:
//!
//! - [`slurm`]: Simplified Local Internet Number Resource Management with the RPKI (SLURM,
//!   RFC 8416) documents

pub mod slurm;

pub use slurm::*;
