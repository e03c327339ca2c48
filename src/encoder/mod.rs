//! SLURM encoder module
//!
//! `encoder` turns networks into AS0 prefix assertions and wraps them into a [SlurmDocument].
//!
//! [SlurmDocument]: crate::models::SlurmDocument

mod slurm_encoder;

pub use slurm_encoder::*;
