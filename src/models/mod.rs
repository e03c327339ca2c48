//! Data structures shared by the parsers and the SLURM encoder.

pub mod delegation;
pub mod network;
pub mod rpki;

pub use delegation::*;
pub use network::*;
pub use rpki::*;
