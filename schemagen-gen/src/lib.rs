//! # schemagen-gen
//!
//! Generation orchestrator: schema discovery, reusable compiler
//! invocation, stale-output removal, and the per-file subprocess loop.
//!
//! Call [`generate`] with a populated metadir. Discovery is a separate,
//! pure step ([`scan`]) so it can be tested without filesystem side
//! effects or subprocesses.

pub mod error;
pub mod invocation;
pub mod runner;
pub mod scan;

pub use error::GenError;
pub use invocation::{split_ipaths, Invocation};
pub use runner::{generate, FileReport, FileStatus, GenMode, GenSummary};
pub use scan::{scan, SchemaFile, OUTPUT_SUFFIX, SCHEMA_SUFFIX};
