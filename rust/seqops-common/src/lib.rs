//! Core definitions (error and result types, argument checks), relied upon by all seqops-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
