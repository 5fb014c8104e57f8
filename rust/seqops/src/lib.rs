//! Query-style helpers over in-memory sequences and strings.
//!
//! The crate offers three entry points:
//!
//! - [`SequenceExt`] - pure query operations (filtering, projection, set operations,
//!   grouping and aggregation) available on every slice, array and `Vec`.
//! - [`ExtendWithExt`] - the single mutating operation, appending whole sequences
//!   to a `Vec` in place.
//! - [`text`] - joining, positional formatting and substring replacement.
//!
//! Every operation is eager: results are fully materialized before they are returned.
//!
//! # Examples
//!
//! ```
//! use seqops::SequenceExt;
//!
//! let values = [1, 2, 3, 4, 5];
//! let large = values.filter_by(|&x| x > 2);
//! assert_eq!(large, vec![3, 4, 5]);
//! assert_eq!(large.sum(), 12);
//! assert_eq!(large.average(), 4.0);
//!
//! let groups = ["a", "b", "c"].group_by(|s| s.len());
//! assert_eq!(groups.get(&1), Some(&["a", "b", "c"][..]));
//!
//! assert_eq!(seqops::text::format("{0} World, {0}!", &["Hi"]), "Hi World, Hi!");
//! ```

pub mod extend;
pub mod grouping;
pub mod properties;
pub mod query;
pub mod text;
pub mod truthy;

pub use extend::ExtendWithExt;
pub use grouping::{Grouping, KeySelector};
pub use properties::Properties;
pub use query::SequenceExt;
pub use truthy::Truthy;

pub use seqops_common::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests;
