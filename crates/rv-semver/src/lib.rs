// https://github.com/zkat/miette/issues/458
#![allow(unused_assignments, reason = "miette macros trigger false positives")]

//! Semantic Versioning 2.0.0 versions: parsing, precedence, bumping and
//! canonical formatting.
//!
//! ```
//! use rv_semver::{Level, Version};
//!
//! let mut version: Version = "1.0.0-alpha+build.1".parse().unwrap();
//! assert!(version < Version::new(1, 0, 0));
//!
//! version.increment(Level::Minor, 1);
//! assert_eq!(version.to_string(), "1.1.0-alpha+build.1");
//! ```

mod compare;
mod error;
mod parser;
#[cfg(test)]
mod strategies;
mod version;

pub use compare::{Identifier, compare};
pub use error::VersionError;
pub use parser::parse;
pub use version::{Level, Version};
