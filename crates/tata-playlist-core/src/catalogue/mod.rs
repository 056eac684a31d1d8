//! # Catalogue Module
//!
//! The fixed channel line-up every playlist is rendered from.
//!
//! ## Module layout
//!
//! - `builtin`: the embedded channel table
//! - `store`: the immutable [`Catalogue`] and its read-only projections
//!
//! ## Example
//!
//! ```rust
//! use tata_playlist_core::catalogue::Catalogue;
//!
//! let catalogue = Catalogue::builtin();
//! assert_eq!(catalogue.hd_count() + catalogue.sd_count(), catalogue.len());
//!
//! // Group labels come back sorted
//! let groups = catalogue.groups();
//! assert_eq!(groups.keys().next(), Some(&"English Entertainment"));
//! ```

mod builtin;
mod store;

pub use builtin::{BuiltinChannel, BUILTIN_CHANNELS};
pub use store::{Catalogue, LintWarning};
