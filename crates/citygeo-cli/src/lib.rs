//! citygeo-cli
//! ===========
//!
//! Command-line interface for the `citygeo-core` city extent estimator.
//!
//! This crate primarily provides a binary (`citygeo`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! citygeo fetch --countries EG,JO
//! citygeo stats
//! citygeo cities amman
//! citygeo render -o cities_map.html
//! ```
//!
//! For programmatic access use the [`citygeo-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
