//! featrank-core - Weighted latent-feature recommendation reports
//!
//! Given an items table (items x latent features), a per-feature weight
//! vector and a users table (users x latent preferences), this crate:
//!
//! - ranks items along individual feature dimensions
//! - scores every item for one user as a weighted triple product
//! - ranks all items by that score
//!
//! The scoring itself is a pure function over fixed-length vectors (see
//! [`weighted_score`]); the table plumbing lives in [`recommendation`] and
//! the end-to-end flow in [`report`].

pub mod config;
pub mod error;
pub mod recommendation;
pub mod report;

pub use config::*;
pub use error::*;
pub use recommendation::*;
pub use report::*;
