//! Recommendation scoring over latent-feature tables
//!
//! Pure vector math lives in `features`; `scoring` binds it to the loaded
//! tables and `ranking` orders the results. `blend` combines two scorers
//! around a bias baseline.

mod blend;
mod features;
mod ranking;
mod scoring;

pub use blend::*;
pub use features::*;
pub use ranking::*;
pub use scoring::*;

/// Item identifier column in the items table
pub const MOVIE_ID_COLUMN: &str = "Movie ID";

/// Item title column in the items table
pub const TITLE_COLUMN: &str = "Title";

/// User identifier column in the users table
pub const USER_COLUMN: &str = "User";
