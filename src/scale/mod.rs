//! Likert scales and the scale mapper.
//!
//! Each supported scale has a fixed lookup table from rating to
//! triangular fuzzy number. A 5-point rating of 4, for example, becomes
//! `(0.4, 0.6, 0.8)`.
//!
//! Ratings the table cannot map are classified explicitly as
//! [`MappedRating::OutOfDomain`] rather than conflated with missing
//! answers, so the caller can choose whether to reject them.
//!
//! # References
//!
//! - Murray, Pipino & van Gigch (1985), "A pilot study of fuzzy set
//!   modification of Delphi"
//! - Cheng & Lin (2002), "Evaluating the best main battle tank using
//!   fuzzy decision theory with linguistic criteria evaluation"

mod mapper;
mod types;

pub use mapper::{map_column, map_to_fuzzy, out_of_domain_cells, MappedRating, OutOfDomainCell};
pub use types::{LikertScale, TriangularFuzzyNumber};
