//! Fuzzy Delphi Method for aggregating expert opinion.
//!
//! Experts rate a set of items on a Likert scale. Each rating is turned
//! into a triangular fuzzy number, and the panel's agreement is measured
//! against the group mean:
//!
//! - **Scale mapping**: fixed 5- and 7-point lookup tables
//!   ([`scale`])
//! - **Distance**: RMS vertex distance of each expert from the group-mean
//!   fuzzy number, averaged into per-item d-values and an overall
//!   d-construct ([`analysis`])
//! - **Consensus**: percentage of experts within a distance threshold
//! - **Defuzzification**: vertex centroid of the group mean, used to rank
//!   items
//! - **Reporting**: interpretation, text report and delimited export
//!   ([`report`])
//!
//! # Quick start
//!
//! ```
//! use u_delphi::analysis::{DelphiConfig, DelphiRunner};
//! use u_delphi::data::RatingMatrix;
//! use u_delphi::report::{format_report, Interpretation};
//!
//! let ratings = RatingMatrix::from_rows(
//!     ["Cost", "Safety", "Usability"],
//!     vec![
//!         vec![Some(4), Some(5), Some(3)],
//!         vec![Some(4), Some(5), Some(2)],
//!         vec![Some(3), Some(4), Some(3)],
//!         vec![Some(4), Some(5), None],
//!     ],
//! )
//! .unwrap();
//!
//! let result = DelphiRunner::run(&ratings, &DelphiConfig::default()).unwrap();
//! assert_eq!(result.item("Safety").unwrap().rank, Some(1.0));
//!
//! let verdict = Interpretation::of(&result);
//! println!("{verdict}\n{}", format_report(&result));
//! ```
//!
//! # Features
//!
//! - `parallel`: process items with rayon when
//!   [`DelphiConfig::parallel`](analysis::DelphiConfig::parallel) is set
//! - `serde`: `Serialize`/`Deserialize` for data and result types

pub mod analysis;
pub mod data;
pub mod error;
pub mod report;
pub mod sample;
pub mod scale;

pub use error::DelphiError;
