//! Facility-location coverage objective over a candidate pool.
//!
//! ```text
//! F(S) = Σ_j max(α · relevance_j, max_{s ∈ S} sim(e_s, e_j))
//! ```
//!
//! `relevance_j` is the cosine similarity of candidate `j` to the reference embedding and
//! acts as a coverage floor: a candidate is "explained" either by its own scaled relevance
//! or by resembling something already selected. `F` is monotone and submodular, so the
//! marginal gain of any fixed candidate can only shrink as the selection grows. The greedy
//! selector relies on that to skip recomputations.
//!
//! Only increments are ever computed; `F` itself is available through
//! [`CoverageModel::objective`] for reporting.

pub mod error;
pub mod model;


pub use error::CoverageError;
pub use model::CoverageModel;
