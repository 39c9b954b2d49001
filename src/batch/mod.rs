//! Per-budget batch runs.
//!
//! A [`BudgetSpec`] is either a single `k` or an inclusive range `start-end`. The
//! [`BatchDriver`] runs a fresh greedy selection for each `k` against one
//! [`CandidatePool`] and collects the results keyed by budget. Results for different
//! budgets are independent; the `k = 2` selection is not required to be a prefix of the
//! `k = 3` one.
//!
//! # Atomicity
//!
//! Every budget is checked against the pool size before the first run. If any run still
//! fails, the whole batch fails and no partial [`BatchResult`] is returned.

pub mod budget;
pub mod driver;
pub mod error;
pub mod pool;


pub use budget::BudgetSpec;
pub use driver::{BatchDriver, BatchResult, BudgetSelection, SelectedQuery};
pub use error::{BatchError, BudgetError};
pub use pool::CandidatePool;
