//! Pure state logic for the team builder.
//!
//! Filtering, pagination, team selection and the session reducer live here.
//! Nothing in this module holds mutable state across calls except the
//! filter cache, which only memoizes pure results.

pub mod cache;
pub mod filter;
pub mod paginate;
pub mod selection;
pub mod session;

pub use cache::FilterCache;
pub use paginate::{paginate, PAGE_SIZE};
pub use selection::SelectionOutcome;
pub use session::{reduce, Intent, SessionState, SELECTABLE_GENDERS};
