//! Data models for the team builder.
//!
//! Records are read-only; filter state and views are plain values.

mod filter;
mod user;
mod view;

pub use filter::*;
pub use user::*;
pub use view::*;
