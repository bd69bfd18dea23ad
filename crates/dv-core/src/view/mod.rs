//! Document view engine
//! 文档视图引擎
//!
//! Pure state for one open document view: the authoritative raw listing, the
//! user's search and sort choices, and the derived list that is rendered.
//! No I/O happens here; the async session in `dv-app` drives it.

mod reconcile;
mod sort;
mod state;

pub use reconcile::{compute_displayed, matches_query};
pub use sort::{ParseSortOptionError, SortOption};
pub use state::{RefreshOutcome, RefreshTicket, ViewPhase, ViewState};
