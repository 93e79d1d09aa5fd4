//! Distribution of RNG advances consumed by periodically timed entities.
//!
//! Re-exports the workspace crates and adds the tab-delimited [`Table`]
//! presentation used by the `calculator` binary.
//!
//! - [`adv_core`] — Numeric aliases and constants
//! - [`adv_density`] — Distributions, convolution, and range summaries
//! - [`adv_engine`] — Cycles, behaviors, catalogs, and the [`Calculator`]
mod table;

pub use adv_core::*;
pub use adv_density::*;
pub use adv_engine::*;
pub use table::*;
