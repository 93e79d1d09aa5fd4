//! Advance-count distributions for periodically timed entities.
//!
//! Every entity repeats a timed behavior on a randomly drawn cooldown cycle.
//! Over a fixed observation window, the cycle's unknown starting offset
//! determines how many of its marked phases the window overlaps, and each
//! overlapped phase consumes RNG advances. This crate turns entity behaviors
//! and windows into distributions over total advances consumed.
//!
//! ## Pipeline
//!
//! 1. [`Counter`] — Hit-count [`Tally`] for one cycle, one phase set, one window
//! 2. [`Mixer`] — Weights tallies across the [`Cooldowns`] catalog for one
//!    [`Behavior`] and converts hits to advances
//! 3. Convolution — Folds every entity's distribution for a window into one
//! 4. [`Summary`](adv_density::Summary) — Full and significant advance ranges
//!
//! ## Configuration
//!
//! - [`Catalog`] — Entity type codes, named [`Window`]s, and cooldowns
//! - [`Calculator`] — Runs the pipeline over a catalog, one [`Report`] per window
mod behavior;
mod calculator;
mod catalog;
mod cooldown;
mod counter;
mod cycle;
mod mixer;
mod phases;
mod report;
mod window;

pub use behavior::*;
pub use calculator::*;
pub use catalog::*;
pub use cooldown::*;
pub use counter::*;
pub use cycle::*;
pub use mixer::*;
pub use phases::*;
pub use report::*;
pub use window::*;
