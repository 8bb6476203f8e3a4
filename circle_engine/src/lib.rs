//! # Circle Engine
//!
//! The stateful half of the circle dance puzzle. It drives `circle_rules`
//! one tick at a time and reports what happened as [`GameEvent`]s for the
//! presentation layer to play back.
//!
//! ## Core Components
//!
//! - **executor**: Runs one move at a time from `t = 0` to commit
//! - **beef**: Eliminates nemesis-type neighbors of a character that just moved
//! - **incantation**: Records the lead's moves and matches the pattern library
//! - **economy**: Turn budget, goal queue and round success/failure
//! - **barrier**: Completion handles joined before the engine moves on
//! - **engine**: The tick function tying everything together
//!
//! ## Design Philosophy
//!
//! - **Exclusive**: At most one move or effect is in progress at any time
//! - **Tick-Driven**: No threads and no callbacks; state advances only in `tick`
//! - **No Faults Mid-Round**: Illegal input resolves to a no-op, never an error

pub mod barrier;
pub mod beef;
pub mod economy;
pub mod engine;
pub mod events;
pub mod executor;
pub mod incantation;

pub use barrier::*;
pub use beef::*;
pub use economy::*;
pub use engine::*;
pub use events::*;
pub use executor::*;
pub use incantation::*;
