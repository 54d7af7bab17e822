//! Market events for the Estate Gym.
//!
//! Every few steps the simulator applies one globally-sampled shock to the
//! whole inventory. The event *kind* is a single discrete draw per tick; its
//! price multiplier is drawn per affected listing inside the sweep.

mod event;

pub use event::{MarketEvent, apply_random_event};
