//! Market generation for the Estate Gym.
//!
//! This crate builds the synthetic listing inventory one episode consumes:
//! - [`MarketGenerator`]: quality-conditioned listing synthesis
//! - [`sao_paulo_districts`]: the default neighborhood quality fixture
//! - [`interp`]: clamped linear interpolation used by every derived attribute

mod generator;
mod interp;
mod neighborhoods;

pub use generator::{GeneratorConfig, MarketGenerator};
pub use interp::interp;
pub use neighborhoods::{DEFAULT_QUALITY, sao_paulo_districts};
