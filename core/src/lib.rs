#![no_std]

extern crate alloc;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use pacing::*;
pub use queue::*;
pub use session::*;
pub use strategy::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod pacing;
mod queue;
mod session;
mod strategy;
mod types;
