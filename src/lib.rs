#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod command;
mod common;
mod config;
mod game;
pub mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod shell;
mod ui;

pub use board::*;
pub use command::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{Grid, GridError, Neighbors};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
#[cfg(feature = "std")]
pub use shell::{Flow, Shell};
pub use ui::*;
