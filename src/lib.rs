//! Undo Bar
//!
//! Undo window for a pending deletion on a server-rendered page:
//! - config: `data-*` attributes of the undo bar
//! - controller: the timer, finalize and cancel paths
//! - surface: what the controller drives (page, server, timers)
//! - web: the browser implementations and the wasm entry point

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod request;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{RawAttributes, UndoBarConfig};
pub use controller::{CancelOutcome, FinalizeReport, Phase, UndoBarController};
pub use error::{UndoError, UndoResult};
pub use request::FinalizeRequest;
pub use surface::{FinalizeNotifier, Scheduler, TimerHandle, UndoSurface};
