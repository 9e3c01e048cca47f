//! Collaborator Traits
//!
//! Abstract interfaces the controller drives. The browser implementations
//! live in `web`; tests use in-memory ones.

use crate::error::UndoResult;
use crate::request::FinalizeRequest;

/// The visible tree the undo bar and the list entry live in
pub trait UndoSurface {
    /// Detach the undo bar itself
    fn remove_bar(&self) -> UndoResult<()>;

    /// Detach the list entry with the given element id
    fn remove_entry(&self, entry_id: &str) -> UndoResult<()>;
}

/// Outbound finalize notification
///
/// `dispatch` only issues the request. It must not wait for the response,
/// and an `Ok` means "sent", not "committed".
pub trait FinalizeNotifier {
    fn dispatch(&self, request: &FinalizeRequest) -> UndoResult<()>;
}

/// Single-shot delayed callbacks
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Run `callback` once, no earlier than `delay_ms` from now
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Handle of a scheduled callback
pub trait TimerHandle {
    /// Stop the callback from running. No effect once it has run.
    fn cancel(self);

    /// Let the callback run even though the handle goes away
    fn detach(self);
}
