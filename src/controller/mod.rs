//! Undo Bar Controller
//!
//! Arms one delayed finalize and lets the user cancel it before it fires.
//! Finalize removes the bar and the list entry, then notifies the server
//! without waiting for an answer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::UndoBarConfig;
use crate::error::UndoResult;
use crate::request::FinalizeRequest;
use crate::surface::{FinalizeNotifier, Scheduler, TimerHandle, UndoSurface};


/// Where the undo window stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Timer armed, undo still possible
    #[default]
    Pending,
    /// User undid the removal; finalize will never run
    Cancelled,
    /// Finalize ran; undo is too late
    Finalized,
}

/// Result of a cancel request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    AlreadyCancelled,
    /// Finalize already ran; nothing is reversed
    TooLate,
}

/// What each finalize step did. No step is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeReport {
    pub bar: UndoResult<()>,
    pub entry: UndoResult<()>,
    pub notify: UndoResult<()>,
}

impl FinalizeReport {
    pub fn is_clean(&self) -> bool {
        self.bar.is_ok() && self.entry.is_ok() && self.notify.is_ok()
    }
}

#[derive(Default)]
struct Shared {
    phase: Phase,
    report: Option<FinalizeReport>,
}

/// Controller for one undo bar.
///
/// Owns the pending timer. Dropping the controller drops the handle, which
/// for browser timers cancels the finalize; call [`detach`](Self::detach)
/// to keep it armed instead.
pub struct UndoBarController<H: TimerHandle> {
    config: UndoBarConfig,
    shared: Rc<RefCell<Shared>>,
    timer: Option<H>,
}

impl<H: TimerHandle> UndoBarController<H> {
    /// Arm the finalize timer for `config.remaining_ms`
    pub fn arm<S, N, T>(config: UndoBarConfig, surface: S, notifier: N, scheduler: &T) -> Self
    where
        S: UndoSurface + 'static,
        N: FinalizeNotifier + 'static,
        T: Scheduler<Handle = H>,
    {
        let shared = Rc::new(RefCell::new(Shared::default()));

        let task = {
            let shared = Rc::clone(&shared);
            let config = config.clone();
            move || finalize(&shared, &config, &surface, &notifier)
        };

        log::debug!(
            "Armed finalize for item {} in {}ms",
            config.item_id,
            config.remaining_ms
        );
        let timer = scheduler.schedule(config.remaining_ms, Box::new(task));

        Self {
            config,
            shared,
            timer: Some(timer),
        }
    }

    /// Undo: stop the pending finalize if it has not run yet
    pub fn cancel(&mut self) -> CancelOutcome {
        let mut state = self.shared.borrow_mut();
        match state.phase {
            Phase::Pending => {
                state.phase = Phase::Cancelled;
                if let Some(timer) = self.timer.take() {
                    timer.cancel();
                }
                log::info!("Undo for item {}, finalize cancelled", self.config.item_id);
                CancelOutcome::Cancelled
            }
            Phase::Cancelled => CancelOutcome::AlreadyCancelled,
            Phase::Finalized => {
                log::debug!("Undo for item {} arrived after finalize", self.config.item_id);
                CancelOutcome::TooLate
            }
        }
    }

    /// Give up the handle but keep the finalize armed
    pub fn detach(mut self) {
        if let Some(timer) = self.timer.take() {
            timer.detach();
        }
    }

    pub fn phase(&self) -> Phase {
        self.shared.borrow().phase
    }

    pub fn config(&self) -> &UndoBarConfig {
        &self.config
    }

    /// Step results, once finalize has run
    pub fn report(&self) -> Option<FinalizeReport> {
        self.shared.borrow().report.clone()
    }
}

fn finalize<S, N>(shared: &RefCell<Shared>, config: &UndoBarConfig, surface: &S, notifier: &N)
where
    S: UndoSurface,
    N: FinalizeNotifier,
{
    {
        let mut state = shared.borrow_mut();
        if state.phase != Phase::Pending {
            log::debug!("Ignoring finalize for item {} in phase {:?}", config.item_id, state.phase);
            return;
        }
        state.phase = Phase::Finalized;
    }

    // Visual removal first, the server hears about it afterwards
    let bar = surface.remove_bar();
    if let Err(e) = &bar {
        log::debug!("Undo bar not removed: {}", e);
    }

    let entry = surface.remove_entry(&config.entry_id());
    if let Err(e) = &entry {
        log::debug!("List entry not removed: {}", e);
    }

    let request = FinalizeRequest::from_config(config);
    let notify = notifier.dispatch(&request);
    match &notify {
        Ok(()) => log::info!("Finalize sent for item {} to {}", config.item_id, request.url),
        Err(e) => log::warn!("{}", e),
    }

    shared.borrow_mut().report = Some(FinalizeReport { bar, entry, notify });
}
