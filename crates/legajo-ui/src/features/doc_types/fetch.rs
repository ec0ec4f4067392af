//! Per-card document type lookup slot.
//!
//! # Design
//! - At most one pending lookup per card: a debounce timer or an in-flight request.
//! - Restarting bumps the generation, drops the timer and aborts the request.
//! - Results are applied only while their generation is still current.

use crate::features::doc_types::state::LookupGeneration;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

#[derive(Default)]
pub(crate) struct TypeFetchSlot {
    generation: LookupGeneration,
    timer: Option<Timeout>,
    controller: Option<AbortController>,
}

impl TypeFetchSlot {
    /// Supersede any pending lookup and return the new generation.
    pub(crate) fn restart(&mut self) -> u64 {
        self.cancel();
        self.generation.advance()
    }

    /// Keep the debounce timer for `generation`.
    pub(crate) fn hold_timer(&mut self, generation: u64, timer: Timeout) {
        if self.is_current(generation) {
            self.timer = Some(timer);
        }
    }

    /// Abort signal for the request of `generation`, `None` if it was superseded.
    pub(crate) fn begin_request(&mut self, generation: u64) -> Option<AbortSignal> {
        if !self.is_current(generation) {
            return None;
        }
        let controller = AbortController::new().ok()?;
        let signal = controller.signal();
        if let Some(previous) = self.controller.replace(controller) {
            previous.abort();
        }
        Some(signal)
    }

    pub(crate) const fn is_current(&self, generation: u64) -> bool {
        self.generation.is_current(generation)
    }

    /// Drop the pending timer and abort the in-flight request.
    pub(crate) fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
    }
}

impl Drop for TypeFetchSlot {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
    }
}
