//! Leptos Debounce Utilities
//!
//! Single-slot cancellable delayed task for coalescing bursts of input events.
//! Scheduling a new task replaces (and cancels) the pending one, so only the
//! last call within a quiet window runs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub mod manual;

pub use manual::ManualTimers;

/// Something that can run a callback after a delay.
///
/// Dropping the returned handle must cancel the callback if it has not run yet.
pub trait TimerBackend {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via gloo. Dropping a `Timeout` clears it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerBackend for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Debouncer with at most one pending task.
pub struct Debouncer<B: TimerBackend = BrowserTimers> {
    backend: B,
    delay_ms: u32,
    pending: RefCell<Option<B::Handle>>,
    /// Generation of the armed task, 0 when idle
    armed: Rc<Cell<u64>>,
    generation: Cell<u64>,
}

impl Debouncer<BrowserTimers> {
    pub fn new(delay_ms: u32) -> Self {
        Self::with_backend(BrowserTimers, delay_ms)
    }
}

impl<B: TimerBackend> Debouncer<B> {
    pub fn with_backend(backend: B, delay_ms: u32) -> Self {
        Self {
            backend,
            delay_ms,
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(0)),
            generation: Cell::new(0),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Schedule `task` after the delay, replacing any pending task.
    pub fn call(&self, task: impl FnOnce() + 'static) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.armed.set(generation);

        let armed = Rc::clone(&self.armed);
        let handle = self.backend.schedule(
            self.delay_ms,
            Box::new(move || {
                // A superseded timer that slipped past cancellation must not run
                if armed.get() != generation {
                    return;
                }
                armed.set(0);
                task();
            }),
        );

        // Replacing drops the previous handle, which cancels its timer
        self.pending.replace(Some(handle));
    }

    /// Drop the pending task, if any.
    pub fn cancel(&self) {
        self.armed.set(0);
        self.pending.replace(None);
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get() != 0
    }
}

/// Create a browser-backed debouncer owned by the current reactive scope.
///
/// The pending task is cancelled when the scope is cleaned up.
pub fn use_debouncer(delay_ms: u32) -> StoredValue<Debouncer, LocalStorage> {
    let debouncer = StoredValue::new_local(Debouncer::new(delay_ms));
    on_cleanup(move || {
        let _ = debouncer.try_with_value(|d| d.cancel());
    });
    debouncer
}
