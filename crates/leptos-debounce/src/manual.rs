//! Virtual clock backend for deterministic tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::TimerBackend;

struct Scheduled {
    id: u64,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_id: u64,
    queue: Vec<Scheduled>,
}

/// Timer backend driven by explicit `advance` calls.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its timer on drop.
pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            // Already removed if it fired
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.queue.retain(|s| s.id != self.id);
            }
        }
    }
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Number of timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward, firing due callbacks in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due_ms <= target)
                    .min_by_key(|(_, s)| (s.due_ms, s.id))
                    .map(|(idx, _)| idx);
                due.map(|idx| {
                    let scheduled = clock.queue.remove(idx);
                    clock.now_ms = scheduled.due_ms;
                    scheduled.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.clock.borrow_mut().now_ms = target;
    }
}

impl TimerBackend for ManualTimers {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let id = clock.next_id;
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.queue.push(Scheduled { id, due_ms, callback });
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}
