// src/core/utils/time.rs
use crate::models::common::TimestampMs;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Time source injected into every manager that schedules anything. Hosts
/// without a usable system clock (wasm) drive a [`ManualClock`] from their
/// event loop instead.
pub trait Clock {
    fn now_ms(&self) -> TimestampMs;
}

pub type SharedClock = Rc<dyn Clock>;

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as TimestampMs)
            .unwrap_or(0)
    }
}

/// Host-driven clock; `now_ms` only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<TimestampMs>,
}

impl ManualClock {
    pub fn new(start_ms: TimestampMs) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: TimestampMs) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: TimestampMs) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now.get()
    }
}
