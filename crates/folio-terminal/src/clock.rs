//! Time source for `date` and `uptime`
//!
//! Handlers never read the system clock directly; the interpreter is given
//! a [`Clock`] so tests can pin and advance time.

use std::cell::Cell;
use std::rc::Rc;
use chrono::{DateTime, Duration, FixedOffset, Local};

/// Source of the current wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local time from the host (the browser clock under wasm)
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Clock that only moves when told to
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to the interpreter.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<FixedOffset>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + Duration::seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now.get()
    }
}

/// `date` output, in the style of JavaScript's `Date.toString()`
pub fn format_date(now: &DateTime<FixedOffset>) -> String {
    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

/// `uptime` output: `up H:MM:SS`
pub fn format_uptime(secs: i64) -> String {
    let secs = secs.max(0);
    format!("up {}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
