//! Round-robin cooperative scheduler

use crate::rtos::task::{RegistryFull, TaskFn, TaskId, TaskRegistry};
use crate::time::{SystemClock, Tick};

/// Dispatches registered tasks whenever their period in ticks has elapsed.
///
/// Each pass walks the registry in registration order; a task is due when
/// `now - last_run >= period` under wrapping subtraction, which stays
/// correct across a single counter wrap. No due-time queue is kept: a task
/// that fell due more than once between passes runs only once, a drift this
/// design accepts. If the counter wraps twice between passes the elapsed
/// value is ambiguous and a task can be skipped; the system would have to
/// run without a single scheduler pass for a full counter range for that to
/// happen, and it is a known limitation rather than a handled case.
///
/// All `register` calls must happen before [`run`](Scheduler::run), which
/// consumes the scheduler and never returns, so late registration is ruled
/// out at compile time.
pub struct Scheduler<'c> {
    clock: &'c SystemClock,
    tasks: TaskRegistry,
}

impl<'c> Scheduler<'c> {
    pub fn new(clock: &'c SystemClock) -> Self {
        Self {
            clock,
            tasks: TaskRegistry::new(),
        }
    }

    /// Register a task to run every `period` ticks. See
    /// [`TaskRegistry::register`].
    pub fn register(&mut self, entry: TaskFn, period: Tick) -> Result<TaskId, RegistryFull> {
        self.tasks.register(entry, period)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Take over the foreground context and dispatch tasks forever.
    pub fn run(mut self) -> ! {
        loop {
            self.dispatch_pass();
        }
    }

    /// One scheduling pass over the registry.
    ///
    /// The tick count is sampled per task, not per pass, so a task delayed
    /// by an earlier long-running task body is judged against the time it
    /// is actually reached.
    fn dispatch_pass(&mut self) {
        let clock = self.clock;
        self.tasks.for_each(|slot| {
            let now = clock.get_ticks();
            if now.wrapping_sub(*slot.last_run) >= slot.period {
                *slot.last_run = now;
                (slot.entry)();
            }
        });
    }
}
