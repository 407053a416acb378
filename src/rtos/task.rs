//! Task descriptors and the fixed-capacity task registry

use crate::config::MAX_TASKS;
use crate::time::Tick;
use ufmt::{uDisplay, uWrite, Formatter};

/// A task entry routine. Runs to completion on the foreground context each
/// time the scheduler dispatches it.
pub type TaskFn = fn();

/// Identifier handed back by [`TaskRegistry::register`]; the slot index of
/// the task, stable for the life of the system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TaskId(usize);

impl TaskId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Registration was attempted with all [`MAX_TASKS`] slots occupied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegistryFull;

impl uDisplay for RegistryFull {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("task registry full")
    }
}

#[derive(Copy, Clone)]
struct TaskDesc {
    entry: TaskFn,
    period: Tick,
    last_run: Tick,
}

/// Mutable view of one registry slot, as seen by a
/// [`for_each`](TaskRegistry::for_each) visitor.
pub struct TaskSlot<'a> {
    pub entry: TaskFn,
    pub period: Tick,
    pub last_run: &'a mut Tick,
}

/// Fixed-capacity, append-only collection of task descriptors.
///
/// Slots are packed from index 0 and never cleared or reordered. All
/// registration happens before the scheduler starts; `last_run` is the only
/// field mutated afterwards, and only by the scheduler.
pub struct TaskRegistry {
    tasks: [Option<TaskDesc>; MAX_TASKS],
    count: usize,
}

impl TaskRegistry {
    pub const fn new() -> Self {
        Self {
            tasks: [None; MAX_TASKS],
            count: 0,
        }
    }

    /// Append a task with the given entry routine and period in ticks.
    ///
    /// `last_run` starts at 0, so a task is first due on the first pass
    /// where the tick count has reached its period. A period of 0 is legal
    /// and means "due on every pass". Fails without mutating anything once
    /// all slots are taken.
    pub fn register(&mut self, entry: TaskFn, period: Tick) -> Result<TaskId, RegistryFull> {
        if self.count >= MAX_TASKS {
            return Err(RegistryFull);
        }

        let id = TaskId(self.count);
        self.tasks[self.count] = Some(TaskDesc {
            entry,
            period,
            last_run: 0,
        });
        self.count += 1;
        Ok(id)
    }

    /// Visit every registered task in registration order.
    pub fn for_each(&mut self, mut visit: impl FnMut(TaskSlot<'_>)) {
        for desc in self.tasks[..self.count].iter_mut().flatten() {
            visit(TaskSlot {
                entry: desc.entry,
                period: desc.period,
                last_run: &mut desc.last_run,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn capacity(&self) -> usize {
        MAX_TASKS
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() {}

    #[test]
    fn register_fills_slots_with_distinct_ids() {
        let mut registry = TaskRegistry::new();
        let mut ids = std::vec::Vec::new();

        for i in 0..MAX_TASKS {
            let id = registry.register(noop, (i as Tick + 1) * 100).unwrap();
            assert!(!ids.contains(&id));
            ids.push(id);
        }
        assert_eq!(registry.len(), MAX_TASKS);
    }

    #[test]
    fn registration_past_capacity_fails_and_mutates_nothing() {
        let mut registry = TaskRegistry::new();
        for i in 0..MAX_TASKS {
            registry.register(noop, i as Tick).unwrap();
        }

        assert_eq!(registry.register(noop, 9999), Err(RegistryFull));
        assert_eq!(registry.len(), MAX_TASKS);

        // existing entries untouched, still in registration order
        let mut periods = std::vec::Vec::new();
        registry.for_each(|slot| periods.push(slot.period));
        let expected: std::vec::Vec<Tick> = (0..MAX_TASKS as Tick).collect();
        assert_eq!(periods, expected);
    }

    #[test]
    fn for_each_exposes_last_run_mutably() {
        let mut registry = TaskRegistry::new();
        registry.register(noop, 50).unwrap();

        registry.for_each(|slot| *slot.last_run = 42);

        let mut seen = 0;
        registry.for_each(|slot| seen = *slot.last_run);
        assert_eq!(seen, 42);
    }

    #[test]
    fn zero_period_registration_is_accepted() {
        let mut registry = TaskRegistry::new();
        assert!(registry.register(noop, 0).is_ok());
    }
}
