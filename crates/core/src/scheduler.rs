//! Scheduler module - recurring tasks on a host-driven millisecond clock
//!
//! The game runs three recurring activities (frame tick, actor animation,
//! gate spawn). Each one is registered with [`Scheduler::every`] and
//! identified by the returned [`TaskHandle`]; [`Scheduler::cancel`] removes it
//! and is safe to call with a handle that is already gone.
//!
//! Time only moves when the host calls [`Scheduler::advance`]. Due tasks are
//! then drained one at a time with [`Scheduler::pop_due`], so a callback that
//! cancels other tasks takes effect before they would fire.

/// The recurring activities the game schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Per-frame physics tick and render
    Frame,
    /// Cosmetic actor animation frame advance
    Animate,
    /// Gate spawn
    Spawn,
}

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Task {
    handle: TaskHandle,
    kind: TaskKind,
    period_ms: u64,
    next_due_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            tasks: Vec::new(),
        }
    }

    /// Schedule `kind` to fire every `period_ms`, first one period from now.
    pub fn every(&mut self, kind: TaskKind, period_ms: u32) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let period_ms = u64::from(period_ms.max(1));
        self.tasks.push(Task {
            handle,
            kind,
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
        handle
    }

    /// Remove a task. Returns false if it was not scheduled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Number of scheduled tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of scheduled tasks of one kind.
    pub fn count(&self, kind: TaskKind) -> usize {
        self.tasks.iter().filter(|t| t.kind == kind).count()
    }

    /// Move the clock forward.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
    }

    /// Take the earliest due task, if any, and reschedule it one period later.
    ///
    /// Ties on due time go to the task scheduled first.
    pub fn pop_due(&mut self) -> Option<(TaskHandle, TaskKind)> {
        let now = self.now_ms;
        let task = self
            .tasks
            .iter_mut()
            .filter(|t| t.next_due_ms <= now)
            .min_by_key(|t| (t.next_due_ms, t.handle))?;

        task.next_due_ms += task.period_ms;
        Some((task.handle, task.kind))
    }

    /// Milliseconds until the next task is due (0 if one is overdue).
    pub fn until_next_due(&self) -> Option<u64> {
        self.tasks
            .iter()
            .map(|t| t.next_due_ms.saturating_sub(self.now_ms))
            .min()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
