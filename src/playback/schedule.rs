use std::time::{Duration, Instant};

/*
Cooperative Scheduler
=====================

Two kinds of deferred work, both cancellable through the `TaskId` returned
when they are scheduled:

  frame request   runs on the next tick, whatever the time
  timeout         runs on the first tick at or after `now + delay`

A tick only services tasks that existed when it began. Work scheduled while a
tick is being processed (a frame that requests the next frame, a zero delay
timeout) waits for the following tick, so a chain of frames advances exactly
one step per tick.

Nothing runs on its own: the owner calls `begin` and drains `next_due` once
per rendered frame.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

// Tie-break at the same instant: timeouts before frames.
const TIMEOUT_RANK: u8 = 0;
const FRAME_RANK: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Frame,
    At(Instant),
}

#[derive(Debug)]
struct Task<A> {
    id: TaskId,
    trigger: Trigger,
    action: A,
}

/// A task that came due, with the time it logically ran at: the tick time for
/// frames, the deadline for timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<A> {
    pub id: TaskId,
    pub action: A,
    pub at: Instant,
}

/// One pass over the scheduler. Holds the tick time and the first id that is
/// too new to run in this pass.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    now: Instant,
    horizon: u64,
}

impl Tick {
    pub fn now(&self) -> Instant {
        self.now
    }
}

#[derive(Debug)]
pub struct Scheduler<A> {
    tasks: Vec<Task<A>>,
    next_id: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    pub fn request_frame(&mut self, action: A) -> TaskId {
        self.push(Trigger::Frame, action)
    }

    pub fn set_timeout(&mut self, now: Instant, delay: Duration, action: A) -> TaskId {
        self.push(Trigger::At(now + delay), action)
    }

    /// Returns false if the task already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn begin(&self, now: Instant) -> Tick {
        Tick {
            now,
            horizon: self.next_id,
        }
    }

    /// Remove and return the earliest task due in `tick`. Timeouts come out in
    /// deadline order, ahead of frame requests due at the same instant; within a
    /// kind, ties go to the older task.
    pub fn next_due(&mut self, tick: &Tick) -> Option<Fired<A>> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.id.0 < tick.horizon)
            .filter_map(|(idx, task)| match task.trigger {
                Trigger::Frame => Some((idx, (tick.now, FRAME_RANK, task.id))),
                Trigger::At(deadline) if deadline <= tick.now => {
                    Some((idx, (deadline, TIMEOUT_RANK, task.id)))
                }
                Trigger::At(_) => None,
            })
            .min_by_key(|&(_, key)| key)
            .map(|(idx, _)| idx)?;

        let task = self.tasks.remove(idx);
        let at = match task.trigger {
            Trigger::Frame => tick.now,
            Trigger::At(deadline) => deadline,
        };
        Some(Fired {
            id: task.id,
            action: task.action,
            at,
        })
    }

    fn push(&mut self, trigger: Trigger, action: A) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task { id, trigger, action });
        id
    }
}
