//! The transient "Copied!" confirmation.

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Where the copied flag lives. A signal in the app, a plain cell in tests.
pub trait FeedbackFlag: Clone + 'static {
    fn put(&mut self, value: bool);
    fn get(&self) -> bool;
}

impl FeedbackFlag for Signal<bool> {
    fn put(&mut self, value: bool) {
        Writable::set(self, value);
    }

    fn get(&self) -> bool {
        *self.peek()
    }
}

impl FeedbackFlag for Rc<Cell<bool>> {
    fn put(&mut self, value: bool) {
        self.set(value);
    }

    fn get(&self) -> bool {
        Cell::get(self)
    }
}

/// Runs a task once after a delay. Dropping the handle cancels the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

pub struct CopyFeedback<F: FeedbackFlag, S: Scheduler> {
    flag: F,
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<F: FeedbackFlag, S: Scheduler> CopyFeedback<F, S> {
    pub fn new(flag: F, scheduler: S, delay: Duration) -> Self {
        Self {
            flag,
            scheduler,
            delay,
            pending: None,
        }
    }

    pub fn copied(&self) -> bool {
        self.flag.get()
    }

    /// Raises the flag and (re)starts the countdown to lower it.
    ///
    /// Only one reset is ever pending: the previous handle is dropped, and with it
    /// its task, before the new one is scheduled.
    pub fn confirm(&mut self) {
        self.pending = None;
        self.flag.put(true);

        let mut flag = self.flag.clone();
        let reset = self
            .scheduler
            .schedule(self.delay, Box::new(move || flag.put(false)));
        self.pending = Some(reset);
    }
}
