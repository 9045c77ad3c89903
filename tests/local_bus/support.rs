//! Shared helpers: a call recorder whose handlers log a label per call.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use local_event_bus::{Args, Event, HandlerResult};

#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that records `label` every time it runs.
    pub fn handler(&self, label: &str) -> impl Fn(&Event, &Args) -> HandlerResult + 'static {
        let recorder = self.clone();
        let label = label.to_owned();
        move |_event, _args| {
            recorder.push(label.clone());
            Ok(())
        }
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.calls.borrow_mut().push(entry.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, label: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == label).count()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}
