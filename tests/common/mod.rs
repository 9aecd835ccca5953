//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use fretcoach::{
    audio::{AudioError, AudioOutput},
    synth::SynthMessage,
};

/// Records every message and lets the test move the audio clock by hand.
/// Clones share the same log and clock.
#[derive(Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<SynthMessage>>>,
    clock: Rc<Cell<f64>>,
    open: Rc<Cell<bool>>,
    opens: Rc<Cell<usize>>,
    refuse: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An output whose device never opens.
    pub fn without_device() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<SynthMessage> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    /// `(string, at)` of every pluck, in send order.
    pub fn plucks(&self) -> Vec<(usize, f64)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|m| match *m {
                SynthMessage::Pluck { string, at, .. } => Some((string, at)),
                _ => None,
            })
            .collect()
    }

    pub fn set_clock(&self, seconds: f64) {
        self.clock.set(seconds);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn opens(&self) -> usize {
        self.opens.get()
    }
}

impl AudioOutput for Recorder {
    fn open(&mut self) -> Result<(), AudioError> {
        if self.refuse {
            return Err(AudioError::NoOutputDevice);
        }
        self.opens.set(self.opens.get() + 1);
        self.open.set(true);
        Ok(())
    }

    fn close(&mut self) {
        self.open.set(false);
    }

    fn send(&mut self, message: SynthMessage) -> Result<(), AudioError> {
        if !self.open.get() {
            return Err(AudioError::AlreadyClosed);
        }
        self.log.borrow_mut().push(message);
        Ok(())
    }

    fn now(&self) -> f64 {
        self.clock.get()
    }
}
