//! Command.
//!
//! Commands capture a receiver and an action behind a common trait so a
//! remote control can store, replay, and undo them without knowing what
//! they do.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlotError {
    #[error("slot {0} out of range (0..{1})")]
    OutOfRange(usize, usize),
    #[error("slot {0} is empty")]
    Empty(usize),
}

/// The receiver. Shared between paired on/off commands.
pub struct Light {
    location: String,
    on: bool,
}

impl Light {
    pub fn new(location: &str) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Light {
            location: location.to_string(),
            on: false,
        }))
    }

    fn turn_on(&mut self) -> String {
        self.on = true;
        format!("Light in {} is ON", self.location)
    }

    fn turn_off(&mut self) -> String {
        self.on = false;
        format!("Light in {} is OFF", self.location)
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

pub trait Command {
    fn execute(&self) -> String;
    fn undo(&self) -> String;
    fn label(&self) -> String;
}

pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        LightOnCommand { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) -> String {
        self.light.borrow_mut().turn_on()
    }

    fn undo(&self) -> String {
        self.light.borrow_mut().turn_off()
    }

    fn label(&self) -> String {
        format!("LightOn({})", self.light.borrow().location)
    }
}

pub struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        LightOffCommand { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) -> String {
        self.light.borrow_mut().turn_off()
    }

    fn undo(&self) -> String {
        self.light.borrow_mut().turn_on()
    }

    fn label(&self) -> String {
        format!("LightOff({})", self.light.borrow().location)
    }
}

const SLOT_COUNT: usize = 7;
const HISTORY_LIMIT: usize = 10;

/// Invoker with a fixed bank of slots, a last-command undo slot and a
/// bounded history of executed labels.
pub struct RemoteControl {
    slots: Vec<Option<Rc<dyn Command>>>,
    last: Option<Rc<dyn Command>>,
    history: VecDeque<String>,
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteControl {
    pub fn new() -> Self {
        RemoteControl {
            slots: vec![None; SLOT_COUNT],
            last: None,
            history: VecDeque::new(),
        }
    }

    pub fn set_command(&mut self, slot: usize, command: Rc<dyn Command>) -> Result<(), SlotError> {
        if slot >= SLOT_COUNT {
            return Err(SlotError::OutOfRange(slot, SLOT_COUNT));
        }
        self.slots[slot] = Some(command);
        Ok(())
    }

    pub fn press(&mut self, slot: usize) -> Result<String, SlotError> {
        if slot >= SLOT_COUNT {
            return Err(SlotError::OutOfRange(slot, SLOT_COUNT));
        }
        let command = self.slots[slot]
            .clone()
            .ok_or(SlotError::Empty(slot))?;
        let line = command.execute();
        self.remember(command.label());
        self.last = Some(command);
        Ok(line)
    }

    /// Undo re-runs the inverse of whatever executed last. Pressing undo
    /// twice does not oscillate; the second press is a no-op.
    pub fn press_undo(&mut self) -> Option<String> {
        let command = self.last.take()?;
        Some(command.undo())
    }

    pub fn history(&self) -> Vec<String> {
        self.history.iter().cloned().collect()
    }

    // Oldest entries are evicted once the limit is reached.
    fn remember(&mut self, label: String) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(label);
    }
}
