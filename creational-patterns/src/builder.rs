//! Builder.
//!
//! A fluent mutable builder over sparse optional fields. `build()`
//! transfers the accumulated value out of the builder; afterwards the
//! builder reports [`BuildError::AlreadyBuilt`] and setters are inert.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("builder already produced its value")]
    AlreadyBuilt,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Computer {
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub gpu: Option<String>,
    pub motherboard: Option<String>,
    pub has_wifi: bool,
    pub has_bluetooth: bool,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(field: &Option<String>) -> &str {
            field.as_deref().unwrap_or("Not specified")
        }
        writeln!(f, "Computer Configuration:")?;
        writeln!(f, "  CPU: {}", part(&self.cpu))?;
        writeln!(f, "  RAM: {}", part(&self.ram))?;
        writeln!(f, "  Storage: {}", part(&self.storage))?;
        writeln!(f, "  GPU: {}", part(&self.gpu))?;
        writeln!(f, "  Motherboard: {}", part(&self.motherboard))?;
        writeln!(f, "  WiFi: {}", if self.has_wifi { "Yes" } else { "No" })?;
        write!(f, "  Bluetooth: {}", if self.has_bluetooth { "Yes" } else { "No" })
    }
}

/// Mutable fluent builder: each setter returns `&mut Self` for chaining.
///
/// The value lives in an `Option` so `build()` can move it out; later
/// setters find nothing to mutate and become no-ops.
#[derive(Default)]
pub struct ComputerBuilder {
    computer: Option<Computer>,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        ComputerBuilder {
            computer: Some(Computer::default()),
        }
    }

    fn with(&mut self, f: impl FnOnce(&mut Computer)) -> &mut Self {
        if let Some(computer) = self.computer.as_mut() {
            f(computer);
        }
        self
    }

    pub fn cpu(&mut self, cpu: impl Into<String>) -> &mut Self {
        self.with(|c| c.cpu = Some(cpu.into()))
    }

    pub fn ram(&mut self, ram: impl Into<String>) -> &mut Self {
        self.with(|c| c.ram = Some(ram.into()))
    }

    pub fn storage(&mut self, storage: impl Into<String>) -> &mut Self {
        self.with(|c| c.storage = Some(storage.into()))
    }

    pub fn gpu(&mut self, gpu: impl Into<String>) -> &mut Self {
        self.with(|c| c.gpu = Some(gpu.into()))
    }

    pub fn motherboard(&mut self, motherboard: impl Into<String>) -> &mut Self {
        self.with(|c| c.motherboard = Some(motherboard.into()))
    }

    pub fn wifi(&mut self) -> &mut Self {
        self.with(|c| c.has_wifi = true)
    }

    pub fn bluetooth(&mut self) -> &mut Self {
        self.with(|c| c.has_bluetooth = true)
    }

    /// Moves the finished value out of the builder.
    pub fn build(&mut self) -> Result<Computer, BuildError> {
        self.computer.take().ok_or(BuildError::AlreadyBuilt)
    }
}
