//! Facade.
//!
//! One orchestrator over four subsystems. The call order in `start`,
//! `shutdown` and `status` is part of the contract, so each returns the
//! ordered list of subsystem lines for the driver to print.

struct Cpu {
    temperature: u32,
}

impl Cpu {
    fn start(&mut self) -> String {
        self.temperature = 45;
        "CPU: Starting processor".to_string()
    }

    fn shutdown(&mut self) -> String {
        self.temperature = 25;
        "CPU: Shutting down processor".to_string()
    }

    fn status(&self) -> String {
        format!("CPU: Temperature {}°C", self.temperature)
    }
}

struct Memory {
    used_mb: u32,
    total_mb: u32,
}

impl Memory {
    fn load(&mut self) -> String {
        self.used_mb = 4000;
        "Memory: Loading operating system".to_string()
    }

    fn free(&mut self) -> String {
        self.used_mb = 1000;
        "Memory: Freeing memory".to_string()
    }

    fn status(&self) -> String {
        format!("Memory: {}/{} MB used", self.used_mb, self.total_mb)
    }
}

struct HardDrive {
    used_gb: u32,
    total_gb: u32,
}

impl HardDrive {
    fn read_boot_sector(&self) -> String {
        "HardDrive: Reading boot sector".to_string()
    }

    fn write_logs(&self) -> String {
        "HardDrive: Writing system logs".to_string()
    }

    fn status(&self) -> String {
        format!("HardDrive: {}/{} GB used", self.used_gb, self.total_gb)
    }
}

struct Gpu {
    load_percent: u32,
}

impl Gpu {
    fn start(&mut self) -> String {
        self.load_percent = 25;
        "GPU: Initializing graphics".to_string()
    }

    fn shutdown(&mut self) -> String {
        self.load_percent = 0;
        "GPU: Shutting down graphics".to_string()
    }

    fn status(&self) -> String {
        format!("GPU: Load {}%", self.load_percent)
    }
}

/// The facade. Owns all four subsystems and hides their wiring.
pub struct Computer {
    cpu: Cpu,
    memory: Memory,
    harddrive: HardDrive,
    gpu: Gpu,
}

impl Default for Computer {
    fn default() -> Self {
        Computer {
            cpu: Cpu { temperature: 35 },
            memory: Memory { used_mb: 2000, total_mb: 16000 },
            harddrive: HardDrive { used_gb: 250, total_gb: 1000 },
            gpu: Gpu { load_percent: 0 },
        }
    }
}

impl Computer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed order: cpu, memory, harddrive, gpu.
    pub fn start(&mut self) -> Vec<String> {
        vec![
            self.cpu.start(),
            self.memory.load(),
            self.harddrive.read_boot_sector(),
            self.gpu.start(),
        ]
    }

    /// Fixed order: harddrive, memory, gpu, cpu.
    pub fn shutdown(&mut self) -> Vec<String> {
        vec![
            self.harddrive.write_logs(),
            self.memory.free(),
            self.gpu.shutdown(),
            self.cpu.shutdown(),
        ]
    }

    /// Fixed order: cpu, memory, harddrive, gpu.
    pub fn status(&self) -> Vec<String> {
        vec![
            self.cpu.status(),
            self.memory.status(),
            self.harddrive.status(),
            self.gpu.status(),
        ]
    }
}
