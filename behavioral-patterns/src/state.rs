//! State.
//!
//! A traffic light whose behaviour lives in the current state object.
//! Handling a tick consumes the state and hands back the successor, so
//! a transition can never leave the machine stateless.

pub trait TrafficState {
    fn name(&self) -> &str;

    /// Emits the signal line and the next state.
    fn handle(self: Box<Self>) -> (String, Box<dyn TrafficState>);
}

pub struct Red;
pub struct Green;
pub struct Yellow;

impl TrafficState for Red {
    fn name(&self) -> &str {
        "Red"
    }

    fn handle(self: Box<Self>) -> (String, Box<dyn TrafficState>) {
        ("Red light".to_string(), Box::new(Green))
    }
}

impl TrafficState for Green {
    fn name(&self) -> &str {
        "Green"
    }

    fn handle(self: Box<Self>) -> (String, Box<dyn TrafficState>) {
        ("Green light".to_string(), Box::new(Yellow))
    }
}

impl TrafficState for Yellow {
    fn name(&self) -> &str {
        "Yellow"
    }

    fn handle(self: Box<Self>) -> (String, Box<dyn TrafficState>) {
        ("Yellow light".to_string(), Box::new(Red))
    }
}

/// The context. Delegates every tick to whichever state is current.
pub struct TrafficLight {
    state: Box<dyn TrafficState>,
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficLight {
    pub fn new() -> Self {
        TrafficLight {
            state: Box::new(Red),
        }
    }

    pub fn set_state(&mut self, state: Box<dyn TrafficState>) {
        self.state = state;
    }

    pub fn current(&self) -> &str {
        self.state.name()
    }

    pub fn handle(&mut self) -> String {
        let state = std::mem::replace(&mut self.state, Box::new(Red));
        let (line, next) = state.handle();
        self.state = next;
        line
    }

    /// Runs a full red-green-yellow session.
    pub fn run_session(&mut self) -> Vec<String> {
        (0..3).map(|_| self.handle()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_starts_red() {
        let light = TrafficLight::new();
        assert_eq!(light.current(), "Red");
    }

    #[test]
    fn transitions_follow_the_cycle() {
        let mut light = TrafficLight::new();
        assert_eq!(light.handle(), "Red light");
        assert_eq!(light.current(), "Green");
        assert_eq!(light.handle(), "Green light");
        assert_eq!(light.current(), "Yellow");
        assert_eq!(light.handle(), "Yellow light");
        assert_eq!(light.current(), "Red");
    }

    #[test]
    fn sessions_repeat_without_drift() {
        let mut light = TrafficLight::new();
        let first = light.run_session();
        let second = light.run_session();
        assert_eq!(first, vec!["Red light", "Green light", "Yellow light"]);
        assert_eq!(first, second);
        assert_eq!(light.current(), "Red");
    }

    #[test]
    fn state_can_be_forced_from_outside() {
        let mut light = TrafficLight::new();
        light.set_state(Box::new(Yellow));
        assert_eq!(light.handle(), "Yellow light");
        assert_eq!(light.current(), "Red");
    }
}
