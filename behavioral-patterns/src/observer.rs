//! Observer.
//!
//! A weather station notifies attached observers in attach order.
//! Observers may stay silent on an update; the station only records
//! lines from those that speak. Detach compares observer identity with
//! `Rc::ptr_eq`, so two observers with the same name stay distinct.

use std::rc::Rc;

use thiserror::Error;

const MAX_OBSERVERS: usize = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ObserverError {
    #[error("observer capacity reached ({0})")]
    Full(usize),
    #[error("observer is not attached")]
    NotAttached,
}

pub trait Observer {
    fn name(&self) -> &str;

    /// `None` means the observer has nothing to say about this reading.
    fn update(&self, temperature: i32) -> Option<String>;
}

pub struct Display {
    name: String,
}

impl Display {
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(Display {
            name: name.to_string(),
        })
    }
}

impl Observer for Display {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, temperature: i32) -> Option<String> {
        Some(format!(
            "Display {}: Temperature changed to {temperature}°C",
            self.name
        ))
    }
}

/// Speaks only on extremes; normal readings pass without a line.
pub struct Alert;

impl Alert {
    pub fn new() -> Rc<Self> {
        Rc::new(Alert)
    }
}

impl Observer for Alert {
    fn name(&self) -> &str {
        "Alert"
    }

    fn update(&self, temperature: i32) -> Option<String> {
        if temperature > 30 {
            Some(format!("Alert: high temperature warning at {temperature}°C"))
        } else if temperature < 0 {
            Some(format!("Alert: freezing warning at {temperature}°C"))
        } else {
            None
        }
    }
}

pub struct WeatherStation {
    observers: Vec<Rc<dyn Observer>>,
    temperature: i32,
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherStation {
    pub fn new() -> Self {
        WeatherStation {
            observers: Vec::new(),
            temperature: 0,
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) -> Result<String, ObserverError> {
        if self.observers.len() == MAX_OBSERVERS {
            return Err(ObserverError::Full(MAX_OBSERVERS));
        }
        let line = format!("Observer {} attached", observer.name());
        self.observers.push(observer);
        Ok(line)
    }

    /// Identity-based, not name-based.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) -> Result<String, ObserverError> {
        let index = self
            .observers
            .iter()
            .position(|o| Rc::ptr_eq(o, observer))
            .ok_or(ObserverError::NotAttached)?;
        let removed = self.observers.remove(index);
        Ok(format!("Observer {} detached", removed.name()))
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Silent observers contribute no line; the notification header still
    /// counts them.
    pub fn set_temperature(&mut self, temperature: i32) -> Vec<String> {
        self.temperature = temperature;
        let mut lines = vec![format!(
            "Notifying {} observers about state change to {temperature}",
            self.observers.len()
        )];
        for observer in &self.observers {
            if let Some(line) = observer.update(temperature) {
                lines.push(line);
            }
        }
        lines
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observers_are_notified_in_attach_order() {
        let mut station = WeatherStation::new();
        let d1: Rc<dyn Observer> = Display::new("One");
        let d2: Rc<dyn Observer> = Display::new("Two");
        let alert: Rc<dyn Observer> = Alert::new();
        station.attach(Rc::clone(&d1)).unwrap();
        station.attach(Rc::clone(&d2)).unwrap();
        station.attach(Rc::clone(&alert)).unwrap();

        let lines = station.set_temperature(25);
        assert_eq!(
            lines,
            vec![
                "Notifying 3 observers about state change to 25",
                "Display One: Temperature changed to 25°C",
                "Display Two: Temperature changed to 25°C",
            ]
        );
    }

    #[test]
    fn alert_stays_silent_in_the_normal_range() {
        let mut station = WeatherStation::new();
        let alert: Rc<dyn Observer> = Alert::new();
        station.attach(alert).unwrap();

        for temperature in [0, 15, 25, 30] {
            let lines = station.set_temperature(temperature);
            assert!(
                !lines.iter().any(|l| l.starts_with("Alert")),
                "unexpected alert line at {temperature}°C: {lines:?}"
            );
        }
    }

    #[test]
    fn alert_flags_extremes() {
        let mut station = WeatherStation::new();
        let alert: Rc<dyn Observer> = Alert::new();
        station.attach(alert).unwrap();

        assert_eq!(
            station.set_temperature(35)[1],
            "Alert: high temperature warning at 35°C"
        );
        assert_eq!(
            station.set_temperature(-5)[1],
            "Alert: freezing warning at -5°C"
        );
    }

    #[test]
    fn attach_and_detach_report_the_observer_by_name() {
        let mut station = WeatherStation::new();
        let d1: Rc<dyn Observer> = Display::new("One");
        assert_eq!(
            station.attach(Rc::clone(&d1)).unwrap(),
            "Observer One attached"
        );
        assert_eq!(station.detach(&d1).unwrap(), "Observer One detached");
        assert_eq!(station.observer_count(), 0);
    }

    #[test]
    fn detach_is_by_identity() {
        let mut station = WeatherStation::new();
        let a: Rc<dyn Observer> = Display::new("Twin");
        let b: Rc<dyn Observer> = Display::new("Twin");
        station.attach(Rc::clone(&a)).unwrap();
        station.attach(Rc::clone(&b)).unwrap();

        station.detach(&a).unwrap();
        assert_eq!(station.observer_count(), 1);
        // the survivor is b, not a
        assert!(Rc::ptr_eq(&station.observers[0], &b));
        assert_eq!(station.detach(&a).err(), Some(ObserverError::NotAttached));
    }

    #[test]
    fn capacity_is_bounded() {
        let mut station = WeatherStation::new();
        for i in 0..10 {
            let d: Rc<dyn Observer> = Display::new(&format!("D{i}"));
            station.attach(d).unwrap();
        }
        let extra: Rc<dyn Observer> = Display::new("Overflow");
        assert_eq!(station.attach(extra).err(), Some(ObserverError::Full(10)));
    }

    #[test]
    fn detached_observer_no_longer_hears_updates() {
        let mut station = WeatherStation::new();
        let d1: Rc<dyn Observer> = Display::new("One");
        let d2: Rc<dyn Observer> = Display::new("Two");
        station.attach(Rc::clone(&d1)).unwrap();
        station.attach(Rc::clone(&d2)).unwrap();
        station.detach(&d1).unwrap();

        let lines = station.set_temperature(10);
        assert_eq!(
            lines,
            vec![
                "Notifying 1 observers about state change to 10",
                "Display Two: Temperature changed to 10°C",
            ]
        );
    }
}
