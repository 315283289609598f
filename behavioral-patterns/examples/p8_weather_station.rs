//! Pattern 8: Observer
//! Example: Weather Station Notifying Displays and Alerts
//!
//! Run with: cargo run --example p8_weather_station

use std::rc::Rc;

use behavioral_patterns::observer::{Alert, Display, Observer, WeatherStation};

fn main() {
    let mut station = WeatherStation::new();
    let d1: Rc<dyn Observer> = Display::new("One");
    let d2: Rc<dyn Observer> = Display::new("Two");
    let alert: Rc<dyn Observer> = Alert::new();

    println!("=== Attaching observers ===");
    for observer in [&d1, &d2, &alert] {
        match station.attach(Rc::clone(observer)) {
            Ok(line) => println!("{line}"),
            Err(e) => println!("{e}"),
        }
    }

    println!("\n=== Temperature 25 (alert stays silent) ===");
    for line in station.set_temperature(25) {
        println!("{line}");
    }

    println!("\n=== Temperature 35 ===");
    for line in station.set_temperature(35) {
        println!("{line}");
    }

    println!("\n=== Detach Display One, temperature -5 ===");
    match station.detach(&d1) {
        Ok(line) => println!("{line}"),
        Err(e) => println!("{e}"),
    }
    for line in station.set_temperature(-5) {
        println!("{line}");
    }
}
