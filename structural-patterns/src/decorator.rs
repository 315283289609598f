//! Decorator.
//!
//! Beverage decorators each wrap one inner beverage, appending a label to
//! the description and an increment to the cost. Wrapping order is free;
//! every wrap shows up exactly once in both outputs.

pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

pub struct SimpleCoffee;

impl Beverage for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.0
    }
}

macro_rules! decorator {
    ($name:ident, $label:literal, $increment:literal) => {
        pub struct $name {
            inner: Box<dyn Beverage>,
        }

        impl $name {
            pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
                Box::new($name { inner })
            }
        }

        impl Beverage for $name {
            fn description(&self) -> String {
                format!("{}, {}", self.inner.description(), $label)
            }

            fn cost(&self) -> f64 {
                self.inner.cost() + $increment
            }
        }
    };
}

decorator!(Milk, "Milk", 0.5);
decorator!(Sugar, "Sugar", 0.2);
decorator!(Whip, "Whip", 0.7);

/// The transcript line for one configuration.
pub fn receipt(beverage: &dyn Beverage) -> String {
    format!("{}: ${:.2}", beverage.description(), beverage.cost())
}
