//! Prototype.
//!
//! Shapes clone themselves into deep copies; a registry hands out fresh
//! clones by name so callers never touch the stored prototypes.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PrototypeError {
    #[error("no prototype registered under '{0}'")]
    UnknownPrototype(String),
}

/// Cloneable shape capability. `clone_box` produces a deep copy with
/// distinct identity and equal attributes.
pub trait ShapePrototype {
    fn clone_box(&self) -> Box<dyn ShapePrototype>;
    fn draw(&self) -> String;
    fn move_to(&mut self, x: i32, y: i32);
    fn set_color(&mut self, color: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectanglePrototype {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: String,
}

impl RectanglePrototype {
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: &str) -> Self {
        RectanglePrototype {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        }
    }
}

impl ShapePrototype for RectanglePrototype {
    fn clone_box(&self) -> Box<dyn ShapePrototype> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!(
            "Drawing Rectangle at ({},{}) with size {}x{}, color: {}",
            self.x, self.y, self.width, self.height, self.color
        )
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrototype {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub color: String,
}

impl CirclePrototype {
    pub fn new(x: i32, y: i32, radius: i32, color: &str) -> Self {
        CirclePrototype {
            x,
            y,
            radius,
            color: color.to_string(),
        }
    }
}

impl ShapePrototype for CirclePrototype {
    fn clone_box(&self) -> Box<dyn ShapePrototype> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!(
            "Drawing Circle at ({},{}) with radius {}, color: {}",
            self.x, self.y, self.radius, self.color
        )
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

/// Name-keyed prototype store. Lookups return clones, never the stored
/// prototype itself.
#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Box<dyn ShapePrototype>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, prototype: Box<dyn ShapePrototype>) -> String {
        self.prototypes.insert(name.to_string(), prototype);
        format!("Registered prototype: {name}")
    }

    pub fn get(&self, name: &str) -> Result<Box<dyn ShapePrototype>, PrototypeError> {
        self.prototypes
            .get(name)
            .map(|p| p.clone_box())
            .ok_or_else(|| PrototypeError::UnknownPrototype(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_equal_then_independent() {
        let original = RectanglePrototype::new(0, 0, 100, 50, "Red");
        let mut clone = original.clone();
        assert_eq!(clone, original);

        clone.move_to(10, 20);
        clone.set_color("Green");
        assert_eq!(original.x, 0);
        assert_eq!(original.color, "Red");
        assert_eq!(clone.x, 10);
        assert_eq!(clone.color, "Green");
    }

    #[test]
    fn registry_returns_fresh_clones() {
        let mut registry = PrototypeRegistry::new();
        registry.register("BlueCircle", Box::new(CirclePrototype::new(0, 0, 25, "Blue")));

        let mut first = registry.get("BlueCircle").unwrap();
        first.move_to(50, 75);

        // A second lookup sees the untouched prototype.
        let second = registry.get("BlueCircle").unwrap();
        assert_eq!(second.draw(), "Drawing Circle at (0,0) with radius 25, color: Blue");
        assert_eq!(first.draw(), "Drawing Circle at (50,75) with radius 25, color: Blue");
    }

    #[test]
    fn unknown_prototype_is_an_error() {
        let registry = PrototypeRegistry::new();
        assert_eq!(
            registry.get("missing").err(),
            Some(PrototypeError::UnknownPrototype("missing".to_string()))
        );
    }
}
