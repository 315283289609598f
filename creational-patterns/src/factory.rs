//! Factory and Factory Method.
//!
//! A `create_shape` function dispatches on [`ShapeKind`] and validates
//! dimensions before constructing. The [`ShapeFactory`] registry variant
//! maps a name to a creator closure so new shape types can be registered
//! at runtime.

use std::collections::HashMap;
use std::f64::consts::PI;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("unknown shape type '{0}'")]
    UnknownType(String),
    #[error("invalid parameter for {shape}: {reason}")]
    InvalidParam {
        shape: &'static str,
        reason: String,
    },
}

/// The capability every concrete shape must support.
pub trait Shape {
    fn draw(&self) -> String;
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
}

pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if radius <= 0.0 {
            return Err(ShapeError::InvalidParam {
                shape: "Circle",
                reason: format!("radius must be positive, got {radius}"),
            });
        }
        Ok(Circle { radius })
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("Drawing Circle with radius {:.2}", self.radius)
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ShapeError::InvalidParam {
                shape: "Rectangle",
                reason: format!("dimensions must be positive, got {width}x{height}"),
            });
        }
        Ok(Rectangle { width, height })
    }
}

impl Shape for Rectangle {
    fn draw(&self) -> String {
        format!("Drawing Rectangle {:.2}x{:.2}", self.width, self.height)
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Result<Self, ShapeError> {
        if base <= 0.0 || height <= 0.0 {
            return Err(ShapeError::InvalidParam {
                shape: "Triangle",
                reason: format!("dimensions must be positive, got base {base}, height {height}"),
            });
        }
        Ok(Triangle { base, height })
    }
}

impl Shape for Triangle {
    fn draw(&self) -> String {
        format!("Drawing Triangle base:{:.2} height:{:.2}", self.base, self.height)
    }

    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

/// Factory method over the closed set of built-in shapes.
///
/// `param2` is ignored for circles.
pub fn create_shape(kind: ShapeKind, param1: f64, param2: f64) -> Result<Box<dyn Shape>, ShapeError> {
    match kind {
        ShapeKind::Circle => Ok(Box::new(Circle::new(param1)?)),
        ShapeKind::Rectangle => Ok(Box::new(Rectangle::new(param1, param2)?)),
        ShapeKind::Triangle => Ok(Box::new(Triangle::new(param1, param2)?)),
    }
}

type Creator = Box<dyn Fn(f64, f64) -> Result<Box<dyn Shape>, ShapeError>>;

/// Registry variant: creators are registered by name at runtime.
#[derive(Default)]
pub struct ShapeFactory {
    creators: HashMap<String, Creator>,
}

impl ShapeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory pre-loaded with the three built-in shapes.
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();
        factory.register("circle", |p1, _| Ok(Box::new(Circle::new(p1)?) as Box<dyn Shape>));
        factory.register("rectangle", |p1, p2| {
            Ok(Box::new(Rectangle::new(p1, p2)?) as Box<dyn Shape>)
        });
        factory.register("triangle", |p1, p2| {
            Ok(Box::new(Triangle::new(p1, p2)?) as Box<dyn Shape>)
        });
        factory
    }

    pub fn register<F>(&mut self, name: &str, creator: F)
    where
        F: Fn(f64, f64) -> Result<Box<dyn Shape>, ShapeError> + 'static,
    {
        self.creators.insert(name.to_string(), Box::new(creator));
    }

    pub fn create(&self, name: &str, param1: f64, param2: f64) -> Result<Box<dyn Shape>, ShapeError> {
        let creator = self
            .creators
            .get(name)
            .ok_or_else(|| ShapeError::UnknownType(name.to_string()))?;
        creator(param1, param2)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }
}
