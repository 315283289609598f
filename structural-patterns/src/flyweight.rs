//! Flyweight.
//!
//! Intrinsic particle state (sprite data, texture name) is interned by the
//! factory and shared via `Rc`; extrinsic state (position, velocity, size,
//! color) lives in each [`Particle`]. Identical type labels yield
//! referentially identical intrinsics.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FlyweightError {
    #[error("no particle kind registered for '{0}'")]
    UnknownKind(String),
}

/// Shared intrinsic state.
#[derive(Debug, PartialEq, Eq)]
pub struct ParticleKind {
    pub label: String,
    pub sprite_data: String,
    pub texture: String,
}

/// Interning factory: one [`ParticleKind`] per distinct label.
#[derive(Default)]
pub struct ParticleFactory {
    kinds: HashMap<String, Rc<ParticleKind>>,
}

impl ParticleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared intrinsic for `label`, creating it on first use.
    /// The returned line is the factory's transcript output.
    pub fn get(&mut self, label: &str) -> Result<(Rc<ParticleKind>, String), FlyweightError> {
        if let Some(kind) = self.kinds.get(label) {
            return Ok((
                Rc::clone(kind),
                format!("Reusing existing flyweight for type: {label}"),
            ));
        }

        let kind = match label {
            "bullet" | "missile" => Rc::new(ParticleKind {
                label: label.to_string(),
                sprite_data: format!("{label}_sprite_data"),
                texture: format!("{label}.png"),
            }),
            other => return Err(FlyweightError::UnknownKind(other.to_string())),
        };

        self.kinds.insert(label.to_string(), Rc::clone(&kind));
        Ok((kind, format!("Creating new flyweight for type: {label}")))
    }

    /// Number of distinct intrinsics, independent of total requests.
    pub fn kind_count(&self) -> usize {
        self.kinds.len()
    }
}

/// Per-instance extrinsic state plus a handle to the shared intrinsic.
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub size: f32,
    pub color: String,
    kind: Rc<ParticleKind>,
}

impl Particle {
    pub fn kind(&self) -> &Rc<ParticleKind> {
        &self.kind
    }

    pub fn update(&mut self, delta_time: f32) {
        self.x += self.velocity_x * delta_time;
        self.y += self.velocity_y * delta_time;
    }

    pub fn render(&self) -> String {
        format!(
            "Rendering {} at ({:.1}, {:.1}) size {:.1} color {} using texture '{}'",
            self.kind.label, self.x, self.y, self.size, self.color, self.kind.texture
        )
    }
}

/// Owns the particles and the interning factory.
#[derive(Default)]
pub struct World {
    factory: ParticleFactory,
    particles: Vec<Particle>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        label: &str,
        x: f32,
        y: f32,
        velocity_x: f32,
        velocity_y: f32,
        size: f32,
        color: &str,
    ) -> Result<String, FlyweightError> {
        let (kind, line) = self.factory.get(label)?;
        self.particles.push(Particle {
            x,
            y,
            velocity_x,
            velocity_y,
            size,
            color: color.to_string(),
            kind,
        });
        Ok(line)
    }

    pub fn update(&mut self, delta_time: f32) {
        for particle in &mut self.particles {
            particle.update(delta_time);
        }
    }

    pub fn render(&self) -> Vec<String> {
        self.particles
            .iter()
            .enumerate()
            .map(|(i, p)| format!("Particle {}: {}", i + 1, p.render()))
            .collect()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn kind_count(&self) -> usize {
        self.factory.kind_count()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_keys_share_one_intrinsic() {
        let mut world = World::new();
        for label in ["bullet", "bullet", "bullet", "missile", "missile", "bullet"] {
            world.spawn(label, 0.0, 0.0, 1.0, 0.0, 1.0, "white").unwrap();
        }

        assert_eq!(world.kind_count(), 2);
        assert_eq!(world.particle_count(), 6);

        let bullets: Vec<_> = world
            .particles()
            .iter()
            .filter(|p| p.kind().label == "bullet")
            .collect();
        for pair in bullets.windows(2) {
            assert!(Rc::ptr_eq(pair[0].kind(), pair[1].kind()));
        }
    }

    #[test]
    fn factory_lines_distinguish_create_from_reuse() {
        let mut factory = ParticleFactory::new();
        let (_, first) = factory.get("bullet").unwrap();
        let (_, second) = factory.get("bullet").unwrap();
        assert_eq!(first, "Creating new flyweight for type: bullet");
        assert_eq!(second, "Reusing existing flyweight for type: bullet");
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let mut factory = ParticleFactory::new();
        assert_eq!(
            factory.get("comet").err(),
            Some(FlyweightError::UnknownKind("comet".to_string()))
        );
    }

    #[test]
    fn update_moves_only_extrinsic_state() {
        let mut world = World::new();
        world.spawn("missile", 50.0, 60.0, 3.0, 2.0, 2.0, "white").unwrap();
        world.update(0.5);

        let particle = &world.particles()[0];
        assert!((particle.x - 51.5).abs() < 1e-6);
        assert!((particle.y - 61.0).abs() < 1e-6);
        assert_eq!(particle.kind().texture, "missile.png");
    }
}
