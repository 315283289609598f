//! Bridge.
//!
//! Shape abstractions hold an `Rc<dyn Renderer>` and express their
//! operations through renderer primitives. Swapping the renderer at
//! runtime changes only the backend prefix in the output, never the
//! geometry.

use std::rc::Rc;

/// Rendering primitives every backend must provide.
pub trait Renderer {
    fn api(&self) -> &'static str;
    fn render_circle(&self, x: f64, y: f64, radius: f64) -> String;
    fn render_rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> String;
    fn render_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> String;
}

pub struct OpenGl;

impl Renderer for OpenGl {
    fn api(&self) -> &'static str {
        "OpenGL"
    }

    fn render_circle(&self, x: f64, y: f64, radius: f64) -> String {
        format!("[OpenGL] Drawing circle at ({x:.1}, {y:.1}) with radius {radius:.1}")
    }

    fn render_rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> String {
        format!("[OpenGL] Drawing rectangle at ({x:.1}, {y:.1}) size {width:.1}x{height:.1}")
    }

    fn render_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> String {
        format!("[OpenGL] Drawing line from ({x1:.1}, {y1:.1}) to ({x2:.1}, {y2:.1})")
    }
}

pub struct DirectX;

impl Renderer for DirectX {
    fn api(&self) -> &'static str {
        "DirectX"
    }

    fn render_circle(&self, x: f64, y: f64, radius: f64) -> String {
        format!("[DirectX] Drawing circle at ({x:.1}, {y:.1}) with radius {radius:.1}")
    }

    fn render_rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> String {
        format!("[DirectX] Drawing rectangle at ({x:.1}, {y:.1}) size {width:.1}x{height:.1}")
    }

    fn render_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> String {
        format!("[DirectX] Drawing line from ({x1:.1}, {y1:.1}) to ({x2:.1}, {y2:.1})")
    }
}

pub struct Circle {
    renderer: Rc<dyn Renderer>,
    x: f64,
    y: f64,
    radius: f64,
}

impl Circle {
    pub fn new(renderer: Rc<dyn Renderer>, x: f64, y: f64, radius: f64) -> Self {
        Circle { renderer, x, y, radius }
    }

    pub fn set_renderer(&mut self, renderer: Rc<dyn Renderer>) {
        self.renderer = renderer;
    }

    pub fn draw(&self) -> String {
        self.renderer.render_circle(self.x, self.y, self.radius)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> String {
        self.x += dx;
        self.y += dy;
        format!("Circle moved by ({dx:.1}, {dy:.1}) to ({:.1}, {:.1})", self.x, self.y)
    }

    pub fn resize(&mut self, factor: f64) -> String {
        self.radius *= factor;
        format!("Circle resized by factor {factor:.1}, new radius: {:.1}", self.radius)
    }
}

pub struct Rect {
    renderer: Rc<dyn Renderer>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    pub fn new(renderer: Rc<dyn Renderer>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { renderer, x, y, width, height }
    }

    pub fn set_renderer(&mut self, renderer: Rc<dyn Renderer>) {
        self.renderer = renderer;
    }

    pub fn draw(&self) -> String {
        self.renderer.render_rectangle(self.x, self.y, self.width, self.height)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> String {
        self.x += dx;
        self.y += dy;
        format!("Rectangle moved by ({dx:.1}, {dy:.1}) to ({:.1}, {:.1})", self.x, self.y)
    }

    pub fn resize(&mut self, factor: f64) -> String {
        self.width *= factor;
        self.height *= factor;
        format!(
            "Rectangle resized by factor {factor:.1}, new size: {:.1}x{:.1}",
            self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_swap_changes_prefix_only() {
        let opengl: Rc<dyn Renderer> = Rc::new(OpenGl);
        let directx: Rc<dyn Renderer> = Rc::new(DirectX);

        let mut circle = Circle::new(Rc::clone(&opengl), 10.0, 20.0, 5.0);
        let before = circle.draw();
        circle.set_renderer(directx);
        let after = circle.draw();

        assert_eq!(before, "[OpenGL] Drawing circle at (10.0, 20.0) with radius 5.0");
        assert_eq!(after, "[DirectX] Drawing circle at (10.0, 20.0) with radius 5.0");
        // Same geometry either side of the prefix.
        assert_eq!(
            before.trim_start_matches("[OpenGL]"),
            after.trim_start_matches("[DirectX]")
        );
    }

    #[test]
    fn operations_express_through_renderer_primitives() {
        let renderer: Rc<dyn Renderer> = Rc::new(OpenGl);
        let mut rect = Rect::new(renderer, 30.0, 40.0, 15.0, 10.0);

        assert_eq!(rect.translate(5.0, 3.0), "Rectangle moved by (5.0, 3.0) to (35.0, 43.0)");
        assert_eq!(rect.resize(2.0), "Rectangle resized by factor 2.0, new size: 30.0x20.0");
        assert_eq!(
            rect.draw(),
            "[OpenGL] Drawing rectangle at (35.0, 43.0) size 30.0x20.0"
        );
    }
}
