use std::collections::HashMap;

use macroquad::prelude::*;

use petridish::simulation::sink::{PresentationSink, Rgb};

/// One drawable entity, as last reported by the engine.
struct Sprite {
    x: f32,
    y: f32,
    size: f32,
    color: Rgb,
}

/// Presentation sink that retains sprites and draws them with macroquad.
pub struct ScreenSink {
    sprites: HashMap<u64, Sprite>,
}

impl ScreenSink {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Draws every registered entity as a filled circle.
    pub fn draw(&self) {
        for sprite in self.sprites.values() {
            let radius = sprite.size / 2.0;
            draw_circle(
                sprite.x + radius,
                sprite.y + radius,
                radius,
                Color::from_rgba(sprite.color[0], sprite.color[1], sprite.color[2], 255),
            );
        }
    }
}

impl PresentationSink for ScreenSink {
    fn register(&mut self, id: u64, x: f32, y: f32, size: f32, color: Rgb) {
        self.sprites.insert(id, Sprite { x, y, size, color });
    }

    fn update(&mut self, id: u64, x: f32, y: f32, size: f32) {
        if let Some(sprite) = self.sprites.get_mut(&id) {
            sprite.x = x;
            sprite.y = y;
            sprite.size = size;
        }
    }

    fn remove(&mut self, id: u64) {
        self.sprites.remove(&id);
    }
}
