use geo::Rect;
use serde::{Deserialize, Serialize};

/// Simulation parameters that control the ecosystem.
///
/// Every field may change at runtime; the engine reads them fresh each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Simulation window width in pixels.
    pub box_width: f32,
    /// Simulation window height in pixels.
    pub box_height: f32,
    /// Prey dots created on start/restart.
    pub initial_dots: usize,
    /// Food boxes created on start/restart.
    pub initial_food: usize,
    /// Every Nth eligible prey collision emerges a predator instead of a
    /// litter. Coerced to at least 1 before use.
    pub predator_rate: u64,
    /// Every Nth eligible predator clash escalates into a fight. Coerced to
    /// at least 1 before use.
    pub fight_rate: u64,
    /// Cage each new predator into a random sub-rectangle of the window.
    pub enable_habitats: bool,
    /// Allow a hunter to spawn when predators overrun the population.
    pub enable_hunters: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            box_width: 1280.0,
            box_height: 720.0,
            initial_dots: 20,
            initial_food: 12,
            predator_rate: 25,
            fight_rate: 3,
            enable_habitats: true,
            enable_hunters: true,
        }
    }
}

impl Params {
    /// The full-window bounds rectangle.
    pub fn window(&self) -> Rect<f32> {
        Rect::new((0.0, 0.0), (self.box_width, self.box_height))
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}
