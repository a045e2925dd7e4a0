//! Presentation contract between the engine and whatever draws it.
//!
//! Entity constructors return pure data; the controller and the collision
//! engine notify the sink as a separate step. That split keeps the entity
//! and collision logic testable with no rendering dependency at all.

/// RGB color triple pushed to the presentation layer.
pub type Rgb = [u8; 3];

/// Receiver for entity visuals.
///
/// The engine registers a handle when an entity is created, pushes every
/// position/size change, and removes the handle when the entity is purged
/// (exactly once). This is the only channel through which the engine's
/// effects become observable outside itself.
pub trait PresentationSink {
    /// Announces a new entity with its initial geometry and color.
    fn register(&mut self, id: u64, x: f32, y: f32, size: f32, color: Rgb);

    /// Pushes a position/size change for a registered entity.
    fn update(&mut self, id: u64, x: f32, y: f32, size: f32);

    /// Drops a registered entity.
    fn remove(&mut self, id: u64);
}

/// A sink that ignores everything, for running the engine headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn register(&mut self, _id: u64, _x: f32, _y: f32, _size: f32, _color: Rgb) {}

    fn update(&mut self, _id: u64, _x: f32, _y: f32, _size: f32) {}

    fn remove(&mut self, _id: u64) {}
}
