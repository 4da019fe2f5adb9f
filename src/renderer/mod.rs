//! Rendering module
//!
//! The simulation never draws. Each frame a `Snapshot` is tessellated into a
//! `Scene` (triangles plus HUD labels) and handed to a backend.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Anchor, Scene, TextLabel, TextSize, build_scene};
pub use vertex::Vertex;

use crate::sim::Snapshot;

/// A drawing backend
pub trait Renderer {
    /// Draw one frame from a read-only view of the game
    fn render(&mut self, snapshot: &Snapshot);
}

/// Backend with no window: builds every frame and keeps the staged bytes
///
/// Used by the headless runner and by tests.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    /// Frames drawn so far
    pub frames: u64,
    /// Vertex data as it would be uploaded to the GPU
    pub vertex_bytes: Vec<u8>,
    pub vertex_count: u32,
    last_scene: Option<Scene>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently built frame
    pub fn last_scene(&self) -> Option<&Scene> {
        self.last_scene.as_ref()
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        let scene = build_scene(snapshot);

        self.vertex_bytes.clear();
        self.vertex_bytes
            .extend_from_slice(vertex::as_bytes(&scene.vertices));
        self.vertex_count = scene.vertices.len() as u32;
        self.frames += 1;

        log::trace!(
            "frame {}: {} vertices, {} labels",
            self.frames,
            self.vertex_count,
            scene.labels.len()
        );
        self.last_scene = Some(scene);
    }
}
