//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling scenes in code.

use hyperslice_core::Vec4;

use super::scene_file::{MeshTemplate, Scene};
use super::shapes::ShapeTemplate;

/// Builder for constructing scenes of 4D meshes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new("Demo")
///     .add_tesseract(Vec4::ZERO, 2.0, "cube")
///     .add_pentachoron(Vec4::new(3.0, 0.0, 0.0, 0.0), 1.0, "simplex")
///     .build();
/// ```
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: Scene::new(name),
        }
    }

    /// Create a scene builder with room for `capacity` meshes
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        let mut scene = Scene::new(name);
        scene.meshes.reserve(capacity);
        Self { scene }
    }

    /// Add any shape at the given offset
    pub fn add_shape(mut self, shape: ShapeTemplate, offset: Vec4, name: &str) -> Self {
        self.scene.add_mesh(
            MeshTemplate::new(shape)
                .with_name(name)
                .with_offset(offset.x, offset.y, offset.z, offset.w),
        );
        self
    }

    /// Add a tesseract (4D hypercube) at the given offset
    pub fn add_tesseract(self, offset: Vec4, size: f64, name: &str) -> Self {
        self.add_shape(ShapeTemplate::tesseract(size), offset, name)
    }

    /// Add a regular 5-cell at the given offset
    pub fn add_pentachoron(self, offset: Vec4, scale: f64, name: &str) -> Self {
        self.add_shape(ShapeTemplate::pentachoron(scale), offset, name)
    }

    /// Add a 16-cell at the given offset
    pub fn add_hexadecachoron(self, offset: Vec4, radius: f64, name: &str) -> Self {
        self.add_shape(ShapeTemplate::hexadecachoron(radius), offset, name)
    }

    /// Add a tetrahedral prism at the given offset
    pub fn add_tetrahedral_prism(self, offset: Vec4, scale: f64, w_extent: f64, name: &str) -> Self {
        self.add_shape(ShapeTemplate::tetrahedral_prism(scale, w_extent), offset, name)
    }

    /// Add a prepared mesh template
    ///
    /// For meshes that don't fit the standard patterns, such as raw cells.
    pub fn add_mesh(mut self, mesh: MeshTemplate) -> Self {
        self.scene.add_mesh(mesh);
        self
    }

    /// Number of meshes added so far
    pub fn mesh_count(&self) -> usize {
        self.scene.meshes.len()
    }

    /// Build the scene
    pub fn build(self) -> Scene {
        self.scene
    }
}
