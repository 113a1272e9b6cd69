//! Scene serialization
//!
//! Provides the Scene struct for loading/saving sets of 4D meshes from RON
//! files.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use hyperslice_core::{Mesh4D, Vec4};

use super::shapes::ShapeTemplate;

/// One mesh in a scene: a shape plus where to put it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshTemplate {
    /// Optional name for this mesh (for logging)
    #[serde(default)]
    pub name: Option<String>,
    pub shape: ShapeTemplate,
    /// Translation applied to every vertex [x, y, z, w]
    #[serde(default)]
    pub offset: [f64; 4],
}

impl MeshTemplate {
    /// Create a new mesh template at the origin
    pub fn new(shape: ShapeTemplate) -> Self {
        Self {
            name: None,
            shape,
            offset: [0.0; 4],
        }
    }

    /// Set the name of this template
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the offset of this template
    pub fn with_offset(mut self, x: f64, y: f64, z: f64, w: f64) -> Self {
        self.offset = [x, y, z, w];
        self
    }

    /// Build the translated mesh
    pub fn build(&self) -> Mesh4D {
        let mesh = self.shape.create_mesh();
        if self.offset == [0.0; 4] {
            mesh
        } else {
            mesh.translated(Vec4::from(self.offset))
        }
    }

    /// Name for log output, falling back to the position in the scene
    pub fn label(&self, index: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("#{}", index))
    }
}

/// A serializable scene containing mesh templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Mesh templates in this scene
    #[serde(default)]
    pub meshes: Vec<MeshTemplate>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let scene = ron::from_str(&contents)?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add a mesh template to this scene
    pub fn add_mesh(&mut self, mesh: MeshTemplate) {
        self.meshes.push(mesh);
    }

    /// Build every mesh, in scene order
    pub fn build_meshes(&self) -> Vec<Mesh4D> {
        self.meshes.iter().map(MeshTemplate::build).collect()
    }

    /// Smallest and largest w over all built meshes
    pub fn w_range(&self) -> Option<(f64, f64)> {
        self.build_meshes()
            .iter()
            .filter_map(Mesh4D::w_range)
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new("Sample");
        scene.add_mesh(MeshTemplate::new(ShapeTemplate::tesseract(2.0)).with_name("cube"));
        scene.add_mesh(
            MeshTemplate::new(ShapeTemplate::pentachoron(1.0)).with_offset(3.0, 0.0, 0.0, 0.5),
        );
        scene
    }

    #[test]
    fn test_build_meshes_applies_offset() {
        let meshes = sample_scene().build_meshes();
        assert_eq!(meshes.len(), 2);
        assert_eq!(meshes[0].cell_count(), 40);

        let untranslated = ShapeTemplate::pentachoron(1.0).create_mesh();
        let moved = meshes[1].positions[4] - untranslated.positions[4];
        assert!((moved - Vec4::new(3.0, 0.0, 0.0, 0.5)).length() < 1e-12);
    }

    #[test]
    fn test_scene_round_trip_through_ron() {
        let scene = sample_scene();
        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        let text = ron::ser::to_string_pretty(&scene, pretty).unwrap();
        let back: Scene = ron::from_str(&text).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let text = r#"(
            name: "Minimal",
            meshes: [
                (shape: (type: "Hexadecachoron", radius: 2.0)),
            ],
        )"#;
        let scene: Scene = ron::from_str(text).unwrap();
        assert_eq!(scene.meshes[0].offset, [0.0; 4]);
        assert_eq!(scene.meshes[0].name, None);
        assert_eq!(scene.meshes[0].label(0), "#0");
    }

    #[test]
    fn test_w_range() {
        let scene = sample_scene();
        let (lo, hi) = scene.w_range().unwrap();
        assert_eq!(lo, -1.0);
        // Pentachoron apex sits at 4/√5 before the 0.5 offset
        assert!((hi - (4.0 / 5f64.sqrt() + 0.5)).abs() < 1e-12);
        assert_eq!(Scene::new("Empty").w_range(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Scene::load("does/not/exist.ron");
        assert!(matches!(result, Err(SceneLoadError::Io(_))));
    }
}
