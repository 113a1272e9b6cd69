//! Scene files and scene construction
//!
//! A scene is a named list of 4D meshes, stored as RON or assembled in code
//! with [`SceneBuilder`].

mod scene_builder;
mod scene_file;
mod scene_validator;
mod shapes;

pub use scene_builder::SceneBuilder;
pub use scene_file::{MeshTemplate, Scene, SceneLoadError, SceneSaveError};
pub use scene_validator::{SceneValidator, ValidationError};
pub use shapes::ShapeTemplate;
