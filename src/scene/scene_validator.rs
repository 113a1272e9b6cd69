//! Scene validation
//!
//! Checks a [`Scene`] for problems before any slicing happens: empty
//! scenes, duplicate mesh names, bad shape sizes and malformed raw cells.

use std::collections::HashSet;

use hyperslice_core::MeshDefect;

use super::scene_file::Scene;

/// Validation error found in a scene
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Scene has no meshes
    EmptyScene,
    /// Duplicate mesh name found
    DuplicateName(String),
    /// A shape size parameter is zero, negative or not finite
    InvalidSize {
        mesh: String,
        parameter: &'static str,
        value: f64,
    },
    /// A mesh offset component is not finite
    NonFiniteOffset { mesh: String },
    /// The built mesh would be rejected by the slicer
    InvalidMesh { mesh: String, defect: MeshDefect },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyScene => write!(f, "Scene has no meshes"),
            ValidationError::DuplicateName(name) => {
                write!(f, "Duplicate mesh name: '{}'", name)
            }
            ValidationError::InvalidSize { mesh, parameter, value } => {
                write!(f, "Mesh '{}' has invalid {}: {}", mesh, parameter, value)
            }
            ValidationError::NonFiniteOffset { mesh } => {
                write!(f, "Mesh '{}' has a non-finite offset", mesh)
            }
            ValidationError::InvalidMesh { mesh, defect } => {
                write!(f, "Mesh '{}' is malformed: {}", mesh, defect)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Scene validator that checks for common errors
///
/// # Example
/// ```ignore
/// let errors = SceneValidator::validate(&scene);
/// for error in &errors {
///     log::warn!("Validation error: {}", error);
/// }
/// ```
pub struct SceneValidator;

impl SceneValidator {
    /// Validate a scene, returning all errors found
    ///
    /// Returns an empty vector if no validation errors are detected.
    pub fn validate(scene: &Scene) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if scene.meshes.is_empty() {
            errors.push(ValidationError::EmptyScene);
        }

        let mut seen_names = HashSet::new();
        for mesh in &scene.meshes {
            if let Some(ref name) = mesh.name {
                if !seen_names.insert(name.clone()) {
                    errors.push(ValidationError::DuplicateName(name.clone()));
                }
            }
        }

        for (index, template) in scene.meshes.iter().enumerate() {
            let label = template.label(index);

            for (parameter, value) in template.shape.size_parameters() {
                if !(value.is_finite() && value > 0.0) {
                    errors.push(ValidationError::InvalidSize {
                        mesh: label.clone(),
                        parameter,
                        value,
                    });
                }
            }

            if template.offset.iter().any(|c| !c.is_finite()) {
                errors.push(ValidationError::NonFiniteOffset { mesh: label.clone() });
                continue;
            }

            if let Err(defect) = template.build().validate() {
                errors.push(ValidationError::InvalidMesh { mesh: label, defect });
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(scene: &Scene) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(scene);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MeshTemplate, ShapeTemplate};

    fn make_valid_scene() -> Scene {
        let mut scene = Scene::new("Valid Scene");
        scene.add_mesh(MeshTemplate::new(ShapeTemplate::tesseract(2.0)).with_name("cube"));
        scene
    }

    #[test]
    fn test_valid_scene_returns_no_errors() {
        let errors = SceneValidator::validate(&make_valid_scene());
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
        assert!(SceneValidator::validate_or_error(&make_valid_scene()).is_ok());
    }

    #[test]
    fn test_empty_scene_error() {
        let errors = SceneValidator::validate(&Scene::new("Empty"));
        assert_eq!(errors, vec![ValidationError::EmptyScene]);
    }

    #[test]
    fn test_duplicate_names_detected() {
        let mut scene = make_valid_scene();
        scene.add_mesh(MeshTemplate::new(ShapeTemplate::pentachoron(1.0)).with_name("cube"));

        let errors = SceneValidator::validate(&scene);
        assert!(
            errors.contains(&ValidationError::DuplicateName("cube".to_string())),
            "Expected DuplicateName error, got: {:?}",
            errors
        );
    }

    #[test]
    fn test_invalid_size_detected() {
        let mut scene = Scene::new("Sizes");
        scene.add_mesh(MeshTemplate::new(ShapeTemplate::tetrahedral_prism(1.0, -0.5)));

        let errors = SceneValidator::validate(&scene);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidSize {
                mesh: "#0".to_string(),
                parameter: "w_extent",
                value: -0.5,
            }]
        );
    }

    #[test]
    fn test_malformed_cells_detected() {
        let mut scene = Scene::new("Raw");
        scene.add_mesh(
            MeshTemplate::new(ShapeTemplate::Cells {
                positions: vec![[0.0; 4]; 3],
                cells: vec![0, 1, 2, 3],
            })
            .with_name("broken"),
        );

        let errors = SceneValidator::validate(&scene);
        assert!(matches!(
            &errors[..],
            [ValidationError::InvalidMesh { defect: MeshDefect::IndexOutOfBounds { index: 3, .. }, .. }]
        ));
        assert!(errors[0].to_string().contains("broken"));
    }

    #[test]
    fn test_non_finite_offset_detected() {
        let mut scene = Scene::new("Far");
        scene.add_mesh(
            MeshTemplate::new(ShapeTemplate::tesseract(1.0)).with_offset(f64::INFINITY, 0.0, 0.0, 0.0),
        );
        let errors = SceneValidator::validate(&scene);
        assert_eq!(errors, vec![ValidationError::NonFiniteOffset { mesh: "#0".to_string() }]);
    }
}
