//! # Output Module
//!
//! Turns the optional output name from the command line into a PNG path and
//! the scene to render, and encodes finished frames.
//!
//! ## Naming
//!
//! - no name: the reference scene, written to `reference.png`
//! - `reference`: the same
//! - any other name: an empty scene (solid black), written to `<name>.png`
//!
//! Names are limited to [`MAX_NAME_LEN`] bytes so that `<name>.png` plus a
//! terminator fits a 50-byte name buffer. Longer and empty names are rejected.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use log::{info, warn};

use crate::error::{Buffer, RenderError};
use crate::scene::SceneKind;

/// Name that selects the reference scene.
pub const REFERENCE_NAME: &str = "reference";

/// Extension appended to every output name.
pub const EXTENSION: &str = ".png";

/// Longest accepted output name, in bytes.
pub const MAX_NAME_LEN: usize = 45;

/// Where a render goes and what it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// PNG file to write.
    pub path: PathBuf,
    /// Scene selected by the name.
    pub scene: SceneKind,
}

/// Resolve the optional command-line name into an output target.
pub fn resolve_output(name: Option<&str>) -> Result<OutputTarget, RenderError> {
    let Some(name) = name else {
        info!("No output name given, using {}{}", REFERENCE_NAME, EXTENSION);
        return Ok(OutputTarget {
            path: file_name(REFERENCE_NAME)?.into(),
            scene: SceneKind::Reference,
        });
    };

    validate_name(name)?;

    let scene = if name == REFERENCE_NAME {
        SceneKind::Reference
    } else {
        warn!(
            "Only `{}` selects the reference scene; `{}` renders an empty scene",
            REFERENCE_NAME, name
        );
        SceneKind::Empty
    };

    Ok(OutputTarget {
        path: file_name(name)?.into(),
        scene,
    })
}

fn validate_name(name: &str) -> Result<(), RenderError> {
    let invalid = |reason: String| RenderError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(invalid(format!(
            "name is {} bytes long, at most {} are allowed",
            name.len(),
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// `<name>.png`, reporting allocation failure instead of aborting.
fn file_name(name: &str) -> Result<String, RenderError> {
    let bytes = name.len() + EXTENSION.len();
    let mut file_name = String::new();
    file_name
        .try_reserve_exact(bytes)
        .map_err(|_| RenderError::Allocation {
            buffer: Buffer::Filename,
            bytes,
        })?;
    file_name.push_str(name);
    file_name.push_str(EXTENSION);
    Ok(file_name)
}

/// Save an RGB frame as PNG.
pub fn save_image_as_png(image: &RgbImage, output_path: &Path) -> Result<(), RenderError> {
    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| RenderError::Save {
            path: output_path.to_path_buf(),
            source,
        })?;

    info!("Image saved as {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_name_selects_reference() {
        let target = resolve_output(None).expect("default target");
        assert_eq!(target.path, PathBuf::from("reference.png"));
        assert_eq!(target.scene, SceneKind::Reference);
    }

    #[test]
    fn test_reference_name_selects_reference() {
        let target = resolve_output(Some("reference")).expect("reference target");
        assert_eq!(target.path, PathBuf::from("reference.png"));
        assert_eq!(target.scene, SceneKind::Reference);
    }

    #[test]
    fn test_other_names_render_empty_scene() {
        for name in ["scene1", "reference2", "Reference", "refer"] {
            let target = resolve_output(Some(name)).expect("valid name");
            assert_eq!(target.path, PathBuf::from(format!("{name}.png")));
            assert_eq!(target.scene, SceneKind::Empty, "{name}");
        }
    }

    #[test]
    fn test_name_length_limit() {
        let longest = "a".repeat(MAX_NAME_LEN);
        assert!(resolve_output(Some(&longest)).is_ok());

        let too_long = "a".repeat(MAX_NAME_LEN + 1);
        let err = resolve_output(Some(&too_long)).expect_err("too long");
        assert!(matches!(err, RenderError::InvalidName { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            resolve_output(Some("")),
            Err(RenderError::InvalidName { .. })
        ));
    }
}
