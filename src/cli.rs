//! Command-line interface

use std::path::PathBuf;

/// Interactive 3D/4D wireframe visualizer.
///
/// Rotation: W/S, A/D, Q/E (and U/J, I/K, O/L for the 4D-only planes).
/// Hold Shift to translate instead. P toggles perspective, R resets,
/// F toggles fullscreen, Escape quits.
#[derive(Debug, clap::Parser)]
#[command(name = "wire4d", version)]
pub struct Cli {
    /// Run fullscreen at the detected display resolution
    #[arg(short = 'f', long)]
    pub fullscreen: bool,

    /// Built-in shape to display
    #[arg(long, value_enum, default_value = "cube", conflicts_with = "mesh")]
    pub shape: ShapeArg,

    /// Display a 3D mesh loaded from an STL file instead of a built-in shape
    #[arg(long, value_name = "PATH")]
    pub mesh: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ShapeArg {
    /// 3D cube (8 points, 12 edges)
    Cube,
    /// 4D hypercube (16 points, 32 edges)
    Tesseract,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wire4d"]);
        assert!(!cli.fullscreen);
        assert_eq!(cli.shape, ShapeArg::Cube);
        assert!(cli.mesh.is_none());
    }

    #[test]
    fn test_fullscreen_short_flag() {
        let cli = Cli::parse_from(["wire4d", "-f"]);
        assert!(cli.fullscreen);
    }

    #[test]
    fn test_shape_selection() {
        let cli = Cli::parse_from(["wire4d", "--shape", "tesseract"]);
        assert_eq!(cli.shape, ShapeArg::Tesseract);
    }

    #[test]
    fn test_mesh_conflicts_with_shape() {
        let result = Cli::try_parse_from(["wire4d", "--shape", "cube", "--mesh", "part.stl"]);
        assert!(result.is_err());
    }
}
