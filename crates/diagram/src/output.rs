use crate::error::{DiagramError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

/// Write the diagram text to the output file, or to stdout when none is given.
pub fn write_output(text: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => fs::write(path, text).map_err(|source| DiagramError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(DiagramError::Stdout),
    }
}

/// Run PlantUML over an already-written diagram file.
///
/// The image lands next to the input file. A nonzero exit from the renderer
/// is fatal for the run.
pub fn render_image(diagram_file: &Path, image_type: &str) -> Result<()> {
    log::info!(
        "Rendering {} as {image_type} via plantuml",
        diagram_file.display()
    );
    run_renderer("plantuml", diagram_file, image_type)
}

fn run_renderer(program: &str, diagram_file: &Path, image_type: &str) -> Result<()> {
    let output_dir = match diagram_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let status = Command::new(program)
        .arg(format!("-t{image_type}"))
        .arg("-output")
        .arg(output_dir)
        .arg(diagram_file)
        .status()
        .map_err(DiagramError::RendererLaunch)?;

    if !status.success() {
        return Err(DiagramError::RendererFailed { status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("diagram.puml");

        write_output("@startuml\n@enduml\n", Some(&path)).expect("write");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "@startuml\n@enduml\n");
    }

    #[test]
    fn write_output_to_unwritable_path_fails() {
        let err = write_output("text", Some(Path::new("/nonexistent/dir/out.puml")));
        assert!(matches!(err, Err(DiagramError::Write { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn missing_renderer_is_a_launch_error() {
        let err = run_renderer("depmap-no-such-renderer", Path::new("out.puml"), "png");
        assert!(matches!(err, Err(DiagramError::RendererLaunch(_))));
    }

    #[cfg(unix)]
    #[test]
    fn failing_renderer_surfaces_exit_status() {
        let err = run_renderer("false", Path::new("out.puml"), "png");
        assert!(matches!(err, Err(DiagramError::RendererFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn successful_renderer_is_ok() {
        run_renderer("true", Path::new("out.puml"), "png").expect("true exits zero");
    }
}
