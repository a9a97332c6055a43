//! Scene prompt extraction: storyboard markdown in, draft scene records out.

pub mod error;
pub mod parser;
pub mod scene;
pub mod settings;
pub mod store;

use tracing::warn;

pub use error::{Error, Result};
pub use parser::{extract_scenes, scan, Extraction, SkippedHeading};
pub use scene::{Scene, SceneStatus};

use settings::Settings;

/// Read the input, extract scenes, write them out.
///
/// The output file is only touched once the input has been read and scanned.
pub fn run(settings: &Settings) -> Result<Extraction> {
    let markdown = store::read_document(&settings.input)?;
    let extraction = scan(&markdown);
    for heading in &extraction.skipped {
        warn!(
            line = heading.line,
            scene = %heading.number,
            "scene heading has no Filename/Prompt block, skipped"
        );
    }

    store::write_scenes(&settings.output, &extraction.scenes)?;
    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_input_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            input: dir.path().join("absent.md"),
            output: dir.path().join("parsed_prompts.json"),
        };
        let err = run(&settings).unwrap_err();
        assert!(matches!(err, Error::InputUnavailable { .. }));
        assert!(!settings.output.exists());
    }

    #[test]
    fn missing_input_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("parsed_prompts.json");
        fs::write(&output, "[]").unwrap();
        let settings = Settings {
            input: dir.path().join("absent.md"),
            output: output.clone(),
        };
        assert!(run(&settings).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
    }

    #[test]
    fn fixture_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            input: PathBuf::from("tests/fixtures/prompts_for_user.md"),
            output: dir.path().join("parsed_prompts.json"),
        };
        let extraction = run(&settings).unwrap();
        assert_eq!(extraction.scenes.len(), 4);
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(store::load_scenes(&settings.output).unwrap(), extraction.scenes);
    }
}
