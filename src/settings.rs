use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_INPUT: &str = "prompts_for_user.md";
pub const DEFAULT_OUTPUT: &str = "parsed_prompts.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Settings {
    /// Defaults, then `SCENES_INPUT` / `SCENES_OUTPUT`, then explicit overrides (CLI flags).
    pub fn load(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self> {
        Self::build(Environment::with_prefix("SCENES"), input, output)
    }

    fn build(env: Environment, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("input", DEFAULT_INPUT)?
            .set_default("output", DEFAULT_OUTPUT)?
            .add_source(env)
            .set_override_option("input", input.map(path_value))?
            .set_override_option("output", output.map(path_value))?
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

fn path_value(p: PathBuf) -> String {
    p.to_string_lossy().into_owned()
}
