use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneStatus {
    Draft,
}

/// One extracted scene, in the shape the production board consumes.
///
/// Only `visual_prompt` carries content at extraction time; the other text
/// fields are filled in by later stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,
    pub script: String,
    pub visual_prompt: String,
    pub image: String,
    pub video: String,
    pub status: SceneStatus,
}

impl Scene {
    /// `index` is the 1-based position among matched scenes, not the number in the heading.
    pub fn draft(index: usize, prompt: &str) -> Self {
        Scene {
            id: scene_id(index),
            script: String::new(),
            visual_prompt: prompt.trim().to_string(),
            image: String::new(),
            video: String::new(),
            status: SceneStatus::Draft,
        }
    }
}

pub fn scene_id(index: usize) -> String {
    format!("scene_{:03}", index)
}
