use std::sync::LazyLock;

use regex::Regex;

use crate::scene::Scene;

// Everything up to and including the block-quote marker that opens the prompt.
static SCENE_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"## Scene \d+\s+\*\*Filename:\*\*\s+`[^`]+`\s+\*\*(?:Prompt|Visual Prompts?):\*\*\s*\n>",
    )
    .unwrap()
});

/// A blank line followed by the next `##` heading closes a prompt body.
const BODY_TERMINATOR: &str = "\n\n##";

#[derive(Debug, Clone)]
pub struct SceneMatch {
    /// Byte offset of the `## Scene` heading that opened the block.
    pub start: usize,
    pub scene: Scene,
}

/// Match scene blocks left to right, never overlapping.
///
/// The search for the next block resumes where the previous prompt body
/// ended, so a heading swallowed by a body never starts a block of its own.
pub fn match_blocks(text: &str) -> Vec<SceneMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(head) = SCENE_HEAD_RE.find_at(text, pos) {
        let body_start = head.end();
        let body_end = text[body_start..]
            .find(BODY_TERMINATOR)
            .map(|i| body_start + i)
            .unwrap_or(text.len());

        matches.push(SceneMatch {
            start: head.start(),
            scene: Scene::draft(matches.len() + 1, &text[body_start..body_end]),
        });
        pos = body_end;
    }

    matches
}
