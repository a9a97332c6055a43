use std::sync::LazyLock;

use regex::Regex;

static SCENE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"## Scene (\d+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneHeading {
    /// Byte offset of the `##`.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// Digits as written in the heading.
    pub number: String,
}

/// Every `## Scene <N>` occurrence in source order.
pub fn find_headings(text: &str) -> Vec<SceneHeading> {
    let mut headings = Vec::new();
    let mut line = 1;
    let mut counted_to = 0;

    for caps in SCENE_HEADING_RE.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        line += text[counted_to..m.start()].matches('\n').count();
        counted_to = m.start();
        headings.push(SceneHeading {
            offset: m.start(),
            line,
            number: caps[1].to_string(),
        });
    }

    headings
}
