pub mod headings;
pub mod scenes;

use std::borrow::Cow;

use crate::scene::Scene;

/// A `## Scene <N>` heading that did not open a well-formed scene block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedHeading {
    pub line: usize,
    pub number: String,
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub scenes: Vec<Scene>,
    pub skipped: Vec<SkippedHeading>,
}

/// Single pass: markdown → scene records, plus the headings that yielded nothing.
pub fn scan(markdown: &str) -> Extraction {
    let text = normalize_newlines(markdown);
    let matches = scenes::match_blocks(&text);

    let mut starts = matches.iter().map(|m| m.start).peekable();
    let mut skipped = Vec::new();
    for heading in headings::find_headings(&text) {
        while starts.next_if(|&s| s < heading.offset).is_some() {}
        if starts.next_if_eq(&heading.offset).is_none() {
            skipped.push(SkippedHeading {
                line: heading.line,
                number: heading.number,
            });
        }
    }

    Extraction {
        scenes: matches.into_iter().map(|m| m.scene).collect(),
        skipped,
    }
}

pub fn extract_scenes(markdown: &str) -> Vec<Scene> {
    scan(markdown).scenes
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

// ── Tests ──
