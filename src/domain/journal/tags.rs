//! Tags: ordered, de-duplicated labels plus the capped picker used when
//! logging a decision.

use serde::{Deserialize, Serialize};

/// Tags offered by the picker before the user types their own.
pub const SUGGESTED_TAGS: &[&str] = &[
    "직감",
    "데이터",
    "조언",
    "충동",
    "감정",
    "장기",
    "단기",
    "리서치",
    "습관",
    "재도전",
];

/// Default number of tags a single decision may carry in the picker.
pub const DEFAULT_TAG_CAP: usize = 5;

/// Insertion-ordered tag set. Duplicates collapse case-sensitively, so
/// `"Run"` and `"run"` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses free text: comma separated, trimmed, leading `#` removed,
    /// empty entries dropped.
    pub fn parse(text: &str) -> Self {
        text.split(',').collect()
    }

    /// Adds a tag; returns false if it was blank or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = normalize(tag);
        if tag.is_empty() || self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Removes a tag; returns false if it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().trim_start_matches('#').trim().to_string()
}

impl<S: AsRef<str>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for Tags {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

/// Outcome of toggling a tag in a [`TagSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagToggle {
    Added,
    Removed,
    /// The selection was full; nothing changed.
    CapReached,
    /// Blank input; nothing changed.
    Ignored,
}

/// Tag picker state with an upper bound on selected tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelection {
    selected: Tags,
    cap: usize,
}

impl TagSelection {
    pub fn new(cap: usize) -> Self {
        Self {
            selected: Tags::new(),
            cap,
        }
    }

    /// Starts from existing tags, e.g. when editing. Tags beyond the cap
    /// are kept; only new additions are refused.
    pub fn with_selected(selected: Tags, cap: usize) -> Self {
        Self { selected, cap }
    }

    /// Selects an unselected tag, or deselects a selected one.
    pub fn toggle(&mut self, tag: &str) -> TagToggle {
        let tag = normalize(tag);
        if tag.is_empty() {
            return TagToggle::Ignored;
        }
        if self.selected.remove(&tag) {
            return TagToggle::Removed;
        }
        if self.is_full() {
            return TagToggle::CapReached;
        }
        self.selected.insert(&tag);
        TagToggle::Added
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.cap
    }

    pub fn selected(&self) -> &Tags {
        &self.selected
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn into_tags(self) -> Tags {
        self.selected
    }
}

impl Default for TagSelection {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_CAP)
    }
}
