//! Tag frequency across decisions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::journal::Decision;

/// How many tags the statistics screen lists.
pub const DEFAULT_TOP_TAGS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Every tag with its number of occurrences, most frequent first.
///
/// Ties keep the order in which tags were first seen.
pub fn tag_frequency<'a>(decisions: impl IntoIterator<Item = &'a Decision>) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for d in decisions {
        for tag in d.tags().iter() {
            match index.get(tag) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(tag, counts.len());
                    counts.push(TagCount {
                        tag: tag.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `limit` most frequent tags.
pub fn top_tags<'a>(decisions: impl IntoIterator<Item = &'a Decision>, limit: usize) -> Vec<TagCount> {
    let mut counts = tag_frequency(decisions);
    counts.truncate(limit);
    counts
}
