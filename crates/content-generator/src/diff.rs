//! Word-level diff between two bodies, used to emphasise what a revision added.

use similar::{ChangeTag, TextDiff};

/// One word of the new body and whether the revision introduced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffWord {
    pub text: String,
    pub added: bool,
}

/// Diffs `old` and `new` on whitespace-separated words and returns the words of `new` in order,
/// flagging the inserted ones. Deleted words are dropped.
pub fn highlight_additions(old: &str, new: &str) -> Vec<DiffWord> {
    let old_words: Vec<&str> = old.split_whitespace().collect();
    let new_words: Vec<&str> = new.split_whitespace().collect();
    let diff = TextDiff::from_slices(old_words.as_slice(), new_words.as_slice());

    diff.iter_all_changes()
        .filter_map(|change| match change.tag() {
            ChangeTag::Delete => None,
            ChangeTag::Equal => Some(DiffWord {
                text: change.value().to_string(),
                added: false,
            }),
            ChangeTag::Insert => Some(DiffWord {
                text: change.value().to_string(),
                added: true,
            }),
        })
        .collect()
}
