// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Duplicate-line removal.
//!
//! Lines are compared through a *comparison key* (optionally trimmed and/or
//! lowercased) while the original line is what ends up in the output.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

use super::lines::{is_blank, split_lines, LineEnding};

/// Options for [`remove_duplicates`].
///
/// # Example
/// ```yaml
/// case_sensitive: false
/// keep_first: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoveOptions {
    pub case_sensitive: bool,
    pub trim_whitespace: bool,
    /// Keep the first occurrence of each line; otherwise keep the last one.
    pub keep_first: bool,
    pub remove_empty: bool,
}

impl Default for RemoveOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            trim_whitespace: true,
            keep_first: true,
            remove_empty: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemoveResult {
    pub output: String,
    /// Raw line count of the input, empty lines included.
    pub total_lines: usize,
    pub unique_lines: usize,
    pub removed_duplicates: usize,
}

impl RemoveOptions {
    fn comparison_key<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let base = if self.trim_whitespace { line.trim() } else { line };
        if self.case_sensitive {
            Cow::Borrowed(base)
        } else {
            Cow::Owned(base.to_lowercase())
        }
    }
}

/// Collapse `text` to its unique lines.
///
/// The output is re-joined with `\r\n` when the input contains one, else `\n`.
///
/// ```
/// use textsmith::text::{remove_duplicates, RemoveOptions};
///
/// let result = remove_duplicates("a\na\nb", &RemoveOptions::default());
/// assert_eq!(result.output, "a\nb");
/// assert_eq!(result.removed_duplicates, 1);
/// ```
pub fn remove_duplicates(text: &str, options: &RemoveOptions) -> RemoveResult {
    if text.is_empty() {
        return RemoveResult::default();
    }

    let ending = LineEnding::detect(text);
    let lines = split_lines(text);
    let total_lines = lines.len();

    let candidates = lines
        .into_iter()
        .filter(|line| !(options.remove_empty && is_blank(line)));

    let mut seen = HashSet::new();
    let kept: Vec<&str> = if options.keep_first {
        candidates
            .filter(|line| seen.insert(options.comparison_key(*line)))
            .collect()
    } else {
        let candidates: Vec<&str> = candidates.collect();
        let mut kept: Vec<&str> = candidates
            .into_iter()
            .rev()
            .filter(|line| seen.insert(options.comparison_key(*line)))
            .collect();
        kept.reverse();
        kept
    };

    let unique_lines = kept.len();
    RemoveResult {
        output: kept.join(ending.as_str()),
        total_lines,
        unique_lines,
        removed_duplicates: total_lines.saturating_sub(unique_lines),
    }
}
