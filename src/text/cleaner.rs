// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One-click text cleaner.
//!
//! Steps run in a fixed order: collapse spaces, drop empty lines, dedupe,
//! sort. Unlike [`remove_duplicates`](super::remove_duplicates) the dedupe
//! step always compares trimmed, lowercased lines.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::lines::{is_blank, split_lines, LineEnding};
use super::natural_sort::sort_natural;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TextCleanerOptions {
    pub remove_duplicate_lines: bool,
    pub remove_empty_lines: bool,
    pub remove_extra_spaces: bool,
    pub sort_lines: bool,
    /// Shorthand for dedupe + sort.
    pub unique_list: bool,
}

impl Default for TextCleanerOptions {
    fn default() -> Self {
        Self {
            remove_duplicate_lines: true,
            remove_empty_lines: true,
            remove_extra_spaces: true,
            sort_lines: false,
            unique_list: false,
        }
    }
}

impl TextCleanerOptions {
    fn dedupe(&self) -> bool {
        self.remove_duplicate_lines || self.unique_list
    }

    fn sort(&self) -> bool {
        self.sort_lines || self.unique_list
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextCleanerResult {
    pub output: String,
    pub total_lines: usize,
    pub output_lines: usize,
    pub removed_duplicates: usize,
}

/// Replace every run of whitespace with a single space. Leading and trailing
/// runs are collapsed too, not removed.
pub fn collapse_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_run = false;
    for c in line.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

pub fn clean_text(text: &str, options: &TextCleanerOptions) -> TextCleanerResult {
    if text.is_empty() {
        return TextCleanerResult::default();
    }

    let ending = LineEnding::detect(text);
    let raw = split_lines(text);
    let total_lines = raw.len();

    let mut lines: Vec<String> = if options.remove_extra_spaces {
        raw.into_iter().map(collapse_whitespace).collect()
    } else {
        raw.into_iter().map(str::to_string).collect()
    };

    if options.remove_empty_lines {
        lines.retain(|line| !is_blank(line));
    }

    let mut removed_duplicates = 0;
    if options.dedupe() {
        let mut seen = HashSet::new();
        lines.retain(|line| {
            let fresh = seen.insert(line.trim().to_lowercase());
            if !fresh {
                removed_duplicates += 1;
            }
            fresh
        });
    }

    if options.sort() {
        sort_natural(&mut lines);
    }

    TextCleanerResult {
        output: lines.join(ending.as_str()),
        total_lines,
        output_lines: lines.len(),
        removed_duplicates,
    }
}
