// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use super::lines::{is_blank, split_lines};

/// Average silent reading speed used for `reading_time_minutes`.
pub const READING_WORDS_PER_MINUTE: usize = 200;
/// Average speaking speed used for `speaking_time_minutes`.
pub const SPEAKING_WORDS_PER_MINUTE: usize = 130;

/// Word and character counts for a block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
    pub speaking_time_minutes: usize,
}

fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

fn count_paragraphs(text: &str) -> usize {
    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in split_lines(text) {
        if is_blank(line) {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }
    }
    paragraphs
}

/// Count words, characters, sentences and paragraphs.
///
/// Characters are Unicode scalar values, not bytes.
///
/// ```
/// use textsmith::text::count_text_stats;
///
/// let stats = count_text_stats("Hello world");
/// assert_eq!(stats.words, 2);
/// assert_eq!(stats.characters, 11);
/// assert_eq!(stats.characters_no_spaces, 10);
/// ```
pub fn count_text_stats(text: &str) -> TextStats {
    if text.is_empty() {
        return TextStats::default();
    }

    let words = text.split_whitespace().count();
    TextStats {
        words,
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        sentences: count_sentences(text),
        paragraphs: count_paragraphs(text),
        lines: split_lines(text).len(),
        reading_time_minutes: words.div_ceil(READING_WORDS_PER_MINUTE),
        speaking_time_minutes: words.div_ceil(SPEAKING_WORDS_PER_MINUTE),
    }
}
