// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Words kept lowercase in title case unless they open the text.
const TITLE_SMALL_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    Upper,
    Lower,
    /// First letter of every word capitalised.
    Proper,
    /// Proper case except for articles, conjunctions and short prepositions.
    Title,
    /// First letter of every sentence capitalised, the rest lowercase.
    Sentence,
    Alternating,
    Inverse,
}

impl TextCase {
    pub const ALL: [TextCase; 7] = [
        TextCase::Upper,
        TextCase::Lower,
        TextCase::Proper,
        TextCase::Title,
        TextCase::Sentence,
        TextCase::Alternating,
        TextCase::Inverse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextCase::Upper => "upper",
            TextCase::Lower => "lower",
            TextCase::Proper => "proper",
            TextCase::Title => "title",
            TextCase::Sentence => "sentence",
            TextCase::Alternating => "alternating",
            TextCase::Inverse => "inverse",
        }
    }
}

impl FromStr for TextCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextCase::ALL
            .into_iter()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| format!("Unknown case type: {}", s))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Apply `f(word_index, word)` to every whitespace-delimited word, leaving
/// the whitespace between words untouched.
fn map_words(input: &str, mut f: impl FnMut(usize, &str) -> String) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word_index = 0;
    let mut word_start: Option<usize> = None;
    for (i, c) in input.char_indices() {
        match (c.is_whitespace(), word_start) {
            (true, Some(start)) => {
                out.push_str(&f(word_index, &input[start..i]));
                word_index += 1;
                word_start = None;
                out.push(c);
            }
            (true, None) => out.push(c),
            (false, None) => word_start = Some(i),
            (false, Some(_)) => {}
        }
    }
    if let Some(start) = word_start {
        out.push_str(&f(word_index, &input[start..]));
    }
    out
}

fn sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_sentence_start = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if at_sentence_start {
                out.extend(c.to_uppercase());
                at_sentence_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            if matches!(c, '.' | '!' | '?') {
                at_sentence_start = true;
            }
            out.push(c);
        }
    }
    out
}

fn alternating_case(input: &str) -> String {
    let mut upper = false;
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_alphabetic() {
            if upper {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            upper = !upper;
        } else {
            out.push(c);
        }
    }
    out
}

fn inverse_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn change_case(input: &str, case: TextCase) -> String {
    match case {
        TextCase::Upper => input.to_uppercase(),
        TextCase::Lower => input.to_lowercase(),
        TextCase::Proper => map_words(input, |_, word| capitalize(word)),
        TextCase::Title => map_words(input, |i, word| {
            let lower_word = word.to_lowercase();
            if i == 0 || !TITLE_SMALL_WORDS.contains(&lower_word.as_str()) {
                capitalize(word)
            } else {
                lower_word
            }
        }),
        TextCase::Sentence => sentence_case(input),
        TextCase::Alternating => alternating_case(input),
        TextCase::Inverse => inverse_case(input),
    }
}
