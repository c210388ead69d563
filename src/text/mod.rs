// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pure text utilities.
//!
//! Every function here is total over its input: any string and any options
//! value produce a well-formed result, empty input included.

mod case;
mod cleaner;
mod dedup;
mod identifier;
mod lines;
mod natural_sort;
mod stats;

pub use case::{change_case, TextCase};
pub use cleaner::{clean_text, collapse_whitespace, TextCleanerOptions, TextCleanerResult};
pub use dedup::{remove_duplicates, RemoveOptions, RemoveResult};
pub use identifier::{convert_identifier, split_words, IdentifierCase};
pub use lines::{split_lines, LineEnding};
pub use natural_sort::{natural_cmp, sort_key, sort_natural};
pub use stats::{count_text_stats, TextStats, READING_WORDS_PER_MINUTE, SPEAKING_WORDS_PER_MINUTE};
