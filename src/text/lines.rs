// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Line splitting shared by the line-oriented tools.

/// Line separator used when re-joining processed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Single global decision: any `\r\n` anywhere in the text selects CRLF.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Split at every `\r\n` or bare `\n`.
///
/// Mixed endings are tolerated. A lone `\r` that is not followed by `\n` is
/// kept as part of the line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut pieces: Vec<&str> = text.split('\n').collect();
    let last = pieces.len() - 1;
    for piece in pieces.iter_mut().take(last) {
        if let Some(stripped) = piece.strip_suffix('\r') {
            *piece = stripped;
        }
    }
    pieces
}

/// A line is empty when nothing but whitespace remains after trimming.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
