// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Identifier-style conversion (camelCase, snake_case, ...).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::lines::{split_lines, LineEnding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierCase {
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
    Dot,
    Path,
    Train,
}

impl IdentifierCase {
    pub const ALL: [IdentifierCase; 8] = [
        IdentifierCase::Camel,
        IdentifierCase::Pascal,
        IdentifierCase::Snake,
        IdentifierCase::Kebab,
        IdentifierCase::Constant,
        IdentifierCase::Dot,
        IdentifierCase::Path,
        IdentifierCase::Train,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierCase::Camel => "camel",
            IdentifierCase::Pascal => "pascal",
            IdentifierCase::Snake => "snake",
            IdentifierCase::Kebab => "kebab",
            IdentifierCase::Constant => "constant",
            IdentifierCase::Dot => "dot",
            IdentifierCase::Path => "path",
            IdentifierCase::Train => "train",
        }
    }
}

impl FromStr for IdentifierCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentifierCase::ALL
            .into_iter()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| format!("Unknown identifier case: {}", s))
    }
}

/// Break a line into words at separators, camel humps and acronym edges.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    for run in line.split(|c: char| !c.is_alphanumeric()).filter(|r| !r.is_empty()) {
        let chars: Vec<char> = run.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            if i > 0 {
                let prev = chars[i - 1];
                let next = chars.get(i + 1).copied();
                let hump = (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase();
                let acronym_end =
                    prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase);
                let after_digit = prev.is_ascii_digit() && c.is_alphabetic();
                if hump || acronym_end || after_digit {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn convert_line(line: &str, case: IdentifierCase) -> String {
    let words = split_words(line);
    let joined = |sep: &str, f: fn(&str) -> String| {
        words.iter().map(|w| f(w)).collect::<Vec<_>>().join(sep)
    };
    match case {
        IdentifierCase::Camel => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
        IdentifierCase::Pascal => joined("", capitalize),
        IdentifierCase::Snake => joined("_", str::to_lowercase),
        IdentifierCase::Kebab => joined("-", str::to_lowercase),
        IdentifierCase::Constant => joined("_", str::to_uppercase),
        IdentifierCase::Dot => joined(".", str::to_lowercase),
        IdentifierCase::Path => joined("/", str::to_lowercase),
        IdentifierCase::Train => joined("-", capitalize),
    }
}

/// Convert every line of `text` to the requested identifier style.
pub fn convert_identifier(text: &str, case: IdentifierCase) -> String {
    if text.is_empty() {
        return String::new();
    }
    let ending = LineEnding::detect(text);
    split_lines(text)
        .into_iter()
        .map(|line| convert_line(line, case))
        .collect::<Vec<_>>()
        .join(ending.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_variants() {
        assert_eq!(split_words("helloWorld"), vec!["hello", "World"]);
        assert_eq!(split_words("HTTPServer error"), vec!["HTTP", "Server", "error"]);
        assert_eq!(split_words("snake_case-and.dots"), vec!["snake", "case", "and", "dots"]);
        assert_eq!(split_words("utf8Decoder"), vec!["utf8", "Decoder"]);
        assert_eq!(split_words("v2beta"), vec!["v2", "beta"]);
        assert!(split_words("  -- ").is_empty());
    }

    #[test]
    fn test_every_case() {
        let input = "user account ID";
        let expected = [
            (IdentifierCase::Camel, "userAccountId"),
            (IdentifierCase::Pascal, "UserAccountId"),
            (IdentifierCase::Snake, "user_account_id"),
            (IdentifierCase::Kebab, "user-account-id"),
            (IdentifierCase::Constant, "USER_ACCOUNT_ID"),
            (IdentifierCase::Dot, "user.account.id"),
            (IdentifierCase::Path, "user/account/id"),
            (IdentifierCase::Train, "User-Account-Id"),
        ];
        for (case, want) in expected {
            assert_eq!(convert_identifier(input, case), want, "case {:?}", case);
        }
    }

    #[test]
    fn test_converts_between_styles() {
        assert_eq!(convert_identifier("parseHTTPResponse", IdentifierCase::Snake), "parse_http_response");
        assert_eq!(convert_identifier("MAX_RETRY_COUNT", IdentifierCase::Camel), "maxRetryCount");
        assert_eq!(convert_identifier("my-component", IdentifierCase::Pascal), "MyComponent");
    }

    #[test]
    fn test_each_line_converted_independently() {
        assert_eq!(
            convert_identifier("first name\r\n\r\nlast name", IdentifierCase::Snake),
            "first_name\r\n\r\nlast_name"
        );
    }

    #[test]
    fn test_parse_names() {
        for case in IdentifierCase::ALL {
            assert_eq!(case.as_str().parse::<IdentifierCase>(), Ok(case));
        }
        assert!("hungarian".parse::<IdentifierCase>().is_err());
    }
}
