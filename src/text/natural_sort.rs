// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Natural, accent- and case-insensitive ordering ("item2" sorts before
//! "item10", "éclair" sorts with "eclair").

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold `s` to the form lines are compared in: canonical decomposition with
/// combining marks dropped, then lowercased.
pub fn sort_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two strings treating digit runs as numbers and ignoring case and
/// accents.
///
/// Strings that differ only in case or accents compare equal, so a stable
/// sort keeps their input order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natord::compare(&sort_key(a), &sort_key(b))
}

/// Stable natural sort; each line is folded once.
pub fn sort_natural(lines: &mut Vec<String>) {
    let mut keyed: Vec<(String, String)> = lines.drain(..).map(|line| (sort_key(&line), line)).collect();
    keyed.sort_by(|a, b| natord::compare(&a.0, &b.0));
    lines.extend(keyed.into_iter().map(|(_, line)| line));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(input: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        sort_natural(&mut v);
        v
    }

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(
            sorted(&["item10", "item2", "item1"]),
            vec!["item1", "item2", "item10"]
        );
        assert_eq!(sorted(&["10", "9", "100"]), vec!["9", "10", "100"]);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Equal);
        assert_eq!(sorted(&["banana", "Apple", "cherry"]), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        assert_eq!(
            sorted(&["zebra", "éclair", "apple", "École", "foo"]),
            vec!["apple", "éclair", "École", "foo", "zebra"]
        );
        assert_eq!(natural_cmp("Ångström", "angstrom"), Ordering::Equal);
        assert_eq!(natural_cmp("naïve", "nb"), Ordering::Less);
    }

    #[test]
    fn precomposed_and_decomposed_forms_match() {
        assert_eq!(natural_cmp("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
        assert_eq!(sort_key("Cafe\u{301}"), "cafe");
    }

    #[test]
    fn punctuation_sorts_before_digits_and_letters() {
        assert_eq!(
            sorted(&["plain", "_under", "-dash", "#hash", "7seven"]),
            vec!["#hash", "-dash", "7seven", "_under", "plain"]
        );
    }

    #[test]
    fn equal_keys_stay_in_input_order() {
        assert_eq!(sorted(&["b", "B", "a"]), vec!["a", "b", "B"]);
        assert_eq!(sorted(&["é", "e", "E"]), vec!["é", "e", "E"]);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("abc", "abcd"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("2", "a"), Ordering::Less);
    }
}
