//! Property-based tests for question filtering.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p quizbank --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p quizbank --test property_tests
//! ```

use proptest::prelude::*;

use quizbank::{FilterConfig, Question, QuestionBank};

// =============================================================================
// Test Strategies
// =============================================================================

const CATEGORIES: [&str; 6] = ["敬語", "文法", "語彙", "意味", "表記", "未分類"];
const PREFIXES: [&str; 5] = ["KEI-", "GRA-", "VOC-", "IMI-", "HYO-"];

/// A question with an id, a category, either possibly missing.
fn question() -> impl Strategy<Value = Question> {
    (
        prop::option::of((prop::sample::select(PREFIXES.to_vec()), 0u32..1000)),
        prop::option::of(prop::sample::select(CATEGORIES.to_vec())),
        any::<u16>(),
    )
        .prop_map(|(id, category, marker)| {
            let mut q = Question::new().with_field("marker", marker);
            if let Some((prefix, n)) = id {
                q = q.with_field("id", format!("{}{:03}", prefix, n));
            }
            if let Some(category) = category {
                q = q.with_field("category", category);
            }
            q
        })
}

fn bank() -> impl Strategy<Value = QuestionBank> {
    prop::collection::vec(question(), 0..60).prop_map(QuestionBank::new)
}

fn subset(items: &[&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(items.to_vec(), 0..=items.len())
        .prop_map(|v| v.into_iter().map(String::from).collect())
}

fn filter() -> impl Strategy<Value = FilterConfig> {
    (subset(&CATEGORIES), subset(&CATEGORIES), subset(&PREFIXES)).prop_map(
        |(keep, drop, prefixes)| {
            FilterConfig::new()
                .with_keep_categories(keep)
                .with_drop_categories(drop)
                .with_drop_id_prefixes(prefixes)
        },
    )
}

/// True if `needle` appears in `haystack` in order (not necessarily contiguous).
fn is_subsequence(needle: &[Question], haystack: &[Question]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

proptest! {
    #[test]
    fn survivors_keep_input_order(bank in bank(), filter in filter()) {
        let outcome = filter.apply(bank.clone());
        prop_assert!(is_subsequence(outcome.kept.questions(), bank.questions()));
    }

    #[test]
    fn kept_plus_dropped_is_original(bank in bank(), filter in filter()) {
        let outcome = filter.apply(bank.clone());
        prop_assert_eq!(outcome.original_len, bank.len());
        prop_assert_eq!(outcome.kept.len() + outcome.removed(), bank.len());

        let indexes: Vec<usize> = outcome.dropped.iter().map(|d| d.index).collect();
        let mut sorted = indexes.clone();
        sorted.sort_unstable();
        prop_assert_eq!(indexes, sorted);
    }

    #[test]
    fn survivors_pass_every_rule(bank in bank(), filter in filter()) {
        let outcome = filter.apply(bank);
        for q in outcome.kept.iter() {
            prop_assert!(!filter.should_drop(q));
            if !filter.keep_categories.is_empty() {
                prop_assert!(filter.keep_categories.contains(q.category()));
            }
            prop_assert!(!filter.drop_categories.contains(q.category()));
            prop_assert!(!filter.drop_id_prefixes.iter().any(|p| q.id().starts_with(p.as_str())));
        }
    }

    #[test]
    fn filtering_is_idempotent(bank in bank(), filter in filter()) {
        let once = filter.apply(bank).kept;
        let twice = filter.apply(once.clone());
        prop_assert!(twice.is_unchanged());
        prop_assert_eq!(twice.kept, once);
    }

    #[test]
    fn rewrite_parses_back_identically(bank in bank()) {
        let text = bank.to_json_string().unwrap();
        prop_assert!(text.ends_with('\n'));
        prop_assert_eq!(QuestionBank::from_json_str(&text).unwrap(), bank);
    }
}
