// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These drive the loader with generated files and check the structural
//! guarantees of the resulting store.

use dotcfg::adapters::{InMemoryReader, StaticEnv};
use dotcfg::domain::Entry;
use dotcfg::service::{ConfigStore, Loader};
use proptest::prelude::*;

fn load_text(text: &str) -> ConfigStore {
    Loader::builder()
        .with_reader(InMemoryReader::new().with_file("gen.cfg", text))
        .with_environment(StaticEnv::new())
        .build()
        .unwrap()
        .load("gen.cfg")
        .unwrap()
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c]{1,2}", 1..4).prop_map(|segments| segments.join("."))
}

fn value_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9/:]{1,6}", 1..4)
}

// Files without directives produce one entry per key/value line, in order
proptest! {
    #[test]
    fn test_plain_file_entries_in_order(
        lines in prop::collection::vec((key_strategy(), value_strategy()), 0..20)
    ) {
        let text: String = lines
            .iter()
            .map(|(k, v)| format!("{}   {}\n\n", k, v.join("  ")))
            .collect();
        let store = load_text(&text);

        prop_assert_eq!(store.len(), lines.len());
        for (entry, (k, v)) in store.entries().iter().zip(&lines) {
            prop_assert_eq!(entry.key.as_str(), k.as_str());
            prop_assert_eq!(entry.value.as_str(), v.join(" "));
        }
    }
}

// size() counts matches and get_n() walks them in insertion order
proptest! {
    #[test]
    fn test_size_and_get_n_agree(
        lines in prop::collection::vec((key_strategy(), value_strategy()), 1..20)
    ) {
        let entries: Vec<Entry> = lines
            .iter()
            .map(|(k, v)| Entry::new(k.as_str(), v.join(" ")))
            .collect();
        let store = ConfigStore::from_entries(entries);

        for (key, _) in &lines {
            let expected: Vec<String> = lines
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.join(" "))
                .collect();
            prop_assert_eq!(store.size(&[key]), expected.len());
            for (i, value) in expected.iter().enumerate() {
                prop_assert_eq!(store.get_n(i, &[key]).unwrap(), value.as_str());
            }
            prop_assert!(store.get_n(expected.len(), &[key]).is_err());
            prop_assert_eq!(store.get(&[key]).is_ok(), expected.len() == 1);
        }
    }
}

// descend(prefix).get(rest) == get(prefix.rest) for unique keys
proptest! {
    #[test]
    fn test_descend_round_trip(
        lines in prop::collection::vec((key_strategy(), value_strategy()), 1..20)
    ) {
        let entries: Vec<Entry> = lines
            .iter()
            .map(|(k, v)| Entry::new(k.as_str(), v.join(" ")))
            .collect();
        let store = ConfigStore::from_entries(entries);

        for (key, _) in &lines {
            if let Some((head, rest)) = key.split_once('.') {
                if store.size(&[key]) == 1 {
                    let descended = store.descend(&[head]);
                    prop_assert_eq!(
                        descended.get(&[rest]).unwrap(),
                        store.get(&[key]).unwrap()
                    );
                }
            }
        }
    }
}

// sub_keys() never repeats a segment and every segment is real
proptest! {
    #[test]
    fn test_sub_keys_distinct(
        keys in prop::collection::vec(key_strategy(), 0..20),
        prefix in "[a-c]{1,2}"
    ) {
        let entries: Vec<Entry> = keys.iter().map(|k| Entry::new(k.as_str(), "v")).collect();
        let store = ConfigStore::from_entries(entries);
        let subs = store.sub_keys(&[&prefix]);

        let mut sorted = subs.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), subs.len());

        for sub in &subs {
            prop_assert!(store.has_sub_key(&[prefix.as_str(), sub.as_str()]));
        }
        prop_assert_eq!(store.has_prefix(&[&prefix]), !subs.is_empty());
    }
}
