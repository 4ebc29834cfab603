use std::collections::BTreeSet;

use proptest::prelude::*;
use wordlist::{ArrayWordList, PackedTrie, PackedWordList, SetWordList, TrieBuilder, WordList};

/// Words without the reserved zero byte, over a small alphabet
/// so that prefixes are shared often.
fn arb_word() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c'), 1u8..=255], 0..8)
}

/// Longer words, sharing long prefixes.
fn arb_long_word() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), 1u8..=255], 0..64)
}

fn arb_words() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(arb_word(), 0..64)
}

fn fill<L: WordList + Default>(words: &[Vec<u8>]) -> L {
    let mut list = L::default();
    list.begin().unwrap();
    for word in words {
        list.insert(word).unwrap();
    }
    list.finish().unwrap();
    list
}

fn encode<'a, I: IntoIterator<Item = &'a Vec<u8>>>(words: I) -> PackedTrie {
    let mut builder = TrieBuilder::new();
    builder.begin().unwrap();
    for word in words {
        builder.insert(word).unwrap();
    }
    builder.finish().unwrap()
}

proptest! {
    #[test]
    fn prop_every_inserted_word_is_found(words in arb_words()) {
        let list = fill::<PackedWordList>(&words);

        for word in &words {
            prop_assert!(list.contains(word));
        }
    }

    #[test]
    fn prop_matches_a_set(words in arb_words(), queries in prop::collection::vec(arb_word(), 0..64)) {
        let oracle = words.iter().cloned().collect::<BTreeSet<_>>();
        let packed = fill::<PackedWordList>(&words);
        let array = fill::<ArrayWordList>(&words);
        let set = fill::<SetWordList>(&words);

        for query in queries.iter().chain(words.iter()) {
            let expected = oracle.contains(query);
            prop_assert_eq!(expected, packed.contains(query));
            prop_assert_eq!(expected, array.contains(query));
            prop_assert_eq!(expected, set.contains(query));
        }
    }

    #[test]
    fn prop_insertion_order_and_duplicates_dont_matter(words in arb_words()) {
        let forward = encode(words.iter());
        let backward = encode(words.iter().rev().chain(words.iter()));

        prop_assert_eq!(forward.records(), backward.records());
    }

    #[test]
    fn prop_long_words_match_a_set(
        words in prop::collection::vec(arb_long_word(), 0..32),
        queries in prop::collection::vec(arb_long_word(), 0..32)
    ) {
        let oracle = words.iter().cloned().collect::<BTreeSet<_>>();
        let packed = encode(words.iter());

        for query in queries.iter().chain(words.iter()) {
            prop_assert_eq!(oracle.contains(query), packed.contains(query));
        }
        for word in &words {
            // Every strict prefix is only found if it was added too.
            for end in 0..word.len() {
                prop_assert_eq!(oracle.contains(&word[..end].to_vec()), packed.contains(&word[..end]));
            }
        }
    }
}
