use dat::{serialize, Trie};
use proptest::collection::{hash_set, vec};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    vec(prop::sample::select(vec![b'a', b'b', b'c']), 1..6)
}

proptest! {
    #[test]
    fn every_inserted_key_is_found(keys in hash_set(key_strategy(), 1..30)) {
        let mut t = Trie::new();
        for k in &keys {
            t.insert(k).unwrap();
        }
        prop_assert_eq!(t.len(), keys.len());
        for k in &keys {
            prop_assert!(t.contains(k));
        }
    }

    #[test]
    fn byte_serialization_round_trips(keys in hash_set(key_strategy(), 1..30)) {
        let mut t = Trie::new();
        for k in &keys {
            t.insert(k).unwrap();
        }
        let decoded = serialize::from_bytes(&serialize::to_bytes(&t)).unwrap();
        prop_assert_eq!(decoded.len(), t.len());
        for k in &keys {
            prop_assert!(decoded.contains(k));
        }
    }

    #[test]
    fn erasing_every_key_empties_the_trie(keys in hash_set(key_strategy(), 1..20)) {
        let mut t = Trie::new();
        for k in &keys {
            t.insert(k).unwrap();
        }
        for k in &keys {
            t.erase(k).unwrap();
        }
        prop_assert_eq!(t.len(), 0);
        for k in &keys {
            prop_assert!(!t.contains(k));
        }
    }
}
