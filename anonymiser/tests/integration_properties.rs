use std::collections::{BTreeMap, HashMap};

use anonymiser::{transformers, Anonymisable, Anonymise, Registry};
use proptest::prelude::*;

#[derive(Anonymise, Clone, Debug, Default, PartialEq)]
struct Record {
    pub id: u32,
    pub name: String,
    pub tags: Vec<String>,
    pub score: Option<i64>,
}

#[derive(Anonymise, Clone, Debug, Default, PartialEq)]
struct Customer {
    pub id: u32,
    #[anonymise("email")]
    pub email: String,
    pub orders: Vec<u64>,
}

fn record() -> impl Strategy<Value = Record> {
    (
        any::<u32>(),
        ".{0,20}",
        prop::collection::vec(".{0,8}", 0..5),
        any::<Option<i64>>(),
    )
        .prop_map(|(id, name, tags, score)| Record {
            id,
            name,
            tags,
            score,
        })
}

fn customer() -> impl Strategy<Value = Customer> {
    (
        any::<u32>(),
        ".{0,30}",
        prop::collection::vec(any::<u64>(), 0..5),
    )
        .prop_map(|(id, email, orders)| Customer { id, email, orders })
}

fn masking_registry() -> Registry {
    Registry::builder()
        .transformer("email", transformers::TextPolicy::keep_last(4).transformer())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn unmarked_values_copy_unchanged(records in prop::collection::vec(record(), 0..10)) {
        let copy = records.anonymise(&Registry::new()).unwrap();
        prop_assert_eq!(copy, records);
    }

    #[test]
    fn maps_copy_unchanged(map in prop::collection::hash_map(".{0,8}", any::<Vec<u8>>(), 0..10)) {
        let copy: HashMap<String, Vec<u8>> = map.anonymise(&Registry::new()).unwrap();
        prop_assert_eq!(copy, map);
    }

    #[test]
    fn input_is_never_modified(customers in prop::collection::vec(customer(), 0..10)) {
        let before = customers.clone();
        let _ = customers.anonymise(&masking_registry()).unwrap();
        prop_assert_eq!(customers, before);
    }

    #[test]
    fn masking_keeps_character_count(customer in customer()) {
        let copy = customer.anonymise(&masking_registry()).unwrap();
        prop_assert_eq!(copy.email.chars().count(), customer.email.chars().count());
        prop_assert_eq!(copy.id, customer.id);
        prop_assert_eq!(copy.orders, customer.orders);
    }

    #[test]
    fn unmarked_copy_is_idempotent(records in prop::collection::vec(record(), 0..10)) {
        let registry = Registry::new();
        let once = records.anonymise(&registry).unwrap();
        let twice = once.anonymise(&registry).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn full_redaction_is_idempotent(customers in prop::collection::vec(customer(), 0..10)) {
        let registry = Registry::builder()
            .transformer("email", transformers::TextPolicy::full().transformer())
            .build()
            .unwrap();
        let once = customers.anonymise(&registry).unwrap();
        let twice = once.anonymise(&registry).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sequence_order_is_preserved(ids in prop::collection::vec(any::<u32>(), 0..20)) {
        let customers: Vec<Customer> = ids
            .iter()
            .map(|&id| Customer { id, ..Customer::default() })
            .collect();
        let copy = customers.anonymise(&masking_registry()).unwrap();
        let copied_ids: Vec<u32> = copy.iter().map(|c| c.id).collect();
        prop_assert_eq!(copied_ids, ids);
    }

    #[test]
    fn ordered_maps_keep_their_keys(map in prop::collection::btree_map(any::<u16>(), customer(), 0..10)) {
        let copy: BTreeMap<u16, Customer> = map.anonymise(&masking_registry()).unwrap();
        prop_assert_eq!(copy.keys().collect::<Vec<_>>(), map.keys().collect::<Vec<_>>());
    }
}

#[cfg(feature = "pseudonym")]
proptest! {
    #[test]
    fn pseudonyms_are_deterministic(value in ".{0,40}", salt in any::<Vec<u8>>()) {
        let pseudonymiser = transformers::Pseudonymiser::new(&salt).with_length(12);
        let first = pseudonymiser.pseudonym(&value);
        prop_assert_eq!(&first, &pseudonymiser.pseudonym(&value));
        prop_assert_eq!(first.len(), 12);
    }
}
