//! Container copy tests: every supported standard library shape, with marked
//! values nested inside it.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::{Arc, Mutex, RwLock},
    time::{Duration, SystemTime},
};

use anonymiser::{transformers, Anonymisable, Anonymise, Error, Registry, Shape};

#[derive(Anonymise, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Secret {
    #[anonymise("secret")]
    pub value: String,
}

fn secret(value: &str) -> Secret {
    Secret {
        value: value.to_string(),
    }
}

fn registry() -> Registry {
    Registry::builder()
        .transformer("secret", transformers::TextPolicy::full().transformer())
        .build()
        .unwrap()
}

#[test]
fn test_sequences_preserve_order_and_length() {
    let registry = registry();

    let vec = vec![secret("a"), secret("b"), secret("c")];
    let copy = vec.anonymise(&registry).unwrap();
    assert_eq!(copy.len(), 3);
    assert!(copy.iter().all(|s| s.value == "[REDACTED]"));

    let deque: VecDeque<u32> = (1..=4).collect();
    assert_eq!(deque.anonymise(&registry).unwrap(), deque);

    let boxed: Box<[Secret]> = vec![secret("x")].into_boxed_slice();
    assert_eq!(boxed.anonymise(&registry).unwrap()[0].value, "[REDACTED]");

    let empty: Vec<Secret> = Vec::new();
    assert!(empty.anonymise(&registry).unwrap().is_empty());
}

#[test]
fn test_arrays_keep_their_length() {
    let registry = registry();
    let array = [secret("a"), secret("b")];
    let copy = array.anonymise(&registry).unwrap();
    assert_eq!(copy, [secret("[REDACTED]"), secret("[REDACTED]")]);
    assert_eq!(<[Secret; 2]>::SHAPE, Shape::Array);
}

#[test]
fn test_maps_transform_keys_and_values() {
    let registry = registry();

    let mut hash = HashMap::new();
    hash.insert(1_u32, secret("one"));
    hash.insert(2_u32, secret("two"));
    let copy = hash.anonymise(&registry).unwrap();
    assert_eq!(copy.len(), 2);
    assert_eq!(copy[&1].value, "[REDACTED]");

    let mut tree = BTreeMap::new();
    tree.insert(secret("key"), 7_u8);
    let copy = tree.anonymise(&registry).unwrap();
    assert_eq!(copy.get(&secret("[REDACTED]")), Some(&7));

    let empty: HashMap<String, Secret> = HashMap::new();
    assert!(empty.anonymise(&registry).unwrap().is_empty());
}

#[test]
fn test_sets_are_rebuilt() {
    let registry = registry();

    let set: HashSet<String> = ["a", "b"].into_iter().map(String::from).collect();
    assert_eq!(set.anonymise(&registry).unwrap(), set);

    // Keys that collapse to the same copy collapse in the output set.
    let tree: BTreeSet<Secret> = [secret("a"), secret("b")].into_iter().collect();
    let copy = tree.anonymise(&registry).unwrap();
    assert_eq!(copy.len(), 1);
}

#[test]
fn test_shared_pointers_allocate_new_values() {
    let registry = registry();

    let rc = Rc::new(secret("rc"));
    let rc_copy = rc.anonymise(&registry).unwrap();
    assert!(!Rc::ptr_eq(&rc, &rc_copy));
    assert_eq!(rc.value, "rc");
    assert_eq!(rc_copy.value, "[REDACTED]");

    let arc = Arc::new(vec![secret("arc")]);
    let arc_copy = arc.anonymise(&registry).unwrap();
    assert!(!Arc::ptr_eq(&arc, &arc_copy));
    assert_eq!(arc_copy[0].value, "[REDACTED]");
}

#[test]
fn test_cells_and_locks_are_copied() {
    let registry = registry();

    let cell = Cell::new(5_i16);
    assert_eq!(cell.anonymise(&registry).unwrap().get(), 5);

    let ref_cell = RefCell::new(secret("refcell"));
    assert_eq!(
        ref_cell.anonymise(&registry).unwrap().into_inner().value,
        "[REDACTED]"
    );

    let mutex = Mutex::new(secret("mutex"));
    let copy = mutex.anonymise(&registry).unwrap();
    assert_eq!(copy.into_inner().unwrap().value, "[REDACTED]");

    let lock = RwLock::new(Some(secret("rwlock")));
    let copy = lock.anonymise(&registry).unwrap();
    assert_eq!(
        copy.into_inner().unwrap().map(|s| s.value),
        Some("[REDACTED]".to_string())
    );
}

#[test]
fn test_borrowed_refcell_is_invalid() {
    let cell = RefCell::new(secret("busy"));
    let _guard = cell.borrow_mut();
    let err = cell.anonymise(&registry()).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
}

#[test]
fn test_raw_pointer_is_unsupported() {
    let value = 3_u8;
    let pointer = std::ptr::addr_of!(value);
    let err = pointer.anonymise(&registry()).unwrap_err();
    assert_eq!(err, Error::UnsupportedShape(Shape::RawPointer));
    assert_eq!(err.to_string(), "unsupported shape: raw pointer");
}

#[test]
fn test_time_values_pass_through() {
    #[derive(Anonymise, Debug, Default, PartialEq)]
    struct Audit {
        pub at: Option<SystemTime>,
        pub took: Duration,
        #[anonymise("actor")]
        pub actor: String,
    }

    let registry = Registry::builder()
        .transformer("actor", transformers::constant("someone".to_string()))
        .build()
        .unwrap();

    let now = SystemTime::now();
    let input = Audit {
        at: Some(now),
        took: Duration::from_millis(250),
        actor: "root".into(),
    };
    let output = input.anonymise(&registry).unwrap();
    assert_eq!(output.at, Some(now));
    assert_eq!(output.took, Duration::from_millis(250));
    assert_eq!(output.actor, "someone");
}

#[test]
fn test_tuples_and_callables() {
    fn double(value: i32) -> i32 {
        value * 2
    }

    let registry = registry();
    let tuple = (secret("t"), 1_u8, "static");
    let copy = tuple.anonymise(&registry).unwrap();
    assert_eq!(copy, (secret("[REDACTED]"), 1, "static"));

    let callback: fn(i32) -> i32 = double;
    let copy = callback.anonymise(&registry).unwrap();
    assert_eq!(copy(4), 8);
}

#[test]
fn test_channels_are_shared() {
    let (sender, receiver) = std::sync::mpsc::channel::<u8>();
    let copy = sender.anonymise(&Registry::new()).unwrap();
    copy.send(9).unwrap();
    assert_eq!(receiver.recv().unwrap(), 9);
}
