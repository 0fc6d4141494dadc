//! End-to-end walkthroughs of the conflict rules on both map kinds

use std::rc::Rc;

use pairmap::{BiMap, Error, Number, SetOptions, WeakBiMap};

/// A value that can be either a number or a piece of text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Cell {
    Number(Number),
    Text(&'static str),
}

fn num(value: f64) -> Number {
    Number::from(value)
}

fn cell(value: f64) -> Cell {
    Cell::Number(num(value))
}

fn contents(map: &BiMap<Number, Cell>) -> Vec<(Number, Cell)> {
    map.iter().map(|(k, v)| (*k, v.clone())).collect()
}

/// Builds `{1: 2, -0: 3, 2: "3"}`
fn numbers_and_text() -> BiMap<Number, Cell> {
    let mut map = BiMap::new();
    map.set(num(1.0), cell(2.0))
        .and_then(|map| map.set(num(-0.0), cell(3.0)))
        .and_then(|map| map.set(num(2.0), Cell::Text("3")))
        .unwrap();
    map
}

#[test]
fn test_signed_zero_keys_and_rejected_duplicate() {
    let mut map = numbers_and_text();

    assert!(!map.has(&num(0.0)));
    assert_eq!(map.get(&num(-0.0)), Some(&cell(3.0)));
    assert!(map.inverse().get(&cell(3.0)).unwrap().is_negative_zero());
    assert_eq!(map.len(), 3);

    assert_eq!(map.set(num(4.0), cell(2.0)).map(|_| ()), Err(Error::DuplicateValue));
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&num(1.0)), Some(&cell(2.0)));
}

#[test]
fn test_forced_steal_keeps_the_first_slot() {
    let mut map = numbers_and_text();
    map.set_with(num(4.0), cell(2.0), SetOptions::forced())
        .unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(
        contents(&map),
        vec![
            (num(4.0), cell(2.0)),
            (num(-0.0), cell(3.0)),
            (num(2.0), Cell::Text("3")),
        ]
    );
    assert!(!map.has(&num(1.0)));
}

#[test]
fn test_forced_double_conflict_moves_to_the_end() {
    let mut map = numbers_and_text();
    map.set_with(num(4.0), cell(2.0), SetOptions::forced())
        .unwrap();
    map.set(num(8.0), cell(10.0)).unwrap();
    map.set_with(num(2.0), cell(2.0), SetOptions::forced())
        .unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(
        contents(&map),
        vec![
            (num(-0.0), cell(3.0)),
            (num(8.0), cell(10.0)),
            (num(2.0), cell(2.0)),
        ]
    );
    assert!(!map.has(&num(4.0)));
    assert_eq!(map.inverse().get(&Cell::Text("3")), None);
}

#[test]
fn test_nan_is_a_single_key() {
    let mut map = BiMap::new();
    map.set(num(f64::NAN), "nan").unwrap();
    map.set(num(-f64::NAN), "still nan").unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&num(f64::NAN)), Some(&"still nan"));
}

#[test]
fn test_setting_twice_is_idempotent() {
    let mut map = numbers_and_text();
    let before = contents(&map);
    map.set(num(-0.0), cell(3.0)).unwrap();
    map.set(num(-0.0), cell(3.0)).unwrap();

    assert_eq!(contents(&map), before);
}

#[test]
fn test_construction_propagates_conflicts() {
    let result = BiMap::from_entries([(1, 'a'), (2, 'b'), (3, 'a')]);
    assert_eq!(result.map(|_| ()), Err(Error::DuplicateValue));

    let map = BiMap::from_entries([(1, 'a'), (1, 'b'), (2, 'a')]).unwrap();
    assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&1, &'b'), (&2, &'a')]);
}

#[test]
fn test_views_share_iteration_order() {
    let mut map = BiMap::from_entries([("a", 1), ("b", 2), ("c", 3)]).unwrap();
    map.inverse_mut().set(2, "z").unwrap();

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "z", "c"]);
    assert_eq!(
        map.inverse().keys().copied().collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(
        map.inverse().values().copied().collect::<Vec<_>>(),
        vec!["a", "z", "c"]
    );
    assert_eq!(
        map.iter().rev().map(|(k, _)| *k).collect::<Vec<_>>(),
        vec!["c", "z", "a"]
    );

    // A fresh iterator reflects later changes
    map.delete("a");
    assert_eq!((&map).into_iter().len(), 2);
}

#[test]
fn test_weak_forced_rebinding() {
    let [a, b, c, d, e, f] = ["a", "b", "c", "d", "e", "f"].map(Rc::new);
    let mut map = WeakBiMap::from_entries([(&a, &b), (&c, &d), (&b, &e)]).unwrap();

    assert!(Rc::ptr_eq(&map.get(&a).unwrap(), &b));
    assert!(Rc::ptr_eq(&map.inverse().get(&b).unwrap(), &a));
    assert_eq!(map.set(&f, &b).map(|_| ()), Err(Error::DuplicateValue));

    map.set_with(&f, &b, SetOptions::forced()).unwrap();
    assert!(Rc::ptr_eq(&map.get(&f).unwrap(), &b));
    assert!(Rc::ptr_eq(&map.get(&c).unwrap(), &d));
    assert!(Rc::ptr_eq(&map.get(&b).unwrap(), &e));
    assert_eq!(map.get(&a), None);

    map.set_with(&b, &b, SetOptions::forced()).unwrap();
    assert!(Rc::ptr_eq(&map.get(&b).unwrap(), &b));
    assert!(Rc::ptr_eq(&map.get(&c).unwrap(), &d));
    assert_eq!(map.get(&f), None);
    assert_eq!(map.inverse().get(&e), None);
}
