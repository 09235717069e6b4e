use gset::{intersection, union, MaybeSet, Set};
use std::collections::HashMap;

#[test]
fn push_then_query() {
    let mut s = Set::from_array([1, 2, 3]);
    s.push([4]);
    assert_eq!(s, Set::from_array([1, 2, 3, 4]));
    assert!(s.has(&4));
    assert!(!s.has(&5));
}

#[test]
fn delete_from_subset() {
    let mut s = Set::from_array([1, 2, 3]);
    s.delete_from(&Set::from_array([2, 3]));
    assert_eq!(s, Set::from_array([1]));
}

#[test]
fn union_of_three() {
    let sets = [Set::from_array([1, 2]), Set::from_array([2, 3]), Set::from_array([1, 3])];
    assert_eq!(union(&sets), Set::from_array([1, 2, 3]));
}

#[test]
fn intersection_of_three() {
    let sets = [Set::from_array([1, 2]), Set::from_array([2, 3]), Set::from_array([1, 3])];
    assert!(intersection(&sets).is_empty());
}

#[test]
fn superset() {
    assert!(Set::from_array([1, 2, 3]).is_super_of(&Set::from_array([1, 2])));
    assert!(!Set::from_array([1, 2]).is_super_of(&Set::from_array([1, 2, 3])));
}

#[test]
fn keys_of_map() {
    let map = HashMap::from([(1, "a"), (2, "b")]);
    assert_eq!(Set::from_map_keys(&map), Set::from_array([1, 2]));
}

#[test]
fn optional_sets() {
    let mut cache: Option<Set<&str>> = None;
    assert!(cache.as_ref().is_empty());
    assert!(!cache.as_ref().has("k"));

    let known = Set::from_array(["k", "v"]);
    assert!(cache.as_ref().is_sub_of(&known));
    assert_eq!(known.get_intersection(&cache), known);

    cache.get_or_insert_with(Set::empty).push(["k"]);
    assert!(cache.as_ref().has("k"));
    assert_eq!(known.get_intersection(&cache), Set::from_array(["k"]));
}

#[test]
fn text_form() {
    let s: Set<i64> = "{ -1, 4, 4 }".parse().unwrap();
    assert_eq!(s, Set::from_array([-1, 4]));
    assert!(matches!("{1; 2}".parse::<Set<i64>>(), Err(gset::ParseSetError::InvalidElement { .. })));
}
