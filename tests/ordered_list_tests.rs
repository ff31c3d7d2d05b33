mod support;

use basin::domain::{DomainError, OrderedList};
use support::values;

fn abc() -> OrderedList<char> {
    OrderedList::from(vec!['A', 'B', 'C'])
}

#[test]
fn swap_then_remove_scenario() {
    let mut list = abc();
    let b = list.node_at(1).unwrap();

    list.swap_at(0, 2).unwrap();
    assert_eq!(values(&list), vec!['C', 'B', 'A']);

    assert_eq!(list.remove(b).unwrap(), 'B');
    assert_eq!(values(&list), vec!['C', 'A']);
    assert_eq!(list.len(), 2);
    list.check_invariants().unwrap();
}

#[test]
fn len_tracks_appends_and_removals() {
    let mut list = OrderedList::new();
    let handles: Vec<_> = (0..10).map(|i| list.append(i)).collect();
    for handle in handles.iter().step_by(3) {
        list.remove(*handle).unwrap();
    }

    // Removing twice fails and leaves the count alone.
    assert!(list.remove(handles[0]).is_err());
    assert_eq!(list.len(), 10 - 4);
    list.check_invariants().unwrap();
}

#[test]
fn round_trip_through_vec_is_identity() {
    let list = OrderedList::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    let mut rebuilt = OrderedList::new();
    rebuilt.replace_from(list.to_vec());

    assert_eq!(rebuilt.to_vec(), list.to_vec());
    assert_eq!(rebuilt, list);
}

#[test]
fn swap_twice_restores_order() {
    let original = OrderedList::from((0..6).collect::<Vec<_>>());
    for i in 0..6 {
        for j in 0..6 {
            let mut list = OrderedList::from(original.to_vec());
            list.swap_at(i, j).unwrap();
            list.swap_at(i, j).unwrap();
            assert_eq!(list, original, "swap_at({i}, {j}) twice");
            list.check_invariants().unwrap();
        }
    }
}

#[test]
fn reverse_twice_restores_order() {
    let mut list = OrderedList::from(vec![1, 2, 3, 4, 5]);
    list.reverse();
    assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
    list.reverse();
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);

    let mut single = OrderedList::from(vec![7]);
    single.reverse();
    assert_eq!(single.to_vec(), vec![7]);
}

#[test]
fn swap_out_of_bounds_is_error() {
    let mut list = abc();
    assert!(matches!(
        list.swap_at(0, 3),
        Err(DomainError::IndexOutOfBounds { index: 3, len: 3 })
    ));
    assert_eq!(values(&list), vec!['A', 'B', 'C']);
}

#[test]
fn stale_handle_after_slot_reuse_is_rejected() {
    let mut list = abc();
    let b = list.node_at(1).unwrap();
    list.remove(b).unwrap();

    let d = list.append('D');
    assert_eq!(d.index(), b.index());
    assert!(list.get(b).is_none());
    assert!(matches!(
        list.remove(b),
        Err(DomainError::InvalidHandle { .. })
    ));
    assert_eq!(values(&list), vec!['A', 'C', 'D']);
}

#[test]
fn remove_all_invalidates_handles() {
    let mut list = abc();
    let head = list.head().unwrap();
    list.remove_all();

    assert!(list.is_empty());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
    assert!(list.get(head).is_none());

    let z = list.append('Z');
    assert_eq!(z.index(), head.index());
    assert!(list.remove(head).is_err());
    assert_eq!(values(&list), vec!['Z']);
}

#[test]
fn same_shaped_foreign_handle_is_rejected() {
    let mut list = abc();
    let other = OrderedList::from(vec!['X', 'Y', 'Z']);
    let foreign = other.node_at(1).unwrap();

    assert!(matches!(
        list.remove(foreign),
        Err(DomainError::InvalidHandle { .. })
    ));
    assert_eq!(values(&list), vec!['A', 'B', 'C']);
    assert_eq!(values(&other), vec!['X', 'Y', 'Z']);
}

#[test]
fn unique_append_and_lookup() {
    let mut list = OrderedList::new();
    assert!(list.append_unique("a").is_some());
    assert!(list.append_unique("a").is_none());
    list.append("b");

    assert!(list.contains(&"b"));
    let b = list.position(&"b").unwrap();
    assert_eq!(list.get(b), Some(&"b"));
    assert!(list.position(&"z").is_none());
}

#[test]
fn iterates_in_both_directions() {
    let list = abc();
    assert_eq!(list.iter().rev().copied().collect::<String>(), "CBA");
    assert_eq!(list.iter().len(), 3);
}

#[test]
fn serializes_as_sequence() {
    let list = abc();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#"["A","B","C"]"#);

    let back: OrderedList<char> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}
