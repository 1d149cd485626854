use super::*;
use crate::{Iterable, Optional, Pair, Vector};

#[test]
fn slice_cursor_walks_in_order() {
	let items = [1, 2, 3];
	let mut cursor = SliceCursor::new(&items);
	assert_eq!(cursor.remaining(), 3);
	assert_eq!(cursor.next(), Ok(&1));
	assert_eq!(cursor.next(), Ok(&2));
	assert_eq!(cursor.next(), Ok(&3));
	assert!(!cursor.has_next());
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn exhausted_cursor_fails_and_stays_exhausted() {
	let items = [7];
	let mut cursor = SliceCursor::new(&items);
	assert!(cursor.next().is_ok());
	assert_eq!(cursor.next(), Err(CollectionError::ExhaustedIterator));
	assert_eq!(cursor.next(), Err(CollectionError::ExhaustedIterator));
	assert!(!cursor.has_next());
}

#[test]
fn empty_slice_has_nothing() {
	let items: [u8; 0] = [];
	let mut cursor = SliceCursor::new(&items);
	assert!(!cursor.has_next());
	assert_eq!(cursor.next(), Err(CollectionError::ExhaustedIterator));
}

#[test]
fn optional_cursor_yields_once() {
	let some = Optional::some("a");
	let mut cursor = some.cursor();
	assert!(cursor.has_next());
	assert_eq!(cursor.next(), Ok(&"a"));
	assert!(!cursor.has_next());
	assert_eq!(cursor.next(), Err(CollectionError::ExhaustedIterator));

	let none = Optional::<&str>::none();
	assert!(!none.cursor().has_next());
}

#[test]
fn pair_cursor_yields_first_then_second() {
	let pair = Pair::new('x', 'y');
	let mut cursor = pair.cursor();
	assert_eq!(cursor.next(), Ok(&'x'));
	assert_eq!(cursor.next(), Ok(&'y'));
	assert_eq!(cursor.next(), Err(CollectionError::ExhaustedIterator));
}

#[test]
fn next_count_matches_materialized_length() {
	let v = Vector::from([4, 5, 6, 7]);
	let mut cursor = v.cursor();
	let mut steps = 0;
	while cursor.has_next() {
		cursor.next().unwrap();
		steps += 1;
	}
	assert_eq!(steps, v.to_vec().len());
}

#[test]
fn fresh_cursors_are_independent() {
	let v = Vector::from([1, 2, 3]);
	let mut first = v.cursor();
	first.next().unwrap();
	first.next().unwrap();

	let second: Vec<_> = v.cursor().into_std_iter().copied().collect();
	assert_eq!(second, vec![1, 2, 3]);
	assert_eq!(first.next(), Ok(&3));
}

#[test]
fn foreach_drains_cursor() {
	let items = [1, 2, 3];
	let mut sum = 0;
	SliceCursor::new(&items).foreach(|i| sum += i);
	assert_eq!(sum, 6);
}

#[test]
fn std_iter_view_supports_for_loops() {
	let v = Vector::from([1, 2, 3]);
	let mut sum = 0;
	for i in v.iter() {
		sum += i;
	}
	assert_eq!(sum, 6);
}
