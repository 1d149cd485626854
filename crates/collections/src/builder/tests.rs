use super::*;

#[test]
fn result_resets_buffer_for_reuse() {
	let mut builder = SeqBuilder::new();
	builder.add_one(1);
	builder.add_one(2);
	assert_eq!(builder.result(), vec![1, 2]);
	assert!(builder.is_empty());

	builder.add_one(3);
	assert_eq!(builder.len(), 1);
	assert_eq!(builder.result(), vec![3]);
	assert_eq!(builder.result(), Vec::<i32>::new());
}

#[test]
fn tagged_add_splices_many_and_appends_one() {
	let mut builder = SeqBuilder::new();
	builder.add(Addition::<_>::One(1));
	builder.add(Addition::Many([2, 3]));
	builder.add(Addition::Many(Vec::new()));
	builder.add(Addition::<_>::One(4));
	assert_eq!(builder.result(), vec![1, 2, 3, 4]);
}

#[test]
fn add_many_accepts_containers() {
	let mut builder = SeqBuilder::new();
	builder.add_many(Optional::some(1));
	builder.add_many(Optional::none());
	builder.add_many(Vector::from([2, 3]));
	builder.add_many(crate::Pair::new(4, 5));
	assert_eq!(builder.result(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn vector_builder_produces_vector() {
	let mut builder = VectorBuilder::new();
	builder.add_many([1, 2, 3]);
	let v = builder.result();
	assert_eq!(v.size(), 3);
	assert_eq!(v[2], 3);
	assert!(builder.result().is_empty());
}

#[test]
fn optional_builder_keeps_first() {
	let mut builder = OptionalBuilder::new();
	assert_eq!(builder.result(), Optional::<i32>::none());

	builder.add_many([9, 8, 7]);
	assert_eq!(builder.result(), Optional::some(9));
	assert_eq!(builder.result(), Optional::none());
}

#[test]
fn join_builder_separates_items() {
	let mut builder = JoinBuilder::new(" | ");
	builder.add_many(["a", "b", "c"]);
	assert_eq!(builder.result(), "a | b | c");

	builder.add_one("solo");
	assert_eq!(builder.result(), "solo");
	assert_eq!(builder.result(), "");
}
