//! Write-once result slot shared between one writer and many readers.

use std::sync::{Arc, OnceLock};


/// Creates an empty slot, returning its only writer and a reader.
pub(crate) fn result_cell<T>() -> (CellWriter<T>, CellReader<T>) {
	let slot = Arc::new(OnceLock::new());
	(CellWriter { slot: Arc::clone(&slot) }, CellReader { slot })
}

/// The single write handle of a result slot.
///
/// Not `Clone`; [`settle`](CellWriter::settle) consumes it, so a slot is
/// written at most once.
#[derive(Debug)]
pub(crate) struct CellWriter<T> {
	slot: Arc<OnceLock<T>>,
}

impl<T> CellWriter<T> {
	pub fn settle(self, value: T) {
		// This writer is the only one and is consumed here.
		let _ = self.slot.set(value);
	}
}

/// Read handle of a result slot. Observes empty, then the settled value forever.
#[derive(Debug)]
pub(crate) struct CellReader<T> {
	slot: Arc<OnceLock<T>>,
}

impl<T> CellReader<T> {
	pub fn get(&self) -> Option<&T> {
		self.slot.get()
	}

	pub fn is_settled(&self) -> bool {
		self.slot.get().is_some()
	}
}

impl<T> Clone for CellReader<T> {
	fn clone(&self) -> Self {
		Self {
			slot: Arc::clone(&self.slot),
		}
	}
}
