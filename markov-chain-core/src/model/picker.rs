use rand::Rng;

/// Source of randomness for a walk.
///
/// A picker answers a single question: which index, uniformly, out of
/// `len` candidates. Walks never ask with `len == 0`.
///
/// Every [`rand::Rng`] is a picker, so `rand::rng()` is used in production
/// and a seeded `ChaCha8Rng` (or a hand-written deterministic picker)
/// in tests.
pub trait Picker {
	/// Returns an index in `0..len`. `len` is strictly positive.
	fn pick_index(&mut self, len: usize) -> usize;

	/// Picks one element of `items` uniformly.
	///
	/// Returns `None` if `items` is empty.
	fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		if items.is_empty() {
			return None;
		}
		let index = self.pick_index(items.len());
		debug_assert!(index < items.len(), "picker returned index {} out of {}", index, items.len());
		items.get(index)
	}
}

impl<R: Rng + ?Sized> Picker for R {
	fn pick_index(&mut self, len: usize) -> usize {
		self.random_range(0..len)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	/// Always returns the last candidate.
	struct Last;

	impl Picker for Last {
		fn pick_index(&mut self, len: usize) -> usize {
			len - 1
		}
	}

	#[test]
	fn empty_slice_yields_none() {
		let empty: [u8; 0] = [];
		assert_eq!(Last.pick(&empty[..]), None);
		assert_eq!(ChaCha8Rng::seed_from_u64(1).pick(&empty[..]), None);
	}

	#[test]
	fn custom_picker_drives_choice() {
		assert_eq!(Last.pick(&["a", "b", "c"][..]), Some(&"c"));
	}

	/// Ignores `len` and always answers past the end.
	struct OutOfRange;

	impl Picker for OutOfRange {
		fn pick_index(&mut self, len: usize) -> usize {
			len
		}
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic(expected = "picker returned index 3 out of 3")]
	fn out_of_range_index_is_not_silent() {
		OutOfRange.pick(&["a", "b", "c"][..]);
	}

	#[test]
	fn rng_picker_stays_in_bounds_and_covers_all() {
		let mut rng = ChaCha8Rng::seed_from_u64(7);
		let mut seen = [false; 4];
		for _ in 0..1_000 {
			let i = rng.pick_index(4);
			assert!(i < 4);
			seen[i] = true;
		}
		assert!(seen.iter().all(|s| *s));
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let items: Vec<usize> = (0..100).collect();
		let mut a = ChaCha8Rng::seed_from_u64(42);
		let mut b = ChaCha8Rng::seed_from_u64(42);
		for _ in 0..50 {
			assert_eq!(a.pick(&items), b.pick(&items));
		}
	}
}
