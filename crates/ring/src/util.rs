// Copyright 2026 The bsym Developers

/// Splits `items` into consecutive chunks with the given sizes.
///
/// Returns `None` if the sizes do not add up to `items.len()`.
pub fn partition<'a, T>(items: &'a [T], sizes: &[usize]) -> Option<Vec<&'a [T]>> {
	if sizes.iter().sum::<usize>() != items.len() {
		return None;
	}

	let mut rest = items;
	let parts = sizes
		.iter()
		.map(|&size| {
			let (head, tail) = rest.split_at(size);
			rest = tail;
			head
		})
		.collect();
	Some(parts)
}
