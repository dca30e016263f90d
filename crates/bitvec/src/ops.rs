// Copyright 2026 The bsym Developers

//! Infallible operators on [`SymbolicBitVector`].
//!
//! Negation and shifts by a constant amount can never fail, so they are exposed through the
//! standard operator traits. Operations that may fail on a ring mismatch are inherent methods
//! returning `Result`.

use std::ops::{Not, Shl, Shr};

use bsym_ring::RingElement;

use crate::SymbolicBitVector;

impl<E: RingElement> Not for &SymbolicBitVector<E> {
	type Output = SymbolicBitVector<E>;

	/// Negates every bit, mapping `b` to `1 + b`.
	fn not(self) -> Self::Output {
		self.negated()
	}
}

impl<E: RingElement> Not for SymbolicBitVector<E> {
	type Output = SymbolicBitVector<E>;

	fn not(self) -> Self::Output {
		!&self
	}
}

impl<E: RingElement> Shl<usize> for &SymbolicBitVector<E> {
	type Output = SymbolicBitVector<E>;

	/// Shifts towards the most significant bit, keeping the width. Bits shifted past the top
	/// are discarded; shifting by the width or more yields zero.
	fn shl(self, shift: usize) -> Self::Output {
		self.shifted_left(shift)
	}
}

impl<E: RingElement> Shl<usize> for SymbolicBitVector<E> {
	type Output = SymbolicBitVector<E>;

	fn shl(self, shift: usize) -> Self::Output {
		&self << shift
	}
}

impl<E: RingElement> Shr<usize> for &SymbolicBitVector<E> {
	type Output = SymbolicBitVector<E>;

	/// Shifts towards the least significant bit, keeping the width and filling the top with
	/// zeros.
	fn shr(self, shift: usize) -> Self::Output {
		self.shifted_right(shift)
	}
}

impl<E: RingElement> Shr<usize> for SymbolicBitVector<E> {
	type Output = SymbolicBitVector<E>;

	fn shr(self, shift: usize) -> Self::Output {
		&self >> shift
	}
}
