// Copyright 2026 The bsym Developers

//! Helpers for tests and benchmarks.

use bsym_ring::{BooleanPolynomialRing, Ring, RingElement};
use rand::Rng;

use crate::SymbolicBitVector;

/// Creates a vector of the given width with random bits.
///
/// # Panics
///
/// Panics if `width` is zero.
pub fn random_vector<R: Ring>(
	rng: &mut impl Rng,
	ring: &R,
	width: usize,
) -> SymbolicBitVector<R::Element> {
	let bits = (0..width).map(|_| ring.random_element(rng)).collect();
	SymbolicBitVector::new(width, bits, Some(ring.clone())).expect("width is positive")
}

/// Creates a Boolean polynomial ring with `n_gens` generators named `x0, x1, ...`.
pub fn boolean_ring(n_gens: usize) -> BooleanPolynomialRing {
	BooleanPolynomialRing::with_generators(&[("x", n_gens)]).expect("generator names are valid")
}

/// Computes the product of two vectors as polynomials in $x$ by direct convolution, keeping
/// only the coefficients below the larger of the two widths.
///
/// This is an independent reference for the shift-and-add multiplication.
pub fn truncated_convolution<E: RingElement>(
	lhs: &SymbolicBitVector<E>,
	rhs: &SymbolicBitVector<E>,
) -> SymbolicBitVector<E> {
	let width = lhs.width().max(rhs.width());
	let ring = lhs.ring();
	let bits = (0..width)
		.map(|k| {
			let mut acc = ring.zero();
			for i in 0..=k {
				if let (Some(a), Some(b)) = (lhs.bits().get(i), rhs.bits().get(k - i)) {
					acc += a.clone() * b;
				}
			}
			acc
		})
		.collect();
	SymbolicBitVector::new(width, bits, Some(ring.clone())).expect("width is positive")
}
