// Copyright 2026 The bsym Developers

use std::{
	fmt::{Debug, Display},
	ops::{Add, AddAssign, Mul, MulAssign},
};

use rand::Rng;

/// A commutative ring of characteristic 2 that owns its elements.
///
/// Ring values are lightweight handles. Equality on a ring compares *instances*: two rings
/// constructed separately are different rings, even if they were built from identical
/// parameters, and elements of one must never be combined with elements of the other.
pub trait Ring: Clone + PartialEq + Debug + Send + Sync + 'static {
	type Element: RingElement<Ring = Self>;

	/// Returns the additive identity.
	fn zero(&self) -> Self::Element;

	/// Returns the multiplicative identity.
	fn one(&self) -> Self::Element;

	/// Embeds a single bit into the ring, mapping `false` to zero and `true` to one.
	fn from_bit(&self, bit: bool) -> Self::Element {
		if bit { self.one() } else { self.zero() }
	}

	/// Samples an element of the ring.
	fn random_element<Rn: Rng + ?Sized>(&self, rng: &mut Rn) -> Self::Element;
}

/// An element of a [`Ring`].
///
/// Addition must be self-inverse (`x + x == 0`), so that it implements XOR on the Boolean
/// interpretation of the element, and `one + x` implements negation.
pub trait RingElement:
	Sized
	+ Clone
	+ Eq
	+ Debug
	+ Display
	+ Send
	+ Sync
	+ 'static
	+ Add<Output = Self>
	+ Mul<Output = Self>
	+ for<'a> Add<&'a Self, Output = Self>
	+ for<'a> Mul<&'a Self, Output = Self>
	+ AddAssign
	+ MulAssign
	+ for<'a> AddAssign<&'a Self>
	+ for<'a> MulAssign<&'a Self>
{
	type Ring: Ring<Element = Self>;

	/// Returns the ring this element belongs to.
	fn parent(&self) -> Self::Ring;

	/// Returns true iff this element is the additive identity.
	fn is_zero(&self) -> bool {
		*self == self.parent().zero()
	}
}
