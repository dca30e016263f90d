// Copyright 2026 The bsym Developers

use bsym_ring::RingElement;

use crate::{Constant, SymbolicBitVector};

/// The right-hand side of a binary bit-vector operation.
///
/// Which variants an operation accepts is part of its contract; the others are reported as
/// [`Error::UnsupportedOperand`](crate::Error::UnsupportedOperand).
#[derive(Debug, Clone)]
pub enum Operand<'a, E: RingElement> {
	/// Another bit-vector over the same ring.
	Vector(&'a SymbolicBitVector<E>),
	/// A single ring element, broadcast to every bit.
	Element(&'a E),
	/// A non-negative integer constant, injected bit by bit.
	Constant(Constant),
}

impl<'a, E: RingElement> Operand<'a, E> {
	pub fn element(element: &'a E) -> Self {
		Self::Element(element)
	}

	pub(crate) fn kind(&self) -> &'static str {
		match self {
			Self::Vector(_) => "bit-vector",
			Self::Element(_) => "ring element",
			Self::Constant(_) => "integer constant",
		}
	}
}

impl<'a, E: RingElement> From<&'a SymbolicBitVector<E>> for Operand<'a, E> {
	fn from(vector: &'a SymbolicBitVector<E>) -> Self {
		Self::Vector(vector)
	}
}

impl<E: RingElement> From<Constant> for Operand<'_, E> {
	fn from(constant: Constant) -> Self {
		Self::Constant(constant)
	}
}

macro_rules! impl_from_unsigned {
	($($typ:ty),*) => {
		$(
			impl<E: RingElement> From<$typ> for Operand<'_, E> {
				fn from(val: $typ) -> Self {
					Self::Constant(Constant::from(val))
				}
			}
		)*
	};
}

impl_from_unsigned!(bool, u8, u16, u32, u64, u128, usize);
