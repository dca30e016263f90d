// Copyright 2026 The bsym Developers

use std::fmt::{self, Display, Formatter};

use smallvec::SmallVec;

use crate::Error;

const LIMB_BITS: usize = u64::BITS as usize;

/// A non-negative integer constant used as an operand of bit-vector operations.
///
/// The value is stored as little-endian `u64` limbs without high zero limbs, so any bit length
/// is representable. Only bit access is provided; constants are injected bit by bit into the
/// ring and are never used for arithmetic on their own.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
	limbs: SmallVec<[u64; 2]>,
}

impl Constant {
	pub fn zero() -> Self {
		Self::default()
	}

	/// Creates a constant from little-endian `u64` limbs.
	pub fn from_limbs(limbs: impl AsRef<[u64]>) -> Self {
		let mut limbs = SmallVec::from_slice(limbs.as_ref());
		while limbs.last() == Some(&0) {
			limbs.pop();
		}
		Self { limbs }
	}

	/// The constant $2^n - 1$, whose low `n` bits are all set.
	pub fn ones(n_bits: usize) -> Self {
		let mut limbs: SmallVec<[u64; 2]> = SmallVec::from_elem(u64::MAX, n_bits / LIMB_BITS);
		if n_bits % LIMB_BITS != 0 {
			limbs.push((1 << (n_bits % LIMB_BITS)) - 1);
		}
		Self { limbs }
	}

	pub fn is_zero(&self) -> bool {
		self.limbs.is_empty()
	}

	/// The number of bits in the binary representation, zero for the constant zero.
	pub fn bit_length(&self) -> usize {
		match self.limbs.last() {
			Some(top) => {
				(self.limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
			}
			None => 0,
		}
	}

	/// Returns bit `index` of the binary representation. Bits past the bit length are zero.
	pub fn bit(&self, index: usize) -> bool {
		self.limbs
			.get(index / LIMB_BITS)
			.is_some_and(|limb| (limb >> (index % LIMB_BITS)) & 1 == 1)
	}

	/// Iterates the bits from least significant up to the bit length.
	pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.bit_length()).map(|i| self.bit(i))
	}

	pub fn limbs(&self) -> &[u64] {
		&self.limbs
	}

	/// Returns the value as a `u128`, or `None` if it does not fit.
	pub fn to_u128(&self) -> Option<u128> {
		match self.limbs.as_slice() {
			[] => Some(0),
			[lo] => Some(*lo as u128),
			[lo, hi] => Some(((*hi as u128) << 64) | *lo as u128),
			_ => None,
		}
	}

	/// Builds a constant from its bits, least significant first.
	pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
		let mut limbs = SmallVec::<[u64; 2]>::new();
		for (i, bit) in bits.into_iter().enumerate() {
			if i % LIMB_BITS == 0 {
				limbs.push(0);
			}
			if bit {
				let last = limbs.len() - 1;
				limbs[last] |= 1 << (i % LIMB_BITS);
			}
		}
		Self::from_limbs(limbs)
	}
}

macro_rules! impl_from_unsigned {
	($($typ:ty),*) => {
		$(
			impl From<$typ> for Constant {
				fn from(val: $typ) -> Self {
					Self::from_limbs([val as u64])
				}
			}
		)*
	};
}

impl_from_unsigned!(bool, u8, u16, u32, u64, usize);

impl From<u128> for Constant {
	fn from(val: u128) -> Self {
		Self::from_limbs([val as u64, (val >> 64) as u64])
	}
}

macro_rules! impl_try_from_signed {
	($($typ:ty),*) => {
		$(
			impl TryFrom<$typ> for Constant {
				type Error = Error;

				fn try_from(val: $typ) -> Result<Self, Self::Error> {
					if val < 0 {
						return Err(Error::UnsupportedOperand {
							op: "constant",
							reason: "integer constants must be non-negative",
						});
					}
					Ok(Self::from(val as u128))
				}
			}
		)*
	};
}

impl_try_from_signed!(i8, i16, i32, i64, i128, isize);

impl Display for Constant {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.limbs.is_empty() {
			return write!(f, "0x0");
		}
		write!(f, "0x")?;
		for (i, limb) in self.limbs.iter().rev().enumerate() {
			if i == 0 {
				write!(f, "{limb:x}")?;
			} else {
				write!(f, "{limb:016x}")?;
			}
		}
		Ok(())
	}
}
