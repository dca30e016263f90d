// Copyright 2026 The bsym Developers

//! Square-free monomials over the generators of a Boolean polynomial ring.

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	ops::Mul,
};

use smallvec::{SmallVec, smallvec};

const LIMB_BITS: usize = u64::BITS as usize;

/// A product of distinct generators, $x_{i_1} x_{i_2} \cdots x_{i_k}$.
///
/// Because $x^2 = x$ in a Boolean ring, a monomial is fully described by the *set* of
/// generator indices it contains. The set is stored as a little-endian bitset of `u64` limbs
/// with no trailing zero limbs, so structurally equal monomials have identical representations.
///
/// Monomials are ordered by degree first and then by their sorted generator indices, with a
/// lower index ranking higher. The constant monomial `1` is the smallest monomial.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
	limbs: SmallVec<[u64; 1]>,
}

impl Monomial {
	/// The empty product, i.e. the constant `1`.
	pub fn one() -> Self {
		Self::default()
	}

	/// The monomial consisting of the single generator `index`.
	pub fn variable(index: usize) -> Self {
		let mut limbs: SmallVec<[u64; 1]> = smallvec![0; index / LIMB_BITS + 1];
		limbs[index / LIMB_BITS] = 1 << (index % LIMB_BITS);
		Self { limbs }
	}

	/// Builds the product of the given generators. Repeated indices collapse.
	pub fn from_variables(indices: impl IntoIterator<Item = usize>) -> Self {
		indices
			.into_iter()
			.fold(Self::one(), |acc, index| acc * &Self::variable(index))
	}

	/// Returns true iff this is the constant monomial `1`.
	pub fn is_one(&self) -> bool {
		self.limbs.is_empty()
	}

	/// The number of generators in the product.
	pub fn degree(&self) -> usize {
		self.limbs.iter().map(|limb| limb.count_ones() as usize).sum()
	}

	pub fn contains(&self, index: usize) -> bool {
		self.limbs
			.get(index / LIMB_BITS)
			.is_some_and(|limb| (limb >> (index % LIMB_BITS)) & 1 == 1)
	}

	/// Iterates the generator indices of this monomial in increasing order.
	pub fn variables(&self) -> impl Iterator<Item = usize> + '_ {
		self.limbs.iter().enumerate().flat_map(|(limb_index, &limb)| {
			(0..LIMB_BITS)
				.filter(move |bit| (limb >> bit) & 1 == 1)
				.map(move |bit| limb_index * LIMB_BITS + bit)
		})
	}

	/// Evaluates the monomial at a point of $\mathbb{F}_2^n$.
	///
	/// Indices beyond the end of `assignment` are treated as zero.
	pub fn evaluate(&self, assignment: &[bool]) -> bool {
		self.variables()
			.all(|index| assignment.get(index).copied().unwrap_or(false))
	}

	fn normalize(mut self) -> Self {
		while self.limbs.last() == Some(&0) {
			self.limbs.pop();
		}
		self
	}
}

impl Mul<&Monomial> for Monomial {
	type Output = Monomial;

	fn mul(mut self, rhs: &Monomial) -> Self::Output {
		if self.limbs.len() < rhs.limbs.len() {
			self.limbs.resize(rhs.limbs.len(), 0);
		}
		for (lhs, rhs) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
			*lhs |= rhs;
		}
		self.normalize()
	}
}

impl Mul<&Monomial> for &Monomial {
	type Output = Monomial;

	fn mul(self, rhs: &Monomial) -> Self::Output {
		self.clone() * rhs
	}
}

impl Ord for Monomial {
	fn cmp(&self, other: &Self) -> Ordering {
		self.degree().cmp(&other.degree()).then_with(|| {
			// A lower first index ranks higher, matching degree-lexicographic order with
			// x0 > x1 > ... > x{n-1}.
			other.variables().cmp(self.variables())
		})
	}
}

impl PartialOrd for Monomial {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Display for Monomial {
	/// Formats the monomial with default generator names `x0`, `x1`, ...
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.is_one() {
			return write!(f, "1");
		}
		for (i, index) in self.variables().enumerate() {
			if i > 0 {
				write!(f, "*")?;
			}
			write!(f, "x{index}")?;
		}
		Ok(())
	}
}
