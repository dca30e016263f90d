// Copyright 2026 The bsym Developers

use std::{iter, slice};

use bsym_ring::{Ring, RingElement};
use itertools::{EitherOrBoth, Itertools};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::{Constant, Error, Operand};

/// A fixed-width bit-vector whose bits are elements of a ring.
///
/// Bit 0 is the least significant bit. Each bit is a ring element rather than a concrete value,
/// so running a bit-manipulation algorithm on a vector of generators yields every output bit as
/// a formula over those generators. Addition in the ring plays the role of XOR and
/// multiplication the role of AND.
///
/// Values are immutable: every operation allocates and returns a new vector.
///
/// # Truncation
///
/// The width of a result is always the largest width among the operands (for constants, their
/// bit length). Bits that would land at an index greater than or equal to that width are
/// discarded, e.g. by left shifts and by multiplication, which is therefore multiplication
/// modulo $x^{\text{width}}$. Truncation is never reported as an error.
#[derive(Debug, Clone)]
pub struct SymbolicBitVector<E: RingElement> {
	ring: E::Ring,
	bits: Vec<E>,
}

impl<E: RingElement> SymbolicBitVector<E> {
	/// Creates a vector of `width` bits.
	///
	/// If `ring` is `None` it is taken from the first bit.
	///
	/// # Throws
	///
	/// * `Shape` if `width` is zero or `bits.len() != width`.
	/// * `RingMismatch` if some bit does not belong to the ring.
	pub fn new(width: usize, bits: Vec<E>, ring: Option<E::Ring>) -> Result<Self, Error> {
		if width == 0 || bits.len() != width {
			return Err(Error::Shape {
				width,
				n_bits: bits.len(),
			});
		}

		let ring = ring.unwrap_or_else(|| bits[0].parent());
		if bits.iter().any(|bit| bit.parent() != ring) {
			return Err(Error::RingMismatch);
		}
		Ok(Self { ring, bits })
	}

	/// Creates a vector whose width is the number of bits, inferring the ring from the bits.
	pub fn from_bits(bits: Vec<E>) -> Result<Self, Error> {
		Self::new(bits.len(), bits, None)
	}

	/// Creates the all-zero vector of the given width.
	pub fn zero(width: usize, ring: E::Ring) -> Result<Self, Error> {
		if width == 0 {
			return Err(Error::Shape { width, n_bits: 0 });
		}
		Ok(Self::zeros(ring, width))
	}

	/// Creates a vector holding the low `width` bits of an integer constant.
	pub fn constant(width: usize, value: impl Into<Constant>, ring: E::Ring) -> Result<Self, Error> {
		if width == 0 {
			return Err(Error::Shape { width, n_bits: 0 });
		}
		let value = value.into();
		let bits = (0..width).map(|i| ring.from_bit(value.bit(i))).collect();
		Ok(Self { ring, bits })
	}

	fn zeros(ring: E::Ring, width: usize) -> Self {
		let bits = vec![ring.zero(); width];
		Self { ring, bits }
	}

	pub fn width(&self) -> usize {
		self.bits.len()
	}

	pub fn ring(&self) -> &E::Ring {
		&self.ring
	}

	pub fn bits(&self) -> &[E] {
		&self.bits
	}

	/// Returns bit `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= self.width()`.
	pub fn bit(&self, index: usize) -> &E {
		&self.bits[index]
	}

	pub fn iter(&self) -> slice::Iter<'_, E> {
		self.bits.iter()
	}

	pub fn into_bits(self) -> Vec<E> {
		self.bits
	}

	/// Returns a copy of the vector with a different width.
	///
	/// Narrowing keeps the low `width` bits; widening pads with zeros at the top.
	///
	/// # Throws
	///
	/// * `Shape` if `width` is zero.
	pub fn resized(&self, width: usize) -> Result<Self, Error> {
		if width == 0 {
			return Err(Error::Shape { width, n_bits: 0 });
		}
		Ok(self.resize_to(width))
	}

	fn resize_to(&self, width: usize) -> Self {
		if width < self.width() {
			tracing::trace!(from = self.width(), to = width, "truncating bit-vector");
		}
		let mut bits = Vec::with_capacity(width);
		bits.extend(self.bits.iter().take(width).cloned());
		bits.resize(width, self.ring.zero());
		Self {
			ring: self.ring.clone(),
			bits,
		}
	}

	/// Bitwise exclusive or.
	///
	/// Accepts a vector over the same ring or an integer constant. The shorter operand is
	/// zero-extended.
	///
	/// # Throws
	///
	/// * `RingMismatch` if the operand is a vector over another ring.
	/// * `UnsupportedOperand` if the operand is a ring element.
	pub fn xor<'a>(&self, rhs: impl Into<Operand<'a, E>>) -> Result<Self, Error> {
		match rhs.into() {
			Operand::Vector(rhs) => {
				self.check_same_ring(rhs)?;
				Ok(self.zip_with(rhs, |a, b| a.clone() + b))
			}
			Operand::Constant(constant) => {
				let width = self.width().max(constant.bit_length());
				let bits = (0..width)
					.map(|i| self.bit_or_zero(i) + self.ring.from_bit(constant.bit(i)))
					.collect();
				Ok(Self {
					ring: self.ring.clone(),
					bits,
				})
			}
			operand @ Operand::Element(_) => Err(unsupported("xor", &operand)),
		}
	}

	/// Bitwise and.
	///
	/// For a vector operand each result bit is the ring product of the zero-extended operand
	/// bits. For a constant operand the constant acts as a mask: bits where the constant is set
	/// are copied, all others are zero, including positions past the vector's own width.
	///
	/// # Throws
	///
	/// * `RingMismatch` if the operand is a vector over another ring.
	/// * `UnsupportedOperand` if the operand is a ring element.
	pub fn and<'a>(&self, rhs: impl Into<Operand<'a, E>>) -> Result<Self, Error> {
		match rhs.into() {
			Operand::Vector(rhs) => {
				self.check_same_ring(rhs)?;
				Ok(self.zip_with(rhs, |a, b| a.clone() * b))
			}
			Operand::Constant(mask) => {
				let width = self.width().max(mask.bit_length());
				let bits = (0..width)
					.map(|i| match self.bits.get(i) {
						Some(bit) if mask.bit(i) => bit.clone(),
						_ => self.ring.zero(),
					})
					.collect();
				Ok(Self {
					ring: self.ring.clone(),
					bits,
				})
			}
			operand @ Operand::Element(_) => Err(unsupported("and", &operand)),
		}
	}

	/// Multiplication.
	///
	/// * By a ring element: every bit is multiplied by the element.
	/// * By a vector: the product of the two operands as polynomials in $x$ with ring
	///   coefficients, truncated to the larger width, computed by shift-and-add.
	/// * By a constant: the sum of the vector shifted by each set bit position of the constant,
	///   truncated to `max(width, bit_length)`.
	///
	/// # Throws
	///
	/// * `RingMismatch` if the operand is a vector over another ring.
	/// * `UnsupportedOperand` if the operand is an element of another ring.
	#[allow(clippy::should_implement_trait)]
	pub fn mul<'a>(&self, rhs: impl Into<Operand<'a, E>>) -> Result<Self, Error> {
		match rhs.into() {
			Operand::Element(scalar) => {
				if scalar.parent() != self.ring {
					return Err(Error::UnsupportedOperand {
						op: "mul",
						reason: "ring element of a different ring",
					});
				}
				Ok(self.scale(scalar))
			}
			Operand::Vector(rhs) => {
				self.check_same_ring(rhs)?;
				let width = self.width().max(rhs.width());
				let _span = tracing::debug_span!("mul_vector", width).entered();

				let lhs = self.resize_to(width);
				let rhs = rhs.resize_to(width);
				Ok(shift_and_add(&lhs, |i| Some(lhs.shifted_left(i).scale(&rhs.bits[i]))))
			}
			Operand::Constant(constant) => {
				let width = self.width().max(constant.bit_length());
				let _span = tracing::debug_span!("mul_constant", width).entered();

				let lhs = self.resize_to(width);
				Ok(shift_and_add(&lhs, |i| constant.bit(i).then(|| lhs.shifted_left(i))))
			}
		}
	}

	fn scale(&self, scalar: &E) -> Self {
		Self {
			ring: self.ring.clone(),
			bits: self.bits.iter().map(|bit| scalar.clone() * bit).collect(),
		}
	}

	pub(crate) fn shifted_left(&self, shift: usize) -> Self {
		let width = self.width();
		let shift = shift.min(width);
		let bits = iter::repeat_n(self.ring.zero(), shift)
			.chain(self.bits[..width - shift].iter().cloned())
			.collect();
		Self {
			ring: self.ring.clone(),
			bits,
		}
	}

	pub(crate) fn shifted_right(&self, shift: usize) -> Self {
		let width = self.width();
		let shift = shift.min(width);
		let bits = self.bits[shift..]
			.iter()
			.cloned()
			.chain(iter::repeat_n(self.ring.zero(), shift))
			.collect();
		Self {
			ring: self.ring.clone(),
			bits,
		}
	}

	pub(crate) fn negated(&self) -> Self {
		let one = self.ring.one();
		Self {
			ring: self.ring.clone(),
			bits: self.bits.iter().map(|bit| one.clone() + bit).collect(),
		}
	}

	fn bit_or_zero(&self, index: usize) -> E {
		self.bits
			.get(index)
			.cloned()
			.unwrap_or_else(|| self.ring.zero())
	}

	/// Combines zero-extended operands bit by bit into a vector of the larger width.
	fn zip_with(&self, rhs: &Self, f: impl Fn(&E, &E) -> E) -> Self {
		let zero = self.ring.zero();
		let bits = self
			.bits
			.iter()
			.zip_longest(&rhs.bits)
			.map(|pair| match pair {
				EitherOrBoth::Both(a, b) => f(a, b),
				EitherOrBoth::Left(a) => f(a, &zero),
				EitherOrBoth::Right(b) => f(&zero, b),
			})
			.collect();
		Self {
			ring: self.ring.clone(),
			bits,
		}
	}

	/// XORs an equal-width vector over the same ring into `self`.
	fn accumulate(&mut self, rhs: &Self) {
		debug_assert_eq!(self.width(), rhs.width());
		for (acc, bit) in self.bits.iter_mut().zip(&rhs.bits) {
			*acc += bit;
		}
	}

	fn check_same_ring(&self, rhs: &Self) -> Result<(), Error> {
		if self.ring != rhs.ring {
			return Err(Error::RingMismatch);
		}
		Ok(())
	}
}

fn unsupported<E: RingElement>(op: &'static str, operand: &Operand<'_, E>) -> Error {
	Error::UnsupportedOperand {
		op,
		reason: operand.kind(),
	}
}

/// Sums the partial products `partial_product(i)` for every bit position `i` of `lhs`.
///
/// Partial products are independent, so they are computed in parallel and reduced by XOR.
#[cfg(feature = "rayon")]
fn shift_and_add<E, F>(lhs: &SymbolicBitVector<E>, partial_product: F) -> SymbolicBitVector<E>
where
	E: RingElement,
	F: Fn(usize) -> Option<SymbolicBitVector<E>> + Send + Sync,
{
	let zero = SymbolicBitVector::<E>::zeros(lhs.ring.clone(), lhs.width());
	(0..lhs.width())
		.into_par_iter()
		.filter_map(partial_product)
		.reduce(
			|| zero.clone(),
			|mut acc, partial| {
				acc.accumulate(&partial);
				acc
			},
		)
}

/// Sums the partial products `partial_product(i)` for every bit position `i` of `lhs`.
#[cfg(not(feature = "rayon"))]
fn shift_and_add<E, F>(lhs: &SymbolicBitVector<E>, partial_product: F) -> SymbolicBitVector<E>
where
	E: RingElement,
	F: Fn(usize) -> Option<SymbolicBitVector<E>>,
{
	let zero = SymbolicBitVector::<E>::zeros(lhs.ring.clone(), lhs.width());
	(0..lhs.width())
		.filter_map(partial_product)
		.fold(zero, |mut acc, partial| {
			acc.accumulate(&partial);
			acc
		})
}

impl<E: RingElement> PartialEq for SymbolicBitVector<E> {
	/// Vectors are equal when they share a ring and agree on every bit after zero-extending the
	/// shorter one.
	fn eq(&self, other: &Self) -> bool {
		self.ring == other.ring
			&& self
				.bits
				.iter()
				.zip_longest(&other.bits)
				.all(|pair| match pair {
					EitherOrBoth::Both(a, b) => a == b,
					EitherOrBoth::Left(bit) | EitherOrBoth::Right(bit) => bit.is_zero(),
				})
	}
}

impl<E: RingElement> Eq for SymbolicBitVector<E> {}

impl<'a, E: RingElement> IntoIterator for &'a SymbolicBitVector<E> {
	type Item = &'a E;
	type IntoIter = slice::Iter<'a, E>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use bsym_ring::{BooleanPolynomial, BooleanPolynomialRing, Gf2, Gf2Ring};
	use proptest::prelude::*;
	use rand::{SeedableRng, rngs::StdRng};

	use super::*;
	use crate::test_utils::{boolean_ring, random_vector, truncated_convolution};

	type Vector = SymbolicBitVector<BooleanPolynomial>;

	fn generators(ring: &BooleanPolynomialRing) -> Vector {
		SymbolicBitVector::from_bits(ring.gens()).unwrap()
	}

	fn concrete(width: usize, value: u64) -> SymbolicBitVector<Gf2> {
		SymbolicBitVector::constant(width, value, Gf2Ring).unwrap()
	}

	#[test]
	fn test_shape_violations() {
		let ring = boolean_ring(4);
		assert!(matches!(
			SymbolicBitVector::new(5, ring.gens(), None),
			Err(Error::Shape { width: 5, n_bits: 4 })
		));
		assert!(matches!(
			Vector::new(0, vec![], Some(ring.clone())),
			Err(Error::Shape { width: 0, n_bits: 0 })
		));
		assert!(matches!(
			Vector::from_bits(vec![]),
			Err(Error::Shape { .. })
		));
		assert!(matches!(Vector::zero(0, ring.clone()), Err(Error::Shape { .. })));
		assert!(matches!(generators(&ring).resized(0), Err(Error::Shape { .. })));
	}

	#[test]
	fn test_ring_is_inferred_and_checked() {
		let ring = boolean_ring(3);
		let other = boolean_ring(3);
		let v = generators(&ring);
		assert_eq!(v.ring(), &ring);
		assert_eq!(v.width(), 3);

		assert!(matches!(
			SymbolicBitVector::new(3, ring.gens(), Some(other)),
			Err(Error::RingMismatch)
		));
	}

	#[test]
	fn test_ring_mismatch() {
		let a = generators(&boolean_ring(4));
		let b = generators(&boolean_ring(4));

		assert!(matches!(a.xor(&b), Err(Error::RingMismatch)));
		assert!(matches!(a.and(&b), Err(Error::RingMismatch)));
		assert!(matches!(a.mul(&b), Err(Error::RingMismatch)));
		assert_ne!(a, b);
	}

	#[test]
	fn test_unsupported_operands() {
		let ring = boolean_ring(2);
		let v = generators(&ring);
		let x0 = ring.generator(0);
		let foreign = boolean_ring(2).generator(0);

		assert!(matches!(
			v.xor(Operand::element(&x0)),
			Err(Error::UnsupportedOperand { op: "xor", .. })
		));
		assert!(matches!(
			v.and(Operand::element(&x0)),
			Err(Error::UnsupportedOperand { op: "and", .. })
		));
		assert!(matches!(
			v.mul(Operand::element(&foreign)),
			Err(Error::UnsupportedOperand { op: "mul", .. })
		));
	}

	#[test]
	fn test_resized() {
		let ring = boolean_ring(4);
		let v = generators(&ring);

		let narrow = v.resized(2).unwrap();
		assert_eq!(narrow.bits(), &ring.gens()[..2]);

		let wide = v.resized(6).unwrap();
		assert_eq!(wide.width(), 6);
		assert_eq!(wide.bits()[..4], ring.gens()[..]);
		assert!(wide.bits()[4..].iter().all(RingElement::is_zero));

		// Zero-extension does not change the value, truncation does.
		assert_eq!(wide, v);
		assert_ne!(narrow, v);
	}

	#[test]
	fn test_equality_zero_extends() {
		let ring = boolean_ring(2);
		let v = generators(&ring);
		assert_eq!(v.resized(5).unwrap(), v);
		assert_eq!(v, v.resized(5).unwrap());
		assert_eq!(Vector::zero(1, ring.clone()).unwrap(), Vector::zero(9, ring).unwrap());
	}

	#[test]
	fn test_xor_constant_widens() {
		let ring = boolean_ring(2);
		let v = generators(&ring);
		let x = v.xor(0b1001u8).unwrap();
		assert_eq!(x.width(), 4);
		assert_eq!(x.bit(0), &(ring.one() + &ring.generator(0)));
		assert_eq!(x.bit(1), &ring.generator(1));
		assert!(x.bit(2).is_zero());
		assert_eq!(x.bit(3), &ring.one());
	}

	#[test]
	fn test_and_constant_masks() {
		let ring = boolean_ring(3);
		let v = generators(&ring);
		let masked = v.and(0b11010u8).unwrap();
		assert_eq!(masked.width(), 5);
		assert!(masked.bit(0).is_zero());
		assert_eq!(masked.bit(1), &ring.generator(1));
		assert!(masked.bit(2).is_zero());
		// Mask bits past the vector's width select nothing.
		assert!(masked.bit(3).is_zero());
		assert!(masked.bit(4).is_zero());
	}

	#[test]
	fn test_and_vectors_multiplies_bits() {
		let ring = boolean_ring(4);
		let gens = ring.gens();
		let a = SymbolicBitVector::from_bits(gens[..2].to_vec()).unwrap();
		let b = SymbolicBitVector::from_bits(gens[2..].to_vec()).unwrap();
		let c = a.and(&b).unwrap();
		assert_eq!(c.bit(0), &(gens[0].clone() * &gens[2]));
		assert_eq!(c.bit(1), &(gens[1].clone() * &gens[3]));

		let short = SymbolicBitVector::from_bits(vec![gens[0].clone()]).unwrap();
		let d = short.and(&a).unwrap();
		assert_eq!(d.width(), 2);
		assert_eq!(d.bit(0), &gens[0]);
		assert!(d.bit(1).is_zero());
	}

	#[test]
	fn test_shift_boundaries() {
		let ring = boolean_ring(4);
		let v = generators(&ring);
		let zero = Vector::zero(4, ring.clone()).unwrap();

		let shifted = &v << 1;
		assert_eq!(shifted.width(), 4);
		assert!(shifted.bit(0).is_zero());
		assert_eq!(shifted.bits()[1..], ring.gens()[..3]);

		let shifted = &v >> 1;
		assert_eq!(shifted.bits()[..3], ring.gens()[1..]);
		assert!(shifted.bit(3).is_zero());

		assert_eq!(&v << 0, v);
		assert_eq!(&v >> 0, v);
		for shift in [4, 5, 100] {
			assert_eq!((&v << shift).width(), 4);
			assert_eq!(&v << shift, zero);
			assert_eq!((&v >> shift).width(), 4);
			assert_eq!(&v >> shift, zero);
		}
	}

	#[test]
	fn test_mul_by_scalar() {
		let ring = boolean_ring(3);
		let v = generators(&ring);
		let x2 = ring.generator(2);
		let scaled = v.mul(Operand::element(&x2)).unwrap();
		assert_eq!(scaled.width(), 3);
		assert_eq!(scaled.bit(0), &(ring.generator(0) * &x2));
		assert_eq!(scaled.bit(2), &x2);
	}

	#[test]
	fn test_mul_by_constants() {
		let ring = boolean_ring(4);
		let v = generators(&ring);
		assert_eq!(v.mul(1u8).unwrap(), v);
		assert_eq!(v.mul(0u8).unwrap(), Vector::zero(4, ring.clone()).unwrap());
		assert_eq!(v.mul(3u8).unwrap(), v.xor(&(&v << 1)).unwrap());
		assert_eq!(v.mul(4u8).unwrap(), &v << 2);

		// The result widens to the constant's bit length before shifting.
		let wide = v.mul(0b100000u8).unwrap();
		assert_eq!(wide.width(), 6);
		assert_eq!(wide.bit(5), &ring.generator(0));
	}

	#[test]
	fn test_concrete_mul_is_carryless() {
		// Over GF(2) the vector product is carry-less multiplication modulo 2^width.
		let product = concrete(8, 0b1011).mul(&concrete(8, 0b0110)).unwrap();
		assert_eq!(product, concrete(8, 0b111010));

		let product = concrete(4, 0b1011).mul(&concrete(4, 0b0110)).unwrap();
		assert_eq!(product, concrete(4, 0b1010));

		let product = concrete(4, 0b1011).mul(0b0110u8).unwrap();
		assert_eq!(product.bits(), concrete(4, 0b1010).bits());
		assert_eq!(product.bits()[0], Gf2::ZERO);
	}

	proptest! {
		#[test]
		fn test_resize_laws(seed in any::<u64>(), width in 1usize..24, new_width in 1usize..24) {
			let mut rng = StdRng::seed_from_u64(seed);
			let ring = boolean_ring(4);
			let v = random_vector(&mut rng, &ring, width);

			let resized = v.resized(new_width).unwrap();
			prop_assert_eq!(resized.width(), new_width);
			prop_assert_eq!(resized.resized(new_width).unwrap(), resized.clone());
			let round_trip = v.resized(v.width()).unwrap();
			prop_assert_eq!(round_trip.bits(), v.bits());
		}

		#[test]
		fn test_negation_laws(seed in any::<u64>(), width in 1usize..24) {
			let mut rng = StdRng::seed_from_u64(seed);
			let ring = boolean_ring(4);
			let v = random_vector(&mut rng, &ring, width);

			let negated = !&v;
			prop_assert_eq!(negated.width(), width);
			prop_assert_eq!(!negated.clone(), v.clone());
			prop_assert_eq!(v.xor(&negated).unwrap(), Vector::constant(width, Constant::ones(width), ring).unwrap());
		}

		#[test]
		fn test_xor_laws(seed in any::<u64>(), width in 1usize..24) {
			let mut rng = StdRng::seed_from_u64(seed);
			let ring = boolean_ring(4);
			let v = random_vector(&mut rng, &ring, width);
			let w = random_vector(&mut rng, &ring, width / 2 + 1);

			let zero = Vector::zero(width, ring).unwrap();
			let self_xor = v.xor(&v).unwrap();
			prop_assert_eq!(self_xor.width(), width);
			prop_assert!(self_xor.bits().iter().all(RingElement::is_zero));
			prop_assert_eq!(self_xor, zero);
			let with_zero = v.xor(0u8).unwrap();
			let resized = v.resized(width.max(1)).unwrap();
			prop_assert_eq!(with_zero.bits(), resized.bits());
			prop_assert_eq!(v.xor(&w).unwrap(), w.xor(&v).unwrap());
			prop_assert_eq!(v.xor(&w).unwrap().width(), width);
		}

		#[test]
		fn test_and_with_all_ones(seed in any::<u64>(), width in 1usize..100) {
			let mut rng = StdRng::seed_from_u64(seed);
			let ring = boolean_ring(4);
			let v = random_vector(&mut rng, &ring, width);
			let masked = v.and(Constant::ones(width)).unwrap();
			prop_assert_eq!(masked.width(), width);
			prop_assert_eq!(masked.bits(), v.bits());
		}

		#[test]
		fn test_shift_matches_constant_mul(seed in any::<u64>(), width in 1usize..24, shift in 0usize..30) {
			let mut rng = StdRng::seed_from_u64(seed);
			let ring = boolean_ring(4);
			let v = random_vector(&mut rng, &ring, width);
			let shifted = &v << shift;
			prop_assert_eq!(shifted.width(), width);
			if shift >= width {
				prop_assert_eq!(shifted, Vector::zero(width, ring).unwrap());
			} else {
				let power = Constant::from_bits((0..=shift).map(|i| i == shift));
				prop_assert_eq!(shifted, v.mul(power).unwrap().resized(width).unwrap());
			}
		}

		#[test]
		fn test_mul_matches_truncated_convolution(
			seed in any::<u64>(),
			lhs_width in 1usize..20,
			rhs_width in 1usize..20,
		) {
			let mut rng = StdRng::seed_from_u64(seed);
			let ring = boolean_ring(5);
			let a = random_vector(&mut rng, &ring, lhs_width);
			let b = random_vector(&mut rng, &ring, rhs_width);

			let product = a.mul(&b).unwrap();
			prop_assert_eq!(product.width(), lhs_width.max(rhs_width));
			let expected = truncated_convolution(&a, &b);
			prop_assert_eq!(&product, &expected);
			prop_assert_eq!(product, b.mul(&a).unwrap());
		}

		#[test]
		fn test_constant_mul_matches_vector_mul(seed in any::<u64>(), width in 1usize..24, value in any::<u32>()) {
			let mut rng = StdRng::seed_from_u64(seed);
			let ring = boolean_ring(4);
			let v = random_vector(&mut rng, &ring, width);

			let constant = Constant::from(value);
			let by_constant = v.mul(constant.clone()).unwrap();
			let full_width = width.max(constant.bit_length());
			prop_assert_eq!(by_constant.width(), full_width);

			let as_vector = Vector::constant(full_width, constant, ring).unwrap();
			prop_assert_eq!(by_constant, v.mul(&as_vector).unwrap());
		}
	}
}
