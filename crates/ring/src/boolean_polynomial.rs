// Copyright 2026 The bsym Developers

//! The Boolean polynomial ring $\mathbb{F}_2[x_0, \ldots, x_{n-1}] / (x_i^2 + x_i)$.

use std::{
	collections::{BTreeSet, HashMap},
	fmt::{self, Debug, Display, Formatter},
	ops::{Add, AddAssign, Mul, MulAssign},
	sync::Arc,
};

use rand::Rng;

use crate::{Error, Monomial, Ring, RingElement, util::partition};

struct RingData {
	names: Vec<String>,
	index: HashMap<String, usize>,
}

/// A Boolean polynomial ring with named generators.
///
/// The ring is a shared handle: clones refer to the same ring, while two calls to
/// [`BooleanPolynomialRing::new`] produce distinct rings even with the same generator names.
#[derive(Clone)]
pub struct BooleanPolynomialRing(Arc<RingData>);

impl BooleanPolynomialRing {
	/// Creates a ring with the given generator names, in order.
	///
	/// # Throws
	///
	/// * `InvalidGeneratorName` if a name is empty or contains whitespace, `*` or `+`.
	/// * `DuplicateGenerator` if a name occurs twice.
	pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, Error> {
		let names = names.into_iter().map(Into::into).collect::<Vec<String>>();
		let mut index = HashMap::with_capacity(names.len());
		for (i, name) in names.iter().enumerate() {
			let is_reserved = |c: char| c.is_whitespace() || c == '*' || c == '+';
			if name.is_empty() || name.contains(is_reserved) {
				return Err(Error::InvalidGeneratorName(name.clone()));
			}
			if index.insert(name.clone(), i).is_some() {
				return Err(Error::DuplicateGenerator(name.clone()));
			}
		}
		Ok(Self(Arc::new(RingData { names, index })))
	}

	/// Creates a ring from groups of indexed generators.
	///
	/// `[("x", 3), ("y", 2)]` yields the generators `x0, x1, x2, y0, y1`.
	pub fn with_generators(groups: &[(&str, usize)]) -> Result<Self, Error> {
		Self::new(
			groups
				.iter()
				.flat_map(|&(prefix, count)| (0..count).map(move |i| format!("{prefix}{i}"))),
		)
	}

	pub fn n_gens(&self) -> usize {
		self.0.names.len()
	}

	/// Returns the generator with the given index.
	///
	/// # Panics
	///
	/// Panics if `index >= self.n_gens()`.
	pub fn generator(&self, index: usize) -> BooleanPolynomial {
		assert!(
			index < self.n_gens(),
			"generator index {index} out of range for {} generators",
			self.n_gens()
		);
		self.monomial(Monomial::variable(index))
	}

	/// Returns all generators, in order.
	pub fn gens(&self) -> Vec<BooleanPolynomial> {
		(0..self.n_gens()).map(|i| self.generator(i)).collect()
	}

	pub fn generator_by_name(&self, name: &str) -> Option<BooleanPolynomial> {
		self.0.index.get(name).map(|&i| self.generator(i))
	}

	/// Returns the name of the generator with the given index.
	///
	/// # Panics
	///
	/// Panics if `index >= self.n_gens()`.
	pub fn generator_name(&self, index: usize) -> &str {
		&self.0.names[index]
	}

	/// Splits the generators into consecutive named groups.
	///
	/// # Throws
	///
	/// * `PartitionMismatch` if the group sizes do not add up to the number of generators.
	pub fn gens_by_prefix(
		&self,
		groups: &[(&str, usize)],
	) -> Result<HashMap<String, Vec<BooleanPolynomial>>, Error> {
		let sizes = groups.iter().map(|&(_, size)| size).collect::<Vec<_>>();
		let gens = self.gens();
		let parts = partition(&gens, &sizes).ok_or_else(|| Error::PartitionMismatch {
			expected: self.n_gens(),
			actual: sizes.iter().sum(),
		})?;
		Ok(groups
			.iter()
			.zip(parts)
			.map(|(&(prefix, _), part)| (prefix.to_string(), part.to_vec()))
			.collect())
	}

	/// Lifts a monomial into the ring.
	///
	/// # Panics
	///
	/// Panics if the monomial mentions a generator index not in this ring.
	pub fn monomial(&self, monomial: Monomial) -> BooleanPolynomial {
		assert!(
			monomial.variables().all(|i| i < self.n_gens()),
			"monomial {monomial} mentions a generator outside of the ring"
		);
		BooleanPolynomial {
			ring: self.clone(),
			terms: BTreeSet::from([monomial]),
		}
	}

	/// Sums the given monomials. Monomials that occur an even number of times cancel.
	pub fn from_monomials(&self, monomials: impl IntoIterator<Item = Monomial>) -> BooleanPolynomial {
		monomials
			.into_iter()
			.fold(self.zero(), |mut acc, monomial| {
				assert!(
					monomial.variables().all(|i| i < self.n_gens()),
					"monomial {monomial} mentions a generator outside of the ring"
				);
				acc.toggle(monomial);
				acc
			})
	}
}

impl PartialEq for BooleanPolynomialRing {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for BooleanPolynomialRing {}

impl Debug for BooleanPolynomialRing {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("BooleanPolynomialRing")
			.field(&self.0.names)
			.finish()
	}
}

impl Ring for BooleanPolynomialRing {
	type Element = BooleanPolynomial;

	fn zero(&self) -> BooleanPolynomial {
		BooleanPolynomial {
			ring: self.clone(),
			terms: BTreeSet::new(),
		}
	}

	fn one(&self) -> BooleanPolynomial {
		self.monomial(Monomial::one())
	}

	/// Samples a polynomial of degree at most two.
	///
	/// Each generator and the constant term appear with probability one half; a couple of
	/// random quadratic terms are added on top when the ring has at least two generators.
	fn random_element<Rn: Rng + ?Sized>(&self, rng: &mut Rn) -> BooleanPolynomial {
		let n = self.n_gens();
		let mut monomials = (0..n)
			.filter(|_| rng.random())
			.map(Monomial::variable)
			.collect::<Vec<_>>();
		if rng.random() {
			monomials.push(Monomial::one());
		}
		if n >= 2 {
			for _ in 0..rng.random_range(0..=2) {
				let i = rng.random_range(0..n);
				let j = rng.random_range(0..n);
				monomials.push(Monomial::from_variables([i, j]));
			}
		}
		self.from_monomials(monomials)
	}
}

/// An element of a [`BooleanPolynomialRing`]: a sum of distinct square-free monomials.
#[derive(Clone, PartialEq, Eq)]
pub struct BooleanPolynomial {
	ring: BooleanPolynomialRing,
	terms: BTreeSet<Monomial>,
}

impl BooleanPolynomial {
	pub fn ring(&self) -> &BooleanPolynomialRing {
		&self.ring
	}

	/// Iterates the monomials of the polynomial in descending order.
	pub fn monomials(&self) -> impl Iterator<Item = &Monomial> {
		self.terms.iter().rev()
	}

	pub fn n_terms(&self) -> usize {
		self.terms.len()
	}

	pub fn contains(&self, monomial: &Monomial) -> bool {
		self.terms.contains(monomial)
	}

	/// The largest degree among the monomials, zero for constants.
	pub fn degree(&self) -> usize {
		self.terms.last().map_or(0, Monomial::degree)
	}

	/// Returns true iff every monomial has degree at most one.
	pub fn is_linear(&self) -> bool {
		self.degree() <= 1
	}

	pub fn constant_coefficient(&self) -> bool {
		self.terms.contains(&Monomial::one())
	}

	/// Evaluates the polynomial at a point of $\mathbb{F}_2^n$, one value per generator.
	///
	/// # Panics
	///
	/// Panics if `assignment.len()` differs from the number of generators of the ring.
	pub fn evaluate(&self, assignment: &[bool]) -> bool {
		assert_eq!(
			assignment.len(),
			self.ring.n_gens(),
			"assignment must have one value per generator"
		);
		self.terms
			.iter()
			.filter(|monomial| monomial.evaluate(assignment))
			.count() % 2
			== 1
	}

	fn toggle(&mut self, monomial: Monomial) {
		if !self.terms.remove(&monomial) {
			self.terms.insert(monomial);
		}
	}

	fn assert_same_ring(&self, other: &Self) {
		assert!(
			self.ring == other.ring,
			"cannot combine elements of different Boolean polynomial rings"
		);
	}

	fn fmt_monomial(&self, f: &mut Formatter<'_>, monomial: &Monomial) -> fmt::Result {
		if monomial.is_one() {
			return write!(f, "1");
		}
		for (i, index) in monomial.variables().enumerate() {
			if i > 0 {
				write!(f, "*")?;
			}
			write!(f, "{}", self.ring.generator_name(index))?;
		}
		Ok(())
	}
}

impl RingElement for BooleanPolynomial {
	type Ring = BooleanPolynomialRing;

	fn parent(&self) -> BooleanPolynomialRing {
		self.ring.clone()
	}

	fn is_zero(&self) -> bool {
		self.terms.is_empty()
	}
}

impl AddAssign<&Self> for BooleanPolynomial {
	fn add_assign(&mut self, rhs: &Self) {
		self.assert_same_ring(rhs);
		for monomial in &rhs.terms {
			self.toggle(monomial.clone());
		}
	}
}

impl AddAssign<Self> for BooleanPolynomial {
	fn add_assign(&mut self, rhs: Self) {
		self.assert_same_ring(&rhs);
		for monomial in rhs.terms {
			self.toggle(monomial);
		}
	}
}

impl Add<&Self> for BooleanPolynomial {
	type Output = Self;

	fn add(mut self, rhs: &Self) -> Self::Output {
		self += rhs;
		self
	}
}

impl Add<Self> for BooleanPolynomial {
	type Output = Self;

	fn add(mut self, rhs: Self) -> Self::Output {
		self += rhs;
		self
	}
}

impl Mul<&Self> for BooleanPolynomial {
	type Output = Self;

	fn mul(self, rhs: &Self) -> Self::Output {
		self.assert_same_ring(rhs);
		let mut product = self.ring.zero();
		for lhs in &self.terms {
			for rhs in &rhs.terms {
				product.toggle(lhs * rhs);
			}
		}
		product
	}
}

impl Mul<Self> for BooleanPolynomial {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		self * &rhs
	}
}

impl MulAssign<&Self> for BooleanPolynomial {
	fn mul_assign(&mut self, rhs: &Self) {
		*self = self.clone() * rhs;
	}
}

impl MulAssign<Self> for BooleanPolynomial {
	fn mul_assign(&mut self, rhs: Self) {
		*self = self.clone() * &rhs;
	}
}

impl Display for BooleanPolynomial {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.terms.is_empty() {
			return write!(f, "0");
		}
		for (i, monomial) in self.monomials().enumerate() {
			if i > 0 {
				write!(f, " + ")?;
			}
			self.fmt_monomial(f, monomial)?;
		}
		Ok(())
	}
}

impl Debug for BooleanPolynomial {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BooleanPolynomial({self})")
	}
}
