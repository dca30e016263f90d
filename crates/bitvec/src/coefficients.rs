// Copyright 2026 The bsym Developers

//! Extraction of coefficient matrices from vectors over a Boolean polynomial ring.
//!
//! After a symbolic run of a linear state update, every bit is a linear form in the
//! generators. The coefficient matrix collects those forms into a matrix over $\mathbb{F}_2$,
//! which maps concrete generator values to concrete output bits.

use std::{
	collections::{BTreeSet, HashMap},
	fmt::{self, Display, Formatter},
};

use bsym_ring::{BooleanPolynomial, Monomial};

use crate::{Constant, SymbolicBitVector};

impl SymbolicBitVector<BooleanPolynomial> {
	/// Returns the generators of the underlying ring.
	pub fn gens(&self) -> Vec<BooleanPolynomial> {
		self.ring().gens()
	}

	/// Returns the distinct monomials occurring in any bit, in descending order.
	pub fn monomials(&self) -> Vec<Monomial> {
		let monomials = self
			.iter()
			.flat_map(|bit| bit.monomials())
			.collect::<BTreeSet<_>>();
		monomials.into_iter().rev().cloned().collect()
	}

	/// Returns the matrix with one row per bit and one column per monomial of
	/// [`Self::monomials`], with a one where the monomial occurs in the bit.
	pub fn coefficient_matrix(&self) -> CoefficientMatrix {
		let _span = tracing::debug_span!("coefficient_matrix", width = self.width()).entered();

		let monomials = self.monomials();
		let columns = monomials
			.iter()
			.enumerate()
			.map(|(col, monomial)| (monomial, col))
			.collect::<HashMap<_, _>>();

		let n_cols = monomials.len();
		let mut entries = vec![false; self.width() * n_cols];
		for (row, bit) in self.iter().enumerate() {
			for monomial in bit.monomials() {
				entries[row * n_cols + columns[monomial]] = true;
			}
		}

		CoefficientMatrix {
			n_rows: self.width(),
			monomials,
			entries,
		}
	}

	/// Substitutes concrete values for the generators and packs the resulting bits into an
	/// integer, bit `i` of the result being bit `i` of the vector.
	///
	/// # Panics
	///
	/// Panics if `assignment.len()` differs from the number of generators of the ring.
	pub fn evaluate(&self, assignment: &[bool]) -> Constant {
		Constant::from_bits(self.iter().map(|bit| bit.evaluate(assignment)))
	}
}

/// A dense matrix over $\mathbb{F}_2$ whose columns are labelled by monomials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientMatrix {
	n_rows: usize,
	monomials: Vec<Monomial>,
	/// Row-major entries.
	entries: Vec<bool>,
}

impl CoefficientMatrix {
	pub fn n_rows(&self) -> usize {
		self.n_rows
	}

	pub fn n_cols(&self) -> usize {
		self.monomials.len()
	}

	/// The column labels.
	pub fn monomials(&self) -> &[Monomial] {
		&self.monomials
	}

	/// # Panics
	///
	/// Panics if `row` or `col` is out of range.
	pub fn get(&self, row: usize, col: usize) -> bool {
		assert!(row < self.n_rows && col < self.n_cols(), "index ({row}, {col}) out of range");
		self.entries[row * self.n_cols() + col]
	}

	pub fn row(&self, row: usize) -> &[bool] {
		let n_cols = self.n_cols();
		&self.entries[row * n_cols..(row + 1) * n_cols]
	}

	pub fn column_of(&self, monomial: &Monomial) -> Option<usize> {
		self.monomials.iter().position(|m| m == monomial)
	}

	/// Values of the column monomials at a point of $\mathbb{F}_2^n$.
	pub fn monomial_values(&self, assignment: &[bool]) -> Vec<bool> {
		self.monomials
			.iter()
			.map(|monomial| monomial.evaluate(assignment))
			.collect()
	}

	/// Computes the matrix-vector product over $\mathbb{F}_2$ with a vector of monomial values.
	///
	/// # Panics
	///
	/// Panics if `values.len() != self.n_cols()`.
	pub fn apply(&self, values: &[bool]) -> Vec<bool> {
		assert_eq!(values.len(), self.n_cols(), "expected one value per column");
		(0..self.n_rows)
			.map(|row| {
				self.row(row)
					.iter()
					.zip(values)
					.filter(|&(&entry, &value)| entry && value)
					.count() % 2 == 1
			})
			.collect()
	}
}

impl Display for CoefficientMatrix {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for row in 0..self.n_rows {
			let line = self
				.row(row)
				.iter()
				.map(|&entry| if entry { '1' } else { '0' })
				.collect::<String>();
			writeln!(f, "[{line}]")?;
		}
		Ok(())
	}
}
