// Copyright 2026 The bsym Developers

#![warn(rustdoc::missing_crate_level_docs)]

//! Ring providers for symbolic binary integer arithmetic.
//!
//! The symbolic bit-vector algebra in `bsym-bitvec` only needs a commutative ring of
//! characteristic 2 whose addition models XOR and whose multiplication models AND. This crate
//! defines that boundary through the [`Ring`] and [`RingElement`] traits and ships two
//! instantiations:
//!
//! * [`BooleanPolynomialRing`], the quotient $\mathbb{F}_2[x_0, \ldots, x_{n-1}] / (x_i^2 + x_i)$,
//!   whose elements are Boolean formulas over named generator variables.
//! * [`Gf2Ring`], the prime field $\mathbb{F}_2$ itself, for concrete evaluation.

pub mod boolean_polynomial;
mod error;
pub mod gf2;
pub mod monomial;
pub mod ring;
pub mod util;

pub use boolean_polynomial::{BooleanPolynomial, BooleanPolynomialRing};
pub use error::Error;
pub use gf2::{Gf2, Gf2Ring};
pub use monomial::Monomial;
pub use ring::{Ring, RingElement};
