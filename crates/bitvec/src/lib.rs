// Copyright 2026 The bsym Developers

#![warn(rustdoc::missing_crate_level_docs)]

//! Symbolic binary integers.
//!
//! A [`SymbolicBitVector`] is a fixed-width bit-vector whose bits are elements of a ring of
//! characteristic 2, typically a [`BooleanPolynomialRing`](bsym_ring::BooleanPolynomialRing).
//! Running a bit-manipulation routine (an LFSR update, a mixing function, ...) on a vector of
//! generators produces each output bit as a Boolean formula over the generators, which can then
//! be read off as a [`CoefficientMatrix`].
//!
//! ```
//! use bsym_bitvec::SymbolicBitVector;
//! use bsym_ring::BooleanPolynomialRing;
//!
//! let ring = BooleanPolynomialRing::with_generators(&[("x", 8)]).unwrap();
//! let state = SymbolicBitVector::from_bits(ring.gens()).unwrap();
//! let feedback = (&state >> 7).xor(&(&state >> 5)).unwrap().and(1u8).unwrap();
//! let next = (&state << 1).xor(&feedback).unwrap();
//! assert_eq!(next.bit(0).to_string(), "x5 + x7");
//! ```

pub mod coefficients;
mod constant;
mod error;
mod operand;
mod ops;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
mod vector;

pub use coefficients::CoefficientMatrix;
pub use constant::Constant;
pub use error::Error;
pub use operand::Operand;
pub use vector::SymbolicBitVector;
