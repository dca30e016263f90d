// Copyright 2026 The bsym Developers

//! The prime field $\mathbb{F}_2$ viewed as a [`Ring`].

use std::{
	fmt::{Debug, Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Not},
};

use rand::Rng;

use crate::{Ring, RingElement};

/// The ring $\mathbb{F}_2$.
///
/// There is only one such ring, so all instances compare equal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf2Ring;

/// An element of $\mathbb{F}_2$, i.e. a concrete bit.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Gf2(bool);

impl Gf2 {
	pub const ZERO: Self = Self(false);
	pub const ONE: Self = Self(true);

	pub const fn new(value: bool) -> Self {
		Self(value)
	}

	pub const fn val(self) -> bool {
		self.0
	}
}

impl Ring for Gf2Ring {
	type Element = Gf2;

	#[inline]
	fn zero(&self) -> Gf2 {
		Gf2::ZERO
	}

	#[inline]
	fn one(&self) -> Gf2 {
		Gf2::ONE
	}

	fn random_element<Rn: Rng + ?Sized>(&self, rng: &mut Rn) -> Gf2 {
		Gf2(rng.random())
	}
}

impl RingElement for Gf2 {
	type Ring = Gf2Ring;

	#[inline]
	fn parent(&self) -> Gf2Ring {
		Gf2Ring
	}

	#[inline]
	fn is_zero(&self) -> bool {
		!self.0
	}
}

impl Add<Self> for Gf2 {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn add(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl Add<&Self> for Gf2 {
	type Output = Self;

	fn add(self, rhs: &Self) -> Self::Output {
		self + *rhs
	}
}

impl Mul<Self> for Gf2 {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn mul(self, rhs: Self) -> Self::Output {
		Self(self.0 & rhs.0)
	}
}

impl Mul<&Self> for Gf2 {
	type Output = Self;

	fn mul(self, rhs: &Self) -> Self::Output {
		self * *rhs
	}
}

impl AddAssign<Self> for Gf2 {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl AddAssign<&Self> for Gf2 {
	fn add_assign(&mut self, rhs: &Self) {
		*self = *self + *rhs;
	}
}

impl MulAssign<Self> for Gf2 {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl MulAssign<&Self> for Gf2 {
	fn mul_assign(&mut self, rhs: &Self) {
		*self = *self * *rhs;
	}
}

impl Not for Gf2 {
	type Output = Self;

	fn not(self) -> Self::Output {
		Self(!self.0)
	}
}

impl Sum<Self> for Gf2 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Self> for Gf2 {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl Product<Self> for Gf2 {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl From<bool> for Gf2 {
	fn from(val: bool) -> Self {
		Self(val)
	}
}

impl From<Gf2> for bool {
	fn from(val: Gf2) -> Self {
		val.0
	}
}

impl Display for Gf2 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", u8::from(self.0))
	}
}

impl Debug for Gf2 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Gf2({self})")
	}
}
