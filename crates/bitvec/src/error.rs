// Copyright 2026 The bsym Developers

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid shape: width {width} with {n_bits} bits, width must be positive and equal to the number of bits")]
	Shape { width: usize, n_bits: usize },
	#[error("operands belong to different rings")]
	RingMismatch,
	#[error("unsupported operand for {op}: {reason}")]
	UnsupportedOperand {
		op: &'static str,
		reason: &'static str,
	},
}
