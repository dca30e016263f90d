// Copyright 2026 The bsym Developers

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid generator name: {0:?}")]
	InvalidGeneratorName(String),
	#[error("duplicate generator name: {0}")]
	DuplicateGenerator(String),
	#[error("generator partition covers {actual} generators, ring has {expected}")]
	PartitionMismatch { expected: usize, actual: usize },
}
