//! Duration partition enumeration.
//!
//! A duration partition splits the total conference length into slot
//! lengths: a non-decreasing sequence of positive integers summing to the
//! total. The search visits every partition, longest sequences (most
//! slots) first and lexicographically within one slot count.
//!
//! # Algorithm
//!
//! Partitions of a fixed length are produced by successor stepping: the
//! rightmost element that can grow by one is incremented, and the tail is
//! refilled with the smallest non-decreasing completion. Only sequences
//! with the right sum are ever materialized, so the cost per emitted
//! partition is linear in its length.

mod generator;

pub use generator::{generate, slot_counts, DurationPartition, PartitionsOfLength};
