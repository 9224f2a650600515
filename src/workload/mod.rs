//! Workload generation and partitioning.
//!
//! A workload is an ordered `Vec<Op>` assigned to one worker for one run.
//! Traces are sampled from a per-variant weight vector over the five
//! operation categories: read field 0, write field 0, read field 1,
//! write field 1, snapshot.

pub mod codec;
pub mod config;

use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;

use crate::core::Op;
use crate::{BenchError, BenchResult};

/// Number of operation categories a variant assigns weights to.
pub const CATEGORY_COUNT: usize = 5;

/// Build the generator RNG, seeded for reproducible streams when a seed is
/// given and from entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Sample `count` operations from the variant's category weights.
///
/// Weights need not be normalized; any non-negative vector with a positive
/// total is accepted. Generated writes use the fixed value 1 - the benchmark
/// varies the operation mix, not the data.
pub fn generate_ops(
    count: usize,
    weights: &[f64; CATEGORY_COUNT],
    rng: &mut StdRng,
) -> BenchResult<Vec<Op>> {
    let dist = WeightedIndex::new(weights)
        .map_err(|e| BenchError::Message(format!("invalid weights: {e}")))?;

    let mut ops = Vec::with_capacity(count);
    for _ in 0..count {
        let op = match dist.sample(rng) {
            0 => Op::Read { field: 0 },
            1 => Op::Write { field: 0, value: 1 },
            2 => Op::Read { field: 1 },
            3 => Op::Write { field: 1, value: 1 },
            _ => Op::Snapshot,
        };
        ops.push(op);
    }
    Ok(ops)
}

/// Split `num_ops` into `pieces` per-worker sizes.
///
/// The first `num_ops % pieces` pieces get one extra operation, the rest get
/// `num_ops / pieces`; the sizes always sum to exactly `num_ops`. Zero
/// pieces yields an empty split.
pub fn partition_ops(num_ops: usize, pieces: usize) -> Vec<usize> {
    if pieces == 0 {
        return Vec::new();
    }
    let base = num_ops / pieces;
    let rem = num_ops % pieces;
    (0..pieces).map(|i| base + usize::from(i < rem)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_sums_to_total() {
        for num_ops in [0usize, 1, 2, 9, 10, 400_000] {
            for pieces in 1..=4usize {
                let sizes = partition_ops(num_ops, pieces);
                assert_eq!(sizes.len(), pieces);
                assert_eq!(sizes.iter().sum::<usize>(), num_ops);
            }
        }
    }

    #[test]
    fn test_partition_spreads_remainder_over_first_pieces() {
        // 10 into 3: remainder 1 -> first piece gets the extra.
        assert_eq!(partition_ops(10, 3), vec![4, 3, 3]);
        // 11 into 3: remainder 2 -> first two pieces get the extra.
        assert_eq!(partition_ops(11, 3), vec![4, 4, 3]);
        // Even split has no extras.
        assert_eq!(partition_ops(12, 3), vec![4, 4, 4]);
    }

    #[test]
    fn test_partition_zero_pieces_is_empty() {
        assert!(partition_ops(10, 0).is_empty());
    }

    #[test]
    fn test_generate_ops_count_and_vocabulary() {
        let mut rng = seeded_rng(Some(1));
        let ops = generate_ops(1_000, &[1.0, 1.0, 1.0, 1.0, 1.0], &mut rng).unwrap();
        assert_eq!(ops.len(), 1_000);
        for op in &ops {
            match *op {
                Op::Read { field } | Op::Write { field, value: 1 } => assert!(field < 2),
                Op::Snapshot => {}
                other => panic!("unexpected op {other:?}"),
            }
        }
    }

    #[test]
    fn test_generate_ops_respects_zero_weights() {
        let mut rng = seeded_rng(Some(2));
        // Only snapshot has weight.
        let ops = generate_ops(200, &[0.0, 0.0, 0.0, 0.0, 1.0], &mut rng).unwrap();
        assert!(ops.iter().all(|op| *op == Op::Snapshot));
    }

    #[test]
    fn test_generate_ops_is_deterministic_for_a_seed() {
        let weights = [0.1, 0.05, 0.5, 0.1, 0.25];
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(42));
        assert_eq!(
            generate_ops(500, &weights, &mut a).unwrap(),
            generate_ops(500, &weights, &mut b).unwrap()
        );
    }

    #[test]
    fn test_generate_ops_all_zero_weights_fails() {
        let mut rng = seeded_rng(Some(3));
        assert!(generate_ops(10, &[0.0; 5], &mut rng).is_err());
    }
}
