/*
 * SPDX-FileCopyrightText: 2024 Michele Andreata
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use effano::bits::BitVector;
use effano::rank_sel::{SimpleSelect, SimpleSelectZero};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bits_from_bools(bools: &[bool]) -> BitVector {
    bools.iter().copied().collect()
}

#[test]
fn test_simple_select_matches_linear_scan() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = SmallRng::seed_from_u64(0);
    let lens = (1..100).step_by(10).chain((100_000..1_000_000).step_by(300_000));
    let density = 0.5;
    for len in lens {
        let bools: Vec<bool> = (0..len).map(|_| rng.gen_bool(density)).collect();
        let bits = bits_from_bools(&bools);
        let simple = SimpleSelect::new(bits, 3);

        let ones = simple.num_ones();
        let pos: Vec<usize> = bools
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| i)
            .collect();

        for i in 0..ones {
            assert_eq!(simple.select(i), Some(pos[i]));
        }
        assert_eq!(simple.select(ones), None);
    }
}

#[test]
fn test_simple_select_zero_matches_linear_scan() {
    let mut rng = SmallRng::seed_from_u64(1);
    let lens = (1..100).step_by(10).chain((100_000..1_000_000).step_by(300_000));
    let density = 0.5;
    for len in lens {
        let bools: Vec<bool> = (0..len).map(|_| rng.gen_bool(density)).collect();
        let bits = bits_from_bools(&bools);
        let simple = SimpleSelectZero::new(bits, 3);

        let zeros = simple.num_zeros();
        let pos: Vec<usize> = bools
            .iter()
            .enumerate()
            .filter(|(_, &b)| !b)
            .map(|(i, _)| i)
            .collect();

        for i in 0..zeros {
            assert_eq!(simple.select_zero(i), Some(pos[i]));
        }
        assert_eq!(simple.select_zero(zeros), None);
    }
}

#[test]
fn test_simple_select_empty() {
    let select = SimpleSelect::new(BitVector::new(), 3);
    assert_eq!(select.select(0), None);
    assert_eq!(select.num_ones(), 0);
}

#[test]
fn test_simple_select_sparse_density() {
    // Very low density exercises sub-quantum spans with many empty words.
    let mut rng = SmallRng::seed_from_u64(2);
    let len = 500_000;
    let bools: Vec<bool> = (0..len).map(|_| rng.gen_bool(0.001)).collect();
    let bits = bits_from_bools(&bools);
    let simple = SimpleSelect::new(bits, 10);
    let pos: Vec<usize> = bools
        .iter()
        .enumerate()
        .filter(|(_, &b)| b)
        .map(|(i, _)| i)
        .collect();
    for (rank, &p) in pos.iter().enumerate() {
        assert_eq!(simple.select(rank), Some(p));
    }
}
