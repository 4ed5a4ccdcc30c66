/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use effano::bits::BitVector;
use effano::rank_sel::Rank9;
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[test]
fn test_rank9_matches_linear_scan() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = SmallRng::seed_from_u64(0);
    let lens = (1..1000)
        .step_by(37)
        .chain((10_000..100_000).step_by(10_000));
    let density = 0.5;
    for len in lens {
        let bools: Vec<bool> = (0..len).map(|_| rng.gen_bool(density)).collect();
        let bits: BitVector = bools.iter().copied().collect();
        let rank9 = Rank9::new(bits);

        let mut ranks = Vec::with_capacity(len);
        let mut r = 0usize;
        for &bit in &bools {
            ranks.push(r);
            if bit {
                r += 1;
            }
        }

        for i in 0..len {
            assert_eq!(rank9.rank(i), ranks[i], "len={len} i={i}");
        }
        assert_eq!(rank9.rank(len), r);
        assert_eq!(rank9.num_ones(), r);
    }
}

#[test]
fn test_rank9_across_many_blocks() {
    // 512-bit blocks, several thousand of them, to exercise the absolute
    // counter crossing multiple block boundaries.
    let mut rng = SmallRng::seed_from_u64(9);
    let len = 512 * 4000 + 37;
    let bools: Vec<bool> = (0..len).map(|_| rng.gen_bool(0.1)).collect();
    let bits: BitVector = bools.iter().copied().collect();
    let rank9 = Rank9::new(bits);

    let mut r = 0usize;
    for (i, &bit) in bools.iter().enumerate() {
        assert_eq!(rank9.rank(i), r);
        if bit {
            r += 1;
        }
    }
    assert_eq!(rank9.rank(len), r);
}
