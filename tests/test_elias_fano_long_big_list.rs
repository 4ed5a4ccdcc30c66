/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use effano::dict::elias_fano_long_big_list::EliasFanoLongBigListBuilder;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_boundary_scenario_2() {
    let mut efb = EliasFanoLongBigListBuilder::new(0);
    for v in [5i64, 0, 12, 3, 5] {
        efb.push(v).unwrap();
    }
    let ef = efb.build().unwrap();
    assert_eq!(
        (0..5).map(|i| ef.get(i)).collect::<Vec<_>>(),
        vec![5, 0, 12, 3, 5]
    );
}

#[test]
fn test_rejects_value_below_lower_bound() {
    let mut efb = EliasFanoLongBigListBuilder::new(10);
    assert!(efb.push(9).is_err());
    assert!(efb.push(10).is_ok());
}

#[test]
fn test_bulk_get_matches_get_random() {
    let mut rng = SmallRng::seed_from_u64(0xB01);
    for n in [0usize, 1, 2, 50, 500] {
        let values: Vec<i64> = (0..n).map(|_| rng.gen_range(-1000..1_000_000)).collect();
        let mut efb = EliasFanoLongBigListBuilder::new(-1000);
        for &v in &values {
            efb.push(v).unwrap();
        }
        let ef = efb.build().unwrap();

        for &(start, len) in &[(0usize, n), (0, n.min(1)), (n / 2, n - n / 2)] {
            let mut dest = vec![0i64; len];
            ef.get_bulk(start, &mut dest, 0, len);
            for k in 0..len {
                assert_eq!(dest[k], ef.get(start + k));
                assert_eq!(dest[k], values[start + k]);
            }
        }
    }
}

#[test]
fn test_offline_equals_in_memory_random() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = SmallRng::seed_from_u64(0xB02);
    let values: Vec<i64> = (0..2000).map(|_| rng.gen_range(0..1 << 30)).collect();

    let mut online = EliasFanoLongBigListBuilder::new(0);
    for &v in &values {
        online.push(v).unwrap();
    }
    let online = online.build().unwrap();

    let mut offline = EliasFanoLongBigListBuilder::new_offline(0).unwrap();
    for &v in &values {
        offline.push(v).unwrap();
    }
    let offline = offline.build().unwrap();

    for i in 0..values.len() {
        assert_eq!(online.get(i), offline.get(i));
        assert_eq!(online.get(i), values[i]);
    }
}

#[test]
fn test_zero_values_do_not_panic() {
    // Every value equal to the lower bound has msb(1) == 0, exercising the
    // zero-width-field path through bits/borders.
    let mut efb = EliasFanoLongBigListBuilder::new(7);
    for _ in 0..10 {
        efb.push(7).unwrap();
    }
    let ef = efb.build().unwrap();
    for i in 0..10 {
        assert_eq!(ef.get(i), 7);
    }
}
