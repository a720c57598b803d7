use proptest::prelude::*;
use rand::SeedableRng as _;
use rand::rngs::SmallRng;
use randomgen::Discrete;
use randomgen::Search;
use randomgen::Settings;
use randomgen::ValidationError;

/// Tables of up to 100 distinct outcomes whose probabilities sum to 1,
/// some of them exactly zero.
fn valid_table() -> impl Strategy<Value = Vec<(i64, f64)>> {
    (
        0.01..1.0f64,
        prop::collection::vec(prop_oneof![Just(0.0), 0.01..1.0f64], 0..100),
    )
        .prop_map(|(first, rest)| {
            let weights = std::iter::once(first).chain(rest).collect::<Vec<_>>();
            let total = weights.iter().sum::<f64>();
            weights
                .into_iter()
                .enumerate()
                .map(|(i, weight)| (i as i64 - 1, weight / total))
                .collect()
        })
}

proptest! {
    #[test]
    fn valid_tables_configure(table in valid_table()) {
        let sampler = Discrete::new(table.clone());
        prop_assert!(sampler.is_ok(), "{:?}", sampler.as_ref().err());
        let sampler = sampler.unwrap();
        prop_assert_eq!(sampler.len(), table.len());
        let last = sampler.cumulative()[table.len() - 1];
        prop_assert!((last - 1.0).abs() < 1e-9);
    }

    #[test]
    fn draws_stay_in_support(table in valid_table(), seed in any::<u64>()) {
        let sampler = Discrete::new(table.clone()).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..200 {
            let value = sampler.draw(&mut rng);
            let entry = table.iter().find(|(outcome, _)| *outcome == value);
            prop_assert!(entry.is_some(), "{} not in table", value);
            prop_assert!(entry.unwrap().1 > 0.0, "drew zero-probability outcome {}", value);
        }
    }

    #[test]
    fn searches_agree(table in valid_table(), seed in any::<u64>()) {
        let linear = Discrete::new(table.clone()).unwrap();
        let binary = Discrete::with_settings(
            Settings::builder().search(Search::Binary).build(),
            table,
        )
        .unwrap();
        let mut a = SmallRng::seed_from_u64(seed);
        let mut b = SmallRng::seed_from_u64(seed);
        for _ in 0..200 {
            prop_assert_eq!(linear.draw(&mut a), binary.draw(&mut b));
        }
    }

    #[test]
    fn out_of_range_rejected(
        table in valid_table(),
        index in any::<prop::sample::Index>(),
        probability in prop_oneof![-10.0..-1e-6f64, (1.0 + 1e-6)..10.0f64],
    ) {
        let mut table = table;
        let index = index.index(table.len());
        table[index].1 = probability;
        let error = Discrete::new(table).unwrap_err();
        let is_out_of_range = matches!(error, ValidationError::OutOfRange { .. });
        prop_assert!(is_out_of_range, "{}", error);
    }

    #[test]
    fn scaled_tables_rejected(table in valid_table(), scale in 0.5..0.99f64) {
        let table = table
            .into_iter()
            .map(|(outcome, probability)| (outcome, probability * scale))
            .collect::<Vec<_>>();
        let error = Discrete::new(table).unwrap_err();
        let is_mismatch = matches!(error, ValidationError::SumMismatch { .. });
        prop_assert!(is_mismatch, "{}", error);
    }

    #[test]
    fn failed_configure_keeps_table(table in valid_table(), bad in valid_table()) {
        let mut sampler = Discrete::new(table.clone()).unwrap();
        let before = sampler.cumulative().to_vec();
        let bad = bad
            .into_iter()
            .map(|(outcome, probability)| (outcome, probability * 2.0))
            .collect::<Vec<_>>();
        prop_assert!(sampler.configure(bad).is_err());
        prop_assert_eq!(sampler.cumulative(), &before[..]);
    }
}

const TABLE: [(i64, f64); 5] = [(-1, 0.01), (0, 0.3), (1, 0.58), (2, 0.1), (3, 0.01)];

/// Total variation distance between `draws` samples and `TABLE`.
fn distance(sampler: &Discrete<i64>, rng: &mut SmallRng, draws: usize) -> f64 {
    let mut counts = [0usize; TABLE.len()];
    for _ in 0..draws {
        let value = sampler.draw(rng);
        counts[(value + 1) as usize] += 1;
    }

    TABLE
        .iter()
        .zip(counts)
        .map(|((_, probability), count)| (count as f64 / draws as f64 - probability).abs())
        .sum::<f64>()
        / 2.0
}

#[test]
fn frequencies_converge() {
    let sampler = Discrete::new(TABLE).unwrap();
    let mut rng = SmallRng::seed_from_u64(0x5eed);

    const TRIALS: usize = 20;
    let small = (0..TRIALS).map(|_| distance(&sampler, &mut rng, 23)).sum::<f64>() / TRIALS as f64;
    let medium =
        (0..TRIALS).map(|_| distance(&sampler, &mut rng, 1_047)).sum::<f64>() / TRIALS as f64;
    let large = distance(&sampler, &mut rng, 1_002_037);

    assert!(small > medium, "{small} <= {medium}");
    assert!(medium > large, "{medium} <= {large}");
    assert!(large < 0.005, "{large}");
}
