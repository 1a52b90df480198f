//! Property tests for generation and validation.

use std::collections::HashSet;

use proptest::prelude::*;

use uupid::adapters::live::LiveByteSource;
use uupid::ports::{ByteSource, ByteSourceError};
use uupid::generator::MAX_TOP_UPS;
use uupid::{is_valid, Config, Generator, Reduction, REFERENCE};

/// Serves a fixed byte string, cycling if asked for more.
struct Fixed(Vec<u8>);

impl ByteSource for Fixed {
    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, ByteSourceError> {
        Ok(self.0.iter().copied().cycle().take(n).collect())
    }
}

fn json_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        any::<f64>().prop_map(serde_json::Value::from),
        ".*".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::from),
            prop::collection::hash_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn any_bytes_give_valid_identifier(bytes in prop::collection::vec(any::<u8>(), 17)) {
        let id = Generator::new(&REFERENCE, &Fixed(bytes)).generate().unwrap();
        prop_assert!(is_valid(id.as_str()));
        prop_assert_eq!(id.split('-').count(), 10);
    }

    #[test]
    fn lowercasing_a_unit_invalidates(bytes in prop::collection::vec(any::<u8>(), 17), pos in 0usize..10) {
        let id = Generator::new(&REFERENCE, &Fixed(bytes)).generate().unwrap();
        let mut units: Vec<String> = id.split('-').map(str::to_string).collect();
        units[pos] = units[pos].to_lowercase();
        prop_assert!(!is_valid(units.join("-").as_str()));
    }

    #[test]
    fn validator_is_total_over_strings(s in ".*") {
        let _ = is_valid(s.as_str());
    }

    #[test]
    fn validator_rejects_every_non_string(value in json_value()) {
        prop_assume!(!value.is_string());
        prop_assert!(!is_valid(&value));
    }

    #[test]
    fn rejection_skips_exactly_the_rejected_groups(bytes in prop::collection::vec(any::<u8>(), 1..8)) {
        // Three units over two bits: raw 3 is the only rejected value, and
        // whole bytes hold four groups so no bits carry across draws.
        let units = ["ka", "ki", "ku"];
        let config = Config::new(units, 2, 4, '-', Reduction::Rejection).unwrap();
        let source = Fixed(bytes);

        let mut expected = Vec::new();
        let mut pending = std::collections::VecDeque::new();
        let mut top_ups = 0;
        let mut exhausted = false;
        let mut first = true;
        while expected.len() < 4 {
            if pending.is_empty() {
                if !first {
                    top_ups += 1;
                    if top_ups > MAX_TOP_UPS {
                        exhausted = true;
                        break;
                    }
                }
                first = false;
                let n = (4 - expected.len()).div_ceil(4);
                for byte in source.random_bytes(n).unwrap() {
                    pending.extend((0..4).rev().map(|i| (byte >> (i * 2)) & 0b11));
                }
            }
            let raw = pending.pop_front().unwrap();
            if raw < 3 {
                expected.push(units[usize::from(raw)]);
            }
        }

        match Generator::new(&config, &source).generate() {
            Ok(id) => {
                prop_assert!(!exhausted);
                prop_assert_eq!(id, expected.join("-"));
            }
            Err(err) => {
                prop_assert!(exhausted);
                let is_too_many_rejections = matches!(err, uupid::GenerateError::TooManyRejections { .. });
                prop_assert!(is_too_many_rejections);
            }
        }
    }
}

#[test]
fn rejection_sampling_is_close_to_uniform() {
    // 5 units over 3 bits: raw 5..7 are rejected under rejection sampling.
    let config = Config::new(["a", "b", "c", "d", "e"], 3, 8, '-', Reduction::Rejection).unwrap();
    let source = LiveByteSource::new();
    let generator = Generator::new(&config, &source);

    let mut counts = [0usize; 5];
    for id in generator.generate_batch(5_000).unwrap() {
        for unit in id.split('-') {
            counts[usize::from(unit.as_bytes()[0] - b'a')] += 1;
        }
    }
    // 40_000 draws, 8_000 expected per unit; modulo would give 'a'..'c' ~10_000.
    for count in counts {
        assert!((7_000..9_000).contains(&count), "skewed counts {counts:?}");
    }
}

#[test]
fn no_duplicates_in_large_sample() {
    let mut seen = HashSet::with_capacity(100_000);
    for _ in 0..100_000 {
        assert!(seen.insert(uupid::generate().unwrap()), "duplicate identifier");
    }
}

#[test]
#[ignore = "slow: ten million identifiers"]
fn no_duplicates_in_ten_million() {
    let mut seen = HashSet::with_capacity(10_000_000);
    let mut duplicates = 0usize;
    for _ in 0..10_000_000 {
        if !seen.insert(uupid::generate().unwrap()) {
            duplicates += 1;
        }
    }
    // 60 effective bits: expected collisions ~ n^2 / 2^61, well under one.
    assert!(duplicates <= 1, "{duplicates} duplicates");
}
