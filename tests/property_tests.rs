use plainsight::alphabet::Alphabet;
use plainsight::cipher::Mapping;
use plainsight::model::LanguageModel;
use plainsight::sampler::{eval_proposal, AcceptClamp};
use proptest::prelude::*;

// --- STRATEGIES ---

/// Alphabets of 2..=30 distinct lowercase/space/digit characters.
fn arb_alphabet() -> impl Strategy<Value = Alphabet> {
    proptest::sample::subsequence(
        "abcdefghijklmnopqrstuvwxyz 0123456789".chars().collect::<Vec<_>>(),
        2..=30,
    )
    .prop_map(|chars| {
        let s: String = chars.into_iter().collect();
        Alphabet::parse(&s).expect("subsequence of distinct chars is a valid alphabet")
    })
}

/// (alphabet, text drawn from it)
fn arb_alphabet_and_text() -> impl Strategy<Value = (Alphabet, String)> {
    arb_alphabet().prop_flat_map(|alphabet| {
        let n = alphabet.len();
        let a = alphabet.clone();
        (
            Just(alphabet),
            proptest::collection::vec(0..n, 0..200)
                .prop_map(move |idx| idx.into_iter().map(|i| a.char_at(i)).collect()),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn round_trip_law((alphabet, text) in arb_alphabet_and_text(), seed in any::<u64>()) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mapping = Mapping::random(&alphabet, &mut rng).unwrap();
        let encoded = mapping.encode(&alphabet, &text).unwrap();
        prop_assert_eq!(mapping.decode(&alphabet, &encoded).unwrap(), text);
    }

    #[test]
    fn swap_preserves_bijectivity(alphabet in arb_alphabet(), seed in any::<u64>()) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut mapping = Mapping::random(&alphabet, &mut rng).unwrap();

        for _ in 0..20 {
            mapping = mapping.swap_pair(&mut rng).unwrap();
            let mut seen = vec![false; alphabet.len()];
            for &c in mapping.forward_table() {
                prop_assert!(!seen[c]);
                seen[c] = true;
            }
            for (p, &c) in mapping.forward_table().iter().enumerate() {
                prop_assert_eq!(mapping.inverse_table()[c], p);
            }
        }
    }

    #[test]
    fn scores_are_finite((alphabet, text) in arb_alphabet_and_text()) {
        let model = LanguageModel::build(&text, &alphabet).unwrap();
        let score = model.score(&text).unwrap();
        prop_assert!(score.is_finite());
        prop_assert!(score <= 0.0, "log-probabilities cannot be positive: {}", score);
    }

    #[test]
    fn acceptance_is_monotone_for_improvements(
        current in -1e6..0.0f64,
        gain in 0.0..1e6f64,
        beta in 0.01..100.0f64,
        seed in any::<u64>()
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let clamp = AcceptClamp::default();
        prop_assert!(eval_proposal(current + gain, current, beta, clamp, &mut rng));
    }
}
