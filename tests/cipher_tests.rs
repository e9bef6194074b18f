use plainsight::alphabet::Alphabet;
use plainsight::cipher::Mapping;
use plainsight::error::PlainsightError;

fn latin() -> Alphabet {
    Alphabet::parse("abcdefghijklmnopqrstuvwxyz ").unwrap()
}

#[test]
fn encode_decode_round_trip() {
    let alphabet = latin();
    let mut rng = fastrand::Rng::with_seed(7);
    let mapping = Mapping::random(&alphabet, &mut rng).unwrap();

    let text = "the quick brown fox jumps over the lazy dog";
    let encoded = mapping.encode(&alphabet, text).unwrap();
    assert_eq!(encoded.chars().count(), text.chars().count());
    assert_eq!(mapping.decode(&alphabet, &encoded).unwrap(), text);
}

#[test]
fn decode_equals_encode_with_inverse() {
    let alphabet = latin();
    let mut rng = fastrand::Rng::with_seed(11);
    let mapping = Mapping::random(&alphabet, &mut rng).unwrap();

    let encoded = mapping.encode(&alphabet, "substitution").unwrap();
    assert_eq!(
        mapping.decode(&alphabet, &encoded).unwrap(),
        mapping.inverted().encode(&alphabet, &encoded).unwrap()
    );
}

#[test]
fn encode_rejects_out_of_alphabet() {
    let alphabet = Alphabet::parse("ab").unwrap();
    let mapping = Mapping::identity(2).unwrap();
    assert!(matches!(
        mapping.encode(&alphabet, "abc"),
        Err(PlainsightError::OutOfAlphabet('c'))
    ));
}

#[test]
fn random_mapping_is_a_permutation() {
    let alphabet = latin();
    for seed in 0..20 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mapping = Mapping::random(&alphabet, &mut rng).unwrap();

        let mut seen = vec![false; alphabet.len()];
        for &c in mapping.forward_table() {
            assert!(!seen[c]);
            seen[c] = true;
        }
        for (p, &c) in mapping.forward_table().iter().enumerate() {
            assert_eq!(mapping.inverse_table()[c], p);
        }
    }
}

#[test]
fn swap_pair_changes_exactly_two_slots() {
    let alphabet = latin();
    let mut rng = fastrand::Rng::with_seed(3);
    let mapping = Mapping::random(&alphabet, &mut rng).unwrap();

    for _ in 0..50 {
        let swapped = mapping.swap_pair(&mut rng).unwrap();
        let changed: Vec<usize> = mapping
            .forward_table()
            .iter()
            .zip(swapped.forward_table())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(changed.len(), 2, "swap must touch exactly two keys");

        // Still a bijection with a consistent inverse.
        for (p, &c) in swapped.forward_table().iter().enumerate() {
            assert_eq!(swapped.inverse_table()[c], p);
        }
    }
}

#[test]
fn swap_pair_leaves_original_untouched() {
    let alphabet = latin();
    let mut rng = fastrand::Rng::with_seed(5);
    let mapping = Mapping::random(&alphabet, &mut rng).unwrap();
    let before = mapping.clone();
    let _ = mapping.swap_pair(&mut rng).unwrap();
    assert_eq!(mapping, before);
}

#[test]
fn from_cipher_alphabet_matches_encode() {
    let alphabet = Alphabet::parse("abcd").unwrap();
    let mapping = Mapping::from_cipher_alphabet(&alphabet, "badc").unwrap();
    assert_eq!(mapping.encode(&alphabet, "abcd").unwrap(), "badc");
    assert_eq!(mapping.cipher_alphabet(&alphabet), "badc");
}

#[test]
fn from_cipher_alphabet_rejects_non_bijections() {
    let alphabet = Alphabet::parse("abcd").unwrap();
    assert!(Mapping::from_cipher_alphabet(&alphabet, "aacd").is_err());
    assert!(Mapping::from_cipher_alphabet(&alphabet, "abc").is_err());
}
