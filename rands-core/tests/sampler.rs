use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rands_core::{Alphabet, Error, LengthRange, Sampler, Symbol, chars, sample};

#[test]
fn bytes_rejects_invalid_arguments() {
	assert!(matches!(rands_core::bytes(0, 5, b"ab"), Err(Error::InvalidArgument(_))));
	assert!(matches!(rands_core::bytes(5, 5, b"ab"), Err(Error::InvalidArgument(_))));
	assert!(matches!(rands_core::bytes(5, 4, b"ab"), Err(Error::InvalidArgument(_))));
	assert!(matches!(rands_core::bytes::<u8>(5, 7, &[]), Err(Error::InvalidArgument(_))));
	assert!(matches!(rands_core::string::<char>(5, 7, &[]), Err(Error::InvalidArgument(_))));
}

#[test]
fn bytes_respects_length_and_alphabet() {
	let alphabet = chars::lower_alpha();
	for _ in 0..1_000 {
		let out = rands_core::bytes(8, 10, alphabet).unwrap();
		assert!((8..10).contains(&out.len()), "length {} out of range", out.len());
		assert!(out.iter().all(|b| alphabet.contains(b)));
	}
}

#[test]
fn every_length_of_the_range_is_reached() {
	let mut seen = HashSet::new();
	for _ in 0..2_000 {
		seen.insert(rands_core::bytes(3, 7, chars::number()).unwrap().len());
	}
	assert_eq!(seen, HashSet::from([3, 4, 5, 6]));
}

#[test]
fn degenerate_range_has_fixed_length() {
	for _ in 0..1_000 {
		let out = rands_core::bytes(6, 7, b"abc").unwrap();
		assert_eq!(out.len(), 6);
		assert!(out.iter().all(|b| b"abc".contains(b)));
	}
}

#[test]
fn symbols_are_uniformly_distributed() {
	let mut counts = [0usize; 3];
	for _ in 0..10_000 {
		for b in rands_core::bytes(6, 7, b"abc").unwrap() {
			counts[(b - b'a') as usize] += 1;
		}
	}

	// 60,000 draws, expected 20,000 each, standard deviation ~115.
	for count in counts {
		assert!((19_000..=21_000).contains(&count), "unbalanced counts: {counts:?}");
	}
}

#[test]
fn repeated_calls_differ() {
	let outputs: HashSet<String> = (0..1_000)
		.map(|_| rands_core::string(10, 20, chars::alpha_number()).unwrap())
		.collect();
	assert!(outputs.len() >= 999, "only {} distinct outputs", outputs.len());
}

#[test]
fn duplicate_symbols_weigh_the_distribution() {
	let mut rng = StdRng::seed_from_u64(11);
	let range = LengthRange::new(1_000, 1_001).unwrap();
	let alphabet = Alphabet::new(&b"aab"[..]).unwrap();

	let mut a = 0;
	for _ in 0..20 {
		a += sample(&range, &alphabet, &mut rng).iter().filter(|b| **b == b'a').count();
	}
	// Two thirds of 20,000.
	assert!((12_700..=14_000).contains(&a), "got {a} 'a'");
}

#[test]
fn code_point_alphabets_produce_valid_text() {
	let alphabet = ['α', 'β', 'γ', '鼠'];
	for _ in 0..200 {
		let text = rands_core::string(4, 8, &alphabet).unwrap();
		let count = text.chars().count();
		assert!((4..8).contains(&count));
		assert!(text.chars().all(|c| alphabet.contains(&c)));

		let bytes = rands_core::bytes(4, 8, &alphabet).unwrap();
		let decoded = String::from_utf8(bytes).expect("utf-8 output");
		assert!(decoded.chars().all(|c| alphabet.contains(&c)));
	}
}

#[test]
fn alphabet_from_text_splits_code_points() {
	let alphabet = Alphabet::from_text("héllo").unwrap();
	assert_eq!(alphabet.len(), 5);
	assert_eq!(alphabet.as_slice()[1], 'é');
	assert!(matches!(Alphabet::from_text(""), Err(Error::InvalidArgument(_))));
}

#[test]
fn invalid_byte_text_is_replaced() {
	assert_eq!(u8::into_text(b"ok".to_vec()), "ok");
	assert_eq!(u8::into_text(vec![b'a', 0xff]), "a\u{FFFD}");
}

#[test]
fn seeded_sampling_is_reproducible() {
	let sampler = Sampler::new(
		LengthRange::new(5, 20).unwrap(),
		Alphabet::new(chars::alpha_number_punct()).unwrap(),
	);

	let mut a = StdRng::seed_from_u64(2024);
	let mut b = StdRng::seed_from_u64(2024);
	for _ in 0..100 {
		assert_eq!(sampler.sample(&mut a), sampler.sample(&mut b));
	}
}

#[test]
fn length_range_validation() {
	assert!(LengthRange::new(1, 2).unwrap().is_fixed());
	assert_eq!(LengthRange::new(4, 10).unwrap().span(), 6);
	assert!(matches!(LengthRange::new(0, 2), Err(Error::InvalidArgument(_))));
	assert!(matches!(LengthRange::new(3, 3), Err(Error::InvalidArgument(_))));
}
