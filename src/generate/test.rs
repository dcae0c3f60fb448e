use super::*;
use crate::data::err::GenerateError;

const SEED: u64 = 42;

#[test]
fn rand_test() {
    const LEN: usize = 10_000;

    let random_sequence = rand_sequence(b"ATGC", LEN, SEED);
    assert_eq!(LEN, random_sequence.len());

    let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
        b'A' => (a + 1, c, g, t),
        b'C' => (a, c + 1, g, t),
        b'G' => (a, c, g + 1, t),
        b'T' => (a, c, g, t + 1),
        _ => (a, c, g, t),
    });

    assert_eq!(a + c + g + t, LEN);
    assert!(a > 0);
    assert!(c > 0);
    assert!(g > 0);
    assert!(t > 0);
}

#[test]
fn empty_alphabet_with_zero_length() {
    assert!(rand_sequence(b"", 0, SEED).is_empty());
    assert_eq!(try_rand_sequence_from_rng(&mut seeded_rng(SEED), b"", 0), Ok(Vec::new()));
    assert_eq!(
        try_rand_sequence_from_rng(&mut seeded_rng(SEED), b"", 5),
        Err(GenerateError::EmptyAlphabet)
    );
}

#[test]
fn single_symbol_alphabet() {
    assert_eq!(rand_sequence(b"N", 6, SEED), b"NNNNNN");
}

#[test]
fn shape_and_alphabet() {
    let sample = random_nucleotides_seeded(7, 31, SEED);
    assert_eq!(sample.len(), 7);
    for s in &sample {
        assert_eq!(s.len(), 31);
        assert!(s.bytes().all(|b| Alphabet::Dna.contains(b)), "unexpected symbol in {s}");
    }
}

#[test]
fn zero_sample_size_is_empty() {
    assert!(random_nucleotides(0, 10).is_empty());
    assert!(random_nucleotides_seeded(0, 10, SEED).is_empty());
    assert!(NucleotideSampler::new(SEED).sample(SampleShape::new(0, 10)).is_empty());
}

#[test]
fn zero_length_gives_empty_strings() {
    assert_eq!(random_nucleotides(3, 0), vec![String::new(); 3]);
    assert_eq!(random_nucleotides_seeded(3, 0, SEED), vec![String::new(); 3]);
}

#[test]
fn seeded_is_reproducible() {
    assert_eq!(random_nucleotides_seeded(2, 10, SEED), random_nucleotides_seeded(2, 10, SEED));
    assert_ne!(random_nucleotides_seeded(2, 10, SEED), random_nucleotides_seeded(2, 10, SEED + 1));
}

#[test]
fn every_route_draws_the_same_stream() {
    let shape = SampleShape::new(4, 17);
    let expected = random_nucleotides_seeded(shape.sample_size, shape.seq_length, SEED);

    let from_rng = random_nucleotides_from_rng(&mut seeded_rng(SEED), shape.sample_size, shape.seq_length);
    assert_eq!(from_rng, expected);

    let from_sampler = NucleotideSampler::new(SEED).sample_strings(shape);
    assert_eq!(from_sampler, expected);

    seed_shared_rng(SEED);
    assert_eq!(random_nucleotides(shape.sample_size, shape.seq_length), expected);

    let concatenated = rand_sequence(b"ACGT", shape.total_bases(), SEED);
    assert_eq!(concatenated, expected.concat().into_bytes());
}

#[test]
fn shared_rng_continues_between_calls() {
    seed_shared_rng(SEED);
    let first = random_nucleotides(2, 10);
    let second = random_nucleotides(2, 10);
    assert_ne!(first, second);

    seed_shared_rng(SEED);
    assert_eq!(random_nucleotides(2, 10), first);
    assert_eq!(random_nucleotides(2, 10), second);
}

#[test]
fn unseeded_calls_differ() {
    assert_ne!(random_nucleotides(2, 10), random_nucleotides(2, 10));
}

#[test]
fn sampler_continues_its_stream() {
    let mut sampler = NucleotideSampler::new(SEED);
    let first = sampler.sequence(20);
    let second = sampler.sequence(20);
    assert_ne!(first, second);

    let both = NucleotideSampler::new(SEED).sample(SampleShape::new(2, 20));
    assert_eq!(both, vec![first, second]);
}

#[test]
fn sampler_from_external_rng() {
    let rng = seeded_rng(SEED);
    let mut sampler = NucleotideSampler::from_rng(rng).with_alphabet(Alphabet::Rna);
    assert_eq!(sampler.alphabet(), Alphabet::Rna);

    let s = sampler.sequence(50);
    assert!(s.is_over(Alphabet::Rna));

    let mut rng = sampler.into_rng();
    let next = rand_sequence_from_rng(&mut rng, Alphabet::Rna.symbols(), 50);
    let mut reference = NucleotideSampler::new(SEED).with_alphabet(Alphabet::Rna);
    let _ = reference.sequence(50);
    assert_eq!(reference.sequence(50).into_vec(), next);
}

#[test]
fn sampler_fasta_names() {
    let records = NucleotideSampler::new(SEED).sample_fasta(SampleShape::new(3, 8), "read_");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["read_1", "read_2", "read_3"]);
    assert!(records.iter().all(|r| r.sequence.len() == 8));
}

#[test]
fn entropy_sampler_draws_valid_sequences() {
    let sample = NucleotideSampler::from_entropy().sample(SampleShape::new(5, 9));
    assert!(sample.iter().all(|s| s.len() == 9 && s.is_over(Alphabet::Dna)));
}

#[test]
fn shape_validation() {
    assert_eq!(SampleShape::try_from((2_i64, 10)), Ok(SampleShape::new(2, 10)));
    assert_eq!(SampleShape::try_from((0_i64, 0)), Ok(SampleShape::new(0, 0)));
    assert_eq!(SampleShape::try_from((-1_i64, 10)), Err(GenerateError::NegativeSampleSize(-1)));
    assert_eq!(SampleShape::try_from((2_i64, -3)), Err(GenerateError::NegativeSequenceLength(-3)));
    assert_eq!(SampleShape::try_from((-1_i64, -3)), Err(GenerateError::NegativeSampleSize(-1)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn largest_signed_value_fits() {
    assert_eq!(
        SampleShape::try_from((i64::MAX, 0_i64)),
        Ok(SampleShape::new(usize::try_from(i64::MAX).unwrap(), 0))
    );
}

#[cfg(target_pointer_width = "32")]
#[test]
fn value_beyond_usize_is_too_large() {
    let big = i64::from(u32::MAX) + 1;
    assert_eq!(SampleShape::try_from((big, 0_i64)), Err(GenerateError::TooLarge(big)));
    assert_eq!(SampleShape::try_from((0_i64, big)), Err(GenerateError::TooLarge(big)));
}

#[test]
fn signed_entry_point() {
    assert_eq!(try_random_nucleotides(-2, 10), Err(GenerateError::NegativeSampleSize(-2)));
    let sample = try_random_nucleotides(2, 10).unwrap();
    assert_eq!(sample.len(), 2);
}

#[test]
fn sampler_borrowing_shared_rng() {
    let drawn = with_shared_rng(|rng| NucleotideSampler::from_rng(rng).sequence(12));
    assert_eq!(drawn.len(), 12);
}
