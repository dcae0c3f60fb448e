use seqdraw::prelude::*;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (samples, length) = if args.len() == 3 {
        (args[1].parse::<u64>().unwrap_or_fail(), args[2].parse::<usize>().unwrap_or_fail())
    } else {
        println!("Usage:\n\t{} <samples> <length>\n\nSetting to: 4 4", &args[0]);
        (4, 4)
    };

    // Each row comes from its own seed, so row `i` is the same for any sample size.
    for seed in 0..samples {
        let s = NucleotideSampler::new(seed).sequence(length);
        println!("{s}");
    }

    let shape = SampleShape::new(2, length);
    for s in NucleotideSampler::new(samples).sample(shape) {
        println!("{s}\t{}", s.nucleotide_counts().total_gc());
    }
}
