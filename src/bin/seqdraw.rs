use clap::{Parser, ValueEnum};
use log::{debug, info};
use seqdraw::prelude::*;
use std::{
    fmt,
    io::{self, BufWriter, Write},
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AlphabetArg {
    #[clap(name = "dna")]
    Dna,
    #[clap(name = "rna")]
    Rna,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Dna => Alphabet::Dna,
            AlphabetArg::Rna => Alphabet::Rna,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    #[clap(name = "plain")]
    #[clap(alias = "p")]
    Plain,
    #[clap(name = "fasta")]
    #[clap(alias = "f")]
    Fasta,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Fasta => "fasta",
        };
        write!(f, "{s}")
    }
}

/// Draw random nucleotide sequences
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of sequences to draw
    #[arg(allow_negative_numbers = true)]
    sample_size: i64,

    /// Length of every sequence
    #[arg(allow_negative_numbers = true)]
    seq_length: i64,

    /// Seed for reproducible output; OS entropy otherwise
    #[arg(short, long)]
    seed: Option<u64>,

    /// Alphabet the bases are drawn from
    #[arg(short, long, value_enum, default_value_t = AlphabetArg::Dna)]
    alphabet: AlphabetArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Prefix of FASTA record names, followed by a 1-based index
    #[arg(short, long, default_value = "seq_")]
    prefix: String,

    /// Wrap FASTA sequences at this many bases; 0 disables wrapping
    #[arg(short = 'w', long = "line-width", default_value_t = 0)]
    line_width: usize,

    /// Log the base composition of the sample
    #[arg(long)]
    summary: bool,
}

/// Streams the sample to `writer`, returning its composition when requested.
fn write_sample<W: Write>(
    cli: &Cli, shape: SampleShape, sampler: &mut NucleotideSampler, writer: &mut W,
) -> io::Result<NucleotideCounts> {
    let mut counts = NucleotideCounts::new();
    let sequences = sampler.sequences(shape.seq_length).take(shape.sample_size);

    for (i, sequence) in sequences.enumerate() {
        if cli.summary {
            counts.tally_from_seq(&sequence);
        }

        match cli.format {
            OutputFormat::Plain => {
                writer.write_all(sequence.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            OutputFormat::Fasta => {
                let record = FastaSeq::from((numbered_name(&cli.prefix, i + 1), sequence));
                record.write_wrapped(writer, Some(cli.line_width))?;
            }
        }
    }

    writer.flush()?;
    Ok(counts)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{cli:?}");

    let shape = SampleShape::try_from((cli.sample_size, cli.seq_length)).unwrap_or_die("Invalid sample dimensions.");

    let sampler = if let Some(seed) = cli.seed {
        info!("Seeding the generator with {seed}");
        NucleotideSampler::new(seed)
    } else {
        NucleotideSampler::from_entropy()
    };
    let mut sampler = sampler.with_alphabet(cli.alphabet.into());

    info!(
        "Writing {} sequences of length {} as {}",
        shape.sample_size, shape.seq_length, cli.format
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let counts = write_sample(&cli, shape, &mut sampler, &mut writer).unwrap_or_die("Could not write the sample.");

    if cli.summary {
        info!(
            "Composition: A={} C={} G={} T/U={} (GC {})",
            counts.a(),
            counts.c(),
            counts.g(),
            counts.t(),
            counts.total_gc()
        );
    }
}
