//! `xwrng` - command-line front end for the whitened generator
//!
//! Every subcommand builds its own generator from `--seed`, the config
//! file, or the default seed, in that order of precedence.

use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;
use tracing::info;
use xorshift_whitening_core::{analyze_distribution, stream_fingerprint, WhitenedRng};

mod file_config;
mod render;

use file_config::FileConfig;

#[derive(StructOpt)]
struct Common {
    #[structopt(short = "s", long = "seed")]
    /// Generator seed. Overrides the config file.
    seed: Option<u64>,

    #[structopt(short = "c", long = "config", parse(from_os_str))]
    /// TOML file with [generator] and [analysis] sections.
    config: Option<PathBuf>,
}

#[derive(StructOpt)]
struct ReportOpt {
    #[structopt(flatten)]
    common: Common,

    #[structopt(long = "count")]
    /// Numbers to draw; the bit test uses eight times as many bits.
    count: Option<usize>,

    #[structopt(long = "max")]
    /// Exclusive upper bound for the number test.
    max_value: Option<i64>,

    #[structopt(long = "buckets")]
    /// Histogram ranges over [0, max).
    buckets: Option<usize>,

    #[structopt(long = "json")]
    /// Print the report as JSON.
    json: bool,
}

#[derive(StructOpt)]
#[structopt(about = "Deterministic Xorshift64* bits with Von Neumann whitening.")]
enum Command {
    /// Print the distribution analysis report.
    Report(ReportOpt),

    /// Print whitened bits as 0/1 characters.
    Bits {
        #[structopt(flatten)]
        common: Common,

        #[structopt(short = "n", long = "count", allow_hyphen_values = true)]
        /// Number of bits. Negative counts reach the generator and are rejected.
        count: i64,
    },

    /// Print numbers drawn uniformly from [0, max).
    Number {
        #[structopt(flatten)]
        common: Common,

        #[structopt(short = "m", long = "max")]
        max_value: i64,

        #[structopt(short = "k", long = "samples", default_value = "1")]
        samples: usize,
    },

    /// Print whitened bytes as hex.
    Bytes {
        #[structopt(flatten)]
        common: Common,

        #[structopt(short = "n", long = "count")]
        count: usize,
    },

    /// Print the SHA-256 of the first N whitened bytes.
    Fingerprint {
        #[structopt(flatten)]
        common: Common,

        #[structopt(short = "n", long = "bytes", default_value = "1024")]
        bytes: usize,
    },
}

impl Common {
    fn generator(&self) -> Result<(WhitenedRng, FileConfig)> {
        let mut config = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.generator.seed = seed;
        }
        info!(seed = config.generator.seed, "generator seeded");
        Ok((WhitenedRng::from_config(&config.generator), config))
    }
}

fn report(opt: ReportOpt) -> Result<()> {
    let (mut rng, config) = opt.common.generator()?;
    let mut analysis = config.analysis;
    if let Some(count) = opt.count {
        analysis.sample_count = count;
    }
    if let Some(max_value) = opt.max_value {
        analysis.max_value = max_value;
    }
    if let Some(buckets) = opt.buckets {
        analysis.buckets = buckets;
    }

    let report = analyze_distribution(&mut rng, &analysis)?;
    if opt.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print!("{}", render::TextReport(&report));
    }
    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Report(opt) => report(opt)?,
        Command::Bits { common, count } => {
            let (mut rng, _) = common.generator()?;
            let bits = rng.get_random_bits(count)?;
            println!("{}", render::bit_string(&bits));
        }
        Command::Number {
            common,
            max_value,
            samples,
        } => {
            let (mut rng, _) = common.generator()?;
            for _ in 0..samples {
                println!("{}", rng.get_random_number(max_value)?);
            }
        }
        Command::Bytes { common, count } => {
            let (mut rng, _) = common.generator()?;
            let mut bytes = vec![0u8; count];
            rng.fill_bytes(&mut bytes);
            println!("{}", render::hex(&bytes));
        }
        Command::Fingerprint { common, bytes } => {
            let (mut rng, _) = common.generator()?;
            println!("{}", stream_fingerprint(&mut rng, bytes));
        }
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    run(Command::from_args())
}
