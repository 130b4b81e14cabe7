use std::path::PathBuf;

use clap::Parser;
use log::info;

use rs_phrase_core::io::read_words;
use rs_phrase_core::ngram::config::{NgramConfig, DEFAULT_BUCKET_COUNT, DEFAULT_NGRAM_SIZE};
use rs_phrase_core::NgramList;

/// Count the n-word phrases of a text file and list them by frequency.
#[derive(Parser, Debug)]
#[command(name = "rs-phrase", version, about)]
struct Cli {
    /// Text file to read words from
    file: PathBuf,

    /// Number of words per phrase
    #[arg(short = 'n', long = "ngram-size", default_value_t = DEFAULT_NGRAM_SIZE)]
    ngram_size: usize,

    /// Number of hash table buckets
    #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
    buckets: usize,

    /// Only print the K most frequent phrases
    #[arg(long, value_name = "K")]
    top: Option<usize>,
}

impl Cli {
    fn config(&self) -> Result<NgramConfig, rs_phrase_core::NgramError> {
        NgramConfig::new(self.ngram_size)?.with_bucket_count(self.buckets)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config()?;

    // Load the word list, then count and rank its phrases
    let words = read_words(&cli.file)?;
    let list = NgramList::with_config(config, &words)?;
    info!(
        "{} words, {} distinct {}-word phrases",
        words.len(),
        list.table().len(),
        list.ngram_size()
    );

    let mut report = String::new();
    list.write_report(&mut report, cli.top)?;
    print!("{}", report);

    Ok(())
}
