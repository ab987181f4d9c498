use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use simtable::config::{self, CandidateFilter, FetchOptions, WordListLocation};
use simtable::io_utils::{io_cli_error, table_cli_error};
use simtable::logging::init_tracing;
use simtable::{
    build_pair_table, build_sentence_table, render_pair_table, render_sentence_payload,
    source_for, write_output, LexiconAnnotator, PairConfig, RunSummary, SentenceConfig,
    TableError, WordVectors,
};

/// Precompute word similarity tables for the guessing game.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score the dictionary against literal target words, write plain JSON.
    Pair(PairArgs),
    /// Score the dictionary against the significant words of a sentence,
    /// write a script assignment with the sentence structure.
    Sentence(SentenceArgs),
}

#[derive(Args)]
struct CommonArgs {
    /// Word list URL
    #[arg(long, conflicts_with = "words_file")]
    url: Option<String>,
    /// Read the word list from a local file instead of downloading it
    #[arg(long)]
    words_file: Option<PathBuf>,
    /// Text embedding file (GloVe or word2vec text format)
    #[arg(long, default_value = config::VECTORS_FILE)]
    vectors: PathBuf,
    /// Output file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Minimum word length in characters (pair: 1, sentence: 2)
    #[arg(long)]
    min_len: Option<usize>,
    /// Maximum word length in characters
    #[arg(long, default_value_t = config::MAX_WORD_LEN)]
    max_len: usize,
    /// Download timeout in seconds (default: none)
    #[arg(long)]
    fetch_timeout_secs: Option<u64>,
    /// Ignore HTTP_PROXY / HTTPS_PROXY for the download
    #[arg(long)]
    no_proxy: bool,
    /// Print a JSON run summary on stdout
    #[arg(long)]
    json: bool,
    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
    /// Log filter, e.g. "info" or "simtable=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl CommonArgs {
    fn word_list(&self, default_url: &str) -> WordListLocation {
        match (&self.words_file, &self.url) {
            (Some(path), _) => WordListLocation::File(path.clone()),
            (None, Some(url)) => WordListLocation::Url(url.clone()),
            (None, None) => WordListLocation::Url(default_url.to_string()),
        }
    }

    fn filter(&self, default_min_len: usize) -> CandidateFilter {
        CandidateFilter::new(self.min_len.unwrap_or(default_min_len), self.max_len)
    }

    fn fetch(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.fetch_timeout_secs.map(Duration::from_secs),
            use_system_proxy: !self.no_proxy,
        }
    }
}

#[derive(Args)]
struct PairArgs {
    /// Target word, repeat for more columns (default: heated, blanket)
    #[arg(long = "target")]
    targets: Vec<String>,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct SentenceArgs {
    /// Secret sentence
    #[arg(long, default_value = config::SECRET_SENTENCE)]
    sentence: String,
    /// Extra part-of-speech lexicon, one word<TAB>TAG per line
    #[arg(long)]
    pos_lexicon: Option<PathBuf>,
    /// Stop after this many scored words, in list order
    #[arg(long, default_value_t = config::MAX_SCORED_WORDS)]
    max_words: usize,
    /// Assignment target in the generated script
    #[arg(long = "global", default_value = config::GLOBAL_NAME)]
    global_name: String,
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Pair(args) => run_pair(args),
        Command::Sentence(args) => run_sentence(args),
    }
}

fn progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} words {msg}",
    ) {
        bar.set_style(style.progress_chars("##-"));
    }
    bar
}

fn load_vectors(path: &Path) -> Result<WordVectors, Box<dyn std::error::Error>> {
    info!("loading language model");
    WordVectors::from_file(path).map_err(|e| match e {
        TableError::Io(io) => io_cli_error("reading embedding file", path, io).into(),
        other => table_cli_error("loading embedding file", Some(path), other).into(),
    })
}

fn finish(summary: RunSummary, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!(
            "saved {} words ({:.2} KB) to {} in {} ms",
            summary.table_size,
            summary.output_bytes as f64 / 1024.0,
            summary.output.display(),
            summary.elapsed_ms
        );
    }
    Ok(())
}

fn run_pair(args: PairArgs) -> Result<(), Box<dyn std::error::Error>> {
    let common = args.common;
    init_tracing(&common.log_level);
    let start = Instant::now();

    let defaults = PairConfig::default();
    let config = PairConfig {
        targets: if args.targets.is_empty() {
            defaults.targets
        } else {
            args.targets
        },
        word_list: common.word_list(config::PAIR_WORD_LIST_URL),
        vectors: common.vectors.clone(),
        output: common.output.clone().unwrap_or(defaults.output),
        filter: common.filter(defaults.filter.min_len),
        fetch: common.fetch(),
    };
    config
        .validate()
        .map_err(|e| table_cli_error("invalid arguments", None, e))?;

    let oracle = load_vectors(&config.vectors)?;
    let source = source_for(&config.word_list, &config.fetch);
    let progress = progress_bar(common.quiet);

    let build = build_pair_table(&oracle, source.as_ref(), &config, &progress)
        .map_err(|e| word_list_error(&config.word_list, e))?;
    let rendered = render_pair_table(&build.data)
        .map_err(|e| table_cli_error("rendering table", None, e))?;
    let bytes = write_output(&config.output, &rendered)
        .map_err(|e| write_error(&config.output, e))?;

    finish(
        RunSummary {
            variant: "pair",
            targets: build.targets.iter().map(|t| t.text.clone()).collect(),
            raw_words: build.stats.raw_lines,
            scored_words: build.stats.scored,
            table_size: build.data.len(),
            capped: build.stats.capped,
            missing_target_vectors: build.stats.missing_target_vectors,
            output: config.output,
            output_bytes: bytes,
            elapsed_ms: start.elapsed().as_millis(),
        },
        common.json,
    )
}

fn run_sentence(args: SentenceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let common = args.common;
    init_tracing(&common.log_level);
    let start = Instant::now();

    let defaults = SentenceConfig::default();
    let config = SentenceConfig {
        sentence: args.sentence,
        word_list: common.word_list(config::SENTENCE_WORD_LIST_URL),
        vectors: common.vectors.clone(),
        pos_lexicon: args.pos_lexicon,
        output: common.output.clone().unwrap_or(defaults.output),
        filter: common.filter(defaults.filter.min_len),
        max_words: Some(args.max_words),
        global_name: args.global_name,
        fetch: common.fetch(),
    };
    config
        .validate()
        .map_err(|e| table_cli_error("invalid arguments", None, e))?;

    let annotator = match &config.pos_lexicon {
        Some(path) => LexiconAnnotator::new()
            .with_lexicon_file(path)
            .map_err(|e| table_cli_error("loading POS lexicon", Some(path.as_path()), e))?,
        None => LexiconAnnotator::new(),
    };
    let oracle = load_vectors(&config.vectors)?;
    let source = source_for(&config.word_list, &config.fetch);
    let progress = progress_bar(common.quiet);

    let build = build_sentence_table(&oracle, &annotator, source.as_ref(), &config, &progress)
        .map_err(|e| word_list_error(&config.word_list, e))?;
    let rendered = render_sentence_payload(&build.data, &config.global_name)
        .map_err(|e| table_cli_error("rendering table", None, e))?;
    let bytes = write_output(&config.output, &rendered)
        .map_err(|e| write_error(&config.output, e))?;

    finish(
        RunSummary {
            variant: "sentence",
            targets: build.targets.iter().map(|t| t.text.clone()).collect(),
            raw_words: build.stats.raw_lines,
            scored_words: build.stats.scored,
            table_size: build.data.dictionary.len(),
            capped: build.stats.capped,
            missing_target_vectors: build.stats.missing_target_vectors,
            output: config.output,
            output_bytes: bytes,
            elapsed_ms: start.elapsed().as_millis(),
        },
        common.json,
    )
}

fn word_list_error(location: &WordListLocation, err: TableError) -> Box<dyn std::error::Error> {
    match (location, err) {
        (WordListLocation::File(path), TableError::Io(io)) => {
            io_cli_error("reading word list", path, io).into()
        }
        (_, other) => table_cli_error("building table", None, other).into(),
    }
}

fn write_error(path: &Path, err: TableError) -> Box<dyn std::error::Error> {
    match err {
        TableError::Io(io) => io_cli_error("writing output file", path, io).into(),
        other => table_cli_error("writing output file", None, other).into(),
    }
}
