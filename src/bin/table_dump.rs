use clap::Parser;
use std::path::PathBuf;
use simtable::{
    io_utils::{io_cli_error, table_cli_error},
    load_payload, EntryKind, ScoreTable, TableError,
};

/// Inspect a generated words.json / words.js table.
#[derive(Parser)]
struct Args {
    /// Table file written by `simtable pair` or `simtable sentence`
    input: PathBuf,
    /// Number of best-scoring words to list per target column
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Print the score vector of this word (repeatable)
    #[arg(long = "word")]
    words: Vec<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let payload = load_payload(&args.input).map_err(|e| match e {
        TableError::Io(io) => io_cli_error("reading input file", &args.input, io),
        other => table_cli_error("parsing table", None, other),
    })?;

    if let Some(structure) = payload.structure() {
        let rendered: Vec<String> = structure
            .iter()
            .map(|e| match (e.kind, e.id) {
                (EntryKind::Target, Some(id)) => format!("[{}#{id}]", e.text),
                _ => e.text.clone(),
            })
            .collect();
        println!("Sentence: {}", rendered.join(" "));
    }

    let table = payload.table();
    let columns = table.iter().map(|(_, s)| s.len()).max().unwrap_or(0);
    println!("Words: {}  Columns: {}", table.len(), columns);

    for column in 0..columns {
        let best = top_words(table, column, args.top);
        let list: Vec<String> = best.iter().map(|(w, s)| format!("{w}:{s}")).collect();
        println!("Column {column}: {}", list.join(" "));
    }

    for word in &args.words {
        let key = word.trim().to_lowercase();
        match table.get(&key) {
            Some(scores) => println!("{key}: {scores:?}"),
            None => println!("{key}: not in table"),
        }
    }
    Ok(())
}

/// Highest scores in `column`, ties broken alphabetically.
fn top_words(table: &ScoreTable, column: usize, n: usize) -> Vec<(&str, u8)> {
    let mut scored: Vec<(&str, u8)> = table
        .iter()
        .filter_map(|(w, s)| s.get(column).map(|v| (w, *v)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    scored.truncate(n);
    scored
}
