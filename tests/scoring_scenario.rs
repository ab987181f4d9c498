mod common;

use common::StubOracle;
use indicatif::ProgressBar;
use simtable::{
    build_pair_table, build_sentence_table, pair_targets, score_candidates, score_word,
    CandidateFilter, LexiconAnnotator, PairConfig, SentenceConfig, TextSource,
};

fn heated_blanket_oracle() -> StubOracle {
    StubOracle::new(&["heated", "blanket", "frigid", "toasty", "warm", "cozy"])
        .with_zero_vector("void")
        .sim("frigid", "heated", 0.42)
        .sim("frigid", "blanket", 0.31)
        .sim("heated", "blanket", 0.37)
        .sim("toasty", "heated", -0.2)
        .sim("toasty", "blanket", 0.55)
}

#[test]
fn frigid_scores_against_both_targets() {
    let oracle = heated_blanket_oracle();
    let targets = pair_targets(&["heated", "blanket"]);
    assert_eq!(score_word(&oracle, "frigid", &targets), Some(vec![42, 31]));
    assert_eq!(score_word(&oracle, "asdfzzz", &targets), None);
}

#[test]
fn negative_similarity_reads_as_zero() {
    let oracle = heated_blanket_oracle();
    let targets = pair_targets(&["heated", "blanket"]);
    assert_eq!(score_word(&oracle, "toasty", &targets), Some(vec![0, 55]));
}

#[test]
fn zero_norm_vector_is_skipped() {
    let oracle = heated_blanket_oracle();
    let targets = pair_targets(&["heated", "blanket"]);
    assert_eq!(score_word(&oracle, "void", &targets), None);
}

#[test]
fn pair_table_patches_own_columns() {
    let oracle = heated_blanket_oracle();
    let source = TextSource("frigid\nasdfzzz\nheated\nvoid\n".to_string());
    let build = build_pair_table(
        &oracle,
        &source,
        &PairConfig::default(),
        &ProgressBar::hidden(),
    )
    .unwrap();
    let table = build.data;

    assert_eq!(table.get("frigid"), Some(&[42, 31][..]));
    assert!(!table.contains("asdfzzz"));
    assert!(!table.contains("void"));
    // raw self-similarity is 0.994, the patch lifts it to 100
    assert_eq!(table.get("heated"), Some(&[100, 37][..]));
    // blanket never appeared in the list
    assert_eq!(table.get("blanket"), Some(&[0, 100][..]));
    assert_eq!(build.stats.inserted_targets, 1);
    assert_eq!(build.stats.no_vector, 2);
    assert_eq!(build.stats.missing_target_vectors, 0);
}

#[test]
fn targets_without_vectors_are_counted() {
    let oracle = heated_blanket_oracle();
    let config = PairConfig {
        targets: vec!["heated".into(), "snowman".into(), "void".into()],
        ..PairConfig::default()
    };
    let build = build_pair_table(
        &oracle,
        &TextSource("frigid\n".to_string()),
        &config,
        &ProgressBar::hidden(),
    )
    .unwrap();

    assert_eq!(build.stats.missing_target_vectors, 2);
    assert_eq!(build.data.get("frigid"), Some(&[42, 0, 0][..]));
    assert_eq!(build.data.get("snowman"), Some(&[0, 100, 0][..]));
}

#[test]
fn duplicates_and_length_filters() {
    let oracle = StubOracle::new(&["frigid", "a", "heated", "blanket"]);
    let targets = pair_targets(&["heated"]);
    let raw = "Frigid\nfrigid\n  FRIGID \n\na\nabcdefghijk\n";
    let (table, stats) = score_candidates(
        &oracle,
        raw,
        &targets,
        CandidateFilter::new(2, 10),
        None,
        &ProgressBar::hidden(),
    );
    assert_eq!(table.len(), 1);
    assert!(table.contains("frigid"));
    assert_eq!(stats.duplicates, 2);
    assert_eq!(stats.empty, 1);
    assert_eq!(stats.too_short, 1);
    assert_eq!(stats.too_long, 1);
}

#[test]
fn cap_keeps_first_words_in_source_order() {
    let oracle = StubOracle::new(&["heated", "frigid", "toasty", "warm", "cozy"]);
    let targets = pair_targets(&["heated"]);
    let raw = "asdf\nfrigid\ntoasty\nwarm\ncozy\n";
    let (table, stats) = score_candidates(
        &oracle,
        raw,
        &targets,
        CandidateFilter::new(2, 10),
        Some(2),
        &ProgressBar::hidden(),
    );
    assert_eq!(stats.scored, 2);
    assert!(stats.capped);
    assert!(table.contains("frigid"));
    assert!(table.contains("toasty"));
    assert!(!table.contains("warm"));
    assert!(!table.contains("cozy"));
    // the unknown word before the cap does not count toward it
    assert_eq!(stats.no_vector, 1);
}

#[test]
fn zero_cap_leaves_only_targets() {
    let oracle = StubOracle::new(&["heated", "blanket", "frigid"]);
    let config = SentenceConfig {
        sentence: "heated blanket".to_string(),
        max_words: Some(0),
        ..SentenceConfig::default()
    };
    let build = build_sentence_table(
        &oracle,
        &LexiconAnnotator::new(),
        &TextSource("frigid\nheated\n".to_string()),
        &config,
        &ProgressBar::hidden(),
    )
    .unwrap();
    let table = &build.data.dictionary;
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("heated"), Some(&[100, 0][..]));
    assert_eq!(table.get("blanket"), Some(&[0, 100][..]));
    assert!(build.stats.capped);
}
