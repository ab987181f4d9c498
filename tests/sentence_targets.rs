mod common;

use common::StubOracle;
use indicatif::ProgressBar;
use simtable::config::SECRET_SENTENCE;
use simtable::{
    build_sentence_table, extract_targets, EntryKind, LexiconAnnotator, PosTag, SentenceConfig,
    TableError, TextSource,
};

#[test]
fn target_ids_are_contiguous_in_sentence_order() {
    let (targets, structure) = extract_targets(&LexiconAnnotator::new(), SECRET_SENTENCE).unwrap();

    let ids: Vec<usize> = structure
        .iter()
        .filter(|e| e.kind == EntryKind::Target)
        .map(|e| e.id.unwrap())
        .collect();
    assert_eq!(ids, (0..targets.len()).collect::<Vec<_>>());
    for (i, t) in targets.iter().enumerate() {
        assert_eq!(t.index, i);
    }
    assert!(structure
        .iter()
        .filter(|e| e.kind == EntryKind::Filler)
        .all(|e| e.id.is_none()));
}

#[test]
fn default_sentence_classification() {
    let (targets, structure) = extract_targets(&LexiconAnnotator::new(), SECRET_SENTENCE).unwrap();
    let words: Vec<&str> = targets.iter().map(|t| t.text.as_str()).collect();

    for expected in ["koala", "otter", "radiate", "frigid", "Christmas", "toasty", "heated", "blanket"] {
        assert!(words.contains(&expected), "{expected} should be a target");
    }
    assert_eq!(words.first(), Some(&"beloved"));
    assert_eq!(words.last(), Some(&"blanket"));

    let fillers: Vec<&str> = structure
        .iter()
        .filter(|e| e.kind == EntryKind::Filler)
        .map(|e| e.text.as_str())
        .collect();
    for expected in ["My", ",", "since", "cannot", "please", ":", "!"] {
        assert!(fillers.contains(&expected), "{expected} should be filler");
    }
    // structure keeps every token in order
    assert_eq!(structure.first().map(|e| e.text.as_str()), Some("My"));
    assert_eq!(structure.last().map(|e| e.text.as_str()), Some("!"));
}

#[test]
fn short_content_words_are_fillers() {
    let mut annotator = LexiconAnnotator::new();
    annotator.insert("ox", PosTag::Noun);
    let (targets, structure) = extract_targets(&annotator, "ox ate hay").unwrap();
    let words: Vec<&str> = targets.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(words, ["ate", "hay"]);
    assert_eq!(structure[0].kind, EntryKind::Filler);
}

#[test]
fn sentence_without_content_words_fails() {
    let err = extract_targets(&LexiconAnnotator::new(), "and so it is , to be .").unwrap_err();
    assert!(matches!(err, TableError::NoTargets));
}

#[test]
fn every_target_scores_100_on_its_own_column() {
    let oracle = StubOracle::new(&["warm", "frigid", "blanket", "christmas"])
        .sim("warm", "blanket", 0.61)
        .sim("frigid", "blanket", 0.12);
    let config = SentenceConfig {
        sentence: "Warm frigid Christmas blanket".to_string(),
        ..SentenceConfig::default()
    };
    let build = build_sentence_table(
        &oracle,
        &LexiconAnnotator::new(),
        &TextSource("warm\nfrigid\nsnow\n".to_string()),
        &config,
        &ProgressBar::hidden(),
    )
    .unwrap();

    let table = &build.data.dictionary;
    assert_eq!(build.targets.len(), 4);
    for t in &build.targets {
        let scores = table.get(&t.key()).unwrap();
        assert_eq!(scores.len(), 4);
        assert_eq!(scores[t.index], 100);
    }
    // off-diagonal entries stay as the oracle computed them
    assert_eq!(table.get("warm"), Some(&[100, 0, 0, 61][..]));
    assert!(!table.contains("snow"));
}

#[test]
fn contractions_never_become_targets() {
    let (targets, structure) =
        extract_targets(&LexiconAnnotator::new(), "It's cold and I can't sleep").unwrap();
    let words: Vec<&str> = targets.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(words, ["cold", "sleep"]);

    let texts: Vec<&str> = structure.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["It", "'s", "cold", "and", "I", "ca", "n't", "sleep"]);
    assert!(structure
        .iter()
        .filter(|e| e.text.contains('\''))
        .all(|e| e.kind == EntryKind::Filler));
}
