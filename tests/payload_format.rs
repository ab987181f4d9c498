use std::fs;

use simtable::{
    load_payload, parse_payload, render_pair_table, render_sentence_payload, write_output,
    EntryKind, GameData, Payload, ScoreTable, StructureEntry, TableError,
};

fn sample_table() -> ScoreTable {
    let mut table = ScoreTable::new();
    table.insert("heated".into(), vec![100, 37]);
    table.insert("blanket".into(), vec![37, 100]);
    table.insert("frigid".into(), vec![42, 31]);
    table
}

fn sample_game() -> GameData {
    GameData {
        structure: vec![
            StructureEntry {
                text: "My".into(),
                kind: EntryKind::Filler,
                id: None,
            },
            StructureEntry {
                text: "heated".into(),
                kind: EntryKind::Target,
                id: Some(0),
            },
            StructureEntry {
                text: "blanket".into(),
                kind: EntryKind::Target,
                id: Some(1),
            },
        ],
        dictionary: sample_table(),
    }
}

#[test]
fn pair_table_is_minified_json() {
    let json = render_pair_table(&sample_table()).unwrap();
    assert_eq!(
        json,
        r#"{"blanket":[37,100],"frigid":[42,31],"heated":[100,37]}"#
    );
}

#[test]
fn sentence_payload_is_an_assignment() {
    let text = render_sentence_payload(&sample_game(), "window.GAME_DATA").unwrap();
    assert!(text.starts_with(
        r#"window.GAME_DATA = {"structure":[{"text":"My","type":"filler"},{"text":"heated","type":"target","id":0}"#
    ));
    assert!(text.ends_with(r#""heated":[100,37]}};"#));
    assert!(!text.contains('\n'));
}

#[test]
fn reads_back_both_formats() {
    let dir = tempfile::tempdir().unwrap();

    let pair_path = dir.path().join("words.json");
    let json = render_pair_table(&sample_table()).unwrap();
    let bytes = write_output(&pair_path, &json).unwrap();
    assert_eq!(bytes, fs::metadata(&pair_path).unwrap().len());
    assert_eq!(load_payload(&pair_path).unwrap(), Payload::Pair(sample_table()));

    let js = render_sentence_payload(&sample_game(), "window.GAME_DATA").unwrap();
    match parse_payload(&js).unwrap() {
        Payload::Sentence(game) => assert_eq!(game, sample_game()),
        other => panic!("expected sentence payload, got {other:?}"),
    }
}

#[test]
fn rejects_malformed_payloads() {
    assert!(matches!(parse_payload("garbage"), Err(TableError::Payload(_))));
    assert!(matches!(parse_payload("x = [1, 2];"), Err(TableError::Payload(_))));
    assert!(matches!(parse_payload("{\"a\": 3}"), Err(TableError::Json(_))));
}

#[test]
fn pair_table_with_structure_key_stays_a_pair_table() {
    let mut table = sample_table();
    table.insert("structure".into(), vec![12, 40]);
    table.insert("dictionary".into(), vec![8, 3]);
    let json = render_pair_table(&table).unwrap();
    assert_eq!(parse_payload(&json).unwrap(), Payload::Pair(table));
}
