use crate::jmdict::build;

const SAMPLE: &str = r#"{
  "version": "3.5.0",
  "words": [
    {
      "id": "1",
      "kanji": [{"common": true, "text": "日本"}],
      "kana": [{"common": true, "text": "にほん"}, {"common": false, "text": "にっぽん"}],
      "sense": [{"partOfSpeech": ["n"], "gloss": [{"lang": "eng", "text": "Japan"}], "info": []}]
    },
    {
      "id": "2",
      "kanji": [{"common": true, "text": "本"}],
      "kana": [{"common": true, "text": "ほん"}],
      "sense": [
        {"partOfSpeech": ["n"], "gloss": [{"lang": "eng", "text": "book"}, {"lang": "eng", "text": "volume"}, {"lang": "ger", "text": "Buch"}]},
        {"partOfSpeech": ["n", "pref"], "gloss": [{"lang": "eng", "text": "main"}]}
      ]
    },
    {
      "id": "3",
      "kanji": [{"common": false, "text": "翻"}],
      "kana": [{"common": false, "text": "ほん"}],
      "sense": [{"partOfSpeech": ["n"], "gloss": [{"lang": "eng", "text": "flipping"}]}]
    },
    {
      "id": "4",
      "kanji": [],
      "kana": [{"common": true, "text": "です"}],
      "sense": [{"partOfSpeech": ["cop"], "gloss": [{"lang": "eng", "text": "be"}], "info": ["polite"]}]
    },
    {
      "id": "5",
      "kanji": [{"common": false, "text": "〆"}],
      "kana": [],
      "sense": [{"gloss": [{"lang": "eng", "text": "closing"}]}]
    },
    {
      "id": "6",
      "kana": [{"text": "テスト"}],
      "sense": [{"gloss": [{"lang": "ger", "text": "Prüfung"}]}]
    },
    {"id": "7", "kana": "oops"}
  ]
}"#;

#[test]
fn test_kanji_and_kana_keys() {
    let (index, _) = build(SAMPLE.as_bytes(), |_| {}).unwrap();

    let japan = index.get("日本").unwrap();
    assert_eq!(japan.reading, "にほん");
    assert!(japan.common);

    let variant = index.get("にっぽん").unwrap();
    assert_eq!(variant.headword, "にっぽん");
    assert_eq!(variant.reading, "にっぽん");
    assert!(!variant.common);
    assert_eq!(variant.glosses, vec!["Japan"]);
}

#[test]
fn test_kana_never_overwrites_existing_key() {
    let (index, _) = build(SAMPLE.as_bytes(), |_| {}).unwrap();

    // ほん belongs to 本, which was indexed first
    let hon = index.get("ほん").unwrap();
    assert_eq!(hon.glosses[0], "book, volume");
    assert_eq!(index.get("翻").unwrap().glosses, vec!["flipping"]);
}

#[test]
fn test_kanji_overwrites_earlier_kana_key() {
    let source = r#"{"words": [
        {"kana": [{"text": "かな"}], "sense": [{"gloss": [{"lang": "eng", "text": "first"}]}]},
        {"kanji": [{"text": "かな"}], "kana": [{"text": "かんな"}], "sense": [{"gloss": [{"lang": "eng", "text": "second"}]}]}
    ]}"#;
    let (index, _) = build(source.as_bytes(), |_| {}).unwrap();

    let entry = index.get("かな").unwrap();
    assert_eq!(entry.glosses, vec!["second"]);
    assert_eq!(entry.reading, "かんな");
}

#[test]
fn test_senses_pos_and_notes() {
    let (index, _) = build(SAMPLE.as_bytes(), |_| {}).unwrap();

    let book = index.get("本").unwrap();
    assert_eq!(book.glosses, vec!["book, volume", "main"]);
    assert_eq!(book.part_of_speech, vec!["n", "pref"]);

    let desu = index.get("です").unwrap();
    assert_eq!(desu.notes, vec!["polite"]);
    assert!(desu.common);
}

#[test]
fn test_examples_are_paired_deduplicated_and_capped() {
    let sentence = |jp: &str, en: &str| {
        format!(
            r#"{{"source": {{"type": "tatoeba", "value": "1"}}, "text": "x", "sentences": [{{"land": "jpn", "text": "{jp}"}}, {{"land": "eng", "text": "{en}"}}]}}"#
        )
    };
    let source = format!(
        r#"{{"words": [{{"kanji": [{{"text": "猫"}}], "kana": [{{"text": "ねこ"}}], "sense": [
            {{"gloss": [{{"lang": "eng", "text": "cat"}}], "examples": [{}, {}, {{"sentences": [{{"land": "jpn", "text": "猫だけ"}}]}}]}},
            {{"gloss": [{{"lang": "eng", "text": "geisha"}}], "examples": [{}, {}, {}]}}
        ]}}]}}"#,
        sentence("猫がいる。", "There is a cat."),
        sentence("猫がいる。", "There is a cat."),
        sentence("猫が好き。", "I like cats."),
        sentence("黒い猫。", "A black cat."),
        sentence("白い猫。", "A white cat."),
    );
    let (index, _) = build(source.as_bytes(), |_| {}).unwrap();

    let cat = index.get("猫").unwrap();
    assert_eq!(
        cat.examples,
        vec![
            "猫がいる。 (There is a cat.)",
            "猫が好き。 (I like cats.)",
            "黒い猫。 (A black cat.)",
        ]
    );
    assert_eq!(index.get("ねこ").unwrap().examples, cat.examples);
}

#[test]
fn test_skip_counts() {
    let (index, report) = build(SAMPLE.as_bytes(), |_| {}).unwrap();

    // no kana, no English gloss, malformed
    assert_eq!(report.skipped, 3);
    assert_eq!(report.indexed, 4);
    assert_eq!(report.processed, 7);
    assert_eq!(report.keys, index.len());
    assert!(index.get("〆").is_none());
    assert!(index.get("テスト").is_none());
}

#[test]
fn test_invalid_document() {
    assert!(build("[1, 2".as_bytes(), |_| {}).is_err());
}

#[test]
fn test_rebuild_is_identical() {
    let (a, _) = build(SAMPLE.as_bytes(), |_| {}).unwrap();
    let (b, _) = build(SAMPLE.as_bytes(), |_| {}).unwrap();
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}
