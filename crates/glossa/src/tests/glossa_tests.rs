use glossa_config::Config;
use glossa_config::segmentation::SegmentationMode;
use glossa_core::dictionary::{DictionaryEntry, DictionaryIndex};
use glossa_core::language::LanguageTag;
use glossa_core::lookup::LookupSource;
use glossa_lang_japanese::FuriganaState;
use glossa_lang_korean::processor::{NAME_HINT, UNKNOWN_HINT};

use crate::Glossa;

fn offline() -> Config {
    let mut config = Config::default();
    config.remote.enabled = false;
    config.segmentation.mode = SegmentationMode::LongestMatch;
    config
}

fn entry(headword: &str, reading: &str, gloss: &str) -> DictionaryEntry {
    DictionaryEntry {
        headword: headword.to_string(),
        reading: reading.to_string(),
        glosses: vec![gloss.to_string()],
        ..Default::default()
    }
}

#[test]
fn test_segment_per_language() {
    let glossa = Glossa::new(offline());

    let chinese: Vec<String> = glossa
        .segment("我喜欢学习", &LanguageTag::Chinese)
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(chinese, vec!["我", "喜欢", "学习"]);

    let korean = glossa.segment("학교에서", &LanguageTag::Korean);
    assert_eq!(korean.len(), 2);
    assert!(korean[1].is_particle);

    let english: Vec<String> = glossa
        .segment("plain words", &LanguageTag::from_code("en"))
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(english, vec!["plain", " ", "words"]);
}

#[test]
fn test_resolver_is_shared_per_language() {
    let glossa = Glossa::new(offline());
    let first = glossa.resolver(&LanguageTag::Japanese);
    let second = glossa.resolver(&LanguageTag::Japanese);
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_resolve_embedded() {
    let glossa = Glossa::new(offline());

    let result = glossa.resolve("学校", &LanguageTag::Chinese).await.unwrap();
    assert_eq!(result.source, LookupSource::Embedded);
    assert_eq!(result.reading, "xué xiào");

    let result = glossa.resolve("좋아해요", &LanguageTag::Korean).await.unwrap();
    assert_eq!(result.word, "좋아하다");

    assert!(glossa.resolve("zzz", &LanguageTag::from_code("en")).await.is_none());
}

#[tokio::test]
async fn test_embedded_can_be_disabled() {
    let mut config = offline();
    config.dictionary.embedded = false;
    let glossa = Glossa::new(config);

    assert!(glossa.resolve("学校", &LanguageTag::Chinese).await.is_none());
}

#[tokio::test]
async fn test_full_index_from_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zh.json");
    let index: DictionaryIndex = [
        ("电脑", entry("电脑", "dian4 nao3", "computer")),
        ("学", entry("学", "xue2", "to learn")),
        ("习", entry("习", "xi2", "to practice")),
    ]
    .into_iter()
    .map(|(k, e)| (k.to_string(), e))
    .collect();
    index.save_to_file(&path).unwrap();

    let mut config = offline();
    config.dictionary.chinese_path = Some(path.display().to_string());
    let glossa = Glossa::new(config);

    let computer = glossa.resolve("电脑", &LanguageTag::Chinese).await.unwrap();
    assert_eq!(computer.source, LookupSource::FullDict);
    assert_eq!(computer.reading, "diàn nǎo");

    // the full index is loaded now, so the breakdown can use it
    let study = glossa.resolve("学习", &LanguageTag::Chinese).await.unwrap();
    assert_eq!(study.source, LookupSource::Embedded);
    let characters: Vec<&str> = study.components.iter().map(|c| c.character.as_str()).collect();
    assert_eq!(characters, vec!["学", "习"]);
    assert_eq!(study.components[1].reading, "xí");
}

#[tokio::test]
async fn test_annotate_keeps_every_token() {
    let glossa = Glossa::new(offline());
    let annotated = glossa.annotate("我是学生 我", &LanguageTag::Chinese).await;

    let texts: Vec<&str> = annotated.iter().map(|a| a.token.text.as_str()).collect();
    assert_eq!(texts, vec!["我", "是", "学生", " ", "我"]);
    assert!(annotated[3].lookup.is_none());
    assert_eq!(annotated[4].lookup, annotated[0].lookup);
    assert_eq!(annotated[2].lookup.as_ref().unwrap().reading, "xué sheng");
}

#[tokio::test]
async fn test_unresolved_korean_name_carries_hint() {
    let glossa = Glossa::new(offline());
    let annotated = glossa.annotate("김민수가", &LanguageTag::Korean).await;

    assert!(annotated[0].token.text.starts_with("김민수"));
    assert!(annotated[0].lookup.is_none());
    assert_eq!(annotated[0].hint, Some(NAME_HINT));
    assert_eq!(glossa.miss_hint("뷁", &LanguageTag::Korean), Some(UNKNOWN_HINT));

    let chinese = glossa.annotate("我 ", &LanguageTag::Chinese).await;
    assert!(chinese.iter().all(|a| a.hint.is_none()));
}

#[tokio::test]
async fn test_japanese_hit_carries_jlpt_level() {
    let glossa = Glossa::new(offline());
    let result = glossa.resolve("食べる", &LanguageTag::Japanese).await.unwrap();
    assert_eq!(result.source, LookupSource::Embedded);
    assert_eq!(result.jlpt, Some(5));
}

#[test]
fn test_tone_and_furigana_helpers() {
    assert_eq!(Glossa::render_tone("ni3 hao3"), "nǐ hǎo");

    let mut state = FuriganaState::new(true);
    assert!(Glossa::should_show_furigana("漢字", &state));
    state.toggle("漢字");
    assert!(!Glossa::should_show_furigana("漢字", &state));
}

#[tokio::test]
async fn test_blank_speech_is_empty() {
    let glossa = Glossa::new(offline());
    let audio = glossa.synthesize("  ", &LanguageTag::Japanese).await.unwrap();
    assert!(audio.is_empty());
}
