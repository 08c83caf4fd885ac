use langseg::config::SegmenterConfig;
use langseg::language::Language;
use langseg::profile::ProfileName;
use langseg::registry::{PipelineRegistry, SlotState};
use langseg::segment::{SegmentOutcome, segment_with, try_segment_with};

fn registry(profile: ProfileName) -> PipelineRegistry {
    PipelineRegistry::new(SegmenterConfig::default().with_profile(profile))
}

fn is_thai(c: char) -> bool {
    ('\u{0e00}'..='\u{0e7f}').contains(&c)
}

#[test]
fn test_empty_input_for_every_language() {
    let registry = registry(ProfileName::Default);
    for language in Language::ALL {
        for text in [None, Some(""), Some("   "), Some("\t\n")] {
            assert!(segment_with(&registry, language, text).is_empty());
            assert_eq!(
                try_segment_with(&registry, language, text),
                SegmentOutcome::Tokens(vec![])
            );
        }
        // blank input never builds a pipeline
        assert_eq!(registry.state(language), SlotState::Uninitialized);
    }
}

#[test]
fn test_japanese_default_drops_particles() {
    let registry = registry(ProfileName::Default);
    let tokens = segment_with(&registry, Language::Japanese, Some("私は学生です"));
    assert_eq!(tokens, vec!["私", "学生"]);
}

#[test]
fn test_japanese_minimal_keeps_everything() {
    let registry = registry(ProfileName::Minimal);
    let tokens = segment_with(&registry, Language::Japanese, Some("私は学生です"));
    assert_eq!(tokens, vec!["私", "は", "学生", "です"]);
}

#[test]
fn test_japanese_profiles_differ_on_inflection() {
    let text = Some("勉強しています");

    let default = segment_with(&registry(ProfileName::Default), Language::Japanese, text);
    assert!(default.contains(&"勉強".to_string()));
    assert!(default.contains(&"し".to_string()));
    assert!(!default.contains(&"て".to_string()));

    let complete = segment_with(&registry(ProfileName::Complete), Language::Japanese, text);
    assert!(complete.contains(&"勉強".to_string()));
    assert!(!complete.contains(&"し".to_string()));
}

#[test]
fn test_japanese_width_and_case() {
    let registry = registry(ProfileName::Default);
    let tokens = segment_with(&registry, Language::Japanese, Some("ＤＢを使う"));
    let joined = tokens.concat();

    assert!(joined.contains("db"), "{tokens:?}");
    assert!(!joined.contains('Ｄ'));
}

#[test]
fn test_korean_tokens() {
    let registry = registry(ProfileName::Default);
    let tokens = segment_with(&registry, Language::Korean, Some("한국어 형태소 분석 Hello"));

    assert!(!tokens.is_empty());
    assert!(tokens.iter().all(|t| !t.trim().is_empty() && t.trim() == t));
    assert!(tokens.contains(&"hello".to_string()), "{tokens:?}");
}

#[test]
fn test_korean_default_has_no_punctuation_tokens() {
    let registry = registry(ProfileName::Default);
    let tokens = segment_with(
        &registry,
        Language::Korean,
        Some("학교에 갑니다. 그리고, 책을 읽어요! (정말?)"),
    );

    assert!(!tokens.is_empty());
    for token in &tokens {
        assert!(
            !token.chars().all(|c| c.is_ascii_punctuation()),
            "punctuation token {token:?}"
        );
    }
}

#[test]
fn test_thai_mixed_script_boundaries() {
    let registry = registry(ProfileName::Default);
    let tokens = segment_with(
        &registry,
        Language::Thai,
        Some("ฐานข้อมูลOceanBaseรองรับภาษาไทย123"),
    );

    assert!(!tokens.is_empty());
    for token in &tokens {
        let thai = token.chars().any(is_thai);
        let ascii = token.chars().any(|c| c.is_ascii_alphanumeric());
        assert!(!(thai && ascii), "token {token:?} spans scripts");
    }
    assert!(tokens.contains(&"oceanbase".to_string()), "{tokens:?}");
}

#[test]
fn test_thai_default_drops_stopwords() {
    let registry = registry(ProfileName::Default);
    let tokens = segment_with(&registry, Language::Thai, Some("แมวและหมา"));

    assert!(!tokens.is_empty());
    assert!(!tokens.contains(&"และ".to_string()), "{tokens:?}");
}

#[test]
fn test_segmentation_is_deterministic() {
    let registry = registry(ProfileName::Default);
    for (language, text) in [
        (Language::Japanese, "東京都の図書館で本を読みました。"),
        (Language::Korean, "전문 검색 색인을 만듭니다"),
        (Language::Thai, "สวัสดีครับยินดีต้อนรับ"),
    ] {
        let first = segment_with(&registry, language, Some(text));
        let second = segment_with(&registry, language, Some(text));
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
