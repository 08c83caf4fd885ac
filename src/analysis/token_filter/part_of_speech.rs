//! Part-of-speech stop filter.
//!
//! Drops tokens whose grammatical category is in a fixed stop-tag set:
//! particles, auxiliaries, symbols and the like. Tokens without a
//! part-of-speech tag (unknown words, tokens from analyzers that do not tag)
//! always pass.
//!
//! Tags are compared exactly. For ko-dic inflected entries tagged
//! `VV+EF` style, the leading tag decides.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// IPADIC categories removed by the Japanese part-of-speech stage.
const JAPANESE_STOP_TAGS: &[&str] = &[
    "接続詞",
    "助詞",
    "助詞-格助詞",
    "助詞-格助詞-一般",
    "助詞-格助詞-引用",
    "助詞-格助詞-連語",
    "助詞-接続助詞",
    "助詞-係助詞",
    "助詞-副助詞",
    "助詞-間投助詞",
    "助詞-並立助詞",
    "助詞-終助詞",
    "助詞-副助詞／並立助詞／終助詞",
    "助詞-連体化",
    "助詞-副詞化",
    "助詞-特殊",
    "助動詞",
    "記号",
    "記号-一般",
    "記号-読点",
    "記号-句点",
    "記号-空白",
    "記号-括弧開",
    "記号-括弧閉",
    "その他-間投",
    "フィラー",
    "非言語音",
];

/// mecab-ko tags removed by the Korean part-of-speech stage.
const KOREAN_STOP_TAGS: &[&str] = &[
    "E", "EP", "EF", "EC", "ETN", "ETM", "IC", "J", "JKS", "JKC", "JKG", "JKO", "JKB", "JKV",
    "JKQ", "JX", "JC", "MAG", "MAJ", "MM", "SP", "SSC", "SSO", "SC", "SE", "XPN", "XSA", "XSN",
    "XSV", "UNA", "NA", "VSV",
];

pub static JAPANESE_STOP_TAGS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| JAPANESE_STOP_TAGS.iter().map(|s| s.to_string()).collect());

pub static KOREAN_STOP_TAGS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| KOREAN_STOP_TAGS.iter().map(|s| s.to_string()).collect());

/// A filter that removes tokens by part-of-speech tag.
#[derive(Clone, Debug)]
pub struct PartOfSpeechStopFilter {
    stop_tags: Arc<HashSet<String>>,
}

impl PartOfSpeechStopFilter {
    pub fn new(stop_tags: HashSet<String>) -> Self {
        PartOfSpeechStopFilter {
            stop_tags: Arc::new(stop_tags),
        }
    }

    /// Filter with the IPADIC stop tags.
    pub fn japanese() -> Self {
        Self::new(JAPANESE_STOP_TAGS_SET.clone())
    }

    /// Filter with the mecab-ko stop tags.
    pub fn korean() -> Self {
        Self::new(KOREAN_STOP_TAGS_SET.clone())
    }

    pub fn is_stop_tag(&self, tag: &str) -> bool {
        is_stop_tag(&self.stop_tags, tag)
    }
}

fn is_stop_tag(stop_tags: &HashSet<String>, tag: &str) -> bool {
    if stop_tags.contains(tag) {
        return true;
    }
    match tag.split_once('+') {
        Some((leading, _)) => stop_tags.contains(leading),
        None => false,
    }
}

impl Filter for PartOfSpeechStopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_tags = Arc::clone(&self.stop_tags);

        Ok(Box::new(tokens.filter(move |token| match token {
            Ok(token) => token
                .part_of_speech()
                .is_none_or(|tag| !is_stop_tag(&stop_tags, tag)),
            Err(_) => true,
        })))
    }

    fn name(&self) -> &'static str {
        "part_of_speech_stop"
    }
}
