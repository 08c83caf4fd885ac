//! Stop filter implementation.
//!
//! Removes tokens whose surface text appears in a stopword list. Built-in
//! lists exist for Japanese and Thai; any other list is loaded from a
//! UTF-8 file with one word per line (`#` starts a comment).
//!
//! # Examples
//!
//! ```
//! use langseg::analysis::token::{IntoTokenStream, Token};
//! use langseg::analysis::token_filter::Filter;
//! use langseg::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["の", "は"]);
//! let tokens = vec![Token::new("私", 0), Token::new("は", 1), Token::new("学生", 2)];
//!
//! let result: Vec<_> = filter
//!     .filter(tokens.into_token_stream())
//!     .unwrap()
//!     .map(|t| t.unwrap().text)
//!     .collect();
//!
//! assert_eq!(result, vec!["私", "学生"]);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::{LangsegError, Result};

const DEFAULT_JAPANESE_STOP_WORDS: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
    "する", "から", "な", "こと", "として", "い", "や", "れる", "など", "なっ", "ない", "この",
    "ため", "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる",
    "へ", "か", "だ", "これ", "によって", "により", "おり", "より", "による", "ず", "なり",
    "られる", "において", "ば", "なかっ", "なく", "しかし", "について", "せ", "だっ", "その後",
    "できる", "それ", "う", "ので", "なお", "のみ", "でき", "き", "つ", "における", "および",
    "いう", "さらに", "でも", "ら", "たり", "その他", "に関する", "たち", "ます", "ん", "なら",
    "に対して", "特に", "せる", "及び", "これら", "とき", "では", "にて", "ほか", "ながら",
    "うち", "そして", "とともに", "ただし", "かつて", "それぞれ", "または", "お", "ほど",
    "ものの", "に対する", "ほとんど", "と共に", "といった", "です", "とも", "ところ", "ここ",
];

const DEFAULT_THAI_STOP_WORDS: &[&str] = &[
    "ไว้", "ไม่", "ไป", "ได้", "ให้", "ใน", "โดย", "แห่ง", "แล้ว", "และ", "แรก", "แบบ", "แต่",
    "เอง", "เห็น", "เลย", "เริ่ม", "เรา", "เมื่อ", "เพื่อ", "เพราะ", "เป็นการ", "เป็น", "เปิดเผย",
    "เปิด", "เนื่องจาก", "เดียวกัน", "เดียว", "เช่น", "เฉพาะ", "เคย", "เข้า", "เขา", "อีก", "อาจ",
    "อะไร", "ออก", "อย่าง", "อยู่", "อยาก", "หาก", "หลาย", "หลังจาก", "หลัง", "หรือ", "หนึ่ง",
    "ส่วน", "ส่ง", "สุด", "สำหรับ", "ว่า", "วัน", "ลง", "ร่วม", "ราย", "รับ", "ระหว่าง", "รวม",
    "ยัง", "มี", "มาก", "มา", "พร้อม", "พบ", "ผ่าน", "ผล", "บาง", "น่า", "นี้", "นำ", "นั้น",
    "นัก", "นอกจาก", "ทุก", "ที่สุด", "ที่", "ทำให้", "ทำ", "ทาง", "ทั้งนี้", "ทั้ง", "ถ้า", "ถูก",
    "ถึง", "ต้อง", "ต่างๆ", "ต่าง", "ต่อ", "ตาม", "ตั้งแต่", "ตั้ง", "ด้าน", "ด้วย", "ดัง", "ซึ่ง",
    "ช่วง", "จึง", "จาก", "จัด", "จะ", "คือ", "ความ", "ครั้ง", "คง", "ขึ้น", "ของ", "ขอ", "ขณะ",
    "ก่อน", "ก็", "การ", "กับ", "กัน", "กว่า", "กล่าว",
];

/// Default Japanese stop words as a HashSet.
pub static DEFAULT_JAPANESE_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_JAPANESE_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Default Thai stop words as a HashSet.
pub static DEFAULT_THAI_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_THAI_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Load a stopword list from a file.
    ///
    /// A missing or unreadable file is a resource error, which makes the
    /// pipeline construction that asked for it fail (and stay retryable).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LangsegError::resource(format!(
                "Failed to read stopword list {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_words(parse_word_list(&content)))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

fn parse_word_list(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|word| !word.is_empty())
        .collect()
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);

        Ok(Box::new(tokens.filter(move |token| match token {
            Ok(token) => !stop_words.contains(&token.text),
            Err(_) => true,
        })))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
