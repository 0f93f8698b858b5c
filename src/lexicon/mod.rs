//! 외부 협력자 인터페이스: 품사 태거와 단어 번역기
//!
//! 재배열 로직은 이 트레이트로만 태거/번역기에 접근합니다.
//! 테스트에서는 가짜 구현을 주입할 수 있습니다.
//!
//! # 사용 예시
//!
//! ```
//! use sovgloss::lexicon::{DictionaryTranslator, Language, LexiconTagger, Tagger, Translator};
//!
//! let tagger = LexiconTagger::new();
//! let tokens = tagger.tag("I like apples").unwrap();
//! assert_eq!(tokens.len(), 3);
//!
//! let dict = DictionaryTranslator::builtin().unwrap();
//! let ko = dict.translate("apples", Language::English, Language::Korean).unwrap();
//! assert_eq!(ko, "사과");
//! ```

mod dictionary;
mod resilient;
mod tagger;

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::token::Token;

pub use dictionary::{DictionaryTranslator, LexiconError};
pub use resilient::{ResilientTranslator, RetryPolicy};
pub use tagger::LexiconTagger;

/// 번역 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ko")]
    Korean,
}

impl Language {
    /// ISO 639-1 코드
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "ko" => Some(Language::Korean),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 품사 태깅 실패
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// 빈 입력
    EmptyInput,
    /// 태거가 처리할 수 없는 입력
    Unsupported(String),
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::EmptyInput => write!(f, "태깅할 입력이 비어 있습니다"),
            TagError::Unsupported(s) => write!(f, "태깅할 수 없는 입력: {}", s),
        }
    }
}

impl std::error::Error for TagError {}

/// 단어 번역 실패
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// 번역 서비스 오류 (일시적일 수 있음)
    Unavailable(String),
    /// 사전에 없는 단어 (재시도해도 같음)
    UnknownWord(String),
    /// 제한 시간 초과
    Timeout(Duration),
    /// 지원하지 않는 언어쌍
    UnsupportedPair { source: Language, target: Language },
    /// 빈 번역 결과
    Empty,
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Unavailable(s) => write!(f, "번역 불가: {}", s),
            TranslateError::UnknownWord(w) => write!(f, "사전에 없는 단어: {}", w),
            TranslateError::Timeout(d) => write!(f, "번역 시간 초과 ({}ms)", d.as_millis()),
            TranslateError::UnsupportedPair { source, target } => {
                write!(f, "지원하지 않는 언어쌍: {} -> {}", source, target)
            }
            TranslateError::Empty => write!(f, "빈 번역 결과"),
        }
    }
}

impl TranslateError {
    /// 다시 시도하면 결과가 달라질 수 있는 오류인지
    pub fn is_transient(&self) -> bool {
        !matches!(
            self,
            TranslateError::UnknownWord(_) | TranslateError::UnsupportedPair { .. }
        )
    }
}

impl std::error::Error for TranslateError {}

/// 품사 태거
pub trait Tagger {
    /// 문장을 (단어, 태그) 순서열로 변환
    fn tag(&self, text: &str) -> Result<Vec<Token>, TagError>;
}

/// 단어 단위 번역기
///
/// 동기 호출이며 상태가 없다고 가정합니다.
pub trait Translator {
    fn translate(&self, word: &str, source: Language, target: Language)
        -> Result<String, TranslateError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TagError> {
        (**self).tag(text)
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(
        &self,
        word: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        (**self).translate(word, source, target)
    }
}

impl<T: Translator + ?Sized> Translator for std::sync::Arc<T> {
    fn translate(
        &self,
        word: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        (**self).translate(word, source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::from_code("ko"), Some(Language::Korean));
        assert_eq!(Language::from_code("ja"), None);
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::Korean).unwrap();
        assert_eq!(json, "\"ko\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::English);
    }

    #[test]
    fn test_error_display() {
        let err = TranslateError::UnsupportedPair {
            source: Language::Korean,
            target: Language::English,
        };
        assert!(err.to_string().contains("ko -> en"));
        assert!(TranslateError::Timeout(Duration::from_millis(250))
            .to_string()
            .contains("250ms"));
    }
}
