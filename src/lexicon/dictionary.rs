//! 사전 기반 단어 번역기
//!
//! JSON 형식의 단어 표를 로드하여 오프라인으로 번역합니다.
//! 표에 없는 단어는 원문을 그대로 돌려주지 않고 오류로 보고합니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use crate::core::rules::suffix_stems;

use super::{Language, TranslateError, Translator};

/// 바이너리에 내장된 기본 단어 표
const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.json");

/// 단어 표 로드/파싱 에러
#[derive(Debug)]
pub enum LexiconError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 단어 표 형식 오류
    FormatError(String),
}

impl std::fmt::Display for LexiconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            LexiconError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            LexiconError::FormatError(s) => write!(f, "단어 표 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for LexiconError {}

impl From<std::io::Error> for LexiconError {
    fn from(e: std::io::Error) -> Self {
        LexiconError::IoError(e)
    }
}

/// 사전 번역기
#[derive(Debug, Clone)]
pub struct DictionaryTranslator {
    source: Language,
    target: Language,
    /// 소문자 원문 -> 번역
    entries: HashMap<String, String>,
}

impl DictionaryTranslator {
    /// JSON 파일에서 단어 표 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "source": "en",
    ///   "target": "ko",
    ///   "entries": { "apple": "사과", "wolf": "늑대" }
    /// }
    /// ```
    pub fn load(path: &str) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| LexiconError::ParseError(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// JSON 문자열에서 단어 표 로드
    pub fn from_json(json_str: &str) -> Result<Self, LexiconError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| LexiconError::ParseError(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// 내장 영-한 단어 표
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_json(BUILTIN_LEXICON)
    }

    fn from_json_value(value: &serde_json::Value) -> Result<Self, LexiconError> {
        let source = Self::language_field(value, "source")?;
        let target = Self::language_field(value, "target")?;

        let entries_obj = value
            .get("entries")
            .and_then(|v| v.as_object())
            .ok_or_else(|| LexiconError::FormatError("entries 필드가 없습니다".into()))?;

        let mut entries = HashMap::with_capacity(entries_obj.len());
        for (key, val) in entries_obj {
            let translated = val.as_str().ok_or_else(|| {
                LexiconError::FormatError(format!("번역값이 문자열이 아닙니다: {}", key))
            })?;
            if translated.trim().is_empty() {
                return Err(LexiconError::FormatError(format!("빈 번역값: {}", key)));
            }
            entries.insert(key.to_lowercase(), translated.trim().to_string());
        }

        Ok(Self {
            source,
            target,
            entries,
        })
    }

    fn language_field(value: &serde_json::Value, field: &str) -> Result<Language, LexiconError> {
        let code = value
            .get(field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| LexiconError::FormatError(format!("{} 필드가 없습니다", field)))?;
        Language::from_code(code)
            .ok_or_else(|| LexiconError::FormatError(format!("알 수 없는 언어 코드: {}", code)))
    }

    /// 빈 번역기 생성 (테스트용)
    pub fn empty(source: Language, target: Language) -> Self {
        Self {
            source,
            target,
            entries: HashMap::new(),
        }
    }

    /// 단어 추가
    pub fn insert(&mut self, word: impl AsRef<str>, translated: impl Into<String>) {
        self.entries
            .insert(word.as_ref().to_lowercase(), translated.into());
    }

    /// 원문 그대로, 없으면 굴절 어간으로 조회
    pub fn lookup(&self, word: &str) -> Option<&str> {
        let word = word.to_lowercase();
        if let Some(found) = self.entries.get(&word) {
            return Some(found.as_str());
        }
        suffix_stems(&word)
            .iter()
            .find_map(|stem| self.entries.get(stem))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for DictionaryTranslator {
    fn translate(
        &self,
        word: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        if source != self.source || target != self.target {
            return Err(TranslateError::UnsupportedPair { source, target });
        }
        self.lookup(word)
            .map(str::to_string)
            .ok_or_else(|| TranslateError::UnknownWord(word.to_string()))
    }
}
