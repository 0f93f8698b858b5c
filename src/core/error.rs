//! 문장 변환 에러

use std::fmt;

use crate::lexicon::{TagError, TranslateError};

/// 절/문장 변환 실패
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlossError {
    /// 태거가 입력을 처리하지 못함
    Tagging(TagError),
    /// 토큰 번역 실패 (문제 토큰 포함)
    TranslationUnavailable {
        token: String,
        source: TranslateError,
    },
    /// 취소 요청됨
    Cancelled,
}

impl fmt::Display for GlossError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossError::Tagging(e) => write!(f, "태깅 실패: {}", e),
            GlossError::TranslationUnavailable { token, source } => {
                write!(f, "'{}' 번역 실패: {}", token, source)
            }
            GlossError::Cancelled => write!(f, "변환이 취소되었습니다"),
        }
    }
}

impl std::error::Error for GlossError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlossError::Tagging(e) => Some(e),
            GlossError::TranslationUnavailable { source, .. } => Some(source),
            GlossError::Cancelled => None,
        }
    }
}

impl From<TagError> for GlossError {
    fn from(e: TagError) -> Self {
        GlossError::Tagging(e)
    }
}
