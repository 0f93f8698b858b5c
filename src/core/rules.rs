//! 재배열 규칙 테이블
//!
//! 불용어, 사고동사, 조사, 어휘 예외를 코드가 아닌 데이터로 둡니다.
//! 변형 규칙은 `RuleSet` 필드를 바꿔서 전환합니다.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::unicode::ends_with_batchim;

/// 주제 조사
pub const TOPIC_PARTICLE: &str = "는";
/// 목적격 조사
pub const OBJECT_PARTICLE: &str = "를";
/// 안긴절 주격 조사
pub const EMBEDDED_SUBJECT_PARTICLE: &str = "가";
/// 인용/사고 연결 어미
pub const MENTAL_CONNECTOR: &str = "고";

/// 기본 불용어
pub const BASIC_STOP_WORDS: &[&str] = &["the", "a", "an", "to", "and", "'re"];

/// 확장 불용어에서 추가로 건너뛰는 대명사/계사
pub const EXTENDED_EXTRA_STOP_WORDS: &[&str] = &["they", "it", "is", "are"];

/// 사고/발화 동사 (원형)
pub const MENTAL_VERBS: &[&str] = &["think", "say", "believe", "know", "hope"];

/// 불규칙 동사 활용형 -> 원형
pub const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("thought", "think"),
    ("said", "say"),
    ("knew", "know"),
    ("known", "know"),
];

/// 번역 결과에 이미 붙어 나온 조사 (명사 끝에서 제거)
pub const ARTIFACT_SUFFIXES: &[&str] = &["과", "를", "와"];

/// 번역기 호출 전에 적용되는 고정 번역
pub const LEXICAL_OVERRIDES: &[(&str, &str)] = &[("like", "좋아한다")];

/// 불용어 목록 선택
///
/// 두 변형은 they/it/is/are 처리에서 갈립니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWordPolicy {
    /// 관사, to, and, 're 만 건너뜀
    Basic,
    /// 기본 + they, it, is, are
    Extended,
}

/// 나열 조사 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinationParticle {
    /// 항상 "와"
    Wa,
    /// 항상 "과"
    Gwa,
    /// 받침 있으면 "과", 없으면 "와"
    Adaptive,
}

impl CoordinationParticle {
    /// 번역된 명사에 붙일 조사
    pub fn for_word(self, word: &str) -> &'static str {
        match self {
            CoordinationParticle::Wa => "와",
            CoordinationParticle::Gwa => "과",
            CoordinationParticle::Adaptive => match ends_with_batchim(word) {
                Some(true) => "과",
                _ => "와",
            },
        }
    }
}

/// 목적격 조사 "를"을 붙이는 조건
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectParticlePolicy {
    /// 목적어가 하나라도 있으면
    WheneverObjects,
    /// 동사가 고정 번역(예: like -> 좋아한다)일 때만
    LexicalOverrideOnly,
}

/// 절 재배열 규칙 묶음
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub stop_words: HashSet<String>,
    pub mental_verbs: HashSet<String>,
    pub irregular_lemmas: HashMap<String, String>,
    pub overrides: HashMap<String, String>,
    pub artifact_suffixes: Vec<String>,
    pub coordination: CoordinationParticle,
    pub object_particle: ObjectParticlePolicy,
    /// 목적어 나열 구분자
    pub object_separator: String,
    /// 부사도 수식어로 취급할지
    pub adverbs_as_modifiers: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(StopWordPolicy::Extended)
    }
}

fn owned_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn owned_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl RuleSet {
    /// 불용어 정책만 지정하여 생성 (나머지는 기본값)
    pub fn new(policy: StopWordPolicy) -> Self {
        Self {
            stop_words: stop_words_for(policy),
            mental_verbs: owned_set(MENTAL_VERBS),
            irregular_lemmas: owned_map(IRREGULAR_LEMMAS),
            overrides: owned_map(LEXICAL_OVERRIDES),
            artifact_suffixes: ARTIFACT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            coordination: CoordinationParticle::Wa,
            object_particle: ObjectParticlePolicy::WheneverObjects,
            object_separator: " ".to_string(),
            adverbs_as_modifiers: true,
        }
    }

    pub fn with_coordination(mut self, particle: CoordinationParticle) -> Self {
        self.coordination = particle;
        self
    }

    pub fn with_object_particle(mut self, policy: ObjectParticlePolicy) -> Self {
        self.object_particle = policy;
        self
    }

    pub fn with_object_separator(mut self, separator: impl Into<String>) -> Self {
        self.object_separator = separator.into();
        self
    }

    pub fn with_adverbs_as_modifiers(mut self, enabled: bool) -> Self {
        self.adverbs_as_modifiers = enabled;
        self
    }

    /// 고정 번역 추가
    pub fn with_override(mut self, word: impl Into<String>, translation: impl Into<String>) -> Self {
        self.overrides.insert(word.into(), translation.into());
        self
    }

    /// 정규화된 단어가 불용어인지
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// 동사 활용형의 원형 후보 (원형 자신 포함)
    pub fn verb_lemmas(&self, word: &str) -> Vec<String> {
        let mut lemmas = vec![word.to_string()];
        if let Some(lemma) = self.irregular_lemmas.get(word) {
            lemmas.push(lemma.clone());
        }
        lemmas.extend(suffix_stems(word));
        lemmas
    }

    /// 사고/발화 동사인지 (원형 기준)
    pub fn is_mental_verb(&self, word: &str) -> bool {
        self.verb_lemmas(word)
            .iter()
            .any(|lemma| self.mental_verbs.contains(lemma))
    }

    /// 고정 번역 조회
    ///
    /// 표층형을 먼저 보고, 동사면 원형 후보도 봅니다.
    pub fn override_for(&self, word: &str, is_verb: bool) -> Option<&str> {
        if let Some(fixed) = self.overrides.get(word) {
            return Some(fixed.as_str());
        }
        if !is_verb {
            return None;
        }
        self.verb_lemmas(word)
            .iter()
            .find_map(|lemma| self.overrides.get(lemma))
            .map(String::as_str)
    }

    /// 번역값이 고정 번역 테이블에서 나온 값인지
    pub fn is_override_value(&self, translated: &str) -> bool {
        self.overrides.values().any(|v| v == translated)
    }

    /// 번역된 명사 끝에 붙은 조사 제거
    ///
    /// 두 글자 이상 남을 때만 잘라냅니다 (사과 -> 사 방지).
    pub fn strip_artifacts<'a>(&self, translated: &'a str) -> &'a str {
        let trimmed = translated.trim();
        for suffix in &self.artifact_suffixes {
            if let Some(rest) = trimmed.strip_suffix(suffix.as_str()) {
                let rest = rest.trim_end();
                if rest.chars().count() >= 2 {
                    return rest;
                }
            }
        }
        trimmed
    }
}

/// 굴절 접미사를 떼어 낸 어간 후보
///
/// -ies, -ves, -es, -s, -ed, -d, -ing 를 순서대로 시도합니다.
pub fn suffix_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if let Some(stem) = word.strip_suffix("ies") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ves") {
        stems.push(format!("{stem}f"));
    }
    for suffix in ["es", "s", "ed", "d"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if !stem.is_empty() {
                stems.push(stem.to_string());
            }
        }
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if !stem.is_empty() {
            stems.push(stem.to_string());
            stems.push(format!("{stem}e"));
        }
    }
    stems
}

/// 정책별 불용어 집합
pub fn stop_words_for(policy: StopWordPolicy) -> HashSet<String> {
    let mut words = owned_set(BASIC_STOP_WORDS);
    if policy == StopWordPolicy::Extended {
        words.extend(EXTENDED_EXTRA_STOP_WORDS.iter().map(|w| w.to_string()));
    }
    words
}
