//! 규칙 기반 영어 품사 태거
//!
//! 닫힌 품사(대명사, 한정사, 접속사, 계사)는 고정 표로,
//! 열린 품사는 알려진 단어 표와 접미사 휴리스틱으로 태깅합니다.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::core::rules::suffix_stems;
use crate::core::token::{Tag, Token, VerbForm};

use super::{TagError, Tagger};

lazy_static! {
    static ref PRONOUNS: HashSet<&'static str> = [
        "i", "you", "he", "she", "we", "they", "it", "me", "him", "her", "us", "them",
    ]
    .into_iter()
    .collect();

    static ref POSSESSIVES: HashSet<&'static str> =
        ["my", "your", "his", "its", "our", "their"].into_iter().collect();

    static ref DETERMINERS: HashSet<&'static str> = [
        "the", "a", "an", "this", "that", "these", "those", "every", "some", "any", "no",
    ]
    .into_iter()
    .collect();

    static ref CONJUNCTIONS: HashSet<&'static str> =
        ["and", "or", "but", "nor", "yet", "so"].into_iter().collect();

    static ref PREPOSITIONS: HashSet<&'static str> = [
        "in", "on", "at", "with", "for", "of", "from", "by", "about", "under", "over", "into",
    ]
    .into_iter()
    .collect();

    static ref MODALS: HashSet<&'static str> = [
        "can", "will", "would", "should", "could", "may", "might", "must", "'ll", "'d",
    ]
    .into_iter()
    .collect();

    /// 계사와 조동사 활용형
    static ref AUXILIARIES: HashMap<&'static str, &'static str> = [
        ("is", "VBZ"), ("are", "VBP"), ("am", "VBP"), ("was", "VBD"), ("were", "VBD"),
        ("be", "VB"), ("been", "VBN"), ("being", "VBG"),
        ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
        ("has", "VBZ"), ("had", "VBD"),
        ("'re", "VBP"), ("'s", "VBZ"), ("'m", "VBP"), ("'ve", "VBP"),
    ]
    .into_iter()
    .collect();

    /// 동사 원형
    static ref VERBS: HashSet<&'static str> = [
        "think", "say", "believe", "know", "hope", "like", "love", "eat", "drink", "run",
        "walk", "read", "write", "see", "watch", "want", "need", "have", "play", "study",
        "make", "buy", "sleep", "go", "come", "hate", "sing", "dance", "cook", "swim",
    ]
    .into_iter()
    .collect();

    /// 불규칙 과거/과거분사
    static ref IRREGULAR_PAST: HashMap<&'static str, &'static str> = [
        ("thought", "VBD"), ("said", "VBD"), ("knew", "VBD"), ("known", "VBN"),
        ("ran", "VBD"), ("ate", "VBD"), ("eaten", "VBN"), ("saw", "VBD"), ("seen", "VBN"),
        ("went", "VBD"), ("gone", "VBN"), ("came", "VBD"), ("made", "VBD"),
        ("bought", "VBD"), ("wrote", "VBD"), ("written", "VBN"), ("drank", "VBD"),
        ("slept", "VBD"),
    ]
    .into_iter()
    .collect();

    static ref ADJECTIVES: HashSet<&'static str> = [
        "cute", "tired", "happy", "sad", "big", "small", "red", "good", "bad", "new", "old",
        "hungry", "fast", "slow", "hot", "cold", "nice", "great", "little", "young",
    ]
    .into_iter()
    .collect();

    static ref ADVERBS: HashSet<&'static str> = [
        "very", "really", "often", "always", "never", "together", "today", "not", "n't",
        "too", "also", "here", "there", "now",
    ]
    .into_iter()
    .collect();
}

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "al"];

/// 단어 끝에서 떼어 낼 구두점
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// 축약 조각 (가장 긴 것부터)
const CONTRACTIONS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'m", "'d"];

/// 휴리스틱 품사 태거
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    /// 사용자 지정 태그 (소문자 단어 -> 태그)
    overrides: HashMap<String, Tag>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 특정 단어의 태그를 고정
    pub fn with_tag(mut self, word: impl AsRef<str>, tag: Tag) -> Self {
        self.overrides.insert(word.as_ref().to_lowercase(), tag);
        self
    }

    /// 단어 하나의 태그 결정
    ///
    /// `sentence_initial`이면 대문자 시작만으로는 고유명사로 보지 않고,
    /// 접미사 규칙이 단수 일반명사로 판정한 경우에만 고유명사로 바꿉니다.
    fn tag_word(&self, word: &str, sentence_initial: bool, previous: Option<&Tag>) -> Tag {
        if word.chars().all(|c| TRAILING_PUNCTUATION.contains(&c)) {
            return Tag::from_penn(word);
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.overrides.get(&lower) {
            return tag.clone();
        }

        let w = lower.as_str();
        if PRONOUNS.contains(w) {
            return Tag::Pronoun;
        }
        if POSSESSIVES.contains(w) {
            return Tag::PossessivePronoun;
        }
        if DETERMINERS.contains(w) {
            return Tag::Determiner;
        }
        if CONJUNCTIONS.contains(w) {
            return Tag::Conjunction;
        }
        if w == "to" {
            return Tag::To;
        }
        if PREPOSITIONS.contains(w) {
            return Tag::Other("IN".to_string());
        }
        if MODALS.contains(w) {
            return Tag::Other("MD".to_string());
        }
        if let Some(penn) = AUXILIARIES.get(w) {
            return Tag::from_penn(penn);
        }
        if let Some(penn) = IRREGULAR_PAST.get(w) {
            return Tag::from_penn(penn);
        }
        if let Some(form) = Self::known_verb_form(w, previous) {
            return Tag::Verb(form);
        }
        if ADJECTIVES.contains(w) {
            return Tag::Adjective;
        }
        if ADVERBS.contains(w) {
            return Tag::Adverb;
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_initial {
            return Tag::ProperNoun;
        }

        // 절 첫머리라도 어느 표에도 없는 단수 명사꼴이면 이름으로 봄
        let tag = Self::suffix_tag(w);
        if capitalized && tag == Tag::Noun {
            return Tag::ProperNoun;
        }
        tag
    }

    /// 알려진 동사의 활용형 판별
    fn known_verb_form(word: &str, previous: Option<&Tag>) -> Option<VerbForm> {
        if VERBS.contains(word) {
            // to/조동사 뒤는 원형
            let after_infinitive = matches!(previous, Some(Tag::To))
                || matches!(previous, Some(Tag::Other(t)) if t == "MD");
            return Some(if after_infinitive {
                VerbForm::Base
            } else {
                VerbForm::Present
            });
        }
        let stem = suffix_stems(word)
            .into_iter()
            .find(|stem| VERBS.contains(stem.as_str()))?;
        let form = if word.ends_with("ing") {
            VerbForm::Gerund
        } else if word.ends_with("ed") || (word.ends_with('d') && stem.ends_with('e')) {
            VerbForm::Past
        } else {
            VerbForm::ThirdPerson
        };
        Some(form)
    }

    fn suffix_tag(word: &str) -> Tag {
        if word.len() > 3 && word.ends_with("ly") {
            return Tag::Adverb;
        }
        if word.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(*s)) {
            return Tag::Adjective;
        }
        if word.len() > 4 && word.ends_with("ing") {
            return Tag::Verb(VerbForm::Gerund);
        }
        if word.len() > 3 && word.ends_with("ed") {
            return Tag::Verb(VerbForm::Past);
        }
        if word.len() > 2 && word.ends_with('s') && !word.ends_with("ss") {
            return Tag::NounPlural;
        }
        Tag::Noun
    }
}

/// 축약 조각이 시작하는 바이트 위치
fn contraction_split(word: &str) -> Option<usize> {
    CONTRACTIONS.iter().find_map(|fragment| {
        let split_at = word.len().checked_sub(fragment.len())?;
        let matches = split_at > 0
            && word.is_char_boundary(split_at)
            && word[split_at..].eq_ignore_ascii_case(fragment);
        matches.then_some(split_at)
    })
}

/// 공백 기준으로 나눈 뒤 구두점과 축약 조각을 분리
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in text.split_whitespace() {
        let chunk = chunk.trim_matches(|c| c == '"' || c == '(' || c == ')');
        let chunk = chunk.replace('\u{2019}', "'");
        let core = chunk.trim_end_matches(TRAILING_PUNCTUATION);
        let trailing = &chunk[core.len()..];

        if !core.is_empty() {
            match contraction_split(core) {
                Some(split_at) => {
                    words.push(core[..split_at].to_string());
                    words.push(core[split_at..].to_string());
                }
                None => words.push(core.to_string()),
            }
        }
        words.extend(trailing.chars().map(String::from));
    }
    words
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TagError> {
        if text.trim().is_empty() {
            return Err(TagError::EmptyInput);
        }

        let words = split_words(text);
        if words.is_empty() {
            return Err(TagError::Unsupported(text.to_string()));
        }

        let mut tokens: Vec<Token> = Vec::with_capacity(words.len());
        for (i, word) in words.into_iter().enumerate() {
            let previous = tokens.last().map(|t| &t.tag);
            let tag = self.tag_word(&word, i == 0, previous);
            tokens.push(Token::new(word, tag));
        }

        log::debug!(
            "태깅: {}",
            tokens
                .iter()
                .map(|t| format!("{}/{}", t.text, t.tag))
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(tokens)
    }
}
