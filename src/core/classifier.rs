//! 토큰 분류기
//!
//! 한 절의 토큰을 왼쪽에서 오른쪽으로 한 번 훑으며
//! 주어/목적어/수식어/동사 버킷을 채웁니다. 다음 토큰 하나를 미리 봅니다.
//!
//! 규칙 우선순위:
//! 1. 주어: 대명사/고유명사 중 첫 번째 (이후 것은 버림)
//! 2. 동사: 첫 동사가 서술어, 이후 동사는 목적어(행위)로 강등
//! 3. 형용사/부사: 절 끝이고 동사가 비어 있으면 서술어, 아니면 수식어
//! 4. 명사: 사고절이면 "가", 다음이 접속사면 나열 조사
//!
//! 어느 규칙에도 맞지 않는 토큰은 조용히 버립니다.

use crate::lexicon::{Language, Translator};

use super::cancel::CancelFlag;
use super::error::GlossError;
use super::rules::{RuleSet, EMBEDDED_SUBJECT_PARTICLE, TOPIC_PARTICLE};
use super::token::Token;

/// 원문 언어 (고정)
pub const SOURCE_LANGUAGE: Language = Language::English;
/// 대상 언어 (고정)
pub const TARGET_LANGUAGE: Language = Language::Korean;

/// 절 단위 분류 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationState {
    /// 조사가 붙은 주어 (최대 1개, 먼저 온 것)
    pub subject: Option<String>,
    /// 목적어/행위 (등장 순서)
    pub objects: Vec<String>,
    /// 형용사/부사 수식어 (등장 순서)
    pub modifiers: Vec<String>,
    /// 서술어 (최대 1개)
    pub verb: Option<String>,
    /// 사고/발화 동사 포함 여부 (한 번 켜지면 유지)
    pub is_mental_thought: bool,
}

impl ClassificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 버킷이 비어 있는지
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.objects.is_empty()
            && self.modifiers.is_empty()
            && self.verb.is_none()
    }
}

/// 토큰이 들어갈 자리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Subject,
    /// 사고동사: 서술어가 비어 있을 때만 채움
    MentalVerb { fill_verb: bool },
    Verb,
    /// 두 번째 이후 동사
    ExtraVerb,
    /// 절 끝 형용사가 서술어 역할
    PredicateAdjective,
    Modifier,
    Noun,
}

/// 현재 상태에서 토큰의 자리 결정 (번역 전)
fn place(
    token: &Token,
    word: &str,
    index: usize,
    last_content: Option<usize>,
    state: &ClassificationState,
    rules: &RuleSet,
) -> Option<Placement> {
    let tag = &token.tag;

    if tag.is_subject_candidate() {
        return state.subject.is_none().then_some(Placement::Subject);
    }

    if tag.is_verb() {
        if rules.is_mental_verb(word) {
            return Some(Placement::MentalVerb {
                fill_verb: state.verb.is_none(),
            });
        }
        return Some(if state.verb.is_none() {
            Placement::Verb
        } else {
            Placement::ExtraVerb
        });
    }

    if tag.is_adjective() || (rules.adverbs_as_modifiers && tag.is_adverb()) {
        let clause_final = last_content == Some(index);
        return Some(if clause_final && state.verb.is_none() {
            Placement::PredicateAdjective
        } else {
            Placement::Modifier
        });
    }

    if tag.is_noun() {
        return Some(Placement::Noun);
    }

    None
}

/// 다음 토큰이 나열 접속사이거나 쉼표인지
fn followed_by_coordination(tokens: &[Token], index: usize) -> bool {
    tokens
        .get(index + 1)
        .is_some_and(|next| next.tag.is_conjunction() || next.text == ",")
}

/// 고정 번역 또는 번역기 호출
fn translate_token<R>(
    token: &Token,
    word: &str,
    translator: &R,
    rules: &RuleSet,
) -> Result<String, GlossError>
where
    R: Translator + ?Sized,
{
    if let Some(fixed) = rules.override_for(word, token.tag.is_verb()) {
        return Ok(fixed.to_string());
    }

    let translated = translator
        .translate(word, SOURCE_LANGUAGE, TARGET_LANGUAGE)
        .map_err(|source| GlossError::TranslationUnavailable {
            token: token.text.clone(),
            source,
        })?;

    let translated = translated.trim();
    if translated.is_empty() {
        return Err(GlossError::TranslationUnavailable {
            token: token.text.clone(),
            source: crate::lexicon::TranslateError::Empty,
        });
    }
    Ok(translated.to_string())
}

/// 한 절의 토큰을 분류
///
/// 취소 플래그가 주어지면 토큰 번역 전마다 확인합니다.
pub fn classify<R>(
    tokens: &[Token],
    translator: &R,
    rules: &RuleSet,
    cancel: Option<&CancelFlag>,
) -> Result<ClassificationState, GlossError>
where
    R: Translator + ?Sized,
{
    let mut state = ClassificationState::new();
    // 구두점을 제외한 마지막 토큰
    let last_content = tokens.iter().rposition(|t| !t.tag.is_punctuation());

    for (index, token) in tokens.iter().enumerate() {
        let word = token.normalized();
        if rules.is_stop_word(&word) {
            continue;
        }

        let Some(placement) = place(token, &word, index, last_content, &state, rules) else {
            log::debug!("버림: {}/{}", token.text, token.tag);
            continue;
        };

        if placement == (Placement::MentalVerb { fill_verb: false }) {
            state.is_mental_thought = true;
            continue;
        }

        if cancel.is_some_and(CancelFlag::is_cancelled) {
            return Err(GlossError::Cancelled);
        }

        let translated = translate_token(token, &word, translator, rules)?;
        log::debug!("{}/{} -> {} ({:?})", token.text, token.tag, translated, placement);

        match placement {
            Placement::Subject => {
                state.subject = Some(format!("{translated}{TOPIC_PARTICLE}"));
            }
            Placement::MentalVerb { .. } => {
                state.is_mental_thought = true;
                state.verb = Some(translated);
            }
            Placement::Verb | Placement::PredicateAdjective => {
                state.verb = Some(translated);
            }
            Placement::ExtraVerb => state.objects.push(translated),
            Placement::Modifier => state.modifiers.push(translated),
            Placement::Noun => {
                if state.is_mental_thought {
                    state
                        .objects
                        .push(format!("{translated}{EMBEDDED_SUBJECT_PARTICLE}"));
                } else {
                    let noun = rules.strip_artifacts(&translated);
                    if followed_by_coordination(tokens, index) {
                        let particle = rules.coordination.for_word(noun);
                        state.objects.push(format!("{noun}{particle}"));
                    } else {
                        state.objects.push(noun.to_string());
                    }
                }
            }
        }
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{CoordinationParticle, StopWordPolicy};
    use crate::lexicon::TranslateError;
    use std::cell::RefCell;

    /// 단어를 <단어> 로 감싸는 번역기 (호출 기록)
    #[derive(Default)]
    struct Bracket {
        calls: RefCell<Vec<String>>,
    }

    impl Translator for Bracket {
        fn translate(&self, word: &str, _: Language, _: Language) -> Result<String, TranslateError> {
            self.calls.borrow_mut().push(word.to_string());
            Ok(format!("<{}>", word))
        }
    }

    struct Failing;

    impl Translator for Failing {
        fn translate(&self, word: &str, _: Language, _: Language) -> Result<String, TranslateError> {
            Err(TranslateError::Unavailable(word.to_string()))
        }
    }

    fn toks(pairs: &[(&str, &str)]) -> Vec<Token> {
        pairs.iter().map(|(w, t)| Token::penn(*w, t)).collect()
    }

    #[test]
    fn test_subject_first_write_wins() {
        let tokens = toks(&[("He", "PRP"), ("sees", "VBZ"), ("Mary", "NNP")]);
        let state = classify(&tokens, &Bracket::default(), &RuleSet::default(), None).unwrap();
        assert_eq!(state.subject.as_deref(), Some("<he>는"));
        // 두 번째 고유명사는 어느 버킷에도 들어가지 않음
        assert!(state.objects.is_empty());
        assert_eq!(state.verb.as_deref(), Some("<sees>"));
    }

    #[test]
    fn test_no_subject_without_pronoun() {
        let tokens = toks(&[("Wolves", "NNS"), ("run", "VBP")]);
        let state = classify(&tokens, &Bracket::default(), &RuleSet::default(), None).unwrap();
        assert_eq!(state.subject, None);
    }

    #[test]
    fn test_extra_verbs_become_objects() {
        let tokens = toks(&[("I", "PRP"), ("run", "VBP"), ("jump", "VB"), ("swim", "VB")]);
        let state = classify(&tokens, &Bracket::default(), &RuleSet::default(), None).unwrap();
        assert_eq!(state.verb.as_deref(), Some("<run>"));
        assert_eq!(state.objects, ["<jump>", "<swim>"]);
    }

    #[test]
    fn test_comma_triggers_coordination_particle() {
        let tokens = toks(&[("apples", "NNS"), (",", ","), ("pears", "NNS")]);
        let state = classify(&tokens, &Bracket::default(), &RuleSet::default(), None).unwrap();
        assert_eq!(state.objects, ["<apples>와", "<pears>"]);
    }

    #[test]
    fn test_mental_flag_is_monotonic() {
        let tokens = toks(&[
            ("He", "PRP"),
            ("thinks", "VBZ"),
            ("wolves", "NNS"),
            ("and", "CC"),
            ("cats", "NNS"),
            ("are", "VBP"),
            ("cute", "JJ"),
        ]);
        let state = classify(&tokens, &Bracket::default(), &RuleSet::default(), None).unwrap();
        assert!(state.is_mental_thought);
        assert_eq!(state.verb.as_deref(), Some("<thinks>"));
        // 나열 접속사가 뒤따라도 "가"만 붙음
        assert_eq!(state.objects, ["<wolves>가", "<cats>가"]);
        // 동사가 이미 있으므로 절 끝 형용사는 수식어
        assert_eq!(state.modifiers, ["<cute>"]);
    }

    #[test]
    fn test_mental_verb_after_verb_only_sets_flag() {
        let tokens = toks(&[("I", "PRP"), ("run", "VBP"), ("thinking", "VBG"), ("dogs", "NNS")]);
        let bracket = Bracket::default();
        let state = classify(&tokens, &bracket, &RuleSet::default(), None).unwrap();
        assert!(state.is_mental_thought);
        assert_eq!(state.verb.as_deref(), Some("<run>"));
        assert_eq!(state.objects, ["<dogs>가"]);
        assert!(!bracket.calls.borrow().contains(&"thinking".to_string()));
    }

    #[test]
    fn test_coordination_particle() {
        let tokens = toks(&[
            ("I", "PRP"),
            ("like", "VBP"),
            ("apples", "NNS"),
            ("and", "CC"),
            ("oranges", "NNS"),
        ]);
        let state = classify(&tokens, &Bracket::default(), &RuleSet::default(), None).unwrap();
        assert_eq!(state.verb.as_deref(), Some("좋아한다"));
        assert_eq!(state.objects, ["<apples>와", "<oranges>"]);

        let gwa = RuleSet::default().with_coordination(CoordinationParticle::Gwa);
        let state = classify(&tokens, &Bracket::default(), &gwa, None).unwrap();
        assert_eq!(state.objects, ["<apples>과", "<oranges>"]);
    }

    #[test]
    fn test_clause_final_adjective_promoted() {
        let tokens = toks(&[("He", "PRP"), ("is", "VBZ"), ("tired", "JJ"), (".", ".")]);
        let state = classify(&tokens, &Bracket::default(), &RuleSet::default(), None).unwrap();
        assert_eq!(state.verb.as_deref(), Some("<tired>"));
        assert!(state.modifiers.is_empty());
    }

    #[test]
    fn test_basic_policy_keeps_copula() {
        let tokens = toks(&[("He", "PRP"), ("is", "VBZ"), ("tired", "JJ")]);
        let rules = RuleSet::new(StopWordPolicy::Basic);
        let state = classify(&tokens, &Bracket::default(), &rules, None).unwrap();
        assert_eq!(state.verb.as_deref(), Some("<is>"));
        assert_eq!(state.modifiers, ["<tired>"]);
    }

    #[test]
    fn test_adverbs_toggle() {
        let tokens = toks(&[("She", "PRP"), ("runs", "VBZ"), ("very", "RB"), ("fast", "RB")]);
        let state = classify(&tokens, &Bracket::default(), &RuleSet::default(), None).unwrap();
        assert_eq!(state.modifiers, ["<very>", "<fast>"]);

        let rules = RuleSet::default().with_adverbs_as_modifiers(false);
        let state = classify(&tokens, &Bracket::default(), &rules, None).unwrap();
        assert!(state.modifiers.is_empty());
    }

    #[test]
    fn test_stop_words_only() {
        let tokens = toks(&[("The", "DT"), ("a", "DT"), ("to", "TO"), ("and", "CC")]);
        let bracket = Bracket::default();
        let state = classify(&tokens, &bracket, &RuleSet::default(), None).unwrap();
        assert!(state.is_empty());
        assert!(bracket.calls.borrow().is_empty());
    }

    #[test]
    fn test_unmatched_tags_are_not_translated() {
        let tokens = toks(&[("I", "PRP"), ("sit", "VBP"), ("on", "IN"), ("this", "DT"), ("!", ".")]);
        let bracket = Bracket::default();
        classify(&tokens, &bracket, &RuleSet::default(), None).unwrap();
        assert_eq!(*bracket.calls.borrow(), ["i", "sit"]);
    }

    #[test]
    fn test_translation_failure_names_token() {
        let tokens = toks(&[("Wolves", "NNS")]);
        let err = classify(&tokens, &Failing, &RuleSet::default(), None).unwrap_err();
        match err {
            GlossError::TranslationUnavailable { token, .. } => assert_eq!(token, "Wolves"),
            other => panic!("예상하지 못한 에러: {:?}", other),
        }
    }

    #[test]
    fn test_cancel_before_translation() {
        let tokens = toks(&[("He", "PRP"), ("runs", "VBZ")]);
        let flag = CancelFlag::new();
        flag.cancel();
        let bracket = Bracket::default();
        let err = classify(&tokens, &bracket, &RuleSet::default(), Some(&flag)).unwrap_err();
        assert_eq!(err, GlossError::Cancelled);
        assert!(bracket.calls.borrow().is_empty());
    }
}
