//! 문장 단위 SOV 변환기
//!
//! 절 분리 -> 태깅 -> 분류 -> 조립을 절마다 독립적으로 수행합니다.
//! 절 사이에 공유되는 상태는 없습니다.

use serde::{Deserialize, Serialize};

use crate::lexicon::{Tagger, Translator};

use super::assembler::assemble;
use super::cancel::CancelFlag;
use super::classifier::classify;
use super::error::GlossError;
use super::rules::RuleSet;
use super::splitter::{join_clauses, split_clauses};
use super::token::Token;

/// 절 하나가 실패했을 때의 처리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseFailurePolicy {
    /// 실패한 절만 빼고 계속
    Skip,
    /// 첫 실패에서 전체 중단
    Abort,
}

/// 절 하나의 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseOutcome {
    /// 원문 절
    pub source: String,
    /// 변환 결과 또는 에러
    pub result: Result<String, GlossError>,
}

/// 문장 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceGloss {
    /// 성공한 절을 원래 순서대로 이은 문자열
    pub text: String,
    /// 절별 결과
    pub clauses: Vec<ClauseOutcome>,
}

impl SentenceGloss {
    /// 실패한 절 수
    pub fn failed_count(&self) -> usize {
        self.clauses.iter().filter(|c| c.result.is_err()).count()
    }

    /// 모든 절이 성공했는지
    pub fn is_complete(&self) -> bool {
        self.failed_count() == 0
    }
}

/// 태깅된 절 하나를 SOV 문자열로 재배열
pub fn restructure_clause<R>(
    tokens: &[Token],
    translator: &R,
    rules: &RuleSet,
    cancel: Option<&CancelFlag>,
) -> Result<String, GlossError>
where
    R: Translator + ?Sized,
{
    let state = classify(tokens, translator, rules, cancel)?;
    Ok(assemble(&state, rules))
}

/// 태거와 번역기를 주입받는 문장 변환기
pub struct Glosser<T, R> {
    tagger: T,
    translator: R,
    rules: RuleSet,
    failure_policy: ClauseFailurePolicy,
}

impl<T, R> Glosser<T, R>
where
    T: Tagger,
    R: Translator,
{
    /// 기본 규칙으로 생성
    pub fn new(tagger: T, translator: R) -> Self {
        Self {
            tagger,
            translator,
            rules: RuleSet::default(),
            failure_policy: ClauseFailurePolicy::Skip,
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_failure_policy(mut self, policy: ClauseFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// 절 하나 변환 (태깅 포함)
    pub fn gloss_clause(&self, clause: &str, cancel: Option<&CancelFlag>) -> Result<String, GlossError> {
        let tokens = self.tagger.tag(clause)?;
        restructure_clause(&tokens, &self.translator, &self.rules, cancel)
    }

    /// 문장 변환
    pub fn gloss(&self, sentence: &str) -> Result<SentenceGloss, GlossError> {
        self.run(sentence, None)
    }

    /// 취소 가능한 문장 변환
    pub fn gloss_with_cancel(
        &self,
        sentence: &str,
        cancel: &CancelFlag,
    ) -> Result<SentenceGloss, GlossError> {
        self.run(sentence, Some(cancel))
    }

    fn run(&self, sentence: &str, cancel: Option<&CancelFlag>) -> Result<SentenceGloss, GlossError> {
        let mut outcomes = Vec::new();

        for clause in split_clauses(sentence) {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                return Err(GlossError::Cancelled);
            }

            let result = self.gloss_clause(clause, cancel);
            match &result {
                Err(GlossError::Cancelled) => return Err(GlossError::Cancelled),
                Err(e) if self.failure_policy == ClauseFailurePolicy::Abort => {
                    return Err(e.clone());
                }
                Err(e) => log::warn!("절 건너뜀 '{}': {}", clause, e),
                Ok(text) => log::debug!("절 '{}' -> '{}'", clause, text),
            }

            outcomes.push(ClauseOutcome {
                source: clause.to_string(),
                result,
            });
        }

        let translated: Vec<&str> = outcomes
            .iter()
            .filter_map(|o| o.result.as_deref().ok())
            .collect();

        Ok(SentenceGloss {
            text: join_clauses(&translated),
            clauses: outcomes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Language, TagError, TranslateError};
    use std::collections::HashMap;

    /// 미리 정해진 태그를 돌려주는 태거
    struct FixedTagger(HashMap<&'static str, Vec<Token>>);

    impl Tagger for FixedTagger {
        fn tag(&self, text: &str) -> Result<Vec<Token>, TagError> {
            self.0
                .get(text)
                .cloned()
                .ok_or_else(|| TagError::Unsupported(text.to_string()))
        }
    }

    struct MapTranslator(HashMap<&'static str, &'static str>);

    impl Translator for MapTranslator {
        fn translate(&self, word: &str, _: Language, _: Language) -> Result<String, TranslateError> {
            self.0
                .get(word)
                .map(|s| s.to_string())
                .ok_or_else(|| TranslateError::Unavailable(word.to_string()))
        }
    }

    fn glosser() -> Glosser<FixedTagger, MapTranslator> {
        let mut tags = HashMap::new();
        tags.insert("She runs", vec![Token::penn("She", "PRP"), Token::penn("runs", "VBZ")]);
        tags.insert("he walks", vec![Token::penn("he", "PRP"), Token::penn("walks", "VBZ")]);
        tags.insert("he flies", vec![Token::penn("he", "PRP"), Token::penn("flies", "VBZ")]);

        let words = [("she", "그녀"), ("he", "그"), ("runs", "달린다"), ("walks", "걷는다")]
            .into_iter()
            .collect();

        Glosser::new(FixedTagger(tags), MapTranslator(words))
    }

    #[test]
    fn test_multi_clause_join() {
        let result = glosser().gloss("She runs, he walks").unwrap();
        assert_eq!(result.text, "그녀는 달린다 그는 걷는다");
        assert_eq!(result.clauses.len(), 2);
        assert!(result.is_complete());
    }

    #[test]
    fn test_skip_failed_clause() {
        let result = glosser().gloss("She runs, he flies, he walks").unwrap();
        assert_eq!(result.text, "그녀는 달린다 그는 걷는다");
        assert_eq!(result.failed_count(), 1);
        assert!(matches!(
            result.clauses[1].result,
            Err(GlossError::TranslationUnavailable { ref token, .. }) if token == "flies"
        ));
    }

    #[test]
    fn test_abort_on_failure() {
        let glosser = glosser().with_failure_policy(ClauseFailurePolicy::Abort);
        let err = glosser.gloss("She runs, he flies").unwrap_err();
        assert!(matches!(err, GlossError::TranslationUnavailable { .. }));
    }

    #[test]
    fn test_tagging_failure_is_reported() {
        let result = glosser().gloss("unknown clause").unwrap();
        assert_eq!(result.text, "");
        assert!(matches!(result.clauses[0].result, Err(GlossError::Tagging(_))));
    }

    #[test]
    fn test_cancelled_before_start() {
        let flag = CancelFlag::new();
        flag.cancel();
        let err = glosser().gloss_with_cancel("She runs", &flag).unwrap_err();
        assert_eq!(err, GlossError::Cancelled);
    }

    #[test]
    fn test_empty_sentence() {
        let result = glosser().gloss(" , ").unwrap();
        assert_eq!(result.text, "");
        assert!(result.clauses.is_empty());
    }
}
