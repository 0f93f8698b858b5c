//! 영어 절을 한국어 어순(SOV)으로 재배열하는 핵심 로직
//!
//! # 개요
//!
//! 문장 하나를 다음 순서로 처리합니다:
//!
//! 1. **절 분리**: 쉼표 기준 (`splitter`)
//! 2. **분류**: 품사 태그로 주어/목적어/수식어/서술어 버킷 채우기 (`classifier`)
//! 3. **조립**: 조사를 붙여 SOV 순서로 연결 (`assembler`)
//!
//! 태거와 번역기는 `lexicon` 트레이트로 주입됩니다.
//!
//! # 사용 예시
//!
//! ```
//! use sovgloss::core::{Glosser, RuleSet};
//! use sovgloss::lexicon::{DictionaryTranslator, LexiconTagger};
//!
//! let glosser = Glosser::new(LexiconTagger::new(), DictionaryTranslator::builtin().unwrap())
//!     .with_rules(RuleSet::default());
//! let gloss = glosser.gloss("I like apples and oranges").unwrap();
//! assert_eq!(gloss.text, "나는 사과와 오렌지를 좋아한다");
//! ```

pub mod assembler;
pub mod cancel;
pub mod classifier;
pub mod error;
pub mod glosser;
pub mod rules;
pub mod splitter;
pub mod token;
pub mod unicode;

pub use assembler::assemble;
pub use cancel::CancelFlag;
pub use classifier::{classify, ClassificationState};
pub use error::GlossError;
pub use glosser::{restructure_clause, ClauseFailurePolicy, ClauseOutcome, Glosser, SentenceGloss};
pub use rules::{CoordinationParticle, ObjectParticlePolicy, RuleSet, StopWordPolicy};
pub use splitter::{join_clauses, split_clauses};
pub use token::{Tag, Token, VerbForm};
