pub mod config;
pub mod core;
pub mod lexicon;

pub use self::core::{Glosser, GlossError, RuleSet, SentenceGloss};
pub use self::lexicon::{DictionaryTranslator, LexiconTagger, ResilientTranslator};
