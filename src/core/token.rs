//! 품사 태그가 붙은 토큰
//!
//! 태거가 돌려주는 (단어, 태그) 쌍을 표현합니다.
//! 태그 어휘는 Penn Treebank 표기를 따릅니다.

use std::fmt;

/// 품사 태그
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// PRP
    Pronoun,
    /// PRP$
    PossessivePronoun,
    /// NNP
    ProperNoun,
    /// NNPS
    ProperNounPlural,
    /// NN
    Noun,
    /// NNS
    NounPlural,
    /// VB, VBD, VBG, VBN, VBP, VBZ (원형 표기 보존)
    Verb(VerbForm),
    /// JJ, JJR, JJS
    Adjective,
    /// RB, RBR, RBS
    Adverb,
    /// CC
    Conjunction,
    /// DT
    Determiner,
    /// TO
    To,
    /// 구두점 (. , ! ? ; :)
    Punctuation,
    /// 그 밖의 태그 (IN, MD, CD ...)
    Other(String),
}

/// 동사 활용형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbForm {
    Base,
    Past,
    Gerund,
    PastParticiple,
    Present,
    ThirdPerson,
}

impl Tag {
    /// Penn 태그 문자열에서 변환
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "PRP" => Tag::Pronoun,
            "PRP$" => Tag::PossessivePronoun,
            "NNP" => Tag::ProperNoun,
            "NNPS" => Tag::ProperNounPlural,
            "NN" => Tag::Noun,
            "NNS" => Tag::NounPlural,
            "VB" => Tag::Verb(VerbForm::Base),
            "VBD" => Tag::Verb(VerbForm::Past),
            "VBG" => Tag::Verb(VerbForm::Gerund),
            "VBN" => Tag::Verb(VerbForm::PastParticiple),
            "VBP" => Tag::Verb(VerbForm::Present),
            "VBZ" => Tag::Verb(VerbForm::ThirdPerson),
            "JJ" | "JJR" | "JJS" => Tag::Adjective,
            "RB" | "RBR" | "RBS" => Tag::Adverb,
            "CC" => Tag::Conjunction,
            "DT" => Tag::Determiner,
            "TO" => Tag::To,
            "." | "," | ":" | "!" | "?" | ";" => Tag::Punctuation,
            other => Tag::Other(other.to_string()),
        }
    }

    /// Penn 태그 문자열로 변환
    pub fn as_penn(&self) -> &str {
        match self {
            Tag::Pronoun => "PRP",
            Tag::PossessivePronoun => "PRP$",
            Tag::ProperNoun => "NNP",
            Tag::ProperNounPlural => "NNPS",
            Tag::Noun => "NN",
            Tag::NounPlural => "NNS",
            Tag::Verb(VerbForm::Base) => "VB",
            Tag::Verb(VerbForm::Past) => "VBD",
            Tag::Verb(VerbForm::Gerund) => "VBG",
            Tag::Verb(VerbForm::PastParticiple) => "VBN",
            Tag::Verb(VerbForm::Present) => "VBP",
            Tag::Verb(VerbForm::ThirdPerson) => "VBZ",
            Tag::Adjective => "JJ",
            Tag::Adverb => "RB",
            Tag::Conjunction => "CC",
            Tag::Determiner => "DT",
            Tag::To => "TO",
            Tag::Punctuation => ".",
            Tag::Other(s) => s,
        }
    }

    /// 주어 후보 (대명사, 고유명사)
    pub fn is_subject_candidate(&self) -> bool {
        matches!(
            self,
            Tag::Pronoun | Tag::ProperNoun | Tag::ProperNounPlural
        )
    }

    /// "VB" 접두 태그
    pub fn is_verb(&self) -> bool {
        matches!(self, Tag::Verb(_))
    }

    /// "NN" 접두 태그 (고유명사 포함)
    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            Tag::Noun | Tag::NounPlural | Tag::ProperNoun | Tag::ProperNounPlural
        )
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, Tag::Adjective)
    }

    pub fn is_adverb(&self) -> bool {
        matches!(self, Tag::Adverb)
    }

    pub fn is_conjunction(&self) -> bool {
        matches!(self, Tag::Conjunction)
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self, Tag::Punctuation)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_penn())
    }
}

/// (표층형, 품사) 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: Tag,
}

impl Token {
    pub fn new(text: impl Into<String>, tag: Tag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    /// Penn 태그 문자열로 생성
    pub fn penn(text: impl Into<String>, tag: &str) -> Self {
        Self::new(text, Tag::from_penn(tag))
    }

    /// 소문자 정규화된 표층형
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }
}
