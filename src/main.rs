//! sovgloss - 영어 문장을 한국어 어순(SOV) 글로스로 재배열

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sovgloss::config::{load_config, load_config_from, GlossConfig};
use sovgloss::core::{Glosser, StopWordPolicy};
use sovgloss::lexicon::{
    DictionaryTranslator, LexiconError, LexiconTagger, ResilientTranslator, Tagger, Translator,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 설정 파일 경로 (기본: ~/.config/sovgloss/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 단어 표 JSON 경로 (기본: 내장 표)
    #[arg(long)]
    lexicon: Option<String>,

    /// 불용어 목록 선택
    #[arg(long, value_enum)]
    stop_words: Option<StopWords>,

    /// 변환할 문장 (없으면 표준 입력에서 한 줄씩)
    sentence: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StopWords {
    Basic,
    Extended,
}

impl From<StopWords> for StopWordPolicy {
    fn from(value: StopWords) -> Self {
        match value {
            StopWords::Basic => StopWordPolicy::Basic,
            StopWords::Extended => StopWordPolicy::Extended,
        }
    }
}

fn load_lexicon(cli: &Cli, config: &GlossConfig) -> Result<DictionaryTranslator, LexiconError> {
    match cli.lexicon.as_deref().or(config.lexicon_path.as_deref()) {
        Some(path) => DictionaryTranslator::load(path),
        None => DictionaryTranslator::builtin(),
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드
    let mut config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    if let Some(stop_words) = cli.stop_words {
        config.stop_words = stop_words.into();
    }

    let dictionary = match load_lexicon(&cli, &config) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            log::error!("단어 표 로드 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let translator = ResilientTranslator::new(dictionary, config.retry_policy());
    let glosser = Glosser::new(LexiconTagger::new(), translator)
        .with_rules(config.rule_set())
        .with_failure_policy(config.clause_failure);

    let ok = if cli.sentence.is_empty() {
        gloss_lines(&glosser, io::stdin().lock())
    } else {
        gloss_sentence(&glosser, &cli.sentence.join(" "))
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// 문장 하나를 변환해 출력 (실패하면 false)
fn gloss_sentence<T: Tagger, R: Translator>(glosser: &Glosser<T, R>, sentence: &str) -> bool {
    if sentence.trim().is_empty() {
        return true;
    }
    match glosser.gloss(sentence) {
        Ok(gloss) => {
            if !gloss.is_complete() {
                log::warn!("{}개 절을 변환하지 못했습니다", gloss.failed_count());
            }
            println!("{}", gloss.text);
            true
        }
        Err(e) => {
            log::error!("변환 실패 '{}': {}", sentence, e);
            false
        }
    }
}

/// 입력을 한 줄씩 변환 (읽기 오류가 나면 중단하고 false)
fn gloss_lines<T: Tagger, R: Translator>(glosser: &Glosser<T, R>, reader: impl BufRead) -> bool {
    let mut ok = true;
    for line in reader.lines() {
        match line {
            Ok(sentence) => ok &= gloss_sentence(glosser, &sentence),
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                return false;
            }
        }
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn builtin_glosser() -> Glosser<LexiconTagger, DictionaryTranslator> {
        Glosser::new(LexiconTagger::new(), DictionaryTranslator::builtin().unwrap())
    }

    #[test]
    fn test_stop_words_flag() {
        let cli = Cli::try_parse_from(["sovgloss", "--stop-words", "basic", "I", "run"]).unwrap();
        assert!(matches!(cli.stop_words, Some(StopWords::Basic)));
        assert_eq!(cli.sentence, ["I", "run"]);

        let cli = Cli::try_parse_from(["sovgloss", "--stop-words", "extended"]).unwrap();
        assert_eq!(StopWordPolicy::from(cli.stop_words.unwrap()), StopWordPolicy::Extended);
        assert!(Cli::try_parse_from(["sovgloss", "--stop-words", "strict"]).is_err());
    }

    #[test]
    fn test_gloss_lines() {
        let input = Cursor::new("I like apples\n\nshe runs\n");
        assert!(gloss_lines(&builtin_glosser(), input));
    }

    #[test]
    fn test_invalid_utf8_line_fails() {
        let input = Cursor::new(b"I like apples\n\xff\xfe\nshe runs\n".to_vec());
        assert!(!gloss_lines(&builtin_glosser(), input));
    }
}
