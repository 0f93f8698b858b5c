//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::{ClauseFailurePolicy, CoordinationParticle, ObjectParticlePolicy, RuleSet, StopWordPolicy};
use crate::lexicon::RetryPolicy;

/// sovgloss 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GlossConfig {
    /// 불용어 목록 (basic / extended)
    #[serde(default = "default_stop_words")]
    pub stop_words: StopWordPolicy,
    /// 나열 조사 (wa / gwa / adaptive)
    #[serde(default = "default_coordination")]
    pub coordination_particle: CoordinationParticle,
    /// 목적격 조사 부착 조건
    #[serde(default = "default_object_particle")]
    pub object_particle: ObjectParticlePolicy,
    /// 목적어 나열 구분자
    #[serde(default = "default_object_separator")]
    pub object_separator: String,
    /// 부사를 수식어로 취급
    #[serde(default = "default_adverbs_as_modifiers")]
    pub adverbs_as_modifiers: bool,
    /// 절 실패 처리 (skip / abort)
    #[serde(default = "default_clause_failure")]
    pub clause_failure: ClauseFailurePolicy,
    /// 단어 번역 한 번의 제한 시간 (ms)
    #[serde(default = "default_translate_timeout_ms")]
    pub translate_timeout_ms: u64,
    /// 단어 번역 최대 시도 횟수
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// 첫 재시도 전 대기 시간 (ms), 이후 두 배씩
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    /// 사용자 단어 표 경로 (없으면 내장 표)
    #[serde(default)]
    pub lexicon_path: Option<String>,
}

fn default_stop_words() -> StopWordPolicy {
    StopWordPolicy::Extended
}

fn default_coordination() -> CoordinationParticle {
    CoordinationParticle::Wa
}

fn default_object_particle() -> ObjectParticlePolicy {
    ObjectParticlePolicy::WheneverObjects
}

fn default_object_separator() -> String {
    " ".to_string()
}

fn default_adverbs_as_modifiers() -> bool {
    true
}

fn default_clause_failure() -> ClauseFailurePolicy {
    ClauseFailurePolicy::Skip
}

fn default_translate_timeout_ms() -> u64 {
    5000
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    100
}

impl Default for GlossConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            coordination_particle: default_coordination(),
            object_particle: default_object_particle(),
            object_separator: default_object_separator(),
            adverbs_as_modifiers: default_adverbs_as_modifiers(),
            clause_failure: default_clause_failure(),
            translate_timeout_ms: default_translate_timeout_ms(),
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            lexicon_path: None,
        }
    }
}

impl GlossConfig {
    /// 설정값으로 재배열 규칙 생성
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::new(self.stop_words)
            .with_coordination(self.coordination_particle)
            .with_object_particle(self.object_particle)
            .with_object_separator(self.object_separator.clone())
            .with_adverbs_as_modifiers(self.adverbs_as_modifiers)
    }

    /// 설정값으로 번역 재시도 정책 생성
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new()
            .with_timeout(Duration::from_millis(self.translate_timeout_ms))
            .with_max_attempts(self.max_attempts)
            .with_backoff(Duration::from_millis(self.backoff_ms))
    }
}

/// 설정 파일 경로: ~/.config/sovgloss/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("sovgloss").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> GlossConfig {
    load_config_from(&config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> GlossConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            GlossConfig::default()
        }),
        Err(_) => GlossConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &GlossConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 설정 파일 저장
pub fn save_config_to(config: &GlossConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlossConfig::default();
        assert_eq!(config.stop_words, StopWordPolicy::Extended);
        assert_eq!(config.coordination_particle, CoordinationParticle::Wa);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.lexicon_path, None);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = GlossConfig {
            stop_words: StopWordPolicy::Basic,
            coordination_particle: CoordinationParticle::Adaptive,
            clause_failure: ClauseFailurePolicy::Abort,
            lexicon_path: Some("data/lexicon.json".into()),
            ..GlossConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"basic\""));
        assert!(json.contains("\"adaptive\""));
        let parsed: GlossConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 일부 필드만 있는 경우 나머지는 기본값
        let json = r#"{"stop_words": "basic", "max_attempts": 5}"#;
        let config: GlossConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.stop_words, StopWordPolicy::Basic);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.translate_timeout_ms, 5000);
        assert_eq!(config.object_separator, " ");
    }

    #[test]
    fn test_rule_set_from_config() {
        let config = GlossConfig {
            stop_words: StopWordPolicy::Basic,
            object_particle: ObjectParticlePolicy::LexicalOverrideOnly,
            adverbs_as_modifiers: false,
            ..GlossConfig::default()
        };
        let rules = config.rule_set();
        assert!(!rules.is_stop_word("is"));
        assert_eq!(rules.object_particle, ObjectParticlePolicy::LexicalOverrideOnly);
        assert!(!rules.adverbs_as_modifiers);
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = GlossConfig {
            translate_timeout_ms: 250,
            max_attempts: 2,
            backoff_ms: 10,
            ..GlossConfig::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.timeout, Duration::from_millis(250));
        assert_eq!(policy.max_attempts, 2);
        assert_eq!(policy.backoff, Duration::from_millis(10));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("sovgloss-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = GlossConfig {
            max_attempts: 7,
            ..GlossConfig::default()
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let path = std::env::temp_dir().join(format!("sovgloss-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), GlossConfig::default());
        fs::remove_file(&path).unwrap();

        assert_eq!(
            load_config_from(Path::new("/nonexistent/sovgloss/config.json")),
            GlossConfig::default()
        );
    }
}
