//! 시간 제한과 재시도를 붙인 번역기 래퍼
//!
//! 네트워크 번역기처럼 느리거나 불안정한 번역기를 감쌉니다.
//! 각 시도는 워커 스레드에서 실행되고 `recv_timeout`으로 기다립니다.

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use super::{Language, TranslateError, Translator};

/// 재시도 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 시도당 제한 시간
    pub timeout: Duration,
    /// 최대 시도 횟수 (1 이상)
    pub max_attempts: u32,
    /// 첫 재시도 전 대기 시간, 이후 두 배씩 증가
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            max_attempts: 3,
            backoff: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// n번째 실패 후 대기 시간 (n은 0부터)
    pub fn delay_after(&self, failed_attempt: u32) -> Duration {
        self.backoff.saturating_mul(1u32 << failed_attempt.min(16))
    }
}

/// 시간 제한 + 지수 백오프 재시도 번역기
pub struct ResilientTranslator<T> {
    inner: Arc<T>,
    policy: RetryPolicy,
}

impl<T> ResilientTranslator<T>
where
    T: Translator + Send + Sync + 'static,
{
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self {
            inner: Arc::new(inner),
            policy,
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// 한 번 시도 (시간 제한 적용)
    ///
    /// 시간이 초과되면 워커 스레드는 join하지 않고 분리된 채 남습니다.
    /// 응답하지 않는 번역기라면 단어 하나당 최대 `max_attempts`개의 스레드가
    /// 끝나지 않고 남을 수 있습니다.
    fn attempt(&self, word: &str, source: Language, target: Language) -> Result<String, TranslateError> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let word_owned = word.to_string();

        // 시간 초과 후 끝난 워커의 send 실패는 무시
        thread::spawn(move || {
            let _ = tx.send(inner.translate(&word_owned, source, target));
        });

        match rx.recv_timeout(self.policy.timeout) {
            Ok(Ok(text)) if text.trim().is_empty() => Err(TranslateError::Empty),
            Ok(Ok(text)) => Ok(text.trim().to_string()),
            Ok(Err(e)) => Err(e),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(TranslateError::Timeout(self.policy.timeout)),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(TranslateError::Unavailable(
                "번역 워커가 응답 없이 종료됨".to_string(),
            )),
        }
    }
}

impl<T> Translator for ResilientTranslator<T>
where
    T: Translator + Send + Sync + 'static,
{
    fn translate(
        &self,
        word: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 0..attempts {
            match self.attempt(word, source, target) {
                Ok(text) => return Ok(text),
                // 미등록 단어, 언어쌍 오류는 재시도해도 같음
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) => {
                    log::warn!(
                        "번역 실패 ({}/{}) '{}': {}",
                        attempt + 1,
                        attempts,
                        word,
                        e
                    );
                    last_error = Some(e);
                }
            }
            if attempt + 1 < attempts {
                thread::sleep(self.policy.delay_after(attempt));
            }
        }

        Err(last_error.unwrap_or(TranslateError::Empty))
    }
}
