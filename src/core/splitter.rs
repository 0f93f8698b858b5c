//! 쉼표 기준 절 분리

/// 문장을 쉼표로 나누고 앞뒤 공백을 제거, 빈 조각은 버림
pub fn split_clauses(sentence: &str) -> Vec<&str> {
    sentence
        .split(',')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}

/// 절 결과를 원래 순서대로 공백 하나로 연결
pub fn join_clauses<S: AsRef<str>>(clauses: &[S]) -> String {
    clauses
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
