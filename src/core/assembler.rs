//! SOV 조립과 조사 선택
//!
//! 분류 결과를 주어 - 목적어 - 수식어 - 서술어 순서의 문자열로 만듭니다.

use super::classifier::ClassificationState;
use super::rules::{ObjectParticlePolicy, RuleSet, MENTAL_CONNECTOR, OBJECT_PARTICLE};

/// 비어 있지 않은 조각만 공백 하나로 연결
fn join_nonempty<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 목적격 조사 "를"을 붙일지
fn takes_object_particle(state: &ClassificationState, rules: &RuleSet) -> bool {
    if state.objects.is_empty() {
        return false;
    }
    match rules.object_particle {
        ObjectParticlePolicy::WheneverObjects => true,
        ObjectParticlePolicy::LexicalOverrideOnly => state
            .verb
            .as_deref()
            .is_some_and(|verb| rules.is_override_value(verb)),
    }
}

/// 분류 결과를 절 문자열로 조립
///
/// - 사고절: `주어 [목적어 수식어]고 서술어`
/// - 일반절: `주어 목적어를 수식어 서술어`
pub fn assemble(state: &ClassificationState, rules: &RuleSet) -> String {
    let objects = state.objects.join(rules.object_separator.as_str());
    let modifiers = state.modifiers.join(" ");
    let subject = state.subject.as_deref().unwrap_or("");
    let verb = state.verb.as_deref().unwrap_or("");

    if state.is_mental_thought {
        let embedded = join_nonempty([objects.as_str(), modifiers.as_str()]);
        // 안긴절이 비면 연결 어미도 생략
        let embedded = if embedded.is_empty() {
            embedded
        } else {
            format!("{embedded}{MENTAL_CONNECTOR}")
        };
        return join_nonempty([subject, embedded.as_str(), verb]);
    }

    let objects = if takes_object_particle(state, rules) {
        format!("{objects}{OBJECT_PARTICLE}")
    } else {
        objects
    };
    join_nonempty([subject, objects.as_str(), modifiers.as_str(), verb])
}
