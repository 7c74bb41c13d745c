//! Passive-voice verb phrases: an auxiliary chain ending in a past participle.

use crate::{Condition, Rule};

/// A progressive `being` or the participle itself.
const GERUND_OR_PARTICIPLE: Condition = either![lemma!("be", "+gerund+pres"), verb!("part+past")];

/// "is taught"
pub fn rule_present() -> Rule {
    rule! {
        name: "passive: present",
        family: PASSIVE,
        arity: 2,
        pattern: [lemma!("be", "+indic+pres"), verb!("part+past")],
        label: (Present, None),
    }
}

/// "is being taught"
pub fn rule_present_progressive() -> Rule {
    rule! {
        name: "passive: present progressive",
        family: PASSIVE,
        arity: 3,
        pattern: [lemma!("be", "+indic+pres"), lemma!("be", "+gerund+pres"), verb!("part+past")],
        label: (Present, Progressive),
    }
}

/// "have been taught"
pub fn rule_present_perfective() -> Rule {
    rule! {
        name: "passive: present perfective",
        family: PASSIVE,
        arity: 3,
        pattern: [lemma!("have", "+indic+pres"), lemma!("be", "+part+past"), verb!("part+past")],
        label: (Present, Perfective),
    }
}

/// "was taught"
pub fn rule_past() -> Rule {
    rule! {
        name: "passive: past",
        family: PASSIVE,
        arity: 2,
        pattern: [lemma!("be", "+indic+past"), verb!("part+past")],
        label: (Past, None),
    }
}

/// "was being"
///
/// Two positions only: the second accepts either a `being` or a participle
/// reading, so "was being taught" is not covered by this rule.
pub fn rule_past_progressive() -> Rule {
    rule! {
        name: "passive: past progressive",
        family: PASSIVE,
        arity: 2,
        pattern: [lemma!("be", "+indic+past"), GERUND_OR_PARTICIPLE],
        label: (Past, Progressive),
    }
}

/// "had been taught"
pub fn rule_past_perfective() -> Rule {
    rule! {
        name: "passive: past perfective",
        family: PASSIVE,
        arity: 3,
        pattern: [lemma!("have", "+indic+past"), lemma!("be", "+part+past"), verb!("part+past")],
        label: (Past, Perfective),
    }
}

/// "will be taught"
pub fn rule_future_will() -> Rule {
    rule! {
        name: "passive: future (will)",
        family: PASSIVE,
        arity: 3,
        pattern: [lemma!("will", "+indic+pres"), lemma!("be", "+infin+pres"), verb!("part+past")],
        label: (Future, None),
    }
}

/// "is going to be taught"
pub fn rule_future_going_to() -> Rule {
    rule! {
        name: "passive: future (be going to)",
        family: PASSIVE,
        arity: 5,
        pattern: [
            lemma!("be", "+indic+pres"),
            lemma!("go", "+gerund+pres"),
            lemma!("to"),
            lemma!("be", "infin+pres"),
            verb!("part+past"),
        ],
        label: (Future, None),
    }
}

/// "will have been taught"
pub fn rule_future_perfective() -> Rule {
    rule! {
        name: "passive: future perfective",
        family: PASSIVE,
        arity: 4,
        pattern: [
            lemma!("will", "+indic+pres"),
            lemma!("have", "+infin+pres"),
            lemma!("be", "part+past"),
            verb!("part+past"),
        ],
        label: (Future, Perfective),
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_present(),
        rule_present_progressive(),
        rule_present_perfective(),
        rule_past(),
        rule_past_progressive(),
        rule_past_perfective(),
        rule_future_will(),
        rule_future_going_to(),
        rule_future_perfective(),
    ]
}
