//! Bare verb forms and auxiliary-less participle phrases.

use crate::Rule;

/// "releasing"
pub fn rule_prespart() -> Rule {
    rule! {
        name: "simple: prespart",
        family: SIMPLE,
        arity: 1,
        pattern: [verb!("gerund+pres")],
        label: (PresPart, None),
    }
}

/// "release"
pub fn rule_present() -> Rule {
    rule! {
        name: "simple: present",
        family: SIMPLE,
        arity: 1,
        pattern: [verb!("indic+pres")],
        label: (Present, None),
    }
}

/// "released" (indicative reading wins over the participle rule below)
pub fn rule_past() -> Rule {
    rule! {
        name: "simple: past",
        family: SIMPLE,
        arity: 1,
        pattern: [verb!("indic+past")],
        label: (Past, None),
    }
}

/// A token whose only verbal reading is a past participle.
pub fn rule_pastpart() -> Rule {
    rule! {
        name: "simple: pastpart",
        family: SIMPLE,
        arity: 1,
        pattern: [verb!("part+past")],
        label: (PastPart, None),
    }
}

/// "been running"
pub fn rule_participle_progressive() -> Rule {
    rule! {
        name: "participle: been + gerund",
        family: PARTICIPLE,
        arity: 2,
        pattern: [lemma!("be", "+part+past"), verb!("gerund+pres")],
        label: (None, PerfectiveProgressive),
    }
}

/// "been tried"
pub fn rule_participle_perfective() -> Rule {
    rule! {
        name: "participle: been + participle",
        family: PARTICIPLE,
        arity: 2,
        pattern: [lemma!("be", "+part+past"), verb!("part+past")],
        label: (None, Perfective),
    }
}

/// Same pattern as [`rule_prespart`]; never selected because that rule
/// comes first.
pub fn rule_prespart_bare() -> Rule {
    rule! {
        name: "simple: prespart (bare)",
        family: SIMPLE,
        arity: 1,
        pattern: [verb!("gerund+pres")],
        label: (PresPart, None),
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_prespart(),
        rule_present(),
        rule_past(),
        rule_pastpart(),
        rule_participle_progressive(),
        rule_participle_perfective(),
        rule_prespart_bare(),
    ]
}
