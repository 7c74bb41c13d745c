//! Emphatic and interrogative `do` followed by a bare infinitive.

use crate::Rule;

/// "did care"
pub fn rule_past() -> Rule {
    rule! {
        name: "do-support: past",
        family: DO_SUPPORT,
        arity: 2,
        pattern: [lemma!("do", "indic+past"), verb!("infin+pres")],
        label: (Past, None),
    }
}

/// "do care"
pub fn rule_present() -> Rule {
    rule! {
        name: "do-support: present",
        family: DO_SUPPORT,
        arity: 2,
        pattern: [lemma!("do", "indic+pres"), verb!("infin+pres")],
        label: (Present, None),
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_past(), rule_present()]
}
