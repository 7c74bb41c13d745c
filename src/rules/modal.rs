//! Modal constructions: "have to" periphrasis and the closed set of modal
//! auxiliaries.

use crate::{Condition, Rule};

/// Lemmas accepted in the modal-auxiliary position.
pub const MODALS: &[&str] = &["must", "should", "may", "might", "can", "could", "would"];

fn modal() -> Condition {
    Condition::OneOf { lemmas: MODALS, tail: "" }
}

/// "has to teach"
pub fn rule_present() -> Rule {
    rule! {
        name: "modal: present",
        family: MODAL,
        arity: 3,
        pattern: [lemma!("have", "+indic+pres"), lemma!("to"), verb!("infin+pres")],
        label: (Present, None),
    }
}

/// "has to be teaching"
pub fn rule_present_progressive() -> Rule {
    rule! {
        name: "modal: present progressive",
        family: MODAL,
        arity: 4,
        pattern: [
            lemma!("have", "+indic+pres"),
            stem!("to"),
            lemma!("be", "infin+pres"),
            verb!("gerund+pres"),
        ],
        label: (Present, Progressive),
    }
}

/// "has to have taught"
pub fn rule_present_perfective() -> Rule {
    rule! {
        name: "modal: present perfective",
        family: MODAL,
        arity: 4,
        pattern: [
            lemma!("have", "+indic+pres"),
            stem!("to"),
            lemma!("have", "infin+pres"),
            verb!("part+past"),
        ],
        label: (Present, Perfective),
    }
}

/// "has to have been teaching"
pub fn rule_present_perfective_progressive() -> Rule {
    rule! {
        name: "modal: present perfective progressive",
        family: MODAL,
        arity: 5,
        pattern: [
            lemma!("have", "+indic+pres"),
            stem!("to"),
            lemma!("have", "infin+pres"),
            stem!("be+v+", "part+past"),
            verb!("gerund+pres"),
        ],
        label: (Present, PerfectiveProgressive),
    }
}

/// "had to teach"
pub fn rule_past() -> Rule {
    rule! {
        name: "modal: past (have to)",
        family: MODAL,
        arity: 3,
        pattern: [lemma!("have", "+indic+past"), stem!("to"), verb!("infin+pres")],
        label: (Past, None),
    }
}

/// "had to be teaching"
pub fn rule_past_progressive() -> Rule {
    rule! {
        name: "modal: past progressive",
        family: MODAL,
        arity: 4,
        pattern: [
            lemma!("have", "+indic+past"),
            stem!("to"),
            lemma!("be", "infin+pres"),
            verb!("gerund+pres"),
        ],
        label: (Past, Progressive),
    }
}

/// "will have to teach"
pub fn rule_future() -> Rule {
    rule! {
        name: "modal: future",
        family: MODAL,
        arity: 4,
        pattern: [
            lemma!("will", "+indic+pres"),
            lemma!("have", "infin+pres"),
            stem!("to"),
            verb!("infin+pres"),
        ],
        label: (Future, None),
    }
}

/// "will have to be teaching"
pub fn rule_future_progressive() -> Rule {
    rule! {
        name: "modal: future progressive",
        family: MODAL,
        arity: 5,
        pattern: [
            lemma!("will", "indic+pres"),
            lemma!("have", "infin+pres"),
            stem!("to"),
            lemma!("be", "infin+pres"),
            verb!("gerund+pres"),
        ],
        label: (Future, Progressive),
    }
}

/// "could teach"
pub fn rule_none() -> Rule {
    rule! {
        name: "modal: none",
        family: MODAL,
        arity: 2,
        pattern: [modal(), verb!("infin+pres")],
        label: (None, None),
    }
}

/// "could be teaching"
pub fn rule_none_progressive() -> Rule {
    rule! {
        name: "modal: none progressive",
        family: MODAL,
        arity: 3,
        pattern: [modal(), lemma!("be", "infin+pres"), verb!("gerund+pres")],
        label: (None, Progressive),
    }
}

/// "could have taught"
pub fn rule_none_perfective() -> Rule {
    rule! {
        name: "modal: none perfective",
        family: MODAL,
        arity: 3,
        pattern: [modal(), lemma!("have", "infin+pres"), verb!("part+past")],
        label: (None, Perfective),
    }
}

/// "could have been teaching"
///
/// Labelled NONE/PROGRESSIVE as recorded.
pub fn rule_none_perfective_progressive() -> Rule {
    rule! {
        name: "modal: none perfective progressive",
        family: MODAL,
        arity: 4,
        pattern: [
            modal(),
            lemma!("have", "infin+pres"),
            lemma!("be", "part+past"),
            verb!("gerund+pres"),
        ],
        label: (None, Progressive),
    }
}

/// "could be taught"
pub fn rule_past_passive() -> Rule {
    rule! {
        name: "modal: past (modal + passive)",
        family: MODAL,
        arity: 3,
        pattern: [modal(), lemma!("be", "infin+pres"), verb!("part+past")],
        label: (Past, None),
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_present(),
        rule_present_progressive(),
        rule_present_perfective(),
        rule_present_perfective_progressive(),
        rule_past(),
        rule_past_progressive(),
        rule_future(),
        rule_future_progressive(),
        rule_none(),
        rule_none_progressive(),
        rule_none_perfective(),
        rule_none_perfective_progressive(),
        rule_past_passive(),
    ]
}
