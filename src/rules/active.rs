//! Active-voice verb phrases built on be/have/will auxiliaries.

use crate::Rule;

/// "is teaching"
pub fn rule_present_progressive() -> Rule {
    rule! {
        name: "active: present progressive",
        family: ACTIVE,
        arity: 2,
        pattern: [lemma!("be", "+indic+pres"), verb!("gerund+pres")],
        label: (Present, Progressive),
    }
}

/// "has been teaching"
pub fn rule_present_perfective_progressive() -> Rule {
    rule! {
        name: "active: present perfective progressive",
        family: ACTIVE,
        arity: 3,
        pattern: [lemma!("have", "+indic+pres"), lemma!("be", "+part+past"), verb!("gerund+pres")],
        label: (Present, PerfectiveProgressive),
    }
}

/// "has taught"
pub fn rule_present_perfective() -> Rule {
    rule! {
        name: "active: present perfective",
        family: ACTIVE,
        arity: 2,
        pattern: [lemma!("have", "+indic+pres"), verb!("part+past")],
        label: (Present, Perfective),
    }
}

/// "was teaching"
pub fn rule_past_progressive() -> Rule {
    rule! {
        name: "active: past progressive",
        family: ACTIVE,
        arity: 2,
        pattern: [lemma!("be", "+indic+past"), verb!("gerund+pres")],
        label: (Past, Progressive),
    }
}

/// "had taught"
pub fn rule_past_perfective() -> Rule {
    rule! {
        name: "active: past perfective",
        family: ACTIVE,
        arity: 2,
        pattern: [lemma!("have", "+indic+past"), verb!("part+past")],
        label: (Past, Perfective),
    }
}

/// "had been teaching"
pub fn rule_past_perfective_progressive() -> Rule {
    rule! {
        name: "active: past perfective progressive",
        family: ACTIVE,
        arity: 3,
        pattern: [lemma!("have", "+indic+past"), lemma!("be", "+part+past"), verb!("gerund+pres")],
        label: (Past, PerfectiveProgressive),
    }
}

/// "will teach" (infinitive reading)
pub fn rule_future_will_infinitive() -> Rule {
    rule! {
        name: "active: future (will + infinitive)",
        family: ACTIVE,
        arity: 2,
        pattern: [lemma!("will", "+indic+pres"), verb!("infin+pres")],
        label: (Future, None),
    }
}

/// "will teach" (present-indicative reading)
pub fn rule_future_will_present() -> Rule {
    rule! {
        name: "active: future (will + present)",
        family: ACTIVE,
        arity: 2,
        pattern: [lemma!("will", "+indic+pres"), verb!("indic+pres")],
        label: (Future, None),
    }
}

/// "is going to teach"
pub fn rule_future_going_to() -> Rule {
    rule! {
        name: "active: future (be going to)",
        family: ACTIVE,
        arity: 4,
        pattern: [
            lemma!("be", "+indic+pres"),
            lemma!("go", "+gerund+pres"),
            lemma!("to"),
            verb!("infin+pres"),
        ],
        label: (Future, None),
    }
}

/// "will be teaching"
pub fn rule_future_progressive_will() -> Rule {
    rule! {
        name: "active: future progressive (will)",
        family: ACTIVE,
        arity: 3,
        pattern: [lemma!("will", "+indic+pres"), lemma!("be", "+infin+pres"), verb!("gerund+pres")],
        label: (Future, Progressive),
    }
}

/// "is going to be teaching"
pub fn rule_future_progressive_going_to() -> Rule {
    rule! {
        name: "active: future progressive (be going to)",
        family: ACTIVE,
        arity: 5,
        pattern: [
            lemma!("be", "+indic+pres"),
            lemma!("go", "+gerund+pres"),
            lemma!("to"),
            lemma!("be", "infin+pres"),
            verb!("gerund+pres"),
        ],
        label: (Future, Progressive),
    }
}

/// "will have taught"
///
/// Labelled FUTURE/PROGRESSIVE as recorded.
pub fn rule_future_perfective() -> Rule {
    rule! {
        name: "active: future perfective",
        family: ACTIVE,
        arity: 3,
        pattern: [lemma!("will", "+indic+pres"), lemma!("have", "+infin+pres"), verb!("part+past")],
        label: (Future, Progressive),
    }
}

/// "will have been teaching"
pub fn rule_future_perfective_progressive() -> Rule {
    rule! {
        name: "active: future perfective progressive",
        family: ACTIVE,
        arity: 4,
        pattern: [
            lemma!("will", "+indic+pres"),
            lemma!("have", "+infin+pres"),
            lemma!("be", "part+past"),
            verb!("gerund+pres"),
        ],
        label: (Future, PerfectiveProgressive),
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_present_progressive(),
        rule_present_perfective_progressive(),
        rule_present_perfective(),
        rule_past_progressive(),
        rule_past_perfective(),
        rule_past_perfective_progressive(),
        rule_future_will_infinitive(),
        rule_future_will_present(),
        rule_future_going_to(),
        rule_future_progressive_will(),
        rule_future_progressive_going_to(),
        rule_future_perfective(),
        rule_future_perfective_progressive(),
    ]
}
