//! `to`-infinitives. "to" is analysed as a preposition by the morphology, so
//! the marker is matched by lemma only.

use crate::Rule;

/// "to release"
pub fn rule_bare() -> Rule {
    rule! {
        name: "infinitive",
        family: INFINITIVE,
        arity: 2,
        pattern: [lemma!("to"), verb!("infin+pres")],
        label: (Infinitive, None),
    }
}

/// "to release", when the analyzer only offers an indicative reading.
pub fn rule_indicative_reading() -> Rule {
    rule! {
        name: "infinitive (indicative reading)",
        family: INFINITIVE,
        arity: 2,
        pattern: [lemma!("to"), verb!("indic+pres")],
        label: (Infinitive, None),
    }
}

/// "to be releasing"
pub fn rule_progressive() -> Rule {
    rule! {
        name: "infinitive: progressive",
        family: INFINITIVE,
        arity: 3,
        pattern: [lemma!("to"), lemma!("be", "+infin+pres"), verb!("gerund+pres")],
        label: (Infinitive, Progressive),
    }
}

/// "to have released"
pub fn rule_perfective() -> Rule {
    rule! {
        name: "infinitive: perfective",
        family: INFINITIVE,
        arity: 3,
        pattern: [lemma!("to"), lemma!("have", "+infin+pres"), verb!("part+past")],
        label: (Infinitive, Perfective),
    }
}

/// "to have been releasing"
pub fn rule_perfective_progressive() -> Rule {
    rule! {
        name: "infinitive: perfective progressive",
        family: INFINITIVE,
        arity: 4,
        pattern: [
            lemma!("to"),
            lemma!("have", "+infin+pres"),
            lemma!("be", "+part+past"),
            verb!("gerund+pres"),
        ],
        label: (Infinitive, PerfectiveProgressive),
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_bare(),
        rule_indicative_reading(),
        rule_progressive(),
        rule_perfective(),
        rule_perfective_progressive(),
    ]
}
