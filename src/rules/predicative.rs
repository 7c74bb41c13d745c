//! Copular predicates: a be/have/will auxiliary chain followed by an
//! adjective, noun or preposition instead of a main verb.

use crate::Rule;

/// Adjective complements: "is blue", "will have been glad".
pub fn adjective() -> Vec<Rule> {
    vec![
        rule! {
            name: "adjective: present",
            family: ADJECTIVE,
            arity: 2,
            pattern: [lemma!("be", "+indic+pres"), marker!("adj")],
            label: (Present, None),
        },
        rule! {
            name: "adjective: present progressive",
            family: ADJECTIVE,
            arity: 3,
            pattern: [lemma!("be", "+indic+pres"), lemma!("be", "+gerund+pres"), marker!("adj")],
            label: (Present, Progressive),
        },
        rule! {
            name: "adjective: present perfective",
            family: ADJECTIVE,
            arity: 3,
            pattern: [lemma!("have", "+indic+pres"), lemma!("be", "+part+past"), marker!("adj")],
            label: (Present, Perfective),
        },
        rule! {
            name: "adjective: past",
            family: ADJECTIVE,
            arity: 2,
            pattern: [lemma!("be", "+indic+past"), marker!("adj")],
            label: (Past, None),
        },
        rule! {
            name: "adjective: past progressive",
            family: ADJECTIVE,
            arity: 3,
            pattern: [lemma!("be", "+indic+past"), lemma!("be", "+gerund+pres"), marker!("adj")],
            label: (Past, Progressive),
        },
        rule! {
            name: "adjective: past perfective",
            family: ADJECTIVE,
            arity: 3,
            pattern: [lemma!("have", "+indic+past"), lemma!("be", "+part+past"), marker!("adj")],
            label: (Past, Perfective),
        },
        rule! {
            name: "adjective: future",
            family: ADJECTIVE,
            arity: 3,
            pattern: [lemma!("will", "+indic+pres"), lemma!("be", "+infin+pres"), marker!("adj")],
            label: (Future, None),
        },
        rule! {
            name: "adjective: future perfective",
            family: ADJECTIVE,
            arity: 4,
            // The second auxiliary is not anchored.
            pattern: [
                lemma!("will", "+indic+pres"),
                infix!("have", "+infin+pres"),
                lemma!("be", "+part+past"),
                marker!("adj"),
            ],
            label: (Future, Perfective),
        },
    ]
}

/// Noun complements: "is boy", "was being boy".
///
/// The perfective rules key on different `have` readings than their
/// adjective counterparts: "had been boy" is PRESENT/PERFECTIVE and the
/// future perfective expects an indicative `have`.
pub fn noun() -> Vec<Rule> {
    vec![
        rule! {
            name: "noun: present",
            family: NOUN,
            arity: 2,
            pattern: [lemma!("be", "+indic+pres"), feature!("n")],
            label: (Present, None),
        },
        rule! {
            name: "noun: present progressive",
            family: NOUN,
            arity: 3,
            pattern: [lemma!("be", "+indic+pres"), lemma!("be", "+gerund+pres"), feature!("n")],
            label: (Present, Progressive),
        },
        rule! {
            name: "noun: present perfective",
            family: NOUN,
            arity: 3,
            pattern: [lemma!("have", "+indic+past"), lemma!("be", "+part+past"), feature!("n")],
            label: (Present, Perfective),
        },
        rule! {
            name: "noun: past",
            family: NOUN,
            arity: 2,
            pattern: [lemma!("be", "+indic+past"), feature!("n")],
            label: (Past, None),
        },
        rule! {
            name: "noun: past progressive",
            family: NOUN,
            arity: 3,
            pattern: [lemma!("be", "+indic+past"), lemma!("be", "+gerund+pres"), feature!("n")],
            label: (Past, Progressive),
        },
        rule! {
            name: "noun: past perfective",
            family: NOUN,
            arity: 3,
            pattern: [lemma!("have", "+indic+past"), lemma!("be", "+part+past"), feature!("n")],
            label: (Past, Perfective),
        },
        rule! {
            name: "noun: future",
            family: NOUN,
            arity: 3,
            pattern: [lemma!("will", "+indic+pres"), lemma!("be", "+infin+pres"), feature!("n")],
            label: (Future, None),
        },
        rule! {
            name: "noun: future perfective",
            family: NOUN,
            arity: 4,
            pattern: [
                lemma!("will", "+indic+pres"),
                lemma!("have", "+indic+pres"),
                lemma!("be", "+part+past"),
                feature!("n"),
            ],
            label: (Future, Perfective),
        },
    ]
}

/// Prepositional complements: "is over".
pub fn preposition() -> Vec<Rule> {
    vec![
        rule! {
            name: "preposition: present",
            family: PREPOSITION,
            arity: 2,
            pattern: [lemma!("be", "+indic+pres"), feature!("prep")],
            label: (Present, None),
        },
        rule! {
            name: "preposition: present progressive",
            family: PREPOSITION,
            arity: 3,
            pattern: [lemma!("be", "+indic+pres"), lemma!("be", "+gerund+pres"), feature!("prep")],
            label: (Present, Progressive),
        },
        rule! {
            name: "preposition: present perfective",
            family: PREPOSITION,
            arity: 3,
            pattern: [lemma!("have", "+indic+pres"), lemma!("be", "+part+past"), feature!("prep")],
            label: (Present, Perfective),
        },
        rule! {
            name: "preposition: past",
            family: PREPOSITION,
            arity: 2,
            pattern: [lemma!("be", "+indic+past"), feature!("prep")],
            label: (Past, None),
        },
        rule! {
            name: "preposition: past progressive",
            family: PREPOSITION,
            arity: 3,
            pattern: [lemma!("be", "+indic+past"), lemma!("be", "+gerund+pres"), feature!("prep")],
            label: (Past, Progressive),
        },
        rule! {
            name: "preposition: past perfective",
            family: PREPOSITION,
            arity: 3,
            pattern: [lemma!("have", "+indic+past"), lemma!("be", "+part+past"), feature!("prep")],
            label: (Past, Perfective),
        },
        rule! {
            name: "preposition: future",
            family: PREPOSITION,
            arity: 3,
            pattern: [lemma!("will", "+indic+pres"), lemma!("be", "+infin+pres"), feature!("prep")],
            label: (Future, None),
        },
        rule! {
            name: "preposition: future perfective",
            family: PREPOSITION,
            arity: 4,
            pattern: [
                lemma!("will", "+indic+pres"),
                lemma!("have", "+infin+pres"),
                lemma!("be", "+part+past"),
                feature!("prep"),
            ],
            label: (Future, Perfective),
        },
    ]
}
