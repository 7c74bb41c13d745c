/// `lemma+…` anchored at the start of the tag-string.
#[macro_export]
macro_rules! lemma {
    ($lemma:literal) => {
        $crate::Condition::Prefix { head: concat!($lemma, "+"), tail: "" }
    };
    ($lemma:literal, $tail:literal) => {
        $crate::Condition::Prefix { head: concat!($lemma, "+"), tail: $tail }
    };
}

/// Raw anchored prefix with no `+` boundary (`stem!("to")` also accepts `today+adv`).
#[macro_export]
macro_rules! stem {
    ($head:literal) => {
        $crate::Condition::Prefix { head: $head, tail: "" }
    };
    ($head:literal, $tail:literal) => {
        $crate::Condition::Prefix { head: $head, tail: $tail }
    };
}

/// `lemma+…` anywhere in the tag-string.
#[macro_export]
macro_rules! infix {
    ($lemma:literal, $tail:literal) => {
        $crate::Condition::Infix { head: concat!($lemma, "+"), tail: $tail }
    };
}

/// Any lemma analysed as a verb, e.g. `verb!("gerund+pres")`.
#[macro_export]
macro_rules! verb {
    ($tail:literal) => {
        $crate::Condition::AnyLemma { category: "v", tail: $tail }
    };
}

#[macro_export]
macro_rules! marker {
    ($name:literal) => {
        $crate::Condition::Marker($name)
    };
}

#[macro_export]
macro_rules! feature {
    ($name:literal) => {
        $crate::Condition::Feature($name)
    };
}

/// Alternatives for one position, e.g. `either![lemma!("be", "+gerund+pres"), verb!("part+past")]`.
#[macro_export]
macro_rules! either {
    ($($cond:expr),+ $(,)?) => {
        $crate::Condition::Either(&[$($cond),+])
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        family: $family:ident,
        arity: $arity:expr,
        pattern: [ $($cond:expr),* $(,)? ],
        label: ($tense:ident, $aspect:ident)
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            family: $crate::RuleFamily::$family,
            arity: $arity,
            conditions: vec![ $($cond),* ],
            label: $crate::TenseAspect::new($crate::Tense::$tense, $crate::Aspect::$aspect),
        }
    }};
}
