use crate::engine::{Catalogue, Resolver};
use crate::rules::{self, active, passive, simple};
use crate::{Aspect, Chunk, RuleFamily, Tense, TenseAspect};
use pretty_assertions::assert_eq;

/// Analyzer output for the handful of words the phrase tables use.
fn morphology(word: &str) -> &'static str {
    match word {
        "is" => "be+v+indic+pres+nil+3+sing",
        "was" => "be+v+indic+past+nil+13+sing",
        "be" => "be+v+infin+pres",
        "been" => "be+v+part+past",
        "being" => "be+v+gerund+pres",
        "has" => "have+v+indic+pres+nil+3+sing",
        "have" => "have+v+indic+pres+nil+nil+plur have+v+infin+pres",
        "had" => "have+v+indic+past have+v+part+past",
        "will" => "will+v+indic+pres will+n+sing",
        "would" => "would+v+indic+pres",
        "could" => "could+v+indic+pres",
        "should" => "should+v+indic+pres",
        "do" => "do+v+indic+pres+nil+nil+plur do+v+infin+pres",
        "did" => "do+v+indic+past",
        "going" => "go+v+gerund+pres",
        "to" => "to+prep",
        "teach" => "teach+v+indic+pres+nil+nil+plur teach+v+infin+pres",
        "teaching" => "teach+v+gerund+pres teaching+n+sing",
        "taught" => "teach+v+indic+past teach+v+part+past",
        "care" => "care+v+indic+pres+nil+nil+plur care+v+infin+pres care+n+sing",
        "release" => "release+v+indic+pres+nil+nil+plur release+v+infin+pres release+n+sing",
        "releasing" => "release+v+gerund+pres releasing+n+sing",
        "released" => "release+v+indic+past release+v+part+past",
        "run" => "run+v+indic+pres+nil+nil+plur run+v+infin+pres run+n+sing run+v+part+past",
        "running" => "run+v+gerund+pres running+n+sing running+adj+zero",
        "tried" => "try+v+indic+past try+v+part+past",
        "money" => "money+n+sing",
        "blue" => "blue+adj+zero blue+n+sing",
        "scared" => "scared+adj+zero scare+v+indic+past scare+v+part+past",
        "angry" => "angry+adj+zero",
        "glad" => "glad+adj+zero",
        "boy" => "boy+n+sing",
        "over" => "over+prep over+adv",
        "here" => "here+adv",
        other => panic!("no test morphology for '{other}'"),
    }
}

fn groups(phrase: &str) -> Vec<&'static str> {
    phrase.split_whitespace().map(morphology).collect()
}

fn label(phrase: &str) -> TenseAspect {
    crate::resolve(&groups(phrase))
}

fn ta(tense: Tense, aspect: Aspect) -> TenseAspect {
    TenseAspect::new(tense, aspect)
}

/// (rule name, phrase the rule accepts, phrase of the same length it rejects)
const RULE_EXAMPLES: &[(&str, &str, &str)] = &[
    ("active: present progressive", "is teaching", "was teaching"),
    ("active: present perfective progressive", "has been teaching", "had been teaching"),
    ("active: present perfective", "has taught", "had taught"),
    ("active: past progressive", "was teaching", "is teaching"),
    ("active: past perfective", "had taught", "has taught"),
    ("active: past perfective progressive", "had been teaching", "has been teaching"),
    ("active: future (will + infinitive)", "will teach", "would teach"),
    ("active: future (will + present)", "will teach", "would teach"),
    ("active: future (be going to)", "is going to teach", "was going to teach"),
    ("active: future progressive (will)", "will be teaching", "would be teaching"),
    ("active: future progressive (be going to)", "is going to be teaching", "was going to be teaching"),
    ("active: future perfective", "will have taught", "would have taught"),
    ("active: future perfective progressive", "will have been teaching", "would have been teaching"),
    ("passive: present", "is taught", "was taught"),
    ("passive: present progressive", "is being taught", "was being taught"),
    ("passive: present perfective", "have been taught", "had been taught"),
    ("passive: past", "was taught", "is taught"),
    ("passive: past progressive", "was being", "is being"),
    ("passive: past perfective", "had been taught", "has been taught"),
    ("passive: future (will)", "will be taught", "would be taught"),
    ("passive: future (be going to)", "is going to be taught", "was going to be taught"),
    ("passive: future perfective", "will have been taught", "would have been taught"),
    ("modal: present", "has to teach", "had to teach"),
    ("modal: present progressive", "has to be teaching", "had to be teaching"),
    ("modal: present perfective", "has to have taught", "had to have taught"),
    ("modal: present perfective progressive", "has to have been teaching", "had to have been teaching"),
    ("modal: past (have to)", "had to teach", "has to teach"),
    ("modal: past progressive", "had to be teaching", "has to be teaching"),
    ("modal: future", "will have to teach", "would have to teach"),
    ("modal: future progressive", "will have to be teaching", "would have to be teaching"),
    ("modal: none", "could teach", "will teach"),
    ("modal: none progressive", "could be teaching", "will be teaching"),
    ("modal: none perfective", "could have taught", "will have taught"),
    ("modal: none perfective progressive", "could have been teaching", "will have been teaching"),
    ("modal: past (modal + passive)", "could be taught", "will be taught"),
    ("do-support: past", "did care", "do care"),
    ("do-support: present", "do care", "did care"),
    ("infinitive", "to release", "to releasing"),
    ("infinitive (indicative reading)", "to release", "to released"),
    ("infinitive: progressive", "to be releasing", "to be released"),
    ("infinitive: perfective", "to have released", "to have money"),
    ("infinitive: perfective progressive", "to have been releasing", "to have been released"),
    ("simple: prespart", "releasing", "released"),
    ("simple: present", "release", "releasing"),
    ("simple: past", "released", "release"),
    ("simple: pastpart", "released", "release"),
    ("participle: been + gerund", "been running", "is running"),
    ("participle: been + participle", "been tried", "is tried"),
    ("simple: prespart (bare)", "running", "run"),
    ("adjective: present", "is blue", "was blue"),
    ("adjective: present progressive", "is being scared", "was being scared"),
    ("adjective: present perfective", "has been scared", "had been scared"),
    ("adjective: past", "was blue", "is blue"),
    ("adjective: past progressive", "was being scared", "is being scared"),
    ("adjective: past perfective", "had been scared", "have been scared"),
    ("adjective: future", "will be angry", "would be angry"),
    ("adjective: future perfective", "will have been glad", "would have been glad"),
    ("noun: present", "is boy", "was boy"),
    ("noun: present progressive", "is being boy", "was being boy"),
    ("noun: present perfective", "had been boy", "has been boy"),
    ("noun: past", "was boy", "is boy"),
    ("noun: past progressive", "was being boy", "is being boy"),
    ("noun: past perfective", "had been boy", "has been boy"),
    ("noun: future", "will be boy", "would be boy"),
    ("noun: future perfective", "will have been boy", "would have been boy"),
    ("preposition: present", "is over", "is here"),
    ("preposition: present progressive", "is being over", "was being over"),
    ("preposition: present perfective", "has been over", "had been over"),
    ("preposition: past", "was over", "being over"),
    ("preposition: past progressive", "was being over", "is being over"),
    ("preposition: past perfective", "had been over", "has been over"),
    ("preposition: future", "will be over", "would be over"),
    ("preposition: future perfective", "will have been over", "would have been over"),
];

#[test]
fn every_rule_has_examples() {
    let catalogue = crate::catalogue();
    let named: Vec<&str> = RULE_EXAMPLES.iter().map(|(name, _, _)| *name).collect();
    let authored: Vec<&str> = catalogue.rules().iter().map(|r| r.name).collect();
    assert_eq!(named, authored);
}

#[test]
fn rules_accept_their_positive_examples() {
    let catalogue = crate::catalogue();
    for (name, positive, _) in RULE_EXAMPLES {
        let (_, rule) = catalogue.rule_by_name(name).unwrap();
        let morph = groups(positive);
        assert_eq!(morph.len(), rule.arity, "example '{positive}' has the wrong length for '{name}'");
        assert!(rule.matches(&Chunk::new(&morph)), "rule '{name}' rejected '{positive}'");
    }
}

#[test]
fn rules_reject_their_negative_examples() {
    let catalogue = crate::catalogue();
    for (name, _, negative) in RULE_EXAMPLES {
        let (_, rule) = catalogue.rule_by_name(name).unwrap();
        let morph = groups(negative);
        assert_eq!(morph.len(), rule.arity, "example '{negative}' has the wrong length for '{name}'");
        assert!(!rule.matches(&Chunk::new(&morph)), "rule '{name}' accepted '{negative}'");
    }
}

#[test]
fn phrases_resolve_to_expected_labels() {
    use Aspect::{None as Simple, Perfective, PerfectiveProgressive, Progressive};

    let cases: Vec<(&str, TenseAspect)> = vec![
        ("is teaching", ta(Tense::Present, Progressive)),
        ("has been teaching", ta(Tense::Present, PerfectiveProgressive)),
        ("has taught", ta(Tense::Present, Perfective)),
        ("was teaching", ta(Tense::Past, Progressive)),
        ("had taught", ta(Tense::Past, Perfective)),
        ("had been teaching", ta(Tense::Past, PerfectiveProgressive)),
        ("will teach", ta(Tense::Future, Simple)),
        ("is going to teach", ta(Tense::Future, Simple)),
        ("will be teaching", ta(Tense::Future, Progressive)),
        ("is going to be teaching", ta(Tense::Future, Progressive)),
        ("will have been teaching", ta(Tense::Future, PerfectiveProgressive)),
        ("is taught", ta(Tense::Present, Simple)),
        ("is being taught", ta(Tense::Present, Progressive)),
        ("have been taught", ta(Tense::Present, Perfective)),
        ("was taught", ta(Tense::Past, Simple)),
        ("was being taught", TenseAspect::NONE),
        ("was being", ta(Tense::Past, Progressive)),
        ("had been taught", ta(Tense::Past, Perfective)),
        ("will be taught", ta(Tense::Future, Simple)),
        ("is going to be taught", ta(Tense::Future, Simple)),
        ("will have been taught", ta(Tense::Future, Perfective)),
        ("has to teach", ta(Tense::Present, Simple)),
        ("has to be teaching", ta(Tense::Present, Progressive)),
        ("has to have taught", ta(Tense::Present, Perfective)),
        ("has to have been teaching", ta(Tense::Present, PerfectiveProgressive)),
        ("had to teach", ta(Tense::Past, Simple)),
        ("had to be teaching", ta(Tense::Past, Progressive)),
        ("will have to teach", ta(Tense::Future, Simple)),
        ("will have to be teaching", ta(Tense::Future, Progressive)),
        ("could teach", ta(Tense::None, Simple)),
        ("could be teaching", ta(Tense::None, Progressive)),
        ("could have taught", ta(Tense::None, Perfective)),
        ("could be taught", ta(Tense::Past, Simple)),
        ("did care", ta(Tense::Past, Simple)),
        ("do care", ta(Tense::Present, Simple)),
        ("to release", ta(Tense::Infinitive, Simple)),
        ("to be releasing", ta(Tense::Infinitive, Progressive)),
        ("to have released", ta(Tense::Infinitive, Perfective)),
        ("to have been releasing", ta(Tense::Infinitive, PerfectiveProgressive)),
        ("releasing", ta(Tense::PresPart, Simple)),
        ("release", ta(Tense::Present, Simple)),
        ("released", ta(Tense::Past, Simple)),
        ("been running", ta(Tense::None, PerfectiveProgressive)),
        ("been tried", ta(Tense::None, Perfective)),
        ("is running", ta(Tense::Present, Progressive)),
        ("is scared", ta(Tense::Present, Simple)),
        ("is blue", ta(Tense::Present, Simple)),
        ("will be angry", ta(Tense::Future, Simple)),
        ("will have been glad", ta(Tense::Future, Perfective)),
        ("is boy", ta(Tense::Present, Simple)),
        ("was being boy", ta(Tense::Past, Progressive)),
        ("will have been boy", ta(Tense::Future, Perfective)),
        ("is over", ta(Tense::Present, Simple)),
        ("was being over", ta(Tense::Past, Progressive)),
    ];

    for (phrase, expected) in cases {
        assert_eq!(label(phrase), expected, "phrase '{phrase}'");
    }
}

#[test]
fn recorded_labels_are_kept_verbatim() {
    // Labels that differ from what the rule names suggest.
    assert_eq!(label("will have taught"), ta(Tense::Future, Aspect::Progressive));
    assert_eq!(label("could have been teaching"), ta(Tense::None, Aspect::Progressive));
    assert_eq!(label("had been boy"), ta(Tense::Present, Aspect::Perfective));
    assert_eq!(label("has been boy"), TenseAspect::NONE);
}

#[test]
fn duplicate_prespart_rule_is_never_selected() {
    let resolution = Resolver::new(crate::catalogue()).resolve_traced(&Chunk::new(&groups("running")));

    assert_eq!(resolution.label, ta(Tense::PresPart, Aspect::None));
    assert_eq!(resolution.matched.map(|m| m.name), Some("simple: prespart"));
    assert_eq!(resolution.attempts.len(), 1);
}

#[test]
fn modal_none_is_reported_by_name() {
    let resolution = Resolver::new(crate::catalogue()).resolve_traced(&Chunk::new(&groups("could teach")));
    assert_eq!(resolution.label, TenseAspect::NONE);
    assert_eq!(resolution.matched.map(|m| m.name), Some("modal: none"));
}

#[test]
fn literal_scenarios() {
    assert_eq!(crate::resolve(&["be+V+indic+pres"]), ta(Tense::Present, Aspect::None));
    assert_eq!(crate::resolve(&["have+V+indic+pres", "teach+V+part+past"]), ta(Tense::Present, Aspect::Perfective));
    assert_eq!(crate::resolve(&["will+V+indic+pres", "teach+V+indic+pres"]), ta(Tense::Future, Aspect::None));
    assert_eq!(crate::resolve(&["teach+V+gerund+pres"]), ta(Tense::PresPart, Aspect::None));
}

#[test]
fn unmatched_single_token_defaults_to_none() {
    // Without a bare-present rule nothing of arity one accepts an indicative present.
    let rules = vec![simple::rule_prespart(), simple::rule_past(), simple::rule_pastpart()];
    let catalogue = Catalogue::new(rules).unwrap();
    let chunk: Chunk = ["run+V+indic+pres"].into_iter().collect();
    assert_eq!(Resolver::new(&catalogue).resolve(&chunk), TenseAspect::NONE);

    assert_eq!(crate::resolve(&["run+V+indik+pres"]), TenseAspect::NONE);
    assert_eq!(crate::resolve(&["run+n+sing"]), TenseAspect::NONE);
}

#[test]
fn overlapping_rules_follow_catalogue_order() {
    let progressive = active::rule_present_perfective_progressive;
    let perfective = passive::rule_present_perfective;
    let chunk: Chunk = ["have+v+indic+pres", "be+v+part+past", "teach+v+gerund+pres teach+v+part+past"]
        .into_iter()
        .collect();

    let catalogue = Catalogue::new(vec![progressive(), perfective()]).unwrap();
    assert!(catalogue.rules().iter().all(|r| r.matches(&chunk)));
    assert_eq!(Resolver::new(&catalogue).resolve(&chunk), ta(Tense::Present, Aspect::PerfectiveProgressive));

    let swapped = Catalogue::new(vec![perfective(), progressive()]).unwrap();
    assert_eq!(Resolver::new(&swapped).resolve(&chunk), ta(Tense::Present, Aspect::Perfective));
}

#[test]
fn passive_past_progressive_takes_two_positions() {
    let resolver = Resolver::new(crate::catalogue());

    // Only the active progressive reads `+v+` gerunds; auxiliary tags fall through to the passive rule.
    let aux: Chunk = ["be+aux+indic+past", "be+aux+gerund+pres"].into_iter().collect();
    let resolution = resolver.resolve_traced(&aux);
    assert_eq!(resolution.label, ta(Tense::Past, Aspect::Progressive));
    assert_eq!(resolution.matched.map(|m| m.name), Some("passive: past progressive"));

    let (_, rule) = crate::catalogue().rule_by_name("passive: past progressive").unwrap();
    assert_eq!(rule.arity, 2);
    assert!(rule.matches(&Chunk::new(&groups("was taught"))));

    let three = groups("was being taught");
    assert_eq!(resolver.resolve(&Chunk::new(&three)), TenseAspect::NONE);
}

#[test]
fn input_case_is_ignored() {
    assert_eq!(crate::resolve(&["BE+V+INDIC+PRES", "Teach+V+Gerund+Pres"]), ta(Tense::Present, Aspect::Progressive));
}

#[test]
fn catalogue_shape() {
    let catalogue = crate::catalogue();

    assert_eq!(catalogue.len(), 73);
    assert_eq!(catalogue.max_arity(), 5);
    assert_eq!(catalogue.arities().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    let sizes: Vec<usize> = (1..=5).map(|n| catalogue.rules_with_arity(n).len()).collect();
    assert_eq!(sizes, vec![5, 22, 30, 12, 4]);

    let families = [
        (RuleFamily::ACTIVE, 13),
        (RuleFamily::PASSIVE, 9),
        (RuleFamily::MODAL, 13),
        (RuleFamily::DO_SUPPORT, 2),
        (RuleFamily::INFINITIVE, 5),
        (RuleFamily::SIMPLE, 5),
        (RuleFamily::PARTICIPLE, 2),
        (RuleFamily::ADJECTIVE, 8),
        (RuleFamily::NOUN, 8),
        (RuleFamily::PREPOSITION, 8),
    ];
    for (family, count) in families {
        assert_eq!(catalogue.rules_in_families(family).len(), count, "{family:?}");
    }
}

#[test]
fn rebuilt_catalogue_resolves_identically() {
    let rebuilt = Catalogue::new(rules::get()).unwrap();
    let fresh = Resolver::new(&rebuilt);
    let shared = Resolver::new(crate::catalogue());

    for (_, positive, negative) in RULE_EXAMPLES {
        for phrase in [positive, negative] {
            let morph = groups(phrase);
            let chunk = Chunk::new(&morph);
            assert_eq!(fresh.resolve_traced(&chunk), shared.resolve_traced(&chunk), "phrase '{phrase}'");
        }
    }
}

#[test]
fn traces_only_visit_the_chunk_arity() {
    let resolver = Resolver::new(crate::catalogue());
    for (_, positive, _) in RULE_EXAMPLES {
        let morph = groups(positive);
        let resolution = resolver.resolve_traced(&Chunk::new(&morph));
        for attempt in &resolution.attempts {
            let arity = crate::catalogue().rule(attempt.id).map(|r| r.arity);
            assert_eq!(arity, Some(morph.len()), "phrase '{positive}'");
        }
        assert!(resolution.matched.is_some(), "phrase '{positive}' matched nothing");
    }
}
