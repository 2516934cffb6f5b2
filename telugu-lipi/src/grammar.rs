//! Ordered grammatical suffix rules
//!
//! Each rule rewrites one Telugu verb or case suffix into an English frame
//! around the captured stem. The rules are applied as a single left-to-right
//! reduction in the declared order, and the order is load-bearing: a longer
//! suffix must be consumed before any shorter suffix that is a substring of
//! it ("తున్నాను" before "తాను" before "ాను", and the terminative "వరకు"
//! before the dative "కు" it ends with).

use regex::Regex;

/// A single suffix rewrite: anchored pattern plus a `${1}` stem template.
#[derive(Debug, Clone)]
pub struct GrammarRule {
    name: &'static str,
    pattern: Regex,
    template: &'static str,
}

impl GrammarRule {
    fn new(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            // Patterns are compile-time constants
            pattern: Regex::new(pattern).unwrap(),
            template,
        }
    }

    /// Short tag identifying the rule in logs and tests.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rewrite all occurrences of this suffix in the text.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.template).into_owned()
    }
}

/// The Telugu suffix rules in their fixed application order.
///
/// Verb suffixes capture a mandatory stem; postposition rules accept an
/// empty stem so that a postposition written as a separate word ("హైదరాబాద్
/// లో") still collapses to the bare preposition.
pub fn suffix_rules() -> Vec<GrammarRule> {
    vec![
        GrammarRule::new("present-continuous", r"(\w+)తున్నాను\b", "I am ${1}ing"),
        GrammarRule::new("habitual", r"(\w+)తాను\b", "I ${1}"),
        GrammarRule::new("past", r"(\w+)ాను\b", "I ${1}ed"),
        GrammarRule::new("terminative", r"(\w*)వరకు\b", "until ${1}"),
        GrammarRule::new("ablative", r"(\w*)నుండి\b", "from ${1}"),
        GrammarRule::new("locative", r"(\w*)లో\b", "in ${1}"),
        GrammarRule::new("dative", r"(\w*)కు\b", "to ${1}"),
        GrammarRule::new("comitative", r"(\w*)తో\b", "with ${1}"),
    ]
}

/// Apply every rule once, in order, over the whole text.
pub fn apply_all(rules: &[GrammarRule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> GrammarRule {
        suffix_rules()
            .into_iter()
            .find(|r| r.name() == name)
            .expect("rule exists")
    }

    // ========== Per-Rule Isolation Tests ==========

    #[test]
    fn test_present_continuous_rule() {
        let r = rule("present-continuous");
        assert_eq!(r.apply("ఆడుతున్నాను"), "I am ఆడుing");
    }

    #[test]
    fn test_habitual_rule() {
        let r = rule("habitual");
        assert_eq!(r.apply("రాస్తాను"), "I రాస్");
    }

    #[test]
    fn test_past_rule() {
        let r = rule("past");
        assert_eq!(r.apply("ఆడేశాను"), "I ఆడేశed");
    }

    #[test]
    fn test_locative_attached_and_free() {
        let r = rule("locative");
        assert_eq!(r.apply("హైదరాబాద్లో"), "in హైదరాబాద్");
        // Standalone postposition collapses to the bare preposition plus a
        // trailing stem slot; the translator's whitespace pass cleans it.
        assert_eq!(r.apply("లో"), "in ");
    }

    #[test]
    fn test_dative_rule() {
        let r = rule("dative");
        assert_eq!(r.apply("అక్కడకు"), "to అక్కడ");
    }

    #[test]
    fn test_comitative_rule() {
        let r = rule("comitative");
        assert_eq!(r.apply("స్నేహితులతో"), "with స్నేహితుల");
    }

    #[test]
    fn test_no_match_inside_longer_word() {
        // "లోపల" carries the locative letters mid-word; the boundary anchor
        // must keep the rule away from it.
        let r = rule("locative");
        assert_eq!(r.apply("లోపల"), "లోపల");
    }

    // ========== Rule-Order Interaction Tests ==========

    #[test]
    fn test_rules_are_declared_longest_suffix_first() {
        let names: Vec<&str> = suffix_rules().iter().map(|r| r.name()).collect();
        let cont = names.iter().position(|&n| n == "present-continuous").unwrap();
        let habitual = names.iter().position(|&n| n == "habitual").unwrap();
        let past = names.iter().position(|&n| n == "past").unwrap();
        let terminative = names.iter().position(|&n| n == "terminative").unwrap();
        let dative = names.iter().position(|&n| n == "dative").unwrap();
        assert!(cont < habitual && habitual < past);
        assert!(terminative < dative);
    }

    #[test]
    fn test_present_continuous_not_shadowed_by_habitual() {
        let rules = suffix_rules();
        // "తున్నాను" ends with both "ాను" and "ను"; only the first rule may
        // consume it.
        assert_eq!(apply_all(&rules, "ఆడుతున్నాను"), "I am ఆడుing");
    }

    #[test]
    fn test_terminative_not_shadowed_by_dative() {
        let rules = suffix_rules();
        // "వరకు" ends with "కు"; a misordered dative rule would emit "to వర".
        let out = apply_all(&rules, "సాయంత్రం వరకు");
        assert!(out.contains("until"), "got: {}", out);
        assert!(!out.contains("to వర"), "got: {}", out);
    }

    #[test]
    fn test_habitual_before_past() {
        let rules = suffix_rules();
        // "తాను" also ends in "ాను"; the habitual rule must win.
        assert_eq!(apply_all(&rules, "రాస్తాను"), "I రాస్");
    }

    #[test]
    fn test_apply_all_leaves_english_untouched() {
        let rules = suffix_rules();
        let text = "I go to school every day.";
        assert_eq!(apply_all(&rules, text), text);
    }
}
