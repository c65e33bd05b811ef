//! Ingredient name normalization.
//!
//! Collapses surface-form variants of supplement ingredient names onto a
//! single canonical lookup key. The alias table is an ordered cascade:
//! rules are tried top to bottom and the first match wins, so an input
//! mentioning several known ingredients is keyed by the earliest rule.

/// How a matched rule rewrites the input.
enum Rewrite {
    /// Replace the whole input with a fixed canonical key.
    Fixed(&'static str),
    /// Collapse whitespace runs to hyphens and pin a leading "l"/"l-"
    /// prefix to "l-" (carnitine family).
    Hyphenate,
}

/// One alias group: substring triggers, whole-string triggers, rewrite.
struct AliasRule {
    contains: &'static [&'static str],
    equals: &'static [&'static str],
    rewrite: Rewrite,
}

/// Ordered alias cascade; the first matching rule decides.
const ALIAS_RULES: &[AliasRule] = &[
    AliasRule {
        contains: &["whey protein"],
        equals: &[],
        rewrite: Rewrite::Fixed("whey protein"),
    },
    AliasRule {
        contains: &["creatine monohydrate"],
        equals: &["creatine"],
        rewrite: Rewrite::Fixed("creatine monohydrate"),
    },
    AliasRule {
        contains: &["branched-chain amino acid"],
        equals: &["bcaa"],
        rewrite: Rewrite::Fixed("bcaa"),
    },
    AliasRule {
        contains: &["carnitine"],
        equals: &[],
        rewrite: Rewrite::Hyphenate,
    },
    AliasRule {
        contains: &["glutamine"],
        equals: &[],
        rewrite: Rewrite::Fixed("glutamine"),
    },
    AliasRule {
        contains: &["vitamin d3", "vitamin d"],
        equals: &[],
        rewrite: Rewrite::Fixed("vitamin d3"),
    },
    AliasRule {
        contains: &["vitamin b12", "cobalamin"],
        equals: &[],
        rewrite: Rewrite::Fixed("vitamin b12"),
    },
    AliasRule {
        contains: &["beta alanine", "beta-alanine"],
        equals: &[],
        rewrite: Rewrite::Fixed("beta-alanine"),
    },
    AliasRule {
        contains: &["omega-3", "omega 3"],
        equals: &[],
        rewrite: Rewrite::Fixed("omega-3"),
    },
    AliasRule {
        contains: &["eicosapentaenoic"],
        equals: &["epa"],
        rewrite: Rewrite::Fixed("eicosapentaenoic acid"),
    },
    AliasRule {
        contains: &["docosahexaenoic"],
        equals: &["dha"],
        rewrite: Rewrite::Fixed("docosahexaenoic acid"),
    },
    AliasRule {
        contains: &[],
        equals: &["leucine", "l-leucine"],
        rewrite: Rewrite::Fixed("leucine"),
    },
    AliasRule {
        contains: &[],
        equals: &["isoleucine", "l-isoleucine"],
        rewrite: Rewrite::Fixed("isoleucine"),
    },
    AliasRule {
        contains: &[],
        equals: &["valine", "l-valine"],
        rewrite: Rewrite::Fixed("valine"),
    },
];

/// Canonicalize a raw ingredient name into its lookup key.
///
/// Total and pure: lowercases and trims the input, applies the first
/// matching alias rule, and falls through to the lowercased input when no
/// rule matches. Idempotent for every key the table can produce.
pub fn normalize(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    for rule in ALIAS_RULES {
        let hit = rule.contains.iter().any(|t| lower.contains(t))
            || rule.equals.iter().any(|t| lower == *t);
        if hit {
            return match rule.rewrite {
                Rewrite::Fixed(canonical) => canonical.to_string(),
                Rewrite::Hyphenate => hyphenate(&lower),
            };
        }
    }

    lower
}

/// Carnitine-family transform: whitespace runs become hyphens, and a
/// leading "l" or "l-" is rewritten to "l-". Inputs without the prefix
/// (plain "carnitine") are left unprefixed.
fn hyphenate(lower: &str) -> String {
    let joined = lower.split_whitespace().collect::<Vec<_>>().join("-");

    if let Some(rest) = joined.strip_prefix("l-") {
        format!("l-{rest}")
    } else if let Some(rest) = joined.strip_prefix('l') {
        format!("l-{rest}")
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  Whey Protein Isolate  "), "whey protein");
        assert_eq!(normalize("Ashwagandha Extract"), "ashwagandha extract");
    }

    #[test]
    fn test_creatine_aliases_collapse() {
        assert_eq!(normalize("Creatine"), "creatine monohydrate");
        assert_eq!(normalize("Creatine Monohydrate"), "creatine monohydrate");
        assert_eq!(normalize("Micronized Creatine Monohydrate"), "creatine monohydrate");
        // "creatine hcl" matches neither trigger and passes through.
        assert_eq!(normalize("Creatine HCL"), "creatine hcl");
    }

    #[test]
    fn test_bcaa_aliases() {
        assert_eq!(normalize("BCAA"), "bcaa");
        assert_eq!(normalize("Branched-Chain Amino Acids"), "bcaa");
    }

    #[test]
    fn test_vitamin_rules() {
        assert_eq!(normalize("Vitamin D"), "vitamin d3");
        assert_eq!(normalize("Vitamin D3"), "vitamin d3");
        assert_eq!(normalize("Methylcobalamin"), "vitamin b12");
        assert_eq!(normalize("Vitamin B12"), "vitamin b12");
    }

    #[test]
    fn test_beta_alanine_and_omega() {
        assert_eq!(normalize("Beta Alanine"), "beta-alanine");
        assert_eq!(normalize("beta-alanine"), "beta-alanine");
        assert_eq!(normalize("Omega 3 Fish Oil"), "omega-3");
        assert_eq!(normalize("omega-3"), "omega-3");
    }

    #[test]
    fn test_fatty_acid_abbreviations() {
        assert_eq!(normalize("EPA"), "eicosapentaenoic acid");
        assert_eq!(normalize("Eicosapentaenoic Acid"), "eicosapentaenoic acid");
        assert_eq!(normalize("DHA"), "docosahexaenoic acid");
        // Abbreviations only collapse on whole-string equality.
        assert_eq!(normalize("DHA blend"), "dha blend");
    }

    #[test]
    fn test_amino_acid_equality_rules() {
        assert_eq!(normalize("Leucine"), "leucine");
        assert_eq!(normalize("L-Leucine"), "leucine");
        assert_eq!(normalize("L-Isoleucine"), "isoleucine");
        assert_eq!(normalize("l-valine"), "valine");
        // "isoleucine" must not be captured by the leucine rule.
        assert_eq!(normalize("Isoleucine"), "isoleucine");
    }

    #[test]
    fn test_carnitine_hyphenation() {
        assert_eq!(normalize("L-Carnitine"), "l-carnitine");
        assert_eq!(normalize("L Carnitine"), "l-carnitine");
        assert_eq!(normalize("LCarnitine"), "l-carnitine");
        assert_eq!(normalize("Acetyl L-Carnitine"), "acetyl-l-carnitine");
        assert_eq!(normalize("carnitine"), "carnitine");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Mentions both whey protein and creatine; the earlier rule decides.
        assert_eq!(normalize("Whey Protein with Creatine Monohydrate"), "whey protein");
        // "vitamin d" trigger fires before the b12 rule is reached.
        assert_eq!(normalize("vitamin d and vitamin b12"), "vitamin d3");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "Whey Protein Isolate",
            "Creatine",
            "BCAA",
            "L Carnitine",
            "Acetyl L-Carnitine",
            "Glutamine Powder",
            "Vitamin D",
            "Cobalamin",
            "Beta Alanine",
            "Omega 3",
            "EPA",
            "DHA",
            "L-Leucine",
            "L-Isoleucine",
            "L-Valine",
            "Totally Unknown Ingredient",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
