//! Ingredient mention extraction from free-form recommendation text.
//!
//! The vocabulary is a closed, static list of display names. Extend it by
//! editing the list; there is no learned or database-backed mechanism.

/// Ingredient display names recognized in recommendation text.
///
/// More specific terms come first so the returned sequence leads with them
/// ("Creatine Monohydrate" before "Creatine"); both are still reported when
/// both appear as substrings.
pub const INGREDIENT_VOCABULARY: &[&str] = &[
    "Whey Protein",
    "Casein Protein",
    "Creatine Monohydrate",
    "Creatine",
    "BCAA",
    "Beta-Alanine",
    "Caffeine",
    "L-Carnitine",
    "Glutamine",
    "Taurine",
    "Citrulline Malate",
    "Arginine",
    "Vitamin D3",
    "Vitamin B12",
    "Vitamin C",
    "Omega-3",
    "Fish Oil",
    "Magnesium",
    "Zinc",
    "Ashwagandha",
    "Melatonin",
    "Leucine",
    "Isoleucine",
    "Valine",
    "Green Tea Extract",
    "Yohimbine",
    "Ephedrine",
    "Garcinia Cambogia",
];

/// Scan text for known ingredient names, case-insensitively.
///
/// Each vocabulary entry found as a substring anywhere in the text
/// contributes its display form exactly once, regardless of how many times
/// or in what case it occurs. Returns an empty list when nothing matches.
pub fn extract_ingredients(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();

    INGREDIENT_VOCABULARY
        .iter()
        .filter(|term| haystack.contains(&term.to_lowercase()))
        .map(|term| (*term).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_ingredients_case_insensitively() {
        let found = extract_ingredients("Contains WHEY PROTEIN and caffeine.");
        assert!(found.contains(&"Whey Protein".to_string()));
        assert!(found.contains(&"Caffeine".to_string()));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_no_ingredients_yields_empty() {
        assert!(extract_ingredients("no ingredients here").is_empty());
    }

    #[test]
    fn test_repeated_mentions_reported_once() {
        let found = extract_ingredients("Creatine in the morning, creatine at night, CREATINE always.");
        assert_eq!(found, vec!["Creatine".to_string()]);
    }

    #[test]
    fn test_specific_term_listed_before_general() {
        let found = extract_ingredients("Take 5g creatine monohydrate daily.");
        // The monohydrate entry matches, and so does the bare "Creatine".
        assert_eq!(
            found,
            vec!["Creatine Monohydrate".to_string(), "Creatine".to_string()]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_ingredients("").is_empty());
    }
}
