//! Lexical matching of classifier labels against the catalog.
//!
//! Matching is substring containment over the lowercased label, with no
//! tokenization: "viper" matches inside "pit-viper-snake" and inside
//! unrelated compound words alike. That looseness is a known property of
//! the upstream label vocabulary and is kept as-is.

use super::catalog::{self, SpeciesEntry};

/// First catalog entry whose id is contained in the label, scanning the
/// table in declared order. Pure and total; unmatched labels yield None.
pub fn match_species(label: &str) -> Option<&'static SpeciesEntry> {
    let lower = label.to_lowercase();
    catalog::catalog()
        .iter()
        .find(|entry| lower.contains(entry.id))
}

/// True iff any wound keyword is contained in the label
pub fn match_wound(label: &str) -> bool {
    let lower = label.to_lowercase();
    catalog::wound_keywords()
        .iter()
        .any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_containment() {
        let entry = match_species("Indian Cobra").unwrap();
        assert_eq!(entry.display_name, "Indian Cobra");
        assert!(entry.venomous);

        let entry = match_species("INDIAN RAT SNAKE").unwrap();
        assert_eq!(entry.display_name, "Rat Snake");
        assert!(!entry.venomous);
    }

    #[test]
    fn test_compound_words_match() {
        // No tokenization: containment is enough
        let entry = match_species("pit-viper-snake").unwrap();
        assert_eq!(entry.display_name, "Viper");
    }

    #[test]
    fn test_declared_order_wins() {
        // "king cobra" is declared before the generic "cobra" entry
        let entry = match_species("king cobra, Ophiophagus hannah").unwrap();
        assert_eq!(entry.display_name, "King Cobra");
    }

    #[test]
    fn test_unmatched_label_is_none() {
        assert!(match_species("coffee mug").is_none());
        assert!(match_species("").is_none());
    }

    #[test]
    fn test_wound_keywords() {
        assert!(match_wound("wound with puncture marks"));
        assert!(match_wound("Band Aid"));
        assert!(match_wound("skin texture"));
        assert!(!match_wound("random texture"));
    }

    #[test]
    fn test_matchers_are_deterministic() {
        for _ in 0..3 {
            let a = match_species("sidewinder").map(|e| e.id);
            assert_eq!(a, Some("sidewinder"));
            assert!(match_wound("gauze pad"));
        }
    }
}
