//! Known-species table and wound keyword set.
//!
//! Catalog order is a behavioral contract: labels are matched by scanning
//! the table first to last and the first contained id wins, so more
//! specific ids must be declared before the generic ones that would
//! otherwise shadow them ("king cobra" before "cobra"). The vocabulary
//! follows the label set of the upstream image model.

/// One row of the species table
#[derive(Clone, Copy, Debug)]
pub struct SpeciesEntry {
    /// Lowercase substring key matched against classifier labels
    pub id: &'static str,
    pub display_name: &'static str,
    pub venomous: bool,
    /// Guidance shown verbatim on the result panel
    pub action: &'static str,
}

const VENOMOUS_ACTION: &str = "Venomous snake detected. Seek immediate medical help!";
const NON_VENOMOUS_ACTION: &str = "Non-venomous. Keep distance and do not handle.";

const fn species(
    id: &'static str,
    display_name: &'static str,
    venomous: bool,
    action: &'static str,
) -> SpeciesEntry {
    SpeciesEntry {
        id,
        display_name,
        venomous,
        action,
    }
}

const CATALOG: &[SpeciesEntry] = &[
    // Venomous, specific ids first
    species("indian cobra", "Indian Cobra", true, VENOMOUS_ACTION),
    species("king cobra", "King Cobra", true, VENOMOUS_ACTION),
    species("cobra", "Cobra", true, VENOMOUS_ACTION),
    species("green mamba", "Green Mamba", true, VENOMOUS_ACTION),
    species("mamba", "Mamba", true, VENOMOUS_ACTION),
    species("horned viper", "Horned Viper", true, VENOMOUS_ACTION),
    species("viper", "Viper", true, VENOMOUS_ACTION),
    species("diamondback", "Diamondback Rattlesnake", true, VENOMOUS_ACTION),
    species("sidewinder", "Sidewinder", true, VENOMOUS_ACTION),
    species("rattlesnake", "Rattlesnake", true, VENOMOUS_ACTION),
    species("copperhead", "Copperhead", true, VENOMOUS_ACTION),
    species("coral snake", "Coral Snake", true, VENOMOUS_ACTION),
    species("krait", "Krait", true, VENOMOUS_ACTION),
    species("sea snake", "Sea Snake", true, VENOMOUS_ACTION),
    species("boomslang", "Boomslang", true, VENOMOUS_ACTION),
    // Non-venomous
    species("rat snake", "Rat Snake", false, NON_VENOMOUS_ACTION),
    species("king snake", "King Snake", false, NON_VENOMOUS_ACTION),
    species("garter snake", "Garter Snake", false, NON_VENOMOUS_ACTION),
    species("water snake", "Water Snake", false, NON_VENOMOUS_ACTION),
    species("vine snake", "Vine Snake", false, NON_VENOMOUS_ACTION),
    species("green snake", "Green Snake", false, NON_VENOMOUS_ACTION),
    species("ringneck snake", "Ringneck Snake", false, NON_VENOMOUS_ACTION),
    species("hognose snake", "Hognose Snake", false, NON_VENOMOUS_ACTION),
    species("night snake", "Night Snake", false, NON_VENOMOUS_ACTION),
    species("thunder snake", "Thunder Snake", false, NON_VENOMOUS_ACTION),
    species("boa constrictor", "Boa Constrictor", false, NON_VENOMOUS_ACTION),
    species("boa", "Boa", false, NON_VENOMOUS_ACTION),
    species("rock python", "Rock Python", false, NON_VENOMOUS_ACTION),
    species("python", "Python", false, NON_VENOMOUS_ACTION),
    species("anaconda", "Anaconda", false, NON_VENOMOUS_ACTION),
];

/// Substrings that indicate a wound or dressing when no species matched
const WOUND_KEYWORDS: &[&str] = &[
    "puncture",
    "bandage",
    "band aid",
    "gauze",
    "wound",
    "scratch",
    "lesion",
    "skin",
    "spot",
];

/// The species table, in match-precedence order
pub fn catalog() -> &'static [SpeciesEntry] {
    CATALOG
}

/// The wound keyword set
pub fn wound_keywords() -> &'static [&'static str] {
    WOUND_KEYWORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in catalog() {
            assert_eq!(entry.id, entry.id.to_lowercase(), "id {:?}", entry.id);
            assert!(seen.insert(entry.id), "duplicate id {:?}", entry.id);
        }
    }

    #[test]
    fn test_specific_ids_precede_the_ids_they_shadow() {
        // If entry A's id contains entry B's id, declaring B first would
        // make A unreachable.
        let entries = catalog();
        for (i, outer) in entries.iter().enumerate() {
            for (j, inner) in entries.iter().enumerate() {
                if i != j && outer.id.contains(inner.id) {
                    assert!(
                        i < j,
                        "{:?} is shadowed by earlier {:?}",
                        outer.id,
                        inner.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for keyword in wound_keywords() {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }
}
