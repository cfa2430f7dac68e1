use super::iupac;
use crate::core::models::sequence::{ConcreteSequence, Sequence};
use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_EXPANSION_CAP: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("degenerate expansion yields {variants} variants, exceeding the cap of {cap}")]
pub struct ComplexityExceeded {
    /// Saturates at `u64::MAX`.
    pub variants: u64,
    pub cap: usize,
}

/// Number of concrete sequences `seq` stands for, saturating at `u64::MAX`.
pub fn variant_count(seq: &Sequence) -> u64 {
    seq.as_str()
        .chars()
        .filter_map(iupac::bases_for)
        .try_fold(1u64, |acc, bases| acc.checked_mul(bases.len() as u64))
        .unwrap_or(u64::MAX)
}

/// Expands every degenerate position of `seq` into its IUPAC base set.
///
/// The result is the full Cartesian product in lexicographic order. A non-degenerate input
/// yields exactly one element equal to itself. The size is checked against `cap` before any
/// variant is materialized.
pub fn expand(seq: &Sequence, cap: usize) -> Result<Vec<ConcreteSequence>, ComplexityExceeded> {
    let count = variant_count(seq);
    if count > cap as u64 {
        return Err(ComplexityExceeded {
            variants: count,
            cap,
        });
    }

    if count == 1 {
        return Ok(vec![ConcreteSequence::new_unchecked(
            seq.as_str().to_string(),
        )]);
    }

    let choices: Vec<&'static str> = seq.as_str().chars().filter_map(iupac::bases_for).collect();
    debug_assert_eq!(choices.len(), seq.len());

    let variants = choices
        .iter()
        .map(|bases| bases.chars())
        .multi_cartesian_product()
        .map(|bases| ConcreteSequence::new_unchecked(bases.into_iter().collect()))
        .collect();
    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::validator::validate;

    fn expand_str(raw: &str, cap: usize) -> Result<Vec<String>, ComplexityExceeded> {
        let seq = validate(raw).unwrap();
        expand(&seq, cap).map(|v| v.iter().map(|c| c.as_str().to_string()).collect())
    }

    #[test]
    fn non_degenerate_sequence_expands_to_itself() {
        for raw in ["A", "ACGT", "ATGCGTACGTAGC"] {
            assert_eq!(expand_str(raw, DEFAULT_EXPANSION_CAP).unwrap(), vec![raw]);
        }
    }

    #[test]
    fn expansion_is_cartesian_product_in_lexicographic_order() {
        assert_eq!(
            expand_str("RY", DEFAULT_EXPANSION_CAP).unwrap(),
            vec!["AC", "AT", "GC", "GT"]
        );
        assert_eq!(
            expand_str("NA", DEFAULT_EXPANSION_CAP).unwrap(),
            vec!["AA", "CA", "GA", "TA"]
        );
    }

    #[test]
    fn expansion_is_deterministic_and_contains_only_standard_bases() {
        let first = expand_str("ACNGTRB", DEFAULT_EXPANSION_CAP).unwrap();
        let second = expand_str("ACNGTRB", DEFAULT_EXPANSION_CAP).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4 * 2 * 3);

        let mut sorted = first.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(first, sorted);
        assert!(first.iter().all(|s| s.chars().all(|c| "ACGT".contains(c))));
    }

    #[test]
    fn five_ns_succeed_exactly_at_default_cap() {
        let variants = expand_str("ACNNNNNGT", 1024).unwrap();
        assert_eq!(variants.len(), 1024);
    }

    #[test]
    fn six_ns_exceed_default_cap() {
        assert_eq!(
            expand_str("ACNNNNNNGT", 1024),
            Err(ComplexityExceeded {
                variants: 4096,
                cap: 1024
            })
        );
    }

    #[test]
    fn eleven_ns_fail_without_materializing() {
        assert_eq!(
            expand_str("NNNNNNNNNNN", 1024),
            Err(ComplexityExceeded {
                variants: 4_194_304,
                cap: 1024
            })
        );
    }

    #[test]
    fn variant_count_saturates_on_overflow() {
        let seq = validate(&"N".repeat(40)).unwrap();
        assert_eq!(variant_count(&seq), u64::MAX);
        assert!(expand(&seq, DEFAULT_EXPANSION_CAP).is_err());
    }

    #[test]
    fn cap_of_one_rejects_any_degeneracy() {
        assert!(expand_str("ACGT", 1).is_ok());
        assert!(expand_str("ACGR", 1).is_err());
    }
}
