use crate::core::models::conditions::ReactionConditions;

/// Coefficient of the logarithmic ion corrections, in °C per decade.
pub const SALT_COEFFICIENT: f64 = 12.5;

/// Monovalent concentration (mM) at which the reference Tm is defined.
pub const REFERENCE_MONOVALENT_MM: f64 = 1000.0;

/// Weight of `√[free Mg²⁺]` in the sodium-equivalent concentration (von Ahsen et al., 2001).
pub const MG_EQUIVALENCE: f64 = 120.0;

/// `12.5·log10([Na⁺]/1000)`.
pub fn monovalent_correction(salt_conc_mm: f64) -> f64 {
    SALT_COEFFICIENT * (salt_conc_mm / REFERENCE_MONOVALENT_MM).log10()
}

/// `12.5·log10(1 + 120·√[free Mg²⁺] / [Na⁺])`, zero when no Mg²⁺ is left after dNTP
/// chelation.
///
/// Added to [`monovalent_correction`], the sum equals the monovalent correction evaluated at
/// the sodium-equivalent concentration, so Na⁺ is never counted twice.
pub fn divalent_correction(salt_conc_mm: f64, free_mg_mm: f64) -> f64 {
    if free_mg_mm <= 0.0 {
        return 0.0;
    }
    SALT_COEFFICIENT * (1.0 + MG_EQUIVALENCE * free_mg_mm.sqrt() / salt_conc_mm).log10()
}

/// Adjusts a reference Tm for the ionic strength of `conditions`.
pub fn correct(raw_tm: f64, conditions: &ReactionConditions) -> f64 {
    let tm = raw_tm + monovalent_correction(conditions.salt_conc);
    if conditions.mg_conc > 0.0 {
        tm + divalent_correction(conditions.salt_conc, conditions.free_mg_conc())
    } else {
        tm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn conditions(salt: f64, mg: f64, dntp: f64) -> ReactionConditions {
        ReactionConditions::new(0.5, salt, mg, dntp)
    }

    #[test]
    fn reference_salt_leaves_tm_unchanged() {
        assert!(f64_approx_equal(correct(60.0, &conditions(1000.0, 0.0, 0.0)), 60.0));
    }

    #[test]
    fn fifty_millimolar_salt_matches_fixed_coefficient() {
        let expected = 56.949260550858696 + 12.5 * (0.05f64).log10();
        let corrected = correct(56.949260550858696, &conditions(50.0, 0.0, 0.0));
        assert!(f64_approx_equal(corrected, expected));
        assert!(f64_approx_equal(corrected, 40.68638560505893));
    }

    #[test]
    fn correction_is_monotonically_increasing_in_monovalent_salt() {
        let salts = [1.0, 5.0, 10.0, 20.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2000.0];
        for mg in [0.0, 2.0] {
            let tms: Vec<f64> = salts
                .iter()
                .map(|&s| correct(55.0, &conditions(s, mg, 0.0)))
                .collect();
            for pair in tms.windows(2) {
                assert!(pair[1] > pair[0], "not increasing: {:?}", pair);
            }
        }
    }

    #[test]
    fn magnesium_adds_an_independent_positive_term() {
        let without = correct(55.0, &conditions(50.0, 0.0, 0.0));
        let with = correct(55.0, &conditions(50.0, 2.0, 0.8));
        let expected_delta = 12.5 * (1.0 + 120.0 * 1.2f64.sqrt() / 50.0).log10();
        assert!(with > without);
        assert!(f64_approx_equal(with - without, expected_delta));
    }

    #[test]
    fn combined_terms_equal_sodium_equivalent_correction() {
        let salt = 50.0;
        let free_mg: f64 = 1.2;
        let na_eq = salt + 120.0 * free_mg.sqrt();
        let combined = monovalent_correction(salt) + divalent_correction(salt, free_mg);
        assert!(f64_approx_equal(combined, monovalent_correction(na_eq)));
    }

    #[test]
    fn dntp_in_excess_of_magnesium_cancels_divalent_term() {
        let without = correct(55.0, &conditions(50.0, 0.0, 0.0));
        let chelated = correct(55.0, &conditions(50.0, 0.5, 0.8));
        assert!(f64_approx_equal(without, chelated));
    }
}
