//! Domain selection weights
//!
//! Base popularity weights for each domain and the year-dependent boost that
//! makes the emerging domains more likely in later years. Everything here is
//! pure: weights are values, and boosting returns a new normalized table.

use super::types::Domain;

/// Year from which the emerging domains are boosted
pub const DEFAULT_BOOST_YEAR: i32 = 2023;

/// Selection weights, one per domain, indexed by [`Domain::index`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainWeights {
    weights: [f64; 7],
}

impl DomainWeights {
    /// Create a weight table from raw values in [`Domain::ALL`] order
    pub fn new(weights: [f64; 7]) -> Self {
        Self { weights }
    }

    /// Initial popularity of each domain
    pub fn base() -> Self {
        Self::new([
            0.25, // Software Engineering
            0.20, // Data Science
            0.10, // AI/ML Engineering
            0.15, // Cloud Computing
            0.10, // Cybersecurity
            0.12, // UI/UX Design
            0.08, // DevOps
        ])
    }

    /// Weight for a single domain
    pub fn get(&self, domain: Domain) -> f64 {
        self.weights[domain.index()]
    }

    /// Raw weights in [`Domain::ALL`] order
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Scale the weights so they sum to 1.
    ///
    /// A table with no positive mass normalizes to the uniform distribution.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if total.is_nan() || total <= 0.0 {
            return Self::new([1.0 / self.weights.len() as f64; 7]);
        }

        let mut weights = self.weights;
        for w in weights.iter_mut() {
            *w /= total;
        }
        Self { weights }
    }
}

impl Default for DomainWeights {
    fn default() -> Self {
        Self::base()
    }
}

/// Multiplicative boost applied to emerging domains from a threshold year on
#[derive(Debug, Clone, PartialEq)]
pub struct BoostPolicy {
    /// First year (inclusive) in which the boost applies
    pub threshold_year: i32,
    /// Domains to boost and their multipliers
    pub boosts: Vec<(Domain, f64)>,
}

impl Default for BoostPolicy {
    fn default() -> Self {
        Self {
            threshold_year: DEFAULT_BOOST_YEAR,
            boosts: vec![
                (Domain::AiMlEngineering, 2.5),
                (Domain::Cybersecurity, 2.0),
            ],
        }
    }
}

impl BoostPolicy {
    /// Policy that never boosts anything
    pub fn none() -> Self {
        Self {
            threshold_year: DEFAULT_BOOST_YEAR,
            boosts: Vec::new(),
        }
    }

    pub fn applies_to(&self, year: i32) -> bool {
        !self.boosts.is_empty() && year >= self.threshold_year
    }

    /// Domains that receive a boost
    pub fn emerging_domains(&self) -> impl Iterator<Item = Domain> + '_ {
        self.boosts.iter().map(|(domain, _)| *domain)
    }

    /// Weights to sample from in `year`, normalized to sum to 1
    pub fn apply(&self, base: &DomainWeights, year: i32) -> DomainWeights {
        let mut weights = base.weights;
        if self.applies_to(year) {
            for (domain, factor) in &self.boosts {
                weights[domain.index()] *= factor;
            }
        }
        DomainWeights::new(weights).normalized()
    }
}

/// Normalized weights for `year` under the default boost policy
pub fn boosted_weights(base: &DomainWeights, year: i32) -> DomainWeights {
    BoostPolicy::default().apply(base, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_base_weights_sum_to_one() {
        assert!((DomainWeights::base().sum() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_unboosted_year_keeps_base_proportions() {
        let base = DomainWeights::base();
        let weights = boosted_weights(&base, 2022);

        assert!((weights.sum() - 1.0).abs() < EPS);
        for domain in Domain::ALL {
            assert!((weights.get(domain) - base.get(domain)).abs() < EPS);
        }
    }

    #[test]
    fn test_boosted_year_raises_emerging_domains() {
        let base = DomainWeights::base();
        let weights = boosted_weights(&base, 2023);

        // 0.25 + 0.20 + 0.25 + 0.15 + 0.20 + 0.12 + 0.08
        let total = 1.25;
        assert!((weights.sum() - 1.0).abs() < EPS);
        assert!((weights.get(Domain::AiMlEngineering) - 0.25 / total).abs() < EPS);
        assert!((weights.get(Domain::Cybersecurity) - 0.20 / total).abs() < EPS);
        assert!((weights.get(Domain::SoftwareEngineering) - 0.25 / total).abs() < EPS);

        assert_eq!(boosted_weights(&base, 2024), weights);
    }

    #[test]
    fn test_boost_does_not_mutate_base() {
        let base = DomainWeights::base();
        let _ = boosted_weights(&base, 2024);
        assert_eq!(base, DomainWeights::base());
    }

    #[test]
    fn test_none_policy_never_boosts() {
        let policy = BoostPolicy::none();
        assert!(!policy.applies_to(2030));
        assert_eq!(
            policy.apply(&DomainWeights::base(), 2030),
            DomainWeights::base().normalized()
        );
    }

    #[test]
    fn test_zero_weights_normalize_to_uniform() {
        let weights = DomainWeights::new([0.0; 7]).normalized();
        for w in weights.as_slice() {
            assert!((w - 1.0 / 7.0).abs() < EPS);
        }
    }

    #[test]
    fn test_emerging_domains() {
        let policy = BoostPolicy::default();
        let emerging: Vec<_> = policy.emerging_domains().collect();
        assert_eq!(
            emerging,
            vec![Domain::AiMlEngineering, Domain::Cybersecurity]
        );
    }
}
