//! # Challenge Selection
//!
//! Decides which proof-of-control challenges to offer for an identifier
//! and which combinations of them are sufficient. The [`ChallengePolicy`]
//! trait is the seam: a risk-based policy can vary the offer per
//! identifier, or require several challenges together, without any change
//! to callers, because the offer already carries a list of combinations.

use ipe_core::{Challenge, ChallengeOffer, Identifier};

/// Chooses the challenge offer for an identifier.
pub trait ChallengePolicy: Send + Sync + std::fmt::Debug {
    /// Challenges and acceptable combinations for `identifier`.
    fn challenges_for(&self, identifier: &Identifier) -> ChallengeOffer;
}

/// Identifier-independent policy: HTTP, TLS-SNI, and DNS challenges, any
/// one of which suffices.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticChallengePolicy;

impl ChallengePolicy for StaticChallengePolicy {
    fn challenges_for(&self, _identifier: &Identifier) -> ChallengeOffer {
        ChallengeOffer {
            challenges: vec![Challenge::simple_http(), Challenge::dvsni(), Challenge::dns()],
            combinations: vec![vec![0], vec![1], vec![2]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipe_core::{ChallengeStatus, ChallengeType, IdentifierType};

    #[test]
    fn test_static_offer_shape() {
        let offer = StaticChallengePolicy.challenges_for(&Identifier::dns("example.com"));
        let kinds: Vec<ChallengeType> = offer.challenges.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ChallengeType::SimpleHttp, ChallengeType::Dvsni, ChallengeType::Dns]
        );
        assert_eq!(offer.combinations, vec![vec![0], vec![1], vec![2]]);
        assert!(offer.is_well_formed());
        assert!(offer
            .challenges
            .iter()
            .all(|c| c.status == ChallengeStatus::Pending));
    }

    #[test]
    fn test_any_single_challenge_suffices() {
        let offer = StaticChallengePolicy.challenges_for(&Identifier::dns("example.com"));
        for i in 0..offer.challenges.len() {
            assert!(offer.is_satisfied_by(&[i]));
        }
    }

    #[test]
    fn test_offer_independent_of_identifier() {
        let ids = [
            Identifier::dns("example.com"),
            Identifier::dns(""),
            Identifier::new(IdentifierType::from("ip"), "10.0.0.1"),
        ];
        for id in &ids {
            let offer = StaticChallengePolicy.challenges_for(id);
            assert_eq!(offer.challenges.len(), 3);
            assert_eq!(offer.combinations.len(), 3);
            assert!(offer.combinations.iter().all(|c| c.len() == 1));
        }
    }

    #[test]
    fn test_policy_as_trait_object() {
        let policy: Box<dyn ChallengePolicy> = Box::new(StaticChallengePolicy);
        let offer = policy.challenges_for(&Identifier::dns("example.com"));
        assert_eq!(offer.challenges.len(), 3);
    }
}
