// src/scoring.rs

use crate::error::ScoreError;
use crate::model::Tier;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DEFAULT_RATING: u8 = 3;

/// Percentage score of a diagnostic: `round(100 * sum / (n * 5))`.
///
/// Halves round up. An empty slice is rejected instead of dividing by zero.
pub fn score(ratings: &[u8]) -> Result<u8, ScoreError> {
    if ratings.is_empty() {
        return Err(ScoreError::NoRatings);
    }
    if let Some((index, &value)) = ratings
        .iter()
        .enumerate()
        .find(|(_, r)| !(MIN_RATING..=MAX_RATING).contains(*r))
    {
        return Err(ScoreError::RatingOutOfRange { index, value });
    }

    let n = ratings.len() as u64;
    let sum: u64 = ratings.iter().map(|&r| u64::from(r)).sum();
    let max = n * u64::from(MAX_RATING);
    // floor(100 * sum / max + 1/2) in integers
    let pct = (200 * sum + max) / (2 * max);
    Ok(pct as u8)
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        if score < 50 {
            Tier::AreaOfFocus
        } else if score < 80 {
            Tier::Moderate
        } else {
            Tier::StrongFoundation
        }
    }

    /// Short name shown as the heading of the score banner.
    pub fn label(self) -> &'static str {
        match self {
            Tier::AreaOfFocus => "Area of Focus",
            Tier::Moderate => "Moderate",
            Tier::StrongFoundation => "Strong Foundation",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::AreaOfFocus => {
                "⚠️ Area of Focus (RED). Immediate micro-actions recommended to stabilise this pillar."
            }
            Tier::Moderate => "Your alignment here is moderate. Small consistent steps will help.",
            Tier::StrongFoundation => {
                "✅ Strong Foundation (GREEN). Keep maintaining this area and support your weaker pillars."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(score(&[1, 1, 1, 1]), Ok(20));
        assert_eq!(score(&[5, 5, 5, 5]), Ok(100));
        assert_eq!(score(&[3, 3, 3, 3]), Ok(60));
        assert_eq!(score(&[1, 3, 5, 3]), Ok(60));
    }

    #[test]
    fn rounds_half_up() {
        // 100 * 9 / 20 = 45, 100 * 7 / 15 = 46.67
        assert_eq!(score(&[2, 2, 2, 3]), Ok(45));
        assert_eq!(score(&[2, 2, 3]), Ok(47));
        // 100 * 5 / 15 = 33.33
        assert_eq!(score(&[1, 2, 2]), Ok(33));
        // 100 * 17 / 40 = 42.5
        assert_eq!(score(&[2, 2, 2, 2, 2, 2, 2, 3]), Ok(43));
    }

    #[test]
    fn bounded_and_monotonic_over_all_four_rating_inputs() {
        let range = MIN_RATING..=MAX_RATING;
        for a in range.clone() {
            for b in range.clone() {
                for c in range.clone() {
                    for d in range.clone() {
                        let ratings = [a, b, c, d];
                        let s = score(&ratings).unwrap();
                        assert!((20..=100).contains(&s), "{ratings:?} -> {s}");
                        for i in 0..4 {
                            if ratings[i] < MAX_RATING {
                                let mut bumped = ratings;
                                bumped[i] += 1;
                                assert!(score(&bumped).unwrap() >= s);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rejects_empty_and_out_of_range() {
        assert_eq!(score(&[]), Err(ScoreError::NoRatings));
        assert_eq!(
            score(&[3, 0, 3, 3]),
            Err(ScoreError::RatingOutOfRange { index: 1, value: 0 })
        );
        assert_eq!(
            score(&[3, 3, 3, 6]),
            Err(ScoreError::RatingOutOfRange { index: 3, value: 6 })
        );
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(0), Tier::AreaOfFocus);
        assert_eq!(Tier::from_score(49), Tier::AreaOfFocus);
        assert_eq!(Tier::from_score(50), Tier::Moderate);
        assert_eq!(Tier::from_score(79), Tier::Moderate);
        assert_eq!(Tier::from_score(80), Tier::StrongFoundation);
        assert_eq!(Tier::from_score(100), Tier::StrongFoundation);
    }

    #[test]
    fn tier_messages_name_their_tier() {
        assert!(Tier::AreaOfFocus.message().contains("Area of Focus"));
        assert!(Tier::StrongFoundation.message().contains("Strong Foundation"));
        assert!(Tier::Moderate.message().contains("moderate"));
    }

    #[test]
    fn banner_labels_follow_the_score() {
        assert_eq!(Tier::from_score(20).label(), "Area of Focus");
        assert_eq!(Tier::from_score(60).label(), "Moderate");
        assert_eq!(Tier::from_score(85).label(), "Strong Foundation");
        for tier in [Tier::AreaOfFocus, Tier::StrongFoundation] {
            assert!(tier.message().contains(tier.label()));
        }
    }
}
