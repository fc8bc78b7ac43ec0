use super::TrainingExample;
use crate::assessment::MissionRating;
use serde::Serialize;

/// Ratio of most to least common rating above which class imbalance is severe.
pub const SEVERE_IMBALANCE_RATIO: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingCount {
    pub rating: MissionRating,
    pub count: usize,
    pub percentage: f64,
}

/// How labeled rows spread across the six ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingDistribution {
    pub total: usize,
    /// Ratings that occur at least once, best first.
    pub counts: Vec<RatingCount>,
}

impl RatingDistribution {
    pub fn from_examples(examples: &[TrainingExample]) -> Self {
        Self::from_ratings(examples.iter().map(|example| example.mission_rating))
    }

    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = MissionRating>,
    {
        let mut tally = [0usize; 6];
        let mut total = 0;
        for rating in ratings {
            tally[usize::from(6 - rating.score())] += 1;
            total += 1;
        }

        let counts = MissionRating::ordered()
            .into_iter()
            .zip(tally)
            .filter(|(_, count)| *count > 0)
            .map(|(rating, count)| RatingCount {
                rating,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            })
            .collect();

        Self { total, counts }
    }

    pub fn count(&self, rating: MissionRating) -> usize {
        self.counts
            .iter()
            .find(|entry| entry.rating == rating)
            .map_or(0, |entry| entry.count)
    }

    pub fn most_common(&self) -> Option<RatingCount> {
        self.counts.iter().copied().max_by_key(|entry| entry.count)
    }

    pub fn least_common(&self) -> Option<RatingCount> {
        self.counts.iter().copied().min_by_key(|entry| entry.count)
    }

    /// Most common over least common count among ratings present.
    pub fn imbalance_ratio(&self) -> Option<f64> {
        let max = self.most_common()?.count;
        let min = self.least_common()?.count;
        Some(max as f64 / min as f64)
    }

    pub fn is_severely_imbalanced(&self) -> bool {
        self.imbalance_ratio()
            .is_some_and(|ratio| ratio > SEVERE_IMBALANCE_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate_complete;
    use crate::MissionPlanner;

    #[test]
    fn tallies_ratings_best_first() {
        let distribution = RatingDistribution::from_ratings([
            MissionRating::F,
            MissionRating::F,
            MissionRating::A,
            MissionRating::F,
        ]);
        assert_eq!(distribution.total, 4);
        assert_eq!(distribution.counts[0].rating, MissionRating::A);
        assert_eq!(distribution.count(MissionRating::F), 3);
        assert_eq!(distribution.count(MissionRating::S), 0);
        assert_eq!(distribution.counts[1].percentage, 75.0);
        assert_eq!(distribution.imbalance_ratio(), Some(3.0));
        assert!(!distribution.is_severely_imbalanced());
    }

    #[test]
    fn empty_distribution_has_no_ratio() {
        let distribution = RatingDistribution::from_ratings(std::iter::empty());
        assert_eq!(distribution.total, 0);
        assert!(distribution.counts.is_empty());
        assert_eq!(distribution.imbalance_ratio(), None);
    }

    #[test]
    fn complete_dataset_is_dominated_by_failing_missions() {
        let planner = MissionPlanner::standard();
        let examples = generate_complete(&planner).expect("labels");
        let distribution = RatingDistribution::from_examples(&examples);

        assert_eq!(distribution.total, 1890);
        let most = distribution.most_common().expect("non-empty");
        assert_eq!(most.rating, MissionRating::F);
        assert!(most.percentage > 50.0);
        assert!(distribution.is_severely_imbalanced());
    }
}
