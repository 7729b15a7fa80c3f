use crate::cache::{RelationCache, SeatMap};
use crate::fairness::{gini_coefficient, round_to_hundredths};
use crate::model::condition::{Gini, Score, ScoreResult};
use crate::model::entity::MemberIndex;
use crate::model::group::{Group, GroupIndex, Grouping};

/// Below this coefficient the distribution is rewarded, at or above it penalised.
pub const FAIRNESS_THRESHOLD: f64 = 0.5;
/// Reward for a perfectly even distribution, and the penalty for an undefined one.
pub const FAIRNESS_SCALE: f64 = 10.0;

/// Bonus (positive) or penalty (negative) for how evenly satisfied
/// preferences are spread over the groups.
///
/// A grouping in which nobody sits with anyone they prefer has no defined
/// coefficient and takes the full penalty.
pub fn fairness_adjustment(gini: Gini) -> Score {
    match gini {
        Gini::Defined(g) => {
            let scaled = round_to_hundredths(g * FAIRNESS_SCALE);
            if (0.0..FAIRNESS_THRESHOLD).contains(&g) {
                FAIRNESS_SCALE - scaled
            } else {
                -scaled
            }
        }
        Gini::Undefined => -FAIRNESS_SCALE,
    }
}

impl Group {
    /// Counts listed ids found in this group; a member listing its own id
    /// matches itself.
    fn tally<'a>(
        &self,
        index: GroupIndex,
        seats: &SeatMap,
        list: impl Fn(MemberIndex) -> &'a [MemberIndex],
    ) -> usize {
        self.members()
            .iter()
            .flat_map(|m| list(*m).iter())
            .filter(|other| seats.is_in(**other, index))
            .count()
    }
}

/// Scores a full grouping. Read-only and deterministic in the membership.
pub fn evaluate(grouping: &Grouping, relations: &RelationCache) -> ScoreResult {
    let seats = SeatMap::new(grouping, relations.len());
    let satisfied_per_group: Vec<usize> = grouping.groups()
        .iter().enumerate()
        .map(|(index, group)| group.tally(index, &seats, |m| relations.preferences(m)))
        .collect();
    let gini = gini_coefficient(&satisfied_per_group);
    let violated: usize = grouping.groups()
        .iter().enumerate()
        .map(|(index, group)| group.tally(index, &seats, |m| relations.avoids(m)))
        .sum();
    let satisfied: usize = satisfied_per_group.iter().sum();
    let score = satisfied as Score - violated as Score + fairness_adjustment(gini);
    ScoreResult { score, gini, satisfied, violated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::{Member, Roster};

    fn none() -> Vec<String> {
        Vec::new()
    }

    fn grouping(groups: &[&[MemberIndex]], capacity: usize) -> Grouping {
        let mut grouping = Grouping::empty(groups.len(), capacity);
        for (index, members) in groups.iter().enumerate() {
            for member in members.iter() {
                grouping.seat(index, *member).unwrap();
            }
        }
        grouping
    }

    #[test]
    fn adjustment_bands() {
        assert_eq!(fairness_adjustment(Gini::Defined(0.0)), 10.0);
        assert_eq!(fairness_adjustment(Gini::Defined(0.25)), 7.5);
        assert_eq!(fairness_adjustment(Gini::Defined(0.5)), -5.0);
        assert_eq!(fairness_adjustment(Gini::Defined(0.75)), -7.5);
        assert!((fairness_adjustment(Gini::Defined(1.0 / 3.0)) - 6.67).abs() < 1e-9);
        assert_eq!(fairness_adjustment(Gini::Undefined), -10.0);
    }

    #[test]
    fn mutual_preference_in_one_group() {
        let roster = Roster::new(vec![
            Member::new("A", ["B"], none()),
            Member::new("B", ["A"], none()),
            Member::new("C", none(), none()),
            Member::new("D", none(), none()),
        ]).unwrap();
        let relations = RelationCache::new(&roster);

        let together = evaluate(&grouping(&[&[0, 1], &[2, 3]], 2), &relations);
        assert_eq!(together.satisfied, 2);
        assert_eq!(together.gini, Gini::Defined(0.5));
        assert_eq!(together.score, 2.0 - 5.0);

        let apart = evaluate(&grouping(&[&[0, 2], &[1, 3]], 2), &relations);
        assert_eq!(apart.satisfied, 0);
        assert_eq!(apart.gini, Gini::Undefined);
        assert!(together.score > apart.score);
    }

    #[test]
    fn avoidances_subtract() {
        let roster = Roster::new(vec![
            Member::new("A", ["C"], ["B"]),
            Member::new("B", ["A"], ["A"]),
            Member::new("C", ["D"], none()),
            Member::new("D", ["C"], none()),
        ]).unwrap();
        let relations = RelationCache::new(&roster);
        let result = evaluate(&grouping(&[&[0, 1], &[2, 3]], 2), &relations);
        assert_eq!(result.satisfied, 3);
        assert_eq!(result.violated, 2);
        // counts [1, 2] -> gini 1/6 -> 10 - 1.67
        assert!((result.score - (3.0 - 2.0 + 10.0 - 1.67)).abs() < 1e-9);
    }

    #[test]
    fn self_preference_matches() {
        let roster = Roster::new(vec![
            Member::new("A", ["A"], none()),
            Member::new("B", none(), none()),
        ]).unwrap();
        let result = evaluate(&grouping(&[&[0], &[1]], 1), &RelationCache::new(&roster));
        assert_eq!(result.satisfied, 1);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let roster = Roster::new(vec![
            Member::new("A", ["B", "C"], ["D"]),
            Member::new("B", ["A"], none()),
            Member::new("C", ["D"], ["A"]),
            Member::new("D", ["A", "B"], none()),
        ]).unwrap();
        let relations = RelationCache::new(&roster);
        let g = grouping(&[&[0, 3], &[1, 2]], 2);
        assert_eq!(evaluate(&g, &relations), evaluate(&g, &relations));
    }

    #[test]
    fn empty_grouping_is_trivially_scored() {
        let result = evaluate(&Grouping::empty(0, 4), &RelationCache::default());
        assert_eq!(result.satisfied, 0);
        assert_eq!(result.gini, Gini::Undefined);
        assert_eq!(result.score, -10.0);
    }
}
