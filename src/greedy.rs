use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::cache::RelationCache;
use crate::model::entity::{MemberIndex, Roster};
use crate::model::group::{GroupIndex, Grouping, Placement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    pub grouping: Grouping,
    pub placements: Vec<Placement>,
}

impl Construction {
    pub fn unplaced(&self) -> Vec<MemberIndex> {
        self.placements
            .iter().enumerate()
            .filter(|(_, p)| **p == Placement::Unplaced)
            .map(|(member, _)| member)
            .collect()
    }
}

/// Picks the group with room whose current members overlap most with the
/// member's preferences. Ties go to the earliest group, and a group with no
/// overlap still qualifies.
fn best_group(grouping: &Grouping, member: MemberIndex, relations: &RelationCache) -> Option<GroupIndex> {
    grouping.groups()
        .iter().enumerate()
        .filter(|(_, group)| group.has_room())
        .map(|(index, group)| (index, relations.overlap(member, group.members())))
        .fold(None, |best: Option<(GroupIndex, usize)>, (index, overlap)| match best {
            Some((_, max)) if overlap <= max => best,
            _ => Some((index, overlap)),
        })
        .map(|(index, _)| index)
}

/// Seats members one at a time, in random order, where they currently have
/// the most preferred peers. Members that find every group full stay
/// unplaced and are reported as such.
pub fn construct<R: Rng + ?Sized>(
    roster: &Roster,
    relations: &RelationCache,
    group_count: usize,
    capacity: usize,
    rng: &mut R,
) -> Construction {
    let mut grouping = Grouping::empty(group_count, capacity);
    let mut placements = vec![Placement::Unplaced; roster.len()];
    let mut order: Vec<MemberIndex> = roster.indices().collect();
    order.shuffle(rng);

    for member in order {
        let Some(index) = best_group(&grouping, member, relations) else {
            continue;
        };
        match grouping.seat(index, member) {
            Ok(()) => placements[member] = Placement::Placed(index),
            Err(err) => debug!(member, index, %err, "could not seat member"),
        }
    }

    let construction = Construction { grouping, placements };
    let unplaced = construction.unplaced();
    if !unplaced.is_empty() {
        warn!(
            unplaced = unplaced.len(),
            total_capacity = group_count * capacity,
            members = roster.len(),
            "not every member could be seated"
        );
    }
    construction
}
