use std::collections::HashMap;

use crate::model::entity::{MemberIndex, Roster};
use crate::model::group::{GroupIndex, Grouping};

/// Preference and avoidance lists resolved from ids to roster indices.
///
/// Ids that name no member are dropped here, since they can never match.
/// Repeated ids are kept and count once per occurrence.
#[derive(Debug, Clone, Default)]
pub struct RelationCache {
    preferences: Vec<Vec<MemberIndex>>,
    avoids: Vec<Vec<MemberIndex>>,
}

impl RelationCache {
    pub fn new(roster: &Roster) -> RelationCache {
        let lookup: HashMap<&str, MemberIndex> = roster.members()
            .iter().enumerate()
            .map(|(index, member)| (member.id.as_str(), index))
            .collect();
        let resolve = |ids: &[String]| -> Vec<MemberIndex> {
            ids.iter().filter_map(|id| lookup.get(id.as_str()).copied()).collect()
        };
        RelationCache {
            preferences: roster.members().iter().map(|m| resolve(m.preferences.as_slice())).collect(),
            avoids: roster.members().iter().map(|m| resolve(m.avoids.as_slice())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    pub fn preferences(&self, member: MemberIndex) -> &[MemberIndex] {
        self.preferences.get(member).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn avoids(&self, member: MemberIndex) -> &[MemberIndex] {
        self.avoids.get(member).map(Vec::as_slice).unwrap_or_default()
    }

    /// How many current members of `group` the given member would like to sit with.
    pub fn overlap(&self, member: MemberIndex, group: &[MemberIndex]) -> usize {
        let preferences = self.preferences(member);
        group.iter().filter(|m| preferences.contains(m)).count()
    }
}

/// Member to group lookup for one grouping.
#[derive(Debug, Clone)]
pub struct SeatMap(Vec<Option<GroupIndex>>);

impl SeatMap {
    pub fn new(grouping: &Grouping, n_members: usize) -> SeatMap {
        let mut seats = vec![None; n_members];
        for (group_index, group) in grouping.groups().iter().enumerate() {
            for member in group.members() {
                if let Some(seat) = seats.get_mut(*member) {
                    *seat = Some(group_index);
                }
            }
        }
        SeatMap(seats)
    }

    pub fn group_of(&self, member: MemberIndex) -> Option<GroupIndex> {
        self.0.get(member).copied().flatten()
    }

    pub fn is_in(&self, member: MemberIndex, group_index: GroupIndex) -> bool {
        self.group_of(member) == Some(group_index)
    }
}
