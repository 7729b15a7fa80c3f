pub mod entity {
    use std::ops::Range;

    use itertools::Itertools;
    use thiserror::Error;

    pub type Id = String;
    pub type MemberIndex = usize;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Member {
        pub id: Id,
        pub preferences: Vec<Id>,
        pub avoids: Vec<Id>,
    }

    impl Member {
        pub fn new<I, P, A>(id: I, preferences: P, avoids: A) -> Member
        where
            I: Into<Id>,
            P: IntoIterator,
            P::Item: Into<Id>,
            A: IntoIterator,
            A::Item: Into<Id>,
        {
            Member {
                id: id.into(),
                preferences: preferences.into_iter().map(Into::into).collect(),
                avoids: avoids.into_iter().map(Into::into).collect(),
            }
        }
    }

    #[derive(Debug, Clone, Error, PartialEq, Eq)]
    pub enum RosterError {
        #[error("Duplicate member id: {0}")]
        DuplicateId(Id),
    }

    /// The fixed set of members being seated. Groups refer to members by
    /// their position in the roster.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Roster {
        members: Vec<Member>,
    }

    impl Roster {
        pub fn new(members: Vec<Member>) -> Result<Roster, RosterError> {
            if let Some(dup) = members.iter().map(|m| &m.id).duplicates().next() {
                return Err(RosterError::DuplicateId(dup.clone()));
            }
            Ok(Roster { members })
        }

        pub fn len(&self) -> usize {
            self.members.len()
        }

        pub fn is_empty(&self) -> bool {
            self.members.is_empty()
        }

        pub fn get(&self, index: MemberIndex) -> Option<&Member> {
            self.members.get(index)
        }

        pub fn members(&self) -> &[Member] {
            &self.members
        }

        pub fn indices(&self) -> Range<MemberIndex> {
            0..self.members.len()
        }

        pub fn index_of(&self, id: &str) -> Option<MemberIndex> {
            self.members.iter().position(|m| m.id == id)
        }

        pub fn id_of(&self, index: MemberIndex) -> Option<&str> {
            self.members.get(index).map(|m| m.id.as_str())
        }
    }
}


pub mod group {
    use thiserror::Error;

    use super::entity::{MemberIndex, Roster};

    pub type GroupIndex = usize;

    #[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
    pub enum GroupError {
        #[error("Group is full")]
        Full,
        #[error("Member {0} is already in the group")]
        AlreadyPresent(MemberIndex),
        #[error("Member {0} is not in the group")]
        Absent(MemberIndex),
        #[error("No group at index {0}")]
        NoSuchGroup(GroupIndex),
        #[error("Member is already seated in group {0}")]
        SeatedElsewhere(GroupIndex),
    }

    /// Where a member ended up after construction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Placement {
        Placed(GroupIndex),
        Unplaced,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Group {
        capacity: usize,
        members: Vec<MemberIndex>,
    }

    impl Group {
        pub fn new(capacity: usize) -> Group {
            Group { capacity, members: Vec::new() }
        }

        pub fn capacity(&self) -> usize {
            self.capacity
        }

        pub fn members(&self) -> &[MemberIndex] {
            &self.members
        }

        pub fn len(&self) -> usize {
            self.members.len()
        }

        pub fn is_empty(&self) -> bool {
            self.members.is_empty()
        }

        pub fn has_room(&self) -> bool {
            self.members.len() < self.capacity
        }

        pub fn contains(&self, member: MemberIndex) -> bool {
            self.members.contains(&member)
        }

        /// Leaves the group untouched and reports why if it is full or
        /// already holds `member`.
        pub fn add(&mut self, member: MemberIndex) -> Result<(), GroupError> {
            if !self.has_room() {
                return Err(GroupError::Full);
            }
            if self.contains(member) {
                return Err(GroupError::AlreadyPresent(member));
            }
            self.members.push(member);
            Ok(())
        }

        pub fn remove(&mut self, member: MemberIndex) -> Result<(), GroupError> {
            let index = self.members
                .iter()
                .position(|m| *m == member)
                .ok_or(GroupError::Absent(member))?;
            self.members.remove(index);
            Ok(())
        }
    }

    /// One candidate solution: an ordered list of groups.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Grouping {
        groups: Vec<Group>,
    }

    impl Grouping {
        pub fn empty(group_count: usize, capacity: usize) -> Grouping {
            Grouping { groups: (0..group_count).map(|_| Group::new(capacity)).collect() }
        }

        pub fn len(&self) -> usize {
            self.groups.len()
        }

        pub fn is_empty(&self) -> bool {
            self.groups.is_empty()
        }

        pub fn groups(&self) -> &[Group] {
            &self.groups
        }

        pub fn group(&self, index: GroupIndex) -> Option<&Group> {
            self.groups.get(index)
        }

        pub fn group_mut(&mut self, index: GroupIndex) -> Option<&mut Group> {
            self.groups.get_mut(index)
        }

        /// A member sits in at most one group, so seating someone who is
        /// already in another group is refused.
        pub fn seat(&mut self, index: GroupIndex, member: MemberIndex) -> Result<(), GroupError> {
            if index >= self.groups.len() {
                return Err(GroupError::NoSuchGroup(index));
            }
            match self.group_of(member) {
                Some(other) if other != index => Err(GroupError::SeatedElsewhere(other)),
                _ => self.groups[index].add(member),
            }
        }

        pub fn unseat(&mut self, index: GroupIndex, member: MemberIndex) -> Result<(), GroupError> {
            self.group_mut(index).ok_or(GroupError::NoSuchGroup(index))?.remove(member)
        }

        pub fn placed(&self) -> impl Iterator<Item = MemberIndex> + '_ {
            self.groups.iter().flat_map(|g| g.members().iter().copied())
        }

        pub fn placed_count(&self) -> usize {
            self.groups.iter().map(Group::len).sum()
        }

        pub fn group_of(&self, member: MemberIndex) -> Option<GroupIndex> {
            self.groups.iter().position(|g| g.contains(member))
        }

        /// Renders every group as the ids of its members, in seating order.
        pub fn member_ids<'r>(&self, roster: &'r Roster) -> Vec<Vec<&'r str>> {
            self.groups
                .iter()
                .map(|g| g.members().iter().filter_map(|m| roster.id_of(*m)).collect())
                .collect()
        }
    }
}

pub mod condition {
    use std::fmt;

    pub type Score = f64;

    /// Gini coefficient of the per-group satisfied-preference counts.
    ///
    /// `Undefined` covers the distributions the formula cannot handle: no
    /// groups at all, or no satisfied preference anywhere.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Gini {
        Defined(f64),
        Undefined,
    }

    impl Gini {
        /// The reported coefficient. An undefined distribution reads as
        /// perfectly equal.
        pub fn coefficient(self) -> f64 {
            match self {
                Gini::Defined(value) => value,
                Gini::Undefined => 0.0,
            }
        }

        pub fn is_defined(self) -> bool {
            matches!(self, Gini::Defined(_))
        }
    }

    impl fmt::Display for Gini {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Gini::Defined(value) => write!(f, "{value}"),
                Gini::Undefined => write!(f, "undefined"),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ScoreResult {
        pub score: Score,
        pub gini: Gini,
        pub satisfied: usize,
        pub violated: usize,
    }
}
