use thiserror::Error;

use crate::model::entity::MemberIndex;
use crate::model::group::{GroupError, GroupIndex, Grouping};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub group_index: GroupIndex,
    pub member: MemberIndex,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Both sides of the swap are in group {0}")]
    SameGroup(GroupIndex),
    #[error(transparent)]
    Group(#[from] GroupError),
}

/// Exchange of two members between two groups.
///
/// The record is its own undo log: [`Swap::inverse`] describes the edit that
/// puts both members back where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub first: Position,
    pub second: Position,
}

impl Swap {
    pub fn new(first: Position, second: Position) -> Swap {
        Swap { first, second }
    }

    pub fn inverse(&self) -> Swap {
        Swap {
            first: Position { group_index: self.second.group_index, member: self.first.member },
            second: Position { group_index: self.first.group_index, member: self.second.member },
        }
    }

    /// Validates both positions before touching the grouping, so a failed
    /// swap leaves it unchanged.
    pub fn apply(&self, grouping: &mut Grouping) -> Result<(), ActionError> {
        let (a, b) = (self.first, self.second);
        if a.group_index == b.group_index {
            return Err(ActionError::SameGroup(a.group_index));
        }
        let seated = |p: Position| grouping.group(p.group_index).map_or(false, |g| g.contains(p.member));
        if !seated(a) || !seated(b) {
            return Err(ActionError::InvalidPosition);
        }
        grouping.unseat(a.group_index, a.member)?;
        grouping.unseat(b.group_index, b.member)?;
        grouping.seat(a.group_index, b.member)?;
        grouping.seat(b.group_index, a.member)?;
        Ok(())
    }

    pub fn revert(&self, grouping: &mut Grouping) -> Result<(), ActionError> {
        self.inverse().apply(grouping)
    }
}
