//! Seat a roster of members at equally sized groups so that as many
//! seating preferences as possible are honoured, avoidances are kept apart,
//! and satisfied preferences are spread evenly across the groups.
//!
//! The search runs in two phases per trial: a greedy construction followed
//! by hill climbing over random pairwise swaps. Several independent trials
//! run and the best grouping wins.
//!
//! ```
//! use seat_shuffle::prelude::*;
//!
//! let roster = Roster::new(vec![
//!     Member::new("Ada", ["Ben"], Vec::<String>::new()),
//!     Member::new("Ben", ["Ada"], Vec::<String>::new()),
//!     Member::new("Cy", Vec::<String>::new(), Vec::<String>::new()),
//!     Member::new("Di", Vec::<String>::new(), Vec::<String>::new()),
//! ]).unwrap();
//!
//! let config = SolverConfig::new().with_trials(3).with_iterations(500).with_random_seed(1);
//! let solution = find_best_grouping(&roster, 2, 2, config);
//! assert!(solution.unplaced.is_empty());
//! assert_eq!(solution.groups(&roster).len(), 2);
//! ```

pub mod action;
pub mod cache;
pub mod config;
pub mod driver;
pub mod fairness;
pub mod greedy;
pub mod model;
pub mod refine;
pub mod score;

pub mod prelude {
    pub use crate::config::{ConfigError, SolverConfig};
    pub use crate::driver::{find_best_grouping, Solution, Solver, TrialReport};
    pub use crate::model::condition::{Gini, Score, ScoreResult};
    pub use crate::model::entity::{Id, Member, MemberIndex, Roster, RosterError};
    pub use crate::model::group::{Group, GroupError, Grouping, Placement};
}
