use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::{debug, trace};

use crate::action::{Position, Swap};
use crate::cache::RelationCache;
use crate::model::condition::ScoreResult;
use crate::model::group::Grouping;
use crate::score::evaluate;

pub const DEFAULT_ITERATIONS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub max_iterations: usize,
}

impl Default for Params {
    fn default() -> Self {
        Params { max_iterations: DEFAULT_ITERATIONS }
    }
}

/// Outcome of one hill climb. `grouping` is owned by the caller and shares
/// nothing with the search state.
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement {
    pub grouping: Grouping,
    pub score: ScoreResult,
    pub initial_score: ScoreResult,
    pub n_iterations: usize,
    pub n_accepted: usize,
    pub n_skipped: usize,
}

struct State {
    grouping: Grouping,
    best: ScoreResult,
    n_accepted: usize,
    n_skipped: usize,
}

/// Draws two distinct groups, then one member of each.
/// `None` when there are fewer than two groups or either drawn group is empty.
fn propose<R: Rng + ?Sized>(grouping: &Grouping, rng: &mut R) -> Option<Swap> {
    if grouping.len() < 2 {
        return None;
    }
    let picked = index::sample(rng, grouping.len(), 2);
    let (g1, g2) = (picked.index(0), picked.index(1));
    let m1 = *grouping.group(g1)?.members().choose(rng)?;
    let m2 = *grouping.group(g2)?.members().choose(rng)?;
    Some(Swap::new(
        Position { group_index: g1, member: m1 },
        Position { group_index: g2, member: m2 },
    ))
}

fn step<R: Rng + ?Sized>(mut state: State, relations: &RelationCache, rng: &mut R) -> State {
    let Some(swap) = propose(&state.grouping, rng) else {
        state.n_skipped += 1;
        return state;
    };
    if let Err(err) = swap.apply(&mut state.grouping) {
        debug!(%err, ?swap, "proposed swap was rejected by the grouping");
        state.n_skipped += 1;
        return state;
    }
    let candidate = evaluate(&state.grouping, relations);
    if candidate.score > state.best.score {
        trace!(from = state.best.score, to = candidate.score, "accepted swap");
        state.best = candidate;
        state.n_accepted += 1;
    } else if let Err(err) = swap.revert(&mut state.grouping) {
        // apply succeeded, so the inverse is always valid
        debug!(%err, ?swap, "failed to revert swap");
    }
    state
}

/// Hill climbing over random pairwise swaps.
///
/// Only strictly improving swaps are kept; everything else is undone on the
/// spot, so the working grouping always equals the best one seen. Skipped
/// draws (empty group, fewer than two groups) still use up an iteration.
#[tracing::instrument(level = "debug", skip_all, fields(iterations = params.max_iterations))]
pub fn refine<R: Rng + ?Sized>(
    grouping: Grouping,
    relations: &RelationCache,
    params: Params,
    rng: &mut R,
) -> Refinement {
    let initial_score = evaluate(&grouping, relations);
    let start = State { grouping, best: initial_score, n_accepted: 0, n_skipped: 0 };
    let end = (0..params.max_iterations).fold(start, |state, _| step(state, relations, rng));
    debug!(
        initial = initial_score.score,
        best = end.best.score,
        accepted = end.n_accepted,
        skipped = end.n_skipped,
        "refinement finished"
    );
    Refinement {
        grouping: end.grouping,
        score: end.best,
        initial_score,
        n_iterations: params.max_iterations,
        n_accepted: end.n_accepted,
        n_skipped: end.n_skipped,
    }
}
