use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use crate::board::{Adjacency, Board, sites_on};
use crate::game::ClaimLedger;
use crate::types::{River, SiteId};

/// Shortest path lengths, in rivers, from every mine to every site it can
/// reach over one edge set.
///
/// Unreachable pairs are absent rather than zero, so a mine's own entry
/// (wave 0) is distinguishable from "no path".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceTable {
    waves: HashMap<SiteId, HashMap<SiteId, u32>>,
}

impl DistanceTable {
    /// Distances over every river on the board. Computed once per turn and
    /// shared by scoring and move selection.
    pub fn global(board: &Board) -> Self {
        Self::compute(board, &board.rivers)
    }

    pub fn compute(board: &Board, rivers: &BTreeSet<River>) -> Self {
        let adjacency = Adjacency::build(&board.sites, rivers);
        let mut waves = HashMap::new();
        for mine in &board.mines {
            waves
                .entry(*mine)
                .or_insert_with(|| expand_waves(&adjacency, *mine));
        }
        Self { waves }
    }

    /// Number of rivers on the shortest path, `None` if unreachable.
    pub fn wave(&self, mine: SiteId, site: SiteId) -> Option<u32> {
        self.waves.get(&mine)?.get(&site).copied()
    }

    pub fn squared(&self, mine: SiteId, site: SiteId) -> Option<u64> {
        self.wave(mine, site).map(|wave| u64::from(wave) * u64::from(wave))
    }

    /// True when a path of at least one river joins `mine` and `site`.
    pub fn connects(&self, mine: SiteId, site: SiteId) -> bool {
        self.wave(mine, site).is_some_and(|wave| wave > 0)
    }
}

/// Visits sites in increasing wave order from `mine`; each site is settled
/// the first time it is popped.
fn expand_waves(adjacency: &Adjacency, mine: SiteId) -> HashMap<SiteId, u32> {
    let mut settled: HashMap<SiteId, u32> = HashMap::new();
    let mut fringe = BinaryHeap::new();
    fringe.push(Reverse((0u32, mine)));

    while let Some(Reverse((wave, site))) = fringe.pop() {
        if settled.contains_key(&site) {
            continue;
        }
        settled.insert(site, wave);
        for next in adjacency.neighbors(site) {
            if !settled.contains_key(next) {
                fringe.push(Reverse((wave + 1, *next)));
            }
        }
    }
    settled
}

/// Scores every player on `board`, computing the board distances first.
pub fn score(board: &Board, ledger: &ClaimLedger) -> Vec<i64> {
    score_with(&DistanceTable::global(board), board, ledger.per_player())
}

/// Scores every player against a precomputed board distance table.
///
/// A player earns `distance²` for each (mine, site) pair where the site is an
/// endpoint of one of their rivers and their own rivers link it to the mine.
/// The distance credited is the board-wide shortest one, not the length of
/// the player's own path.
pub fn score_with(distances: &DistanceTable, board: &Board, claims: &[BTreeSet<River>]) -> Vec<i64> {
    claims
        .iter()
        .map(|owned| player_score(distances, board, owned))
        .collect()
}

pub fn player_score(distances: &DistanceTable, board: &Board, owned: &BTreeSet<River>) -> i64 {
    if owned.is_empty() {
        return 0;
    }
    let own_paths = DistanceTable::compute(board, owned);
    let reached = sites_on(owned);

    let mut total: u64 = 0;
    for mine in &board.mines {
        for site in &reached {
            if own_paths.connects(*mine, *site) {
                total += distances.squared(*mine, *site).unwrap_or(0);
            }
        }
    }
    i64::try_from(total).unwrap_or(i64::MAX)
}
