use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{River, SiteId};

/// The game map: sites, the mines among them and the rivers joining them.
///
/// Received once at setup and never mutated afterwards; only claim ledgers
/// change during play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub sites: Vec<SiteId>,
    pub mines: Vec<SiteId>,
    pub rivers: BTreeSet<River>,
}

impl Board {
    pub fn new(
        sites: Vec<SiteId>,
        mines: Vec<SiteId>,
        rivers: impl IntoIterator<Item = River>,
    ) -> Self {
        Self {
            sites,
            mines,
            rivers: rivers.into_iter().collect(),
        }
    }

    pub fn is_mine(&self, site: SiteId) -> bool {
        self.mines.contains(&site)
    }

    pub fn has_river(&self, river: &River) -> bool {
        self.rivers.contains(river)
    }

    /// Rivers with at least one endpoint in `sites`.
    pub fn rivers_touching(&self, sites: &HashSet<SiteId>) -> BTreeSet<River> {
        self.rivers
            .iter()
            .filter(|river| river.endpoints().iter().any(|site| sites.contains(site)))
            .copied()
            .collect()
    }

    /// Adjacency of the whole board.
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::build(&self.sites, &self.rivers)
    }
}

/// Sites reachable from `site` through exactly one river of `rivers`.
pub fn neighbors(site: SiteId, rivers: &BTreeSet<River>) -> BTreeSet<SiteId> {
    rivers
        .iter()
        .filter_map(|river| river.opposite(site))
        .collect()
}

/// Every endpoint of every river in `rivers`.
pub fn sites_on<'a>(rivers: impl IntoIterator<Item = &'a River>) -> BTreeSet<SiteId> {
    rivers
        .into_iter()
        .flat_map(|river| river.endpoints())
        .collect()
}

/// Neighbour lists for one edge set, built once and queried many times by
/// the path searches.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    node_neighbors: HashMap<SiteId, Vec<SiteId>>,
}

impl Adjacency {
    pub fn build<'a>(sites: &[SiteId], rivers: impl IntoIterator<Item = &'a River>) -> Self {
        let mut node_neighbors: HashMap<SiteId, Vec<SiteId>> =
            sites.iter().map(|site| (*site, Vec::new())).collect();
        for river in rivers {
            let [a, b] = river.endpoints();
            node_neighbors.entry(a).or_default().push(b);
            if a != b {
                node_neighbors.entry(b).or_default().push(a);
            }
        }
        Self { node_neighbors }
    }

    pub fn neighbors(&self, site: SiteId) -> &[SiteId] {
        self.node_neighbors
            .get(&site)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
