use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::types::{PlayerId, River, SiteId};

/// One move as reported by the server or chosen by this agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Pass { punter: PlayerId },
    Claim { punter: PlayerId, river: River },
    /// Claims every consecutive pair of sites along `route`.
    Splurge { punter: PlayerId, route: Vec<SiteId> },
    /// Second claim on a river someone already owns.
    Option { punter: PlayerId, river: River },
}

impl Move {
    pub fn pass(punter: PlayerId) -> Self {
        Move::Pass { punter }
    }

    pub fn punter(&self) -> PlayerId {
        match self {
            Move::Pass { punter }
            | Move::Claim { punter, .. }
            | Move::Splurge { punter, .. }
            | Move::Option { punter, .. } => *punter,
        }
    }

    /// Rivers this move takes, in route order for splurges.
    pub fn rivers(&self) -> Vec<River> {
        match self {
            Move::Pass { .. } => Vec::new(),
            Move::Claim { river, .. } | Move::Option { river, .. } => vec![*river],
            Move::Splurge { route, .. } => route_rivers(route),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass { .. })
    }
}

pub fn route_rivers(route: &[SiteId]) -> Vec<River> {
    route
        .iter()
        .tuple_windows()
        .map(|(a, b)| River::new(*a, *b))
        .collect()
}
