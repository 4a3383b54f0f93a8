use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

pub type SiteId = u32;

/// Player index as it appears on the wire. `-1` marks "unknown".
pub type PlayerId = i32;

pub const UNKNOWN_PLAYER: PlayerId = -1;

/// Largest player count accepted from a message.
pub const MAX_PLAYERS: u32 = 1024;

/// Converts a wire player id into a ledger index, rejecting negatives.
pub fn player_index(player: PlayerId) -> Option<usize> {
    usize::try_from(player).ok()
}

/// An undirected edge between two sites.
///
/// The endpoints are stored in ascending order, so `River::new(a, b)` and
/// `River::new(b, a)` are the same value for equality, ordering and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct River {
    source: SiteId,
    target: SiteId,
}

impl River {
    pub fn new(a: SiteId, b: SiteId) -> Self {
        if a <= b {
            Self { source: a, target: b }
        } else {
            Self { source: b, target: a }
        }
    }

    pub fn source(&self) -> SiteId {
        self.source
    }

    pub fn target(&self) -> SiteId {
        self.target
    }

    pub fn endpoints(&self) -> [SiteId; 2] {
        [self.source, self.target]
    }

    pub fn touches(&self, site: SiteId) -> bool {
        self.source == site || self.target == site
    }

    /// The endpoint across the river from `site`, if `site` is on it.
    pub fn opposite(&self, site: SiteId) -> Option<SiteId> {
        if self.source == site {
            Some(self.target)
        } else if self.target == site {
            Some(self.source)
        } else {
            None
        }
    }
}

impl fmt::Display for River {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

pub fn canonicalize(a: SiteId, b: SiteId) -> River {
    River::new(a, b)
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Extension {
    Futures,
    Splurges,
    Options,
}

impl Extension {
    pub const fn bit(self) -> u8 {
        match self {
            Extension::Futures => 1,
            Extension::Splurges => 2,
            Extension::Options => 4,
        }
    }
}

/// Set of negotiated protocol extensions, stored as the wire bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extensions(u8);

impl Extensions {
    pub const fn empty() -> Self {
        Extensions(0)
    }

    /// Unknown bits are dropped.
    pub fn from_bits(bits: i64) -> Self {
        let known = Extension::iter().fold(0u8, |acc, ext| acc | ext.bit());
        Extensions((bits & i64::from(known)) as u8)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn with(self, ext: Extension) -> Self {
        Extensions(self.0 | ext.bit())
    }

    pub fn contains(self, ext: Extension) -> bool {
        self.0 & ext.bit() == ext.bit()
    }

    pub fn union(self, other: Extensions) -> Self {
        Extensions(self.0 | other.0)
    }

    pub fn intersection(self, other: Extensions) -> Self {
        Extensions(self.0 & other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Extension> {
        Extension::iter().filter(move |ext| self.contains(*ext))
    }
}

impl FromIterator<Extension> for Extensions {
    fn from_iter<I: IntoIterator<Item = Extension>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Extensions::empty(), |acc, ext| acc.with(ext))
    }
}

impl fmt::Display for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|ext| ext.to_string()).collect();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("+"))
        }
    }
}
