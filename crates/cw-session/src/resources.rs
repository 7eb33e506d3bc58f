//! Resource counters the players adjust by hand.

use serde::{Deserialize, Serialize};

/// A tracked resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Food, mostly from fishing.
    Food,
    /// Drinking water, from rain.
    Water,
    /// Wood, for building the raft.
    Wood,
    /// Raft progress.
    Raft,
}

impl Resource {
    /// All resources in display order.
    pub const ALL: [Self; 4] = [Self::Food, Self::Water, Self::Wood, Self::Raft];

    /// Parse a resource name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" | "fish" => Some(Self::Food),
            "water" => Some(Self::Water),
            "wood" => Some(Self::Wood),
            "raft" => Some(Self::Raft),
            _ => None,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Water => "water",
            Self::Wood => "wood",
            Self::Raft => "raft",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Current resource counts. None of them go below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    food: u32,
    water: u32,
    wood: u32,
    raft: u32,
}

impl Resources {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a resource.
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Food => self.food,
            Resource::Water => self.water,
            Resource::Wood => self.wood,
            Resource::Raft => self.raft,
        }
    }

    /// Add `delta` (possibly negative) to a resource, saturating at zero.
    /// Returns the new value.
    pub fn adjust(&mut self, resource: Resource, delta: i64) -> u32 {
        let slot = match resource {
            Resource::Food => &mut self.food,
            Resource::Water => &mut self.water,
            Resource::Wood => &mut self.wood,
            Resource::Raft => &mut self.raft,
        };
        let next = i64::from(*slot)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX));
        *slot = u32::try_from(next).unwrap_or(u32::MAX);
        *slot
    }
}

impl std::fmt::Display for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = Resource::ALL
            .iter()
            .map(|r| format!("{r} {}", self.get(*r)))
            .collect();
        write!(f, "{}", parts.join(" | "))
    }
}
