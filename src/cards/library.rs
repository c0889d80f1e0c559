//! Card library: read-only prototype lookup.
//!
//! The library is loaded externally and handed to the engine; the engine
//! never mutates it. Abilities that pick replacement cards consult it
//! through deterministic, key-sorted candidate lists.

use rustc_hash::FxHashMap;

use super::definition::{CardKey, CardPrototype, Faction};

/// Read-only collection of card prototypes keyed by `(mould_id, variant)`.
///
/// ## Example
///
/// ```
/// use duelcore::cards::{CardKey, CardLibrary, CardPrototype, CardStats, CreatureType, Faction};
///
/// let mut library = CardLibrary::new();
/// library.register(CardPrototype::new(
///     CardKey::standard(1),
///     "Ember Whelp",
///     CardStats {
///         defense: 2,
///         damage: 1,
///         cost: 1,
///         faction: Faction::Fire,
///         creature_type: CreatureType::Light,
///     },
/// ));
///
/// assert_eq!(library.get(CardKey::standard(1)).unwrap().name, "Ember Whelp");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    cards: FxHashMap<CardKey, CardPrototype>,
}

impl CardLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prototype.
    ///
    /// Panics if a card with the same key already exists; the library is
    /// assembled once at load time, before any match runs.
    pub fn register(&mut self, proto: CardPrototype) {
        if self.cards.contains_key(&proto.key) {
            panic!("Card with key {} already registered", proto.key);
        }
        self.cards.insert(proto.key, proto);
    }

    /// Get a prototype by key.
    #[must_use]
    pub fn get(&self, key: CardKey) -> Option<&CardPrototype> {
        self.cards.get(&key)
    }

    /// Check whether a key is registered.
    #[must_use]
    pub fn contains(&self, key: CardKey) -> bool {
        self.cards.contains_key(&key)
    }

    /// Number of registered prototypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate all prototypes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &CardPrototype> {
        self.cards.values()
    }

    /// Candidates for unit replacement: same faction, strictly higher cost.
    ///
    /// Sorted by key so the candidate order (and therefore any seeded pick
    /// into it) is identical on every node.
    #[must_use]
    pub fn stronger_than(&self, faction: Faction, cost: i32) -> Vec<&CardPrototype> {
        let mut candidates: Vec<&CardPrototype> = self
            .cards
            .values()
            .filter(|p| p.stats.faction == faction && p.stats.cost > cost)
            .collect();
        candidates.sort_by_key(|p| p.key);
        candidates
    }
}
