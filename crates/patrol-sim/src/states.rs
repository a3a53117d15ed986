//! Dense set of [`AgentState`]s for cycle detection.
//!
//! The state space is `cells * 4`, small enough to hold as a bitmap
//! indexed by `rank(position) * 4 + facing`. Insertion and lookup are O(1)
//! with no hashing.

use patrol_core::{AgentState, TileMap};

/// Bitmap of seen agent states for a grid of fixed dimensions.
#[derive(Clone, Debug)]
pub struct StateSet {
    width: u32,
    height: u32,
    words: Vec<u64>,
    len: usize,
}

impl StateSet {
    /// An empty set sized for `map`.
    pub fn for_map<M: TileMap + ?Sized>(map: &M) -> Self {
        let bits = map.cell_count() * 4;
        Self {
            width: map.width(),
            height: map.height(),
            words: vec![0; bits.div_ceil(64)],
            len: 0,
        }
    }

    fn index(&self, state: AgentState) -> Option<usize> {
        let p = state.position;
        if p.x < 0 || p.y < 0 || p.x as u32 >= self.width || p.y as u32 >= self.height {
            return None;
        }
        let rank = (p.y as usize) * (self.width as usize) + (p.x as usize);
        Some(rank * 4 + state.facing.index())
    }

    /// Record `state`. Returns `true` if it was not already present.
    ///
    /// States outside the grid are never recorded and return `false`.
    pub fn insert(&mut self, state: AgentState) -> bool {
        let Some(i) = self.index(state) else {
            return false;
        };
        let (word, bit) = (i / 64, 1u64 << (i % 64));
        if self.words[word] & bit != 0 {
            return false;
        }
        self.words[word] |= bit;
        self.len += 1;
        true
    }

    /// Whether `state` has been recorded.
    pub fn contains(&self, state: AgentState) -> bool {
        self.index(state)
            .is_some_and(|i| self.words[i / 64] & (1u64 << (i % 64)) != 0)
    }

    /// Number of distinct states recorded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no state has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
