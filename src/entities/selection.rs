use serde::{Deserialize, Serialize};

pub const MAX_SELECTED: usize = 2;

/// Ordered set of at most two point indices, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    indices: Vec<usize>,
}

/// What a single `toggle` did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    Replaced { evicted: usize },
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Returns the selected pair as (oldest, newest) when the selection is full.
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.indices.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn toggle(&mut self, index: usize) -> Toggle {
        if let Some(position) = self.indices.iter().position(|i| *i == index) {
            self.indices.remove(position);
            return Toggle::Removed;
        }

        if self.indices.len() < MAX_SELECTED {
            self.indices.push(index);
            return Toggle::Added;
        }

        let evicted = self.indices.remove(0);
        self.indices.push(index);
        Toggle::Replaced { evicted }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}
