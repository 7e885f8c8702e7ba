// Read-only board lookup used by the sizing use case
use crate::domain::board::BoardSpec;
use std::collections::BTreeMap;

pub trait BoardCatalog: Send + Sync {
    /// Look up a board by its catalog key
    fn board(&self, id: &str) -> Option<&BoardSpec>;

    /// All boards, ordered by id
    fn boards(&self) -> Vec<&BoardSpec>;
}

/// Catalog held fully in memory once loaded. Never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardCatalog {
    boards: BTreeMap<String, BoardSpec>,
}

impl InMemoryBoardCatalog {
    pub fn new(boards: impl IntoIterator<Item = BoardSpec>) -> Self {
        let boards = boards
            .into_iter()
            .map(|board| (board.id.clone(), board))
            .collect();
        Self { boards }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl BoardCatalog for InMemoryBoardCatalog {
    fn board(&self, id: &str) -> Option<&BoardSpec> {
        self.boards.get(id)
    }

    fn boards(&self) -> Vec<&BoardSpec> {
        self.boards.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::sample_board;

    #[test]
    fn test_lookup_and_ordering() {
        let other = BoardSpec {
            id: "another-board".to_string(),
            name: "Another".to_string(),
            ..sample_board()
        };
        let catalog = InMemoryBoardCatalog::new(vec![sample_board(), other]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.board("test-board").map(|b| b.name.as_str()), Some("Test Board"));
        assert!(catalog.board("missing").is_none());

        let ids: Vec<&str> = catalog.boards().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["another-board", "test-board"]);
    }
}
