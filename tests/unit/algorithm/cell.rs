//! Tests for per-position candidate state

#[cfg(test)]
mod tests {
    use wavetile::AlgorithmError;
    use wavetile::algorithm::bitset::TileBitset;
    use wavetile::algorithm::cell::{Cell, CellState};

    // Tests a fresh cell allows every tile
    // Verified by creating cells with an empty candidate set
    #[test]
    fn test_new_cell_is_unresolved_with_all_candidates() {
        let cell = Cell::new(5);
        assert_eq!(cell.entropy(), Some(5));
        assert!(!cell.is_resolved());
        assert!(!cell.is_contradicted());
        assert_eq!(cell.candidates(), Some(&TileBitset::all(5)));
    }

    // Tests restriction narrows candidates and reports the change
    // Verified by replacing the candidates instead of intersecting
    #[test]
    fn test_restrict_narrows() {
        let mut cell = Cell::new(5);
        assert!(cell.restrict(&TileBitset::from_ids(&[1, 3], 5)));
        assert_eq!(cell.entropy(), Some(2));
        assert!(!cell.restrict(&TileBitset::from_ids(&[1, 3, 4], 5)));
        assert_eq!(cell.entropy(), Some(2));
    }

    // Tests an empty intersection marks the cell contradicted
    // Verified by checking is_contradicted on resolved cells only
    #[test]
    fn test_restrict_to_empty_is_contradiction() {
        let mut cell = Cell::new(4);
        cell.restrict(&TileBitset::new(4));
        assert!(cell.is_contradicted());
        assert_eq!(cell.entropy(), Some(0));
    }

    // Tests collapsing to a candidate resolves the cell
    // Verified by leaving the state unresolved after collapse
    #[test]
    fn test_collapse_to_candidate() {
        let mut cell = Cell::new(3);
        cell.collapse_to(2).expect("tile 2 is a candidate");

        assert!(cell.is_resolved());
        assert_eq!(cell.resolved(), Some(2));
        assert_eq!(cell.entropy(), None);
        assert_eq!(cell.state(), &CellState::Resolved(2));
    }

    // Tests collapse rejects ids outside the candidate set
    // Verified by removing the membership guard
    #[test]
    fn test_collapse_to_non_candidate_fails() {
        let mut cell = Cell::new(3);
        cell.restrict(&TileBitset::from_ids(&[0], 3));

        let result = cell.collapse_to(1);
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidTileIndex { index: 1, .. })
        ));
        assert!(!cell.is_resolved());
    }

    // Tests resolved cells ignore further restriction and collapse
    // Verified by intersecting resolved cells
    #[test]
    fn test_resolved_cell_is_final() {
        let mut cell = Cell::new(3);
        cell.collapse_to(0).expect("tile 0 is a candidate");

        assert!(!cell.restrict(&TileBitset::new(3)));
        assert_eq!(cell.resolved(), Some(0));
        assert!(!cell.is_contradicted());
        assert!(cell.collapse_to(1).is_err());
    }
}
