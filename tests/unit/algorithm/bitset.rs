//! Tests for fixed-width tile id sets

#[cfg(test)]
mod tests {
    use wavetile::algorithm::bitset::TileBitset;

    // Tests insertion and membership below and above the width
    // Verified by removing the width check in insert
    #[test]
    fn test_insert_and_contains() {
        let mut set = TileBitset::new(6);
        set.insert(0);
        set.insert(5);
        set.insert(6);

        assert!(set.contains(0));
        assert!(set.contains(5));
        assert!(!set.contains(3));
        assert!(!set.contains(6));
        assert_eq!(set.count(), 2);
        assert_eq!(set.capacity(), 6);
    }

    // Tests that a full set holds every id below the width
    // Verified by building the full set with one bit missing
    #[test]
    fn test_all_contains_every_id() {
        let set = TileBitset::all(4);
        assert_eq!(set.to_vec(), vec![0, 1, 2, 3]);
        assert!(!set.is_empty());
    }

    // Tests that intersect_with reports whether anything was removed
    // Verified by always returning true from intersect_with
    #[test]
    fn test_intersect_with_reports_change() {
        let mut set = TileBitset::from_ids(&[1, 3, 5], 8);
        let wider = TileBitset::from_ids(&[1, 2, 3, 5, 7], 8);
        assert!(!set.intersect_with(&wider));
        assert_eq!(set.to_vec(), vec![1, 3, 5]);

        let narrower = TileBitset::from_ids(&[3, 4], 8);
        assert!(set.intersect_with(&narrower));
        assert_eq!(set.to_vec(), vec![3]);
    }

    // Tests non-mutating intersection
    // Verified by returning self from intersection
    #[test]
    fn test_intersection() {
        let first = TileBitset::from_ids(&[1, 3, 5], 10);
        let second = TileBitset::from_ids(&[3, 5, 7], 10);

        let both = first.intersection(&second);
        assert_eq!(both.to_vec(), vec![3, 5]);
        assert_eq!(first.count(), 3);

        let none = first.intersection(&TileBitset::from_ids(&[0, 2], 10));
        assert!(none.is_empty());
    }

    // Tests nth walks members in ascending id order
    // Verified by iterating zeros instead of ones
    #[test]
    fn test_nth_ascending() {
        let set = TileBitset::from_ids(&[7, 2, 4], 9);
        assert_eq!(set.nth(0), Some(2));
        assert_eq!(set.nth(1), Some(4));
        assert_eq!(set.nth(2), Some(7));
        assert_eq!(set.nth(3), None);
    }

    // Tests subset relation
    // Verified by swapping the operands inside is_subset
    #[test]
    fn test_is_subset() {
        let small = TileBitset::from_ids(&[1, 2], 5);
        let large = TileBitset::from_ids(&[0, 1, 2, 4], 5);
        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(TileBitset::new(5).is_subset(&small));
    }

    // Tests the display format lists members
    // Verified by printing the raw bits instead
    #[test]
    fn test_display() {
        let set = TileBitset::from_ids(&[0, 2], 3);
        assert_eq!(set.to_string(), "TileBitset(2 tiles: [0, 2])");
    }
}
