//! Tests for terminal progress reporting

#[cfg(test)]
mod tests {
    use wavetile::io::progress::RunProgress;

    // Tests position tracks the reported collapse count
    // Verified by incrementing instead of setting the position
    #[test]
    fn test_update_sets_position() {
        let progress = RunProgress::hidden();
        progress.update(5);
        assert_eq!(progress.position(), 5);
        progress.update(12);
        assert_eq!(progress.position(), 12);
    }

    // Tests completion and abandonment keep the last position
    // Verified by resetting the bar on abandon
    #[test]
    fn test_finish_states() {
        let done = RunProgress::new(10, 42);
        done.update(10);
        done.complete();
        assert_eq!(done.position(), 10);

        let failed = RunProgress::new(10, 7);
        failed.update(3);
        failed.abandon("failed");
        assert_eq!(failed.position(), 3);
    }
}
