//! Tests for verbosity mapping and logger installation

#[cfg(test)]
mod tests {
    use simplelog::LevelFilter;
    use statica::io::logging::{init_logging, level_filter};

    // Tests each -v occurrence raises the level by one step
    // Verified by starting from Info instead of Warn
    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(0), LevelFilter::Warn);
        assert_eq!(level_filter(1), LevelFilter::Info);
        assert_eq!(level_filter(2), LevelFilter::Debug);
        assert_eq!(level_filter(3), LevelFilter::Trace);
        assert_eq!(level_filter(u8::MAX), LevelFilter::Trace);
    }

    // Tests a second installation leaves the first logger in place
    // Verified by reporting success unconditionally
    #[test]
    fn test_init_logging_once() {
        init_logging(0);
        assert!(!init_logging(2));
    }
}
