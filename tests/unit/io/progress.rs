//! Tests for the tiling progress bar

#[cfg(test)]
mod tests {
    use captiles::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a hidden manager still counts processed images
    // Verified by skipping the increment in complete_image
    #[test]
    fn test_hidden_manager_counts() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(3);

        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            pm.start_image(Path::new(name));
            pm.complete_image();
        }

        assert_eq!(pm.position(), 3);
        assert!(!pm.is_visible());
        pm.finish();
    }

    // Tests reinitialising restarts the count for a new run
    // Verified by reusing the previous bar
    #[test]
    fn test_initialize_restarts() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(2);
        pm.complete_image();
        pm.finish();

        pm.initialize(5);

        assert_eq!(pm.position(), 0);
    }

    // Tests default trait implementation and full call sequence
    // Verified by panicking on an empty batch
    #[test]
    fn test_progress_manager_default() {
        let mut pm = ProgressManager::default();

        pm.initialize(0);
        pm.finish();

        pm.initialize(1);
        pm.start_image(Path::new("set/captcha.jpg"));
        pm.println("Failed set/captcha.jpg: example");
        pm.complete_image();
        pm.finish();

        assert_eq!(pm.position(), 1);
    }
}
