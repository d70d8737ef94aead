//! Tests for stage composition and confirmation gate handling

#[cfg(test)]
mod tests {
    use captiles::TilerError;
    use captiles::io::configuration::Settings;
    use captiles::io::prompt::AssumeYes;
    use captiles::pipeline::{Pipeline, PipelineSummary};
    use captiles::tiling::{ExtractionOutcome, Fingerprint};
    use captiles::workspace::CleanupOutcome;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::fs;
    use std::io::{Cursor, Write};
    use std::path::Path;
    use zip::write::SimpleFileOptions;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 99]));
        let mut buffer = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn write_archive(root: &Path, entries: &[(&str, Vec<u8>)]) {
        let file = fs::File::create(root.join("archive.zip")).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, data) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    fn quiet_settings(root: &Path) -> Settings {
        Settings {
            show_progress: false,
            ..Settings::new(root)
        }
    }

    // Tests a missing archive stops the run before any prompt
    // Verified by prompting before the archive check
    #[test]
    fn test_missing_archive_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let confirm = |_: &str, _: bool| -> bool { unreachable!("No prompt expected") };

        let result = Pipeline::new(quiet_settings(dir.path()), confirm).run();

        assert!(matches!(result, Err(TilerError::MissingArchive { .. })));
    }

    // Tests declining extraction halts every stage
    // Verified by continuing to tiling after a decline
    #[test]
    fn test_declined_extraction_halts() {
        let dir = tempfile::tempdir().unwrap();
        write_archive(dir.path(), &[("set/a.jpg", png_bytes(30, 30))]);
        let mut prompts = 0;
        let confirm = |_: &str, _: bool| {
            prompts += 1;
            false
        };

        let summary = Pipeline::new(quiet_settings(dir.path()), confirm)
            .run()
            .unwrap();

        assert!(matches!(summary, PipelineSummary::Halted));
        assert_eq!(prompts, 1);
        assert!(!dir.path().join("set").exists());
    }

    // Tests a corrupt archive aborts with an extraction error
    // Verified by treating extraction errors as per-item failures
    #[test]
    fn test_corrupt_archive_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("archive.zip"), b"not a zip").unwrap();

        let result = Pipeline::new(quiet_settings(dir.path()), AssumeYes).run();

        assert!(matches!(result, Err(TilerError::Archive { .. })));
    }

    // Tests a full unattended run tiles, survives a corrupt image and cleans up
    // Verified by deleting tile outputs during cleanup
    #[test]
    fn test_full_run() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let good = png_bytes(60, 30);
        write_archive(
            root,
            &[
                ("set/bus/1.jpg", good.clone()),
                ("set/bus/2.JPG", b"corrupt".to_vec()),
                ("set/labels.txt", b"bus".to_vec()),
            ],
        );

        let summary = Pipeline::new(quiet_settings(root), AssumeYes).run().unwrap();

        let PipelineSummary::Completed {
            extracted,
            extraction: ExtractionOutcome::Completed(report),
            cleanup: CleanupOutcome::Completed(cleaned),
        } = summary
        else {
            unreachable!("Expected every stage to complete");
        };
        assert_eq!(extracted, 3);
        assert_eq!(report.tiled_count(), 1);
        assert_eq!(report.failure_count(), 1);

        let output_dir = root.join(Fingerprint::of(&good).as_str());
        assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 9);
        assert!(root.join("archive.zip").is_file());
        assert!(root.join("set/labels.txt").is_file());
        assert!(!root.join("set/bus").exists());
        assert_eq!(cleaned.files_removed, 2);
        // set/bus and the corrupt image's empty fingerprint directory
        assert_eq!(cleaned.dirs_removed, 2);
        assert_eq!(cleaned.dirs_retained, 2);
        assert!(!root.join(Fingerprint::of(b"corrupt").as_str()).exists());
    }

    // Tests declining tiling still offers cleanup
    // Verified by returning early after a declined stage
    #[test]
    fn test_declined_processing_still_cleans() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_archive(root, &[("a.jpg", png_bytes(30, 30))]);
        let confirm = |prompt: &str, _: bool| !prompt.starts_with("Process");

        let summary = Pipeline::new(quiet_settings(root), confirm).run().unwrap();

        let PipelineSummary::Completed {
            extraction,
            cleanup,
            ..
        } = summary
        else {
            unreachable!("Expected pipeline to complete");
        };
        assert!(matches!(
            extraction,
            ExtractionOutcome::Declined { discovered: 1 }
        ));
        assert!(matches!(cleanup, CleanupOutcome::Completed(_)));
        assert!(!root.join("a.jpg").exists());
        assert!(root.join("archive.zip").exists());
    }
}
