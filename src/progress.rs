//! Progress bar display for the boilerplate copy step

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for file copies
pub struct CopyProgress {
    file_pb: ProgressBar,
}

impl CopyProgress {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);

        Self { file_pb }
    }

    /// Record one copied file
    pub fn file_copied(&self, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.len() > 50 {
            format!("...{}", &file_path[file_path.len() - 47..])
        } else {
            file_path.to_string()
        };
        self.file_pb.set_message(display_path);
        self.file_pb.inc(1);
    }

    /// Finish the bar after a successful run
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_lifecycle() {
        let progress = CopyProgress::new(2);
        progress.file_copied("a.txt");
        progress.file_copied("b.txt");
        progress.finish();
    }

    #[test]
    fn test_long_paths_truncated() {
        let progress = CopyProgress::new(1);
        progress.file_copied(&"x".repeat(120));
        progress.abandon();
    }
}
