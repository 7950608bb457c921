//! Per-workspace progress bar

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar over `total` workspaces
///
/// Returns `None` if quiet mode is enabled.
pub fn create_progress_bar(total: u64, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let bar = ProgressBar::new(total);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} workspaces {msg}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    Some(bar)
}

/// Finish the bar; a failed run clears it so the error stays readable
pub fn finish_progress(bar: Option<ProgressBar>, succeeded: bool) {
    if let Some(b) = bar {
        if succeeded {
            b.finish_with_message("done");
        } else {
            b.finish_and_clear();
        }
    }
}
