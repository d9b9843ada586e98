//! Progress reporting for analysis runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rent_quorum_application::{Phase, ProgressNotifier};
use rent_quorum_domain::Source;
use std::sync::Mutex;

/// Reports progress with indicatif progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Query => "Phase 1: Query",
            Phase::Consensus => "Phase 2: Consensus",
            Phase::Report => "Phase 3: Report",
        }
    }

    fn phase_short_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Query => "Phase 1",
            Phase::Consensus => "Phase 2",
            Phase::Report => "Phase 3",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_display_name(phase));
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.phase_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_source_complete(&self, source: Source, answered: bool) {
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if answered {
                format!("{} {}", "v".green(), source)
            } else {
                format!("{} {} (no answer)", "x".red(), source)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Ok(mut bar) = self.phase_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.set_position(pb.length().unwrap_or(0));
            pb.finish_with_message(format!("{} complete!", Self::phase_short_name(phase).green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_display_name(phase).bold(),
            total_tasks
        );
    }

    fn on_source_complete(&self, source: Source, answered: bool) {
        if answered {
            eprintln!("  {} {}", "v".green(), source);
        } else {
            eprintln!("  {} {} (no answer)", "x".red(), source);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {}
}
