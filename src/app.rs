//! Application state and core logic for the sprint-lens TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive dashboard: the loaded report, the calibration value, and
//! navigation/view state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::calibration::CalibrationStore;
use crate::cli::CliConfig;
use crate::estimation;
use crate::models::{Mode, Overlay, Report, Story, StorySortMode};

/// Application state
pub struct App {
    pub report_path: PathBuf,
    pub report: Option<Report>,
    pub report_needs_reload: Arc<Mutex<bool>>,
    /// Hours a maximum-complexity story takes; source of every estimate.
    pub calibration_hours: f64,
    pub store: CalibrationStore,
    pub mode: Mode,
    pub overlay: Overlay,
    // Story list navigation
    pub selected_story_index: usize,
    pub story_scroll_offset: usize,
    pub story_sort_mode: StorySortMode,
    // Recalibration input
    pub input_buffer: String,
    pub input_error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &CliConfig, store: CalibrationStore, calibration_hours: f64) -> Self {
        let mut report = Report::load(&config.report_path).ok();
        if let Some(ref mut r) = report {
            estimation::apply_estimates(&mut r.stories, calibration_hours);
        }

        Self {
            report_path: config.report_path.clone(),
            report,
            report_needs_reload: Arc::new(Mutex::new(false)),
            calibration_hours,
            store,
            mode: Mode::default(),
            overlay: Overlay::default(),
            selected_story_index: 0,
            story_scroll_offset: 0,
            story_sort_mode: StorySortMode::default(),
            input_buffer: String::new(),
            input_error: None,
            should_quit: false,
        }
    }

    /// Number of stories in the loaded report.
    pub fn story_count(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.stories.len())
    }

    /// Indices into `report.stories` in display order for the current sort
    /// mode.
    pub fn sorted_story_indices(&self) -> Vec<usize> {
        let Some(report) = &self.report else {
            return Vec::new();
        };
        let mut indices: Vec<usize> = (0..report.stories.len()).collect();
        match self.story_sort_mode {
            StorySortMode::Id => {
                indices.sort_by_key(|&i| report.stories[i].id);
            }
            StorySortMode::Hours => {
                indices.sort_by(|&a, &b| {
                    let (sa, sb) = (&report.stories[a], &report.stories[b]);
                    sb.estimated_hours
                        .partial_cmp(&sa.estimated_hours)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(sa.id.cmp(&sb.id))
                });
            }
            StorySortMode::Complexity => {
                indices.sort_by(|&a, &b| {
                    let (sa, sb) = (&report.stories[a], &report.stories[b]);
                    sb.complexity
                        .partial_cmp(&sa.complexity)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(sa.id.cmp(&sb.id))
                });
            }
        }
        indices
    }

    /// Story currently under the cursor, in display order.
    pub fn selected_story(&self) -> Option<&Story> {
        let indices = self.sorted_story_indices();
        let &idx = indices.get(self.selected_story_index)?;
        self.report.as_ref().map(|r| &r.stories[idx])
    }

    pub fn select_next_story(&mut self) {
        let count = self.story_count();
        if count > 0 && self.selected_story_index + 1 < count {
            self.selected_story_index += 1;
        }
    }

    pub fn select_previous_story(&mut self) {
        self.selected_story_index = self.selected_story_index.saturating_sub(1);
    }

    /// Cycle the sort mode and move the cursor back to the top so the
    /// selection doesn't silently land on a different story.
    pub fn cycle_sort_mode(&mut self) {
        self.story_sort_mode = self.story_sort_mode.cycle();
        self.selected_story_index = 0;
        self.story_scroll_offset = 0;
    }

    /// Recalibrate: persist the new value and recompute every estimate from
    /// the raw stories. Derived view state survives; estimates do not.
    pub fn recalibrate(&mut self, hours: f64) -> std::io::Result<()> {
        self.store.save(hours)?;
        self.calibration_hours = hours;
        if let Some(ref mut report) = self.report {
            estimation::apply_estimates(&mut report.stories, hours);
        }
        Ok(())
    }

    /// Open the recalibration input, prefilled with the current value.
    pub fn open_recalibrate_input(&mut self) {
        self.mode = Mode::Recalibrate;
        self.input_buffer = crate::utils::format_hours(self.calibration_hours);
        self.input_error = None;
    }

    /// Validate and commit the recalibration input. Keeps the input open
    /// with an error message on invalid input.
    pub fn commit_recalibrate_input(&mut self) {
        match self.input_buffer.trim().parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours > 0.0 => {
                if let Err(e) = self.recalibrate(hours) {
                    self.input_error = Some(format!("Could not save calibration: {e}"));
                    return;
                }
                self.mode = Mode::Browse;
                self.input_buffer.clear();
                self.input_error = None;
            }
            _ => {
                self.input_error = Some("Enter a positive number of hours".to_string());
            }
        }
    }

    pub fn cancel_recalibrate_input(&mut self) {
        self.mode = Mode::Browse;
        self.input_buffer.clear();
        self.input_error = None;
    }

    /// Reload the report from disk if the watcher flagged it, reapplying
    /// estimates with the current calibration.
    pub fn reload_report_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.report_needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };

        if needs_reload {
            if let Ok(mut report) = Report::load(&self.report_path) {
                estimation::apply_estimates(&mut report.stories, self.calibration_hours);
                self.report = Some(report);
                let count = self.story_count();
                if count == 0 {
                    self.selected_story_index = 0;
                } else if self.selected_story_index >= count {
                    self.selected_story_index = count - 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metadata;
    use tempfile::tempdir;

    fn report_with(complexities: &[(u64, f64)]) -> Report {
        let mut stories: Vec<Story> = complexities
            .iter()
            .map(|&(id, c)| Story::for_tests(id, &format!("story {id}"), c))
            .collect();
        estimation::apply_estimates(&mut stories, 16.0);
        Report {
            metadata: Metadata {
                organization: "acme".to_string(),
                project: "rocket".to_string(),
                sprint: "\\rocket\\Iteration\\Sprint 14".to_string(),
            },
            stories,
        }
    }

    fn test_app(dir: &tempfile::TempDir, complexities: &[(u64, f64)]) -> App {
        let store = CalibrationStore::at_path(dir.path().join("calibration.json"));
        let config = CliConfig {
            report_path: dir.path().join("missing.json"),
            hours: None,
            recalibrate: false,
            skip_prompts: true,
        };
        let mut app = App::new(&config, store, 16.0);
        app.report = Some(report_with(complexities));
        app
    }

    #[test]
    fn test_sorted_story_indices_by_id() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir, &[(30, 1.0), (10, 5.0), (20, 3.0)]);
        app.story_sort_mode = StorySortMode::Id;
        let order: Vec<u64> = app
            .sorted_story_indices()
            .iter()
            .map(|&i| app.report.as_ref().unwrap().stories[i].id)
            .collect();
        assert_eq!(order, vec![10, 20, 30]);
    }

    #[test]
    fn test_sorted_story_indices_by_hours_desc() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir, &[(1, 1.0), (2, 5.0), (3, 3.0)]);
        app.story_sort_mode = StorySortMode::Hours;
        let order: Vec<u64> = app
            .sorted_story_indices()
            .iter()
            .map(|&i| app.report.as_ref().unwrap().stories[i].id)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_sorted_story_indices_complexity_ties_break_by_id() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir, &[(7, 3.0), (2, 3.0), (5, 5.0)]);
        app.story_sort_mode = StorySortMode::Complexity;
        let order: Vec<u64> = app
            .sorted_story_indices()
            .iter()
            .map(|&i| app.report.as_ref().unwrap().stories[i].id)
            .collect();
        assert_eq!(order, vec![5, 2, 7]);
    }

    #[test]
    fn test_selection_navigation_clamps() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir, &[(1, 1.0), (2, 2.0)]);
        assert_eq!(app.selected_story_index, 0);
        app.select_previous_story();
        assert_eq!(app.selected_story_index, 0);
        app.select_next_story();
        assert_eq!(app.selected_story_index, 1);
        app.select_next_story();
        assert_eq!(app.selected_story_index, 1);
    }

    #[test]
    fn test_selected_story_follows_sort_order() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir, &[(1, 1.0), (2, 5.0)]);
        app.story_sort_mode = StorySortMode::Hours;
        assert_eq!(app.selected_story().unwrap().id, 2);
        app.select_next_story();
        assert_eq!(app.selected_story().unwrap().id, 1);
    }

    #[test]
    fn test_cycle_sort_resets_cursor() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir, &[(1, 1.0), (2, 5.0), (3, 3.0)]);
        app.select_next_story();
        app.select_next_story();
        app.cycle_sort_mode();
        assert_eq!(app.selected_story_index, 0);
        assert_eq!(app.story_sort_mode, StorySortMode::Hours);
    }

    #[test]
    fn test_recalibrate_recomputes_and_persists() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir, &[(1, 5.0)]);
        let store = app.store.clone();
        let before = app.report.as_ref().unwrap().stories[0].estimated_hours;

        app.recalibrate(32.0).unwrap();
        let after = app.report.as_ref().unwrap().stories[0].estimated_hours;
        assert!(after > before);
        assert_eq!(app.calibration_hours, 32.0);
        assert_eq!(store.load().unwrap(), Some(32.0));
    }

    #[test]
    fn test_commit_recalibrate_rejects_invalid_input() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir, &[(1, 1.0)]);
        app.open_recalibrate_input();
        assert_eq!(app.mode, Mode::Recalibrate);
        assert_eq!(app.input_buffer, "16.0");

        app.input_buffer = "-2".to_string();
        app.commit_recalibrate_input();
        assert_eq!(app.mode, Mode::Recalibrate);
        assert!(app.input_error.is_some());

        app.input_buffer = "nonsense".to_string();
        app.commit_recalibrate_input();
        assert!(app.input_error.is_some());

        app.cancel_recalibrate_input();
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.calibration_hours, 16.0);
    }

    #[test]
    fn test_reload_clamps_selection() {
        let dir = tempdir().unwrap();
        let report_path = dir.path().join("res.json");
        let json = r#"{
            "metadata": {"organizacion": "o", "proyecto": "p", "sprint": "s"},
            "data": [{"id": 1, "titulo": "only", "complejidad": 2}]
        }"#;
        std::fs::write(&report_path, json).unwrap();

        let store = CalibrationStore::at_path(dir.path().join("calibration.json"));
        let config = CliConfig {
            report_path,
            hours: None,
            recalibrate: false,
            skip_prompts: true,
        };
        let mut app = App::new(&config, store, 16.0);
        app.report = Some(report_with(&[(1, 1.0), (2, 2.0), (3, 3.0)]));
        app.selected_story_index = 2;

        *app.report_needs_reload.lock().unwrap() = true;
        app.reload_report_if_needed();
        assert_eq!(app.story_count(), 1);
        assert_eq!(app.selected_story_index, 0);
        // Reload reapplied estimates with the current calibration
        let story = &app.report.as_ref().unwrap().stories[0];
        assert!(story.estimated_hours > 0.0);
    }
}
