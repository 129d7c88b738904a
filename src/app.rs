//! Application state holder.
//!
//! Owns the loaded scene, filter state, and selection, and derives
//! everything a rendering surface needs: the filtered detection list, the
//! sorted label set, the viewport fit, heatmap samples, and the export
//! report. All mutation flows through [`App::update`]; collaborators get
//! read-only views and communicate intent back as messages.

use crate::filter::{self, FilterState};
use crate::heatmap::{self, HeatSample};
use crate::message::Message;
use crate::model::{Detection, Scene};
use crate::report::{self, Report};
use crate::selection::Selection;
use crate::viewport::{self, ViewObserver, ViewportFit};

/// Display phase of the session.
///
/// `Failed` is permanent: there is no retry, and a reload is the only
/// recovery path.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready(Scene),
    Failed(String),
}

/// The top-level application state.
#[derive(Default)]
pub struct App {
    phase: Phase,
    filters: FilterState,
    selection: Selection,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rendering surface to be told where to frame. It receives
    /// the current fit immediately so a late subscriber starts in sync.
    pub fn add_observer(&mut self, mut observer: Box<dyn ViewObserver>) {
        observer.viewport_changed(&self.viewport());
        self.observers.push(observer);
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The currently selected detection id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Apply a message. Any change to the viewport's inputs (scene,
    /// selection, filters) re-derives the fit and notifies observers.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SceneLoaded(scene) => {
                log::info!(
                    "scene ready: {} detections, {} tiles",
                    scene.detections.len(),
                    scene.tiles.len()
                );
                self.phase = Phase::Ready(scene);
                self.notify_viewport();
            }
            Message::LoadFailed(reason) => {
                log::error!("startup load failed: {reason}");
                self.phase = Phase::Failed(reason);
            }
            Message::DetectionClicked(id) => {
                self.selection.toggle(&id);
                self.notify_viewport();
            }
            Message::ClassFilterChanged(class) => {
                self.filters.class = class;
                self.notify_viewport();
            }
            Message::MinConfidenceChanged(threshold) => {
                self.filters.min_confidence = threshold;
                self.notify_viewport();
            }
            Message::ActivityToggled(enabled) => {
                // The heat layer floats above the map; framing is unchanged.
                self.filters.show_activity = enabled;
            }
        }
    }

    /// Detections passing the current filters, in load order. Empty unless
    /// the session is ready.
    pub fn filtered_detections(&self) -> Vec<&Detection> {
        match &self.phase {
            Phase::Ready(scene) => filter::apply_filters(&scene.detections, &self.filters),
            _ => Vec::new(),
        }
    }

    /// Distinct class labels in the loaded set, sorted for stable display.
    pub fn labels(&self) -> Vec<String> {
        match &self.phase {
            Phase::Ready(scene) => {
                let mut labels: Vec<String> =
                    filter::distinct_labels(&scene.detections).into_iter().collect();
                labels.sort();
                labels
            }
            _ => Vec::new(),
        }
    }

    /// The region the surface should currently frame.
    pub fn viewport(&self) -> ViewportFit {
        let filtered = self.filtered_detections();
        let tiles: &[_] = match &self.phase {
            Phase::Ready(scene) => &scene.tiles,
            _ => &[],
        };
        viewport::viewport_fit(&filtered, tiles, self.selection.selected())
    }

    /// Heatmap samples over the filtered detections. Empty while the
    /// activity overlay is off.
    pub fn heat_samples(&self) -> Vec<HeatSample> {
        if !self.filters.show_activity {
            return Vec::new();
        }
        heatmap::heatmap_samples(self.filtered_detections())
    }

    /// Build the export report over the current filtered view.
    pub fn export_report(&self) -> Report {
        let filtered = self.filtered_detections();
        let metrics = match &self.phase {
            Phase::Ready(scene) => scene.metrics.as_ref(),
            _ => None,
        };
        report::build_report(&filtered, metrics)
    }

    fn notify_viewport(&mut self) {
        let fit = self.viewport();
        for observer in &mut self.observers {
            observer.viewport_changed(&fit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ClassFilter;
    use crate::geometry::DEFAULT_REGION;
    use crate::model::{BoundingBox, GeoBox, Tile};
    use crate::report::ReportBody;
    use crate::viewport::{OVERVIEW_PADDING, SELECTION_PADDING};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn det(id: &str, label: &str, confidence: f64, min_lon: f64) -> Detection {
        Detection::new(
            id,
            label,
            confidence,
            BoundingBox::Geo(GeoBox::new(min_lon, 51.88, min_lon + 0.01, 51.89)),
        )
    }

    fn scene() -> Scene {
        Scene::new(
            vec![
                det("a-0", "car", 0.4, 4.30),
                det("a-1", "car", 0.6, 4.32),
                det("b-0", "bus", 0.9, 4.34),
            ],
            vec![Tile::new("t.png", [[51.80, 4.20], [52.00, 4.40]])],
        )
    }

    struct Recorder {
        fits: Rc<RefCell<Vec<ViewportFit>>>,
    }

    impl ViewObserver for Recorder {
        fn viewport_changed(&mut self, fit: &ViewportFit) {
            self.fits.borrow_mut().push(*fit);
        }
    }

    #[test]
    fn test_initial_phase_is_loading() {
        let app = App::new();
        assert!(matches!(app.phase(), Phase::Loading));
        assert!(app.filtered_detections().is_empty());
        assert_eq!(app.viewport().region, DEFAULT_REGION);
    }

    #[test]
    fn test_load_failure_is_terminal() {
        let mut app = App::new();
        app.update(Message::LoadFailed("JSON error: eof".to_string()));

        match app.phase() {
            Phase::Failed(reason) => assert!(reason.contains("JSON error")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_click_frames_selection_and_toggle_returns_to_overview() {
        let mut app = App::new();
        app.update(Message::SceneLoaded(scene()));

        app.update(Message::DetectionClicked("a-1".to_string()));
        let fit = app.viewport();
        assert_eq!(fit.padding, SELECTION_PADDING);
        assert_eq!(fit.region, det("a-1", "car", 0.6, 4.32).region());

        app.update(Message::DetectionClicked("a-1".to_string()));
        let fit = app.viewport();
        assert_eq!(fit.padding, OVERVIEW_PADDING);
        assert_eq!(app.selected_id(), None);
    }

    #[test]
    fn test_filtered_out_selection_is_ineffective() {
        let mut app = App::new();
        app.update(Message::SceneLoaded(scene()));
        app.update(Message::DetectionClicked("a-0".to_string()));

        // a-0 has confidence 0.4; raising the threshold filters it out.
        app.update(Message::MinConfidenceChanged(0.5));

        let fit = app.viewport();
        assert_eq!(fit.padding, OVERVIEW_PADDING);
        assert_eq!(app.selected_id(), Some("a-0"));
    }

    #[test]
    fn test_labels_are_sorted() {
        let mut app = App::new();
        app.update(Message::SceneLoaded(scene()));
        assert_eq!(app.labels(), ["bus", "car"]);
    }

    #[test]
    fn test_class_filter_narrows_list() {
        let mut app = App::new();
        app.update(Message::SceneLoaded(scene()));
        app.update(Message::ClassFilterChanged(ClassFilter::Label(
            "bus".to_string(),
        )));

        let filtered = app.filtered_detections();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "b-0");
    }

    #[test]
    fn test_heat_samples_follow_toggle() {
        let mut app = App::new();
        app.update(Message::SceneLoaded(scene()));

        assert!(app.heat_samples().is_empty());
        app.update(Message::ActivityToggled(true));
        assert_eq!(app.heat_samples().len(), 3);
        app.update(Message::ActivityToggled(false));
        assert!(app.heat_samples().is_empty());
    }

    #[test]
    fn test_observers_are_notified_on_viewport_inputs() {
        let fits = Rc::new(RefCell::new(Vec::new()));
        let mut app = App::new();
        app.add_observer(Box::new(Recorder { fits: fits.clone() }));
        assert_eq!(fits.borrow().len(), 1);

        app.update(Message::SceneLoaded(scene()));
        app.update(Message::DetectionClicked("b-0".to_string()));
        app.update(Message::ActivityToggled(true));

        // Load + click notify; the activity toggle does not move the map.
        assert_eq!(fits.borrow().len(), 3);
        assert_eq!(
            fits.borrow().last().unwrap().region,
            det("b-0", "bus", 0.9, 4.34).region()
        );
    }

    #[test]
    fn test_export_report_over_empty_filter_result() {
        let mut app = App::new();
        app.update(Message::SceneLoaded(scene()));
        app.update(Message::MinConfidenceChanged(0.95));

        let report = app.export_report();
        assert!(matches!(report.body, ReportBody::Placeholder(_)));
    }
}
