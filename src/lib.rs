//! detview - Detection Results Viewer core
//!
//! Loads object-detection results (bounding boxes with class labels and
//! confidence scores) together with georeferenced tiles or a source image,
//! and derives everything a rendering surface needs: overlay rectangles,
//! the viewport fit region, heatmap samples, and an exportable report.
//! Rendering itself is an external collaborator attached through
//! [`viewport::ViewObserver`] and [`report::RenderReport`].

pub mod app;
pub mod config;
pub mod filter;
pub mod format;
pub mod geometry;
pub mod heatmap;
pub mod message;
pub mod model;
pub mod report;
pub mod selection;
pub mod theme;
pub mod viewport;

pub use app::{App, Phase};
pub use message::Message;
