//! Theme system for the viewer.
//!
//! Provides dark and light palettes plus the map, rectangle, and heat-layer
//! style values the rendering layer reads. A theme is an explicitly
//! constructed value handed to the renderer at startup; nothing here is a
//! process-wide singleton.

/// An RGBA color with components in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channel values.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

/// Spacing scale, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

/// Corner radius scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radius {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub round: f32,
}

/// Color roles used across the viewer chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub background_alt: Color,
    pub foreground: Color,
    pub foreground_muted: Color,
    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub border: Color,
    pub overlay: Color,
}

/// Theme choice - dark or light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Dark,
    Light,
}

/// Stroke/fill style for a detection rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    pub color: Color,
    pub weight: f32,
    pub fill_color: Color,
    pub fill_opacity: f32,
}

/// Presentation hints for the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStyle {
    pub initial_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub tile_opacity: f32,
}

/// Presentation hints for the activity heat layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatStyle {
    pub radius: f32,
    pub blur: f32,
    pub min_opacity: f32,
    /// Gradient stops from cold to hot, `(position, color)`.
    pub gradient: Vec<(f32, Color)>,
}

/// Application theme: a palette plus the derived overlay styles.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub choice: ThemeChoice,
    pub palette: Palette,
    pub spacing: Spacing,
    pub radius: Radius,
}

impl Theme {
    /// Create a dark theme.
    pub fn dark() -> Self {
        Self {
            choice: ThemeChoice::Dark,
            palette: Palette {
                background: Color::rgb8(0x05, 0x05, 0x08),
                background_alt: Color::rgb8(0x0C, 0x0C, 0x12),
                foreground: Color::rgb8(0xE4, 0xE5, 0xEA),
                foreground_muted: Color::rgb8(0x8A, 0x8C, 0x96),
                accent_primary: Color::rgb8(0x7D, 0xEF, 0xFF),
                accent_secondary: Color::rgb8(0xFF, 0x6B, 0x7A),
                border: Color::rgb8(0x40, 0x40, 0x54),
                overlay: Color::rgb8(0x00, 0x00, 0x00),
            },
            spacing: Self::spacing(),
            radius: Self::radius(),
        }
    }

    /// Create a light theme.
    pub fn light() -> Self {
        Self {
            choice: ThemeChoice::Light,
            palette: Palette {
                background: Color::rgb8(0xF5, 0xF5, 0xF7),
                background_alt: Color::rgb8(0xEA, 0xEA, 0xED),
                foreground: Color::rgb8(0x1F, 0x1F, 0x25),
                foreground_muted: Color::rgb8(0x5D, 0x5D, 0x65),
                accent_primary: Color::rgb8(0x6E, 0xC6, 0xFF),
                accent_secondary: Color::rgb8(0xFF, 0x7C, 0x8A),
                border: Color::rgb8(0xD0, 0xD0, 0xDC),
                overlay: Color::rgb8(0x00, 0x00, 0x00),
            },
            spacing: Self::spacing(),
            radius: Self::radius(),
        }
    }

    fn spacing() -> Spacing {
        Spacing {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }

    fn radius() -> Radius {
        Radius {
            sm: 6.0,
            md: 10.0,
            lg: 14.0,
            round: 999.0,
        }
    }

    /// Style for a detection rectangle. Selected rectangles get a heavier
    /// stroke and a denser fill.
    pub fn detection_style(&self, selected: bool) -> RectStyle {
        RectStyle {
            color: self.palette.accent_primary,
            weight: if selected { 2.0 } else { 1.0 },
            fill_color: self.palette.accent_primary,
            fill_opacity: if selected { 0.22 } else { 0.08 },
        }
    }

    /// Map surface hints: zoom range and tile overlay opacity.
    pub fn map_style(&self) -> MapStyle {
        MapStyle {
            initial_zoom: 16,
            min_zoom: 10,
            max_zoom: 18,
            tile_opacity: 0.9,
        }
    }

    /// Heat layer hints, cold-to-hot gradient included.
    pub fn heat_style(&self) -> HeatStyle {
        HeatStyle {
            radius: 55.0,
            blur: 35.0,
            min_opacity: 0.25,
            gradient: vec![
                (0.0, Color::TRANSPARENT),
                (0.2, Color::rgb8(0x22, 0xC5, 0x5E)),
                (0.4, Color::rgb8(0xA3, 0xE6, 0x35)),
                (0.6, Color::rgb8(0xFA, 0xCC, 0x15)),
                (0.8, Color::rgb8(0xFB, 0x92, 0x3C)),
                (1.0, Color::rgb8(0xEF, 0x44, 0x44)),
            ],
        }
    }
}
