//! Epicycle canvas widget
//!
//! Draws a `FourierSession` and captures the pointer strokes that feed it.
//!
//! ## Coordinate System
//!
//! Core points are canvas pixels measured from the widget's top-left
//! corner. The widget only offsets them by the widget position; all
//! geometry comes from the session.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use epicycles::{FourierSession, Point2D};

/// Display settings for the canvas
#[derive(Clone)]
pub struct CanvasSettings {
    /// Epicycle and trail color
    pub color: Color32,

    /// Background color
    pub background: Color32,

    /// Trail thickness in pixels
    pub line_width: f32,

    pub show_circles: bool,
    pub show_arms: bool,
    pub show_trail: bool,

    /// Raw pointer stroke
    pub show_drawing: bool,

    /// Equidistant samples fed to the transform
    pub show_samples: bool,

    /// Full reconstructed curve
    pub show_reconstruction: bool,

    /// Whether to show graticule (grid lines)
    pub show_graticule: bool,

    /// Don't draw a circle for the zero-frequency arm
    pub skip_dc: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(100, 255, 100),
            background: Color32::from_rgb(10, 20, 10),
            line_width: 2.0,
            show_circles: true,
            show_arms: true,
            show_trail: true,
            show_drawing: true,
            show_samples: false,
            show_reconstruction: true,
            show_graticule: true,
            skip_dc: true,
        }
    }
}

/// Circles smaller than this are not worth a draw call
const MIN_CIRCLE_RADIUS: f32 = 0.5;

/// Interactive epicycle display
#[derive(Default)]
pub struct EpicycleCanvas {
    pub settings: CanvasSettings,
}

impl EpicycleCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a core point to screen coordinates
    pub fn to_screen(&self, point: Point2D, rect: Rect) -> Pos2 {
        rect.min + Vec2::new(point.x as f32, point.y as f32)
    }

    /// Convert a screen position to a core point
    pub fn to_core(&self, pos: Pos2, rect: Rect) -> Point2D {
        let offset = pos - rect.min;
        Point2D::new(offset.x as f64, offset.y as f64)
    }

    /// Draw the session into all available space
    ///
    /// The returned response senses drags, so callers can feed pointer
    /// strokes back into the session.
    pub fn show(&self, ui: &mut egui::Ui, session: &FourierSession) -> egui::Response {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, self.settings.background);

        if self.settings.show_graticule {
            self.draw_graticule(&painter, rect);
        }
        if self.settings.show_drawing {
            self.draw_polyline(&painter, rect, session.drawing(), self.faded(0.35), 1.0);
        }
        if self.settings.show_samples {
            self.draw_samples(&painter, rect, session.equidistant_path());
        }
        if self.settings.show_reconstruction {
            self.draw_polyline(&painter, rect, session.reconstructed_path(), self.faded(0.25), 1.0);
        }
        if self.settings.show_circles || self.settings.show_arms {
            self.draw_epicycles(&painter, rect, session);
        }
        if self.settings.show_trail {
            self.draw_trail(&painter, rect, session);
        }

        response
    }

    fn faded(&self, alpha: f32) -> Color32 {
        let c = self.settings.color;
        Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (alpha * 255.0) as u8)
    }

    /// Draw the graticule (grid lines every 50 pixels)
    fn draw_graticule(&self, painter: &egui::Painter, rect: Rect) {
        let grid_color = Color32::from_rgba_unmultiplied(60, 80, 60, 60);
        let stroke = Stroke::new(0.5, grid_color);
        let spacing = 50.0;

        let mut x = rect.left();
        while x <= rect.right() {
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
            x += spacing;
        }
        let mut y = rect.top();
        while y <= rect.bottom() {
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
            y += spacing;
        }
    }

    fn draw_polyline(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        points: &[Point2D],
        color: Color32,
        width: f32,
    ) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p, rect)).collect();
        painter.add(egui::Shape::line(screen, Stroke::new(width, color)));
    }

    fn draw_samples(&self, painter: &egui::Painter, rect: Rect, points: &[Point2D]) {
        let color = self.faded(0.6);
        for p in points {
            painter.circle_filled(self.to_screen(*p, rect), 1.5, color);
        }
    }

    /// Draw the circles and arms of the current frame
    fn draw_epicycles(&self, painter: &egui::Painter, rect: Rect, session: &FourierSession) {
        let circle_stroke = Stroke::new(1.0, self.faded(0.3));
        let arm_stroke = Stroke::new(1.5, self.faded(0.8));

        for arm in session.frame() {
            // The DC arm only moves the chain to the centroid.
            if self.settings.skip_dc && arm.frequency == 0 {
                continue;
            }

            let center = self.to_screen(arm.center(), rect);
            let tip = self.to_screen(arm.position, rect);
            let radius = arm.amplitude as f32;

            if self.settings.show_circles && radius >= MIN_CIRCLE_RADIUS {
                painter.circle_stroke(center, radius, circle_stroke);
            }
            if self.settings.show_arms {
                painter.line_segment([center, tip], arm_stroke);
            }
        }
    }

    /// Draw the trail, fading from oldest to newest
    fn draw_trail(&self, painter: &egui::Painter, rect: Rect, session: &FourierSession) {
        let points: Vec<Pos2> = session
            .trail()
            .iter()
            .map(|p| self.to_screen(*p, rect))
            .collect();
        if points.len() < 2 {
            return;
        }

        let count = (points.len() - 1) as f32;
        for (i, pair) in points.windows(2).enumerate() {
            let alpha = (i + 1) as f32 / count;
            painter.line_segment([pair[0], pair[1]], Stroke::new(self.settings.line_width, self.faded(alpha)));
        }

        if let Some(&tip) = points.last() {
            painter.circle_filled(tip, self.settings.line_width * 1.5, self.settings.color);
        }
    }
}
