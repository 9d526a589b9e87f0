//! Spectrum and phase views of the current component set

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use epicycles::fourier::{
    dc_component, phase_correlation, power_spectrum, sort_by_frequency, strongest, total_power,
    SpectrumBin,
};
use epicycles::FourierComponent;

/// Bar chart of the strongest harmonics plus a phase diagram
pub struct SpectrumView {
    /// Harmonics shown, strongest first
    pub bars: usize,
    pub color: Color32,
}

impl Default for SpectrumView {
    fn default() -> Self {
        Self {
            bars: 24,
            color: Color32::from_rgb(100, 255, 100),
        }
    }
}

/// Summary numbers shown under the charts
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpectrumSummary {
    pub dc_amplitude: f64,
    pub total_power: f64,
    pub phase_correlation: f64,
}

impl SpectrumView {
    /// Bins for the `bars` strongest harmonics, in ascending frequency
    pub fn bins(&self, components: &[FourierComponent]) -> Vec<SpectrumBin> {
        let mut top = strongest(components, self.bars);
        sort_by_frequency(&mut top);
        power_spectrum(&top)
    }

    pub fn summary(&self, components: &[FourierComponent]) -> SpectrumSummary {
        SpectrumSummary {
            dc_amplitude: dc_component(components).map_or(0.0, |c| c.amplitude),
            total_power: total_power(components),
            phase_correlation: phase_correlation(&strongest(components, self.bars)),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, components: &[FourierComponent]) {
        if components.is_empty() {
            ui.label("No drawing analysed");
            return;
        }

        let width = ui.available_width();
        self.draw_bars(ui, components, Vec2::new(width, 90.0));
        self.draw_phases(ui, components, Vec2::splat(width.min(160.0)));

        let summary = self.summary(components);
        ui.small(format!("DC amplitude: {:.2}", summary.dc_amplitude));
        ui.small(format!("Total power: {:.1}", summary.total_power));
        ui.small(format!("Phase correlation: {:.3}", summary.phase_correlation));
    }

    fn faded(&self, alpha: f32) -> Color32 {
        let c = self.color;
        Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (alpha * 255.0) as u8)
    }

    /// Amplitude bars; bar height is `sqrt(power / max_power)`
    fn draw_bars(&self, ui: &mut egui::Ui, components: &[FourierComponent], size: Vec2) {
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 2.0, Color32::from_black_alpha(180));

        let bins = self.bins(components);
        let max_power = bins.iter().map(|b| b.power).fold(0.0, f64::max);
        if bins.is_empty() || max_power <= 0.0 {
            return;
        }

        let bar_width = rect.width() / bins.len() as f32;
        for (i, bin) in bins.iter().enumerate() {
            let height = (bin.power / max_power).sqrt() as f32 * rect.height() * 0.9;
            let x = rect.left() + i as f32 * bar_width;
            let bar = Rect::from_min_max(
                Pos2::new(x + 1.0, rect.bottom() - height),
                Pos2::new(x + bar_width - 1.0, rect.bottom()),
            );
            let color = if bin.frequency == 0 { self.faded(0.4) } else { self.color };
            painter.rect_filled(bar, 0.0, color);
        }
    }

    /// Each harmonic as a dot at its phase angle, radius by amplitude
    fn draw_phases(&self, ui: &mut egui::Ui, components: &[FourierComponent], size: Vec2) {
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 2.0, Color32::from_black_alpha(180));

        let top = strongest(components, self.bars);
        let max_amplitude = top.iter().map(|c| c.amplitude).fold(0.0, f64::max);
        if max_amplitude <= 0.0 {
            return;
        }

        let center = rect.center();
        let max_radius = rect.width().min(rect.height()) / 2.0 - 6.0;
        painter.circle_stroke(center, max_radius, Stroke::new(0.5, self.faded(0.3)));

        let spoke = Stroke::new(1.0, self.faded(0.5));
        for c in &top {
            let radius = (c.amplitude / max_amplitude) as f32 * max_radius;
            let angle = c.phase as f32;
            let tip = center + Vec2::angled(angle) * radius;
            painter.line_segment([center, tip], spoke);
            painter.circle_filled(tip, 2.5, self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(frequency: i64, amplitude: f64, phase: f64) -> FourierComponent {
        FourierComponent {
            frequency,
            amplitude,
            phase,
        }
    }

    #[test]
    fn test_bins_keep_strongest_in_frequency_order() {
        let view = SpectrumView {
            bars: 3,
            ..SpectrumView::default()
        };
        let components = [
            component(4, 0.5, 0.0),
            component(-2, 3.0, 0.0),
            component(0, 10.0, 0.0),
            component(1, 2.0, 0.0),
        ];

        let bins = view.bins(&components);
        let freqs: Vec<i64> = bins.iter().map(|b| b.frequency).collect();
        assert_eq!(freqs, vec![-2, 0, 1]);
        assert_eq!(bins[0].power, 9.0);
    }

    #[test]
    fn test_summary() {
        let view = SpectrumView::default();
        let components = [component(0, 3.0, 0.0), component(1, 4.0, 0.0)];

        let summary = view.summary(&components);
        assert_eq!(summary.dc_amplitude, 3.0);
        assert_eq!(summary.total_power, 25.0);
        assert_eq!(summary.phase_correlation, 1.0);

        assert_eq!(view.summary(&[]), SpectrumSummary::default());
    }
}
