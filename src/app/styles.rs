use egui::Color32;

use crate::metrics::Tone;

/// Colors for advisory boxes and gauges
pub struct Palette {
    pub success: Color32,
    pub info: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub neutral: Color32,
    pub text_on_fill: Color32,
    pub accent: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            success: Color32::from_rgb(144, 238, 144),
            info: Color32::from_rgb(209, 236, 241),
            warning: Color32::from_rgb(255, 215, 0),
            danger: Color32::from_rgb(240, 128, 128),
            neutral: Color32::from_rgb(233, 236, 239),
            text_on_fill: Color32::from_rgb(33, 37, 41),
            accent: Color32::from_rgb(0, 123, 255),
        }
    }
}

impl Palette {
    pub fn fill(&self, tone: Tone) -> Color32 {
        match tone {
            Tone::Success => self.success,
            Tone::Info => self.info,
            Tone::Warning => self.warning,
            Tone::Danger => self.danger,
            Tone::Neutral => self.neutral,
        }
    }
}

/// Layout constants
pub struct PanelStyle {
    pub card_padding: f32,
    pub rounding: f32,
    pub metric_size: f32,
    pub gauge_radius: f32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            card_padding: 10.0,
            rounding: 5.0,
            metric_size: 24.0,
            gauge_radius: 80.0,
        }
    }
}
