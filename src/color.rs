use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Fixed series colours so Cyprus and the EU look the same on every chart.
pub const CYPRUS: Color32 = Color32::from_rgb(0x0e, 0xa5, 0xe9);
pub const EU: Color32 = Color32::from_rgb(0xf9, 0x73, 0x16);
pub const ACCENT: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Stable sector-name → colour assignment for the sectoral charts.
#[derive(Debug, Clone)]
pub struct SectorColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SectorColors {
    pub fn new<'a>(sectors: impl Iterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = sectors.collect();
        let palette = generate_palette(names.len());
        let mapping = names
            .into_iter()
            .zip(palette)
            .map(|(name, color)| (name.to_string(), color))
            .collect();
        SectorColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, sector: &str) -> Color32 {
        self.mapping
            .get(sector)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_hues() {
        assert!(generate_palette(0).is_empty());
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        assert_ne!(palette[0], palette[3]);
    }

    #[test]
    fn sector_colors_are_stable() {
        let colors = SectorColors::new(["Services", "Industry"].into_iter());
        assert_eq!(colors.color_for("Services"), colors.color_for("Services"));
        assert_eq!(colors.color_for("unknown"), Color32::GRAY);
    }
}
