use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Plain RGB triple, convertible to whichever backend colour type is needed.
pub type Rgb = (u8, u8, u8);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            (
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: set name → colour
// ---------------------------------------------------------------------------

/// Maps plotted set names to distinct colours, shared by the PNG renderer
/// and the interactive viewer so a set keeps one colour everywhere.
#[derive(Debug, Clone)]
pub struct SetColors {
    mapping: BTreeMap<String, Rgb>,
    default_color: Rgb,
}

impl SetColors {
    /// Assign palette colours to the given sets in order.
    pub fn new(sets: &[String]) -> Self {
        let palette = generate_palette(sets.len());
        let mapping: BTreeMap<String, Rgb> = sets
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        SetColors {
            mapping,
            default_color: (128, 128, 128),
        }
    }

    /// Look up the colour for a set name.
    pub fn color_for(&self, set: &str) -> Rgb {
        self.mapping.get(set).copied().unwrap_or(self.default_color)
    }
}
