use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Year → colour
// ---------------------------------------------------------------------------

/// Assigns one colour per year of the selected range, so a year keeps its
/// colour regardless of which other years have data.
#[derive(Debug, Clone)]
pub struct YearColors {
    first_year: i32,
    palette: Vec<Color32>,
}

impl YearColors {
    pub fn new((first_year, last_year): (i32, i32)) -> Self {
        let n = (last_year - first_year + 1).max(0) as usize;
        Self {
            first_year,
            palette: generate_palette(n),
        }
    }

    /// Colour for `year`; grey outside the range.
    pub fn color_for(&self, year: i32) -> Color32 {
        usize::try_from(year - self.first_year)
            .ok()
            .and_then(|i| self.palette.get(i))
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(43).len(), 43);
    }

    #[test]
    fn neighbouring_years_differ() {
        let colors = YearColors::new((2000, 2003));
        assert_ne!(colors.color_for(2000), colors.color_for(2001));
        assert_eq!(colors.color_for(1999), Color32::GRAY);
        assert_eq!(colors.color_for(2004), Color32::GRAY);
    }
}
