// src/math/geometry/raster.rs
use crate::math::types::{Field2D, Rgba};
use bevy::log::{debug, warn};

/// Statistik der Vorwärtsabbildung in ein Raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterCoverage {
    /// Anzahl verschiedener beschriebener Pixel
    pub written: usize,
    /// Schreibzugriffe auf bereits beschriebene Pixel (Aliasing, letzter gewinnt)
    pub collisions: usize,
    /// Quellzellen außerhalb des Rasters
    pub out_of_bounds: usize,
    /// Unbeschriebene Pixel innerhalb des eingeschriebenen Kreises
    pub interior_gaps: usize,
}

impl RasterCoverage {
    pub fn log(&self, label: &str) {
        debug!(
            "{}: {} pixels written, {} collisions, {} out of bounds",
            label, self.written, self.collisions, self.out_of_bounds
        );
        if self.interior_gaps > 0 {
            warn!(
                "{}: {} pixels inside the circle stayed empty; raise the resolution to close the gaps.",
                label, self.interior_gaps
            );
        }
    }
}

/// Quadratisches RGBA-Bild. Zeile 0 liegt unten (Ursprung links unten).
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub pixels: Field2D<Rgba>,
    pub coverage: RasterCoverage,
    /// Halbe Kantenlänge in Weltkoordinaten; das Bild deckt `[-extent, extent]²` ab.
    pub extent: f32,
    /// Einheitskreis als Umriss mitzeichnen.
    pub unit_circle: bool,
}

impl Raster {
    pub fn side(&self) -> usize {
        self.pixels.side()
    }

    /// RGBA8-Daten, Zeile für Zeile von oben nach unten (Bildkonvention).
    pub fn to_rgba8_top_down(&self) -> Vec<u8> {
        let side = self.side();
        (0..side)
            .rev()
            .flat_map(|y| self.pixels.row(y).iter().flat_map(|p| p.to_u8()))
            .collect()
    }
}

#[cfg(test)]
impl Raster {
    /// Pixel an `(x, y)`, `y` von unten gezählt.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&Rgba> {
        self.pixels.get(y, x)
    }
}

/// Schreibt Farben an Zielpixel; `None` markiert Quellzellen außerhalb des Rasters.
///
/// Spätere Zellen überschreiben frühere.
pub fn scatter_into_raster(
    side: usize,
    targets: impl IntoIterator<Item = (Option<(usize, usize)>, Rgba)>,
    inside_disc: impl Fn(usize, usize) -> bool,
) -> (Field2D<Rgba>, RasterCoverage) {
    let mut pixels = vec![Rgba::TRANSPARENT; side * side];
    let mut touched = vec![false; side * side];
    let mut coverage = RasterCoverage::default();

    for (target, color) in targets {
        let Some((x, y)) = target else {
            coverage.out_of_bounds += 1;
            continue;
        };
        let index = y * side + x;
        if touched[index] {
            coverage.collisions += 1;
        } else {
            touched[index] = true;
            coverage.written += 1;
        }
        pixels[index] = color;
    }

    coverage.interior_gaps = (0..side * side)
        .filter(|&i| !touched[i] && inside_disc(i % side, i / side))
        .count();

    let field = Field2D::from_fn(side, |row, col| pixels[row * side + col]);
    (field, coverage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_counts_collisions_and_misses() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let blue = Rgba::new(0.0, 0.0, 1.0, 1.0);
        let targets = vec![
            (Some((0, 0)), red),
            (Some((0, 0)), blue),
            (None, red),
            (Some((1, 1)), red),
        ];
        let (pixels, coverage) = scatter_into_raster(2, targets, |_, _| true);
        assert_eq!(coverage.written, 2);
        assert_eq!(coverage.collisions, 1);
        assert_eq!(coverage.out_of_bounds, 1);
        assert_eq!(coverage.interior_gaps, 2);
        // letzter Schreibzugriff gewinnt
        assert_eq!(pixels[(0, 0)], blue);
        assert_eq!(pixels[(0, 1)], Rgba::TRANSPARENT);
    }

    #[test]
    fn test_rgba8_is_flipped_to_top_down() {
        let (pixels, coverage) = scatter_into_raster(
            2,
            vec![(Some((0, 0)), Rgba::new(1.0, 0.0, 0.0, 1.0))],
            |_, _| false,
        );
        let raster = Raster {
            pixels,
            coverage,
            extent: 1.0,
            unit_circle: false,
        };
        let bytes = raster.to_rgba8_top_down();
        assert_eq!(bytes.len(), 16);
        // Pixel (0, 0) liegt unten links, also in der zweiten Bildzeile
        assert_eq!(&bytes[8..12], &[255, 0, 0, 255]);
        assert_eq!(&bytes[0..4], &[255, 255, 255, 0]);
    }
}
