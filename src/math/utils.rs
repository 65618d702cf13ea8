// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const TAU: f32 = std::f32::consts::TAU;
    pub const PI: f32 = std::f32::consts::PI;
    /// Feste Helligkeit für kräftige Farben (HLS).
    pub const VIBRANT_LIGHTNESS: f32 = 0.5;
}

/// Eindimensionale Stützstellen
pub mod spacing {
    /// `count` gleichmäßig verteilte Werte von `start` bis einschließlich `end`.
    ///
    /// Bei `count == 1` wird nur `start` geliefert.
    pub fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f32;
                (0..count)
                    .map(|i| {
                        // Endpunkt exakt treffen, sonst summiert sich der Rundungsfehler
                        if i == count - 1 {
                            end
                        } else {
                            start + step * i as f32
                        }
                    })
                    .collect()
            }
        }
    }

    /// Flächentreue Radien: `sqrt(linspace(0, 1, count))`.
    ///
    /// Gleiche Indexschritte umschließen gleiche Kreisringflächen.
    pub fn sqrt_spacing(count: usize) -> Vec<f32> {
        linspace(0.0, 1.0, count).into_iter().map(f32::sqrt).collect()
    }
}
