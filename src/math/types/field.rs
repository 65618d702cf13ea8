// src/math/types/field.rs
use std::ops::Index;

/// Quadratisches, zeilenweise gespeichertes Gitter mit einem Wert pro Zelle.
///
/// Zeile = V- bzw. Radius-Achse, Spalte = U- bzw. Winkel-Achse
/// (dieselbe Anordnung wie ein Meshgrid aus `(u, v)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Field2D<T> {
    side: usize,
    cells: Vec<T>,
}

impl<T> Field2D<T> {
    /// Erzeugt ein `side x side` Feld aus einer Funktion `(zeile, spalte) -> Wert`.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let cells = (0..side * side).map(|i| f(i / side, i % side)).collect();
        Self { side, cells }
    }

    /// Seitenlänge des Gitters.
    pub fn side(&self) -> usize {
        self.side
    }

    /// `(zeilen, spalten)`
    pub fn shape(&self) -> (usize, usize) {
        (self.side, self.side)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Eine komplette Zeile.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    /// Alle Zellen in Zeilenreihenfolge (entspricht `ravel()`).
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Iteriert über `((zeile, spalte), &wert)`.
    pub fn iter_indexed(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| ((i / side, i % side), value))
    }

    /// Elementweise Abbildung auf ein neues Feld gleicher Form.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Field2D<U> {
        Field2D {
            side: self.side,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Elementweise Kombination zweier Felder gleicher Form.
    pub fn zip_map<U, V>(&self, other: &Field2D<U>, mut f: impl FnMut(&T, &U) -> V) -> Field2D<V> {
        assert_eq!(self.shape(), other.shape(), "fields must share their shape");
        Field2D {
            side: self.side,
            cells: self
                .cells
                .iter()
                .zip(other.cells.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }
}

#[cfg(test)]
impl<T> Field2D<T> {
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.side && col < self.side {
            self.cells.get(row * self.side + col)
        } else {
            None
        }
    }
}

impl<T> Index<(usize, usize)> for Field2D<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.side + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let field = Field2D::from_fn(3, |row, col| row * 10 + col);
        assert_eq!(field.shape(), (3, 3));
        assert_eq!(field.cells(), &[0, 1, 2, 10, 11, 12, 20, 21, 22]);
        assert_eq!(field[(2, 1)], 21);
        assert_eq!(field.row(1), &[10, 11, 12]);
        assert_eq!(field.get(3, 0), None);
    }

    #[test]
    fn test_map_and_zip_keep_shape() {
        let a = Field2D::from_fn(2, |row, col| (row + col) as f32);
        let b = a.map(|v| v * 2.0);
        let sum = a.zip_map(&b, |x, y| x + y);
        assert_eq!(sum.cells(), &[0.0, 3.0, 3.0, 6.0]);
        let indexed: Vec<_> = sum.iter_indexed().map(|(idx, _)| idx).collect();
        assert_eq!(indexed, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
