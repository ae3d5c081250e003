use macroquad::math::DVec2;

use super::{SCENT_DECAY, SCENT_STRENGTH};

/// Decaying trail grid. One cell covers a `cell_size` square of the play area;
/// cells are stored row-major in a flat buffer.
#[derive(Clone, Debug)]
pub struct ScentField {
    cols: usize,
    rows: usize,
    cell_size: f64,
    data: Vec<f64>,
}

impl ScentField {
    pub fn new(width: f64, height: f64, cell_size: f64) -> Self {
        let cols = (width / cell_size).ceil().max(0.0) as usize;
        let rows = (height / cell_size).ceil().max(0.0) as usize;
        Self {
            cols,
            rows,
            cell_size,
            data: vec![0.0; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Grid cell containing `pos`, or `None` outside the grid.
    fn cell_of(&self, pos: DVec2) -> Option<(isize, isize)> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return None;
        }
        let col = (pos.x / self.cell_size).floor() as isize;
        let row = (pos.y / self.cell_size).floor() as isize;
        self.index(col, row).map(|_| (col, row))
    }

    #[inline(always)]
    fn index(&self, col: isize, row: isize) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn intensity_at(&self, col: usize, row: usize) -> Option<f64> {
        self.index(col as isize, row as isize).map(|i| self.data[i])
    }

    /// Intensity of the cell containing `pos`.
    pub fn intensity_at_pos(&self, pos: DVec2) -> Option<f64> {
        self.cell_of(pos)
            .and_then(|(col, row)| self.index(col, row))
            .map(|i| self.data[i])
    }

    pub fn max_intensity(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Sets the cell under `pos` to full strength. No-op outside the grid.
    pub fn deposit(&mut self, pos: DVec2) {
        if let Some(i) = self
            .cell_of(pos)
            .and_then(|(col, row)| self.index(col, row))
        {
            self.data[i] = SCENT_STRENGTH;
        }
    }

    pub fn decay(&mut self) {
        for cell in &mut self.data {
            *cell *= SCENT_DECAY;
        }
    }

    /// Offset `(dx, dy)` of the strongest of the eight cells around `pos`.
    ///
    /// Neighbors are scanned `dx`-major from `(-1, -1)` to `(1, 1)` and only a
    /// strictly stronger cell replaces the current best, so ties go to the
    /// first one scanned. Returns `None` when no neighbor holds any scent or
    /// `pos` is off the grid.
    pub fn strongest_neighbor_direction(&self, pos: DVec2) -> Option<(i32, i32)> {
        let (col, row) = self.cell_of(pos)?;
        let mut best_strength = 0.0;
        let mut best_dir = None;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(i) = self.index(col + dx as isize, row + dy as isize) else {
                    continue;
                };
                if self.data[i] > best_strength {
                    best_strength = self.data[i];
                    best_dir = Some((dx, dy));
                }
            }
        }
        best_dir
    }

    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SCENT_CELL_SIZE;

    fn field() -> ScentField {
        ScentField::new(800.0, 600.0, SCENT_CELL_SIZE)
    }

    fn center_of(col: usize, row: usize) -> DVec2 {
        DVec2::new(
            (col as f64 + 0.5) * SCENT_CELL_SIZE,
            (row as f64 + 0.5) * SCENT_CELL_SIZE,
        )
    }

    #[test]
    fn grid_covers_partial_cells() {
        let f = ScentField::new(810.0, 590.0, SCENT_CELL_SIZE);
        assert_eq!(f.cols(), 41);
        assert_eq!(f.rows(), 30);
    }

    #[test]
    fn deposit_sets_peak_and_ignores_out_of_bounds() {
        let mut f = field();
        f.deposit(DVec2::new(45.0, 65.0));
        assert_eq!(f.intensity_at(2, 3), Some(SCENT_STRENGTH));

        f.deposit(DVec2::new(-1.0, 10.0));
        f.deposit(DVec2::new(10.0, 600.0));
        f.deposit(DVec2::new(-100.0, -100.0));
        f.deposit(DVec2::new(f64::NAN, 10.0));
        assert_eq!(f.max_intensity(), SCENT_STRENGTH);
        assert_eq!(f.data.iter().filter(|&&c| c > 0.0).count(), 1);
    }

    #[test]
    fn deposit_overwrites_instead_of_accumulating() {
        let mut f = field();
        let pos = DVec2::new(100.0, 100.0);
        f.deposit(pos);
        f.deposit(pos);
        assert_eq!(f.intensity_at_pos(pos), Some(SCENT_STRENGTH));
    }

    #[test]
    fn decay_is_geometric_and_never_negative() {
        let mut f = field();
        let pos = center_of(5, 5);
        f.deposit(pos);
        let mut previous = SCENT_STRENGTH;
        for _ in 0..500 {
            f.decay();
            let current = f.intensity_at_pos(pos).unwrap();
            assert!(current >= 0.0);
            assert!(current <= previous);
            previous = current;
        }
        let expected = SCENT_STRENGTH * SCENT_DECAY.powi(500);
        assert!((previous - expected).abs() < 1e-9);
    }

    #[test]
    fn decay_of_empty_field_stays_empty() {
        let mut f = field();
        for _ in 0..10 {
            f.decay();
        }
        assert!(f.data.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn direction_points_to_strongest_neighbor() {
        let mut f = field();
        f.deposit(center_of(11, 10));
        f.decay();
        f.deposit(center_of(9, 9));
        assert_eq!(f.strongest_neighbor_direction(center_of(10, 10)), Some((-1, -1)));
    }

    #[test]
    fn direction_ignores_center_and_empty_neighborhood() {
        let mut f = field();
        f.deposit(center_of(10, 10));
        assert_eq!(f.strongest_neighbor_direction(center_of(10, 10)), None);
    }

    #[test]
    fn direction_ties_go_to_first_in_scan_order() {
        let mut f = field();
        f.deposit(center_of(11, 11));
        f.deposit(center_of(9, 11));
        f.deposit(center_of(10, 9));
        // Scan order is (-1,-1), (-1,0), (-1,1), (0,-1), ... so (-1,1) wins.
        assert_eq!(f.strongest_neighbor_direction(center_of(10, 10)), Some((-1, 1)));
    }

    #[test]
    fn direction_skips_neighbors_outside_grid() {
        let mut f = field();
        f.deposit(center_of(1, 0));
        assert_eq!(f.strongest_neighbor_direction(center_of(0, 0)), Some((1, 0)));
        assert_eq!(f.strongest_neighbor_direction(DVec2::new(-5.0, 5.0)), None);
    }
}
