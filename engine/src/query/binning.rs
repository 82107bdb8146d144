//! Heatmap aggregation of counter results

use super::matrix::CounterResult;
use crate::calc::HitCount;

/// Default grid size: buckets [0,1) .. [4,5) and [5,inf)
pub const DEFAULT_RESOLUTION: usize = 6;

/// Square grid of result counts, `counts[y][x]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Heatmap {
    resolution: usize,
    counts: Vec<Vec<u32>>,
}

impl Heatmap {
    /// Empty grid; a resolution of 0 is treated as 1
    pub fn new(resolution: usize) -> Self {
        let resolution = resolution.max(1);
        Self {
            resolution,
            counts: vec![vec![0; resolution]; resolution],
        }
    }

    /// Count every result into exactly one cell
    pub fn bin<'a>(results: impl IntoIterator<Item = &'a CounterResult>, resolution: usize) -> Self {
        let mut heatmap = Self::new(resolution);
        for result in results {
            heatmap.add(result.x, result.y);
        }
        heatmap
    }

    pub fn add(&mut self, x: HitCount, y: HitCount) {
        let col = x.bucket(self.resolution);
        let row = y.bucket(self.resolution);
        self.counts[row][col] += 1;
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Rows indexed by y bucket
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.counts
    }

    pub fn count(&self, row: usize, col: usize) -> u32 {
        self.counts
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }

    /// sqrt(count / max), 0 for an empty cell or an empty grid
    pub fn intensity(&self, row: usize, col: usize) -> f64 {
        let max = self.max_count();
        if max == 0 {
            return 0.0;
        }
        (f64::from(self.count(row, col)) / f64::from(max)).sqrt()
    }

    /// Intensity of every cell, same layout as [`Heatmap::rows`]
    pub fn intensities(&self) -> Vec<Vec<f64>> {
        (0..self.resolution)
            .map(|row| (0..self.resolution).map(|col| self.intensity(row, col)).collect())
            .collect()
    }

    /// Bucket labels, "0-1" up to the open-ended last bucket
    pub fn labels(&self) -> Vec<String> {
        let last = self.resolution - 1;
        (0..self.resolution)
            .map(|i| {
                if i == last {
                    format!("{i}+")
                } else {
                    format!("{}-{}", i, i + 1)
                }
            })
            .collect()
    }
}

/// Bin results into a `resolution` x `resolution` grid
pub fn bin(results: &[CounterResult], resolution: usize) -> Heatmap {
    Heatmap::bin(results, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(x: HitCount, y: HitCount) -> CounterResult {
        CounterResult {
            name: "Mon".into(),
            x,
            y,
            speed_faster: false,
            types: vec![],
            best_move: None,
        }
    }

    #[test]
    fn test_bin_buckets() {
        let results = vec![
            result(HitCount::Hits(0.5), HitCount::Hits(4.2)),
            result(HitCount::Hits(2.0), HitCount::FivePlus),
            result(HitCount::FivePlus, HitCount::FivePlus),
            result(HitCount::Hits(2.9), HitCount::FivePlus),
        ];
        let heatmap = bin(&results, DEFAULT_RESOLUTION);

        assert_eq!(heatmap.count(4, 0), 1);
        assert_eq!(heatmap.count(5, 2), 2);
        assert_eq!(heatmap.count(5, 5), 1);
        assert_eq!(heatmap.total(), 4);
        assert_eq!(heatmap.max_count(), 2);
    }

    #[test]
    fn test_intensity() {
        let results = vec![
            result(HitCount::Hits(1.5), HitCount::Hits(1.5)),
            result(HitCount::Hits(1.5), HitCount::Hits(1.5)),
            result(HitCount::Hits(1.5), HitCount::Hits(1.5)),
            result(HitCount::Hits(1.5), HitCount::Hits(1.5)),
            result(HitCount::Hits(3.5), HitCount::Hits(0.5)),
        ];
        let heatmap = bin(&results, DEFAULT_RESOLUTION);
        assert!((heatmap.intensity(1, 1) - 1.0).abs() < 0.001);
        assert!((heatmap.intensity(0, 3) - 0.5).abs() < 0.001);
        assert_eq!(heatmap.intensity(5, 5), 0.0);
    }

    #[test]
    fn test_empty_grid() {
        let heatmap = bin(&[], DEFAULT_RESOLUTION);
        assert_eq!(heatmap.total(), 0);
        assert_eq!(heatmap.max_count(), 0);
        assert_eq!(heatmap.intensity(0, 0), 0.0);
        assert_eq!(heatmap.rows().len(), 6);
    }

    #[test]
    fn test_labels() {
        let heatmap = Heatmap::new(DEFAULT_RESOLUTION);
        assert_eq!(heatmap.labels(), vec!["0-1", "1-2", "2-3", "3-4", "4-5", "5+"]);
        assert_eq!(Heatmap::new(3).labels(), vec!["0-1", "1-2", "2+"]);
    }
}
