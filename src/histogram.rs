//! Frequency distribution of the pooled price observations
//!
//! Equal-width bins over `[min, max]` of both sources together, with counts
//! kept per source so the two lists can be overlaid.

use crate::dataset::{PriceSample, PriceSource};
use crate::error::{CestaError, Result};
use serde::Serialize;

/// One bin of the frequency distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    /// Exclusive, except for the last bin
    pub upper: f64,
    pub igor: usize,
    pub gladson: usize,
}

impl HistogramBin {
    pub fn count(&self, source: PriceSource) -> usize {
        match source {
            PriceSource::Igor => self.igor,
            PriceSource::Gladson => self.gladson,
        }
    }

    pub fn total(&self) -> usize {
        self.igor + self.gladson
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin every observation of `samples` into `bins` equal-width ranges
    ///
    /// When all observations are equal a single zero-width bin holds them.
    pub fn build(samples: &[&PriceSample], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(CestaError::domain("histogram needs at least one bin"));
        }

        let values = samples.iter().flat_map(|s| s.values().iter().copied());
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !(min.is_finite() && max.is_finite()) {
            return Err(CestaError::domain("histogram needs at least one observation"));
        }

        let width = (max - min) / bins as f64;
        let mut histogram = if width == 0.0 {
            Self {
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    igor: 0,
                    gladson: 0,
                }],
            }
        } else {
            Self {
                bins: (0..bins)
                    .map(|i| HistogramBin {
                        lower: min + width * i as f64,
                        upper: if i + 1 == bins {
                            max
                        } else {
                            min + width * (i + 1) as f64
                        },
                        igor: 0,
                        gladson: 0,
                    })
                    .collect(),
            }
        };

        let last = histogram.bins.len() - 1;
        for sample in samples {
            for &value in sample.values() {
                let index = if width == 0.0 {
                    0
                } else {
                    (((value - min) / width).floor() as usize).min(last)
                };
                let bin = &mut histogram.bins[index];
                match sample.source {
                    PriceSource::Igor => bin.igor += 1,
                    PriceSource::Gladson => bin.gladson += 1,
                }
            }
        }

        Ok(histogram)
    }

    pub fn total(&self, source: PriceSource) -> usize {
        self.bins.iter().map(|b| b.count(source)).sum()
    }
}
