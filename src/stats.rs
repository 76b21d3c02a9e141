use std::fmt;
use std::time::Duration;

pub const QUINTILES: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Aggregate latency statistics over the successful probes of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub count:   usize,
    pub elapsed: Duration,
    pub spread:  Option<Spread>,
}

/// Latency distribution in milliseconds, present once any probe succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct Spread {
    pub min:       f64,
    pub max:       f64,
    pub mean:      f64,
    pub median:    f64,
    pub stdev:     f64,
    pub quintiles: [f64; 4],
}

impl Summary {
    pub fn new(samples: &[f64], elapsed: Duration) -> Self {
        Self {
            count:   samples.len(),
            elapsed: elapsed,
            spread:  Spread::new(samples),
        }
    }
}

impl Spread {
    pub fn new(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n    = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let var  = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        let mut quintiles = [0.0; 4];
        for (q, p) in quintiles.iter_mut().zip(QUINTILES.iter()) {
            *q = percentile(&sorted, *p)?;
        }

        Some(Self {
            min:       sorted[0],
            max:       sorted[sorted.len() - 1],
            mean:      mean,
            median:    percentile(&sorted, 0.5)?,
            stdev:     var.sqrt(),
            quintiles: quintiles,
        })
    }
}

/// Linearly interpolated percentile of an ascending slice, at rank
/// `n * p - 0.5` clamped to the bounds of the slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;

    let rank  = (sorted.len() as f64 * p - 0.5).max(0.0).min(last as f64);
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(last);
    let fract = rank - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fract)
}

pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- ping statistics ---")?;
        write!(f, "{} requests over {}ms", self.count, self.elapsed.as_millis())?;

        if let Some(Spread { min, max, mean, median, stdev, quintiles }) = &self.spread {
            writeln!(f)?;
            writeln!(f, "min {:.3}ms / max {:.3}ms / median {:.3}ms / avg {:.3}ms / stdev {:.3}ms", min, max, median, mean, stdev)?;
            let [q1, q2, q3, q4] = quintiles;
            write!(f, "quintiles {:.3}ms / {:.3}ms / {:.3}ms / {:.3}ms", q1, q2, q3, q4)?;
        }

        Ok(())
    }
}
