// src/constant_time/tester.rs
use super::config::TestConfig;
use std::time::Instant;

// Structure to hold the results of timing analysis
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub is_constant_time: bool,
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            let end = Instant::now();
            let avg = (end - start).as_nanos() / self.num_iterations as u128;
            times.push(avg);
        }
        times
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    // Remove outliers using IQR method
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[(sorted.len() * 3) / 4] as f64;
        let iqr = q3 - q1;
        let lo = q1 - 1.5 * iqr;
        let hi = q3 + 1.5 * iqr;

        sorted
            .into_iter()
            .filter(|&t| (t as f64) >= lo && (t as f64) <= hi)
            .collect()
    }

    // Welch's t-test between two timing populations
    pub fn analyze(&self, times_a: &[u128], times_b: &[u128], config: &TestConfig) -> TimingAnalysis {
        let a = Self::remove_outliers(times_a);
        let b = Self::remove_outliers(times_b);

        let mean_a = Self::mean(&a);
        let mean_b = Self::mean(&b);
        let var_a = Self::variance(&a, mean_a);
        let var_b = Self::variance(&b, mean_b);

        let se = (var_a / a.len() as f64 + var_b / b.len() as f64).sqrt();
        let t_statistic = if se > 0.0 { (mean_a - mean_b) / se } else { 0.0 };
        let mean_ratio = if mean_b > 0.0 { mean_a / mean_b } else { 1.0 };

        let is_constant_time = mean_ratio >= config.mean_ratio_min
            && mean_ratio <= config.mean_ratio_max
            && t_statistic.abs() <= config.t_stat_threshold;

        TimingAnalysis {
            mean_a,
            mean_b,
            mean_ratio,
            t_statistic,
            is_constant_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics() {
        let times = [10u128, 12, 14];
        let mean = TimingTester::mean(&times);
        assert_eq!(mean, 12.0);
        assert_eq!(TimingTester::variance(&times, mean), 4.0);
    }

    #[test]
    fn test_remove_outliers() {
        let times = [10u128, 11, 10, 12, 11, 10, 1000];
        let kept = TimingTester::remove_outliers(&times);
        assert!(!kept.contains(&1000));
        assert_eq!(kept.len(), 6);
    }
}
