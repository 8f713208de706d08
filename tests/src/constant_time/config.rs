// src/constant_time/config.rs

// Default configuration with thresholds
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub mean_ratio_min: f64,
    pub mean_ratio_max: f64,
    pub t_stat_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_min: 0.80,
            mean_ratio_max: 1.25,
            t_stat_threshold: 4.5,
            num_warmup: 50,
            num_samples: 40,
            num_iterations: 20,
        }
    }
}

// Builder methods for easy customization
impl TestConfig {
    pub fn with_mean_ratio_range(mut self, min: f64, max: f64) -> Self {
        self.mean_ratio_min = min;
        self.mean_ratio_max = max;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_samples(mut self, num_samples: usize, num_iterations: usize) -> Self {
        self.num_samples = num_samples;
        self.num_iterations = num_iterations;
        self
    }
}
