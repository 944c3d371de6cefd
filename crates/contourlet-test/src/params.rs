//! Regression test parameters and operations

use contourlet_core::Image;
use std::fmt::Debug;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run checks and record failures (default)
    #[default]
    Compare,
    /// Run checks and print the images under test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode, and
/// every failure recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "resampc")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create new regression test parameters with an explicit mode
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record_failure(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality of shape and samples
    ///
    /// In display mode both images are printed row by row.
    ///
    /// # Returns
    ///
    /// `true` if images are identical, `false` otherwise.
    pub fn compare_images<T>(&mut self, expected: &Image<T>, actual: &Image<T>) -> bool
    where
        T: Copy + Default + PartialEq + Debug,
    {
        self.index += 1;

        if self.display() {
            self.dump_image("expected", expected);
            self.dump_image("actual", actual);
        }

        if expected.dimensions() != actual.dimensions() {
            let (ew, eh) = expected.dimensions();
            let (aw, ah) = actual.dimensions();
            self.record_failure(format!(
                "Failure in {}_reg: image comparison for index {} - \
                 dimension mismatch: expected {}x{}, got {}x{}",
                self.test_name, self.index, ew, eh, aw, ah
            ));
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let e = expected.get_pixel_unchecked(x, y);
                let a = actual.get_pixel_unchecked(x, y);
                if e != a {
                    self.record_failure(format!(
                        "Failure in {}_reg: image comparison for index {} - \
                         sample mismatch at ({}, {}): expected {:?}, got {:?}",
                        self.test_name, self.index, x, y, e, a
                    ));
                    return false;
                }
            }
        }

        true
    }

    /// Print an image to stderr, one row per line
    fn dump_image<T>(&self, label: &str, image: &Image<T>)
    where
        T: Copy + Default + Debug,
    {
        eprintln!(
            "  [{}] {} ({}x{}):",
            self.index,
            label,
            image.width(),
            image.height()
        );
        for y in 0..image.height() {
            eprintln!("    {:?}", image.row(y));
        }
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
