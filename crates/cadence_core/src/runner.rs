//! High-level facade for defining and running a suite.

use crate::case::{CaseToken, TestCase};
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::listener::TestListener;
use crate::suite::{RunProgress, TestSuite};
use std::time::Duration;

/// Facade wrapping exactly one [`TestSuite`].
///
/// Constructed explicitly and owned by the embedder's entry point; there is
/// no global instance. Cases and listeners are registered up front, then
/// [`TestRunner::run`] drives the suite.
pub struct TestRunner {
    suite: TestSuite,
    default_timeout: Duration,
}

impl TestRunner {
    /// Create a runner with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&HarnessConfig::default())
    }

    /// Create a runner from a loaded [`HarnessConfig`].
    pub fn with_config(config: &HarnessConfig) -> Self {
        Self {
            suite: TestSuite::new(config.suite.name.clone()),
            default_timeout: config.timeout.default_case_timeout(),
        }
    }

    /// Register a case with the wrapped suite.
    pub fn add_case(&mut self, case: impl TestCase + 'static) {
        self.suite.add_case(case);
    }

    /// Register a listener with the wrapped suite.
    pub fn add_listener(&mut self, listener: impl TestListener + 'static) {
        self.suite.add_listener(listener);
    }

    /// Set the per-case timeout budget.
    ///
    /// The harness keeps no clock; this value parameterizes an external
    /// watchdog that decides when to call [`TestRunner::force_timeout`].
    pub fn set_default_timeout(&mut self, timeout: Duration) {
        self.default_timeout = timeout;
    }

    /// The per-case timeout budget for the external watchdog.
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Start the run. See [`TestSuite::run`].
    pub fn run(&mut self) -> Result<RunProgress> {
        self.suite.run()
    }

    /// Deliver a suspended case's completion signal. See
    /// [`TestSuite::resolve`].
    pub fn resolve(&mut self, token: CaseToken) -> Result<RunProgress> {
        self.suite.resolve(token)
    }

    /// Force a suspended case to time out. See
    /// [`TestSuite::force_timeout`].
    pub fn force_timeout(&mut self, token: CaseToken) -> Result<RunProgress> {
        self.suite.force_timeout(token)
    }

    /// Run a check on behalf of the suspended case. See
    /// [`TestSuite::check`].
    pub fn check(&mut self, token: CaseToken, name: &str, cond: bool) -> Result<bool> {
        self.suite.check(token, name, cond)
    }

    /// Declare an expectation on behalf of the suspended case. See
    /// [`TestSuite::expect`].
    pub fn expect(&mut self, token: CaseToken, name: &str) -> Result<()> {
        self.suite.expect(token, name)
    }

    /// The wrapped suite.
    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}
