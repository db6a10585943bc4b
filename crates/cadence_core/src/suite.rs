//! Suite execution: the sequential, suspend-capable advancement machine.

use crate::case::{CaseContext, CaseToken, TestCase};
use crate::error::{HarnessError, Result};
use crate::listener::TestListener;
use tracing::{debug, warn};

/// Advancement state of a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteState {
    /// No run in progress; the case index is 0.
    Idle,

    /// A run is actively walking forward through cases. Never observable
    /// from outside a `run`/`resolve`/`force_timeout` call.
    Advancing,

    /// Control returned to the caller while a case's asynchronous work is
    /// outstanding. Leaves only when that case's token is resolved or
    /// timed out.
    Suspended,
}

/// Outcome of an advancement call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunProgress {
    /// Every case finished; the end-suite event has fired.
    Finished,

    /// The case identified by the token started but did not complete
    /// synchronously. The run resumes when the token is passed to
    /// [`TestSuite::resolve`] or [`TestSuite::force_timeout`].
    Suspended(CaseToken),
}

/// An ordered collection of cases executed sequentially with lifecycle
/// events fanned out to registered listeners.
///
/// Cases may complete synchronously inside `start` or suspend and complete
/// later through their [`CaseToken`]; the suite drives both through the same
/// iterative loop, so a fully synchronous suite finishes within a single
/// [`TestSuite::run`] call with no recursion per case.
///
/// The suite never measures time. A case that never signals completion
/// leaves the suite suspended forever unless an external watchdog calls
/// [`TestSuite::force_timeout`].
pub struct TestSuite {
    name: String,
    cases: Vec<Box<dyn TestCase>>,
    listeners: Vec<Box<dyn TestListener>>,
    state: SuiteState,
    /// Index of the case currently being run, in `[0, cases.len()]`.
    current: usize,
    /// Increments once per run; stamped into tokens so signals from an
    /// earlier run are rejected as stale.
    run_seq: u64,
}

impl TestSuite {
    /// Create an empty suite with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
            listeners: Vec::new(),
            state: SuiteState::Idle,
            current: 0,
            run_seq: 0,
        }
    }

    /// Register a case. Insertion order is execution order.
    ///
    /// Registration during a run is the caller's responsibility to avoid;
    /// the suite does not enforce it.
    pub fn add_case(&mut self, case: impl TestCase + 'static) {
        self.cases.push(Box::new(case));
    }

    /// Register a listener. Insertion order is fan-out order.
    pub fn add_listener(&mut self, listener: impl TestListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Suite name, reported in the begin-suite event.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current advancement state.
    pub fn state(&self) -> SuiteState {
        self.state
    }

    /// Number of registered cases.
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Start a run.
    ///
    /// Fires the begin-suite event, then advances through cases in order
    /// until one suspends or all have finished. An empty suite fires
    /// begin-suite and end-suite and returns `Finished`.
    pub fn run(&mut self) -> Result<RunProgress> {
        if self.state != SuiteState::Idle {
            return Err(HarnessError::RunInProgress);
        }

        self.run_seq += 1;
        self.current = 0;
        self.state = SuiteState::Advancing;
        debug!(suite = %self.name, cases = self.cases.len(), "starting run");

        let name = self.name.clone();
        self.fire_begin_suite(&name);

        Ok(self.advance())
    }

    /// Completion signal for the suspended case identified by `token`.
    ///
    /// Closes the case, fires its end-case event, and resumes advancement.
    /// Rejects tokens from a case that has already finished (including one
    /// forcibly timed out) with [`HarnessError::StaleCompletion`].
    pub fn resolve(&mut self, token: CaseToken) -> Result<RunProgress> {
        self.check_token(token)?;

        debug!(
            suite = %self.name,
            case = %self.cases[self.current].name(),
            "async completion received"
        );
        self.state = SuiteState::Advancing;
        self.finish_case(self.current);
        Ok(self.advance())
    }

    /// Watchdog entry point: give up on the suspended case identified by
    /// `token`.
    ///
    /// Fires the timed-out event to every listener, then closes the case,
    /// fires its end-case event, and resumes advancement. The abandoned
    /// case's own completion signal, if it arrives later, fails token
    /// validation and cannot advance the suite a second time.
    pub fn force_timeout(&mut self, token: CaseToken) -> Result<RunProgress> {
        self.check_token(token)?;

        let case_name = self.cases[self.current].name().to_string();
        warn!(suite = %self.name, case = %case_name, "case timed out, forcing advancement");
        self.fire_timed_out(&case_name);

        self.state = SuiteState::Advancing;
        self.finish_case(self.current);
        Ok(self.advance())
    }

    /// Run a named check on behalf of the suspended case identified by
    /// `token`.
    ///
    /// Lets a case's asynchronous continuation fire assertions between its
    /// `start` returning and its completion signal. Token rules match
    /// [`TestSuite::resolve`]. The condition is returned unchanged.
    pub fn check(&mut self, token: CaseToken, name: &str, cond: bool) -> Result<bool> {
        self.check_token(token)?;
        self.fire_assertion(name, cond);
        Ok(cond)
    }

    /// Declare an expectation on behalf of the suspended case identified by
    /// `token`. Token rules match [`TestSuite::resolve`].
    pub fn expect(&mut self, token: CaseToken, name: &str) -> Result<()> {
        self.check_token(token)?;
        self.fire_expectation(name);
        Ok(())
    }

    /// Core advancement loop. Entered with state `Advancing`.
    fn advance(&mut self) -> RunProgress {
        while self.current < self.cases.len() {
            let index = self.current;
            let case_name = self.cases[index].name().to_string();
            let token = CaseToken {
                run: self.run_seq,
                index,
            };

            self.fire_begin_case(&case_name);
            self.cases[index].open();

            // Start the case against a context that records whether it
            // completed before returning.
            let completed = {
                let mut cx = CaseContext::new(&mut self.listeners, &case_name, token);
                self.cases[index].start(&mut cx);
                cx.completed()
            };

            if !completed {
                self.state = SuiteState::Suspended;
                debug!(suite = %self.name, case = %case_name, "case suspended");
                return RunProgress::Suspended(token);
            }

            self.finish_case(index);
        }

        // End of suite: reset for the next run before announcing the end.
        self.current = 0;
        self.state = SuiteState::Idle;
        self.fire_end_suite();
        debug!(suite = %self.name, "run finished");
        RunProgress::Finished
    }

    /// Tear down a completed case and step past it.
    fn finish_case(&mut self, index: usize) {
        self.cases[index].close();
        self.fire_end_case();
        self.current = index + 1;
    }

    /// Validates that `token` identifies the currently suspended case.
    fn check_token(&self, token: CaseToken) -> Result<()> {
        if self.state == SuiteState::Idle {
            return Err(HarnessError::NoRunInProgress);
        }
        if self.state != SuiteState::Suspended
            || token.run != self.run_seq
            || token.index != self.current
        {
            let case = self
                .cases
                .get(token.index)
                .map(|c| c.name().to_string())
                .unwrap_or_else(|| format!("#{}", token.index));
            return Err(HarnessError::StaleCompletion { case });
        }
        Ok(())
    }

    // Event fan-out: synchronous, registration order, no fault containment.

    fn fire_begin_suite(&mut self, suite_name: &str) {
        for listener in &mut self.listeners {
            listener.begin_suite(suite_name);
        }
    }

    fn fire_end_suite(&mut self) {
        for listener in &mut self.listeners {
            listener.end_suite();
        }
    }

    fn fire_begin_case(&mut self, case_name: &str) {
        for listener in &mut self.listeners {
            listener.begin_case(case_name);
        }
    }

    fn fire_end_case(&mut self) {
        for listener in &mut self.listeners {
            listener.end_case();
        }
    }

    fn fire_timed_out(&mut self, case_name: &str) {
        for listener in &mut self.listeners {
            listener.timed_out(case_name);
        }
    }

    fn fire_assertion(&mut self, name: &str, passed: bool) {
        for listener in &mut self.listeners {
            listener.assertion(name, passed);
        }
    }

    fn fire_expectation(&mut self, name: &str) {
        for listener in &mut self.listeners {
            listener.expectation(name);
        }
    }
}
