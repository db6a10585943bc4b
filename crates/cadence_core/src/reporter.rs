//! Aggregating listener with a line-oriented summary report.

use crate::listener::TestListener;
use std::fmt::Write as _;
use std::io::{self, Write};
use tracing::warn;

/// Listener that aggregates run statistics and prints a summary at suite end.
///
/// Tracks the count of cases ran and asserts passed, plus ordered lists of
/// failed assertion keys, timed-out case names, and expectations still
/// pending (declared via `expect` but never matched by a passing assertion).
/// Keys are `"<case>:<assertion>"`.
///
/// The output sink is any [`io::Write`]; embedders building custom reporting
/// can instead read the accessors after the run and skip the summary by
/// writing to [`io::sink`].
pub struct SummaryListener<W: Write> {
    out: W,
    current_case: String,
    cases_ran: usize,
    asserts_passed: usize,
    asserts_failed: Vec<String>,
    expected_pending: Vec<String>,
    cases_timed_out: Vec<String>,
}

impl SummaryListener<io::Stdout> {
    /// Summary listener writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SummaryListener<W> {
    /// Summary listener writing to the given sink.
    pub fn new(out: W) -> Self {
        Self {
            out,
            current_case: String::new(),
            cases_ran: 0,
            asserts_passed: 0,
            asserts_failed: Vec::new(),
            expected_pending: Vec::new(),
            cases_timed_out: Vec::new(),
        }
    }

    /// Clear all counters and lists, enabling reuse across runs.
    pub fn reset(&mut self) {
        self.current_case.clear();
        self.cases_ran = 0;
        self.asserts_passed = 0;
        self.asserts_failed.clear();
        self.expected_pending.clear();
        self.cases_timed_out.clear();
    }

    /// Number of cases that finished (including timed-out ones).
    pub fn cases_ran(&self) -> usize {
        self.cases_ran
    }

    /// Number of assertions that passed.
    pub fn asserts_passed(&self) -> usize {
        self.asserts_passed
    }

    /// Keys of failed assertions, in the order they failed.
    pub fn asserts_failed(&self) -> &[String] {
        &self.asserts_failed
    }

    /// Keys of expectations not yet matched by a passing assertion.
    pub fn expected_pending(&self) -> &[String] {
        &self.expected_pending
    }

    /// Names of cases a watchdog timed out, in order.
    pub fn cases_timed_out(&self) -> &[String] {
        &self.cases_timed_out
    }

    /// True when nothing failed, timed out, or is still expected.
    pub fn all_passed(&self) -> bool {
        self.asserts_failed.is_empty()
            && self.cases_timed_out.is_empty()
            && self.expected_pending.is_empty()
    }

    /// Render the summary the end-suite event prints.
    pub fn render_summary(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(s, "Finished running tests");
        let _ = writeln!(s, "Test cases ran: {}", self.cases_ran);
        let _ = writeln!(s, "Test cases timed out: {}", self.cases_timed_out.len());
        for name in &self.cases_timed_out {
            let _ = writeln!(s, "  {}", name);
        }
        let _ = writeln!(s, "Asserts passed: {}", self.asserts_passed);
        let _ = writeln!(s, "Asserts failed: {}", self.asserts_failed.len());
        for key in &self.asserts_failed {
            let _ = writeln!(s, "  {}", key);
        }
        let _ = writeln!(s, "Expects unmet: {}", self.expected_pending.len());
        for key in &self.expected_pending {
            let _ = writeln!(s, "  {}", key);
        }
        s
    }

    fn key(&self, assertion_name: &str) -> String {
        format!("{}:{}", self.current_case, assertion_name)
    }
}

impl<W: Write> TestListener for SummaryListener<W> {
    fn begin_case(&mut self, case_name: &str) {
        self.current_case = case_name.to_string();
    }

    fn end_case(&mut self) {
        self.cases_ran += 1;
    }

    fn assertion(&mut self, name: &str, passed: bool) {
        let key = self.key(name);
        if passed {
            self.asserts_passed += 1;
            // First match only; duplicate expectations each need their own
            // passing assertion.
            if let Some(pos) = self.expected_pending.iter().position(|k| *k == key) {
                self.expected_pending.remove(pos);
            }
        } else {
            self.asserts_failed.push(key);
        }
    }

    fn expectation(&mut self, name: &str) {
        let key = self.key(name);
        self.expected_pending.push(key);
    }

    fn timed_out(&mut self, case_name: &str) {
        self.cases_timed_out.push(case_name.to_string());
    }

    fn end_suite(&mut self) {
        let summary = self.render_summary();
        if let Err(e) = self.out.write_all(summary.as_bytes()) {
            warn!("Failed to write test summary: {}", e);
        }
    }
}
