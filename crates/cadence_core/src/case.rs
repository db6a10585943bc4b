//! Test cases and the context they run against.

use crate::listener::TestListener;

/// One independently named unit of test logic.
///
/// `open` and `close` bracket a single execution and default to no-ops.
/// `start` begins the case's logic and either completes synchronously by
/// calling [`CaseContext::complete`] before returning, or returns without
/// completing, leaving the suite suspended until the case's
/// [`CaseToken`] is resolved externally (for example from a timer callback
/// that re-enters the embedder's event loop).
pub trait TestCase {
    /// Case name, used in events and in `"<case>:<assertion>"` keys.
    fn name(&self) -> &str;

    /// Per-case resource setup. Called before `start`.
    fn open(&mut self) {}

    /// Per-case teardown. Called only after the case's completion (or forced
    /// timeout) signal, before the end-case event.
    fn close(&mut self) {}

    /// Begin the case's logic.
    fn start(&mut self, cx: &mut CaseContext<'_>);
}

/// Handle identifying one pending case execution.
///
/// The only way to finish a case that suspended: pass the token to
/// [`crate::TestSuite::resolve`] (normal completion) or
/// [`crate::TestSuite::force_timeout`] (watchdog). Tokens are scoped to a
/// single run and case index; a token held past its case's completion is
/// rejected as stale, so a late signal from a timed-out case cannot advance
/// a case that has already moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseToken {
    pub(crate) run: u64,
    pub(crate) index: usize,
}

/// Execution context handed to [`TestCase::start`].
///
/// Routes assertion and expectation events to the suite's listeners and
/// carries the completion signal for the running case.
pub struct CaseContext<'a> {
    listeners: &'a mut [Box<dyn TestListener>],
    case_name: &'a str,
    token: CaseToken,
    completed: bool,
}

impl<'a> CaseContext<'a> {
    pub(crate) fn new(
        listeners: &'a mut [Box<dyn TestListener>],
        case_name: &'a str,
        token: CaseToken,
    ) -> Self {
        Self {
            listeners,
            case_name,
            token,
            completed: false,
        }
    }

    /// Name of the running case.
    pub fn case_name(&self) -> &str {
        self.case_name
    }

    /// Run a named boolean check.
    ///
    /// The condition is fanned out to every listener and returned unchanged,
    /// so it can be used inline as a guard:
    ///
    /// ```ignore
    /// if !cx.check("connected", conn.is_some()) {
    ///     cx.complete();
    ///     return;
    /// }
    /// ```
    pub fn check(&mut self, name: &str, cond: bool) -> bool {
        for listener in self.listeners.iter_mut() {
            listener.assertion(name, cond);
        }
        cond
    }

    /// Declare that an assertion with this name should eventually pass.
    ///
    /// Used to detect checks that never ran, typically inside an async
    /// callback that was never invoked.
    pub fn expect(&mut self, name: &str) {
        for listener in self.listeners.iter_mut() {
            listener.expectation(name);
        }
    }

    /// Signal synchronous completion. Idempotent within one `start` call.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Token for deferred completion.
    ///
    /// A case that will finish asynchronously grabs this during `start` and
    /// hands it to whatever callback later resolves it against the suite.
    pub fn token(&self) -> CaseToken {
        self.token
    }

    pub(crate) fn completed(&self) -> bool {
        self.completed
    }
}

/// Closure-backed [`TestCase`] with default `open`/`close`.
///
/// The common way to write cases that need no setup state:
///
/// ```
/// use cadence_core::{FnCase, TestRunner};
///
/// let mut runner = TestRunner::new();
/// runner.add_case(FnCase::new("arithmetic", |cx| {
///     cx.check("adds", 1 + 1 == 2);
///     cx.complete();
/// }));
/// runner.run().unwrap();
/// ```
pub struct FnCase {
    name: String,
    body: Box<dyn FnMut(&mut CaseContext<'_>)>,
}

impl FnCase {
    /// Create a case from a name and a body.
    pub fn new(name: impl Into<String>, body: impl FnMut(&mut CaseContext<'_>) + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }
}

impl TestCase for FnCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&mut self, cx: &mut CaseContext<'_>) {
        (self.body)(cx);
    }
}
