//! Listener capability for suite, case and assertion lifecycle events.

use std::cell::RefCell;
use std::rc::Rc;

/// Observer of suite execution.
///
/// Every method has a no-op default body; concrete listeners implement only
/// the events they care about. Events are delivered synchronously, in
/// listener registration order, from the single logical thread of control.
pub trait TestListener {
    /// A run started. Fires exactly once per run, before any case event.
    fn begin_suite(&mut self, suite_name: &str) {
        let _ = suite_name;
    }

    /// A run finished. Fires exactly once per completed run, after the last
    /// case's `end_case`.
    fn end_suite(&mut self) {}

    /// A case is about to start.
    fn begin_case(&mut self, case_name: &str) {
        let _ = case_name;
    }

    /// The current case finished (completion signal arrived and the case was
    /// closed).
    fn end_case(&mut self) {}

    /// A named boolean check ran in the current case.
    fn assertion(&mut self, name: &str, passed: bool) {
        let _ = (name, passed);
    }

    /// The current case declared that an assertion with this name should
    /// eventually pass.
    fn expectation(&mut self, name: &str) {
        let _ = name;
    }

    /// An external watchdog gave up on the named case.
    ///
    /// Never fired by the suite itself; see
    /// [`crate::TestSuite::force_timeout`].
    fn timed_out(&mut self, case_name: &str) {
        let _ = case_name;
    }
}

/// Shared-handle listener.
///
/// The suite owns its listeners, so an embedder that wants to inspect a
/// listener after the run registers an `Rc<RefCell<L>>` clone instead of the
/// listener itself. The execution model is single-threaded, so `Rc` is
/// sufficient.
impl<L: TestListener> TestListener for Rc<RefCell<L>> {
    fn begin_suite(&mut self, suite_name: &str) {
        self.borrow_mut().begin_suite(suite_name);
    }

    fn end_suite(&mut self) {
        self.borrow_mut().end_suite();
    }

    fn begin_case(&mut self, case_name: &str) {
        self.borrow_mut().begin_case(case_name);
    }

    fn end_case(&mut self) {
        self.borrow_mut().end_case();
    }

    fn assertion(&mut self, name: &str, passed: bool) {
        self.borrow_mut().assertion(name, passed);
    }

    fn expectation(&mut self, name: &str) {
        self.borrow_mut().expectation(name);
    }

    fn timed_out(&mut self, case_name: &str) {
        self.borrow_mut().timed_out(case_name);
    }
}
