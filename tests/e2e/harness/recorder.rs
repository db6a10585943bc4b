use cadence_core::TestListener;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a [`RecordingListener`] registered with a suite.
pub type SharedRecorder = Rc<RefCell<RecordingListener>>;

/// Listener that records every event as a readable line, for exact ordering
/// assertions.
///
/// Event lines: `begin-suite <name>`, `end-suite`, `begin-case <name>`,
/// `end-case`, `assert <name> <true|false>`, `expect <name>`,
/// `timed-out <name>`.
#[derive(Default)]
pub struct RecordingListener {
    events: Vec<String>,
}

impl RecordingListener {
    /// Fresh recorder behind a shared handle.
    pub fn shared() -> SharedRecorder {
        Rc::new(RefCell::new(RecordingListener::default()))
    }

    /// All recorded event lines, in delivery order.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TestListener for RecordingListener {
    fn begin_suite(&mut self, suite_name: &str) {
        self.events.push(format!("begin-suite {}", suite_name));
    }

    fn end_suite(&mut self) {
        self.events.push("end-suite".to_string());
    }

    fn begin_case(&mut self, case_name: &str) {
        self.events.push(format!("begin-case {}", case_name));
    }

    fn end_case(&mut self) {
        self.events.push("end-case".to_string());
    }

    fn assertion(&mut self, name: &str, passed: bool) {
        self.events.push(format!("assert {} {}", name, passed));
    }

    fn expectation(&mut self, name: &str) {
        self.events.push(format!("expect {}", name));
    }

    fn timed_out(&mut self, case_name: &str) {
        self.events.push(format!("timed-out {}", case_name));
    }
}
