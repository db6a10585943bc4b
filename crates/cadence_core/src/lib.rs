//! Cadence Core Library
//!
//! A minimal test harness for callback-driven code, providing:
//! - Sequential suite execution with suspend/resume for asynchronous cases
//! - Pluggable lifecycle/assertion listeners
//! - Pass/fail/timeout/expectation aggregation with a printed summary
//!
//! # Quick Start
//!
//! ```
//! use cadence_core::{FnCase, RunProgress, SummaryListener, TestRunner};
//! use std::cell::RefCell;
//! use std::io;
//! use std::rc::Rc;
//!
//! let reporter = Rc::new(RefCell::new(SummaryListener::new(io::sink())));
//!
//! let mut runner = TestRunner::new();
//! runner.add_listener(reporter.clone());
//! runner.add_case(FnCase::new("arithmetic", |cx| {
//!     cx.check("adds", 2 + 2 == 4);
//!     cx.complete();
//! }));
//!
//! assert!(matches!(runner.run().unwrap(), RunProgress::Finished));
//! assert_eq!(reporter.borrow().asserts_passed(), 1);
//! assert!(reporter.borrow().all_passed());
//! ```
//!
//! # Asynchronous cases
//!
//! A case that cannot finish inside `start` grabs its [`CaseToken`] and
//! returns; the suite suspends, and the run resumes when whatever callback
//! owns the token resolves it:
//!
//! ```
//! use cadence_core::{FnCase, RunProgress, TestRunner};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let parked = Rc::new(RefCell::new(None));
//! let slot = parked.clone();
//!
//! let mut runner = TestRunner::new();
//! runner.add_case(FnCase::new("deferred", move |cx| {
//!     cx.expect("resumed");
//!     // Hand the token to the "callback" (here: the embedding test itself)
//!     // and return without completing.
//!     *slot.borrow_mut() = Some(cx.token());
//! }));
//!
//! let progress = runner.run().unwrap();
//! let token = parked.borrow_mut().take().unwrap();
//! assert!(matches!(progress, RunProgress::Suspended(t) if t == token));
//!
//! // Later, from the event loop: the completion signal.
//! assert!(matches!(runner.resolve(token).unwrap(), RunProgress::Finished));
//! ```
//!
//! The harness keeps no clock. A case that never resolves leaves the suite
//! suspended; an external watchdog can force it with
//! [`TestSuite::force_timeout`], after which the case's own late signal is
//! rejected as stale.

mod case;
mod config;
mod error;
mod listener;
mod reporter;
mod runner;
mod suite;

pub use case::{CaseContext, CaseToken, FnCase, TestCase};
pub use config::{HarnessConfig, SuiteConfig, TimeoutConfig};
pub use error::{HarnessError, Result};
pub use listener::TestListener;
pub use reporter::SummaryListener;
pub use runner::TestRunner;
pub use suite::{RunProgress, SuiteState, TestSuite};
