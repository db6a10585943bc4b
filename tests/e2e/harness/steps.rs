use super::assertions::Assertion;

/// All possible actions in a harness scenario.
#[derive(Debug)]
pub enum ScenarioStep {
    // Suite setup
    /// Register a case that runs the given named checks and completes
    /// synchronously inside `start`.
    AddSyncCase {
        name: String,
        checks: Vec<(String, bool)>,
    },
    /// Register a case that declares the given expectations and returns
    /// without completing, suspending the suite.
    AddAsyncCase {
        name: String,
        expects: Vec<String>,
    },
    /// Override the runner's per-case timeout budget.
    SetTimeoutMs {
        ms: u64,
    },

    // Execution
    /// Start the run.
    Run,
    /// Fire a check through the pending case's token (the asynchronous
    /// continuation asserting before it completes).
    AsyncCheck {
        name: String,
        cond: bool,
    },
    /// Deliver the pending case's completion signal.
    Resolve,
    /// Deliver a completion signal for a case the watchdog already timed
    /// out; the step fails unless the harness rejects it as stale.
    ResolveRetired,

    // Time control
    AdvanceMs {
        ms: u64,
    },
    /// Watchdog tick: times out the pending case if its budget has elapsed,
    /// does nothing otherwise.
    PollWatchdog,

    // Listener bookkeeping
    /// Reset the aggregating summary listener between runs.
    ResetSummary,
    /// Clear the recorded event log.
    ClearEvents,

    Assert {
        assertion: Assertion,
    },
}
