use crate::harness::Scenario;

#[test]
fn test_watchdog_times_out_hung_case() {
    Scenario::new("watchdog_times_out_hung_case")
        .with_timeout_ms(100)
        .async_case("hung", &["never"])
        .passing_case("tail")
        .run_suite()
        .assert_suspended_on("hung")
        // Budget not yet spent: the watchdog leaves the case alone.
        .advance_ms(50)
        .poll_watchdog()
        .assert_suspended_on("hung")
        // Budget elapsed: force the timeout, the rest of the suite runs.
        .advance_ms(50)
        .poll_watchdog()
        .assert_finished()
        .assert_event_fired("timed-out hung")
        .assert_timed_out(&["hung"])
        .assert_cases_ran(2)
        .assert_pending_expected(&["hung:never"])
        .run()
        .expect("scenario should pass");
}

#[test]
fn test_late_completion_after_timeout_is_rejected() {
    Scenario::new("late_completion_rejected")
        .with_timeout_ms(10)
        .async_case("hung", &[])
        .async_case("next", &[])
        .run_suite()
        .advance_ms(10)
        .poll_watchdog()
        .assert_suspended_on("next")
        // The hung case finally signals; the suite must not advance "next".
        .resolve_retired()
        .assert_suspended_on("next")
        .resolve()
        .assert_finished()
        .assert_timed_out(&["hung"])
        .run()
        .unwrap();
}

#[test]
fn test_timeout_on_last_case_ends_suite() {
    Scenario::new("timeout_on_last_case")
        .with_timeout_ms(5)
        .async_case("only", &[])
        .run_suite()
        .advance_ms(5)
        .poll_watchdog()
        .assert_finished()
        .assert_events(&[
            "begin-suite TestRunner",
            "begin-case only",
            "timed-out only",
            "end-case",
            "end-suite",
        ])
        .assert_cases_ran(1)
        .run()
        .unwrap();
}
