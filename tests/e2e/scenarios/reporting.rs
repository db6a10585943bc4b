use crate::harness::Scenario;

#[test]
fn test_summary_lists_each_failure_class() {
    Scenario::new("summary_failure_classes")
        .with_timeout_ms(1)
        .sync_case("math", &[("adds", true), ("overflows", false)])
        .async_case("net", &["reply"])
        .run_suite()
        .advance_ms(1)
        .poll_watchdog()
        .assert_finished()
        .assert_summary_contains("Test cases ran: 2")
        .assert_summary_contains("Asserts passed: 1")
        .assert_summary_contains("math:overflows")
        .assert_summary_contains("Test cases timed out: 1")
        .assert_summary_contains("net:reply")
        .run()
        .unwrap();
}

#[test]
fn test_duplicate_expectations_need_separate_passes() {
    Scenario::new("duplicate_expectations")
        .async_case("io", &["done", "done"])
        .run_suite()
        .async_check("done", true)
        .resolve()
        .assert_finished()
        .assert_pending_expected(&["io:done"])
        .assert_summary_contains("Expects unmet: 1")
        .run()
        .unwrap();
}

#[test]
fn test_unmet_expectation_survives_to_suite_end() {
    Scenario::new("unmet_expectation")
        .async_case("a", &["x"])
        .run_suite()
        .resolve()
        .assert_finished()
        .assert_pending_expected(&["a:x"])
        .assert_summary_contains("Expects unmet: 1")
        .run()
        .unwrap();
}

#[test]
fn test_reset_enables_reuse_across_runs() {
    Scenario::new("summary_reset")
        .sync_case("flaky", &[("works", false)])
        .run_suite()
        .assert_failed_keys(&["flaky:works"])
        .reset_summary()
        .assert_cases_ran(0)
        .assert_all_passed()
        .run_suite()
        .assert_cases_ran(1)
        .assert_failed_keys(&["flaky:works"])
        .run()
        .unwrap();
}
