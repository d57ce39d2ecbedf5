// tests/scheduler_scenarios.rs

use std::time::{Duration as StdDuration, Instant};

use chrono::Duration;
use taskwave::dag::{ScheduleLimits, Scheduler};
use taskwave::errors::ScheduleError;
use taskwave::request::TaskSpec;
use taskwave::schedule;
use taskwave_test_utils::builders::{RequestBuilder, TaskSpecBuilder, due};
use taskwave_test_utils::init_tracing;

fn titles(order: &[&str]) -> Vec<String> {
    order.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_request_yields_empty_schedule() {
    init_tracing();

    let order = schedule(&[]).unwrap();
    assert!(order.is_empty());
}

#[test]
fn blocked_task_waits_for_dependency_despite_earlier_due_date() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("A", "2024-01-10", 5, &[])
        .task("B", "2024-01-05", 3, &["A"])
        .tasks();

    assert_eq!(schedule(&tasks).unwrap(), titles(&["A", "B"]));
}

#[test]
fn ready_tasks_ordered_by_due_date() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("X", "2024-02-01", 10, &[])
        .task("Y", "2024-01-01", 2, &[])
        .tasks();

    assert_eq!(schedule(&tasks).unwrap(), titles(&["Y", "X"]));
}

#[test]
fn chain_order_dominates_due_dates() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("C", "2024-01-01", 1, &["B"])
        .task("B", "2024-01-02", 1, &["A"])
        .task("A", "2024-12-31", 40, &[])
        .tasks();

    assert_eq!(schedule(&tasks).unwrap(), titles(&["A", "B", "C"]));
}

#[test]
fn equal_due_dates_fall_back_to_estimated_hours() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("long", "2024-03-01", 8, &[])
        .task("short", "2024-03-01", 2, &[])
        .task("medium", "2024-03-01", 4, &[])
        .tasks();

    assert_eq!(
        schedule(&tasks).unwrap(),
        titles(&["short", "medium", "long"])
    );
}

#[test]
fn full_ties_keep_input_order() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("third", "2024-03-01", 3, &[])
        .task("first", "2024-03-01", 3, &[])
        .task("second", "2024-03-01", 3, &[])
        .tasks();

    assert_eq!(
        schedule(&tasks).unwrap(),
        titles(&["third", "first", "second"])
    );
}

#[test]
fn due_date_compares_time_of_day() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("afternoon", "2024-03-01T15:00:00Z", 1, &[])
        .task("morning", "2024-03-01T09:00:00Z", 5, &[])
        .tasks();

    assert_eq!(
        schedule(&tasks).unwrap(),
        titles(&["morning", "afternoon"])
    );
}

#[test]
fn sorting_is_local_to_each_wave() {
    init_tracing();

    // Wave 1: root_late, root_early. Wave 2: urgent (after root_late) and
    // relaxed (after root_early). `urgent` is due before everything but is
    // still only compared against its own wave.
    let tasks = RequestBuilder::new()
        .task("root_late", "2024-06-01", 1, &[])
        .task("root_early", "2024-05-01", 1, &[])
        .task("relaxed", "2024-07-01", 1, &["root_early"])
        .task("urgent", "2024-01-01", 1, &["root_late"])
        .tasks();

    let trace = Scheduler::default().schedule_with_trace(&tasks).unwrap();

    assert_eq!(
        trace.waves(),
        &[
            titles(&["root_early", "root_late"]),
            titles(&["urgent", "relaxed"]),
        ]
    );
    assert_eq!(
        trace.order(),
        titles(&["root_early", "root_late", "urgent", "relaxed"]).as_slice()
    );
    assert_eq!(trace.dependency_count(), 2);
}

#[test]
fn task_released_only_after_all_dependencies() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("join", "2024-01-01", 1, &["left", "right"])
        .task("left", "2024-02-01", 1, &[])
        .task("right", "2024-03-01", 1, &["left"])
        .tasks();

    let trace = Scheduler::default().schedule_with_trace(&tasks).unwrap();
    assert_eq!(trace.waves().len(), 3);
    assert_eq!(trace.order(), titles(&["left", "right", "join"]).as_slice());
}

#[test]
fn repeated_dependency_entries_count_once() {
    init_tracing();

    let tasks = vec![
        TaskSpecBuilder::new("A").build(),
        TaskSpecBuilder::new("B").after("A").after("A").build(),
    ];

    let trace = Scheduler::default().schedule_with_trace(&tasks).unwrap();
    assert_eq!(trace.order(), titles(&["A", "B"]).as_slice());
    assert_eq!(trace.dependency_count(), 1);
}

#[test]
fn unknown_dependency_is_reported_with_both_titles() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("A", "2024-01-01", 1, &[])
        .task("B", "2024-01-01", 1, &["A", "ghost"])
        .tasks();

    let err = schedule(&tasks).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::UnknownDependency {
            task: "B".to_string(),
            dependency: "ghost".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Task 'B' has a dependency on non-existent task 'ghost'"
    );
}

#[test]
fn unknown_dependency_reports_first_violation_in_input_order() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("A", "2024-01-01", 1, &["missing_a"])
        .task("B", "2024-01-01", 1, &["missing_b"])
        .tasks();

    match schedule(&tasks) {
        Err(ScheduleError::UnknownDependency { task, dependency }) => {
            assert_eq!(task, "A");
            assert_eq!(dependency, "missing_a");
        }
        other => panic!("Expected UnknownDependency, got: {:?}", other),
    }
}

#[test]
fn two_task_cycle_is_rejected() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("A", "2024-01-01", 1, &["B"])
        .task("B", "2024-01-01", 1, &["A"])
        .tasks();

    match schedule(&tasks) {
        Err(ScheduleError::CircularDependency { cycles, blocked }) => {
            assert_eq!(cycles, vec![titles(&["A", "B"])]);
            assert!(blocked.is_empty());
        }
        other => panic!("Expected CircularDependency, got: {:?}", other),
    }
}

#[test]
fn self_dependency_is_a_cycle() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("free", "2024-01-01", 1, &[])
        .task("loop", "2024-01-01", 1, &["loop"])
        .tasks();

    match schedule(&tasks) {
        Err(ScheduleError::CircularDependency { cycles, blocked }) => {
            assert_eq!(cycles, vec![titles(&["loop"])]);
            assert!(blocked.is_empty());
        }
        other => panic!("Expected CircularDependency, got: {:?}", other),
    }
}

#[test]
fn cycle_diagnosis_separates_blocked_tasks() {
    init_tracing();

    // ok -> (p <-> q) -> downstream -> tail, plus an independent self-loop.
    let tasks = RequestBuilder::new()
        .task("ok", "2024-01-01", 1, &[])
        .task("tail", "2024-01-01", 1, &["downstream"])
        .task("q", "2024-01-01", 1, &["p"])
        .task("p", "2024-01-01", 1, &["ok", "q"])
        .task("downstream", "2024-01-01", 1, &["q"])
        .task("solo", "2024-01-01", 1, &["solo"])
        .tasks();

    let err = schedule(&tasks).unwrap_err();
    match &err {
        ScheduleError::CircularDependency { cycles, blocked } => {
            assert_eq!(cycles, &vec![titles(&["q", "p"]), titles(&["solo"])]);
            assert_eq!(blocked, &titles(&["tail", "downstream"]));
        }
        other => panic!("Expected CircularDependency, got: {:?}", other),
    }

    assert_eq!(
        err.residual_titles(),
        vec!["q", "p", "solo", "tail", "downstream"]
    );
    let message = err.to_string();
    assert!(message.starts_with("Circular dependency detected in tasks."));
    assert!(message.contains("Cycle: [q, p]."));
    assert!(message.contains("Blocked: [tail, downstream]."));
}

#[test]
fn duplicate_titles_are_rejected() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("A", "2024-01-01", 1, &[])
        .task("A", "2024-02-01", 2, &[])
        .tasks();

    assert_eq!(
        schedule(&tasks).unwrap_err(),
        ScheduleError::DuplicateTitle {
            task: "A".to_string()
        }
    );
}

#[test]
fn blank_title_is_rejected_with_position() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("A", "2024-01-01", 1, &[])
        .task("   ", "2024-01-01", 1, &[])
        .tasks();

    assert_eq!(
        schedule(&tasks).unwrap_err(),
        ScheduleError::EmptyTitle { position: 1 }
    );
}

#[test]
fn zero_hour_estimate_is_rejected() {
    init_tracing();

    let tasks = RequestBuilder::new()
        .task("A", "2024-01-01", 0, &[])
        .tasks();

    assert_eq!(
        schedule(&tasks).unwrap_err(),
        ScheduleError::InvalidEstimate {
            task: "A".to_string()
        }
    );
}

#[test]
fn request_over_limit_is_rejected_before_validation() {
    init_tracing();

    // Also has an unknown dependency; the size check wins.
    let tasks = RequestBuilder::new()
        .task("A", "2024-01-01", 1, &[])
        .task("B", "2024-01-01", 1, &["nope"])
        .task("C", "2024-01-01", 1, &[])
        .tasks();

    let scheduler = Scheduler::new(ScheduleLimits { max_tasks: 2 });
    assert_eq!(
        scheduler.schedule(&tasks).unwrap_err(),
        ScheduleError::TooManyTasks { count: 3, limit: 2 }
    );
}

#[test]
fn scheduler_is_reusable_across_requests() {
    init_tracing();

    let scheduler = Scheduler::default();

    let cyclic = RequestBuilder::new()
        .task("A", "2024-01-01", 1, &["B"])
        .task("B", "2024-01-01", 1, &["A"])
        .tasks();
    assert!(scheduler.schedule(&cyclic).is_err());

    let fine = RequestBuilder::new()
        .task("A", "2024-01-01", 1, &[])
        .task("B", "2024-01-01", 1, &["A"])
        .tasks();
    assert_eq!(scheduler.schedule(&fine).unwrap(), titles(&["A", "B"]));
}

#[test]
fn schedule_request_builds_response_body() {
    init_tracing();

    let request = RequestBuilder::new()
        .task("X", "2024-02-01", 10, &[])
        .task("Y", "2024-01-01", 2, &[])
        .build();

    let response = Scheduler::default().schedule_request(&request).unwrap();
    assert_eq!(response.recommended_order, titles(&["Y", "X"]));
}

#[test]
fn schedule_errors_convert_into_tool_errors() {
    let err = ScheduleError::DuplicateTitle {
        task: "A".to_string(),
    };
    let tool_err: taskwave::errors::TaskwaveError = err.clone().into();

    assert_eq!(tool_err.to_string(), err.to_string());
}

#[test]
fn dense_request_schedules_within_budget() {
    init_tracing();

    // Every task depends on every earlier one, with due dates running
    // backwards so only the dependencies can produce input order.
    let n = 1_000;
    let names: Vec<String> = (0..n).map(|i| format!("task_{i:04}")).collect();
    let base = due("2030-01-01");
    let tasks: Vec<TaskSpec> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            TaskSpec::new(name.clone(), 1, base - Duration::hours(i as i64))
                .with_dependencies(names[..i].iter().cloned())
        })
        .collect();

    let started = Instant::now();
    let trace = Scheduler::default().schedule_with_trace(&tasks).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(trace.order(), names.as_slice());
    assert_eq!(trace.dependency_count(), n * (n - 1) / 2);
    assert_eq!(trace.waves().len(), n);
    assert!(
        elapsed < StdDuration::from_secs(20),
        "dense request took {elapsed:?}"
    );
}
