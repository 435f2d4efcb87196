//! Integration tests for the simulation driver.
//!
//! These tests go through the public API: parse a trace, run the four
//! policies, and write the result file.

use std::fs;

use pagesim::policy::{Clock, Optimal, WsClock};
use pagesim::{
    run_batch, run_files, run_trace, simulate, AccessRecord, BatchOptions, Error, FaultCounts,
    SimConfig, Simulation, Trace,
};
use tempfile::tempdir;

fn reads(pages: &[u64]) -> Vec<AccessRecord> {
    pages
        .iter()
        .enumerate()
        .map(|(t, &p)| AccessRecord::read(p, t as i64 + 1))
        .collect()
}

/// Page 2 is never reused, so Optimal keeps page 1 and hits on it.
#[test]
fn test_optimal_scenario() {
    let accesses = reads(&[1, 2, 3, 1]);
    let mut optimal = Optimal::new(2, &accesses);
    assert_eq!(simulate(&mut optimal, &accesses).faults, 3);
}

/// One frame and alternating pages: every access faults.
#[test]
fn test_clock_single_frame_scenario() {
    let accesses = reads(&[1, 2, 1, 2]);
    let mut clock = Clock::new(1);
    assert_eq!(simulate(&mut clock, &accesses).faults, 4);
}

#[test]
fn test_wsclock_zero_threshold_equals_clock() {
    let text = "\
8
3
0
1 1 R
2 1 W
3 2 R
1 3 R
4 3 W
5 4 R
2 5 R
1 6 W
3 6 R
6 7 R
4 8 R
1 9 R
";
    let trace = Trace::parse(text).unwrap();
    for capacity in 1..=4 {
        let mut clock = Clock::new(capacity);
        let mut wsclock = WsClock::new(capacity, 0);
        assert_eq!(
            simulate(&mut clock, &trace.accesses),
            simulate(&mut wsclock, &trace.accesses)
        );
    }
}

#[test]
fn test_full_trace_from_text() {
    let text = "\
5
3
2
1 1 R
2 2 R
3 3 W
4 4 R
1 5 R
2 6 W
5 7 R
1 8 R
2 9 R
3 10 R
4 11 W
5 12 R
";
    let trace = Trace::parse(text).unwrap();
    let counts = run_trace(&trace, 11).unwrap();

    for faults in counts.to_array() {
        assert!(faults as usize <= trace.len());
    }
    assert!(counts.optimal <= counts.nru);
    assert!(counts.optimal <= counts.clock);
    assert!(counts.optimal <= counts.wsclock);

    // 1 2 3 miss, 4 evicts 3, 5 evicts 4, 3 evicts 1, 4 evicts 2.
    assert_eq!(counts.optimal, 7);
}

#[test]
fn test_empty_trace() {
    let trace = Trace::parse("3\n2\n1\n").unwrap();
    assert_eq!(run_trace(&trace, 0).unwrap(), FaultCounts::default());
}

#[test]
fn test_invalid_frames() {
    let trace = Trace::parse("3\n0\n1\n1 1 R\n").unwrap();
    assert!(matches!(
        run_trace(&trace, 0),
        Err(Error::InvalidParameter { name: "frames", .. })
    ));
}

#[test]
fn test_huge_frame_count_does_not_reserve() {
    let trace = Trace::parse("4\n1000000000000\n0\n1 1 R\n2 2 R\n1 3 R\n").unwrap();
    assert_eq!(run_trace(&trace, 0).unwrap().to_array(), [2, 2, 2, 2]);
}

#[test]
fn test_pages_only_checked_when_accesses_exist() {
    let empty = Trace::parse("0\n2\n1\n").unwrap();
    assert_eq!(run_trace(&empty, 0).unwrap(), FaultCounts::default());

    let empty_bad_frames = Trace::parse("0\n0\n1\n").unwrap();
    assert!(matches!(
        run_trace(&empty_bad_frames, 0),
        Err(Error::InvalidParameter { name: "frames", .. })
    ));

    let negative = Trace::parse("-3\n2\n0\n1 1 R\n2 2 R\n1 3 R\n").unwrap();
    assert_eq!(run_trace(&negative, 0).unwrap().to_array(), [2, 2, 2, 2]);

    let zero = Trace::parse("0\n2\n0\n1 1 R\n").unwrap();
    assert!(matches!(
        run_trace(&zero, 0),
        Err(Error::InvalidParameter { name: "pages", value: 0 })
    ));
}

#[test]
fn test_parallel_matches_sequential() {
    let pages: Vec<u64> = (0..500u64).map(|i| (i * 7 + i / 3) % 13).collect();
    let accesses = reads(&pages);
    let sim = Simulation::new(SimConfig::new(13, 4, 3).unwrap()).with_seed(5);
    assert_eq!(sim.run(&accesses), sim.run_parallel(&accesses));
}

/// Files in, result files out, with a broken file in the middle.
#[test]
fn test_batch_files_isolate_failures() {
    let dir = tempdir().unwrap();
    let good_a = dir.path().join("TEST-01.txt");
    let broken = dir.path().join("TEST-02.txt");
    let missing = dir.path().join("TEST-03.txt");
    let good_b = dir.path().join("TEST-04.txt");

    fs::write(&good_a, "4\n2\n1\n1 1 R\n2 2 R\n3 3 R\n1 4 R\n").unwrap();
    fs::write(&broken, "4\n2\n1\n1 1 R\n2 2 Q\n").unwrap();
    fs::write(&good_b, "4\n1\n0\n1 1 R\n2 2 R\n1 3 R\n2 4 R\n").unwrap();

    let paths = vec![good_a.clone(), broken, missing, good_b];
    let results = run_files(&paths, BatchOptions::default());
    assert_eq!(results.len(), 4);

    let first = results[0].as_ref().unwrap();
    assert_eq!(first.optimal, 3);
    assert!(matches!(
        results[1],
        Err(Error::MalformedAccess { line: 5, .. })
    ));
    assert!(matches!(results[2], Err(Error::Io(_))));
    assert_eq!(results[3].as_ref().unwrap().to_array(), [4, 4, 4, 4]);

    let out = dir.path().join("TEST-01-RESULT.txt");
    first.save(&out).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "3");
}

#[test]
fn test_batch_traces() {
    let traces = vec![
        Trace::parse("4\n2\n1\n1 1 R\n2 2 R\n3 3 R\n1 4 R\n").unwrap(),
        Trace::parse("4\n2\n-1\n1 1 R\n").unwrap(),
        Trace::parse("4\n2\n1\n").unwrap(),
    ];
    let options = BatchOptions {
        workers: 2,
        seed: 3,
    };
    let results = run_batch(&traces, options);

    assert_eq!(results[0].as_ref().unwrap().optimal, 3);
    assert!(matches!(
        results[1],
        Err(Error::InvalidParameter {
            name: "threshold",
            ..
        })
    ));
    assert_eq!(*results[2].as_ref().unwrap(), FaultCounts::default());

    // Same seed, same answers.
    let again = run_batch(&traces, options);
    assert_eq!(
        results[0].as_ref().unwrap(),
        again[0].as_ref().unwrap()
    );
}

#[test]
fn test_trace_open_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.txt");
    let accesses = vec![AccessRecord::read(1, 1), AccessRecord::write(9, 2)];

    let mut text = String::from("10\n2\n1\n");
    for access in &accesses {
        text.push_str(&format!("{}\n", access));
    }
    fs::write(&path, text).unwrap();

    let trace = Trace::open(&path).unwrap();
    assert_eq!(trace.header.total_pages, 10);
    assert_eq!(trace.accesses, accesses);
}
