// tests/integration_tests.rs
//
// End-to-end coverage: selection strings all the way to matched indices,
// display round-trips, and the JSON check pipeline behind the cli feature.

use atomsel::{Frame, Selection};

fn water_dimer() -> Frame {
    let mut frame = Frame::new();
    frame.add_atom("OW", 15.999, [0.0, 0.0, 0.0]);
    frame.add_atom("HW1", 1.008, [0.75, 0.58, 0.0]);
    frame.add_atom("HW2", 1.008, [-0.75, 0.58, 0.0]);
    frame.add_atom("OW", 15.999, [2.9, 0.0, 0.0]);
    frame.add_atom("HW1", 1.008, [3.65, 0.58, 0.0]);
    frame.add_atom("HW2", 1.008, [2.15, 0.58, 0.0]);
    frame
}

#[test]
fn test_end_to_end_selection() {
    let frame = water_dimer();
    let test_cases = vec![
        ("all", vec![0, 1, 2, 3, 4, 5]),
        ("name OW", vec![0, 3]),
        ("mass < 2", vec![1, 2, 4, 5]),
        ("x > 2 and name != OW", vec![4, 5]),
        ("name HW1 or name HW2", vec![1, 2, 4, 5]),
        ("not (name OW or index > 3)", vec![1, 2]),
        ("index >= 3 and mass > 10", vec![3]),
    ];

    for (selection, expected) in test_cases {
        let parsed = Selection::parse(selection).unwrap();
        assert_eq!(parsed.filter(&frame), expected, "selection: {}", selection);
    }
}

#[test]
fn test_display_round_trip_preserves_matches() {
    let frame = water_dimer();
    let selections = vec![
        "name OW",
        "mass < 2 and x > 2",
        "not name OW or index == 0",
        "(name HW1 or name HW2) and x < 1",
    ];

    for selection in selections {
        let parsed = Selection::parse(selection).unwrap();
        let reparsed = Selection::parse(&parsed.ast().to_string()).unwrap();
        assert_eq!(parsed.ast(), reparsed.ast(), "selection: {}", selection);
        assert_eq!(
            parsed.filter(&frame),
            reparsed.filter(&frame),
            "selection: {}",
            selection
        );
    }
}

#[test]
fn test_parse_entry_point() {
    let frame = water_dimer();
    let selection = atomsel::parse("name OW").unwrap();
    assert_eq!(selection.filter(&frame), vec![0, 3]);
    assert!(atomsel::parse("name == foo)").is_err());
}

#[test]
fn test_selection_shared_across_threads() {
    let selection = Selection::parse("mass < 2").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let selection = selection.clone();
            std::thread::spawn(move || selection.filter(&water_dimer()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![1, 2, 4, 5]);
    }
}

// ============================================================================
// CLI check pipeline
// ============================================================================

#[cfg(feature = "cli")]
mod cli {
    use atomsel::cli::{CheckOptions, CheckResult, CliError, execute_check};
    use serde_json::json;

    fn frame_json() -> String {
        json!({
            "names": ["OW", "HW1", "HW2"],
            "masses": [15.999, 1.008, 1.008],
            "positions": [[0.0, 0.0, 0.0], [0.75, 0.58, 0.0], [-0.75, 0.58, 0.0]],
        })
        .to_string()
    }

    #[test]
    fn test_check_success() {
        let options = CheckOptions {
            selection: "mass < 2".into(),
            input: Some(frame_json()),
            ..CheckOptions::default()
        };

        match execute_check(&options).unwrap() {
            CheckResult::Success(report) => {
                assert_eq!(report["count"], json!(2));
                assert_eq!(report["indices"], json!([1, 2]));
                assert_eq!(report["names"], json!(["HW1", "HW2"]));
            }
            other => panic!("expected a match report, got {:?}", other),
        }
    }

    #[test]
    fn test_check_syntax_only() {
        let options = CheckOptions {
            selection: "name OW and x < 1".into(),
            syntax_only: true,
            ..CheckOptions::default()
        };

        assert!(matches!(
            execute_check(&options).unwrap(),
            CheckResult::SyntaxValid
        ));
    }

    #[test]
    fn test_check_bad_selection() {
        let options = CheckOptions {
            selection: "name ==".into(),
            syntax_only: true,
            ..CheckOptions::default()
        };

        assert!(matches!(
            execute_check(&options),
            Err(CliError::Selection(_))
        ));
    }

    #[test]
    fn test_check_missing_input() {
        let options = CheckOptions {
            selection: "all".into(),
            ..CheckOptions::default()
        };

        assert!(matches!(execute_check(&options), Err(CliError::NoInput)));
    }

    #[test]
    fn test_check_invalid_frame() {
        let options = CheckOptions {
            selection: "all".into(),
            input: Some(json!({"names": ["CA"], "masses": []}).to_string()),
            ..CheckOptions::default()
        };

        assert!(matches!(
            execute_check(&options),
            Err(CliError::InvalidFrame(_))
        ));
    }
}
