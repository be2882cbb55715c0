use std::fs;

use carpet_format::generator::{generate_case, make_rng, solve, write_batch, GenProfile, QueryMode};
use carpet_format::validate_document;
use tempfile::TempDir;

#[test]
fn test_generated_cases_always_validate() {
    let profiles = [
        GenProfile::default(),
        GenProfile {
            count: 1,
            coord_max: 1,
            min_len: 1,
            max_len: 1,
            query: QueryMode::Random,
        },
        GenProfile {
            count: 200,
            coord_max: 100_000,
            min_len: 1,
            max_len: 100_000,
            query: QueryMode::Random,
        },
    ];

    for profile in &profiles {
        let mut rng = make_rng(Some(2024));
        for _ in 0..20 {
            let doc = generate_case(profile, &mut rng);
            let reparsed = validate_document(&doc.to_string()).expect("generated case validates");
            assert_eq!(reparsed, doc);
        }
    }
}

#[test]
fn test_outside_query_never_covered() {
    let mut rng = make_rng(Some(9));
    for _ in 0..50 {
        let doc = generate_case(&GenProfile::default(), &mut rng);
        assert_eq!(solve(&doc), -1);
    }
}

#[test]
fn test_write_batch_creates_numbered_pairs() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let out_dir = temp_dir.path().join("answer");
    let profile = GenProfile {
        query: QueryMode::Random,
        ..GenProfile::default()
    };

    let manifest =
        write_batch(&out_dir, 4, &profile, &mut make_rng(Some(5))).expect("write batch");

    assert_eq!(manifest.len(), 4);
    for (i, case) in manifest.iter().enumerate() {
        assert_eq!(case.index, i + 1);
        assert_eq!(
            case.input,
            out_dir.join(format!("test_data_{}.in", i + 1))
        );

        let input = fs::read_to_string(&case.input).expect("read .in");
        let output = fs::read_to_string(&case.output).expect("read .out");
        let doc = validate_document(&input).expect("written case validates");

        assert_eq!(doc.count(), case.records);
        assert_eq!(output, format!("{}\n", solve(&doc)));
        assert_eq!(case.answer, solve(&doc));
    }
}

#[test]
fn test_write_batch_is_reproducible() {
    let first = TempDir::new().expect("create temp dir");
    let second = TempDir::new().expect("create temp dir");
    let profile = GenProfile::default();

    write_batch(first.path(), 2, &profile, &mut make_rng(Some(77))).expect("first batch");
    write_batch(second.path(), 2, &profile, &mut make_rng(Some(77))).expect("second batch");

    for name in ["test_data_1.in", "test_data_2.in"] {
        assert_eq!(
            fs::read_to_string(first.path().join(name)).expect("read first"),
            fs::read_to_string(second.path().join(name)).expect("read second")
        );
    }
}

#[test]
fn test_write_batch_rejects_bad_profile() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let profile = GenProfile {
        count: 0,
        ..GenProfile::default()
    };

    assert!(write_batch(temp_dir.path(), 1, &profile, &mut make_rng(Some(1))).is_err());
    assert!(fs::read_dir(temp_dir.path()).expect("list dir").next().is_none());
}

#[test]
fn test_manifest_serializes() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let manifest = write_batch(temp_dir.path(), 1, &GenProfile::default(), &mut make_rng(Some(3)))
        .expect("write batch");

    let json: serde_json::Value = serde_json::to_value(&manifest).expect("serialize manifest");
    assert_eq!(json[0]["index"], 1);
    assert_eq!(json[0]["records"], 5);
    assert_eq!(json[0]["answer"], -1);
}

#[test]
fn test_outside_query_clears_widest_profile() {
    let profile = GenProfile {
        count: 3,
        coord_max: 1,
        min_len: i32::MAX - 1,
        max_len: i32::MAX - 1,
        query: QueryMode::Outside,
    };
    profile.validate().expect("widest profile is valid");

    let doc = generate_case(&profile, &mut make_rng(Some(4)));
    assert_eq!(doc.trailer.x, i32::MAX);
    assert_eq!(solve(&doc), -1);
}

#[test]
fn test_huge_batch_fails_through_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    // A directory where the first .in file should go makes the write fail
    fs::create_dir(temp_dir.path().join("test_data_1.in")).expect("create blocker");

    let result = write_batch(
        temp_dir.path(),
        usize::MAX / 8,
        &GenProfile::default(),
        &mut make_rng(Some(1)),
    );

    let err = result.expect_err("write into a directory fails");
    assert!(format!("{err:#}").contains("Failed to write"));
}
