//! Test specification parsing and matrix partitioning.

use std::fs;
use std::path::PathBuf;

use edgekit_benchmarks::config::{
    default_specs, partition, Direction, GenSpec, TestSpec, Weighting,
};
use edgekit_benchmarks::error::HarnessError;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn comma_free_string_parses_as_file_path() {
    let spec: TestSpec = "graphs/mini.el".parse().expect("parse");
    assert_eq!(spec, TestSpec::ExistingFile(PathBuf::from("graphs/mini.el")));
}

#[test]
fn six_fields_parse_as_generation_spec() {
    let spec: TestSpec = "8,4,erdos_renyi,unweighted,unweighted,directed"
        .parse()
        .expect("parse");
    let TestSpec::Generated(gen) = spec else {
        panic!("expected generation spec");
    };
    assert_eq!(gen.scale, 8);
    assert_eq!(gen.degree, 4);
    assert_eq!(gen.generator, "erdos_renyi");
    assert_eq!(gen.edge_weighting, Weighting::Unweighted);
    assert_eq!(gen.vertex_weighting, Weighting::Unweighted);
    assert_eq!(gen.direction, Direction::Directed);
}

#[test]
fn short_property_spellings_are_accepted() {
    let spec: TestSpec = "8,4,er,w,uw,d".parse().expect("parse");
    let TestSpec::Generated(gen) = spec else {
        panic!("expected generation spec");
    };
    assert_eq!(gen.edge_weighting, Weighting::Weighted);
    assert_eq!(gen.vertex_weighting, Weighting::Unweighted);
    assert_eq!(gen.direction, Direction::Directed);
}

#[test]
fn wrong_field_count_is_rejected() {
    let err = "8,4,erdos_renyi".parse::<TestSpec>().unwrap_err();
    assert!(matches!(err, HarnessError::InvalidSpec { .. }));
}

#[test]
fn non_numeric_scale_is_rejected() {
    let err = "big,4,er,uw,uw,d".parse::<TestSpec>().unwrap_err();
    assert!(matches!(err, HarnessError::InvalidSpec { .. }));
}

#[test]
fn oversized_scale_is_rejected() {
    let err = "64,4,er,uw,uw,d".parse::<TestSpec>().unwrap_err();
    assert!(matches!(err, HarnessError::InvalidSpec { .. }));
}

#[test]
fn unknown_weighting_is_rejected() {
    let err = "8,4,er,heavy,uw,d".parse::<TestSpec>().unwrap_err();
    assert!(matches!(err, HarnessError::InvalidSpec { .. }));
}

// =============================================================================
// Derived values
// =============================================================================

fn sample_spec() -> GenSpec {
    GenSpec {
        scale: 8,
        degree: 4,
        generator: "erdos_renyi".to_string(),
        edge_weighting: Weighting::Unweighted,
        vertex_weighting: Weighting::Unweighted,
        direction: Direction::Directed,
    }
}

#[test]
fn graph_name_is_deterministic() {
    assert_eq!(
        sample_spec().graph_name(),
        "generated_scale8_degree4_erdos_renyi"
    );
}

#[test]
fn vertex_and_edge_counts_follow_scale_and_degree() {
    let spec = sample_spec();
    assert_eq!(spec.vertices(), 256);
    assert_eq!(spec.edges(), 1024);
}

#[test]
fn edge_count_saturates_at_the_parser_accepted_extreme() {
    let spec = GenSpec {
        scale: 63,
        degree: u32::MAX,
        ..sample_spec()
    };
    assert_eq!(spec.vertices(), 1u64 << 63);
    assert_eq!(spec.edges(), u64::MAX);
}

#[test]
fn generation_args_cover_every_parameter() {
    let args = sample_spec().generation_args();
    for flag in [
        "--scale",
        "--degree",
        "--gen-type",
        "--edge-type",
        "--vertex-type",
        "--graph-type",
    ] {
        assert!(args.iter().any(|a| a == flag), "missing {flag}");
    }
    assert!(args.contains(&"erdos_renyi".to_string()));
    assert!(args.contains(&"directed".to_string()));
}

// =============================================================================
// Partitioning
// =============================================================================

#[test]
fn partition_checks_existence_and_preserves_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let present_a = dir.path().join("a.el");
    let present_b = dir.path().join("b.el");
    fs::write(&present_a, "0 1\n").expect("write");
    fs::write(&present_b, "0 1\n").expect("write");
    let missing = dir.path().join("missing.el");

    let specs = vec![
        TestSpec::ExistingFile(present_a.clone()),
        TestSpec::Generated(sample_spec()),
        TestSpec::ExistingFile(missing),
        TestSpec::ExistingFile(present_b.clone()),
    ];
    let (files, generated) = partition(&specs);

    assert_eq!(files, vec![present_a, present_b]);
    assert_eq!(generated, vec![sample_spec()]);
}

#[test]
fn partition_never_double_assigns_a_spec() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("a.el");
    fs::write(&file, "0 1\n").expect("write");

    let specs = vec![
        TestSpec::ExistingFile(file),
        TestSpec::Generated(sample_spec()),
    ];
    let (files, generated) = partition(&specs);
    assert_eq!(files.len() + generated.len(), specs.len());
}

#[test]
fn default_matrix_mixes_files_and_generation_specs() {
    let specs = default_specs(std::path::Path::new("/proj"));
    let file_count = specs
        .iter()
        .filter(|s| matches!(s, TestSpec::ExistingFile(_)))
        .count();
    let gen_count = specs
        .iter()
        .filter(|s| matches!(s, TestSpec::Generated(_)))
        .count();
    assert_eq!(file_count, 2);
    assert_eq!(gen_count, 5);
}
