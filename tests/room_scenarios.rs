//! End-to-end room scanning scenarios.
//!
//! These tests drive the incremental model and the batch validator the way
//! the tracking collaborator would: observations one at a time into the
//! model, full snapshots into the validator, lifecycle transitions gated on
//! the model's outputs.

use griha_scan::core::{PlaneAlignment, PlaneId, PlaneObservation, Point3D, Transform3D};
use griha_scan::{
    AnalysisOutcome, GrihaConfig, IngestOutcome, RoomModel, ScanSession, ScanState,
    StructureValidator,
};

fn plane(
    id: u64,
    alignment: PlaneAlignment,
    position: Point3D,
    width: f32,
    height: f32,
) -> PlaneObservation {
    PlaneObservation::new(
        PlaneId(id),
        Transform3D::from_translation(position),
        alignment,
        width,
        height,
    )
    .with_confidence(0.8)
}

fn model_from(config: &GrihaConfig) -> RoomModel {
    RoomModel::new(
        config.classifier.clone(),
        config.merge.clone(),
        config.completeness.clone(),
    )
}

/// A living-room-sized scan: one floor, three walls, growing evidence.
fn living_room() -> Vec<PlaneObservation> {
    vec![
        plane(
            1,
            PlaneAlignment::Horizontal,
            Point3D::new(0.0, 0.0, 0.0),
            3.0,
            2.0,
        ),
        plane(
            2,
            PlaneAlignment::Vertical,
            Point3D::new(1.5, 1.25, 0.0),
            1.2,
            2.5,
        ),
        plane(
            3,
            PlaneAlignment::Vertical,
            Point3D::new(-1.5, 1.25, 0.0),
            1.2,
            2.5,
        ),
        plane(
            4,
            PlaneAlignment::Vertical,
            Point3D::new(0.0, 1.25, 1.5),
            1.2,
            2.5,
        ),
    ]
}

#[test]
fn scan_session_reaches_completion() {
    let config = GrihaConfig::default();
    let mut model = model_from(&config);
    let mut session = ScanSession::new();

    session.start();
    assert_eq!(*session.state(), ScanState::Scanning);

    for observation in &living_room() {
        assert_ne!(model.ingest(observation), IngestOutcome::Discarded);
    }

    let snapshot = model.snapshot();
    assert_eq!(snapshot.stats.floor_count, 1);
    assert_eq!(snapshot.stats.wall_count, 3);
    assert_eq!(snapshot.stats.room_area, 6.0);
    assert!(snapshot.is_complete);
    assert_eq!(snapshot.scan_progress, 1.0);
    assert_eq!(snapshot.summary, "Room: 6.0m\u{b2}, 3 walls, 1 floor");

    // Completion gates the lifecycle stop
    if snapshot.is_complete {
        session.complete();
    }
    assert_eq!(*session.state(), ScanState::Completed);
}

#[test]
fn repeated_observations_do_not_inflate_statistics() {
    let config = GrihaConfig::default();
    let mut model = model_from(&config);

    let floor = plane(
        1,
        PlaneAlignment::Horizontal,
        Point3D::new(0.0, 0.0, 0.0),
        3.0,
        2.0,
    );

    // Tracking re-reports the same floor with slight anchor drift
    model.ingest(&floor);
    model.ingest(&plane(
        1,
        PlaneAlignment::Horizontal,
        Point3D::new(0.1, 0.0, 0.05),
        3.0,
        2.0,
    ));
    model.ingest(&plane(
        1,
        PlaneAlignment::Horizontal,
        Point3D::new(0.2, 0.0, 0.1),
        3.0,
        2.0,
    ));

    // One retained floor; area accumulates but the count stays at one
    assert_eq!(model.stats().floor_count, 1);
    assert_eq!(model.surfaces().len(), 1);
}

#[test]
fn batch_and_incremental_disagree_by_design() {
    // 4.5m2 floor with two walls: the batch validator accepts (area >= 4.0),
    // the incremental completeness check does not (area < 5.0).
    let config = GrihaConfig::default();
    let planes = vec![
        plane(
            1,
            PlaneAlignment::Horizontal,
            Point3D::new(0.0, 0.0, 0.0),
            2.25,
            2.0,
        ),
        plane(
            2,
            PlaneAlignment::Vertical,
            Point3D::new(1.5, 1.25, 0.0),
            1.2,
            2.5,
        ),
        plane(
            3,
            PlaneAlignment::Vertical,
            Point3D::new(-1.5, 1.25, 0.0),
            1.2,
            2.5,
        ),
    ];

    let mut validator =
        StructureValidator::new(config.classifier.clone(), config.validation.clone());
    assert!(validator.should_analyze(planes.len()));
    assert_eq!(validator.analyze(&planes), AnalysisOutcome::Accepted);
    let structure = validator.structure().expect("batch pass accepted");
    assert_eq!(structure.floor_count(), 1);
    assert_eq!(structure.wall_count(), 2);

    let mut model = model_from(&config);
    for observation in &planes {
        model.ingest(observation);
    }
    assert_eq!(model.stats().room_area, 4.5);
    assert!(!model.is_complete());
}

#[test]
fn failed_batch_pass_keeps_previous_structure() {
    let config = GrihaConfig::default();
    let mut validator =
        StructureValidator::new(config.classifier.clone(), config.validation.clone());

    assert_eq!(validator.analyze(&living_room()), AnalysisOutcome::Accepted);
    let accepted_walls = validator.structure().unwrap().wall_count();

    // A later snapshot that is too sparse to validate
    let sparse = vec![plane(
        9,
        PlaneAlignment::Horizontal,
        Point3D::new(0.0, 0.0, 0.0),
        1.0,
        1.0,
    )];
    assert_eq!(validator.analyze(&sparse), AnalysisOutcome::Rejected);

    // Prior structure is untouched
    assert_eq!(validator.structure().unwrap().wall_count(), accepted_walls);
    assert_eq!(validator.progress(), 1.0);
    assert!(!validator.is_analyzing());
}

#[test]
fn tracking_failure_forwards_reason() {
    let mut session = ScanSession::new();
    session.start();
    session.fail("tracking lost: insufficient features");

    assert!(session.state().is_terminal());
    assert_eq!(
        *session.state(),
        ScanState::Failed("tracking lost: insufficient features".to_string())
    );

    session.reset();
    assert_eq!(*session.state(), ScanState::NotStarted);
}

#[test]
fn custom_config_changes_thresholds() {
    let yaml = r#"
merge:
  merge_distance: 0.1
completeness:
  min_wall_count: 4
"#;
    let config = GrihaConfig::from_yaml(yaml).unwrap();
    let mut model = model_from(&config);

    for observation in &living_room() {
        model.ingest(observation);
    }

    // Three walls is no longer enough under the stricter completeness bar
    assert_eq!(model.stats().wall_count, 3);
    assert!(!model.is_complete());
    assert!(model.scan_progress() < 1.0);
}
