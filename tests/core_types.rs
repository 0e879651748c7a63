use detnms::{area, intersection_area, iou, BBox, DetNmsError, Detection, PostprocessConfig};

#[test]
fn bbox_try_new_rejects_malformed_coordinates() {
    let err = BBox::try_new(0.0, 5.0, 10.0, 1.0).err().unwrap();
    assert_eq!(
        err,
        DetNmsError::MalformedBox {
            x1: 0.0,
            y1: 5.0,
            x2: 10.0,
            y2: 1.0,
        }
    );
    assert!(BBox::try_new(f32::NAN, 0.0, 1.0, 1.0).is_err());
    assert!(BBox::try_new(0.0, 0.0, 0.0, 0.0).is_ok());
}

#[test]
fn bbox_accessors_match_corners() {
    let bbox = BBox::try_new(55.0, 55.0, 145.0, 195.0).unwrap();
    assert_eq!(bbox.width(), 90.0);
    assert_eq!(bbox.height(), 140.0);
    assert_eq!(bbox.area(), 12600.0);
    assert_eq!(area(&bbox), bbox.area());
    assert_eq!(bbox.center(), (100.0, 125.0));
}

#[test]
fn intersection_is_clamped_for_disjoint_boxes() {
    let a = BBox::new(0.0, 0.0, 10.0, 10.0);
    let b = BBox::new(20.0, 20.0, 30.0, 30.0);
    assert_eq!(intersection_area(&a, &b), 0.0);
    assert_eq!(iou(&a, &b), 0.0);
}

#[test]
fn iou_of_contained_box_is_area_ratio() {
    let outer = BBox::new(0.0, 0.0, 10.0, 10.0);
    let inner = BBox::new(2.0, 2.0, 7.0, 7.0);
    assert!((iou(&outer, &inner) - 0.25).abs() < 1e-6);
    assert_eq!(outer.iou(&inner), iou(&inner, &outer));
}

#[test]
fn iou_of_two_points_is_zero() {
    let a = BBox::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(iou(&a, &a), 0.0);
}

#[test]
fn detection_keeps_metadata() {
    let det = Detection::new(BBox::new(1.0, 2.0, 3.0, 4.0), 0.75, 1, "car");
    assert_eq!(det.class_id, 1);
    assert_eq!(det.class_label, "car");
    assert_eq!(det.score, 0.75);
}

#[test]
fn config_defaults_and_validation() {
    let cfg = PostprocessConfig::default();
    assert_eq!(cfg.score_threshold, 0.5);
    assert_eq!(cfg.iou_threshold, 0.5);
    assert!(!cfg.per_class);
    assert!(cfg.validate().is_ok());

    let bad = PostprocessConfig {
        score_threshold: f32::NAN,
        ..cfg
    };
    let err = bad.validate().err().unwrap();
    assert!(matches!(
        err,
        DetNmsError::InvalidThreshold {
            name: "score_threshold",
            ..
        }
    ));
    assert!(err.to_string().contains("score_threshold"));
}
