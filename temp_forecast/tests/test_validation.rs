use temp_forecast::{validate_against_history, ObservedYear};

fn create_test_data() -> Vec<ObservedYear> {
    vec![
        ObservedYear::new(2000, 25.5, 26.0),
        ObservedYear::new(2001, 27.0, 26.1),
        ObservedYear::new(2002, 26.0, 26.2),
    ]
}

#[test]
fn test_band_uses_annual_means() {
    let check = validate_against_history(26.0, &create_test_data(), 1.5);

    assert!(check.in_range);
    assert_eq!(check.allowed_min, 24.0);
    assert_eq!(check.allowed_max, 28.5);
}

#[test]
fn test_upper_bound_is_inclusive() {
    let series = create_test_data();

    assert!(validate_against_history(27.0 + 1.5, &series, 1.5).in_range);
    assert!(!validate_against_history(27.0 + 1.5 + 1e-9, &series, 1.5).in_range);
}

#[test]
fn test_lower_bound_is_inclusive() {
    let series = create_test_data();

    assert!(validate_against_history(25.5 - 1.5, &series, 1.5).in_range);
    assert!(!validate_against_history(25.5 - 1.5 - 1e-9, &series, 1.5).in_range);
}

#[test]
fn test_warning_only_when_out_of_range() {
    let series = create_test_data();

    let inside = validate_against_history(27.9, &series, 1.5);
    assert!(inside.warning(27.9).is_none());

    let outside = validate_against_history(31.2, &series, 1.5);
    let warning = outside.warning(31.2).unwrap();
    assert!(warning.contains("31.20°C"));
    assert!(warning.contains("24.00°C"));
    assert!(warning.contains("28.50°C"));
}

#[test]
fn test_empty_series_has_zero_centered_band() {
    let check = validate_against_history(0.5, &[], 1.5);

    assert!(check.in_range);
    assert_eq!(check.allowed_min, -1.5);
    assert_eq!(check.allowed_max, 1.5);
}
