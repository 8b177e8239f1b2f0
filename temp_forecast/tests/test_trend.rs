use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use rstest::rstest;
use temp_forecast::models::{ForecastModel, MovingAverageExtrapolation};
use temp_forecast::trend::{generate_trend_line, trend_line_from};
use temp_forecast::utils::synthetic_series;
use temp_forecast::{predict_moving_average, ObservedYear, PredictionModel};

fn create_test_data() -> Vec<ObservedYear> {
    vec![
        ObservedYear::new(2018, 26.1, 26.0),
        ObservedYear::new(2019, 26.3, 26.2),
        ObservedYear::new(2020, 26.2, 26.4),
        ObservedYear::new(2021, 26.7, 26.6),
        ObservedYear::new(2022, 26.9, 26.8),
    ]
}

#[test]
fn test_trend_line_steps_and_endpoints() {
    let series = create_test_data();
    let prediction = predict_moving_average(&series, 2030).prediction;

    let line =
        generate_trend_line(&series, prediction, 2030, PredictionModel::MovingAverage, 5).unwrap();

    // span 8 over 5 segments -> step of 2 years
    let years: Vec<i32> = line.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2022, 2024, 2026, 2028, 2030]);

    assert_relative_eq!(line[0].temperature, 26.8);
    assert_relative_eq!(line[1].temperature, 26.4 + 0.2 * 2.0, epsilon = 1e-9);
    assert_eq!(line.last().unwrap().temperature, prediction);
}

#[rstest]
#[case(2024)]
#[case(2027)]
#[case(2031)]
#[case(2059)]
#[case(2100)]
fn test_trend_line_ends_exactly_on_target(#[case] target: i32) {
    let series = create_test_data();
    let prediction = predict_moving_average(&series, target).prediction;

    for model in PredictionModel::ALL {
        let line = generate_trend_line(&series, prediction, target, model, 5).unwrap();

        assert_eq!(line.first().unwrap().year, 2022);
        assert_eq!(line.last().unwrap().year_label, target.to_string());
        assert_eq!(line.last().unwrap().temperature, prediction);

        let years: Vec<i32> = line.iter().map(|p| p.year).collect();
        assert!(years.windows(2).all(|w| w[0] < w[1]), "{:?}", years);
    }
}

#[test]
fn test_trend_line_target_equals_last_year() {
    let series = create_test_data();
    let line =
        generate_trend_line(&series, 99.0, 2022, PredictionModel::Polynomial, 5).unwrap();

    assert_eq!(line.len(), 1);
    assert_eq!(line[0].year, 2022);
    assert_relative_eq!(line[0].temperature, 26.8);
}

#[test]
fn test_trend_line_short_span_uses_single_year_steps() {
    let series = create_test_data();
    let trained = MovingAverageExtrapolation::new(5).unwrap().train(&series).unwrap();

    let line = trend_line_from(&series, 27.0, 2025, &trained, 5);
    let years: Vec<i32> = line.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2022, 2023, 2024, 2025]);
}

#[test]
fn test_trend_line_empty_series() {
    let line = generate_trend_line(&[], 0.0, 2030, PredictionModel::MovingAverage, 5).unwrap();
    assert!(line.is_empty());
}

#[test]
fn test_polynomial_trend_increases_for_warming_series() {
    let series = synthetic_series(1901, 122, 25.5, 0.015, 0.0, 1).unwrap();
    let fit = temp_forecast::fit_polynomial(series.records(), 1900).unwrap();
    let prediction = fit.predict(2080);

    let line = generate_trend_line(
        series.records(),
        prediction,
        2080,
        PredictionModel::Polynomial,
        5,
    )
    .unwrap();

    assert!(line.len() > 2);
    assert!(
        line.windows(2).all(|w| w[1].temperature > w[0].temperature),
        "{:?}",
        line
    );
}
