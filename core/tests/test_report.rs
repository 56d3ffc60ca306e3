// core/tests/test_report.rs
use steptracker_core::{
    daily_step_report, daily_step_report_text, training_report, training_report_text,
    Activity, CalculationError, ParseError,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn daily_text_contains_steps() {
    for (steps, dur) in [(1u64, "1s"), (678, "0h50m"), (12345, "2h15m"), (99_999, "10h")] {
        for (w, h) in [(50.0, 1.5), (84.6, 1.87), (120.0, 2.05)] {
            let out = daily_step_report_text(&format!("{steps},{dur}"), w, h);
            assert!(!out.is_empty());
            assert!(out.contains(&format!("Количество шагов: {steps}.")), "{out}");
        }
    }
}

#[test]
fn daily_text_exact_template() {
    let out = daily_step_report_text("678,0h50m", 84.6, 1.87);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Количество шагов: 678.");
    assert_eq!(lines[1], "Дистанция составила 0.44 км.");
    assert!(lines[2].starts_with("Вы сожгли ") && lines[2].ends_with(" ккал."));
    assert!(out.ends_with('\n'));
}

#[test]
fn distance_is_linear_in_steps() {
    let a = training_report("2000,бег,1h", 70.0, 1.8).unwrap();
    let b = training_report("4000,бег,1h", 70.0, 1.8).unwrap();
    assert!(approx(b.distance_km, 2.0 * a.distance_km));

    let a = daily_step_report("2000,1h", 70.0, 1.8).unwrap();
    let b = daily_step_report("4000,1h", 70.0, 1.8).unwrap();
    assert!(approx(b.distance_km, 2.0 * a.distance_km));
}

#[test]
fn running_label_variants_match() {
    let base = training_report("5000,бег,40m", 70.0, 1.8).unwrap();
    assert_eq!(base.activity, Activity::Running);
    for label in ["Running", "БЕГ", "running", "RUNNING", "Бег"] {
        let r = training_report(&format!("5000,{label},40m"), 70.0, 1.8).unwrap();
        assert_eq!(r.activity, Activity::Running);
        assert_eq!(r.distance_km, base.distance_km);
        assert_eq!(r.speed_kmh, base.speed_kmh);
        assert_eq!(r.calories_kcal, base.calories_kcal);
        assert_eq!(r.label, label);
    }
}

#[test]
fn step_counts_above_u32_are_accepted() {
    let r = training_report("5000000000,бег,1h", 70.0, 1.8).unwrap();
    assert_eq!(r.activity, Activity::Running);
    assert!((r.distance_km - 4_050_000.0).abs() < 1e-3);

    let out = daily_step_report_text("5000000000,1h", 70.0, 1.8);
    assert!(out.contains("Количество шагов: 5000000000."), "{out}");
    assert!(out.contains("Дистанция составила 3250000.00 км."), "{out}");

    let err = daily_step_report("99999999999999999999,1h", 70.0, 1.8).unwrap_err();
    assert!(matches!(err.as_parse(), Some(ParseError::InvalidStepCount(_))));
}

#[test]
fn zero_steps_is_invalid_step_count() {
    let err = training_report("0,бег,1h", 70.0, 1.8).unwrap_err();
    assert!(matches!(err.as_parse(), Some(ParseError::InvalidStepCount(_))));
}

#[test]
fn unknown_activity() {
    let err = training_report("1000,хоккей,45m", 70.0, 1.8).unwrap_err();
    assert!(matches!(
        err.as_parse(),
        Some(ParseError::UnknownActivity(l)) if l == "хоккей"
    ));
    assert!(training_report_text("1000,хоккей,45m", 70.0, 1.8).is_err());
}

#[test]
fn walking_is_half_of_running() {
    let run = training_report("6000,running,50m", 82.0, 1.76).unwrap();
    let walk = training_report("6000,walking,50m", 82.0, 1.76).unwrap();
    assert!(approx(walk.calories_kcal * 2.0, run.calories_kcal));
    assert_eq!(walk.distance_km, run.distance_km);
    assert_eq!(walk.speed_kmh, run.speed_kmh);
}

#[test]
fn daily_distance_ignores_height() {
    let short = daily_step_report("10000,2h", 70.0, 1.50).unwrap();
    let tall = daily_step_report("10000,2h", 70.0, 2.00).unwrap();
    assert_eq!(short.distance_km, tall.distance_km);
    assert!(approx(short.distance_km, 6.5));

    let short = training_report("10000,ходьба,2h", 70.0, 1.50).unwrap();
    let tall = training_report("10000,ходьба,2h", 70.0, 2.00).unwrap();
    assert!(tall.distance_km > short.distance_km);
    assert!(approx(short.distance_km, 6.75));
}

#[test]
fn malformed_records_never_panic() {
    for raw in ["abc,1h", "1000", "1000,1h,bad,extra", "", ",", "1000,", "1e3,1h"] {
        let err = daily_step_report(raw, 70.0, 1.8).unwrap_err();
        assert!(err.as_parse().is_some(), "{raw}: {err}");
        assert_eq!(daily_step_report_text(raw, 70.0, 1.8), "");
    }
    assert!(matches!(
        daily_step_report("1000", 70.0, 1.8).unwrap_err().as_parse(),
        Some(ParseError::MalformedRecord { expected: 2, found: 1 })
    ));
}

#[test]
fn invalid_profile_is_reported() {
    let err = training_report("1000,бег,1h", -70.0, 1.8).unwrap_err();
    assert!(matches!(
        err.as_calculation(),
        Some(CalculationError::InvalidProfile { .. })
    ));
    assert!(daily_step_report("1000,1h", 70.0, 0.0).is_err());
}

#[test]
fn training_text_template() {
    let out = training_report_text("1000,Бег,0h30m", 70.0, 1.8).unwrap();
    assert_eq!(
        out,
        "Тип тренировки: Бег\nДлительность: 0.50 ч.\nДистанция: 0.81 км.\nСкорость: 1.62 км/ч\nСожгли калорий: 56.70\n"
    );
}

#[test]
fn same_input_same_output() {
    let a = training_report_text("4321,ходьба,1h7m", 77.7, 1.77).unwrap();
    let b = training_report_text("4321,ходьба,1h7m", 77.7, 1.77).unwrap();
    assert_eq!(a, b);
}
