use grade_mapper::config::GradingConfig;
use grade_mapper::display::format_grade;
use grade_mapper::grading::{ComplexityLevel, compute};
use grade_mapper::output::to_json;
use grade_mapper::parser::parse_score;
use grade_mapper::session;
use std::io::Cursor;

#[test]
fn test_typed_score_to_grades() {
    let raw = parse_score("24,0").expect("score should parse");
    let results = compute(raw, 30.0, ComplexityLevel::Triple);

    let shown: Vec<String> = results.iter().map(|r| format_grade(r.score)).collect();
    assert_eq!(shown, vec!["7-", "7+", "8"]);
}

#[test]
fn test_dual_ceilings_at_full_marks() {
    let results = compute(50.0, 50.0, ComplexityLevel::Dual);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].label, "Basic");
    assert_eq!(results[0].score, 8.0);
    assert_eq!(results[1].label, "Advanced");
    assert_eq!(results[1].score, 10.0);
}

#[test]
fn test_json_report_round_trips_through_serde() {
    let config = GradingConfig {
        total_points: 30.0,
        levels: ComplexityLevel::Single,
    };
    let results = compute(33.0, config.total_points, config.levels);
    let json = to_json(33.0, &config, &results).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["over_limit"], true);
    assert_eq!(value["attainment_percent"], 100.0);
    assert_eq!(value["results"][0]["score"], 10.0);
}

#[test]
fn test_interactive_session_logs_csv() {
    let path = format!(
        "{}/grade_mapper_integration_session.csv",
        std::env::temp_dir().display()
    );
    let _ = std::fs::remove_file(&path);

    let config = GradingConfig::default();
    let mut out = Vec::new();
    let graded = session::run(&config, Cursor::new("0\n18\n30\n"), &mut out, Some(&path)).unwrap();
    assert_eq!(graded, 3);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let score_col = reader
        .headers()
        .unwrap()
        .iter()
        .position(|h| h == "score")
        .expect("score column");
    let scores: Vec<f64> = reader
        .records()
        .map(|r| r.unwrap()[score_col].parse().unwrap())
        .collect();
    assert_eq!(scores, vec![2.0, 2.0, 2.0, 6.0, 6.0, 6.0, 7.5, 8.5, 10.0]);

    std::fs::remove_file(&path).unwrap();
}
