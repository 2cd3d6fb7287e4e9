use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const PARAMETERS_YAML: &str = r#"
consultant:
  hours_per_month: 150
  billable_rate: 500.0
  annual_salary: 500000.0
  admin_fraction: 0.05
  billable_fraction: 0.6
  maintenance_fraction: 0.15
ramp_up:
  year1_billable_efficiency: 0.25
  year2_billable_efficiency: 0.6
  year1_sales_efficiency: 0.1
  year2_sales_efficiency: 0.5
sales:
  leads_per_consultant: 6
  average_contract_value: 2000000
  conversion_rate: 0.35
corporate:
  overhead_per_consultant: 120000
  recruiting_cost_per_hire: 100000
targets:
  operating_margin: 0.15
model:
  horizon_years: 5
hiring_plan: [2, 2, 3, 0, 0]
"#;

#[test]
fn simulate_writes_yaml_output_and_prints_report() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("params.yaml");
    input.write_str(PARAMETERS_YAML).unwrap();
    let output = temp.child("results.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("staffing-model");
    cmd.args([
        "simulate",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Financial Model Report"))
        .stdout(predicate::str::contains("Payback: year 3"))
        .stdout(predicate::str::contains("Model result written to"));

    let contents = fs::read_to_string(output.path()).unwrap();
    assert!(contents.contains("tier_metrics:"));
    assert!(contents.contains("years:"));
    assert!(contents.contains("roi:"));
    assert!(contents.contains("payback_period: 3"));
    assert!(contents.contains("year1_consultants: 2"));
    assert!(contents.contains("meets_target_margin:"));
}

#[test]
fn simulate_writes_json_output_and_chart() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("params.yaml");
    input.write_str(PARAMETERS_YAML).unwrap();
    let output = temp.child("results.json");
    let chart = temp.child("cash_flow.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("staffing-model");
    cmd.args([
        "simulate",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
        "--format",
        "json",
        "--chart",
        chart.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cash flow chart written to"));

    let contents = fs::read_to_string(output.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let years = value["years"].as_array().unwrap();
    assert_eq!(years.len(), 5);
    assert_eq!(years[0]["contract_revenue"].as_f64(), Some(0.0));
    assert_eq!(years[4]["total_consultants"].as_u64(), Some(7));
    assert_eq!(value["roi"]["payback_period"].as_u64(), Some(3));

    chart.assert(predicate::path::exists());
    assert!(fs::metadata(chart.path()).unwrap().len() > 0);
}

#[test]
fn simulate_rejects_hiring_plan_not_covering_horizon() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("params.yaml");
    input
        .write_str(&PARAMETERS_YAML.replace("hiring_plan: [2, 2, 3, 0, 0]", "hiring_plan: [2, 2, 3]"))
        .unwrap();
    let output = temp.child("results.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("staffing-model");
    cmd.args([
        "simulate",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load parameters"))
        .stderr(predicate::str::contains("hiring plan has 3 entries"));

    output.assert(predicate::path::missing());
}

#[test]
fn simulate_rejects_missing_parameter_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("results.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("staffing-model");
    cmd.args([
        "simulate",
        "-i",
        temp.child("missing.yaml").path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read parameter file"));
}

#[test]
fn simulate_writes_infinite_roi_as_text_in_json() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("params.yaml");
    input
        .write_str(
            &PARAMETERS_YAML
                .replace("recruiting_cost_per_hire: 100000", "recruiting_cost_per_hire: 0")
                .replace("horizon_years: 5", "horizon_years: 4")
                .replace("hiring_plan: [2, 2, 3, 0, 0]", "hiring_plan: [3, 0, 0, 0]"),
        )
        .unwrap();
    let output = temp.child("results.json");

    let mut cmd = assert_cmd::cargo_bin_cmd!("staffing-model");
    cmd.args([
        "simulate",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
        "--format",
        "json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ROI: infinite"));

    let contents = fs::read_to_string(output.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["roi"]["total_recruiting_cost"].as_f64(), Some(0.0));
    assert_eq!(value["roi"]["roi"].as_str(), Some("infinity"));
}

#[test]
fn simulate_writes_revenue_and_headcount_charts() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("params.yaml");
    input.write_str(PARAMETERS_YAML).unwrap();
    let output = temp.child("results.yaml");
    let revenue_chart = temp.child("revenue.png");
    let headcount_chart = temp.child("headcount.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("staffing-model");
    cmd.args([
        "simulate",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
        "--revenue-chart",
        revenue_chart.path().to_str().unwrap(),
        "--headcount-chart",
        headcount_chart.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Revenue chart written to"))
        .stdout(predicate::str::contains("Headcount chart written to"));

    for chart in [&revenue_chart, &headcount_chart] {
        chart.assert(predicate::path::exists());
        assert!(fs::metadata(chart.path()).unwrap().len() > 0);
    }
}
