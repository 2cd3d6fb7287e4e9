use crate::domain::metrics::TierMetricsTable;
use crate::services::model_types::{ModelOutput, RoiSummary, YearlyResult};

pub fn format_model_report(output: &ModelOutput) -> String {
    let mut lines = Vec::new();
    lines.push("Financial Model Report".to_string());
    lines.push(format!("Horizon: {} years", output.years.len()));
    lines.push(String::new());
    lines.push("Yearly results:".to_string());
    lines.push(
        "Year | Y1 | Y2 | Full | Total | Billable revenue | Contract revenue | Total revenue | Operating cost | Operating profit | Margin | Cumulative cash flow"
            .to_string(),
    );
    lines.push(
        "-----|----|----|------|-------|------------------|------------------|---------------|----------------|------------------|--------|---------------------"
            .to_string(),
    );
    lines.extend(output.years.iter().map(format_year_row));
    lines.push(String::new());
    lines.extend(format_roi_summary(&output.roi));

    let target_years: Vec<String> = output
        .years
        .iter()
        .filter(|year| year.meets_target_margin == Some(true))
        .map(|year| year.year.to_string())
        .collect();
    if output.years.iter().any(|year| year.meets_target_margin.is_some()) {
        let met = if target_years.is_empty() {
            "none".to_string()
        } else {
            target_years.join(", ")
        };
        lines.push(format!("Years meeting target margin: {met}"));
    }

    lines.join("\n")
}

pub fn format_tier_metrics(table: &TierMetricsTable) -> String {
    let mut lines = Vec::new();
    lines.push("Consultant Metrics per Tier".to_string());
    lines.push(
        "Tier | Admin h | Billable h | Maintenance h | Sales h | Billable revenue | Leads | Contracts | Contract revenue | Cost | Potential profit"
            .to_string(),
    );
    lines.push(
        "-----|---------|------------|---------------|---------|------------------|-------|-----------|------------------|------|-----------------"
            .to_string(),
    );
    for metrics in table.iter() {
        lines.push(format!(
            "{tier} | {admin:.0} | {billable:.0} | {maintenance:.0} | {sales:.0} | {revenue:.0} | {leads:.1} | {contracts:.2} | {contract_revenue:.0} | {cost:.0} | {profit:.0}",
            tier = metrics.tier,
            admin = metrics.admin_hours,
            billable = metrics.billable_hours,
            maintenance = metrics.maintenance_hours,
            sales = metrics.sales_hours,
            revenue = metrics.billable_revenue,
            leads = metrics.generated_leads,
            contracts = metrics.won_contracts,
            contract_revenue = metrics.potential_contract_revenue,
            cost = metrics.total_cost,
            profit = metrics.potential_profit,
        ));
    }
    lines.join("\n")
}

fn format_year_row(year: &YearlyResult) -> String {
    format!(
        "{} | {} | {} | {} | {} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.2}% | {:.0}",
        year.year,
        year.year1_consultants,
        year.year2_consultants,
        year.full_consultants,
        year.total_consultants,
        year.billable_revenue,
        year.contract_revenue,
        year.total_revenue,
        year.total_operating_cost,
        year.operating_profit,
        year.operating_margin * 100.0,
        year.cumulative_cash_flow
    )
}

fn format_roi_summary(roi: &RoiSummary) -> Vec<String> {
    let roi_value = if roi.roi.is_infinite() {
        "infinite".to_string()
    } else {
        format!("{:.2}%", roi.roi * 100.0)
    };
    vec![
        format!("Total recruiting cost: {:.0}", roi.total_recruiting_cost),
        format!("Cumulative operating profit: {:.0}", roi.cumulative_operating_profit),
        format!("ROI: {roi_value}"),
        format!("Payback: {}", roi.payback_period),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::ModelParameters;
    use crate::services::financial_model::run_financial_model;
    use crate::services::model_types::PaybackPeriod;
    use crate::test_support::params_with_plan;

    #[test]
    fn format_model_report_includes_header_rows_and_summary() {
        let output = run_financial_model(&ModelParameters::default()).unwrap();
        let report = format_model_report(&output);

        assert!(report.contains("Financial Model Report"));
        assert!(report.contains("Horizon: 5 years"));
        assert!(report.contains("Year | Y1 | Y2 | Full | Total"));
        assert!(report.contains("1 | 2 | 0 | 0 | 2 | 270000 | 0 | 270000 | 1440000 | -1170000 |"));
        assert!(report.contains("Total recruiting cost: 700000"));
        assert!(report.contains("Payback: year 3"));
        assert!(report.contains("Years meeting target margin:"));
    }

    #[test]
    fn format_model_report_marks_infinite_roi_and_missing_payback() {
        let mut output = run_financial_model(&params_with_plan(vec![1])).unwrap();
        output.roi.roi = f64::INFINITY;
        output.roi.payback_period = PaybackPeriod::NotWithinHorizon;

        let report = format_model_report(&output);
        assert!(report.contains("ROI: infinite"));
        assert!(report.contains("Payback: not within horizon"));
    }

    #[test]
    fn format_model_report_omits_target_line_without_target() {
        let params = ModelParameters {
            target_operating_margin: None,
            ..ModelParameters::default()
        };
        let output = run_financial_model(&params).unwrap();
        let report = format_model_report(&output);
        assert!(!report.contains("target margin"));
    }

    #[test]
    fn format_tier_metrics_lists_every_tier() {
        let output = run_financial_model(&ModelParameters::default()).unwrap();
        let table = format_tier_metrics(&output.tier_metrics);

        assert!(table.contains("Consultant Metrics per Tier"));
        assert!(table.contains("Year 1 | 90 | 270 | 0 | 1440 | 135000 | 0.6 | 0.21 | 420000 | 620000 | -65000"));
        assert!(table.contains("Year 2 | 90 | 648 | 135 | 927 |"));
        assert!(table.contains("Full | 90 | 1080 | 270 | 360 | 540000 | 6.0 | 2.10 | 4200000 | 620000 | 4120000"));
    }
}
