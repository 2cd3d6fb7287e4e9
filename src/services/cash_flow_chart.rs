use plotters::prelude::*;
use thiserror::Error;

use crate::services::model_types::YearlyResult;

#[derive(Error, Debug)]
pub enum CashFlowChartError {
    #[error("no yearly results to plot")]
    EmptyResults,
    #[error("failed to render cash flow chart: {0}")]
    Render(String),
}

/// Renders operating profit and cumulative cash flow per year as a PNG line
/// chart.
pub fn write_cash_flow_chart_png(
    output_path: &str,
    years: &[YearlyResult],
) -> Result<(), CashFlowChartError> {
    if years.is_empty() {
        return Err(CashFlowChartError::EmptyResults);
    }
    render_chart_png(output_path, years)
}

fn render_chart_png(output_path: &str, years: &[YearlyResult]) -> Result<(), CashFlowChartError> {
    let (min_value, max_value) = years
        .iter()
        .flat_map(|year| [year.operating_profit, year.cumulative_cash_flow])
        .fold((0.0_f64, 0.0_f64), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    let padding = ((max_value - min_value) * 0.1).max(1.0);
    let y_range = (min_value - padding)..(max_value + padding);
    let x_range = 0.5_f64..(years.len() as f64 + 0.5);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CashFlowChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Operating Profit and Cash Flow", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(110)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| CashFlowChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Year")
        .y_desc("Amount")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(years.len().max(1))
        .x_label_formatter(&|value: &f64| {
            if value.fract().abs() < f64::EPSILON && *value >= 1.0 {
                format!("{value:.0}")
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|value: &f64| format!("{value:.0}"))
        .draw()
        .map_err(|e| CashFlowChartError::Render(e.to_string()))?;

    let zero_line = [(0.5, 0.0), (years.len() as f64 + 0.5, 0.0)];
    chart
        .draw_series(LineSeries::new(zero_line, &BLACK.mix(0.3)))
        .map_err(|e| CashFlowChartError::Render(e.to_string()))?;

    let profit_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            years
                .iter()
                .map(|year| (f64::from(year.year), year.operating_profit)),
            profit_color.stroke_width(3),
        ))
        .map_err(|e| CashFlowChartError::Render(e.to_string()))?
        .label("Operating profit")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &profit_color));

    let cash_flow_color = RGBColor(214, 96, 36);
    chart
        .draw_series(LineSeries::new(
            years
                .iter()
                .map(|year| (f64::from(year.year), year.cumulative_cash_flow)),
            cash_flow_color.stroke_width(3),
        ))
        .map_err(|e| CashFlowChartError::Render(e.to_string()))?
        .label("Cumulative cash flow")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &cash_flow_color));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| CashFlowChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| CashFlowChartError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::ModelParameters;
    use crate::services::financial_model::run_financial_model;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn write_cash_flow_chart_png_writes_file() {
        let output = run_financial_model(&ModelParameters::default()).unwrap();
        let chart_file = assert_fs::NamedTempFile::new("cash_flow.png").unwrap();

        write_cash_flow_chart_png(chart_file.path().to_str().unwrap(), &output.years).unwrap();

        chart_file.assert(predicate::path::exists());
        let metadata = std::fs::metadata(chart_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn write_cash_flow_chart_png_rejects_empty_results() {
        let chart_file = assert_fs::NamedTempFile::new("empty.png").unwrap();
        let error = write_cash_flow_chart_png(chart_file.path().to_str().unwrap(), &[])
            .expect_err("expected empty results error");
        assert!(matches!(error, CashFlowChartError::EmptyResults));
    }
}
