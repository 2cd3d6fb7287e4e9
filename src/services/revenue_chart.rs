use plotters::prelude::*;
use thiserror::Error;

use crate::services::model_types::YearlyResult;

#[derive(Error, Debug)]
pub enum RevenueChartError {
    #[error("no yearly results to plot")]
    EmptyResults,
    #[error("failed to render revenue chart: {0}")]
    Render(String),
}

const BAR_HALF_WIDTH: f64 = 0.35;

/// Renders billable revenue and lagged contract revenue as stacked bars per
/// year, so each bar reaches the year's total revenue.
pub fn write_revenue_chart_png(
    output_path: &str,
    years: &[YearlyResult],
) -> Result<(), RevenueChartError> {
    if years.is_empty() {
        return Err(RevenueChartError::EmptyResults);
    }
    render_revenue_chart_png(output_path, years)
}

fn render_revenue_chart_png(
    output_path: &str,
    years: &[YearlyResult],
) -> Result<(), RevenueChartError> {
    let max_revenue = years
        .iter()
        .map(|year| year.billable_revenue + year.contract_revenue)
        .fold(0.0_f64, f64::max);
    let y_range = 0.0..(max_revenue * 1.1).max(1.0);
    let x_range = 0.5_f64..(years.len() as f64 + 0.5);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| RevenueChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Revenue Structure", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(110)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| RevenueChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Year")
        .y_desc("Revenue")
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
        .map_err(|e| RevenueChartError::Render(e.to_string()))?;

    let billable_color = RGBColor(30, 122, 204);
    let billable_style = ShapeStyle::from(&billable_color).filled();
    chart
        .draw_series(years.iter().map(|year| {
            let x = f64::from(year.year);
            Rectangle::new(
                [
                    (x - BAR_HALF_WIDTH, 0.0),
                    (x + BAR_HALF_WIDTH, year.billable_revenue),
                ],
                billable_style,
            )
        }))
        .map_err(|e| RevenueChartError::Render(e.to_string()))?
        .label("Billable revenue")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], billable_style));

    let contract_color = RGBColor(214, 96, 36);
    let contract_style = ShapeStyle::from(&contract_color).filled();
    chart
        .draw_series(years.iter().map(|year| {
            let x = f64::from(year.year);
            Rectangle::new(
                [
                    (x - BAR_HALF_WIDTH, year.billable_revenue),
                    (
                        x + BAR_HALF_WIDTH,
                        year.billable_revenue + year.contract_revenue,
                    ),
                ],
                contract_style,
            )
        }))
        .map_err(|e| RevenueChartError::Render(e.to_string()))?
        .label("Contract revenue")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], contract_style));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| RevenueChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| RevenueChartError::Render(e.to_string()))?;
    Ok(())
}
