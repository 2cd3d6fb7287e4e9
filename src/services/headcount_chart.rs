use plotters::prelude::*;
use thiserror::Error;

use crate::domain::tier::ConsultantTier;
use crate::services::model_types::YearlyResult;

#[derive(Error, Debug)]
pub enum HeadcountChartError {
    #[error("no yearly results to plot")]
    EmptyResults,
    #[error("failed to render headcount chart: {0}")]
    Render(String),
}

/// Renders the end-of-year headcount per tier as stacked areas.
pub fn write_headcount_chart_png(
    output_path: &str,
    years: &[YearlyResult],
) -> Result<(), HeadcountChartError> {
    if years.is_empty() {
        return Err(HeadcountChartError::EmptyResults);
    }
    render_headcount_chart_png(output_path, years)
}

fn tier_count(year: &YearlyResult, tier: ConsultantTier) -> f64 {
    let count = match tier {
        ConsultantTier::Year1 => year.year1_consultants,
        ConsultantTier::Year2 => year.year2_consultants,
        ConsultantTier::Full => year.full_consultants,
    };
    f64::from(count)
}

fn tier_color(tier: ConsultantTier) -> RGBColor {
    match tier {
        ConsultantTier::Year1 => RGBColor(242, 175, 41),
        ConsultantTier::Year2 => RGBColor(214, 96, 36),
        ConsultantTier::Full => RGBColor(30, 122, 204),
    }
}

fn render_headcount_chart_png(
    output_path: &str,
    years: &[YearlyResult],
) -> Result<(), HeadcountChartError> {
    let max_headcount = years
        .iter()
        .map(|year| f64::from(year.total_consultants))
        .fold(0.0_f64, f64::max);
    let y_range = 0.0..(max_headcount * 1.1).max(1.0);
    let x_range = 0.5_f64..(years.len() as f64 + 0.5);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HeadcountChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Consultants per Tier", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| HeadcountChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Year")
        .y_desc("Consultants")
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
        .map_err(|e| HeadcountChartError::Render(e.to_string()))?;

    // Full at the bottom. Each area is drawn up to the running total of its
    // tier and every tier below it, largest first, so later areas cover the
    // lower part of earlier ones.
    let stack_order = [ConsultantTier::Full, ConsultantTier::Year2, ConsultantTier::Year1];
    for depth in (0..stack_order.len()).rev() {
        let tier = stack_order[depth];
        let color = tier_color(tier);
        let points = years.iter().map(|year| {
            let stacked: f64 = stack_order[..=depth]
                .iter()
                .map(|tier| tier_count(year, *tier))
                .sum();
            (f64::from(year.year), stacked)
        });
        chart
            .draw_series(AreaSeries::new(points, 0.0, color.mix(0.7).filled()).border_style(&color))
            .map_err(|e| HeadcountChartError::Render(e.to_string()))?
            .label(tier.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| HeadcountChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HeadcountChartError::Render(e.to_string()))?;
    Ok(())
}
