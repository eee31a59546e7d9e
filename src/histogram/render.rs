use std::path::Path;

use plotters::prelude::*;

use crate::error::{PunchcardError, Result};
use crate::model::Aggregation;

const CHART_SIZE: (u32, u32) = (1280, 480);

/// Draw the 24-bucket histogram as a PNG, one bar series per author stacked
/// in the aggregation's first-seen order. Overwrites `path` if it exists.
/// A legend is drawn only when more than one series is present.
pub fn render(agg: &Aggregation, title: &str, path: &Path) -> Result<()> {
    let series: Vec<(&str, [u32; 24])> = agg
        .authors
        .iter()
        .map(|a| (a.author.as_str(), Aggregation::bucket_counts(&a.hours)))
        .collect();

    let mut totals = [0u32; 24];
    for (_, counts) in &series {
        for (hour, count) in counts.iter().enumerate() {
            totals[hour] += count;
        }
    }
    let y_max = totals.iter().copied().max().unwrap_or(0).max(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(48)
        .build_cartesian_2d(0u32..24u32, 0u32..y_max + 1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(25)
        .x_label_formatter(&|hour| {
            if *hour < 24 {
                format!("{hour}:00")
            } else {
                String::new()
            }
        })
        .x_desc("Hour of Day (US/Eastern)")
        .y_desc("Number of Commits")
        .draw()
        .map_err(chart_err)?;

    let multi_series = series.len() > 1;
    let mut baseline = [0u32; 24];

    for (i, (name, counts)) in series.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        let bars: Vec<_> = (0..24u32)
            .filter(|&hour| counts[hour as usize] > 0)
            .map(|hour| {
                let lo = baseline[hour as usize];
                let hi = lo + counts[hour as usize];
                Rectangle::new([(hour, lo), (hour + 1, hi)], color.filled())
            })
            .collect();

        let anno = chart.draw_series(bars).map_err(chart_err)?;
        if multi_series {
            anno.label(*name).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
        }

        for hour in 0..24 {
            baseline[hour] += counts[hour];
        }
    }

    if multi_series {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

fn chart_err<E: std::fmt::Display>(err: E) -> PunchcardError {
    PunchcardError::Chart(err.to_string())
}
