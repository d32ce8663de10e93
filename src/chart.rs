use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::color::SetColors;
use crate::data::model::{DatasetError, TimingDataset};

// ---------------------------------------------------------------------------
// Static chart rendering
// ---------------------------------------------------------------------------

/// Render the access-time chart for the selected sets to a PNG file.
///
/// One line per set at partial opacity, plus a dashed horizontal line at the
/// decision threshold. NaN readings (dropped probes) leave a gap in the
/// line. Set names and plot geometry are validated before the plotting
/// backend is touched, so a bad selection never leaves a partial output
/// file behind.
pub fn render_png(
    dataset: &TimingDataset,
    sets: &[String],
    threshold: f64,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    if dataset.is_empty() {
        return Err(DatasetError::Empty.into());
    }
    for set in sets {
        if !dataset.has_set(set) {
            return Err(DatasetError::missing_set(set, dataset).into());
        }
    }

    let x_min = dataset.rows.first().map(|r| r.sample).unwrap_or(0) as f64;
    let mut x_max = dataset.rows.last().map(|r| r.sample).unwrap_or(0) as f64;
    if x_max <= x_min {
        // Single-sample capture: keep the x range non-degenerate.
        x_max = x_min + 1.0;
    }

    let mut y_max: f64 = threshold;
    for set in sets {
        for (_, v) in dataset.series(set)? {
            if v.is_finite() {
                y_max = y_max.max(v);
            }
        }
    }
    let y_max = y_max * 1.1;

    let colors = SetColors::new(sets);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Prime+Probe Cache Access Times", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Sample")
        .y_desc("Access Time (cycles)")
        .draw()?;

    draw_series(&mut chart, dataset, sets, threshold, &colors, (x_min, x_max))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;

    log::info!("Wrote {} ({}x{})", path.display(), size.0, size.1);
    Ok(())
}

/// Draw the per-set lines and the dashed threshold line.
///
/// Text decorations (caption, axis labels, legend box) stay in
/// [`render_png`]; this part of the pipeline needs no fonts. Each set gets
/// one legend entry even when dropped probes split it into several runs.
fn draw_series(
    chart: &mut ChartContext<'_, BitMapBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    dataset: &TimingDataset,
    sets: &[String],
    threshold: f64,
    colors: &SetColors,
    x_span: (f64, f64),
) -> Result<()> {
    for set in sets {
        let (r, g, b) = colors.color_for(set);
        let color = RGBColor(r, g, b);
        let mut labelled = false;
        for run in dataset.finite_runs(set)? {
            let points = run.into_iter().map(|(s, v)| (s as f64, v));
            let series =
                chart.draw_series(LineSeries::new(points, color.mix(0.7).stroke_width(2)))?;
            if !labelled {
                series
                    .label(set)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
                labelled = true;
            }
        }
    }

    chart
        .draw_series(DashedLineSeries::new(
            vec![(x_span.0, threshold), (x_span.1, threshold)],
            8,
            6,
            RED.stroke_width(2),
        ))?
        .label(format!("Threshold ({threshold} cycles)"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    #[test]
    fn unknown_set_fails_before_creating_output() {
        let ds = read_csv("Sample,Set0\n0,1\n1,2\n".as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        let err = render_png(&ds, &["Set99".to_string()], 200.0, &out, (100, 100)).unwrap_err();
        assert!(err.downcast_ref::<DatasetError>().is_some());
        assert!(!out.exists());
    }

    #[test]
    fn empty_dataset_fails_before_creating_output() {
        let ds = read_csv("Sample,Set0\n".as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        let err = render_png(&ds, &["Set0".to_string()], 200.0, &out, (100, 100)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::Empty)
        ));
        assert!(!out.exists());
    }

    #[test]
    fn draws_gapped_series_without_text_decorations() {
        // Blank Set0 cell at sample 1: the line breaks instead of drawing
        // a segment through the dropped probe.
        let ds = read_csv("Sample,Set0,Set16\n0,150,100\n1,,210\n2,180,190\n".as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plain.png");
        let sets = vec!["Set0".to_string(), "Set16".to_string()];
        let colors = SetColors::new(&sets);

        {
            let root = BitMapBackend::new(&out, (200, 120)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(0f64..2f64, 0f64..250f64)
                .unwrap();
            draw_series(&mut chart, &ds, &sets, 200.0, &colors, (0.0, 2.0)).unwrap();
            root.present().unwrap();
        }

        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }
}
