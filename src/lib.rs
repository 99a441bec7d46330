use plotters::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;
pub mod plot;
pub mod view;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// Errors raised while loading the csv time series.
/// Row 0 is the header, data rows count from 1; fields count from 0.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("could not read the csv file: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv row {row} has fewer than two fields")]
    Format { row: usize },
    #[error("csv row {row}, field {field} is not a number: {source}")]
    Parse {
        row: usize,
        field: usize,
        source: ParseFloatError,
    },
}

/// The main struct for the plotted time series:
/// two parallel columns of values and the axis labels from the csv header.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub xlabel: String,
    pub ylabel: String,
    pub time: Vec<f64>,
    pub buffer: Vec<f64>,
}

impl TimeSeries {
    pub fn new(xlabel: String, ylabel: String, capacity: usize) -> TimeSeries {
        let time: Vec<f64> = Vec::with_capacity(capacity);
        let buffer: Vec<f64> = Vec::with_capacity(capacity);
        TimeSeries {
            xlabel,
            ylabel,
            time,
            buffer,
        }
    }

    /// Init a TimeSeries from csv:
    /// the first row gives the two axis labels verbatim,
    /// every following row gives one (time, value) pair.
    /// Rows are kept in file order; extra fields beyond the first two are ignored.
    pub fn from_csv(fin: PathBuf) -> Result<TimeSeries, ChartError> {
        let file = File::open(fin)?;
        let buf = BufReader::new(file);
        let mut lines = buf.lines();
        let header = match lines.next() {
            Some(l) => l?,
            None => return Err(ChartError::Format { row: 0 }),
        };
        let mut labels = header.trim_end_matches('\r').split(',');
        let (xlabel, ylabel) = match (labels.next(), labels.next()) {
            (Some(x), Some(y)) => (x.to_string(), y.to_string()),
            _ => return Err(ChartError::Format { row: 0 }),
        };
        let mut timeseries = TimeSeries::new(xlabel, ylabel, 10000 as usize);
        for (i, l) in lines.enumerate() {
            let row = i + 1;
            let l = l?;
            let mut fields = l.split(',');
            let (field_time, field_value) = match (fields.next(), fields.next()) {
                (Some(t), Some(v)) => (t, v),
                _ => return Err(ChartError::Format { row }),
            };
            let t: f64 = field_time
                .trim()
                .parse()
                .map_err(|source| ChartError::Parse {
                    row,
                    field: 0,
                    source,
                })?;
            let v: f64 = field_value
                .trim()
                .parse()
                .map_err(|source| ChartError::Parse {
                    row,
                    field: 1,
                    source,
                })?;
            timeseries.time.push(t);
            timeseries.buffer.push(v);
        }
        Ok(timeseries)
    }

    /// Draws the line chart into an rgb888 pixel buffer of the given size,
    /// connecting the points in sequence order and
    /// labelling the axes from the csv header.
    pub fn draw_into(
        &self,
        frame: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (xmin, xmax) = axis_range(&self.time);
        let (ymin, ymax) = axis_range(&self.buffer);
        let root = BitMapBackend::with_buffer(frame, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(2))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 20))
            .x_desc(&self.xlabel)
            .y_desc(&self.ylabel)
            .draw()?;
        let line = LineSeries::new(
            self.time
                .iter()
                .zip(self.buffer.iter())
                .map(|(&x, &y)| (x, y)),
            RGBColor(180, 10, 180).stroke_width(3),
        );
        chart.draw_series(line)?;
        root.present()?;
        Ok(())
    }
}

/// Axis min and max for a data column: the data extent plus a 5% margin.
/// An empty column falls back to the 0..1 range and a constant column is
/// widened symmetrically, so an empty or flat series still renders.
pub fn axis_range(v: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &e in v {
        if e < min {
            min = e
        }
        if e > max {
            max = e
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let margin = (max - min) / 20.;
    return (min - margin, max + margin);
}
