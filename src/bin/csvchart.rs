use csvchart::plot::parse_cli;
use csvchart::view;
use csvchart::{ChartError, TimeSeries};

fn main() -> Result<(), ChartError> {
    let csvin = parse_cli();
    println!("read data from {}", csvin.to_str().unwrap_or_default());
    let timeseries = TimeSeries::from_csv(csvin)?;
    println!(
        "plotting {} rows of {} vs {}",
        timeseries.time.len(),
        timeseries.ylabel,
        timeseries.xlabel
    );
    view::show(timeseries)
}
