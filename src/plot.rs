use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Builds the CLI for plotting the csv time series.
fn build_cli() -> App<'static, 'static> {
    let arg_csvin = Arg::with_name("csvfile")
        .help("path of the csv file to plot")
        .required(true)
        .index(1);
    App::new("csvchart")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot a two-column time-series csv file as a line chart")
        .arg(arg_csvin)
}

/// Takes the CLI arguments that control the plotting of the csv time series.
pub fn parse_cli() -> PathBuf {
    let cli_args = build_cli().get_matches();
    let csvin = PathBuf::from(cli_args.value_of("csvfile").unwrap_or_default());
    return csvin;
}
