use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use texcal::config::load_suitable_config;
use texcal::latex::{render_calendar, CalendarJob};
use texcal::logging::init_logging;
use texcal::time::{FIRST_PAGE_YEAR, LAST_PAGE_YEAR};

/// texcal - printable LaTeX wall calendars
#[derive(Parser, Debug)]
#[command(name = "texcal")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Years to render (defaults to the current year)
    #[arg(value_parser = clap::value_parser!(u16)
        .range(i64::from(FIRST_PAGE_YEAR)..=i64::from(LAST_PAGE_YEAR)))]
    years: Vec<u16>,

    /// Month to render (1-12); repeat for several. Defaults to the rest of
    /// the current year, or all twelve months when years are given
    #[arg(short, long = "month", value_parser = clap::value_parser!(u8).range(1..=12))]
    months: Vec<u8>,

    /// Write the output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the holidays of the selected months instead of LaTeX
    #[arg(long)]
    list_holidays: bool,
}

impl Cli {
    /// Years and months as given, `None` where the list was left empty.
    fn selection(&self) -> (Option<Vec<u16>>, Option<Vec<u8>>) {
        let years = (!self.years.is_empty()).then(|| self.years.clone());
        let months = (!self.months.is_empty()).then(|| self.months.clone());
        (years, months)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = init_logging(cli.log_file.as_deref()).context("failed to start logging")?;

    let config = load_suitable_config(cli.config.as_deref())?;
    let calendar = config.holiday_calendar()?;
    let style = config.style()?;

    let (years, months) = cli.selection();
    let job = CalendarJob::resolve(years, months, texcal::today()?)?;

    let text = if cli.list_holidays {
        texcal::list_holidays(&job, calendar.as_ref())?
    } else {
        render_calendar(&job, calendar.as_ref(), &style)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, &text)
                .with_context(|| format!("cannot write `{}`", path.display()))?;
            info!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }

    Ok(())
}
