//! Wall-calendar rendering.
//!
//! Each (year, month) becomes one landscape page holding a seven-column
//! `tabularx` grid.  Day cells go through two preamble macros:
//! `\cellformat{day}` for plain days and `\holidayformat{day}{label}` for
//! days with a holiday.

use log::{debug, info};

use tc_core::errors::{Error, Result};
use tc_core::{ensure, fail};
use tc_time::{
    Date, DayCell, Emphasis, HolidayCalendar, MonthPage, WeekRow, Weekday, FIRST_PAGE_YEAR,
    LAST_PAGE_YEAR,
};

use crate::document::Document;
use crate::text::{grayed_out, label_to_latex};

/// Gray level for de-emphasized holiday labels.
pub const DEFAULT_HOLIDAY_GRAY: u8 = 50;

/// Gray level for day numbers borrowed from adjacent months.
pub const DEFAULT_OUT_OF_MONTH_GRAY: u8 = 25;

const PREAMBLE_EXTRAS: &str = r"
\setlength{\parindent}{0pt}
\setlength{\columnsep}{0pt}
\pagestyle{empty}

\newcommand{\cellformat}[1]{\hspace*{\fill}\raisebox{-0.05in}{\Large\textbf{#1}}\vspace*{0.95in}}
\newcommand{\holidayformat}[2]{\hspace*{\fill}\raisebox{-0.05in}{\Large\textbf{#1}}\vspace*{9.5ex} \newline\scalefont{0.8}{#2}}

";

const DAY_SEPARATOR: &str = " & ";

/// Presentation knobs for the rendered calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarStyle {
    /// Darkness (0–100) of grayed holiday labels.
    pub holiday_gray: u8,
    /// Darkness (0–100) of day numbers outside the page's month.
    pub out_of_month_gray: u8,
    /// Print a row of weekday names above the grid.
    pub day_names: bool,
    /// First column of every week.
    pub week_start: Weekday,
}

impl Default for CalendarStyle {
    fn default() -> Self {
        Self {
            holiday_gray: DEFAULT_HOLIDAY_GRAY,
            out_of_month_gray: DEFAULT_OUT_OF_MONTH_GRAY,
            day_names: true,
            week_start: Weekday::Sunday,
        }
    }
}

impl CalendarStyle {
    /// Check that both gray levels lie in 0–100.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.holiday_gray <= 100,
            "holiday gray level {} exceeds 100",
            self.holiday_gray
        );
        ensure!(
            self.out_of_month_gray <= 100,
            "out-of-month gray level {} exceeds 100",
            self.out_of_month_gray
        );
        Ok(())
    }
}

/// The (year, month) pages to render, year-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarJob {
    years: Vec<u16>,
    months: Vec<u8>,
}

impl CalendarJob {
    /// Render every month in `months` for every year in `years`.
    ///
    /// # Errors
    /// Fails when either list is empty, a year lies outside
    /// [`FIRST_PAGE_YEAR`]`..=`[`LAST_PAGE_YEAR`], or a month lies outside 1–12.
    pub fn new(years: Vec<u16>, months: Vec<u8>) -> Result<Self> {
        if years.is_empty() {
            fail!("no years to render");
        }
        if months.is_empty() {
            fail!("no months to render");
        }
        if let Some(bad) = years
            .iter()
            .find(|y| !(FIRST_PAGE_YEAR..=LAST_PAGE_YEAR).contains(*y))
        {
            return Err(Error::InvalidArgument(format!(
                "year {bad} out of range [{FIRST_PAGE_YEAR}, {LAST_PAGE_YEAR}]"
            )));
        }
        if let Some(bad) = months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(Error::InvalidArgument(format!(
                "month {bad} out of range [1, 12]"
            )));
        }
        Ok(Self { years, months })
    }

    /// Fill in defaults relative to `today`.
    ///
    /// * no years: `today`'s year;
    /// * no months and no years: the rest of the current year, starting
    ///   with `today`'s month;
    /// * no months but explicit years: all twelve months.
    pub fn resolve(years: Option<Vec<u16>>, months: Option<Vec<u8>>, today: Date) -> Result<Self> {
        let months = match (&years, months) {
            (_, Some(months)) => months,
            (None, None) => (today.month()..=12).collect(),
            (Some(_), None) => (1..=12).collect(),
        };
        let years = years.unwrap_or_else(|| vec![today.year()]);
        Self::new(years, months)
    }

    /// Years in output order.
    pub fn years(&self) -> &[u16] {
        &self.years
    }

    /// Months rendered for each year.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Every (year, month) pair in output order.
    pub fn pages(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.years
            .iter()
            .flat_map(move |&y| self.months.iter().map(move |&m| (y, m)))
    }
}

fn holiday_label(cell: &DayCell, style: &CalendarStyle) -> Option<String> {
    let holiday = cell.holiday.as_ref()?;
    let text = label_to_latex(holiday.name());
    Some(match holiday.emphasis() {
        Emphasis::Primary => text,
        Emphasis::Grayed => grayed_out(&text, style.holiday_gray),
    })
}

/// Markup for one grid cell.
pub fn render_day(cell: &DayCell, style: &CalendarStyle) -> String {
    if !cell.in_month {
        let day = grayed_out(&cell.day().to_string(), style.out_of_month_gray);
        return format!("\\cellformat{{{day}}}");
    }
    match holiday_label(cell, style) {
        Some(label) => format!("\\holidayformat{{{}}}{{{label}}}", cell.day()),
        None => format!("\\cellformat{{{}}}", cell.day()),
    }
}

fn begin_week(first: bool) -> &'static str {
    if first {
        ""
    } else {
        "\\hline\n"
    }
}

fn end_week(first: bool, last: bool) -> &'static str {
    if first || last {
        " \\\\ \n\\hline\n"
    } else {
        " \\\\ \n"
    }
}

fn render_day_names(week_start: Weekday) -> String {
    let names: Vec<String> = week_start
        .week_from()
        .iter()
        .map(|w| format!("\\multicolumn{{1}}{{|c|}}{{\\textbf{{{w}}}}}"))
        .collect();
    format!(
        "{}{}{}",
        begin_week(true),
        names.join(DAY_SEPARATOR),
        end_week(true, false)
    )
}

fn render_week(row: &WeekRow, style: &CalendarStyle) -> String {
    // With a header row above, the header closes the top of the table.
    let first = row.is_first() && !style.day_names;
    let cells: Vec<String> = row.cells().iter().map(|c| render_day(c, style)).collect();
    format!(
        "{}{}{}",
        begin_week(first),
        cells.join(DAY_SEPARATOR),
        end_week(first, row.is_last())
    )
}

/// One page of markup for `page`.
pub fn render_month(page: &MonthPage, style: &CalendarStyle) -> String {
    let mut out = format!(
        r"\vspace*{{0.5cm}}
    \begin{{center}}
        \textbf{{\LARGE {}}}

        %\vspace*{{\fill}}
        \bigskip

        \begin{{tabularx}}{{10.0in}}{{|X|X|X|X|X|X|X|}}
        \hline
",
        page.title()
    );
    if style.day_names {
        out.push_str(&render_day_names(page.week_start()));
    }
    for row in page.rows() {
        out.push_str(&render_week(row, style));
    }
    out.push_str(
        r"\end{tabularx}
    \end{center}
    \vspace*{\stretch{3}}
    \newpage
",
    );
    out
}

/// The calendar preamble wrapped around `body`.
pub fn calendar_document(body: impl Into<String>) -> Document {
    Document::new(body)
        .class_options("12pt")
        .package_with("geometry", "letterpaper,landscape,margin=0cm")
        .package("tabularx")
        .package("xcolor")
        .package("newcent")
        .package("scalefnt")
        .preamble_extras(PREAMBLE_EXTRAS)
}

/// Render every page of `job` into one document.
pub fn render_calendar(
    job: &CalendarJob,
    calendar: &dyn HolidayCalendar,
    style: &CalendarStyle,
) -> Result<String> {
    style.validate()?;
    let mut body = String::new();
    for (year, month) in job.pages() {
        let page = MonthPage::build(year, month, calendar, style.week_start)?;
        debug!("rendering {} with {} holidays", page.title(), calendar.name());
        body.push_str(&render_month(&page, style));
    }
    info!(
        "rendered {} page(s) for {:?}",
        job.years().len() * job.months().len(),
        job.years()
    );
    Ok(calendar_document(body).render())
}
