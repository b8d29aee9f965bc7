//! # tc-latex
//!
//! LaTeX source generation: text escaping, the generic document assembler,
//! and the wall-calendar renderer built on top of it.
//!
//! ```rust
//! use tc_latex::{render_calendar, CalendarJob, CalendarStyle};
//! use tc_time::RuleCalendar;
//!
//! let job = CalendarJob::new(vec![2025], vec![5]).unwrap();
//! let src = render_calendar(&job, &RuleCalendar::manitoba(), &CalendarStyle::default()).unwrap();
//! assert!(src.contains("\\holidayformat{19}{Victoria Day}"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Calendar pages and the calendar preamble.
pub mod calendar;

/// Preamble, metadata, and body assembly.
pub mod document;

/// Escaping and gray-text helpers.
pub mod text;

pub use calendar::{render_calendar, render_month, CalendarJob, CalendarStyle};
pub use document::Document;
pub use text::{escape_specials, grayed_out, label_to_latex, latex_fixes, unescape_entities};
