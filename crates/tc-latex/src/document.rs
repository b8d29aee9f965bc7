//! Assembles compilable LaTeX source around a body.
//!
//! The rendered text is, in order: the `\documentclass` line, one
//! `\usepackage` line per package (in insertion order), any extra preamble,
//! the `\title` / `\author` / `\date` lines, `\begin{document}`,
//! `\maketitle` when a title or author is set, the body, and
//! `\end{document}`.

use std::fmt;

/// Class options used when none are given.
pub const DEFAULT_CLASS_OPTIONS: &str = "12pt,letterpaper";

/// A LaTeX `article` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: String,
    title: Option<String>,
    author: Option<String>,
    date: Option<String>,
    class_options: String,
    packages: Vec<(String, Option<String>)>,
    preamble_extras: Option<String>,
    full_source: Option<String>,
}

impl Document {
    /// A document with `body` and no metadata or packages.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            title: None,
            author: None,
            date: None,
            class_options: DEFAULT_CLASS_OPTIONS.to_owned(),
            packages: Vec::new(),
            preamble_extras: None,
            full_source: None,
        }
    }

    /// Set `\title{...}`.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set `\author{...}`.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set `\date{...}`.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Replace the `\documentclass` options.
    pub fn class_options(mut self, options: impl Into<String>) -> Self {
        self.class_options = options.into();
        self
    }

    /// Load a package without options.
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.packages.push((name.into(), None));
        self
    }

    /// Load a package with options, e.g. `("geometry", "margin=1in")`.
    pub fn package_with(mut self, name: impl Into<String>, options: impl Into<String>) -> Self {
        let options = options.into();
        self.packages
            .push((name.into(), (!options.is_empty()).then_some(options)));
        self
    }

    /// Raw text appended to the preamble after the packages.
    pub fn preamble_extras(mut self, extras: impl Into<String>) -> Self {
        self.preamble_extras = Some(extras.into());
        self
    }

    /// Override the generated source entirely.
    pub fn set_full_source(&mut self, source: impl Into<String>) {
        self.full_source = Some(source.into());
    }

    /// The body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    fn write_preamble(&self, out: &mut String) {
        out.push_str(&format!("\\documentclass[{}]{{article}}\n", self.class_options));
        for (name, options) in &self.packages {
            match options {
                Some(options) => out.push_str(&format!("\\usepackage[{options}]{{{name}}}\n")),
                None => out.push_str(&format!("\\usepackage{{{name}}}\n")),
            }
        }
        if let Some(extras) = &self.preamble_extras {
            out.push_str(extras);
        }
        if let Some(title) = &self.title {
            out.push_str(&format!("\\title{{{title}}}\n"));
        }
        if let Some(author) = &self.author {
            out.push_str(&format!("\\author{{{author}}}\n"));
        }
        if let Some(date) = &self.date {
            out.push_str(&format!("\\date{{{date}}}\n"));
        }
    }

    /// Render the complete source.
    pub fn render(&self) -> String {
        if let Some(source) = &self.full_source {
            return source.clone();
        }
        let mut out = String::with_capacity(self.body.len() + 512);
        self.write_preamble(&mut out);
        out.push_str("\\begin{document}\n");
        if self.title.is_some() || self.author.is_some() {
            out.push_str("\\maketitle\n");
        }
        out.push_str(&self.body);
        out.push_str("\n\\end{document}\n");
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
