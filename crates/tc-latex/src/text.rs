//! Text helpers for embedding plain strings in LaTeX source.

/// Special characters and their escaped forms.
///
/// The backslash goes first so the escapes introduced afterwards are left
/// alone.
const SPECIALS: [(&str, &str); 10] = [
    ("\\", "\\textbackslash "),
    ("&", "\\&"),
    ("%", "\\%"),
    ("$", "\\$"),
    ("#", "\\#"),
    ("_", "\\_"),
    ("{", "\\{"),
    ("}", "\\}"),
    ("~", "\\textasciitilde "),
    ("^", "\\textasciicircum "),
];

/// Escape every LaTeX special character in `s`.
pub fn escape_specials(s: &str) -> String {
    SPECIALS
        .iter()
        .fold(s.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Replace HTML apostrophe entities with a plain `'`.
pub fn unescape_entities(s: &str) -> String {
    s.replace("&#39;", "'")
}

/// Undo HTML apostrophe entities and stop LaTeX from treating an abbreviation
/// period as the end of a sentence (`"St. "` becomes `"St.\ "`).
pub fn latex_fixes(s: &str) -> String {
    unescape_entities(s).replace(". ", ".\\ ")
}

/// Turn a plain-text label into LaTeX: entities are decoded before escaping,
/// and abbreviation spacing is fixed after it.
pub fn label_to_latex(s: &str) -> String {
    latex_fixes(&escape_specials(&unescape_entities(s)))
}

/// Wrap `s` in a gray color; `dark` runs from 0 (white) to 100 (black).
pub fn grayed_out(s: &str, dark: u8) -> String {
    format!("{{\\color{{black!{dark}}}{s}}}")
}
