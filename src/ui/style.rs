use console::style;
use std::fmt::Display;

/// Green bold: success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, descriptions
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: warnings, session-only outcomes
pub fn warning<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green: confirmed values, keys, paths
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: bullets, surface names
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// A category flag: green "on" or red "off"
pub fn toggle(enabled: bool) -> String {
    if enabled {
        style("on").green().bold().to_string()
    } else {
        style("off").red().to_string()
    }
}
