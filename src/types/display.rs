//! The provider's display-mode flag.

use crate::request::RequestError;
use std::fmt;
use std::str::FromStr;

/// Rendering mode for the provider's forecast page.
///
/// The mode controls how the provider lays out the page and therefore what
/// gets embedded in the HTML for scraping. `table_prometheus` is the
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Table,
    #[default]
    TablePrometheus,
}

impl DisplayMode {
    /// Every supported mode.
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Table, DisplayMode::TablePrometheus];

    /// The wire name, used as the `display` query parameter.
    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Table => "table",
            DisplayMode::TablePrometheus => "table_prometheus",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| RequestError::unknown_display(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_table_prometheus() {
        assert_eq!(DisplayMode::default(), DisplayMode::TablePrometheus);
    }

    #[test]
    fn parses_both_modes() {
        assert_eq!("table".parse::<DisplayMode>(), Ok(DisplayMode::Table));
        assert_eq!(
            "table_prometheus".parse::<DisplayMode>(),
            Ok(DisplayMode::TablePrometheus)
        );
    }

    #[test]
    fn rejects_unknown_mode_with_allow_list() {
        let err = "graph".parse::<DisplayMode>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("graph"));
        assert!(message.contains("table"));
        assert!(message.contains("table_prometheus"));
    }
}
