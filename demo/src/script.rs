//! Command-line steps

use std::str::FromStr;

use tabdock_core::{CoreError, TabId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Select(TabId),
    Resize(f32),
}

impl FromStr for Step {
    type Err = CoreError;

    /// `width=<N>` resizes the bar; anything else names a tab.
    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        if let Some(width) = arg.strip_prefix("width=") {
            let width: f32 = width
                .parse()
                .map_err(|_| CoreError::Config(format!("invalid width: {}", width)))?;
            return Ok(Step::Resize(width));
        }

        Ok(Step::Select(arg.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!("goals".parse::<Step>().unwrap(), Step::Select(TabId::Goals));
        assert_eq!("width=320".parse::<Step>().unwrap(), Step::Resize(320.0));
        assert_eq!("Edit".parse::<Step>().unwrap(), Step::Select(TabId::TabSelection));
    }

    #[test]
    fn test_parse_rejects_unknown_tab() {
        let result = "settings".parse::<Step>();
        assert!(matches!(result, Err(CoreError::Catalog(_))));
    }

    #[test]
    fn test_parse_rejects_bad_width() {
        let result = "width=wide".parse::<Step>();
        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}
