use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the three screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewName {
    #[default]
    Home,
    Profile,
    Edit,
}

impl ViewName {
    /// Display order of the navigation bar
    pub const ALL: [ViewName; 3] = [ViewName::Home, ViewName::Profile, ViewName::Edit];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::Home => "home",
            ViewName::Profile => "profile",
            ViewName::Edit => "edit",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewName::Home => "Home",
            ViewName::Profile => "Profile",
            ViewName::Edit => "Edit",
        }
    }

    /// Route path of the view
    pub fn path(&self) -> &'static str {
        match self {
            ViewName::Home => "/",
            ViewName::Profile => "/profile",
            ViewName::Edit => "/edit",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.path() == path)
    }

    pub fn position(&self) -> usize {
        match self {
            ViewName::Home => 0,
            ViewName::Profile => 1,
            ViewName::Edit => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepts a view name (`profile`) or a route path (`/profile`)
impl FromStr for ViewName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(view) = Self::from_path(s) {
            return Ok(view);
        }
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(ViewName::Home),
            "profile" => Ok(ViewName::Profile),
            "edit" => Ok(ViewName::Edit),
            _ => Err(Error::UnknownView(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(ViewName::from_path("/"), Some(ViewName::Home));
        assert_eq!(ViewName::from_path("/profile"), Some(ViewName::Profile));
        assert_eq!(ViewName::from_path("/edit"), Some(ViewName::Edit));
        assert_eq!(ViewName::from_path("/settings"), None);
    }

    #[test]
    fn test_parse_name_or_path() {
        assert_eq!("Profile".parse::<ViewName>().unwrap(), ViewName::Profile);
        assert_eq!("/edit".parse::<ViewName>().unwrap(), ViewName::Edit);
        assert!(matches!(
            "settings".parse::<ViewName>(),
            Err(Error::UnknownView(_))
        ));
    }

    #[test]
    fn test_cycle_wraps_around() {
        assert_eq!(ViewName::Edit.next(), ViewName::Home);
        assert_eq!(ViewName::Home.previous(), ViewName::Edit);
    }
}
