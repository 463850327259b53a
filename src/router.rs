use crate::models::error::AppError;

/// Top-level pages of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Table,
    Charts,
    Energy,
    Quality,
    NotFound,
}

impl Route {
    /// Maps a URL path to a page. `/` opens the table; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/table" => Self::Table,
            "/charts" => Self::Charts,
            "/energy" => Self::Energy,
            "/quality" => Self::Quality,
            _ => Self::NotFound,
        }
    }

    /// Canonical path used in links
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Table => "/table",
            Self::Charts => "/charts",
            Self::Energy => "/energy",
            Self::Quality => "/quality",
            Self::NotFound => "/404",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Charts => "Charts",
            Self::Energy => "Energy",
            Self::Quality => "Data quality",
            Self::NotFound => "Not found",
        }
    }

    /// Pages listed in the navigation bar
    pub const fn nav_items() -> &'static [Self] {
        &[Self::Table, Self::Charts, Self::Energy, Self::Quality]
    }
}

impl std::str::FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_path(s) {
            Self::NotFound => Err(AppError::ConfigError(format!("Unknown route: {s}"))),
            route => Ok(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Table);
        assert_eq!(Route::from_path(""), Route::Table);
        assert_eq!(Route::from_path("/table"), Route::Table);
        assert_eq!(Route::from_path("/charts/"), Route::Charts);
        assert_eq!(Route::from_path("/energy"), Route::Energy);
        assert_eq!(Route::from_path("/quality"), Route::Quality);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }

    #[test]
    fn test_nav_paths_round_trip() {
        for route in Route::nav_items() {
            assert_eq!(route.path().parse::<Route>().unwrap(), *route);
        }
        assert!("/nope".parse::<Route>().is_err());
    }
}
