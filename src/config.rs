use log::Level;

#[cfg(debug_assertions)]
pub fn get_base_path() -> &'static str {
    ""  // Served from the root by `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn get_base_path() -> &'static str {
    "/Seasons-"  // GitHub Pages project path
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Basename handed to the router, `None` when served from the root.
pub fn router_basename() -> Option<&'static str> {
    let base = get_base_path();
    if base.is_empty() {
        None
    } else {
        Some(base)
    }
}

/// Prefixes a root-relative asset path with the deployment base path.
/// Absolute URLs pass through untouched.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let path = path.trim_start_matches('/');
    format!("{}/{}", get_base_path(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_is_rooted_under_base_path() {
        let url = asset_url("/images/seasons-logo.jpg");
        assert_eq!(url, format!("{}/images/seasons-logo.jpg", get_base_path()));
        assert_eq!(asset_url("images/x.jpg"), asset_url("/images/x.jpg"));
    }

    #[test]
    fn absolute_urls_are_left_alone() {
        let url = "https://www.instagram.com/seasons.cocktail.bar/";
        assert_eq!(asset_url(url), url);
    }

    #[test]
    fn basename_matches_base_path() {
        match router_basename() {
            Some(base) => assert_eq!(base, get_base_path()),
            None => assert!(get_base_path().is_empty()),
        }
    }
}
