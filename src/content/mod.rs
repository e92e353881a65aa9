//! Portfolio content loading (impure shell).
//!
//! Content lives in a TOML file shaped like [`Portfolio`]. Relative asset
//! paths (cat images, resume, music) resolve against the directory holding
//! the content file, so a content bundle can be moved as a unit.

pub mod resume;

pub use resume::{default_download_dir, export_resume, ExportError};

use crate::model::{ContentError, Portfolio};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load the portfolio.
///
/// `None` selects the built-in portfolio. An explicit path must exist.
///
/// # Errors
///
/// - `ContentError::NotFound` if `path` does not exist
/// - `ContentError::ReadError` / `ParseError` for unreadable or invalid TOML
/// - `ContentError::NoProjects` if the carousel would be empty
pub fn load_portfolio(path: Option<&Path>, today: NaiveDate) -> Result<Portfolio, ContentError> {
    let Some(path) = path else {
        debug!("using built-in portfolio");
        return Ok(Portfolio::builtin(today));
    };

    if !path.exists() {
        return Err(ContentError::NotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ContentError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let portfolio = parse_portfolio(&contents, path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let portfolio = resolve_assets(portfolio, base);

    info!(
        path = ?path,
        projects = portfolio.projects.len(),
        cats = portfolio.cats.len(),
        "portfolio content loaded"
    );
    Ok(portfolio)
}

/// Parse and validate content TOML. `origin` is only used in errors.
pub fn parse_portfolio(contents: &str, origin: &Path) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = toml::from_str(contents).map_err(|e| ContentError::ParseError {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;

    if portfolio.projects.is_empty() {
        return Err(ContentError::NoProjects);
    }

    Ok(portfolio)
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Rebase relative asset paths onto `base`.
fn resolve_assets(mut portfolio: Portfolio, base: &Path) -> Portfolio {
    for cat in &mut portfolio.cats {
        cat.path = resolve(base, std::mem::take(&mut cat.path));
    }
    portfolio.resume = portfolio.resume.map(|p| resolve(base, p));
    portfolio.music = portfolio.music.map(|p| resolve(base, p));
    portfolio
}
