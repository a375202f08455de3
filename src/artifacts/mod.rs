//! Artifact writers.
//!
//! Five outputs per run, all named by the match date (`YYYY-MM-DD`): the JSON
//! data file, the HTML preview page, the Telegram message, the PNG match
//! card, and the site-wide RSS feed. Writers are the only layer allowed to
//! fail: any I/O or encoding error here is fatal and aborts the run
//! (no partial silent success), while missing optional assets (card font,
//! team logos) merely skip that visual element.

pub mod card;
pub mod html;
pub mod json;
pub mod rss;
pub mod telegram;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::model::MatchReport;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to list {path}")]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode JSON artifact")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode card image {path}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Fixed directory layout under the output root.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        OutputLayout { root: root.into() }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn matches_dir(&self) -> PathBuf {
        self.root.join("matches")
    }

    pub fn telegram_dir(&self) -> PathBuf {
        self.root.join("telegram")
    }

    pub fn cards_dir(&self) -> PathBuf {
        self.root.join("assets").join("img").join("cards")
    }

    pub fn json_path(&self, date: &str) -> PathBuf {
        self.data_dir().join(format!("{date}.json"))
    }

    pub fn html_path(&self, date: &str) -> PathBuf {
        self.matches_dir().join(format!("{date}.html"))
    }

    pub fn telegram_path(&self, date: &str) -> PathBuf {
        self.telegram_dir().join(format!("{date}.txt"))
    }

    pub fn card_path(&self, date: &str) -> PathBuf {
        self.cards_dir().join(format!("{date}.png"))
    }

    pub fn rss_path(&self) -> PathBuf {
        self.root.join("rss.xml")
    }

    fn ensure_dirs(&self) -> Result<(), ArtifactError> {
        for dir in [
            self.data_dir(),
            self.matches_dir(),
            self.telegram_dir(),
            self.cards_dir(),
        ] {
            std::fs::create_dir_all(&dir).map_err(|source| ArtifactError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ArtifactError> {
    std::fs::write(path, contents).map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Paths of everything written in one run.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub json: PathBuf,
    pub html: PathBuf,
    pub telegram: PathBuf,
    pub card: PathBuf,
    pub rss: PathBuf,
}

/// Write all five artifacts in a fixed order. Re-running with the same date
/// overwrites each file in place.
pub fn write_all(
    layout: &OutputLayout,
    report: &MatchReport,
    config: &Config,
) -> Result<ArtifactPaths, ArtifactError> {
    layout.ensure_dirs()?;
    let date = report.date.as_str();

    let json_path = layout.json_path(date);
    write_file(&json_path, json::render(report)?.as_bytes())?;
    info!("JSON written: {}", json_path.display());

    let html_path = layout.html_path(date);
    write_file(&html_path, html::render(report).as_bytes())?;
    info!("HTML written: {}", html_path.display());

    let telegram_path = layout.telegram_path(date);
    write_file(
        &telegram_path,
        telegram::render(report, config.site_root()).as_bytes(),
    )?;
    info!("Telegram message written: {}", telegram_path.display());

    let card_path = layout.card_path(date);
    card::render(report, &config.card_font, &config.logo_dir)
        .save(&card_path)
        .map_err(|source| ArtifactError::Image {
            path: card_path.clone(),
            source,
        })?;
    info!("Match card written: {}", card_path.display());

    let rss_path = layout.rss_path();
    let items = rss::rebuild(layout, config.site_root())?;
    info!("RSS rebuilt with {} item(s): {}", items, rss_path.display());

    Ok(ArtifactPaths {
        json: json_path,
        html: html_path,
        telegram: telegram_path,
        card: card_path,
        rss: rss_path,
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_all_produces_every_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path());
        let mut config = Config::offline_for_tests();
        config.out_dir = dir.path().to_path_buf();

        let report = test_support::sample_report();
        let paths = write_all(&layout, &report, &config).unwrap();

        for path in [&paths.json, &paths.html, &paths.telegram, &paths.card, &paths.rss] {
            assert!(path.exists(), "missing artifact {}", path.display());
        }
        assert!(paths.json.ends_with("data/2026-04-12.json"));
        assert!(paths.card.ends_with("assets/img/cards/2026-04-12.png"));
    }

    #[test]
    fn rerun_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path());
        let mut config = Config::offline_for_tests();
        config.out_dir = dir.path().to_path_buf();

        let report = test_support::sample_report();
        write_all(&layout, &report, &config).unwrap();
        let first = std::fs::read(layout.json_path(&report.date)).unwrap();
        write_all(&layout, &report, &config).unwrap();
        let second = std::fs::read(layout.json_path(&report.date)).unwrap();
        assert_eq!(first, second);

        let entries = std::fs::read_dir(layout.data_dir()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn unwritable_root_is_fatal() {
        let layout = OutputLayout::new("/proc/no-such-root");
        let config = Config::offline_for_tests();
        let report = test_support::sample_report();
        assert!(write_all(&layout, &report, &config).is_err());
    }
}
