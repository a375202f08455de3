//! RSS feed over previously generated preview pages.
//!
//! The feed is rebuilt from scratch on every run by listing
//! `matches/*.html`: only files whose stem parses as a `YYYY-MM-DD` date are
//! included, newest first, capped at 30 items.

use chrono::NaiveDate;

use super::{ArtifactError, OutputLayout};

const MAX_ITEMS: usize = 30;

/// Collect the dated page stems under `matches/`, newest first.
fn list_page_dates(layout: &OutputLayout) -> Result<Vec<NaiveDate>, ArtifactError> {
    let dir = layout.matches_dir();
    let entries = std::fs::read_dir(&dir).map_err(|source| ArtifactError::ListDir {
        path: dir.clone(),
        source,
    })?;

    let mut dates: Vec<NaiveDate> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                return None;
            }
            path.file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<NaiveDate>().ok())
        })
        .collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.truncate(MAX_ITEMS);
    Ok(dates)
}

fn render_feed(dates: &[NaiveDate], site_root: &str) -> String {
    let items: String = dates
        .iter()
        .map(|date| {
            let stamp = date.format("%Y-%m-%d");
            let link = format!("{site_root}/matches/{stamp}.html");
            let pub_date = date.format("%a, %d %b %Y 12:00:00 GMT");
            format!(
                "\n    <item>\n        <title>IPL Match – {stamp}</title>\n        \
                 <link>{link}</link>\n        <guid>{link}</guid>\n        \
                 <pubDate>{pub_date}</pubDate>\n        \
                 <description>IPL match preview and analytics for {stamp}.</description>\n    </item>"
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <rss version=\"2.0\">\n\
         <channel>\n    \
         <title>IPL Match Analytics Feed</title>\n    \
         <link>{site_root}</link>\n    \
         <description>Daily IPL match previews, pitch reports, H2H and projections.</description>\n    \
         <language>en</language>{items}\n\
         </channel>\n\
         </rss>\n"
    )
}

/// Rebuild `rss.xml` from the pages currently on disk. Returns the item
/// count.
pub fn rebuild(layout: &OutputLayout, site_root: &str) -> Result<usize, ArtifactError> {
    let dates = list_page_dates(layout)?;
    let feed = render_feed(&dates, site_root);
    let path = layout.rss_path();
    std::fs::write(&path, feed).map_err(|source| ArtifactError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(dates.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with_pages(pages: &[&str]) -> (tempfile::TempDir, OutputLayout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path());
        std::fs::create_dir_all(layout.matches_dir()).unwrap();
        for page in pages {
            std::fs::write(layout.matches_dir().join(page), "<html></html>").unwrap();
        }
        (dir, layout)
    }

    #[test]
    fn lists_only_dated_html_newest_first() {
        let (_dir, layout) = layout_with_pages(&[
            "2026-04-10.html",
            "2026-04-12.html",
            "2026-04-11.html",
            "index.html",
            "2026-04-09.txt",
        ]);
        let dates = list_page_dates(&layout).unwrap();
        let stamps: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
        assert_eq!(stamps, vec!["2026-04-12", "2026-04-11", "2026-04-10"]);
    }

    #[test]
    fn caps_at_thirty_items() {
        let mut pages: Vec<String> = (1..=31).map(|d| format!("2026-03-{d:02}.html")).collect();
        pages.extend((1..=9).map(|d| format!("2026-04-{d:02}.html")));
        let refs: Vec<&str> = pages.iter().map(String::as_str).collect();
        let (_dir, layout) = layout_with_pages(&refs);
        let dates = list_page_dates(&layout).unwrap();
        assert_eq!(dates.len(), 30);
        // Newest survives the cap
        assert_eq!(dates[0].to_string(), "2026-04-09");
    }

    #[test]
    fn feed_contains_items_and_channel_metadata() {
        let dates = vec![NaiveDate::from_ymd_opt(2026, 4, 12).unwrap()];
        let feed = render_feed(&dates, "https://example.org/site");
        assert!(feed.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(feed.contains("<title>IPL Match Analytics Feed</title>"));
        assert!(feed.contains("<link>https://example.org/site/matches/2026-04-12.html</link>"));
        assert!(feed.contains("<pubDate>Sun, 12 Apr 2026 12:00:00 GMT</pubDate>"));
    }

    #[test]
    fn rebuild_writes_the_feed_file() {
        let (_dir, layout) = layout_with_pages(&["2026-04-12.html"]);
        let count = rebuild(&layout, "https://x").unwrap();
        assert_eq!(count, 1);
        let feed = std::fs::read_to_string(layout.rss_path()).unwrap();
        assert!(feed.contains("2026-04-12"));
    }

    #[test]
    fn missing_matches_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path().join("nowhere"));
        assert!(rebuild(&layout, "https://x").is_err());
    }
}
