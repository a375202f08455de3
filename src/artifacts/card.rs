//! PNG match card: a 1080×1350 portrait laid out for Instagram/Telegram.
//!
//! Gradient background, team names, form squares, a projected-score panel
//! and a win-probability split bar. Text needs a TTF font from disk and team
//! logos are looked up by slug; a missing font or logo skips that layer with
//! a warning — the card itself is always produced.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use chrono::NaiveDate;
use image::imageops::FilterType;
use image::{imageops, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::warn;

use crate::analytics::form::{FormRecord, FormToken};
use crate::model::MatchReport;

const WIDTH: u32 = 1080;
const HEIGHT: u32 = 1350;

const ACCENT_CYAN: Rgb<u8> = Rgb([0, 224, 255]);
const ACCENT_YELLOW: Rgb<u8> = Rgb([255, 216, 0]);
const ACCENT_ORANGE: Rgb<u8> = Rgb([255, 140, 0]);
const TEXT_BRIGHT: Rgb<u8> = Rgb([245, 245, 247]);
const TEXT_DIM: Rgb<u8> = Rgb([190, 190, 200]);
const PANEL_FILL: Rgb<u8> = Rgb([15, 15, 25]);
const FORM_WIN: Rgb<u8> = Rgb([46, 204, 113]);
const FORM_LOSS: Rgb<u8> = Rgb([231, 76, 60]);
const FORM_NO_RESULT: Rgb<u8> = Rgb([241, 196, 15]);

fn load_font(path: &Path) -> Option<FontVec> {
    match std::fs::read(path) {
        Ok(bytes) => match FontVec::try_from_vec(bytes) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("card font {} unusable ({e}), skipping text layers", path.display());
                None
            }
        },
        Err(e) => {
            warn!("card font {} unavailable ({e}), skipping text layers", path.display());
            None
        }
    }
}

/// Filesystem slug for a team name: lowercase words joined by hyphens.
fn team_slug(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn gradient_background(img: &mut RgbImage) {
    for y in 0..HEIGHT {
        let ratio = y as f32 / HEIGHT as f32;
        let r = (5.0 + 20.0 * ratio) as u8;
        let g = (6.0 + 40.0 * ratio) as u8;
        let b = (30.0 + 80.0 * ratio) as u8;
        for x in 0..WIDTH {
            img.put_pixel(x, y, Rgb([r, g, b]));
        }
    }
}

fn draw_centered(
    img: &mut RgbImage,
    color: Rgb<u8>,
    y: i32,
    scale: f32,
    font: &FontVec,
    text: &str,
) {
    let (w, _) = text_size(PxScale::from(scale), font, text);
    let x = (WIDTH as i32 - w as i32) / 2;
    draw_text_mut(img, color, x, y, PxScale::from(scale), font, text);
}

fn draw_form_row(img: &mut RgbImage, record: &FormRecord, x: i32, y: i32) {
    const SIDE: i32 = 28;
    const GAP: i32 = 10;
    for (i, token) in record.tokens().iter().enumerate() {
        let color = match token {
            FormToken::Win => FORM_WIN,
            FormToken::Loss => FORM_LOSS,
            FormToken::NoResult => FORM_NO_RESULT,
        };
        let rect = Rect::at(x + i as i32 * (SIDE + GAP), y).of_size(SIDE as u32, SIDE as u32);
        draw_filled_rect_mut(img, rect, color);
    }
}

fn draw_logo(img: &mut RgbImage, logo_dir: &Path, team: &str, x: i64, y: i64) {
    let path = logo_dir.join(format!("{}.png", team_slug(team)));
    match image::open(&path) {
        Ok(logo) => {
            let resized = imageops::resize(&logo.to_rgb8(), 140, 140, FilterType::Triangle);
            imageops::overlay(img, &resized, x, y);
        }
        Err(e) => {
            warn!("logo {} unavailable ({e}), skipping", path.display());
        }
    }
}

fn draw_panel_border(img: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, color: Rgb<u8>) {
    // 4 px border drawn as nested hollow rects
    for i in 0..4i32 {
        let rect = Rect::at(x + i, y + i).of_size(w - 2 * i as u32, h - 2 * i as u32);
        draw_hollow_rect_mut(img, rect, color);
    }
}

/// Render the card. Never fails: optional layers degrade, and encoding
/// errors surface only when the caller saves the image.
pub fn render(report: &MatchReport, font_path: &Path, logo_dir: &Path) -> RgbImage {
    let mut img = RgbImage::new(WIDTH, HEIGHT);
    gradient_background(&mut img);

    let font = load_font(font_path);

    // Score panel
    let (panel_w, panel_h) = (800u32, 220u32);
    let panel_x = (WIDTH as i32 - panel_w as i32) / 2;
    let panel_y = 750;
    draw_filled_rect_mut(
        &mut img,
        Rect::at(panel_x, panel_y).of_size(panel_w, panel_h),
        PANEL_FILL,
    );
    draw_panel_border(&mut img, panel_x, panel_y, panel_w, panel_h, ACCENT_YELLOW);

    // Win-probability split bar
    let (bar_w, bar_h) = (800u32, 46u32);
    let bar_x = (WIDTH as i32 - bar_w as i32) / 2;
    let bar_y = 1080;
    let split = (bar_w as f64 * report.prediction.team_a_pct() / 100.0).round() as u32;
    draw_filled_rect_mut(
        &mut img,
        Rect::at(bar_x, bar_y).of_size(split.max(1), bar_h),
        ACCENT_CYAN,
    );
    if split < bar_w {
        draw_filled_rect_mut(
            &mut img,
            Rect::at(bar_x + split as i32, bar_y).of_size(bar_w - split, bar_h),
            ACCENT_ORANGE,
        );
    }

    // Form squares under each team slot
    draw_form_row(&mut img, &FormRecord::parse(&report.form_a), 80, 540);
    draw_form_row(&mut img, &FormRecord::parse(&report.form_b), 660, 540);

    // Optional logos beside the team names
    draw_logo(&mut img, logo_dir, &report.team_a, 80, 280);
    draw_logo(&mut img, logo_dir, &report.team_b, (WIDTH - 220) as i64, 280);

    if let Some(font) = font {
        draw_centered(&mut img, ACCENT_CYAN, 80, 80.0, &font, "IPL MATCH PREVIEW");

        let date_label = report
            .date
            .parse::<NaiveDate>()
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|_| report.date.clone());
        draw_text_mut(&mut img, TEXT_DIM, 80, 200, PxScale::from(32.0), &font, &date_label);
        draw_text_mut(&mut img, TEXT_DIM, 80, 240, PxScale::from(32.0), &font, &report.venue);

        draw_text_mut(
            &mut img,
            TEXT_BRIGHT,
            80,
            420,
            PxScale::from(72.0),
            &font,
            &report.team_a,
        );
        draw_centered(&mut img, ACCENT_YELLOW, 510, 72.0, &font, "VS");
        let (team_b_w, _) = text_size(PxScale::from(72.0), &font, &report.team_b);
        draw_text_mut(
            &mut img,
            TEXT_BRIGHT,
            WIDTH as i32 - team_b_w as i32 - 80,
            420,
            PxScale::from(72.0),
            &font,
            &report.team_b,
        );

        draw_centered(
            &mut img,
            TEXT_DIM,
            panel_y + 30,
            32.0,
            &font,
            "PROJECTED FIRST-INNINGS SCORE",
        );
        draw_centered(&mut img, ACCENT_YELLOW, panel_y + 90, 48.0, &font, &report.projected);
        draw_centered(
            &mut img,
            TEXT_DIM,
            panel_y + 150,
            32.0,
            &font,
            "Analysis only · For cricket fans",
        );

        let prob_a = format!("{}%", report.prediction.team_a_pct());
        let prob_b = format!("{}%", report.prediction.team_b_pct());
        draw_text_mut(&mut img, ACCENT_CYAN, bar_x, bar_y - 44, PxScale::from(32.0), &font, &prob_a);
        let (prob_b_w, _) = text_size(PxScale::from(32.0), &font, &prob_b);
        draw_text_mut(
            &mut img,
            ACCENT_ORANGE,
            bar_x + bar_w as i32 - prob_b_w as i32,
            bar_y - 44,
            PxScale::from(32.0),
            &font,
            &prob_b,
        );
    }

    img
}
