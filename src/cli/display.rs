// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the peerfind CLI.
//!
//! Result cards, browse listings and the session footer. OneDark for dark
//! terminals, One Light for light ones. The detection tries `PEERFIND_THEME`
//! first, then `COLORFGBG`, then defaults to dark.
//!
//! Respects `NO_COLOR` and non-TTY detection, so piping output gives plain
//! text.

use peerfind::{excerpt, ProfileGroup, RankedResult, SearchSession};
use std::sync::OnceLock;
use std::time::Duration;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

/// Summary excerpt length in the browse view.
pub const SUMMARY_CHARS: usize = 100;

/// Shown in place of an empty people-also-viewed list.
pub const NO_SIMILAR_NOTICE: &str = "No similar professionals found in this dataset";

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("PEERFIND_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light color
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or plain text without a TTY
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, empty when colors are off
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{b}│{r}{}{}{b}│{r}",
        content,
        " ".repeat(pad),
        b = border(),
        r = reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}┌{r}{}{b}{}┐{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Similarity as a percentage, colored by strength
pub fn similarity_label(score: f64) -> String {
    let text = format!("{:.0}%", score);
    if score >= 90.0 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 75.0 {
        themed(GREEN, &[], &text)
    } else {
        themed(YELLOW, &[], &text)
    }
}

/// "2 keywords" / "1 keyword"
pub fn match_label(match_score: u32) -> String {
    let noun = if match_score == 1 { "keyword" } else { "keywords" };
    themed(BLUE, &[], &format!("{} {}", match_score, noun))
}

/// "Title · Company · Location", location omitted when absent
pub fn profile_line(title: &str, company: &str, location: Option<&str>) -> String {
    let mut parts = vec![title, company];
    parts.extend(location);
    parts
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

/// Print ranked results as cards, or a no-results notice.
pub fn print_results(query: &str, results: &[RankedResult], elapsed: Duration) {
    if results.is_empty() {
        println!(
            "No professionals matched {}. Try broader keywords (words of three or more letters).",
            themed(YELLOW, &[], &format!("\"{}\"", query))
        );
        return;
    }

    section_top(&format!("{} results for \"{}\"", results.len(), query));
    for (i, result) in results.iter().enumerate() {
        let profile = &result.profile;
        row(&format!(
            " #{:<3}{}",
            i + 1,
            themed(CYAN, &[BOLD], &profile.name)
        ));
        row(&format!(
            "     {}",
            profile_line(&profile.title, &profile.company, profile.display_location())
        ));
        row(&format!(
            "     {}   similarity {}",
            match_label(result.match_score),
            similarity_label(result.similarity_score)
        ));
    }
    section_bot();
    println!(
        "{}",
        themed(GRAY, &[DIM], &format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0))
    );
}

/// Heading over a group's linked profiles, or the notice when there are none.
pub fn similar_heading(count: usize) -> String {
    if count == 0 {
        themed(GRAY, &[DIM], NO_SIMILAR_NOTICE)
    } else {
        format!("People also viewed ({}):", count)
    }
}

/// Print browse groups: each source profile followed by its linked profiles.
pub fn print_groups(groups: &[ProfileGroup]) {
    if groups.is_empty() {
        println!("No profiles in this dataset.");
        return;
    }

    for group in groups {
        let profile = &group.profile;
        section_top(&profile.name);
        row(&format!(
            " {}",
            profile_line(&profile.title, &profile.company, profile.display_location())
        ));
        if let Some(summary) = &group.summary {
            row(&format!(" {}", themed(GRAY, &[], &excerpt(summary, SUMMARY_CHARS))));
        }
        row(&format!(" {}", similar_heading(group.similar.len())));
        for similar in &group.similar {
            let score = similar
                .similarity_score
                .map(similarity_label)
                .unwrap_or_default();
            row(&format!(
                "   {} {}",
                themed(CYAN, &[], &similar.profile.name),
                score
            ));
            row(&format!(
                "     {}",
                profile_line(
                    &similar.profile.title,
                    &similar.profile.company,
                    similar.profile.display_location()
                )
            ));
        }
        section_bot();
    }
}

/// Footer line under each shell search.
pub fn print_session_footer(session: &SearchSession) {
    println!(
        "{}",
        themed(GRAY, &[DIM], &format!("Searches this session: {}", session.searches))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
