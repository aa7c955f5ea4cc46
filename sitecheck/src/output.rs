// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Report formatting.

use std::fmt::Display;

use console::{Style, StyledObject};
use driftprint::{Color, Verdict};

use crate::config::ColorMode;
use crate::fetch::STATUS_OK;

/// Marker printed in place of a status for unreachable targets.
pub const UNREACHABLE_MARK: &str = "✗";

/// Applies colors to report fragments (or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Creates a painter for a color mode (`auto` follows the terminal).
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => console::colors_enabled(),
        };
        Painter { enabled }
    }

    /// Creates a painter that never colors.
    pub fn plain() -> Self {
        Painter { enabled: false }
    }

    fn paint<D: Display>(&self, text: D, color: Color) -> StyledObject<D> {
        let style = match color {
            Color::Green => Style::new().green(),
            Color::Yellow => Style::new().yellow(),
            Color::Red => Style::new().red(),
            Color::Magenta => Style::new().magenta(),
        };
        style.force_styling(self.enabled).apply_to(text)
    }

    /// `[<status>] for <target>: <fingerprint>`
    pub fn hashed(&self, status: u16, target: &str, fingerprint: &impl Display) -> String {
        let color = if status == STATUS_OK { Color::Green } else { Color::Red };
        format!("[{}] for {}: {}", self.paint(status, color), target, fingerprint)
    }

    /// `[<status>] for <target>: <verdict>`
    pub fn checked(&self, status: u16, target: &str, verdict: Verdict) -> String {
        format!(
            "[{}] for {}: {}",
            self.paint(status, verdict.color()),
            target,
            self.paint(verdict, verdict.color())
        )
    }

    /// `[<status>] for <target>: skipped` (the target reported a failure).
    pub fn skipped(&self, status: u16, target: &str) -> String {
        format!("[{}] for {}: skipped", self.paint(status, Color::Red), target)
    }

    /// `<score> <verdict>`
    pub fn scored(&self, score: u32, verdict: Verdict) -> String {
        format!("{} {}", score, self.paint(verdict, verdict.color()))
    }

    /// `[✗] Unreachable site: <target>`
    pub fn unreachable(&self, target: &str) -> String {
        format!(
            "[{}] Unreachable site: {}",
            self.paint(UNREACHABLE_MARK, Color::Red),
            target
        )
    }

    /// `[✗] Too large (over <limit> bytes): <target>`
    pub fn too_large(&self, target: &str, limit: u64) -> String {
        format!(
            "[{}] Too large (over {} bytes): {}",
            self.paint(UNREACHABLE_MARK, Color::Red),
            limit,
            target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        let painter = Painter::plain();
        assert_eq!(painter.hashed(200, "a.html", &"3:OOVUd:Ov"), "[200] for a.html: 3:OOVUd:Ov");
        assert_eq!(
            painter.checked(200, "a.html", Verdict::ModifiedSlightly),
            "[200] for a.html: Modified Slightly"
        );
        assert_eq!(painter.skipped(404, "a.html"), "[404] for a.html: skipped");
        assert_eq!(painter.scored(93, Verdict::ModifiedSlightly), "93 Modified Slightly");
        assert_eq!(painter.unreachable("a.html"), "[✗] Unreachable site: a.html");
        assert_eq!(
            painter.too_large("a.html", 10),
            "[✗] Too large (over 10 bytes): a.html"
        );
    }

    #[test]
    fn test_colored_lines() {
        let painter = Painter::new(ColorMode::Always);
        let line = painter.checked(200, "a.html", Verdict::Unchanged);
        assert!(line.contains("\u{1b}["));
        assert_eq!(console::strip_ansi_codes(&line), "[200] for a.html: Unchanged");
        assert_eq!(Painter::new(ColorMode::Never), Painter::plain());
    }
}
