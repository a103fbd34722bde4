// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

const PALETTE_ENV: &str = "EVODEX_TUI_PALETTE";
const PALETTE_ENV_FALLBACK: &str = "EVODEX_PALETTE";

/// Styles handed to every render call. The navigation core never sees this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    palette: Option<Palette>,
}

impl Theme {
    /// Reads an optional palette override from `EVODEX_TUI_PALETTE` (or `EVODEX_PALETTE`).
    pub fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[color as usize],
            None => color.into(),
        }
    }

    pub fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.color(Ansi16::BrightGreen))
        } else {
            self.base_style()
        }
    }

    /// Row under the focus cursor.
    pub fn focus_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// The species the current view was opened for.
    pub fn target_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi16::Yellow)).add_modifier(Modifier::BOLD)
    }

    pub fn trigger_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi16::Cyan))
    }

    pub fn muted_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi16::BrightBlack))
    }

    pub fn footer_label_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi16::White))
    }

    pub fn footer_key_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi16::Cyan)).add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi16::BrightWhite)).add_modifier(Modifier::BOLD)
    }

    pub fn toast_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi16::Red))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Palette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl Palette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg, then the 16 ANSI colors), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_hex_color(parts[0])?;
        let bg = parse_hex_color(parts[1])?;
        let mut ansi = [Color::Reset; 16];
        for (slot, part) in ansi.iter_mut().zip(&parts[2..]) {
            *slot = parse_hex_color(part)?;
        }

        Ok(Self { fg, bg, ansi })
    }
}

fn palette_override_from_env() -> Result<Option<Palette>, ThemeError> {
    let (name, value) = match read_env(PALETTE_ENV)? {
        Some(value) => (PALETTE_ENV, value),
        None => match read_env(PALETTE_ENV_FALLBACK)? {
            Some(value) => (PALETTE_ENV_FALLBACK, value),
            None => return Ok(None),
        },
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Palette::parse_csv(trimmed).map(Some).map_err(|reason| ThemeError::InvalidEnv {
        name: name.to_owned(),
        value: format!("{trimmed} ({reason})"),
    })
}

fn read_env(name: &str) -> Result<Option<String>, ThemeError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ThemeError::InvalidEnv {
            name: name.to_owned(),
            value: "<non-unicode>".to_owned(),
        }),
    }
}

fn parse_hex_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed:?} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Black => Color::Black,
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Blue => Color::Blue,
            Ansi16::Magenta => Color::Magenta,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::White => Color::Gray,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightRed => Color::LightRed,
            Ansi16::BrightGreen => Color::LightGreen,
            Ansi16::BrightYellow => Color::LightYellow,
            Ansi16::BrightBlue => Color::LightBlue,
            Ansi16::BrightMagenta => Color::LightMagenta,
            Ansi16::BrightCyan => Color::LightCyan,
            Ansi16::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
}
