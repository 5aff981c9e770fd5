#![forbid(unsafe_code)]

//! Closed table of ANSI SGR codes and attribute-name resolution
//!
//! The table is fixed: a reset code, six text attributes, and eight colors
//! available as foreground, bright foreground and background.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix selecting the bright foreground variant of a color (`brightRed`)
const BRIGHT_PREFIX: &str = "bright";

/// Prefix selecting the background variant of a color (`bgCyan`)
const BG_PREFIX: &str = "bg";

/// Upper-case table key prefixes (`BRIGHT_RED`, `BG_CYAN`)
const BRIGHT_KEY_PREFIX: &str = "BRIGHT_";
const BG_KEY_PREFIX: &str = "BG_";

/// Error returned when a name does not resolve to any table entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style attribute '{0}'")]
pub struct UnknownAttribute(pub String);

/// The eight base terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors in SGR order (30..=37)
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Lowercase attribute name of this color
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// Resolves a color name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

/// A single entry of the ANSI code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Invert,
    Fg(Color),
    BrightFg(Color),
    Bg(Color),
}

impl Code {
    /// Text attributes in table order
    pub const ATTRIBUTES: [Code; 6] = [
        Code::Bold,
        Code::Dim,
        Code::Italic,
        Code::Underline,
        Code::Blink,
        Code::Invert,
    ];

    /// The escape sequence emitted for this code
    pub fn escape(self) -> &'static str {
        match self {
            Code::Reset => "\x1b[0m",
            Code::Bold => "\x1b[1m",
            Code::Dim => "\x1b[2m",
            Code::Italic => "\x1b[3m",
            Code::Underline => "\x1b[4m",
            Code::Blink => "\x1b[5m",
            Code::Invert => "\x1b[7m",
            Code::Fg(color) => FG[color as usize],
            Code::BrightFg(color) => BRIGHT_FG[color as usize],
            Code::Bg(color) => BG[color as usize],
        }
    }

    /// Resolves an attribute name against the table
    ///
    /// Rules, in precedence order:
    /// 1. Case-insensitive match against a base attribute or color name
    ///    (`bold`, `RED`, `reset`)
    /// 2. `bright` followed by a color name (`brightGreen`)
    /// 3. `bg` followed by a color name (`bgCyan`)
    /// 4. Case-insensitive match against the table key of a bright or
    ///    background color (`BRIGHT_RED`, `Bg_Cyan`), unless rule 2 or 3
    ///    already claimed the name
    ///
    /// Returns `None` for anything else.
    pub fn resolve(name: &str) -> Option<Code> {
        if let Some(code) = Self::from_base_name(name) {
            return Some(code);
        }

        if let Some(rest) = name.strip_prefix(BRIGHT_PREFIX).filter(|rest| !rest.is_empty()) {
            return Color::from_name(rest).map(Code::BrightFg);
        }

        if let Some(rest) = name.strip_prefix(BG_PREFIX).filter(|rest| !rest.is_empty()) {
            return Color::from_name(rest).map(Code::Bg);
        }

        Self::from_table_key(name)
    }

    /// The canonical attribute name, i.e. one that [`Code::resolve`] maps back
    /// to this code
    pub fn name(self) -> String {
        match self {
            Code::Fg(color) => color.name().to_string(),
            Code::BrightFg(color) => format!("{}{}", BRIGHT_PREFIX, capitalize(color.name())),
            Code::Bg(color) => format!("{}{}", BG_PREFIX, capitalize(color.name())),
            other => other.base_name().unwrap_or_default().to_string(),
        }
    }

    fn base_name(self) -> Option<&'static str> {
        match self {
            Code::Reset => Some("reset"),
            Code::Bold => Some("bold"),
            Code::Dim => Some("dim"),
            Code::Italic => Some("italic"),
            Code::Underline => Some("underline"),
            Code::Blink => Some("blink"),
            Code::Invert => Some("invert"),
            Code::Fg(color) => Some(color.name()),
            Code::BrightFg(_) | Code::Bg(_) => None,
        }
    }

    fn from_table_key(name: &str) -> Option<Code> {
        let key = name.to_ascii_uppercase();
        if let Some(rest) = key.strip_prefix(BRIGHT_KEY_PREFIX) {
            return Color::from_name(rest).map(Code::BrightFg);
        }

        key.strip_prefix(BG_KEY_PREFIX)
            .and_then(Color::from_name)
            .map(Code::Bg)
    }

    fn from_base_name(name: &str) -> Option<Code> {
        std::iter::once(Code::Reset)
            .chain(Code::ATTRIBUTES)
            .find(|code| {
                code.base_name()
                    .is_some_and(|base| base.eq_ignore_ascii_case(name))
            })
            .or_else(|| Color::from_name(name).map(Code::Fg))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.escape())
    }
}

impl FromStr for Code {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::resolve(s).ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

const FG: [&str; 8] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m", "\x1b[37m",
];

const BRIGHT_FG: [&str; 8] = [
    "\x1b[90m", "\x1b[91m", "\x1b[92m", "\x1b[93m", "\x1b[94m", "\x1b[95m", "\x1b[96m", "\x1b[97m",
];

const BG: [&str; 8] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m", "\x1b[47m",
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
