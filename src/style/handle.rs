#![forbid(unsafe_code)]

//! Immutable, chainable style handles

use super::code::{Code, Color};

/// Entry point into the style table
///
/// `Style` holds no codes itself; every accessor starts a new
/// [`StyleHandle`] chain.
///
/// ```
/// use simpleargs::style::Style;
///
/// let style = Style;
/// let warning = style.bold().attribute("yellow");
/// assert_eq!(warning.paint("careful"), "\x1b[1m\x1b[33mcareful\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style;

impl Style {
    /// Starts a chain from an attribute name; unknown names yield an empty handle
    pub fn attribute(&self, name: &str) -> StyleHandle {
        StyleHandle::default().attribute(name)
    }

    /// Starts a chain from a table entry
    pub fn code(&self, code: Code) -> StyleHandle {
        StyleHandle::default().code(code)
    }

    /// An empty handle: painting with it only appends the reset code
    pub fn plain(&self) -> StyleHandle {
        StyleHandle::default()
    }

    pub fn bold(&self) -> StyleHandle {
        self.code(Code::Bold)
    }

    pub fn dim(&self) -> StyleHandle {
        self.code(Code::Dim)
    }

    pub fn italic(&self) -> StyleHandle {
        self.code(Code::Italic)
    }

    pub fn underline(&self) -> StyleHandle {
        self.code(Code::Underline)
    }

    pub fn blink(&self) -> StyleHandle {
        self.code(Code::Blink)
    }

    pub fn invert(&self) -> StyleHandle {
        self.code(Code::Invert)
    }

    pub fn fg(&self, color: Color) -> StyleHandle {
        self.code(Code::Fg(color))
    }

    pub fn bright(&self, color: Color) -> StyleHandle {
        self.code(Code::BrightFg(color))
    }

    pub fn bg(&self, color: Color) -> StyleHandle {
        self.code(Code::Bg(color))
    }
}

/// An accumulated sequence of ANSI codes, applied in insertion order
///
/// Deriving from a handle never mutates it: `bold.attribute("red")` returns a
/// new handle and `bold` keeps painting bold-only text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleHandle {
    codes: Vec<Code>,
}

impl StyleHandle {
    /// Codes accumulated so far, in application order
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Returns true if no code has been accumulated
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Appends the code named by `name`
    ///
    /// Unknown names are tolerated: the result paints exactly like `self`.
    pub fn attribute(&self, name: &str) -> StyleHandle {
        match Code::resolve(name) {
            Some(code) => self.code(code),
            None => {
                tracing::trace!(attribute = name, "ignoring unknown style attribute");
                self.clone()
            }
        }
    }

    /// Appends a table entry
    pub fn code(&self, code: Code) -> StyleHandle {
        let mut codes = Vec::with_capacity(self.codes.len() + 1);
        codes.extend_from_slice(&self.codes);
        codes.push(code);
        StyleHandle { codes }
    }

    pub fn bold(&self) -> StyleHandle {
        self.code(Code::Bold)
    }

    pub fn dim(&self) -> StyleHandle {
        self.code(Code::Dim)
    }

    pub fn italic(&self) -> StyleHandle {
        self.code(Code::Italic)
    }

    pub fn underline(&self) -> StyleHandle {
        self.code(Code::Underline)
    }

    pub fn blink(&self) -> StyleHandle {
        self.code(Code::Blink)
    }

    pub fn invert(&self) -> StyleHandle {
        self.code(Code::Invert)
    }

    pub fn fg(&self, color: Color) -> StyleHandle {
        self.code(Code::Fg(color))
    }

    pub fn bright(&self, color: Color) -> StyleHandle {
        self.code(Code::BrightFg(color))
    }

    pub fn bg(&self, color: Color) -> StyleHandle {
        self.code(Code::Bg(color))
    }

    /// The concatenated escape sequences, without text or reset
    pub fn prefix(&self) -> String {
        self.codes.iter().map(|code| code.escape()).collect()
    }

    /// Wraps `text`: accumulated codes, then the text, then a single reset
    pub fn paint(&self, text: &str) -> String {
        let mut output = self.prefix();
        output.push_str(text);
        output.push_str(Code::Reset.escape());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_single_attribute() {
        assert_eq!(Style.bold().paint("x"), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_paint_in_access_order() {
        let handle = Style.attribute("bold").attribute("red");
        assert_eq!(handle.paint("x"), "\x1b[1m\x1b[31mx\x1b[0m");

        let reversed = Style.attribute("red").attribute("bold");
        assert_eq!(reversed.paint("x"), "\x1b[31m\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_unknown_attribute_is_ignored() {
        let bold = Style.attribute("bold");
        let with_unknown = bold.attribute("wibble");

        assert_eq!(with_unknown, bold);
        assert_eq!(with_unknown.paint("x"), bold.paint("x"));
    }

    #[test]
    fn test_unknown_first_attribute_gives_empty_handle() {
        let handle = Style.attribute("wibble");
        assert!(handle.is_empty());
        assert_eq!(handle.paint("x"), "x\x1b[0m");
    }

    #[test]
    fn test_deriving_does_not_mutate_parent() {
        let bold = Style.bold();
        let before = bold.paint("x");

        let bold_red = bold.attribute("red");
        let bold_red_bg = bold_red.attribute("bgBlue");
        let _bold_green = bold.attribute("green");

        assert_eq!(bold.paint("x"), before);
        assert_eq!(bold_red.paint("x"), "\x1b[1m\x1b[31mx\x1b[0m");
        assert_eq!(bold_red_bg.paint("x"), "\x1b[1m\x1b[31m\x1b[44mx\x1b[0m");
    }

    #[test]
    fn test_long_chain() {
        let handle = Style
            .bold()
            .italic()
            .underline()
            .attribute("brightYellow")
            .attribute("bgMagenta")
            .invert();

        assert_eq!(
            handle.codes(),
            &[
                Code::Bold,
                Code::Italic,
                Code::Underline,
                Code::BrightFg(Color::Yellow),
                Code::Bg(Color::Magenta),
                Code::Invert,
            ]
        );
        assert_eq!(
            handle.paint("hi"),
            "\x1b[1m\x1b[3m\x1b[4m\x1b[93m\x1b[45m\x1b[7mhi\x1b[0m"
        );
    }

    #[test]
    fn test_repeated_codes_are_kept() {
        let handle = Style.bold().bold();
        assert_eq!(handle.paint("x"), "\x1b[1m\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_typed_and_named_accessors_agree() {
        assert_eq!(Style.fg(Color::Cyan), Style.attribute("cyan"));
        assert_eq!(Style.bright(Color::Red), Style.attribute("brightRed"));
        assert_eq!(Style.bg(Color::Green), Style.attribute("bgGreen"));
        assert_eq!(Style.dim().blink(), Style.attribute("dim").attribute("blink"));
    }

    #[test]
    fn test_entry_point_starts_every_attribute_chain() {
        let starts = [
            Style.bold(),
            Style.dim(),
            Style.italic(),
            Style.underline(),
            Style.blink(),
            Style.invert(),
        ];
        for (handle, code) in starts.iter().zip(Code::ATTRIBUTES) {
            assert_eq!(handle.codes(), &[code]);
            assert_eq!(*handle, Style.attribute(&code.name()));
        }
        assert_eq!(Style.invert().paint("x"), "\x1b[7mx\x1b[0m");
        assert_eq!(Style.blink().invert(), Style.plain().blink().invert());
    }

    #[test]
    fn test_paint_empty_text() {
        assert_eq!(Style.bold().paint(""), "\x1b[1m\x1b[0m");
        assert_eq!(Style.plain().paint(""), "\x1b[0m");
    }
}
