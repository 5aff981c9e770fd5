#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::parser::{FlagValue, ParsedArguments, TokenClass};
use crate::style::{Color, Style, StyleHandle};
use std::collections::BTreeMap;
use std::io::{self, IsTerminal, Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Renders a [`ParsedArguments`] snapshot for terminal display, styled with
/// the crate's own [`Style`] handles when colors are enabled.
pub struct HumanFormatter {
    color_choice: ColorChoice,
    verbose: bool,
}

/// Handles used for each part of the report
struct Palette {
    heading: StyleHandle,
    flag: StyleHandle,
    value: StyleHandle,
    position: StyleHandle,
    separator: StyleHandle,
    muted: StyleHandle,
}

impl Palette {
    fn new() -> Self {
        let style = Style;
        Palette {
            heading: style.bold(),
            flag: style.fg(Color::Green),
            value: style.fg(Color::Cyan),
            position: style.dim(),
            separator: style.fg(Color::Yellow),
            muted: style.dim().italic(),
        }
    }
}

/// Applies a handle, or passes text through when styling is off
struct Painter {
    palette: Option<Palette>,
}

impl Painter {
    fn paint(&self, pick: fn(&Palette) -> &StyleHandle, text: &str) -> String {
        match &self.palette {
            Some(palette) => pick(palette).paint(text),
            None => text.to_string(),
        }
    }
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter {
            color_choice,
            verbose: false,
        }
    }

    /// Also list every raw token with its classification
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Format the snapshot without any ANSI styling
    pub fn format(&self, parsed: &ParsedArguments) -> String {
        self.render(parsed, &Painter { palette: None })
    }

    /// Format the snapshot with ANSI styling
    pub fn format_styled(&self, parsed: &ParsedArguments) -> String {
        self.render(
            parsed,
            &Painter {
                palette: Some(Palette::new()),
            },
        )
    }

    /// Write the formatted output to stdout, styled if the color choice and
    /// the terminal allow it
    pub fn write_to_stdout(&self, parsed: &ParsedArguments) -> io::Result<()> {
        let choice = match self.color_choice {
            ColorChoice::Auto if !io::stdout().is_terminal() => ColorChoice::Never,
            choice => choice,
        };
        let mut stdout = StandardStream::stdout(choice);

        let output = if stdout.supports_color() {
            self.format_styled(parsed)
        } else {
            self.format(parsed)
        };

        write!(stdout, "{}", output)?;
        stdout.flush()
    }

    fn render(&self, parsed: &ParsedArguments, painter: &Painter) -> String {
        let mut output = String::new();

        if parsed.no_arguments() {
            output.push_str(&painter.paint(|p| &p.muted, "No arguments"));
            output.push('\n');
            return output;
        }

        output.push_str(&format!(
            "{} {}\n",
            painter.paint(|p| &p.heading, "Arguments:"),
            parsed.argument_count()
        ));

        render_flags(&mut output, painter, "Single flags:", "-", parsed.single_flags());
        render_flags(&mut output, painter, "Long flags:", "--", parsed.long_flags());

        if !parsed.other().is_empty() {
            output.push_str(&painter.paint(|p| &p.heading, "Other:"));
            output.push('\n');
            for arg in parsed.other() {
                output.push_str(&format!(
                    "  {} {}\n",
                    painter.paint(|p| &p.position, &format!("{:>3}", arg.position)),
                    arg.text
                ));
            }
        }

        if !parsed.separators().is_empty() {
            let positions: Vec<String> = parsed
                .separators()
                .iter()
                .map(|position| position.to_string())
                .collect();
            output.push_str(&format!(
                "{} {}\n",
                painter.paint(|p| &p.heading, "Separators:"),
                painter.paint(|p| &p.separator, &positions.join(", "))
            ));
        }

        output.push_str(&painter.paint(|p| &p.heading, "Piped input:"));
        match parsed.piped_input() {
            None => {
                output.push(' ');
                output.push_str(&painter.paint(|p| &p.muted, "none"));
                output.push('\n');
            }
            Some("") => {
                output.push(' ');
                output.push_str(&painter.paint(|p| &p.muted, "empty"));
                output.push('\n');
            }
            Some(text) => {
                output.push('\n');
                for line in text.split('\n') {
                    output.push_str(&format!("  | {}\n", line));
                }
            }
        }

        if self.verbose && parsed.argument_count() > 0 {
            output.push_str(&painter.paint(|p| &p.heading, "Tokens:"));
            output.push('\n');
            for (position, token, class) in parsed.classified_tokens() {
                output.push_str(&format!(
                    "  {} {:<12} {}\n",
                    painter.paint(|p| &p.position, &format!("{:>3}", position)),
                    class_label(class),
                    token
                ));
            }
        }

        output
    }
}

fn render_flags(
    output: &mut String,
    painter: &Painter,
    heading: &str,
    dashes: &str,
    flags: &BTreeMap<String, FlagValue>,
) {
    if flags.is_empty() {
        return;
    }

    output.push_str(&painter.paint(|p| &p.heading, heading));
    output.push('\n');

    for (name, value) in flags {
        let flag = painter.paint(|p| &p.flag, &format!("{}{}", dashes, name));
        match value {
            FlagValue::Switch => output.push_str(&format!("  {}\n", flag)),
            FlagValue::Value(text) => output.push_str(&format!(
                "  {} = {}\n",
                flag,
                painter.paint(|p| &p.value, text)
            )),
        }
    }
}

fn class_label(class: TokenClass) -> &'static str {
    match class {
        TokenClass::SingleFlag => "single-flag",
        TokenClass::Bundle => "bundle",
        TokenClass::LongFlag => "long-flag",
        TokenClass::FlagValue => "flag-value",
        TokenClass::Other => "other",
        TokenClass::Separator => "separator",
        TokenClass::Dropped => "dropped",
    }
}
