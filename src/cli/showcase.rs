//! Style showcase
//!
//! Every sample is built from attribute names, so the showcase exercises the
//! same name resolution that callers use.

use crate::style::{Code, Color, Style};

/// Showcase sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    Styles,
    Colors,
    Bright,
    Backgrounds,
    Combinations,
    Messages,
    All,
}

/// A line of the showcase: sample text and the attribute chain painting it
struct Sample {
    chain: Vec<String>,
    text: String,
}

impl Sample {
    fn new<S: AsRef<str>>(chain: &[S], text: impl Into<String>) -> Self {
        Sample {
            chain: chain.iter().map(|name| name.as_ref().to_string()).collect(),
            text: text.into(),
        }
    }
}

const COMBINATIONS: &[(&[&str], &str)] = &[
    (&["bold", "red"], "Bold Red"),
    (&["italic", "green"], "Italic Green"),
    (&["underline", "yellow"], "Underlined Yellow"),
    (&["bold", "italic", "cyan"], "Bold Italic Cyan"),
    (&["dim", "underline", "magenta"], "Dim Underlined Magenta"),
    (&["bold", "bgRed", "white"], "Bold White on Red"),
    (&["italic", "bgCyan", "black"], "Italic Black on Cyan"),
    (&["bold", "underline", "brightGreen"], "Bold Underlined Bright Green"),
];

const MESSAGES: &[(&str, Color, Color, &str)] = &[
    (" SUCCESS ", Color::Green, Color::Black, "File saved successfully!"),
    (" ERROR ", Color::Red, Color::White, "Failed to connect to database"),
    (" WARNING ", Color::Yellow, Color::Black, "Deprecated function used"),
    (" INFO ", Color::Blue, Color::White, "Starting server on port 3000..."),
];

/// Renders a section; without `styled` the text is emitted with no escape codes
pub fn render(section: Section, styled: bool) -> String {
    let sections: &[Section] = match section {
        Section::All => &[
            Section::Styles,
            Section::Colors,
            Section::Bright,
            Section::Backgrounds,
            Section::Combinations,
            Section::Messages,
        ],
        ref single => std::slice::from_ref(single),
    };

    let mut output = String::new();
    for (index, &section) in sections.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        render_section(&mut output, section, styled);
    }
    output
}

fn render_section(output: &mut String, section: Section, styled: bool) {
    let heading_chain = ["bold".to_string(), "underline".to_string()];

    match section {
        Section::Messages => {
            output.push_str(&paint(&heading_chain, "MESSAGE TYPES", styled));
            output.push('\n');
            for &(badge, background, foreground, message) in MESSAGES {
                let badge_chain = [
                    Code::Bg(background).name(),
                    foreground.name().to_string(),
                    "bold".to_string(),
                ];
                let message_chain = [background.name().to_string()];
                output.push_str(&format!(
                    "{} {}\n",
                    paint(&badge_chain, badge, styled),
                    paint(&message_chain, message, styled)
                ));
            }
        }
        Section::All => {}
        _ => {
            let (title, samples) = samples(section);
            output.push_str(&paint(&heading_chain, title, styled));
            output.push('\n');
            for sample in samples {
                output.push_str(&format!(
                    "{} - style.{}\n",
                    paint(&sample.chain, &sample.text, styled),
                    sample.chain.join(".")
                ));
            }
        }
    }
}

/// Paints `text` with the handle named by `chain`
fn paint(chain: &[String], text: &str, styled: bool) -> String {
    if !styled {
        return text.to_string();
    }

    chain
        .iter()
        .fold(Style.plain(), |handle, name| handle.attribute(name))
        .paint(text)
}

fn samples(section: Section) -> (&'static str, Vec<Sample>) {
    match section {
        Section::Styles => (
            "TEXT STYLES",
            Code::ATTRIBUTES
                .iter()
                .map(|code| {
                    let name = code.name();
                    let text = format!("{} text", title_case(&name));
                    Sample::new(&[name], text)
                })
                .collect(),
        ),
        Section::Colors => (
            "BASIC COLORS",
            Color::ALL
                .iter()
                .map(|color| {
                    Sample::new(&[color.name()], format!("{} text", title_case(color.name())))
                })
                .collect(),
        ),
        Section::Bright => (
            "BRIGHT COLORS",
            Color::ALL
                .iter()
                .map(|&color| {
                    Sample::new(
                        &[Code::BrightFg(color).name()],
                        format!("Bright {} text", title_case(color.name())),
                    )
                })
                .collect(),
        ),
        Section::Backgrounds => (
            "BACKGROUND COLORS",
            Color::ALL
                .iter()
                .map(|&color| {
                    Sample::new(
                        &[Code::Bg(color).name(), contrast(color).name().to_string()],
                        format!("{} background", title_case(color.name())),
                    )
                })
                .collect(),
        ),
        Section::Combinations => (
            "STYLE COMBINATIONS",
            COMBINATIONS
                .iter()
                .map(|&(chain, text)| Sample::new(chain, text))
                .collect(),
        ),
        Section::Messages | Section::All => ("", Vec::new()),
    }
}

/// Foreground that stays readable on the given background
fn contrast(background: Color) -> Color {
    match background {
        Color::Green | Color::Yellow | Color::Cyan | Color::White => Color::Black,
        _ => Color::White,
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styles_section() {
        let output = render(Section::Styles, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "TEXT STYLES");
        assert_eq!(lines[1], "Bold text - style.bold");
        assert_eq!(lines[6], "Invert text - style.invert");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_plain_backgrounds_use_contrasting_text() {
        let output = render(Section::Backgrounds, false);
        assert!(output.contains("Green background - style.bgGreen.black\n"));
        assert!(output.contains("Red background - style.bgRed.white\n"));
    }

    #[test]
    fn test_styled_combination_codes() {
        let output = render(Section::Combinations, true);
        assert!(output.contains("\x1b[1m\x1b[31mBold Red\x1b[0m - style.bold.red\n"));
        assert!(output.contains(
            "\x1b[1m\x1b[4m\x1b[92mBold Underlined Bright Green\x1b[0m - style.bold.underline.brightGreen\n"
        ));
    }

    #[test]
    fn test_styled_messages() {
        let output = render(Section::Messages, true);
        assert!(output.contains("\x1b[41m\x1b[37m\x1b[1m ERROR \x1b[0m \x1b[31mFailed to connect"));
    }

    #[test]
    fn test_all_contains_every_section() {
        let output = render(Section::All, false);
        for title in [
            "TEXT STYLES",
            "BASIC COLORS",
            "BRIGHT COLORS",
            "BACKGROUND COLORS",
            "STYLE COMBINATIONS",
            "MESSAGE TYPES",
        ] {
            assert!(output.contains(title), "missing {title}");
        }
        assert!(!output.contains('\x1b'));
    }
}
