use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::sentiment::{Analysis, Polarity, SentimentScore};

/// Width of the sentiment mix bar in the detail view.
const BAR_WIDTH: usize = 20;

/// Width reserved for the text excerpt in the detail view.
const DETAIL_TEXT_WIDTH: usize = 72;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a compound score with an explicit sign ("+0.8439")
pub fn format_compound(compound: f64) -> String {
    format!("{:+.4}", compound)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Flatten runs of whitespace to single spaces and truncate for display.
fn display_text(text: &str, max_width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_text(&flat, max_width)
}

fn polarity_label(polarity: Polarity, use_colors: bool) -> String {
    if !use_colors {
        return polarity.to_string();
    }
    match polarity {
        Polarity::Positive => polarity.to_string().green().bold().to_string(),
        Polarity::Negative => polarity.to_string().red().bold().to_string(),
        Polarity::Neutral => polarity.to_string().yellow().bold().to_string(),
    }
}

/// Render the positive/neutral/negative proportions as a fixed-width bar:
/// '+' positive, '=' neutral, '-' negative.
fn mix_bar(score: &SentimentScore, width: usize) -> String {
    let pos = ((score.positive * width as f64).round() as usize).min(width);
    let neg = ((score.negative * width as f64).round() as usize).min(width - pos);
    let neu = width - pos - neg;
    format!("[{}{}{}]", "+".repeat(pos), "=".repeat(neu), "-".repeat(neg))
}

fn format_mix(score: &SentimentScore) -> String {
    format!(
        "{:.1}% positive / {:.1}% neutral / {:.1}% negative",
        score.positive * 100.0,
        score.neutral * 100.0,
        score.negative * 100.0
    )
}

/// Format an analysis with detailed multi-line output (the default view)
pub fn format_detail(analysis: &Analysis, use_colors: bool) -> String {
    let text = display_text(&analysis.text, DETAIL_TEXT_WIDTH);
    let bar = mix_bar(&analysis.score, BAR_WIDTH);
    let mix = format_mix(&analysis.score);
    let compound = format_compound(analysis.score.compound);

    if use_colors {
        format!(
            "\"{}\"\n  Polarity: {} ({:.3} confidence)\n  Compound: {}\n  Mix:      {} {}",
            text.bold(),
            polarity_label(analysis.polarity, true),
            analysis.confidence,
            compound.bold(),
            bar.dimmed(),
            mix
        )
    } else {
        format!(
            "\"{}\"\n  Polarity: {} ({:.3} confidence)\n  Compound: {}\n  Mix:      {} {}",
            text, analysis.polarity, analysis.confidence, compound, bar, mix
        )
    }
}

/// Format an analysis as a single line: polarity, compound, text excerpt.
/// The excerpt is truncated to the terminal width; pipes get the full text.
pub fn format_compact(analysis: &Analysis, use_colors: bool) -> String {
    let compound = format_compound(analysis.score.compound);
    // "positive" is the widest label; pad so columns line up across runs
    let label = format!("{:<8}", analysis.polarity.to_string());

    let fixed_width = label.len() + 2 + compound.len() + 2;
    let text = match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => {
            display_text(&analysis.text, width - fixed_width)
        }
        Some(_) => display_text(&analysis.text, 20),
        None => display_text(&analysis.text, usize::MAX),
    };

    if use_colors {
        let label = match analysis.polarity {
            Polarity::Positive => label.green().bold().to_string(),
            Polarity::Negative => label.red().bold().to_string(),
            Polarity::Neutral => label.yellow().bold().to_string(),
        };
        format!("{}  {}  {}", label, compound.bold(), text)
    } else {
        format!("{}  {}  {}", label, compound, text)
    }
}

/// Format an analysis as pretty-printed JSON for scripting
pub fn format_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}
