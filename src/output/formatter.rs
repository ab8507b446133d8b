use owo_colors::OwoColorize;
use serde_json::Value;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::analysis::{AnalysisResult, VariantResult};
use crate::scoring::Effect;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Strings without their JSON quotes, everything else as JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Always three decimals ("0.460")
pub fn format_pathogenicity(pathogenicity: f64) -> String {
    format!("{:.3}", pathogenicity)
}

fn colorize_effect(text: &str, effect: Effect) -> String {
    match effect {
        Effect::High => text.red().bold().to_string(),
        Effect::Moderate => text.yellow().to_string(),
        Effect::Low => text.green().to_string(),
    }
}

fn location(variant: &VariantResult) -> String {
    format!(
        "chr{}:{}",
        display_value(&variant.chromosome),
        display_value(&variant.position)
    )
}

/// Format results as a table with columns: Index, Score, Impact, rsId, Location, Genotype
/// Rows keep input order. The rsId column is truncated on narrow terminals.
pub fn format_results_table(result: &AnalysisResult, use_colors: bool) -> String {
    if result.results.is_empty() {
        return "No variants analyzed.".to_string();
    }

    let term_width = get_terminal_width();

    // Index 4 + score 6 + impact 8 + four separators; location and genotype vary
    let index_width = 4;
    let score_width = 6;
    let impact_width = 8;
    let separator = "  ";

    result
        .results
        .iter()
        .enumerate()
        .map(|(idx, variant)| {
            let index_str = format!("{:>3}.", idx + 1);
            let prediction = &variant.predictions;
            let score_str = format!(
                "{:>width$}",
                format_pathogenicity(prediction.pathogenicity),
                width = score_width
            );
            let impact_str = format!(
                "{:<width$}",
                prediction.effect.label(),
                width = impact_width
            );
            let location = location(variant);
            let genotype = display_value(&variant.genotype);

            let fixed_width = index_width
                + 1
                + score_width
                + impact_width
                + separator.len() * 4
                + location.len()
                + genotype.len();
            let rs_id = display_value(&variant.rs_id);
            let rs_id = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&rs_id, width - fixed_width),
                Some(_) => truncate(&rs_id, 10),
                None => rs_id,
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    colorize_effect(&impact_str, prediction.effect),
                    separator,
                    rs_id.cyan(),
                    separator,
                    location,
                    separator,
                    genotype
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str,
                    score_str,
                    separator,
                    impact_str,
                    separator,
                    rs_id,
                    separator,
                    location,
                    separator,
                    genotype
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line output for a single variant (for verbose mode)
pub fn format_variant_detail(variant: &VariantResult, use_colors: bool) -> String {
    let prediction = &variant.predictions;
    let rs_id = display_value(&variant.rs_id);
    let effect = prediction.effect.description();

    if use_colors {
        format!(
            "{}\n  Location: {}\n  Genotype: {}\n  Pathogenicity: {}\n  Effect: {}\n  Confidence: {}\n  Model: {}",
            rs_id.bold(),
            location(variant),
            display_value(&variant.genotype),
            format_pathogenicity(prediction.pathogenicity).bold(),
            colorize_effect(effect, prediction.effect),
            prediction.confidence,
            prediction.details.model_version.dimmed()
        )
    } else {
        format!(
            "{}\n  Location: {}\n  Genotype: {}\n  Pathogenicity: {}\n  Effect: {}\n  Confidence: {}\n  Model: {}",
            rs_id,
            location(variant),
            display_value(&variant.genotype),
            format_pathogenicity(prediction.pathogenicity),
            effect,
            prediction.confidence,
            prediction.details.model_version
        )
    }
}

/// One-line summary: "3 variants analyzed (1 high, 1 moderate, 1 low), API key not configured"
pub fn format_summary(result: &AnalysisResult) -> String {
    let count = |effect: Effect| {
        result
            .results
            .iter()
            .filter(|v| v.predictions.effect == effect)
            .count()
    };
    let noun = if result.metadata.total_variants == 1 {
        "variant"
    } else {
        "variants"
    };
    let api = if result.metadata.api_configured {
        "API key configured"
    } else {
        "API key not configured"
    };

    format!(
        "{} {} analyzed ({} high, {} moderate, {} low), {}",
        result.metadata.total_variants,
        noun,
        count(Effect::High),
        count(Effect::Moderate),
        count(Effect::Low),
        api
    )
}
