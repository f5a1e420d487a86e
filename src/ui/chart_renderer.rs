//! Plain-text chart rendering for the terminal host.
//!
//! Each renderer takes normalizer output as-is. Colors come from the
//! constants in `config::constants` (and each slice's own color), never from
//! the rest of the payload, and are only emitted when `RenderOptions` asks
//! for them. No rendered line is wider than `RenderOptions::width`.

use std::fmt::Write;
use crate::config::constants::{BAR_COLOR, BAR_DECIMAL_PLACES, LINE_COLOR, LINE_POINT_COLOR, PROGRESS_COLOR};
use crate::structs::charts::category_slice::{slice_shares, CategorySlice};
use crate::structs::charts::daily_series::DailySeries;
use crate::structs::charts::progress_data::ProgressData;
use crate::structs::charts::weekly_bar_data::WeeklyBarData;

// One text row per this many points of nominal chart height.
const POINTS_PER_ROW: u16 = 20;
const LABEL_WIDTH: usize = 10;
const MIN_WIDTH: usize = LABEL_WIDTH + 10;
const MIN_ROWS: usize = 2;
const NO_DATA: &str = "  (no data)\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    width: usize,
    rows: usize,
    color: bool,
}

impl RenderOptions {
    pub fn new(width: usize, chart_height: u16) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            rows: usize::from(chart_height / POINTS_PER_ROW).max(MIN_ROWS),
            color: false,
        }
    }

    /// Enables 24-bit ANSI colors. Only worth it when writing to a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn color(&self) -> bool {
        self.color
    }

    fn plot_width(&self) -> usize {
        self.width.saturating_sub(LABEL_WIDTH + 3).max(1)
    }

    /// Wraps `text` in a truecolor escape for `hex` (`#rrggbb`). Returns the
    /// text unchanged when colors are off or `hex` does not parse.
    pub fn paint(&self, text: &str, hex: &str) -> String {
        match parse_hex(hex).filter(|_| self.color) {
            Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
            None => text.to_string(),
        }
    }
}

pub fn render_line(series: &DailySeries, options: &RenderOptions) -> String {
    let mut out = String::new();
    if series.is_empty() {
        out.push_str(NO_DATA);
        return out;
    }

    let points = downsample(series, options.plot_width());
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let min = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::min);
    let span = if max > min { max - min } else { 1.0 };
    let column = (options.plot_width() / points.len()).max(1);
    let top = options.rows().saturating_sub(1);

    for row in (0..options.rows()).rev() {
        let axis = if row == top {
            format_value(max, 0)
        } else if row == 0 {
            format_value(min, 0)
        } else {
            String::new()
        };
        let mut line = format!("{:>width$} {}", axis, options.paint("│", LINE_COLOR), width = LABEL_WIDTH);
        let mut pending = 0;
        for (_, value) in &points {
            let level = ((value - min) / span * top as f64).round() as usize;
            if level == row {
                let left = (column - 1) / 2;
                let _ = write!(line, "{}{}", " ".repeat(pending + left), options.paint("●", LINE_POINT_COLOR));
                pending = column - 1 - left;
            } else {
                pending += column;
            }
        }
        out.push_str(&line);
        out.push('\n');
    }

    let mut axis = format!("{:>width$} └", "", width = LABEL_WIDTH);
    axis.push_str(&"─".repeat(column * points.len()));
    out.push_str(&options.paint(&axis, LINE_COLOR));
    out.push('\n');

    let mut labels = format!("{:>width$}  ", "", width = LABEL_WIDTH);
    for (label, _) in &points {
        let _ = write!(labels, "{:^width$}", truncate(label, column), width = column);
    }
    out.push_str(labels.trim_end());
    out.push('\n');
    out
}

/// At most `columns` points: consecutive points are averaged into buckets,
/// each labelled with its first point's label.
fn downsample(series: &DailySeries, columns: usize) -> Vec<(&str, f64)> {
    let points: Vec<(&str, f64)> = series.points().collect();
    if points.len() <= columns {
        return points;
    }

    (0..columns)
        .map(|bucket| {
            let start = bucket * points.len() / columns;
            let end = (bucket + 1) * points.len() / columns;
            let slice = &points[start..end];
            let mean = slice.iter().map(|(_, v)| v).sum::<f64>() / slice.len() as f64;
            (slice[0].0, mean)
        })
        .collect()
}

pub fn render_bar(bars: &WeeklyBarData, options: &RenderOptions) -> String {
    let mut out = String::new();
    let Some(dataset) = bars.primary().filter(|_| !bars.is_empty()) else {
        out.push_str(NO_DATA);
        return out;
    };

    // bars start from zero
    let max = dataset.data.iter().copied().fold(0.0_f64, f64::max);
    let values: Vec<String> = dataset.data.iter().map(|v| format_value(*v, BAR_DECIMAL_PLACES)).collect();
    let value_width = values.iter().map(String::len).max().unwrap_or(0);
    let room = options.plot_width().saturating_sub(value_width + 1);

    for ((label, value), text) in bars.labels.iter().zip(&dataset.data).zip(&values) {
        let length = if max > 0.0 { (value.max(0.0) / max * room as f64).round() as usize } else { 0 };
        let _ = writeln!(
            out,
            "{:>width$} │{} {}",
            truncate(label, LABEL_WIDTH),
            options.paint(&"█".repeat(length), BAR_COLOR),
            text,
            width = LABEL_WIDTH
        );
    }
    out
}

pub fn render_pie(slices: &[CategorySlice], options: &RenderOptions) -> String {
    let mut out = String::new();
    if slices.is_empty() {
        out.push_str(NO_DATA);
        return out;
    }

    let legends: Vec<String> = slices
        .iter()
        .zip(slice_shares(slices))
        .map(|(slice, share)| format!("{} ({:.1}%)", format_value(slice.population, 0), share * 100.0))
        .collect();
    let legend_width = legends.iter().map(String::len).max().unwrap_or(0);
    let room = options.plot_width().saturating_sub(legend_width + 1).max(1);

    for ((slice, share), legend) in slices.iter().zip(slice_shares(slices)).zip(&legends) {
        let length = ((share * room as f64).round() as usize).clamp(1, room);
        let _ = writeln!(
            out,
            "{:>width$} │{} {}",
            truncate(&slice.name, LABEL_WIDTH),
            options.paint(&"■".repeat(length), &slice.color),
            legend,
            width = LABEL_WIDTH
        );
    }
    out
}

/// Out-of-range ratios are drawn clamped and flagged with `!`; the printed
/// percentage is always the raw value.
pub fn render_progress(progress: &ProgressData, options: &RenderOptions) -> String {
    let mut out = String::new();
    if progress.is_empty() {
        out.push_str(NO_DATA);
        return out;
    }

    let percents: Vec<String> = progress.data.iter().map(|ratio| format!("{:>4.0}%", ratio * 100.0)).collect();
    let percent_width = percents.iter().map(String::len).max().unwrap_or(0);
    let room = options.plot_width().saturating_sub(percent_width + 4);

    for ((label, ratio), percent) in progress.labels.iter().zip(&progress.data).zip(&percents) {
        let filled = (ratio.clamp(0.0, 1.0) * room as f64).round() as usize;
        let flag = if (0.0..=1.0).contains(ratio) { ' ' } else { '!' };
        let _ = writeln!(
            out,
            "{:>width$} [{}{}] {}{}",
            truncate(label, LABEL_WIDTH),
            options.paint(&"=".repeat(filled), PROGRESS_COLOR),
            " ".repeat(room - filled),
            percent,
            flag,
            width = LABEL_WIDTH
        );
    }
    out
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').filter(|d| d.len() == 6)?;
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn format_value(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::charts::weekly_bar_data::BarDataset;

    fn options() -> RenderOptions {
        RenderOptions::new(60, 220)
    }

    fn widest_line(text: &str) -> usize {
        text.lines().map(|line| line.chars().count()).max().unwrap_or(0)
    }

    fn week() -> DailySeries {
        DailySeries {
            values: vec![1.0, 5.0, 3.0],
            labels: vec!["Mon".into(), "Tue".into(), "Wed".into()],
        }
    }

    #[test]
    fn options_scale_height_to_rows() {
        assert_eq!(RenderOptions::new(80, 220).rows(), 11);
        assert_eq!(RenderOptions::new(80, 10).rows(), 2);
        assert_eq!(RenderOptions::new(1, 220).width(), MIN_WIDTH);
        assert!(!RenderOptions::new(80, 220).color());
    }

    #[test]
    fn degenerate_sizes_are_clamped_instead_of_panicking() {
        let tiny = RenderOptions::new(0, 0);
        let progress = ProgressData {
            labels: vec!["Chat".into()],
            data: vec![0.5],
        };

        let text = render_progress(&progress, &tiny);
        assert!(text.contains("50%"));
        assert!(!render_line(&week(), &tiny).is_empty());
    }

    #[test]
    fn empty_charts_say_no_data() {
        assert!(render_line(&DailySeries::default(), &options()).contains("(no data)"));
        assert!(render_bar(&WeeklyBarData::default(), &options()).contains("(no data)"));
        assert!(render_pie(&[], &options()).contains("(no data)"));
        assert!(render_progress(&ProgressData::default(), &options()).contains("(no data)"));
    }

    #[test]
    fn line_chart_plots_every_point_and_label() {
        let text = render_line(&week(), &options());
        assert_eq!(text.matches('●').count(), 3);
        assert!(text.contains("Mon") && text.contains("Wed"));
    }

    #[test]
    fn long_series_is_bucketed_to_the_chart_width() {
        let series = DailySeries {
            values: (0..200).map(f64::from).collect(),
            labels: (0..200).map(|i| format!("d{}", i)).collect(),
        };
        let options = RenderOptions::new(60, 220);

        let text = render_line(&series, &options);

        assert!(widest_line(&text) <= options.width(), "widest line {}", widest_line(&text));
        assert_eq!(text.matches('●').count(), options.plot_width());
    }

    #[test]
    fn downsample_averages_buckets() {
        let series = DailySeries {
            values: vec![1.0, 3.0, 5.0, 7.0],
            labels: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        };
        assert_eq!(downsample(&series, 2), vec![("a", 2.0), ("c", 6.0)]);
        assert_eq!(downsample(&series, 10).len(), 4);
    }

    #[test]
    fn no_chart_exceeds_its_width() {
        let options = RenderOptions::new(40, 220);
        let bars = WeeklyBarData {
            labels: vec!["W1".into(), "A very long week label".into()],
            datasets: vec![BarDataset { data: vec![10.0, 123_456.0] }],
        };
        let slices = vec![CategorySlice {
            name: "Social".into(),
            population: 1_234_567.0,
            color: "#12ab34".into(),
            legend_font_color: "#7F7F7F".into(),
            legend_font_size: 12,
        }];
        let progress = ProgressData {
            labels: vec!["Chat".into()],
            data: vec![12.5],
        };

        for text in [
            render_line(&week(), &options),
            render_bar(&bars, &options),
            render_pie(&slices, &options),
            render_progress(&progress, &options),
        ] {
            assert!(widest_line(&text) <= options.width(), "too wide:\n{}", text);
        }
    }

    #[test]
    fn bar_chart_prints_values_without_decimals() {
        let bars = WeeklyBarData {
            labels: vec!["W1".into(), "W2".into()],
            datasets: vec![BarDataset { data: vec![10.0, 20.4] }],
        };
        let text = render_bar(&bars, &options());
        assert!(text.contains("W1"));
        assert!(text.contains(" 20\n"));
    }

    #[test]
    fn pie_legend_shows_population_and_share() {
        let slices = vec![CategorySlice {
            name: "Social".into(),
            population: 40.0,
            color: "#12ab34".into(),
            legend_font_color: "#7F7F7F".into(),
            legend_font_size: 12,
        }];
        let text = render_pie(&slices, &options());
        assert!(text.contains("40 (100.0%)"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn colored_pie_uses_each_slice_color() {
        let slices = vec![CategorySlice {
            name: "Social".into(),
            population: 40.0,
            color: "#12ab34".into(),
            legend_font_color: "#7F7F7F".into(),
            legend_font_size: 12,
        }];
        let text = render_pie(&slices, &options().with_color(true));
        assert!(text.contains("\x1b[38;2;18;171;52m"));
    }

    #[test]
    fn paint_ignores_bad_hex_and_disabled_color() {
        let colored = options().with_color(true);
        assert_eq!(colored.paint("x", "#zzzzzz"), "x");
        assert_eq!(options().paint("x", "#1e90ff"), "x");
        assert_eq!(colored.paint("x", "#1e90ff"), "\x1b[38;2;30;144;255mx\x1b[0m");
    }

    #[test]
    fn progress_flags_out_of_range_ratio() {
        let progress = ProgressData {
            labels: vec!["Chat".into(), "Feed".into()],
            data: vec![0.5, 1.5],
        };
        let text = render_progress(&progress, &options());
        assert!(text.contains(" 50% "));
        assert!(text.contains("150%!"));
    }
}
