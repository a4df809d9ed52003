use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use sources_core::{AppViewModel, ListStatus, SourceRecord, ViewMode, ViewModeSwitch};

const GRID_PREVIEW_LINES: usize = 5;
const LIST_PREVIEW_LINES: usize = 2;
const LOADING_PLACEHOLDER_ROWS: usize = 6;
const EMPTY_TEXT: &str = "No sources found.";

/// Renders the whole view as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Search: {:<32} [{}] role={} checked={}",
        view.search_text,
        switch_label(view.view_mode),
        ViewModeSwitch::ROLE,
        view.view_switch.checked
    );

    match view.status() {
        ListStatus::Loading => {
            for _ in 0..LOADING_PLACEHOLDER_ROWS {
                let _ = writeln!(out, "  ...");
            }
        }
        ListStatus::Failed(error) => {
            let _ = writeln!(out, "  {error}");
        }
        ListStatus::Empty => {
            let _ = writeln!(out, "  {EMPTY_TEXT}");
        }
        ListStatus::Ready(records) => match view.view_mode {
            ViewMode::Grid => records.iter().for_each(|record| render_card(&mut out, record)),
            ViewMode::List => records.iter().for_each(|record| render_row(&mut out, record)),
        },
    }

    let _ = writeln!(
        out,
        "{} {} {}",
        if view.can_previous { "[Previous]" } else { "(Previous)" },
        view.page_label(),
        if view.can_next { "[Next]" } else { "(Next)" }
    );
    out
}

fn switch_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "*Grid* List",
        ViewMode::List => "Grid *List*",
    }
}

fn render_card(out: &mut String, record: &SourceRecord) {
    let _ = writeln!(out, "+ {} <{}>", record.title, record.url.as_deref().unwrap_or("#"));
    if let Some(kind) = &record.kind {
        let _ = writeln!(out, "| {kind}");
    }
    let _ = writeln!(
        out,
        "| Published: {} | Updated: {}",
        format_date(record.published_on.as_deref()),
        format_date(record.updated_on.as_deref())
    );
    let (preview, truncated) = preview_lines(record.content.as_deref(), GRID_PREVIEW_LINES);
    for line in preview {
        let _ = writeln!(out, "| {line}");
    }
    if truncated {
        let _ = writeln!(out, "| ... Read more");
    }
}

fn render_row(out: &mut String, record: &SourceRecord) {
    let (preview, truncated) = preview_lines(record.content.as_deref(), LIST_PREVIEW_LINES);
    let _ = writeln!(
        out,
        "- {} | {} | {} | {} | {}",
        record.title,
        record.kind.as_deref().unwrap_or("-"),
        format_date(record.published_on.as_deref()),
        format_date(record.updated_on.as_deref()),
        record.url.as_deref().unwrap_or("#")
    );
    if !preview.is_empty() {
        let _ = writeln!(
            out,
            "  {}{}",
            preview.join(" "),
            if truncated { "..." } else { "" }
        );
    }
}

/// First `max_lines` lines of `content`, and whether anything was cut.
pub fn preview_lines(content: Option<&str>, max_lines: usize) -> (Vec<&str>, bool) {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return (Vec::new(), false);
    };
    let lines: Vec<&str> = content.split('\n').collect();
    let truncated = lines.len() > max_lines;
    (lines.into_iter().take(max_lines).collect(), truncated)
}

/// Formats an API date or timestamp as `YYYY-MM-DD`; `-` when absent or unparsable.
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str) -> SourceRecord {
        SourceRecord {
            title: "Advisory".to_string(),
            content: Some(content.to_string()),
            published_on: Some("2024-03-01".to_string()),
            ..SourceRecord::default()
        }
    }

    fn ready_view(mode: ViewMode, records: Vec<SourceRecord>) -> AppViewModel {
        AppViewModel {
            records,
            loading: false,
            page: 1,
            total: 23,
            total_pages: 3,
            can_next: true,
            view_mode: mode,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn dates_accept_api_formats() {
        assert_eq!(format_date(Some("2024-03-01")), "2024-03-01");
        assert_eq!(format_date(Some("2024-03-01T10:15:00")), "2024-03-01");
        assert_eq!(format_date(Some("2024-03-01T10:15:00.123456")), "2024-03-01");
        assert_eq!(format_date(Some("2024-03-01T10:15:00+02:00")), "2024-03-01");
        assert_eq!(format_date(Some("yesterday")), "-");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(preview_lines(Some("a\nb"), 2), (vec!["a", "b"], false));
        assert_eq!(preview_lines(Some("a\nb\nc"), 2), (vec!["a", "b"], true));
        assert_eq!(preview_lines(None, 2), (Vec::<&str>::new(), false));
    }

    #[test]
    fn grid_shows_five_lines_and_read_more() {
        let view = ready_view(ViewMode::Grid, vec![record("1\n2\n3\n4\n5\n6")]);
        let text = render(&view);
        assert!(text.contains("| 5\n"));
        assert!(!text.contains("| 6\n"));
        assert!(text.contains("Read more"));
        assert!(text.contains("Published: 2024-03-01 | Updated: -"));
        assert!(text.contains("(Previous) Page 1 of 3 [Next]"));
    }

    #[test]
    fn list_joins_two_lines() {
        let view = ready_view(ViewMode::List, vec![record("one\ntwo\nthree")]);
        let text = render(&view);
        assert!(text.contains("  one two..."));
        assert!(text.contains("Grid *List*"));
    }

    #[test]
    fn error_replaces_records() {
        let mut view = ready_view(ViewMode::Grid, vec![record("kept")]);
        view.error = Some("failed to fetch sources: network error".to_string());
        let text = render(&view);
        assert!(text.contains("failed to fetch sources: network error"));
        assert!(!text.contains("Advisory"));
    }

    #[test]
    fn empty_list_message() {
        let view = ready_view(ViewMode::List, Vec::new());
        assert!(render(&view).contains(EMPTY_TEXT));
    }
}
