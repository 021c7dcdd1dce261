use crate::report::status_label;
use crate::ui::app::{App, AppState};
use humansize::{BINARY, format_size};
use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::fmt::Write as _;

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let version = env!("CARGO_PKG_VERSION");
    let disk_info = app
        .disks
        .list()
        .iter()
        .find(|d| d.mount_point() == std::path::Path::new("/"));

    let header_text = if let Some(disk) = disk_info {
        let total = disk.total_space();
        let available = disk.available_space();
        let used = total.saturating_sub(available);
        let percent = if total > 0 {
            #[allow(clippy::cast_precision_loss)]
            {
                (used as f64 / total as f64) * 100.0
            }
        } else {
            0.0
        };

        format!(
            "cachesweep v{version} | Disk: {} / {} ({percent:.1}% Used)",
            format_size(used, BINARY),
            format_size(total, BINARY)
        )
    } else {
        format!("cachesweep v{version} | Disk: N/A")
    };

    let title = Paragraph::new(header_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

pub fn render_categories_list(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|r| {
            let checkbox = if r.is_selected { "[x]" } else { "[ ]" };
            let size_str = format_size(r.total_size, BINARY);
            let content = format!(
                "{checkbox} {:<28} {:>10}  {}",
                r.name,
                size_str,
                status_label(r)
            );
            ListItem::new(content)
        })
        .collect();

    let total: u64 = app.results.iter().map(|r| r.total_size).sum();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Caches ({})", format_size(total, BINARY))),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

pub fn render_usage_chart(f: &mut Frame, app: &App, area: Rect) {
    let short_data: Vec<(&str, u64)> = app
        .results
        .iter()
        .filter(|r| r.total_size > 0)
        .map(|r| {
            let label = r.key.get(..8).unwrap_or(r.key.as_str());
            (label, r.total_size / 1024 / 1024)
        })
        .collect();

    let barchart = BarChart::default()
        .block(
            Block::default()
                .title("Storage Usage (MB)")
                .borders(Borders::ALL),
        )
        .data(&short_data)
        .bar_width(8)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::White).bg(Color::Cyan));

    f.render_widget(barchart, area);
}

pub fn render_details_text(f: &mut Frame, app: &App, area: Rect) {
    let selected = app
        .list_state
        .selected()
        .and_then(|i| app.results.get(i));

    let Some(result) = selected else {
        f.render_widget(
            Block::default().borders(Borders::ALL).title("Details"),
            area,
        );
        return;
    };

    let mut details_text = String::new();
    if let Some(command) = &result.command {
        let _ = writeln!(details_text, "Runs: {command}");
    }
    if let Some(warning) = &result.warning {
        let _ = writeln!(details_text, "Warning: {warning}");
    }
    if result.requires_sudo {
        let _ = writeln!(details_text, "Requires sudo");
    }
    if result.auto_discovered {
        let _ = writeln!(details_text, "Auto-discovered app");
    }

    let _ = writeln!(details_text, "\nPaths:");
    if result.paths.is_empty() {
        let _ = writeln!(details_text, " (none on disk)");
    }
    for path in &result.paths {
        let _ = writeln!(details_text, " - {}", path.display());
    }

    let details = Paragraph::new(details_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Details: {}", result.name)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(details, area);
}

pub fn render_details(f: &mut Frame, app: &App, area: Rect) {
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_usage_chart(f, app, right_chunks[0]);
    render_details_text(f, app, right_chunks[1]);
}

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let total_selected = app.total_selected_size();
    let footer_text = match app.state {
        AppState::Browsing => format!(
            "Selected: {} | [Space] Toggle [a] All [Enter] Clean [q] Quit",
            format_size(total_selected, BINARY)
        ),
        AppState::Confirming => format!(
            "CONFIRM CLEAN? Selected: {} | [y] Confirm [n/Esc] Cancel",
            format_size(total_selected, BINARY)
        ),
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

pub fn confirm_text(app: &App) -> String {
    let mut text = String::new();

    let warnings: Vec<_> = app.selected().filter(|r| r.warning.is_some()).collect();
    if !warnings.is_empty() {
        let _ = writeln!(text, "Warnings:");
        for r in warnings {
            let _ = writeln!(text, "  {}: {}", r.name, r.warning.as_deref().unwrap_or_default());
        }
        text.push('\n');
    }

    if app.selected().any(|r| r.requires_sudo) {
        let _ = writeln!(text, "Some operations require sudo privileges.\n");
    }

    let _ = write!(
        text,
        "Total size to be cleaned: {}\n\nAre you sure you want to proceed? [y/N]",
        format_size(app.total_selected_size(), BINARY)
    );
    text
}

pub fn render_popup(f: &mut Frame, app: &App) {
    if let AppState::Confirming = app.state {
        let block = Block::default().title("Confirm").borders(Borders::ALL);
        let area = centered_rect(60, 40, f.area());
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(confirm_text(app))
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
