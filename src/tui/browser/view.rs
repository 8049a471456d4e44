//! ブラウザ TUI の view（描画）

use super::app::{InputField, Model, Tab};
use crate::brand::{Brand, ScoreTier};
use crate::insights::Insights;
use crate::output::format_rating;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap};

/// 棒グラフの最大幅（文字数）
const BAR_WIDTH: usize = 24;

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Min(1),    // コンテンツ
            Constraint::Length(1), // ステータス
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let tab_titles: Vec<String> = Tab::all()
        .iter()
        .map(|t| match t {
            Tab::Favorites => format!("{} ({})", t.title(), model.collection.favorites().len()),
            _ => t.title().to_string(),
        })
        .collect();
    let tabs = Tabs::new(tab_titles)
        .select(model.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[0]);

    match model.tab {
        Tab::Catalog => view_catalog(f, model, chunks[1]),
        Tab::Favorites => view_favorites(f, model, chunks[1]),
        Tab::Insights => view_insights(f, model, chunks[1]),
    }

    let status = Paragraph::new(model.status.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Green));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(model)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn help_text(model: &Model) -> &'static str {
    if model.focus.is_some() {
        return " Type to filter | Esc: clear/back | Enter: done";
    }
    match model.tab {
        Tab::Catalog => {
            " /: search | m: material | c: category | s: sort | x: reset | f: favorite | Tab: switch | q: quit"
        }
        Tab::Favorites => " up/down: move | f: unfavorite | Tab: switch | q: quit",
        Tab::Insights => " Tab: switch | q: quit",
    }
}

fn score_color(score: u8) -> Color {
    match ScoreTier::from_score(score) {
        ScoreTier::High => Color::Green,
        ScoreTier::Medium => Color::Yellow,
        ScoreTier::Low => Color::Red,
    }
}

fn view_catalog(f: &mut Frame, model: &Model, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let query = &model.query;
    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let cursor = if focused { "_" } else { "" };
        vec![
            Span::raw(format!("{}: ", label)),
            Span::styled(format!("{}{}", value, cursor), style),
            Span::raw("  "),
        ]
    };
    let category = if query.category.is_empty() {
        "All"
    } else {
        query.category.as_str()
    };
    let mut spans = field("Search", &query.search, model.focus == Some(InputField::Search));
    spans.extend(field("Material", &query.material, model.focus == Some(InputField::Material)));
    spans.extend(field("Category", category, false));
    spans.extend(field("Sort", query.sort.as_str(), false));
    let filters = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Filters ").borders(Borders::ALL));
    f.render_widget(filters, chunks[0]);

    let title = format!(
        " Brands ({} of {}) ",
        model.visible_brands().len(),
        model.collection.brands().len()
    );
    view_brand_list(f, model, chunks[1], &title);
}

fn view_favorites(f: &mut Frame, model: &Model, area: Rect) {
    if model.collection.favorites().is_empty() {
        let empty = Paragraph::new("No favorites yet. Press f on a brand in the Catalog tab.")
            .block(Block::default().title(" Favorites ").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }
    let title = format!(" Favorites ({}) ", model.collection.favorites().len());
    view_brand_list(f, model, area, &title);
}

/// 左に一覧、右に選択中ブランドの詳細
fn view_brand_list(f: &mut Frame, model: &Model, area: Rect, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let brands = model.visible_brands();
    let favorites = model.collection.favorites();
    let items: Vec<ListItem> = brands
        .iter()
        .map(|b| {
            let heart = if favorites.contains(&b.id) { "♥ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(heart, Style::default().fg(Color::Red)),
                Span::raw(format!("{:<24}", b.name)),
                Span::styled(
                    format!("{:>4}", b.sustainability_score),
                    Style::default().fg(score_color(b.sustainability_score)),
                ),
                Span::raw(format!("  ★ {}", format_rating(b.rating))),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");
    let mut state = model.state.clone();
    f.render_stateful_widget(list, chunks[0], &mut state);

    let detail = match model.selected_brand() {
        Some(brand) => Paragraph::new(detail_lines(brand)),
        None => Paragraph::new("No brands found"),
    };
    f.render_widget(
        detail
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Details ").borders(Borders::ALL)),
        chunks[1],
    );
}

fn detail_lines(brand: &Brand) -> Vec<Line<'_>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };
    let mut lines = vec![
        Line::styled(brand.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        row("Country", brand.country.clone()),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Score"), Style::default().fg(Color::DarkGray)),
            Span::styled(
                brand.sustainability_score.to_string(),
                Style::default().fg(score_color(brand.sustainability_score)),
            ),
        ]),
        row("Category", brand.category.clone()),
        row("Price", brand.price_range.clone()),
        row("Material", brand.material.clone()),
        row("Rating", format!("★ {}", format_rating(brand.rating))),
        row("Ethics", brand.ethical_practices.clone()),
        row("Owner", brand.owner().to_string()),
    ];
    if let Some(description) = &brand.description {
        lines.push(Line::raw(""));
        lines.push(Line::raw(description.clone()));
    }
    lines
}

fn view_insights(f: &mut Frame, model: &Model, area: Rect) {
    let insights = Insights::compute(model.collection.brands());
    if insights.total == 0 {
        let empty = Paragraph::new("No brands yet")
            .block(Block::default().title(" Insights ").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let category_lines: Vec<Line> = insights
        .categories
        .iter()
        .map(|c| {
            let percent = c.percent(insights.total);
            bar_line(&c.category, percent, 100, format!("{} ({}%)", c.count, percent), Color::Cyan)
        })
        .collect();
    render_panel(f, " Brands by Category ", category_lines, top[0]);

    let country_lines: Vec<Line> = insights
        .countries
        .iter()
        .map(|c| {
            bar_line(&c.country, c.average_score, 100, c.average_score.to_string(), Color::Green)
        })
        .collect();
    render_panel(f, " Average Score by Country ", country_lines, top[1]);

    let trend_lines: Vec<Line> = insights
        .trend
        .iter()
        .map(|p| {
            let score = u32::from(p.score);
            bar_line(&p.label, score, 100, score.to_string(), score_color(p.score))
        })
        .collect();
    render_panel(f, " Recent Sustainability Scores ", trend_lines, bottom[0]);

    let top_lines: Vec<Line> = insights
        .top_brands
        .iter()
        .enumerate()
        .map(|(rank, b)| {
            Line::from(vec![
                Span::raw(format!("{}. {:<20}", rank + 1, b.name)),
                Span::styled(
                    format!("{:>4}", b.sustainability_score),
                    Style::default().fg(score_color(b.sustainability_score)),
                ),
                Span::styled(format!("  {}", b.country), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    render_panel(f, " Top Sustainable Brands ", top_lines, bottom[1]);
}

fn render_panel(f: &mut Frame, title: &str, lines: Vec<Line<'_>>, area: Rect) {
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL),
    );
    f.render_widget(panel, area);
}

/// ラベル・横棒・値の1行
fn bar_line(label: &str, value: u32, max: u32, text: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<14}", truncate(label, 13))),
        Span::styled(bar(value, max), Style::default().fg(color)),
        Span::raw(format!(" {}", text)),
    ])
}

fn bar(value: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (value.min(max) as usize * BAR_WIDTH) / max as usize;
    "█".repeat(filled)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
