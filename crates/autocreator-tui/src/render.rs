// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use autocreator_app::{
    AppMode, AppState, FormField, Language, PRODUCT_NAME, ProjectCard, StatTile, StatusColor,
    UiText,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph};

use crate::{FormUiState, ViewData};

const CARD_HEIGHT: u16 = 5;
const PLAIN_BAR_WIDTH: usize = 20;

pub(crate) fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let stats_height = if state.show_stats { 4 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(stats_height),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(state.language)).block(
        Block::default()
            .title(PRODUCT_NAME)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White)),
    );
    frame.render_widget(header, layout[0]);

    if state.show_stats {
        render_stats(frame, layout[1], &view_data.stats, state.language);
    }

    render_projects(frame, layout[2], state, view_data);

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[3]);

    if let Some(form) = &view_data.form {
        let area = centered_rect(64, 60, frame.area());
        frame.render_widget(Clear, area);
        let overlay = Paragraph::new(render_form_text(form)).block(
            Block::default()
                .title(UiText::FormTitle.get(form.overlay.language()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(overlay, area);
    }
}

fn header_text(language: Language) -> String {
    [
        UiText::DashboardTitle.get(language).to_owned(),
        format!(
            "{}  |  n: {}",
            UiText::DashboardSubtitle.get(language),
            UiText::NewProject.get(language)
        ),
    ]
    .join("\n")
}

fn render_stats(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    stats: &[StatTile],
    language: Language,
) {
    if stats.is_empty() {
        return;
    }
    let share = 100 / stats.len() as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(stats.iter().map(|_| Constraint::Percentage(share)))
        .split(area);

    for (tile, column) in stats.iter().zip(columns.iter()) {
        let body = vec![
            Line::from(Span::styled(
                tile.value.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tile.kind.label(language),
                Style::default().fg(Color::Gray),
            )),
        ];
        let widget = Paragraph::new(body).block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, *column);
    }
}

fn render_projects(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let language = state.language;
    let block = Block::default()
        .title(UiText::RecentProjects.get(language))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = view_data
        .projects
        .iter()
        .map(|project| ProjectCard::from_project(project, language))
        .collect::<Vec<_>>();

    // One extra slot for the "add project" card.
    let slots = usize::from((inner.height / CARD_HEIGHT).max(1));
    let first = first_visible_card(state.selected_project, slots, cards.len() + 1);

    let mut y = inner.y;
    for index in first..cards.len() + 1 {
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        let slot = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        match cards.get(index) {
            Some(card) => {
                let selected = index == state.selected_project && state.mode == AppMode::Dashboard;
                render_card(frame, slot, card, selected, language);
            }
            None => render_add_card(frame, slot, language),
        }
        y += CARD_HEIGHT;
    }

    if cards.is_empty() && inner.height > CARD_HEIGHT {
        let hint = Paragraph::new(UiText::NoProjects.get(language))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, Rect::new(inner.x, y, inner.width, 1));
    }
}

fn first_visible_card(selected: usize, slots: usize, total: usize) -> usize {
    if total <= slots {
        return 0;
    }
    selected
        .saturating_add(1)
        .saturating_sub(slots)
        .min(total - slots)
}

fn render_card(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    card: &ProjectCard,
    selected: bool,
    language: Language,
) {
    let badge_color = terminal_color(card.badge.color);
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(vec![
            Span::styled(
                card.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", card.badge.label),
                Style::default().fg(Color::Black).bg(badge_color),
            ),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(card.topic.as_str()).style(Style::default().fg(Color::Gray)),
        rows[0],
    );

    if let Some(progress) = card.progress {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(terminal_color(progress.color())))
            .ratio(progress.ratio())
            .label(format!(
                "{} {}%",
                UiText::Progress.get(language),
                progress.percent()
            ));
        frame.render_widget(gauge, rows[1]);
    }

    frame.render_widget(Paragraph::new(card_footer(card, language)), rows[2]);
}

fn render_add_card(frame: &mut ratatui::Frame<'_>, area: Rect, language: Language) {
    let widget = Paragraph::new(format!("+ {} (n)", UiText::AddProjectCard.get(language)))
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(widget, area);
}

fn card_footer(card: &ProjectCard, language: Language) -> String {
    match &card.video_url {
        Some(url) => format!(
            "{}  ·  {}: {url}",
            card.created_at,
            UiText::WatchVideo.get(language)
        ),
        None => card.created_at.clone(),
    }
}

/// Plain-text rendering of a project card, used outside the terminal UI.
pub fn render_project_card_text(card: &ProjectCard, language: Language) -> String {
    let mut lines = vec![
        format!(
            "{} [{} · {}]",
            card.title,
            card.badge.label,
            card.badge.color.token()
        ),
        format!("  {}", card.topic),
    ];
    if let Some(progress) = card.progress {
        lines.push(format!(
            "  {} {} {}%",
            UiText::Progress.get(language),
            progress_bar_text(progress.ratio(), PLAIN_BAR_WIDTH),
            progress.percent()
        ));
    }
    lines.push(format!("  {}", card_footer(card, language)));
    lines.join("\n")
}

pub fn progress_bar_text(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_form_text(form: &FormUiState) -> String {
    let language = form.overlay.language();
    let fields = form.overlay.form();
    let marker = |field: FormField| if form.field == field { "▸" } else { " " };

    let topic = if fields.topic().is_empty() {
        UiText::TopicPlaceholder.get(language).to_owned()
    } else {
        format!("{}▏", fields.topic())
    };
    let actions = if fields.is_submitting() {
        format!("⟳ {}", UiText::Creating.get(language))
    } else if fields.can_submit() {
        format!(
            "[esc] {}   [enter] {}",
            UiText::Cancel.get(language),
            UiText::Create.get(language)
        )
    } else {
        format!(
            "[esc] {}   ({})",
            UiText::Cancel.get(language),
            UiText::Create.get(language)
        )
    };

    [
        format!("{} {}", marker(FormField::Topic), UiText::TopicLabel.get(language)),
        format!("    {topic}"),
        String::new(),
        format!(
            "{} {}: ‹ {} ›",
            marker(FormField::Duration),
            UiText::DurationLabel.get(language),
            fields.duration().label(language)
        ),
        format!(
            "{} {}: ‹ {} ›",
            marker(FormField::Style),
            UiText::StyleLabel.get(language),
            fields.style().label(language)
        ),
        String::new(),
        actions,
    ]
    .join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    let (mode, keys) = match state.mode {
        AppMode::Dashboard => (
            "DASH",
            "j/k move | enter details | n new | s stats | r reload | q quit",
        ),
        AppMode::CreateForm => (
            "FORM",
            "tab field | ←/→ change | enter create | esc cancel | ctrl+q quit",
        ),
    };
    let count = format!("{} projects", view_data.projects.len());
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {count} | {keys}"),
        None => format!("{mode} | {count} | {keys}"),
    }
}

const fn terminal_color(color: StatusColor) -> Color {
    match color {
        StatusColor::Gray => Color::Gray,
        StatusColor::Yellow => Color::Yellow,
        StatusColor::Blue => Color::Blue,
        StatusColor::Purple => Color::Magenta,
        StatusColor::Green => Color::Green,
        StatusColor::Red => Color::Red,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
