use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::projection::{Dashboard, RepoCard};
use crate::tui::draw::{label_style, language_style, title_style};

use super::stat_line;

/// Render the profile header, the four headline cards, and the sidebar stats.
pub fn draw_overview(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(6), Constraint::Min(0)])
        .split(columns[0]);

    draw_header(f, left[0], dashboard);
    draw_headline_cards(f, left[1], dashboard);

    match &dashboard.most_active_repo {
        Some(card) => f.render_widget(
            Paragraph::new(repo_card_lines(card))
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Most used this month").borders(Borders::ALL)),
            left[2],
        ),
        None => f.render_widget(
            Paragraph::new(Span::styled("No activity this month", label_style()))
                .block(Block::default().title("Most used this month").borders(Borders::ALL)),
            left[2],
        ),
    }

    let s = &dashboard.sidebar;
    let sidebar = vec![
        stat_line("Public repositories", &s.public_repos),
        Line::from(Span::styled(s.actively_maintained.clone(), label_style())),
        Line::from(""),
        stat_line("Total stars", &s.total_stars),
        Line::from(""),
        stat_line("Followers", &s.followers),
        Line::from(Span::styled(s.following.clone(), label_style())),
        Line::from(""),
        stat_line("Public gists", &s.public_gists),
        Line::from(""),
        stat_line("First commit on GitHub", &s.first_commit),
        Line::from(Span::styled(s.coding_years.clone(), label_style())),
    ];
    f.render_widget(
        Paragraph::new(sidebar).block(Block::default().title("Profile").borders(Borders::ALL)),
        columns[1],
    );
}

fn draw_header(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let h = &dashboard.header;
    let mut lines = vec![Line::from(Span::styled(
        h.name.clone(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    if let Some(bio) = &h.bio {
        lines.push(Line::from(bio.clone()));
    }
    lines.push(Line::from(vec![
        Span::styled("GitHub ", label_style()),
        Span::styled(h.github_url.clone(), Style::default().fg(Color::Blue)),
    ]));
    if let Some(blog) = &h.blog {
        lines.push(Line::from(vec![
            Span::styled("Blog ", label_style()),
            Span::styled(blog.clone(), Style::default().fg(Color::Blue)),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(format!("@{}", h.username)).borders(Borders::ALL)),
        area,
    );
}

fn draw_headline_cards(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let hl = &dashboard.headline;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let best_label = hl.best_repo_slug.clone().unwrap_or_else(|| hl.best_repo_name.clone());
    let contents = [
        ("Contributions", hl.total_contributions.clone(), hl.year_over_year.clone(), Color::Green),
        ("Issues / PRs", hl.issues_and_prs.clone(), hl.closed.clone(), Color::Gray),
        ("Avg commits", hl.average_commits.clone(), String::new(), Color::Gray),
        ("Best repo", hl.best_repo_stars.clone(), best_label, Color::Gray),
    ];

    for (i, (title, value, sub, sub_color)) in contents.into_iter().enumerate() {
        let lines = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(sub, Style::default().fg(sub_color))),
        ];
        f.render_widget(
            Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL)),
            cards[i],
        );
    }
}

pub(crate) fn repo_card_lines(card: &RepoCard) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(card.slug.clone(), title_style())];
    if let Some(badge) = &card.badge {
        title.push(Span::styled(format!("  [{badge}]"), Style::default().fg(Color::Blue)));
    }
    vec![
        Line::from(title),
        Line::from(card.description.clone()),
        Line::from(vec![
            Span::styled("● ", language_style(card.language_color.as_deref())),
            Span::raw(card.language.clone()),
            Span::styled("  ·  ", label_style()),
            Span::raw(card.stars.clone()),
            Span::styled("  ·  ", label_style()),
            Span::raw(card.forks.clone()),
            Span::styled("  ·  ", label_style()),
            Span::styled(card.activity.clone(), label_style()),
        ]),
        Line::from(Span::styled(card.url.clone(), Style::default().fg(Color::Blue))),
    ]
}
