// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Title, footer, help, and per-tab body helpers used by TUI rendering.
fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn species_label(catalog: &Catalog, chain: &Chain, id: SpeciesId) -> String {
    chain
        .node(id)
        .and_then(|node| node.name().map(str::to_owned))
        .or_else(|| catalog.entry(id).map(|entry| entry.name().to_owned()))
        .unwrap_or_else(|| id.to_string())
}

fn breadcrumb_title(catalog: &Catalog, stack: &NavigationStack) -> String {
    let labels = stack
        .breadcrumb()
        .into_iter()
        .map(|id| {
            catalog.entry(id).map(|entry| entry.name().to_owned()).unwrap_or_else(|| id.to_string())
        })
        .collect::<Vec<_>>();
    view_title(&labels.join(" › "), Some(&format!("[{}]", stack.depth())))
}

fn evolution_lines(view: &ViewState, catalog: &Catalog, theme: &Theme) -> Vec<Line<'static>> {
    let chain = view.chain();
    let cursor = view.cursor();

    if cursor.selectable_count() == 0 {
        let label = species_label(catalog, chain, view.target());
        let placeholder = format!("{label} does not evolve.");
        return vec![Line::from(Span::styled(placeholder, theme.muted_style()))];
    }

    let mut lines = Vec::with_capacity(cursor.selectable_count());
    for (idx, &id) in cursor.selectable().iter().enumerate() {
        let depth = chain.depth(id).unwrap_or(0);
        let mut spans = Vec::<Span<'static>>::new();
        if depth > 0 {
            spans.push(Span::raw(format!("{}└─ ", "   ".repeat(depth - 1))));
        }

        let label = format!("{} {}", id, species_label(catalog, chain, id));
        let style = if cursor.index() == Some(idx) {
            theme.focus_style()
        } else if id == view.target() {
            theme.target_style()
        } else {
            theme.base_style()
        };
        spans.push(Span::styled(label, style));

        if let Some(trigger) = chain.trigger_into(id) {
            spans.push(Span::styled(format!("  ({trigger})"), theme.trigger_style()));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn overview_lines(view: &ViewState, catalog: &Catalog, theme: &Theme) -> Vec<Line<'static>> {
    let chain = view.chain();
    let target = view.target();
    let mut lines = vec![Line::from(Span::styled(
        format!("{} {}", target, species_label(catalog, chain, target)),
        theme.header_style(),
    ))];

    if let Some(summary) = catalog.entry(target).and_then(|entry| entry.summary()) {
        lines.push(Line::from(summary.to_owned()));
    }
    lines.push(Line::default());

    let stage = chain.depth(target).map(|depth| depth + 1).unwrap_or(1);
    lines.push(Line::from(vec![
        Span::styled("Stage      ".to_owned(), theme.muted_style()),
        Span::raw(stage.to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Family     ".to_owned(), theme.muted_style()),
        Span::raw(format!(
            "{} ({}, {} members)",
            species_label(catalog, chain, chain.root_id()),
            chain.layout().as_str(),
            chain.len()
        )),
    ]));
    if let Some(parent) = chain.parent(target) {
        lines.push(Line::from(vec![
            Span::styled("Evolves from ".to_owned(), theme.muted_style()),
            Span::raw(species_label(catalog, chain, parent)),
        ]));
    }
    let children = chain.children(target);
    if !children.is_empty() {
        let names = children
            .iter()
            .map(|&id| species_label(catalog, chain, id))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(vec![
            Span::styled("Evolves to ".to_owned(), theme.muted_style()),
            Span::raw(names),
        ]));
    }
    lines
}

fn requirement_lines(view: &ViewState, catalog: &Catalog, theme: &Theme) -> Vec<Line<'static>> {
    let chain = view.chain();
    if chain.edges().is_empty() {
        let placeholder = "No evolution requirements.".to_owned();
        return vec![Line::from(Span::styled(placeholder, theme.muted_style()))];
    }

    chain
        .edges()
        .iter()
        .map(|edge| {
            let style = if edge.to_id() == view.target() || edge.from_id() == view.target() {
                theme.target_style()
            } else {
                theme.base_style()
            };
            Line::from(vec![
                Span::styled(
                    format!(
                        "{} → {}",
                        species_label(catalog, chain, edge.from_id()),
                        species_label(catalog, chain, edge.to_id())
                    ),
                    style,
                ),
                Span::styled(format!("  {}", edge.trigger()), theme.trigger_style()),
            ])
        })
        .collect()
}

fn detail_lines(view: &ViewState, catalog: &Catalog, theme: &Theme) -> Vec<Line<'static>> {
    match view.tab() {
        ViewTab::Overview => overview_lines(view, catalog, theme),
        ViewTab::Evolution => evolution_lines(view, catalog, theme),
        ViewTab::Requirements => requirement_lines(view, catalog, theme),
    }
}

fn footer_line(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();
    match app.screen() {
        Screen::Browse => {
            push_footer_entry(&mut spans, theme, "MOVE", "↑↓");
            push_footer_entry(&mut spans, theme, "OPEN", "⏎");
        }
        Screen::Detail => {
            push_footer_entry(&mut spans, theme, "FOCUS", "←→");
            push_footer_entry(&mut spans, theme, "OPEN", "⏎");
            push_footer_entry(&mut spans, theme, "BACK", "esc");
            push_footer_entry(&mut spans, theme, "TAB", "⇥");
        }
    }
    push_footer_entry(&mut spans, theme, "HELP", "?");
    push_footer_entry(&mut spans, theme, "QUIT", "q");

    if let Some(toast) = app.toast.as_ref().filter(|toast| toast.expires_at > Instant::now()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(toast.message.clone(), theme.toast_style()));
    }
    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &Theme, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), theme.footer_label_style()));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        theme.footer_label_style(),
    ));
    spans.push(Span::styled(value.to_owned(), theme.footer_key_style()));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>12}"), theme.footer_key_style()),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn render_help(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let area = centered_rect(70, 70, area);
    let lines = vec![
        Line::from(Span::styled("Browse".to_owned(), theme.header_style())),
        help_kv("↑ k / ↓ j", "select species", theme),
        help_kv("home / end", "first / last species", theme),
        help_kv("enter", "open evolution view", theme),
        Line::default(),
        Line::from(Span::styled("Evolution view".to_owned(), theme.header_style())),
        help_kv("← h ↑ k", "focus previous relative", theme),
        help_kv("→ l ↓ j", "focus next relative", theme),
        help_kv("enter space", "open focused relative", theme),
        help_kv("esc bksp", "back to previous view", theme),
        help_kv("tab / ⇧tab", "next / previous tab", theme),
        help_kv("pgup / pgdn", "scroll", theme),
        Line::default(),
        help_kv("?", "toggle help", theme),
        help_kv("q", "quit", theme),
    ];

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Help", None))
                .border_style(theme.panel_border_style(true)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}
