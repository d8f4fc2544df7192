use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use pl_dashboard::api::ApiClient;
use pl_dashboard::config::ApiConfig;
use pl_dashboard::form::{FormBadge, form_string};
use pl_dashboard::grouping::date_heading;
use pl_dashboard::model::{Match, Player};
use pl_dashboard::outcome::{Outcome, classify_match};
use pl_dashboard::provider::spawn_provider;
use pl_dashboard::sorting::SortDirection;
use pl_dashboard::state::{
    DashboardState, Delta, ProviderCommand, Screen, apply_delta, week_source_label,
};
use pl_dashboard::week::WeekSource;

struct App {
    state: DashboardState,
    should_quit: bool,
    cmd_tx: mpsc::Sender<ProviderCommand>,
}

impl App {
    fn new(cmd_tx: mpsc::Sender<ProviderCommand>) -> Self {
        Self {
            state: DashboardState::new(),
            should_quit: false,
            cmd_tx,
        }
    }

    fn dispatch(&mut self, cmd: ProviderCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            self.state.push_log("[WARN] Provider unavailable");
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.search_active {
            self.on_search_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Char('1') => self.show_matches(),
            KeyCode::Char('2') => {
                let cmd = self.state.open_standings();
                self.dispatch(cmd);
            }
            KeyCode::Char('3') => {
                let cmd = self.state.open_players();
                self.dispatch(cmd);
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('h') | KeyCode::Left if self.state.screen == Screen::Matches => {
                if let Some(cmd) = self.state.go_to_previous_week() {
                    self.dispatch(cmd);
                }
            }
            KeyCode::Char('l') | KeyCode::Right if self.state.screen == Screen::Matches => {
                if let Some(cmd) = self.state.go_to_next_week() {
                    self.dispatch(cmd);
                }
            }
            KeyCode::Enter | KeyCode::Char('d') => self.open_selected(),
            KeyCode::Char('p') => {
                if let Some(cmd) = self.state.request_prediction() {
                    self.dispatch(cmd);
                } else {
                    self.state.push_log("[INFO] Match not loaded yet");
                }
            }
            KeyCode::Char('b') | KeyCode::Esc => self.back(),
            KeyCode::Char('s') if self.state.screen == Screen::Players => {
                self.state.cycle_sort_field()
            }
            KeyCode::Char('r') if self.state.screen == Screen::Players => {
                self.state.toggle_sort_direction()
            }
            KeyCode::Char('t') if self.state.screen == Screen::Players => {
                self.state.cycle_team_filter()
            }
            KeyCode::Char('o') if self.state.screen == Screen::Players => {
                self.state.cycle_position_filter()
            }
            KeyCode::Char('/') if self.state.screen == Screen::Players => {
                self.state.search_active = true;
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.search_active = false,
            KeyCode::Backspace => {
                self.state.player_query.search.pop();
                self.state.selected = 0;
            }
            KeyCode::Char(c) => {
                self.state.player_query.search.push(c);
                self.state.selected = 0;
            }
            _ => {}
        }
    }

    fn show_matches(&mut self) {
        match self.state.current_week {
            Some(week) => {
                self.state.screen = Screen::Matches;
                let source = self.state.week_source.unwrap_or(WeekSource::Location);
                let cmd = self.state.go_to_week(week, source);
                self.dispatch(cmd);
            }
            None => {
                let cmd = self.state.open_matches(None);
                self.dispatch(cmd);
            }
        }
    }

    fn open_selected(&mut self) {
        let cmd = match self.state.screen.clone() {
            Screen::Matches => self
                .state
                .selected_match_id()
                .map(|id| self.state.open_match(id)),
            Screen::Standings => self
                .state
                .selected_team()
                .map(|t| t.name.clone())
                .map(|name| self.state.open_team(&name)),
            Screen::TeamDetail { .. } => self
                .state
                .team_detail
                .as_ref()
                .and_then(|d| d.matches.get(self.state.selected))
                .map(|m| m.match_id)
                .map(|id| self.state.open_match(id)),
            Screen::Players | Screen::MatchDetail { .. } => None,
        };
        if let Some(cmd) = cmd {
            self.dispatch(cmd);
        }
    }

    fn back(&mut self) {
        if self.state.help_overlay {
            self.state.help_overlay = false;
            return;
        }
        match self.state.screen {
            Screen::MatchDetail { .. } => {
                self.state.screen = Screen::Matches;
                self.state.clamp_selection();
            }
            Screen::TeamDetail { .. } => {
                self.state.screen = Screen::Standings;
                self.state.clamp_selection();
            }
            _ => {}
        }
    }
}

fn week_arg() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--week" {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix("--week=") {
            return Some(value.to_string());
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = ApiConfig::from_env();
    let api = ApiClient::new(&config).context("failed to set up stats client")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_provider(api, tx, cmd_rx);

    let mut app = App::new(cmd_tx);
    let first = app.state.open_matches(week_arg().as_deref());
    app.dispatch(first);
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match &app.state.screen {
        Screen::Matches => render_matches(frame, chunks[1], &app.state),
        Screen::Standings => render_standings(frame, chunks[1], &app.state),
        Screen::Players => render_players(frame, chunks[1], &app.state),
        Screen::TeamDetail { .. } => render_team(frame, chunks[1], &app.state),
        Screen::MatchDetail { .. } => render_match_detail(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &DashboardState) -> String {
    let title = match &state.screen {
        Screen::Matches => match (state.current_week, state.week_source) {
            (Some(week), Some(source)) => {
                format!("MATCHWEEK {week} ({})", week_source_label(source))
            }
            _ => "MATCHES".to_string(),
        },
        Screen::Standings => "LEAGUE TABLE".to_string(),
        Screen::Players => format!(
            "PLAYER STATS | Sort: {} {}",
            state.player_query.sort.field.label(),
            direction_arrow(state.player_query.sort.direction)
        ),
        Screen::TeamDetail { team } => team.to_uppercase(),
        Screen::MatchDetail { match_id } => format!("MATCH #{match_id}"),
    };
    format!("  PL DASHBOARD | {title}\n  {}", state.location())
}

fn footer_text(state: &DashboardState) -> String {
    let screen = match &state.screen {
        Screen::Matches => "h/l Week | Enter Match",
        Screen::Standings => "Enter Team",
        Screen::Players => "s Sort | r Reverse | t Team | o Position | / Search",
        Screen::TeamDetail { .. } => "Enter Match | b Back",
        Screen::MatchDetail { .. } => "p Predict | b Back",
    };
    format!("1 Matches | 2 Table | 3 Players | j/k Move | {screen} | ? Help | q Quit")
}

fn direction_arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "↑",
        SortDirection::Desc => "↓",
    }
}

fn status_line<'a>(loading: bool, error: Option<&str>, empty: &'a str) -> Option<Line<'a>> {
    if loading {
        return Some(Line::styled("Loading...", Style::default().fg(Color::DarkGray)));
    }
    if let Some(message) = error {
        return Some(Line::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red),
        ));
    }
    if empty.is_empty() {
        None
    } else {
        Some(Line::styled(empty, Style::default().fg(Color::DarkGray)))
    }
}

fn outcome_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::Win => Style::default().fg(Color::Green),
        Outcome::Draw => Style::default().fg(Color::Yellow),
        Outcome::Loss => Style::default().fg(Color::Red),
        Outcome::Unknown => Style::default().fg(Color::DarkGray),
    }
}

fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

fn match_row(m: &Match) -> String {
    let kickoff = m.kickoff.as_deref().unwrap_or("--:--");
    let score = if m.is_played() {
        format!("{}-{}", m.goals_for, m.goals_against)
    } else {
        "vs".to_string()
    };
    format!(
        "{kickoff:>13}  {:<24} {score:^5} {:<24} {}",
        m.team_name, m.opponent, m.venue
    )
}

fn render_matches(frame: &mut Frame, area: Rect, state: &DashboardState) {
    if state.week_matches.is_empty() {
        let line = status_line(
            state.week_loading,
            state.week_error.as_deref(),
            "No matches for this week",
        );
        frame.render_widget(Paragraph::new(line.unwrap_or_default()), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut idx = 0usize;
    for (key, day) in state.grouped_week() {
        lines.push(Line::styled(
            key.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for m in day {
            let selected = idx == state.selected;
            if selected {
                selected_line = lines.len();
            }
            let outcome = classify_match(m);
            let mut spans = vec![Span::styled(match_row(m), selected_style(selected))];
            if outcome.is_known() {
                spans.push(Span::styled(format!("  {}", outcome.label()), outcome_style(outcome)));
            }
            lines.push(Line::from(spans));
            idx += 1;
        }
        lines.push(Line::default());
    }

    let (start, _) = visible_range(selected_line, lines.len(), area.height as usize);
    let list = Paragraph::new(lines).scroll((start as u16, 0));
    frame.render_widget(list, area);
}

fn form_spans(badges: &[FormBadge]) -> Vec<Span<'static>> {
    badges
        .iter()
        .map(|badge| {
            let style = badge
                .outcome()
                .map(outcome_style)
                .unwrap_or_else(|| Style::default().fg(Color::DarkGray));
            Span::styled(format!("{} ", badge.label()), style)
        })
        .collect()
}

fn render_standings(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(standings) = &state.standings else {
        let line = status_line(state.standings_loading, state.standings_error.as_deref(), "");
        frame.render_widget(Paragraph::new(line.unwrap_or_default()), area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let mut lines = vec![Line::styled(
        format!(
            "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  Form",
            "#", "Team", "MP", "W", "D", "L", "GF", "GA", "GD", "Pts"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    let visible = columns[0].height.saturating_sub(1) as usize;
    let (start, end) = visible_range(state.selected, standings.teams.len(), visible);
    for idx in start..end {
        let t = &standings.teams[idx];
        let row = format!(
            "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}  ",
            t.rank,
            t.name,
            t.matches_played,
            t.wins,
            t.draws,
            t.losses,
            t.goals_for,
            t.goals_against,
            t.goal_difference,
            t.points
        );
        let mut spans = vec![Span::styled(row, selected_style(idx == state.selected))];
        spans.extend(form_spans(&standings.form_for(&t.name)));
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), columns[0]);

    let leaders = format!(
        "Top scorers\n{}\n\nTop assists\n{}",
        leader_text(&standings.top_scorers, |p| p.goals),
        leader_text(&standings.top_assisters, |p| p.assists)
    );
    let side = Paragraph::new(leaders).block(Block::default().borders(Borders::LEFT));
    frame.render_widget(side, columns[1]);
}

fn leader_text(players: &[Player], stat: impl Fn(&Player) -> u32) -> String {
    if players.is_empty() {
        return "  none".to_string();
    }
    players
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>2}. {:<22} {:>3}", i + 1, p.name, stat(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_players(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let query = &state.player_query;
    let search = if state.search_active {
        format!("/{}_", query.search)
    } else if query.search.is_empty() {
        "-".to_string()
    } else {
        query.search.clone()
    };
    let filters = format!(
        "Search: {search} | Team: {} | Position: {}",
        query.team.as_deref().unwrap_or("All"),
        query.position.as_deref().unwrap_or("All")
    );

    let rows = state.player_rows();
    let mut lines = vec![
        Line::raw(filters),
        Line::styled(
            format!(
                "{:<26} {:<22} {:<6} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5}",
                "Player", "Team", "Pos", "MP", "G", "A", "G+A", "G/90", "A/90"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if rows.is_empty() {
        if let Some(line) = status_line(
            state.players_loading,
            state.players_error.as_deref(),
            "No players match these filters",
        ) {
            lines.push(line);
        }
    } else {
        let visible = area.height.saturating_sub(2) as usize;
        let (start, end) = visible_range(state.selected, rows.len(), visible);
        for (idx, p) in rows.iter().enumerate().take(end).skip(start) {
            let row = format!(
                "{:<26} {:<22} {:<6} {:>3} {:>3} {:>3} {:>5.0} {:>5.2} {:>5.2}",
                p.name,
                p.team_name,
                p.position,
                p.matches_played,
                p.goals,
                p.assists,
                p.goals_and_assists,
                p.goals_per90,
                p.assists_per90
            );
            lines.push(Line::styled(row, selected_style(idx == state.selected)));
        }
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_team(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(detail) = &state.team_detail else {
        let line = status_line(state.team_loading, state.team_error.as_deref(), "");
        frame.render_widget(Paragraph::new(line.unwrap_or_default()), area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);
    let t = &detail.team;
    let mut summary = vec![
        Line::raw(format!(
            "#{} | {} pts | {}W {}D {}L | GF {} GA {} | xG {:.1} xGA {:.1}",
            t.rank, t.points, t.wins, t.draws, t.losses, t.goals_for, t.goals_against,
            t.expected_goals, t.expected_goals_allowed
        )),
        Line::raw(format!(
            "Top scorer: {} | Keeper: {} | Form: {}",
            t.top_scorer,
            t.goalkeeper,
            form_string(&detail.form)
        )),
    ];
    let mut form_line = vec![Span::raw("Last 5: ")];
    form_line.extend(form_spans(&detail.form));
    summary.push(Line::from(form_line));
    frame.render_widget(Paragraph::new(summary), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let mut lines = Vec::new();
    let visible = columns[0].height as usize;
    let (start, end) = visible_range(state.selected, detail.matches.len(), visible);
    for (idx, m) in detail.matches.iter().enumerate().take(end).skip(start) {
        let date = m.date.map(|d| d.format("%d %b").to_string()).unwrap_or_default();
        let outcome = classify_match(m);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{date:<7} {:<24} {:<5} ", m.opponent, m.venue),
                selected_style(idx == state.selected),
            ),
            Span::styled(
                format!("{}-{} {}", m.goals_for, m.goals_against, outcome.label()),
                outcome_style(outcome),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), columns[0]);

    let leaders = format!(
        "Squad: {} players\n\nTop scorers\n{}\n\nTop assists\n{}",
        detail.players.len(),
        leader_text(&detail.top_scorers, |p| p.goals),
        leader_text(&detail.top_assisters, |p| p.assists)
    );
    let side = Paragraph::new(leaders).block(Block::default().borders(Borders::LEFT));
    frame.render_widget(side, columns[1]);
}

fn render_match_detail(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(m) = &state.match_detail else {
        let line = status_line(state.match_loading, state.match_error.as_deref(), "");
        frame.render_widget(Paragraph::new(line.unwrap_or_default()), area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let heading = m.date.map(date_heading).unwrap_or_else(|| "Date TBC".to_string());
    let score = if m.is_played() {
        format!("{} - {}", m.goals_for, m.goals_against)
    } else {
        "vs".to_string()
    };
    let text = [
        format!("{} {} {}", m.team_name, score, m.opponent),
        format!("{heading} {}", m.kickoff.as_deref().unwrap_or("")),
        format!("{} | {} | {}", m.round, m.venue, m.day),
        String::new(),
        format!("Result: {}", classify_match(m).label()),
        format!("xG {:.1} - {:.1} xGA | Possession {:.0}%", m.xg, m.xga, m.possession),
        format!("Formation {} vs {}", m.formation, m.opp_formation),
        format!("Captain: {}", m.captain),
        format!("Referee: {}", m.referee),
        format!("Attendance: {}", m.attendance),
    ]
    .join("\n");
    let info = Paragraph::new(text).block(Block::default().title("Match").borders(Borders::ALL));
    frame.render_widget(info, columns[0]);

    let prediction = Paragraph::new(prediction_text(state))
        .block(Block::default().title("Prediction").borders(Borders::ALL));
    frame.render_widget(prediction, columns[1]);
}

fn prediction_text(state: &DashboardState) -> String {
    if state.prediction_loading {
        return "Predicting...".to_string();
    }
    if let Some(message) = &state.prediction_error {
        return format!("Prediction failed: {message}");
    }
    match &state.prediction {
        Some(p) => format!(
            "{} vs {}\nH: {:>5.1}%\nD: {:>5.1}%\nA: {:>5.1}%\nScore: {}\nPick: {}\nConfidence: {:.0}%\nModel accuracy {:.2} precision {:.2}",
            p.home_team,
            p.away_team,
            p.home_win_prob * 100.0,
            p.draw_prob * 100.0,
            p.away_win_prob * 100.0,
            p.predicted_score,
            p.prediction,
            p.confidence * 100.0,
            p.accuracy,
            p.precision
        ),
        None => "Press p to predict".to_string(),
    }
}

fn console_text(state: &DashboardState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "PL Dashboard - Help",
        "",
        "Global:",
        "  1 / 2 / 3    Matches / Table / Players",
        "  Enter / d    Open selected",
        "  b / Esc      Back",
        "  j/k or ↑/↓   Move",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Matches:",
        "  h/l or ←/→   Previous / next week",
        "",
        "Match:",
        "  p            Predict",
        "",
        "Players:",
        "  s            Cycle sort column",
        "  r            Reverse sort",
        "  t / o        Cycle team / position filter",
        "  /            Search by name or team",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
