use crate::api::MarketApi;
use crate::app::{App, Message};
use crate::config::Config;
use crate::store::Storage;
use crate::ui::notifier::{DesktopNotifier, ToastLevel};
use crate::ui::screen::Screen;
use crate::ui::theme::Palette;
use crate::ui::view::{PriceView, Trend, EMPTY_SELECTION_MESSAGE};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::error::Error;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

type DynError = Box<dyn Error + Send + Sync>;

const PAGE_STEP: usize = 10;
const NO_PRICE_DATA_MESSAGE: &str = "No price data for the watched assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Upper,
    Lower,
}

#[derive(Debug, Clone, PartialEq)]
struct AlertForm {
    id: String,
    title: String,
    upper: String,
    lower: String,
    field: FormField,
}

impl AlertForm {
    fn active_input(&mut self) -> &mut String {
        match self.field {
            FormField::Upper => &mut self.upper,
            FormField::Lower => &mut self.lower,
        }
    }

    fn switch_field(&mut self) {
        self.field = match self.field {
            FormField::Upper => FormField::Lower,
            FormField::Lower => FormField::Upper,
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
enum InputMode {
    Normal,
    Search,
    AlertForm(AlertForm),
}

pub struct Dashboard<A, S> {
    app: App<A, S, Screen>,
    receiver: UnboundedReceiver<Message>,
    poll_interval: Duration,
    selected: usize,
    mode: InputMode,
    running: bool,
}

impl<A: MarketApi, S: Storage> Dashboard<A, S> {
    pub fn new(api: A, storage: S, config: &Config) -> Self {
        let (tx, receiver) = unbounded_channel();
        let screen = Screen::new(
            config.toast_duration,
            DesktopNotifier::request_permission(config.desktop_notifications),
        );
        let app = App::new(api, storage, screen, tx, config.export_dir.clone());

        Self {
            app,
            receiver,
            poll_interval: config.poll_interval,
            selected: 0,
            mode: InputMode::Normal,
            running: true,
        }
    }

    pub async fn run(&mut self) -> Result<(), DynError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), DynError> {
        self.app.start();
        let mut last_poll = Instant::now();

        while self.running {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_input(key);
                    }
                }
            }

            while let Ok(message) = self.receiver.try_recv() {
                self.app.handle(message);
            }

            if last_poll.elapsed() >= self.poll_interval {
                self.app.refresh_prices();
                last_poll = Instant::now();
            }

            self.clamp_selection();
            self.app.renderer_mut().prune_toasts(Instant::now());
            terminal.draw(|f| self.draw(f))?;
        }

        log::info!("Dashboard closed");
        Ok(())
    }

    fn handle_key_input(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        let mode = std::mem::replace(&mut self.mode, InputMode::Normal);
        self.mode = match mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Search => self.handle_search_key(key),
            InputMode::AlertForm(form) => self.handle_form_key(form, key),
        };
        self.clamp_selection();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> InputMode {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => {
                if !self.app.filter().is_empty() {
                    self.app.set_filter("");
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.selected = self.selected.saturating_add(1),
            KeyCode::PageUp => self.selected = self.selected.saturating_sub(PAGE_STEP),
            KeyCode::PageDown => self.selected = self.selected.saturating_add(PAGE_STEP),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.highlighted_id() {
                    self.app.toggle_selection(&id);
                }
            }
            KeyCode::Char('/') => return InputMode::Search,
            KeyCode::Char('a') => {
                if let Some(form) = self.open_alert_form() {
                    return InputMode::AlertForm(form);
                }
            }
            KeyCode::Char('x') => {
                if let Some(id) = self.highlighted_id() {
                    self.app.clear_alert(&id);
                }
            }
            KeyCode::Char('r') => self.app.refresh_prices(),
            KeyCode::Char('m') => self.app.load_markets(),
            KeyCode::Char('e') => {
                self.app.export();
            }
            KeyCode::Char('t') => self.app.toggle_theme(),
            _ => (),
        }
        InputMode::Normal
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> InputMode {
        match key.code {
            KeyCode::Enter => return InputMode::Normal,
            KeyCode::Esc => {
                self.app.set_filter("");
                return InputMode::Normal;
            }
            KeyCode::Backspace => {
                let mut filter = self.app.filter().to_string();
                filter.pop();
                self.app.set_filter(filter);
                self.selected = 0;
            }
            KeyCode::Char(c) => {
                let mut filter = self.app.filter().to_string();
                filter.push(c);
                self.app.set_filter(filter);
                self.selected = 0;
            }
            _ => (),
        }
        InputMode::Search
    }

    fn handle_form_key(&mut self, mut form: AlertForm, key: KeyEvent) -> InputMode {
        match key.code {
            KeyCode::Esc => return InputMode::Normal,
            KeyCode::Enter => {
                // Malformed input closes the form without saving.
                self.app.submit_alert(&form.id, &form.upper, &form.lower);
                return InputMode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.switch_field(),
            KeyCode::Backspace => {
                form.active_input().pop();
            }
            KeyCode::Char(c) => form.active_input().push(c),
            _ => (),
        }
        InputMode::AlertForm(form)
    }

    fn open_alert_form(&self) -> Option<AlertForm> {
        let entry = self
            .app
            .renderer()
            .list
            .get(self.selected)
            .filter(|entry| entry.checked)?;
        let existing = self.app.alert_for(&entry.id).unwrap_or_default();
        Some(AlertForm {
            id: entry.id.clone(),
            title: entry.label.clone(),
            upper: existing.upper.map(|v| v.to_string()).unwrap_or_default(),
            lower: existing.lower.map(|v| v.to_string()).unwrap_or_default(),
            field: FormField::Upper,
        })
    }

    fn highlighted_id(&self) -> Option<String> {
        self.app
            .renderer()
            .list
            .get(self.selected)
            .map(|entry| entry.id.clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.app.renderer().list.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn draw<B: Backend>(&self, f: &mut Frame<B>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(f.size());

        self.render_header(f, chunks[0]);
        self.render_main_content(f, chunks[1]);
        self.render_footer(f, chunks[2]);
        self.render_toasts(f, chunks[1]);

        if let InputMode::AlertForm(form) = &self.mode {
            self.render_alert_form(f, form);
        }
    }

    fn render_header<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let screen = self.app.renderer();
        let palette = screen.theme.palette();

        let update_status = match screen.last_update {
            Some(ts) => Span::styled(
                format!("Last update: {}", ts.format("%H:%M:%S")),
                Style::default().fg(palette.muted),
            ),
            None => Span::styled("Waiting for prices", Style::default().fg(palette.warning)),
        };

        let header = Paragraph::new(Text::from(vec![
            Line::from(vec![
                Span::styled(
                    "COINWATCH ",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{} watched", self.app.selection().len()),
                    Style::default().fg(palette.text),
                ),
            ]),
            Line::from(vec![
                update_status,
                Span::styled(
                    format!(
                        " | Alerts: {} | Poll: {}s | Theme: {}",
                        self.app.alerts().len(),
                        self.poll_interval.as_secs(),
                        screen.theme.as_str()
                    ),
                    Style::default().fg(palette.muted),
                ),
            ]),
        ]))
        .block(Block::default().borders(Borders::BOTTOM));

        f.render_widget(header, area);
    }

    fn render_main_content<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(8)])
            .split(columns[1]);

        self.render_market_list(f, columns[0]);
        self.render_prices_view(f, right[0]);
        self.render_alerts_view(f, right[1]);
    }

    fn render_market_list<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let screen = self.app.renderer();
        let palette = screen.theme.palette();
        let filter = self.app.filter();

        let title = match (&self.mode, filter.is_empty()) {
            (InputMode::Search, _) => format!("Search: {}_", filter),
            (_, false) => format!("Markets (filter: {})", filter),
            _ => "Markets".to_string(),
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        if screen.list.is_empty() {
            let message = if filter.is_empty() {
                "Loading market list..."
            } else {
                "No matching assets"
            };
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let rows = screen.list.iter().map(|entry| {
            let checkbox = if entry.checked { "[x]" } else { "[ ]" };
            Row::new(vec![
                Cell::from(checkbox),
                Cell::from(entry.rank.map(|r| r.to_string()).unwrap_or_default()),
                Cell::from(entry.label.as_str()),
                Cell::from(entry.price.clone().unwrap_or_default()),
                Cell::from(entry.market_cap.clone().unwrap_or_default()),
            ])
            .style(if entry.checked {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.text)
            })
        });

        let table = Table::new(rows)
            .header(
                Row::new(vec!["", "#", "Asset", "Price", "Market Cap"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(palette.highlight_fg)
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .widths(&[
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(14),
                Constraint::Length(11),
                Constraint::Length(9),
            ]);

        let mut state = TableState::default();
        state.select(Some(self.selected));
        f.render_stateful_widget(table, area, &mut state);
    }

    fn render_prices_view<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let screen = self.app.renderer();
        let palette = screen.theme.palette();
        let block = Block::default().borders(Borders::ALL).title("Live Prices");

        let cards = match &screen.prices {
            PriceView::Empty => {
                Self::render_placeholder(f, area, block, EMPTY_SELECTION_MESSAGE, &palette);
                return;
            }
            PriceView::Loading => {
                Self::render_placeholder(f, area, block, "Fetching prices...", &palette);
                return;
            }
            PriceView::Cards(cards) if cards.is_empty() => {
                Self::render_placeholder(f, area, block, NO_PRICE_DATA_MESSAGE, &palette);
                return;
            }
            PriceView::Cards(cards) => cards,
        };

        let extended = cards
            .iter()
            .any(|card| card.volume.is_some() || card.market_cap.is_some());

        let rows = cards.iter().map(|card| {
            let change_color = match card.trend {
                Trend::Positive => palette.positive,
                Trend::Negative => palette.negative,
                Trend::Unknown => palette.muted,
            };

            let mut cells = vec![
                Cell::from(card.title.as_str()),
                Cell::from(card.price.as_str()),
                Cell::from(Span::styled(
                    card.change.as_str(),
                    Style::default().fg(change_color),
                )),
            ];
            if extended {
                cells.push(Cell::from(card.volume.clone().unwrap_or_default()));
                cells.push(Cell::from(card.market_cap.clone().unwrap_or_default()));
            }
            cells.push(Cell::from(card.alert.clone().unwrap_or_default()));

            Row::new(cells).style(if card.breach.is_some() {
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            })
        });

        let mut header = vec!["Asset", "Price", "24h Change"];
        if extended {
            header.extend(["Volume", "Market Cap"]);
        }
        header.push("Alert");

        let widths: &[Constraint] = if extended {
            &[
                Constraint::Length(20),
                Constraint::Length(16),
                Constraint::Length(11),
                Constraint::Length(10),
                Constraint::Length(11),
                Constraint::Min(10),
            ]
        } else {
            &[
                Constraint::Length(20),
                Constraint::Length(16),
                Constraint::Length(11),
                Constraint::Min(10),
            ]
        };

        let table = Table::new(rows)
            .header(Row::new(header).style(Style::default().add_modifier(Modifier::BOLD)))
            .block(block)
            .widths(widths);

        f.render_widget(table, area);
    }

    fn render_alerts_view<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let screen = self.app.renderer();
        let palette = screen.theme.palette();
        let block = Block::default().borders(Borders::ALL).title("Alerts");

        if screen.alerts.is_empty() {
            Self::render_placeholder(f, area, block, "No alerts set", &palette);
            return;
        }

        let rows = screen.alerts.iter().map(|alert| {
            let status = if alert.breach.is_some() {
                Span::styled("TRIGGERED", Style::default().fg(palette.warning))
            } else {
                Span::styled("PENDING", Style::default().fg(palette.muted))
            };

            Row::new(vec![
                Cell::from(alert.id.as_str()),
                Cell::from(alert.upper.as_str()),
                Cell::from(alert.lower.as_str()),
                Cell::from(alert.current.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(status),
            ])
            .style(Style::default().fg(palette.text))
        });

        let table = Table::new(rows)
            .header(
                Row::new(vec!["Asset", "Upper", "Lower", "Current", "Status"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(block)
            .widths(&[
                Constraint::Length(16),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(10),
            ]);

        f.render_widget(table, area);
    }

    fn render_placeholder<B: Backend>(
        f: &mut Frame<B>,
        area: Rect,
        block: Block,
        message: &str,
        palette: &Palette,
    ) {
        let placeholder = Paragraph::new(message.to_string())
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
    }

    fn render_toasts<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let screen = self.app.renderer();
        let toasts = screen.toasts();
        if toasts.is_empty() {
            return;
        }
        let palette = screen.theme.palette();

        let width = area.width.min(60);
        let height = (toasts.len() as u16 + 2).min(area.height);
        let toast_area = Rect::new(
            area.right().saturating_sub(width),
            area.bottom().saturating_sub(height),
            width,
            height,
        );

        let lines: Vec<Line> = toasts
            .active()
            .map(|toast| {
                let color = match toast.level {
                    ToastLevel::Success => palette.positive,
                    ToastLevel::Info => palette.accent,
                    ToastLevel::Warning => palette.warning,
                    ToastLevel::Error => palette.negative,
                };
                Line::from(Span::styled(toast.message.clone(), Style::default().fg(color)))
            })
            .collect();

        f.render_widget(Clear, toast_area);
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            toast_area,
        );
    }

    fn render_alert_form<B: Backend>(&self, f: &mut Frame<B>, form: &AlertForm) {
        let palette = self.app.renderer().theme.palette();
        let area = centered_rect(50, 7, f.size());

        let field = |label: &str, value: &str, active: bool| {
            let style = if active {
                Style::default()
                    .fg(palette.highlight_fg)
                    .bg(palette.highlight_bg)
            } else {
                Style::default().fg(palette.text)
            };
            Line::from(vec![
                Span::raw(format!("{:<7}", label)),
                Span::styled(format!(" {:<20}", value), style),
            ])
        };

        let body = Paragraph::new(Text::from(vec![
            field("Upper", &form.upper, form.field == FormField::Upper),
            field("Lower", &form.lower, form.field == FormField::Lower),
            Line::from(""),
            Line::from(Span::styled(
                "Enter save  Tab switch  Esc cancel",
                Style::default().fg(palette.muted),
            )),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Alert: {}", form.title)),
        );

        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }

    fn render_footer<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let key = |k: &'static str| Span::styled(k, Style::default().add_modifier(Modifier::BOLD));

        let controls = match self.mode {
            InputMode::Normal => vec![
                Span::raw("Controls: "),
                key("↑/↓"),
                Span::raw(" Navigate  "),
                key("space"),
                Span::raw(" Watch  "),
                key("/"),
                Span::raw(" Search  "),
                key("a"),
                Span::raw(" Alert  "),
                key("x"),
                Span::raw(" Clear alert  "),
                key("r"),
                Span::raw(" Refresh  "),
                key("m"),
                Span::raw(" Markets  "),
                key("e"),
                Span::raw(" Export  "),
                key("t"),
                Span::raw(" Theme  "),
                key("q"),
                Span::raw(" Quit"),
            ],
            InputMode::Search => vec![
                Span::raw("Type to filter  "),
                key("enter"),
                Span::raw(" Keep  "),
                key("esc"),
                Span::raw(" Clear"),
            ],
            InputMode::AlertForm(_) => vec![
                Span::raw("Blank field = no bound  "),
                key("enter"),
                Span::raw(" Save  "),
                key("tab"),
                Span::raw(" Switch  "),
                key("esc"),
                Span::raw(" Cancel"),
            ],
        };

        let footer = Paragraph::new(Line::from(controls))
            .style(Style::default().fg(self.app.renderer().theme.palette().muted))
            .block(Block::default().borders(Borders::TOP));

        f.render_widget(footer, area);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
