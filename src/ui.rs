use anyhow::Result;
use bmi_tracker::{calculator, BmiRecord, Category, Chart, RawMeasurement, RecordStore};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Age,
    HeightFeet,
    HeightInches,
    HeightCm,
    Weight,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Age,
        FormField::HeightFeet,
        FormField::HeightInches,
        FormField::HeightCm,
        FormField::Weight,
    ];

    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Age,
            FormField::Age => FormField::HeightFeet,
            FormField::HeightFeet => FormField::HeightInches,
            FormField::HeightInches => FormField::HeightCm,
            FormField::HeightCm => FormField::Weight,
            FormField::Weight => FormField::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FormField::Name => FormField::Weight,
            FormField::Age => FormField::Name,
            FormField::HeightFeet => FormField::Age,
            FormField::HeightInches => FormField::HeightFeet,
            FormField::HeightCm => FormField::HeightInches,
            FormField::Weight => FormField::HeightCm,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::HeightFeet => "Height (feet)",
            FormField::HeightInches => "Height (inches)",
            FormField::HeightCm => "or Centimeters",
            FormField::Weight => "Weight (in kilograms)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub at: DateTime<Local>,
}

/// Everything the form owns between key presses.
pub struct App<S: RecordStore> {
    pub store: S,
    pub form: RawMeasurement,
    pub focus: FormField,
    pub result: Option<BmiRecord>,
    pub chart: Option<Chart>,
    pub status: Option<StatusMessage>,
}

impl<S: RecordStore> App<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            form: RawMeasurement::default(),
            focus: FormField::Name,
            result: None,
            chart: None,
            status: None,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.form.name,
            FormField::Age => &self.form.age,
            FormField::HeightFeet => &self.form.height_feet,
            FormField::HeightInches => &self.form.height_inches,
            FormField::HeightCm => &self.form.height_cm,
            FormField::Weight => &self.form.weight,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.form.name,
            FormField::Age => &mut self.form.age,
            FormField::HeightFeet => &mut self.form.height_feet,
            FormField::HeightInches => &mut self.form.height_inches,
            FormField::HeightCm => &mut self.form.height_cm,
            FormField::Weight => &mut self.form.weight,
        }
    }

    /// Show the result first, then persist it.
    pub fn calculate_and_save(&mut self) {
        let record = match calculator::evaluate(&self.form) {
            Ok(record) => record,
            Err(err) => {
                self.set_error(err.user_message());
                return;
            }
        };

        self.result = Some(record.clone());
        let name = record.name.clone();

        match self.store.append(record) {
            Ok(()) => self.set_info(format!("Saved record for {}", display_name(&name))),
            Err(err) => self.set_error(err.user_message()),
        }
    }

    /// Replaces whatever chart is on screen.
    pub fn show_graph(&mut self) {
        match calculator::show_graph(&self.store) {
            Ok(chart) => {
                self.set_info(format!("Chart of {} records", chart.distribution.total()));
                self.chart = Some(chart);
            }
            Err(err) => self.set_error(err.user_message()),
        }
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Enter => self.calculate_and_save(),
            KeyCode::F(2) => self.show_graph(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Backspace => {
                self.field_mut(self.focus).pop();
            }
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.field_mut(self.focus).push(c)
            }
            _ => {}
        }
        false
    }

    fn set_info(&mut self, text: String) {
        self.status = Some(StatusMessage {
            text,
            is_error: false,
            at: Local::now(),
        });
    }

    fn set_error(&mut self, text: String) {
        self.status = Some(StatusMessage {
            text,
            is_error: true,
            at: Local::now(),
        });
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(no name)"
    } else {
        name
    }
}

pub fn run_ui<S: RecordStore>(app: &mut App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: RecordStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui<S: RecordStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form + chart
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FormField::ALL.len() as u16 + 4),
            Constraint::Min(0),
        ])
        .split(body[0]);

    render_form(f, left[0], app);
    render_result(f, left[1], app);
    render_chart(f, body[1], app);

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "BMI Calculator",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("v{}", bmi_tracker::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_form<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let mut lines = vec![Line::from("")];

    for field in FormField::ALL {
        let focused = field == app.focus;
        let marker = if focused {
            Span::styled("→ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            Span::raw("  ")
        };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut value = app.field(field).to_string();
        if focused {
            value.push('█');
        }

        lines.push(Line::from(vec![
            marker,
            Span::styled(format!("{:<22}", field.title()), label_style),
            Span::raw(value),
        ]));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" User Information "),
    );

    f.render_widget(form, area);
}

fn render_result<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let content = match &app.result {
        Some(record) => {
            let mut lines = vec![Line::from("")];
            for text in record.summary_lines() {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(text, Style::default().fg(category_color(record.category))),
                ]));
            }
            lines
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Press Enter to calculate and save",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ],
    };

    let result = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" BMI Information "),
    );

    f.render_widget(result, area);
}

fn render_chart<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let chart = match &app.chart {
        Some(chart) => chart,
        None => {
            let empty = Paragraph::new(Line::from(Span::styled(
                "  Press F2 to show graph",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Graph "),
            );
            f.render_widget(empty, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(Category::ALL.len() as u16 + 2)])
        .split(area);

    let data: Vec<(&str, u64)> = chart
        .distribution
        .iter()
        .map(|(category, count)| (category.name(), count as u64))
        .collect();

    let bars = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" {} ", chart.title)),
        )
        .data(data.as_slice())
        .bar_width(11)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    f.render_widget(bars, chunks[0]);

    let shares: Vec<Line> = chart
        .slices
        .iter()
        .map(|slice| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<12}", slice.category.name()),
                    Style::default().fg(category_color(slice.category)),
                ),
                Span::raw(format!("{:>5}  ", slice.count)),
                Span::styled(slice.label(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let legend = Paragraph::new(shares).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Share "),
    );

    f.render_widget(legend, chunks[1]);
}

fn render_status_bar<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let mut status_spans = vec![];

    if let Some(status) = &app.status {
        let color = if status.is_error { Color::Red } else { Color::Green };
        status_spans.push(Span::styled(
            format!(" [{}] ", status.at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
        status_spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
        status_spans.push(Span::raw(" | "));
    }

    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Calculate & Save | "));
    status_spans.push(Span::styled("F2", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Graph | "));
    status_spans.push(Span::styled("Tab/↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Field | "));
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Underweight => Color::Cyan,
        Category::Normal => Color::Green,
        Category::Overweight => Color::Yellow,
        Category::Obese => Color::Red,
    }
}
