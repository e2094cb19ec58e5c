use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration as StdDuration;

use chrono::{Duration, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};

use crate::domain::{HABIT_COLORS, Habit, Journal, completion_count_from, today};
use crate::journals::{recent_journals, remember_journal};
use crate::storage::{load_journal, save_journal};

const CHART_DAYS: i64 = 7;
const HIGHLIGHT_BACKGROUND_COLOR: Color = Color::Rgb(42, 45, 52);

pub fn run_dashboard(journal: &mut Journal, journal_path: &mut PathBuf) -> Result<(), Box<dyn Error>> {
	enable_raw_mode()?;
	let mut stdout = io::stdout();
	stdout.execute(EnterAlternateScreen)?;
	let backend = CrosstermBackend::new(stdout);
	let mut terminal = Terminal::new(backend)?;

	let result = run_event_loop(&mut terminal, journal, journal_path);

	disable_raw_mode()?;
	execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
	terminal.show_cursor()?;

	result
}

fn run_event_loop(
	terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
	journal: &mut Journal,
	journal_path: &mut PathBuf,
) -> Result<(), Box<dyn Error>> {
	let mut app = App::default();

	loop {
		let view = build_view(&app, journal, today());
		app.clamp_to(&view);
		terminal.draw(|frame| draw_dashboard(frame, &app, &view))?;

		if event::poll(StdDuration::from_millis(250))? {
			if let CEvent::Key(key) = event::read()? {
				if key.kind != KeyEventKind::Press {
					continue;
				}

				let should_quit = match &app.mode {
					InputMode::Prompt(_) => handle_prompt_key(&mut app, key.code, journal, journal_path),
					InputMode::Select(_) => handle_select_key(&mut app, key.code, journal, journal_path),
					InputMode::Normal => handle_normal_key(&mut app, key.code, journal, journal_path, &view),
				};

				if should_quit {
					break;
				}
			}
		}
	}

	Ok(())
}

fn draw_dashboard(frame: &mut Frame, app: &App, view: &ViewModel) {
	let layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Min(10), Constraint::Length(5)])
		.split(frame.area());

	let body = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Percentage(38),
			Constraint::Percentage(30),
			Constraint::Percentage(32),
		])
		.split(layout[0]);

	render_habit_list_panel(frame, body[0], app, view);
	render_report_panel(frame, body[1], view);
	render_chart_panel(frame, body[2], view);
	render_footer(frame, layout[1], app);

	if let InputMode::Select(select) = &app.mode {
		render_select_popup(frame, select);
	}
}

fn render_habit_list_panel(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
	let title = match &app.filter {
		Some(category) => format!("Habits: {category}"),
		None => "Habits".to_string(),
	};

	let items = view
		.habit_rows
		.iter()
		.map(|row| ListItem::new(render_habit_row_line(row)))
		.collect::<Vec<_>>();

	let mut state = ListState::default();
	if !view.habit_rows.is_empty() {
		state.select(Some(app.selected.min(view.habit_rows.len() - 1)));
	}

	let list = List::new(if items.is_empty() {
		vec![ListItem::new("(no habits in this category. press 'a' to add one)")]
	} else {
		items
	})
	.block(Block::default().borders(Borders::ALL).title(title))
	.highlight_style(Style::default().bg(HIGHLIGHT_BACKGROUND_COLOR).add_modifier(Modifier::BOLD));

	frame.render_stateful_widget(list, area, &mut state);
}

fn render_habit_row_line(row: &HabitRow) -> Line<'static> {
	let mut spans = vec![
		Span::raw(if row.completed_today { "[x] " } else { "[ ] " }),
		Span::styled(row.name.clone(), row.style.add_modifier(Modifier::BOLD)),
	];

	if !row.category.is_empty() {
		spans.push(Span::styled(
			format!(" ({})", row.category),
			Style::default().fg(Color::DarkGray),
		));
	}

	spans.push(Span::raw(format!(" | streak {}", row.streak)));
	spans.push(Span::styled(
		format!(" [{}]", if row.completed_today { "Undo" } else { "Done" }),
		Style::default().fg(Color::DarkGray),
	));

	Line::from(spans)
}

fn render_report_panel(frame: &mut Frame, area: Rect, view: &ViewModel) {
	let mut lines = Vec::new();
	if view.habit_rows.is_empty() {
		lines.push(Line::from("(no habits to report)"));
	} else {
		for row in &view.report_rows {
			let mut header = vec![Span::styled(
				row.name.clone(),
				row.style.add_modifier(Modifier::BOLD),
			)];
			if !row.category.is_empty() {
				header.push(Span::styled(
					format!(" ({})", row.category),
					Style::default().fg(Color::DarkGray),
				));
			}
			lines.push(Line::from(header));
			lines.push(Line::from(format!(
				"  week {}/7 | month {}/30 | longest {}",
				row.week, row.month, row.longest
			)));
		}
	}

	let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Reports"));
	frame.render_widget(panel, area);
}

fn render_chart_panel(frame: &mut Frame, area: Rect, view: &ViewModel) {
	let mut lines = Vec::new();
	if view.habit_rows.is_empty() {
		lines.push(Line::from("(nothing to chart)"));
	} else {
		let mut header = vec![Span::raw(format!("{:>12} ", ""))];
		for day in &view.chart_days {
			header.push(Span::styled(
				format!("{} ", day.format("%a")),
				Style::default().fg(Color::DarkGray),
			));
		}
		lines.push(Line::from(header));

		for row in &view.chart_rows {
			let mut spans = vec![Span::styled(
				format!("{:>12} ", truncate(&row.name, 12)),
				row.style,
			)];
			for completed in &row.cells {
				if *completed {
					spans.push(Span::styled("### ", row.style));
				} else {
					spans.push(Span::styled(" .  ", Style::default().fg(Color::DarkGray)));
				}
			}
			lines.push(Line::from(spans));
		}
	}

	let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Last 7 Days"));
	frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
	let footer_lines = match &app.mode {
		InputMode::Normal => vec![
			Line::from("j/k move | space toggle today | a add | d delete | f filter | g journal | q quit"),
			Line::from(app.status.clone()),
		],
		InputMode::Prompt(prompt) => vec![
			Line::from(prompt.title.clone()),
			Line::from(format!("> {}", prompt.input)),
			Line::from("Enter submit | Esc cancel"),
		],
		InputMode::Select(select) => vec![
			Line::from(select.title.clone()),
			Line::from(format!(
				"Selected: {}",
				select
					.selected_option()
					.map(|option| option.label.as_str())
					.unwrap_or("(none)")
			)),
			Line::from("j/k or arrows move | Enter choose | Esc cancel"),
		],
	};

	let footer = Paragraph::new(footer_lines).block(Block::default().borders(Borders::ALL).title("Shortcuts"));
	frame.render_widget(footer, area);
}

fn render_select_popup(frame: &mut Frame, select: &SelectState) {
	let area = centered_rect(56, 50, frame.area());
	frame.render_widget(Clear, area);

	let items = if select.options.is_empty() {
		vec![ListItem::new("(no choices)")]
	} else {
		select
			.options
			.iter()
			.map(|option| ListItem::new(option.label.clone()).style(option.style))
			.collect::<Vec<_>>()
	};

	let list = List::new(items)
		.block(Block::default().borders(Borders::ALL).title(select.title.clone()))
		.highlight_symbol(">> ")
		.highlight_style(Style::default().bg(HIGHLIGHT_BACKGROUND_COLOR));

	let mut state = ListState::default();
	if !select.options.is_empty() {
		state.select(Some(select.selected.min(select.options.len().saturating_sub(1))));
	}
	frame.render_stateful_widget(list, area, &mut state);
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

fn handle_normal_key(
	app: &mut App,
	code: KeyCode,
	journal: &mut Journal,
	journal_path: &mut PathBuf,
	view: &ViewModel,
) -> bool {
	match code {
		KeyCode::Char('q') => true,
		KeyCode::Esc => {
			if app.filter.is_some() {
				app.filter = None;
				app.selected = 0;
				app.status = "Showing all categories".to_string();
				return false;
			}
			true
		}
		KeyCode::Up | KeyCode::Char('k') => {
			app.move_selection(-1, view);
			false
		}
		KeyCode::Down | KeyCode::Char('j') => {
			app.move_selection(1, view);
			false
		}
		KeyCode::Char(' ') => {
			if let Some(row) = view.habit_rows.get(app.selected) {
				app.status = match toggle_today(journal, journal_path.as_path(), &row.habit_id) {
					Ok(message) => message,
					Err(err) => format!("error: {err}"),
				};
			} else {
				app.status = "No habit selected".to_string();
			}
			false
		}
		KeyCode::Char('a') => {
			app.mode = InputMode::Prompt(PromptState::new("Habit name", PromptKind::AddHabitName));
			false
		}
		KeyCode::Char('d') => {
			if let Some(row) = view.habit_rows.get(app.selected) {
				app.mode = InputMode::Select(build_delete_habit_select(row));
			} else {
				app.status = "No habit selected to delete".to_string();
			}
			false
		}
		KeyCode::Char('f') => {
			app.mode = InputMode::Select(build_category_filter_select(journal, app.filter.as_deref()));
			false
		}
		KeyCode::Char('g') => {
			match build_journal_switch_select(journal_path.as_path()) {
				Ok(select) => app.mode = InputMode::Select(select),
				Err(err) => app.status = err,
			}
			false
		}
		_ => false,
	}
}

fn handle_prompt_key(
	app: &mut App,
	code: KeyCode,
	journal: &mut Journal,
	journal_path: &mut PathBuf,
) -> bool {
	match code {
		KeyCode::Esc => {
			app.mode = InputMode::Normal;
			app.status = "Input cancelled".to_string();
		}
		KeyCode::Backspace => {
			if let InputMode::Prompt(prompt) = &mut app.mode {
				prompt.input.pop();
			}
		}
		KeyCode::Char(value) => {
			if let InputMode::Prompt(prompt) = &mut app.mode {
				prompt.input.push(value);
			}
		}
		KeyCode::Enter => {
			let prompt = match std::mem::replace(&mut app.mode, InputMode::Normal) {
				InputMode::Prompt(prompt) => prompt,
				InputMode::Normal | InputMode::Select(_) => return false,
			};

			match submit_prompt(prompt.clone(), journal, journal_path.as_path()) {
				Ok(PromptOutcome::NextPrompt(next_prompt)) => app.mode = InputMode::Prompt(next_prompt),
				Ok(PromptOutcome::Done(message)) => {
					app.mode = InputMode::Normal;
					app.status = message;
				}
				Err(err) => {
					app.mode = InputMode::Prompt(prompt);
					app.status = format!("error: {err}");
				}
			}
		}
		_ => {}
	}

	false
}

fn handle_select_key(
	app: &mut App,
	code: KeyCode,
	journal: &mut Journal,
	journal_path: &mut PathBuf,
) -> bool {
	match code {
		KeyCode::Esc => {
			app.mode = InputMode::Normal;
			app.status = "Selection cancelled".to_string();
		}
		KeyCode::Up | KeyCode::Char('k') => {
			if let InputMode::Select(select) = &mut app.mode {
				select.move_selection(-1);
			}
		}
		KeyCode::Down | KeyCode::Char('j') => {
			if let InputMode::Select(select) = &mut app.mode {
				select.move_selection(1);
			}
		}
		KeyCode::Enter => {
			let select = match std::mem::replace(&mut app.mode, InputMode::Normal) {
				InputMode::Select(select) => select,
				_ => return false,
			};

			match submit_select(select.clone(), journal, journal_path) {
				Ok(SelectOutcome::Done(message)) => {
					app.mode = InputMode::Normal;
					app.status = message;
				}
				Ok(SelectOutcome::Filter(filter)) => {
					app.mode = InputMode::Normal;
					app.status = match &filter {
						Some(category) => format!("Filter: {category}"),
						None => "Showing all categories".to_string(),
					};
					app.filter = filter;
					app.selected = 0;
				}
				Err(err) => {
					app.mode = InputMode::Select(select);
					app.status = format!("error: {err}");
				}
			}
		}
		_ => {}
	}

	false
}

fn submit_prompt(
	prompt: PromptState,
	journal: &mut Journal,
	journal_path: &Path,
) -> Result<PromptOutcome, String> {
	match prompt.kind.clone() {
		PromptKind::AddHabitName => {
			let name = prompt.input.trim().to_string();
			if name.is_empty() {
				// Empty names are rejected silently; the form stays open.
				return Ok(PromptOutcome::NextPrompt(prompt));
			}
			Ok(PromptOutcome::NextPrompt(PromptState::new(
				"Category (optional)",
				PromptKind::AddHabitCategory { name },
			)))
		}
		PromptKind::AddHabitCategory { name } => {
			let category = prompt.input.trim().to_string();
			if journal.add_habit(&name, &category).is_some() {
				persist(journal_path, journal)?;
				Ok(PromptOutcome::Done(format!("added habit: {name}")))
			} else {
				Ok(PromptOutcome::Done("nothing added".to_string()))
			}
		}
	}
}

fn submit_select(
	select: SelectState,
	journal: &mut Journal,
	journal_path: &mut PathBuf,
) -> Result<SelectOutcome, String> {
	let selected_value = select
		.selected_option()
		.map(|option| option.value.clone())
		.ok_or_else(|| "no option selected".to_string())?;

	match select.kind {
		SelectKind::CategoryFilter => Ok(SelectOutcome::Filter(selected_value)),
		SelectKind::DeleteHabitConfirm {
			habit_id,
			habit_name,
		} => {
			let action = selected_value
				.as_deref()
				.ok_or_else(|| "selected action is missing".to_string())?;
			if action == "delete" {
				journal.remove_habit(&habit_id)?;
				persist(journal_path.as_path(), journal)?;
				Ok(SelectOutcome::Done(format!("deleted habit: {habit_name}")))
			} else {
				Ok(SelectOutcome::Done("Delete cancelled".to_string()))
			}
		}
		SelectKind::JournalSwitch => {
			let selected_path = selected_value
				.map(PathBuf::from)
				.ok_or_else(|| "selected journal path is missing".to_string())?;
			switch_journal(journal, journal_path, selected_path).map(SelectOutcome::Done)
		}
	}
}

fn build_category_filter_select(journal: &Journal, current: Option<&str>) -> SelectState {
	let mut options = vec![SelectOption::new(
		"All categories",
		None,
		Style::default().fg(Color::Gray),
	)];
	for category in journal.categories() {
		options.push(SelectOption::new(category.clone(), Some(category), Style::default()));
	}

	let mut select = SelectState::new("Filter by category", SelectKind::CategoryFilter, options);
	if let Some(current) = current {
		select.selected = select
			.options
			.iter()
			.position(|option| option.value.as_deref() == Some(current))
			.unwrap_or(0);
	}
	select
}

fn build_delete_habit_select(row: &HabitRow) -> SelectState {
	let options = vec![
		SelectOption::new(
			"Delete",
			Some("delete".to_string()),
			Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
		),
		SelectOption::new("Cancel", Some("cancel".to_string()), Style::default()),
	];

	let mut select = SelectState::new(
		format!("Delete habit? {}", row.name),
		SelectKind::DeleteHabitConfirm {
			habit_id: row.habit_id.clone(),
			habit_name: row.name.clone(),
		},
		options,
	);
	// Default to cancel to prevent accidental deletions.
	select.selected = 1;
	select
}

fn build_journal_switch_select(current_path: &Path) -> Result<SelectState, String> {
	let mut paths = recent_journals(100).map_err(|err| format!("failed to load recent journals: {err}"))?;
	let current_path = current_path.to_path_buf();
	if !paths.iter().any(|path| path == &current_path) {
		paths.insert(0, current_path.clone());
	}

	let current_value = current_path.display().to_string();
	let options = paths
		.into_iter()
		.map(|path| {
			let value = path.display().to_string();
			let is_current = value == current_value;
			let exists = path.exists();
			let mut label = value.clone();
			if is_current {
				label = format!("* {label}");
			}
			if !exists {
				label = format!("[missing] {label}");
			}

			let style = if is_current {
				Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
			} else if exists {
				Style::default()
			} else {
				Style::default().fg(Color::DarkGray)
			};

			SelectOption::new(label, Some(value), style)
		})
		.collect::<Vec<_>>();

	let mut select = SelectState::new("Switch journal", SelectKind::JournalSwitch, options);
	select.selected = select
		.options
		.iter()
		.position(|option| option.value.as_deref() == Some(current_value.as_str()))
		.unwrap_or(0);
	Ok(select)
}

fn build_view(app: &App, journal: &Journal, today: NaiveDate) -> ViewModel {
	let categories = journal.categories();
	let filter = app.filter.as_deref();

	let habit_rows = journal
		.habits
		.iter()
		.filter(|habit| filter.is_none_or(|category| habit.category == category))
		.map(|habit| HabitRow {
			habit_id: habit.id.clone(),
			name: habit.name.clone(),
			category: habit.category.clone(),
			completed_today: habit.is_completed(today),
			streak: habit.streak,
			style: habit_style(habit),
		})
		.collect::<Vec<_>>();

	let report_rows = journal
		.habits
		.iter()
		.map(|habit| ReportRow {
			name: habit.name.clone(),
			category: habit.category.clone(),
			week: completion_count_from(habit, 7, today),
			month: completion_count_from(habit, 30, today),
			longest: habit.longest_streak,
			style: habit_style(habit),
		})
		.collect::<Vec<_>>();

	let chart_days = (0..CHART_DAYS)
		.rev()
		.map(|offset| today - Duration::days(offset))
		.collect::<Vec<_>>();
	let chart_rows = journal
		.habits
		.iter()
		.map(|habit| ChartRow {
			name: habit.name.clone(),
			style: habit_style(habit),
			cells: chart_days.iter().map(|day| habit.is_completed(*day)).collect(),
		})
		.collect::<Vec<_>>();

	ViewModel {
		habit_rows,
		report_rows,
		chart_days,
		chart_rows,
		categories,
	}
}

fn toggle_today(journal: &mut Journal, journal_path: &Path, habit_id: &str) -> Result<String, String> {
	let name = habit_label(journal, habit_id);
	let day = today();
	let completed = journal.toggle_habit(habit_id, day, day)?;
	persist(journal_path, journal)?;
	if completed {
		Ok(format!("completed today: {name}"))
	} else {
		Ok(format!("undone today: {name}"))
	}
}

fn switch_journal(journal: &mut Journal, journal_path: &mut PathBuf, next_path: PathBuf) -> Result<String, String> {
	if &next_path == journal_path {
		return Ok(format!("already using journal: {}", journal_path.display()));
	}

	let next_journal = load_journal(&next_path).map_err(|err| err.to_string())?;
	*journal = next_journal;
	*journal_path = next_path;

	match remember_journal(journal_path.as_path()) {
		Ok(()) => Ok(format!("switched journal: {}", journal_path.display())),
		Err(err) => Ok(format!(
			"switched journal: {} (warning: failed to store recents: {err})",
			journal_path.display()
		)),
	}
}

fn persist(path: &Path, journal: &Journal) -> Result<(), String> {
	save_journal(path, journal).map_err(|err| err.to_string())
}

fn habit_label(journal: &Journal, habit_id: &str) -> String {
	journal
		.habit(habit_id)
		.map(|habit| habit.name.clone())
		.unwrap_or_else(|| "Unknown habit".to_string())
}

fn habit_style(habit: &Habit) -> Style {
	let color_name = habit
		.color
		.clone()
		.unwrap_or_else(|| fallback_color(&habit.id).to_string());
	color_from_name(&color_name)
		.map(|color| Style::default().fg(color))
		.unwrap_or_default()
}

fn fallback_color(habit_id: &str) -> &'static str {
	let sum: usize = habit_id.bytes().map(usize::from).sum();
	HABIT_COLORS[sum % HABIT_COLORS.len()]
}

fn color_from_name(color_name: &str) -> Option<Color> {
	match color_name {
		"black" => Some(Color::Black),
		"red" => Some(Color::Red),
		"green" => Some(Color::Green),
		"yellow" => Some(Color::Yellow),
		"blue" => Some(Color::Blue),
		"magenta" => Some(Color::Magenta),
		"cyan" => Some(Color::Cyan),
		"gray" => Some(Color::Gray),
		"dark_gray" => Some(Color::DarkGray),
		"light_red" => Some(Color::LightRed),
		"light_green" => Some(Color::LightGreen),
		"light_yellow" => Some(Color::LightYellow),
		"light_blue" => Some(Color::LightBlue),
		"light_magenta" => Some(Color::LightMagenta),
		"light_cyan" => Some(Color::LightCyan),
		"white" => Some(Color::White),
		_ => None,
	}
}

fn truncate(text: &str, max_chars: usize) -> String {
	text.chars().take(max_chars).collect()
}

#[derive(Debug, Clone)]
enum PromptOutcome {
	NextPrompt(PromptState),
	Done(String),
}

#[derive(Debug, Clone)]
enum SelectOutcome {
	Done(String),
	Filter(Option<String>),
}

#[derive(Debug, Clone)]
struct PromptState {
	title: String,
	input: String,
	kind: PromptKind,
}

impl PromptState {
	fn new(title: impl Into<String>, kind: PromptKind) -> Self {
		Self {
			title: title.into(),
			input: String::new(),
			kind,
		}
	}
}

#[derive(Debug, Clone)]
struct SelectState {
	title: String,
	options: Vec<SelectOption>,
	selected: usize,
	kind: SelectKind,
}

impl SelectState {
	fn new(title: impl Into<String>, kind: SelectKind, options: Vec<SelectOption>) -> Self {
		Self {
			title: title.into(),
			options,
			selected: 0,
			kind,
		}
	}

	fn move_selection(&mut self, delta: i32) {
		if self.options.is_empty() {
			self.selected = 0;
			return;
		}

		if delta > 0 {
			self.selected = (self.selected + delta as usize).min(self.options.len() - 1);
		} else {
			self.selected = self.selected.saturating_sub(delta.unsigned_abs() as usize);
		}
	}

	fn selected_option(&self) -> Option<&SelectOption> {
		self.options.get(self.selected)
	}
}

#[derive(Debug, Clone)]
struct SelectOption {
	label: String,
	value: Option<String>,
	style: Style,
}

impl SelectOption {
	fn new(label: impl Into<String>, value: Option<String>, style: Style) -> Self {
		Self {
			label: label.into(),
			value,
			style,
		}
	}
}

#[derive(Debug, Clone)]
enum PromptKind {
	AddHabitName,
	AddHabitCategory {
		name: String,
	},
}

#[derive(Debug, Clone)]
enum SelectKind {
	CategoryFilter,
	DeleteHabitConfirm {
		habit_id: String,
		habit_name: String,
	},
	JournalSwitch,
}

#[derive(Debug, Clone)]
enum InputMode {
	Normal,
	Prompt(PromptState),
	Select(SelectState),
}

#[derive(Debug, Clone)]
struct App {
	selected: usize,
	filter: Option<String>,
	mode: InputMode,
	status: String,
}

impl Default for App {
	fn default() -> Self {
		Self {
			selected: 0,
			filter: None,
			mode: InputMode::Normal,
			status: "Ready".to_string(),
		}
	}
}

impl App {
	fn clamp_to(&mut self, view: &ViewModel) {
		if view.habit_rows.is_empty() {
			self.selected = 0;
		} else {
			self.selected = self.selected.min(view.habit_rows.len() - 1);
		}

		if let Some(filter) = &self.filter {
			if !view.categories.contains(filter) {
				self.filter = None;
			}
		}
	}

	fn move_selection(&mut self, delta: i32, view: &ViewModel) {
		if view.habit_rows.is_empty() {
			self.selected = 0;
			return;
		}

		if delta > 0 {
			self.selected = (self.selected + delta as usize).min(view.habit_rows.len() - 1);
		} else {
			self.selected = self.selected.saturating_sub(delta.unsigned_abs() as usize);
		}
	}
}

struct ViewModel {
	habit_rows: Vec<HabitRow>,
	report_rows: Vec<ReportRow>,
	chart_days: Vec<NaiveDate>,
	chart_rows: Vec<ChartRow>,
	categories: Vec<String>,
}

struct HabitRow {
	habit_id: String,
	name: String,
	category: String,
	completed_today: bool,
	streak: u32,
	style: Style,
}

struct ReportRow {
	name: String,
	category: String,
	week: u32,
	month: u32,
	longest: u32,
	style: Style,
}

struct ChartRow {
	name: String,
	style: Style,
	cells: Vec<bool>,
}
