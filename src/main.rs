mod domain;
mod journals;
mod remote;
mod storage;
mod ui;

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Journal, completion_count, days_ago, today};
use crate::journals::{recent_journals, remember_journal, resolve_journal_path};
use crate::remote::fetch_journal;
use crate::storage::{load_journal, save_journal};
use crate::ui::run_dashboard;

#[derive(Debug, Parser)]
#[command(name = "streakdeck", about = "Terminal-first daily habit tracker")]
struct Cli {
	#[arg(long)]
	journal: Option<PathBuf>,
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
	Init,
	Dashboard,
	Add {
		#[arg(long)]
		name: String,
		#[arg(long, default_value = "")]
		category: String,
	},
	Toggle {
		#[arg(long)]
		habit: String,
		/// Days back from today, for backfilling a missed mark.
		#[arg(long, default_value_t = 0)]
		ago: u32,
	},
	Remove {
		#[arg(long)]
		habit: String,
		#[arg(long)]
		yes: bool,
	},
	List,
	Report,
	Import {
		#[arg(long)]
		url: String,
	},
	Journals {
		#[arg(long, default_value_t = 20)]
		limit: usize,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), Box<dyn Error>> {
	let cli = Cli::parse();

	if let Some(Command::Journals { limit }) = &cli.command {
		print_recent_journals(*limit)?;
		return Ok(());
	}

	let mut journal_path = resolve_journal_path(cli.journal)?;
	let mut journal = load_journal(&journal_path)?;
	if let Err(err) = remember_journal(&journal_path) {
		eprintln!("warning: failed to store recent journal: {err}");
	}

	match cli.command.unwrap_or(Command::Dashboard) {
		Command::Init => {
			save_journal(&journal_path, &journal)?;
			println!("initialized journal at {}", journal_path.display());
		}
		Command::Dashboard => {
			run_dashboard(&mut journal, &mut journal_path)?;
		}
		Command::Add { name, category } => {
			let habit_id = journal
				.add_habit(&name, &category)
				.ok_or("habit name is required")?;
			save_journal(&journal_path, &journal)?;
			println!("created habit {habit_id}");
		}
		Command::Toggle { habit, ago } => {
			let habit_id = resolve_habit_id(&journal, &habit)?;
			let name = journal
				.habit(&habit_id)
				.map(|habit| habit.name.clone())
				.unwrap_or_default();
			let day = days_ago(ago.into());
			let completed = journal.toggle_habit(&habit_id, day, today())?;
			save_journal(&journal_path, &journal)?;
			let streak = journal.habit(&habit_id).map(|habit| habit.streak).unwrap_or(0);
			if completed {
				println!("completed {day}: {name} (streak {streak})");
			} else {
				println!("undone {day}: {name} (streak {streak})");
			}
		}
		Command::Remove { habit, yes } => {
			let habit_id = resolve_habit_id(&journal, &habit)?;
			let name = journal
				.habit(&habit_id)
				.map(|habit| habit.name.clone())
				.unwrap_or_default();
			if !yes && !confirm(&format!("Delete habit '{name}'? [y/N] "))? {
				println!("delete cancelled");
				return Ok(());
			}
			journal.remove_habit(&habit_id)?;
			save_journal(&journal_path, &journal)?;
			println!("deleted habit: {name}");
		}
		Command::List => {
			print_habits(&journal);
		}
		Command::Report => {
			print_report(&journal);
		}
		Command::Import { url } => {
			// Failure leaves the journal at its last good state; nothing is
			// saved unless the fetch fully parses.
			let fetched = fetch_journal(&url)?;
			let count = fetched.habits.len();
			journal = fetched;
			save_journal(&journal_path, &journal)?;
			println!("imported {count} habits from {url}");
		}
		Command::Journals { .. } => {}
	}

	Ok(())
}

fn print_recent_journals(limit: usize) -> Result<(), Box<dyn Error>> {
	let rows = recent_journals(limit)?;
	if rows.is_empty() {
		println!("no recent journals");
		return Ok(());
	}

	for (index, path) in rows.iter().enumerate() {
		println!("{:>2}. {}", index + 1, path.display());
	}

	Ok(())
}

// Commands address habits by id; a unique exact name works as a convenience.
fn resolve_habit_id(journal: &Journal, input: &str) -> Result<String, String> {
	if journal.habit(input).is_some() {
		return Ok(input.to_string());
	}

	let matches = journal
		.habits
		.iter()
		.filter(|habit| habit.name == input)
		.collect::<Vec<_>>();
	match matches.as_slice() {
		[habit] => Ok(habit.id.clone()),
		[] => Err(format!("habit not found: {input}")),
		_ => Err(format!("habit name is ambiguous, use an id: {input}")),
	}
}

fn confirm(question: &str) -> Result<bool, Box<dyn Error>> {
	print!("{question}");
	io::stdout().flush()?;
	let mut answer = String::new();
	io::stdin().read_line(&mut answer)?;
	Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_habits(journal: &Journal) {
	if journal.habits.is_empty() {
		println!("no habits yet");
		return;
	}

	for habit in &journal.habits {
		let glyph = if habit.completed_today() { "[x]" } else { "[ ]" };
		let category = if habit.category.is_empty() {
			"Uncategorized".to_string()
		} else {
			habit.category.clone()
		};
		println!(
			"{} {} | {} | {} | streak {}",
			glyph, habit.id, habit.name, category, habit.streak
		);
	}
}

fn print_report(journal: &Journal) {
	if journal.habits.is_empty() {
		println!("no habits yet");
		return;
	}

	for habit in &journal.habits {
		let week = completion_count(habit, 7);
		let month = completion_count(habit, 30);
		let category = if habit.category.is_empty() {
			String::new()
		} else {
			format!(" ({})", habit.category)
		};
		println!(
			"{}{} | week {}/7 | month {}/30 | longest streak {}",
			habit.name, category, week, month, habit.longest_streak
		);
	}
}
