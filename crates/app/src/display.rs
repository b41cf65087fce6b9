//! Screens and result rendering for the terminal.

use drill_core::model::Session;
use storage::repository::{SessionStore, StorageError};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn intro(questions: usize) {
    println!("Weekday drill v{VERSION}");
    println!("Guess the day of week for randomly generated dates.");
    println!("{questions} questions per session. Answers are numeric:");
    println!("  1 - Monday    2 - Tuesday   3 - Wednesday  4 - Thursday");
    println!("  5 - Friday    6 - Saturday  7 (or 0) - Sunday");
    println!("Session summaries are appended to the journal automatically.");
    println!();
}

pub fn menu() {
    println!("Main menu");
    println!("  1 - Full game");
    println!("  2 - Years and centuries (1918-2099)");
    println!("  3 - Months and days");
    println!("  4 - Years without centuries, restricted weekdays");
    println!("  9 - Reference info");
    println!("  0 - Statistics");
    println!("  q - Quit");
}

pub fn help() {
    println!();
    println!("Century anchor weekdays:");
    println!("  1900 - Wednesday");
    println!("  2000 - Tuesday");
    println!("  2100 - Sunday");
    println!("  2200 - Friday");
    println!("  The pattern repeats every four centuries.");
    println!();
    println!("Dates sharing the year's anchor weekday (MM.DD):");
    println!("  01.03 (01.04 in leap years)");
    println!("  02.28 (02.29 in leap years)");
    println!("  03.14  04.04  05.09  06.06  07.11  08.08");
    println!("  09.05  10.10  11.07  12.12");
    println!();
    println!("Some years and their codes:");
    println!("  00 - 0   12 - 1   24 - 2   36 - 3   48 - 4");
    println!("  60 - 5   72 - 6   84 - 0   96 - 1");
    println!("  28 - 0   56 - 0");
    println!();
}

pub fn results(session: &Session) {
    println!();
    println!(
        "Session {} of \"{}\"",
        session.ordinal(),
        session.mode_label()
    );
    match session.average_secs_per_question() {
        Some(avg) => println!("Average time per question: {avg:.1} s"),
        None => println!("Average time per question: unavailable"),
    }
    println!("Total time: {} s", session.elapsed().num_seconds());
    println!(
        "Correct answers: {}/{}",
        session.correct_count(),
        session.total()
    );
    println!();
    for sample in session.samples() {
        let verdict = if sample.is_correct() { "Correct" } else { "Wrong!" };
        println!(
            "  {} {} {}",
            sample.date().format("%Y.%m.%d"),
            sample.weekday_name(),
            verdict
        );
    }
    println!();
}

pub fn stats(store: &dyn SessionStore) -> Result<(), StorageError> {
    let entries = store.recent(10)?;
    println!();
    if entries.is_empty() {
        println!("No sessions logged yet.");
        println!();
        return Ok(());
    }

    println!("Recent sessions (newest first):");
    for entry in entries {
        let average = entry
            .average_secs_per_question
            .map_or_else(|| "n/a".to_owned(), |avg| format!("{avg:.1} s"));
        println!(
            "  {}  {} #{}  {}/{}  avg {average}",
            entry.recorded_at.format("%Y.%m.%d %H:%M"),
            entry.mode_label,
            entry.ordinal,
            entry.correct,
            entry.total
        );
    }
    println!();
    Ok(())
}
