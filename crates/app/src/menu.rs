//! Interactive menu and per-question prompting over stdin.

use std::io::{self, Write};

use chrono::Datelike;

use drill_core::model::{DateSample, DrillMode};
use drill_core::weekday::{march_anchor, weekday_number};
use services::AnswerSource;

use crate::display;

/// What the user picked at the main menu.
pub enum MenuChoice {
    Mode(DrillMode),
    Help,
    Stats,
    Quit,
}

/// Show the menu and read a choice, reprompting until one is valid.
pub fn pick() -> io::Result<MenuChoice> {
    loop {
        display::menu();
        let line = prompt_line("Pick a drill: ")?;
        match line.trim() {
            "1" => return Ok(MenuChoice::Mode(DrillMode::FullDate)),
            "2" => return Ok(MenuChoice::Mode(DrillMode::YearAndCentury)),
            "3" => return Ok(MenuChoice::Mode(DrillMode::MonthAndDay)),
            "4" => {
                let quantity = ask_weekdays_quantity()?;
                return Ok(MenuChoice::Mode(DrillMode::masked_years(quantity)));
            }
            "9" => return Ok(MenuChoice::Help),
            "0" => return Ok(MenuChoice::Stats),
            "q" | "quit" | "exit" => return Ok(MenuChoice::Quit),
            _ => println!("Unrecognized choice.\n"),
        }
    }
}

/// Free-text weekday threshold; anything unparseable means "no restriction".
fn ask_weekdays_quantity() -> io::Result<u8> {
    let line = prompt_line("How many weekdays to train, starting from Monday (1-7): ")?;
    Ok(line.trim().parse::<u8>().unwrap_or(7))
}

pub fn play_again() -> io::Result<bool> {
    let line = prompt_line("Play again? (y/n): ")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Reads one answer per question from stdin, with a mode-specific prompt.
#[derive(Default)]
pub struct StdinAnswers;

impl StdinAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn prompt_for(sample: &DateSample, mode: DrillMode) -> String {
        let date = sample.date();
        match mode {
            DrillMode::FullDate => format!("{} : ", date.format("%Y.%m.%d")),
            DrillMode::YearAndCentury | DrillMode::MaskedYears { .. } => {
                format!("{} : ", date.format("%Y"))
            }
            DrillMode::MonthAndDay => {
                let code = weekday_number(march_anchor(date.year()));
                let leap = if date.leap_year() { ", leap year" } else { "" };
                format!("{}, year code {code}{leap} : ", date.format("%m.%d"))
            }
        }
    }
}

impl AnswerSource for StdinAnswers {
    fn answer(
        &mut self,
        _index: usize,
        _total: usize,
        sample: &DateSample,
        mode: DrillMode,
    ) -> io::Result<String> {
        prompt_line(&Self::prompt_for(sample, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(year: i32, month: u32, day: u32) -> DateSample {
        DateSample::new(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn full_date_prompt_shows_the_whole_date() {
        let prompt = StdinAnswers::prompt_for(&sample(2021, 1, 1), DrillMode::FullDate);
        assert_eq!(prompt, "2021.01.01 : ");
    }

    #[test]
    fn year_modes_show_only_the_year() {
        let prompt = StdinAnswers::prompt_for(&sample(2118, 3, 14), DrillMode::masked_years(2));
        assert_eq!(prompt, "2118 : ");
    }

    #[test]
    fn month_prompt_carries_the_year_code_and_leap_marker() {
        // 2020-03-14 is a Saturday, so the year code is 6; 2020 is a leap year.
        let prompt = StdinAnswers::prompt_for(&sample(2020, 7, 11), DrillMode::MonthAndDay);
        assert_eq!(prompt, "07.11, year code 6, leap year : ");
    }
}
