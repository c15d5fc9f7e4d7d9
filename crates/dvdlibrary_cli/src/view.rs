//! Prompt and display helpers for the console session.
//!
//! # Responsibility
//! - Validate user input before records reach the store.
//! - Format records and menu text for the console.
//!
//! # Invariants
//! - Dates, MPAA ratings and integer ranges are validated here; the core
//!   store receives only fully assembled records.

use crate::user_io::ConsoleIo;
use chrono::NaiveDate;
use dvdlibrary_core::Dvd;
use std::io::{BufRead, Write};

/// The MPAA ratings the front end accepts.
pub const MPAA_RATINGS: [&str; 5] = ["G", "PG", "PG-13", "R", "NC-17"];

pub struct LibraryView<R, W> {
    io: ConsoleIo<R, W>,
}

impl<R: BufRead, W: Write> LibraryView<R, W> {
    pub fn new(io: ConsoleIo<R, W>) -> Self {
        Self { io }
    }

    pub fn display_text(&mut self, text: &str) {
        self.io.print(text);
    }

    pub fn display_info(&mut self, text: &str) {
        self.io.print_info(text);
    }

    pub fn display_header(&mut self, text: &str) {
        self.io.print_header(text);
    }

    pub fn display_footer(&mut self, text: &str) {
        self.io.print_footer(text);
    }

    pub fn display_error(&mut self, text: &str) {
        self.io.print_error(text);
    }

    pub fn display_menu_options(&mut self) {
        self.io.print_header("MAIN MENU");
        self.io.print("1: Add a DVD to the collection");
        self.io.print("2: View information for a DVD");
        self.io.print("3: Edit an existing DVD in the collection");
        self.io.print("4: Remove a DVD from the collection");
        self.io.print("5: List all DVDs in the collection");
        self.io.print("6: Exit");
        self.io.print_footer("MAIN MENU");
    }

    pub fn query_string(&mut self, prompt: &str) -> std::io::Result<String> {
        self.io.print_solicitation(prompt);
        self.io.read_string()
    }

    pub fn query_nonempty_string(&mut self, prompt: &str) -> std::io::Result<String> {
        self.io.print_solicitation(prompt);
        self.io.read_nonempty_string()
    }

    pub fn query_int_in_range(
        &mut self,
        min: i32,
        max: i32,
        prompt: &str,
    ) -> std::io::Result<i32> {
        self.io.print_solicitation(prompt);
        self.io.read_int_in_range(min, max)
    }

    /// Prompts for year, month and day until they form a calendar date.
    pub fn query_date(&mut self, prompt: &str) -> std::io::Result<NaiveDate> {
        self.io.print_solicitation(prompt);
        loop {
            self.io.print_solicitation("Provide a year");
            let year = self.io.read_int()?;
            self.io.print_solicitation("Provide a month");
            let month = self.io.read_int()?;
            self.io.print_solicitation("Provide a day");
            let day = self.io.read_int()?;

            match assemble_date(year, month, day) {
                Some(date) => return Ok(date),
                None => self.io.print_error("The date entered was invalid"),
            }
        }
    }

    /// Prompts until the input is one of the accepted MPAA ratings.
    pub fn query_mpaa_rating(&mut self) -> std::io::Result<String> {
        self.io.print_solicitation("Enter an MPAA Rating");
        loop {
            let received = self.io.read_nonempty_string()?;
            if is_valid_mpaa_rating(&received) {
                return Ok(received);
            }
            self.io.print_error("Please enter a valid MPAA rating");
        }
    }

    pub fn display_dvd_info(&mut self, dvd: &Dvd) {
        self.io.print(dvd.title());
        self.io.print(&format!("Director: {}", dvd.director_name));
        self.io.print(&format!("Studio(s): {}", dvd.studio));
        self.io.print(&format!("Released: {}", dvd.release_date));
        self.io.print(&format!("MPAA Rating: {}", dvd.mpaa_rating));
        self.io.print(&format!("User Rating: {}", dvd.rating));
        self.io.print(&format!("Notes: {}", dvd.note));
    }
}

/// Builds a calendar date from raw user input, if the parts form one.
pub fn assemble_date(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    let month = u32::try_from(month).ok()?;
    let day = u32::try_from(day).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn is_valid_mpaa_rating(value: &str) -> bool {
    MPAA_RATINGS.contains(&value)
}
