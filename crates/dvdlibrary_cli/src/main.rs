//! Interactive console front end for the DVD library.
//!
//! # Responsibility
//! - Run the load / menu-dispatch / persist session loop.
//! - Keep all prompting and validation out of the core store.
//!
//! # Invariants
//! - The collection is loaded once at start and persisted once at exit.
//! - A missing collection file at start is reported, not fatal.

mod user_io;
mod view;

use crate::user_io::ConsoleIo;
use crate::view::LibraryView;
use dvdlibrary_core::{init_logging, Dvd, DvdRepository, FileDvdRepository, LibraryService};
use log::{info, warn};
use std::io::{stdin, stdout, BufRead, Write};
use std::process::ExitCode;

const DEFAULT_LIBRARY_FILE: &str = "dvds.txt";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_DIR: &str = "logs";

fn main() -> ExitCode {
    let library_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LIBRARY_FILE.to_string());

    // The session stays usable without logging.
    if let Err(err) = init_logging(DEFAULT_LOG_LEVEL, DEFAULT_LOG_DIR) {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=session_start module=cli version={} library={}",
        dvdlibrary_core::core_version(),
        library_path
    );

    let service = LibraryService::new(FileDvdRepository::new(library_path));
    let view = LibraryView::new(ConsoleIo::new(stdin().lock(), stdout()));

    match run_session(service, view) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_session<S, R, W>(
    mut service: LibraryService<S>,
    mut view: LibraryView<R, W>,
) -> std::io::Result<()>
where
    S: DvdRepository,
    R: BufRead,
    W: Write,
{
    // A missing collection file on a first run is expected; report it and
    // start with an empty collection.
    if let Err(err) = service.load() {
        warn!("event=session_load module=cli status=error error={err}");
        view.display_error(&err.to_string());
    }

    loop {
        view.display_menu_options();
        let choice = view.query_int_in_range(1, 6, "Select an option")?;
        match choice {
            1 => add_dvd(&mut service, &mut view)?,
            2 => view_dvd(&mut service, &mut view)?,
            3 => edit_dvd(&mut service, &mut view)?,
            4 => remove_dvd(&mut service, &mut view)?,
            5 => list_dvds(&service, &mut view)?,
            _ => break,
        }
    }

    view.display_text("Thank you for using this application");

    if let Err(err) = service.persist() {
        warn!("event=session_persist module=cli status=error error={err}");
        view.display_error(&err.to_string());
    }
    Ok(())
}

fn add_dvd<S: DvdRepository, R: BufRead, W: Write>(
    service: &mut LibraryService<S>,
    view: &mut LibraryView<R, W>,
) -> std::io::Result<()> {
    view.display_header("DVD ADDITION MENU");

    let title = view.query_nonempty_string("Enter the film title")?;
    let dvd = query_dvd_fields(view, title)?;
    match service.add_dvd(dvd) {
        Some(_) => view.display_info("DVD added to records"),
        None => {
            view.display_error("A DVD with that title is already in the collection");
            view.display_info("DVD not added to records");
        }
    }

    view.display_footer("DVD ADDITION MENU");
    pause(view)
}

fn view_dvd<S: DvdRepository, R: BufRead, W: Write>(
    service: &mut LibraryService<S>,
    view: &mut LibraryView<R, W>,
) -> std::io::Result<()> {
    view.display_header("DVD INFO MENU");

    let title = view.query_nonempty_string("Enter the name of the DVD to view")?;
    match service.get_dvd_by_title(&title) {
        Some(dvd) => {
            view.display_info("DVD INFO");
            view.display_dvd_info(&dvd);
        }
        None => view.display_error("There is no DVD with that title"),
    }

    view.display_footer("DVD INFO MENU");
    pause(view)
}

fn edit_dvd<S: DvdRepository, R: BufRead, W: Write>(
    service: &mut LibraryService<S>,
    view: &mut LibraryView<R, W>,
) -> std::io::Result<()> {
    view.display_header("DVD EDIT MENU");

    let title = view.query_nonempty_string("Enter the name of the DVD to edit")?;
    match service.get_dvd_by_title(&title) {
        Some(original) => {
            view.display_info("CURRENT DVD INFO");
            view.display_dvd_info(&original);
            let modified = query_dvd_fields(view, original.title().to_string())?;
            service.save_dvd(modified);
            view.display_info("Changes saved");
        }
        None => view.display_error("There's no DVD in the collection with this title"),
    }

    view.display_footer("DVD EDIT MENU");
    pause(view)
}

fn remove_dvd<S: DvdRepository, R: BufRead, W: Write>(
    service: &mut LibraryService<S>,
    view: &mut LibraryView<R, W>,
) -> std::io::Result<()> {
    view.display_header("DVD REMOVAL MENU");

    let title = view.query_nonempty_string("Enter the title of the DVD to remove")?;
    match service.remove_dvd(&title) {
        Some(_) => view.display_info("DVD removed successfully"),
        None => view.display_info("There is no DVD with that title"),
    }

    view.display_footer("DVD REMOVAL MENU");
    pause(view)
}

fn list_dvds<S: DvdRepository, R: BufRead, W: Write>(
    service: &LibraryService<S>,
    view: &mut LibraryView<R, W>,
) -> std::io::Result<()> {
    view.display_header("DVDS IN COLLECTION");
    for dvd in service.get_all_dvds() {
        view.display_header(&"---".repeat(10));
        view.display_dvd_info(&dvd);
        view.display_footer(&"---".repeat(10));
    }
    view.display_footer("DVDS IN COLLECTION");
    pause(view)
}

/// Prompts for every field except the title, which is fixed up front.
fn query_dvd_fields<R: BufRead, W: Write>(
    view: &mut LibraryView<R, W>,
    title: impl Into<String>,
) -> std::io::Result<Dvd> {
    let director = view.query_nonempty_string("Enter the film's director")?;
    let release_date = view.query_date("Enter the film's release date")?;
    let mpaa_rating = view.query_mpaa_rating()?;
    let studio = view.query_nonempty_string("Enter the film's studio(s)")?;
    let rating = view.query_int_in_range(0, 10, "Give your rating for this film")?;
    let note = view.query_string("Enter a short note for this film, if any")?;

    let mut dvd = Dvd::new(title, release_date);
    dvd.director_name = director;
    dvd.mpaa_rating = mpaa_rating;
    dvd.studio = studio;
    dvd.rating = rating;
    dvd.note = note;
    Ok(dvd)
}

fn pause<R: BufRead, W: Write>(view: &mut LibraryView<R, W>) -> std::io::Result<()> {
    view.query_string("Press ENTER to continue")?;
    Ok(())
}
