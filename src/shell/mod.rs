//! Shell Module
//!
//! The interactive numbered menu driving a session.
//!
//! ## Responsibilities
//! - Display the menu and read a choice, once per iteration
//! - Prompt for each command's inputs, re-prompting on bad numbers
//! - Render reports and errors as user-facing text
//! - Exit cleanly on choice 0 or EOF, clearing the route
//!
//! Deliberately thin: every behavior with an invariant lives behind
//! [`Session`]. The shell is generic over [`BufRead`]/[`Write`] so the whole
//! loop runs against in-memory buffers in tests. Everything written here is
//! product output and goes through the writer, never the logger.

mod prompt;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::command::{Command, Placement, Report};
use crate::route::StopDraft;
use crate::session::Session;

const MENU: &str = "\
==== BUS ROUTE MENU ====
 1. View route
 2. Search stop by name
 3. Insert stop at end
 4. Insert stop after a named stop
 5. Insert stop at position
 6. Delete stop by name
 7. Passengers waiting at a stop
 8. Total route distance/time
 9. Distance/time between two stops
10. Save route to file
11. Load route from file
12. Populate sample route
 0. Exit
";

/// The interactive menu loop over a session
pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Run the menu until exit or EOF. The route is cleared on the way out.
    pub fn run(mut self) -> std::io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(choice) = self.read_line("Choice: ")? else {
                break;
            };
            match choice.as_str() {
                "0" => break,
                "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" | "10" | "11" | "12" => {
                    let Some(command) = self.collect_command(&choice)? else {
                        break;
                    };
                    self.dispatch(command)?;
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
            writeln!(self.output)?;
        }
        writeln!(self.output, "Goodbye.")?;
        self.session.close();
        Ok(())
    }

    /// Prompt for the inputs of the chosen menu item. `Ok(None)` on EOF.
    fn collect_command(&mut self, choice: &str) -> std::io::Result<Option<Command>> {
        let command = match choice {
            "1" => Command::View,
            "2" => match self.read_line("Stop name: ")? {
                Some(name) => Command::Search { name },
                None => return Ok(None),
            },
            "3" => match self.read_draft()? {
                Some(draft) => Command::InsertEnd { draft },
                None => return Ok(None),
            },
            "4" => {
                let Some(after) = self.read_line("Insert after stop named: ")? else {
                    return Ok(None);
                };
                match self.read_draft()? {
                    Some(draft) => Command::InsertAfter { after, draft },
                    None => return Ok(None),
                }
            }
            "5" => {
                let Some(position) = self.read_number::<usize>("Position (1-based): ")? else {
                    return Ok(None);
                };
                match self.read_draft()? {
                    Some(draft) => Command::InsertAt { draft, position },
                    None => return Ok(None),
                }
            }
            "6" => match self.read_line("Stop name to delete: ")? {
                Some(name) => Command::Delete { name },
                None => return Ok(None),
            },
            "7" => match self.read_line("Stop name: ")? {
                Some(name) => Command::Passengers { name },
                None => return Ok(None),
            },
            "8" => Command::Totals,
            "9" => {
                let Some(from) = self.read_line("From stop: ")? else {
                    return Ok(None);
                };
                match self.read_line("To stop: ")? {
                    Some(to) => Command::Span { from, to },
                    None => return Ok(None),
                }
            }
            "10" => match self.read_path()? {
                Some(path) => Command::Save { path },
                None => return Ok(None),
            },
            "11" => match self.read_path()? {
                Some(path) => Command::Load { path },
                None => return Ok(None),
            },
            "12" => Command::PopulateSample,
            _ => unreachable!("choice validated by caller"),
        };
        Ok(Some(command))
    }

    /// Execute and render one command
    fn dispatch(&mut self, command: Command) -> std::io::Result<()> {
        match self.session.execute(command) {
            Ok(report) => self.render(report),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    fn render(&mut self, report: Report) -> std::io::Result<()> {
        match report {
            Report::Route(stops) => {
                if stops.is_empty() {
                    writeln!(self.output, "Route is empty.")?;
                } else {
                    for stop in &stops {
                        writeln!(self.output, "{stop}")?;
                    }
                    writeln!(self.output, "Total stops: {}", stops.len())?;
                }
            }
            Report::Stop(stop) => writeln!(self.output, "Found: {stop}")?,
            Report::Inserted { stop, placement } => {
                writeln!(self.output, "Inserted: {stop}")?;
                if placement == Placement::EndFallback {
                    writeln!(self.output, "Reference stop not found; appended at end.")?;
                }
            }
            Report::Deleted(true) => writeln!(self.output, "Stop deleted.")?,
            Report::Deleted(false) => writeln!(self.output, "No stop with that name.")?,
            Report::Passengers { name, count } => {
                writeln!(self.output, "{count} passengers waiting at \"{name}\".")?;
            }
            Report::Totals(totals) => writeln!(
                self.output,
                "Total route: {:.2} km, {:.2} min.",
                totals.distance, totals.time
            )?,
            Report::Span { from, to, totals } => writeln!(
                self.output,
                "{from} -> {to}: {:.2} km, {:.2} min.",
                totals.distance, totals.time
            )?,
            Report::Saved { stops, path } => {
                writeln!(self.output, "Saved {stops} stops to {}.", path.display())?;
            }
            Report::Loaded { report, path } => {
                writeln!(
                    self.output,
                    "Loaded {} stops from {}.",
                    report.loaded,
                    path.display()
                )?;
                if report.skipped > 0 {
                    writeln!(self.output, "{} malformed rows skipped.", report.skipped)?;
                }
            }
            Report::Sample(stops) => {
                writeln!(self.output, "Sample route populated ({stops} stops).")?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Prompt Helpers
    // =========================================================================

    fn read_line(&mut self, text: &str) -> std::io::Result<Option<String>> {
        prompt::line(&mut self.input, &mut self.output, text)
    }

    fn read_number<T: std::str::FromStr + Default>(
        &mut self,
        text: &str,
    ) -> std::io::Result<Option<T>> {
        prompt::number(&mut self.input, &mut self.output, text)
    }

    /// Prompt for the four stop fields. `Ok(None)` on EOF.
    fn read_draft(&mut self) -> std::io::Result<Option<StopDraft>> {
        let Some(name) = self.read_line("Stop name: ")? else {
            return Ok(None);
        };
        let Some(passengers) = self.read_number::<u32>("Waiting passengers: ")? else {
            return Ok(None);
        };
        let Some(dist) = self.read_number::<f64>("Distance to next stop (km): ")? else {
            return Ok(None);
        };
        let Some(time) = self.read_number::<f64>("Time to next stop (min): ")? else {
            return Ok(None);
        };
        Ok(Some(StopDraft::new(name, passengers, dist, time)))
    }

    /// Prompt for a file path; an empty line means the configured default
    fn read_path(&mut self) -> std::io::Result<Option<PathBuf>> {
        let default = self.session.config().route_file.clone();
        let text = format!("File [{}]: ", default.display());
        let Some(answer) = self.read_line(&text)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            Ok(Some(default))
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}
