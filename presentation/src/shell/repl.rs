//! Dashboard REPL for the record operations
//!
//! The shell owns the [`RecordSession`] for the whole run. Records are written
//! back only when the user picks "Save and Exit"; end of input leaves the file
//! untouched.

use super::input::{LineEvent, LineReader};
use super::menu::MenuChoice;
use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use registrar_application::{
    AddSemesterInput, AddSemesterUseCase, AddStudentInput, AddStudentUseCase,
    DeleteStudentUseCase, ListStudentsUseCase, RecordSession, StoreError, StudentRepository,
    ViewStudentUseCase,
};
use registrar_domain::DomainError;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that end the shell
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// How the shell finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// The user chose "Save and Exit" and the records were written
    Saved,
    /// Input ended before an explicit exit; nothing was written
    InputClosed,
}

/// Why a prompted operation stopped early
enum Halt {
    Cancelled,
    Closed,
    Io(io::Error),
}

impl From<io::Error> for Halt {
    fn from(e: io::Error) -> Self {
        Halt::Io(e)
    }
}

/// Interactive dashboard shell
pub struct RegistrarShell<R: StudentRepository, L: LineReader, W: Write> {
    session: RecordSession<R>,
    input: L,
    out: W,
    config: ReplConfig,
}

impl<R: StudentRepository, L: LineReader, W: Write> RegistrarShell<R, L, W> {
    /// Create a new shell over an opened session
    pub fn new(session: RecordSession<R>, input: L, out: W) -> Self {
        Self {
            session,
            input,
            out,
            config: ReplConfig::default(),
        }
    }

    /// Set REPL behavior
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Hand back the session and output once the shell is done
    pub fn into_parts(self) -> (RecordSession<R>, W) {
        (self.session, self.out)
    }

    /// Run the dashboard loop until "Save and Exit" or end of input
    pub fn run(&mut self) -> Result<ShellExit, ShellError> {
        let banner = ConsoleFormatter::banner(
            &self.session.repository().location(),
            self.session.store().len(),
        );
        write!(self.out, "{}", banner)?;

        loop {
            write!(self.out, "{}", ConsoleFormatter::menu())?;
            self.out.flush()?;

            let line = match self.input.read_line("Select an option: ")? {
                LineEvent::Line(line) => line,
                LineEvent::Interrupted => {
                    writeln!(self.out, "^C")?;
                    continue;
                }
                LineEvent::Closed => return self.input_closed(),
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                debug!("Rejected menu option {:?}", line);
                writeln!(self.out, "{}", ConsoleFormatter::error("Choose Valid Option!"))?;
                continue;
            };

            let outcome = match choice {
                MenuChoice::AddStudent => self.add_student(),
                MenuChoice::ViewStudent => self.view_student(),
                MenuChoice::DeleteStudent => self.delete_student(),
                MenuChoice::AddSemester => self.add_semester(),
                MenuChoice::ListStudents => {
                    // The listing reports its own failures and keeps the loop alive
                    if let Err(e) = self.list_students() {
                        writeln!(
                            self.out,
                            "{}",
                            ConsoleFormatter::error(&format!("An error occurred: {}", e))
                        )?;
                    }
                    Ok(())
                }
                MenuChoice::SaveAndExit => {
                    self.session.save()?;
                    writeln!(
                        self.out,
                        "{}",
                        ConsoleFormatter::success(&format!(
                            "Records saved to {}.",
                            self.session.repository().location()
                        ))
                    )?;
                    return Ok(ShellExit::Saved);
                }
            };

            match outcome {
                Ok(()) => {}
                Err(Halt::Cancelled) => {
                    writeln!(self.out, "{}", ConsoleFormatter::warning("Cancelled."))?
                }
                Err(Halt::Closed) => return self.input_closed(),
                Err(Halt::Io(e)) => return Err(ShellError::Io(e)),
            }
        }
    }

    fn input_closed(&mut self) -> Result<ShellExit, ShellError> {
        warn!("Input closed before Save and Exit; records were not saved");
        writeln!(
            self.out,
            "\n{}",
            ConsoleFormatter::warning("Input closed. Exiting without saving.")
        )?;
        Ok(ShellExit::InputClosed)
    }

    fn ask(&mut self, label: &str) -> Result<String, Halt> {
        match self.input.read_line(label)? {
            LineEvent::Line(line) => Ok(line),
            LineEvent::Interrupted => Err(Halt::Cancelled),
            LineEvent::Closed => Err(Halt::Closed),
        }
    }

    fn report(&mut self, error: &DomainError) -> io::Result<()> {
        let message = match error {
            DomainError::StudentNotFound(_) => "Student not found.".to_string(),
            other => other.to_string(),
        };
        writeln!(self.out, "{}", ConsoleFormatter::error(&message))
    }

    fn add_student(&mut self) -> Result<(), Halt> {
        writeln!(self.out, "{}", ConsoleFormatter::section("Add New Student:"))?;

        let first_name = self.ask("First Name: ")?;
        let middle_name = self.ask("Middle Name: ")?;
        let last_name = self.ask("Last Name: ")?;
        let student_id = self.ask("Student ID (XXX): ")?;
        let joining_batch = self.ask("Joining Batch (XX): ")?;
        let department = self.ask("Department (CSE, BBA, EEE): ")?;
        let degree = self.ask("Degree (BSC, BBA, MSC): ")?;

        let input = AddStudentInput::new(
            first_name,
            last_name,
            student_id,
            joining_batch,
            department,
            degree,
        )
        .with_middle_name(middle_name);

        let added = AddStudentUseCase::new()
            .execute(self.session.store_mut(), input)
            .map(|_| ());
        match added {
            Ok(()) => writeln!(
                self.out,
                "{}",
                ConsoleFormatter::success("Student added successfully!")
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn view_student(&mut self) -> Result<(), Halt> {
        writeln!(self.out, "{}", ConsoleFormatter::section("View Student Details:"))?;
        let student_id = self.ask("Enter Student ID: ")?;

        match ViewStudentUseCase::new().execute(self.session.store_mut(), &student_id) {
            Ok(view) => {
                match ConsoleFormatter::student_json(&view.record) {
                    Ok(json) => writeln!(self.out, "{}", json)?,
                    Err(e) => writeln!(
                        self.out,
                        "{}",
                        ConsoleFormatter::error(&format!("Could not render record: {}", e))
                    )?,
                }
                write!(
                    self.out,
                    "{}",
                    ConsoleFormatter::sorted_courses(&view.sorted_semesters)
                )?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn delete_student(&mut self) -> Result<(), Halt> {
        writeln!(self.out, "{}", ConsoleFormatter::section("Delete Student:"))?;
        let student_id = self.ask("Enter Student ID: ")?;

        match DeleteStudentUseCase::new().execute(self.session.store_mut(), &student_id) {
            Ok(_) => writeln!(
                self.out,
                "{}",
                ConsoleFormatter::success("Student deleted successfully!")
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn add_semester(&mut self) -> Result<(), Halt> {
        writeln!(self.out, "{}", ConsoleFormatter::section("Add New Semester:"))?;
        let student_id = self.ask("Enter Student ID: ")?;

        let available = {
            let use_case = AddSemesterUseCase::new(self.session.catalog());
            use_case.available_courses(self.session.store(), &student_id)
        };
        let available = match available {
            Ok(courses) => courses,
            Err(e) => {
                self.report(&e)?;
                return Ok(());
            }
        };

        writeln!(self.out, "Available Courses:")?;
        write!(self.out, "{}", ConsoleFormatter::course_list(&available))?;

        let (semester_name, year) = if self.config.ask_semester_details {
            (self.ask("Semester Name: ")?, self.ask("Year: ")?)
        } else {
            (String::new(), String::new())
        };

        let line = self.ask("Enter course IDs to add (comma-separated): ")?;
        let input = AddSemesterInput::from_comma_separated(student_id, &line)
            .with_semester_name(semester_name)
            .with_year(year);

        let (store, catalog) = self.session.parts_mut();
        let added = AddSemesterUseCase::new(catalog).execute(store, input);
        match added {
            Ok(output) => {
                for miss in output.misses() {
                    writeln!(self.out, "{}", ConsoleFormatter::error(&format!("{}.", miss)))?;
                }
                writeln!(
                    self.out,
                    "{}",
                    ConsoleFormatter::success("Semester added successfully!")
                )?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn list_students(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            ConsoleFormatter::section("Students whose first name starts with A:")
        )?;
        let listed = ListStudentsUseCase::new().execute(self.session.store());
        write!(self.out, "{}", ConsoleFormatter::student_list(&listed))
    }
}
