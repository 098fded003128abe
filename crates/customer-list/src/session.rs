//! Interactive menu session.
//!
//! A [`Session`] owns one [`RecordList`] for its whole lifetime, reads menu
//! choices and customer data from any [`BufRead`], and writes prompts and
//! listings to any [`Write`]. The list is released exactly once when the
//! session ends normally.

use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::Result;
use crate::list::RecordList;
use crate::record::Record;

/// Program title shown in the banner.
pub const PROGRAM_TITLE: &str = "Customer List Demo";

const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROGRAM_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// A parsed menu choice. Only the first character of the line counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `A`: enter a customer and append it.
    Append,
    /// `E`: end the session.
    Exit,
    /// `H` or `?`: show the help text.
    Help,
    /// `L`: print the whole list.
    List,
    /// The line was empty.
    Empty,
    /// Any other character.
    Invalid(char),
}

impl MenuChoice {
    /// Parse a line of menu input.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.chars().next() {
            None | Some('\n' | '\r') => Self::Empty,
            Some('a' | 'A') => Self::Append,
            Some('e' | 'E') => Self::Exit,
            Some('h' | 'H' | '?') => Self::Help,
            Some('l' | 'L') => Self::List,
            Some(other) => Self::Invalid(other),
        }
    }
}

/// One run of the customer list menu.
#[derive(Debug)]
pub struct Session<R, W> {
    config: Config,
    list: RecordList,
    input: R,
    output: W,
    appended: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty list.
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            config,
            list: RecordList::new(),
            input,
            output,
            appended: 0,
        }
    }

    /// The list owned by this session.
    #[must_use]
    pub fn list(&self) -> &RecordList {
        &self.list
    }

    /// Consume the session and hand back its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user exits or the input ends.
    ///
    /// Returns the number of customers appended during the session.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if a
    /// node cannot be allocated. An allocation failure ends the session
    /// immediately with the list in its last good state; on every other exit
    /// the list is released first.
    pub fn run(&mut self) -> Result<usize> {
        info!("session started");
        let outcome = self.menu_loop();
        if matches!(&outcome, Err(err) if err.is_allocation_failure()) {
            return outcome.map(|()| self.appended);
        }

        let released = self.release_list();
        outcome?;
        released?;
        info!(appended = self.appended, "session ended");
        Ok(self.appended)
    }

    fn menu_loop(&mut self) -> Result<()> {
        if self.config.menu.show_banner {
            self.write_banner()?;
        }

        loop {
            write!(self.output, "\n{}", self.config.menu.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("end of input");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Append => {
                    if !self.append_customer()? {
                        debug!("end of input while reading customer data");
                        return Ok(());
                    }
                }
                MenuChoice::Exit => return Ok(()),
                MenuChoice::Help => self.write_help()?,
                MenuChoice::List => self.list.print_all(&mut self.output)?,
                MenuChoice::Empty => writeln!(self.output, "Invalid choice: \"\"!")?,
                MenuChoice::Invalid(c) => writeln!(self.output, "Invalid choice: \"{c}\"!")?,
            }
        }
    }

    /// Prompt for one customer and append it. Returns `false` if the input
    /// ended before a name was entered.
    fn append_customer(&mut self) -> Result<bool> {
        writeln!(self.output, "Please enter customer data:")?;
        writeln!(self.output, "Customer entry")?;
        write!(self.output, "  Last name: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let record = Record::new(self.config.truncate_last_name(&line));

        let slot = match self.list.append(record) {
            Ok(slot) => slot,
            Err(err) => {
                error!(%err, len = self.list.len(), "could not append customer");
                return Err(err);
            }
        };
        self.appended += 1;

        if self.config.menu.allocation_trace {
            writeln!(self.output, "** allocated slot {slot} **")?;
            if self.list.len() == 1 {
                writeln!(self.output, "** inserting first element **")?;
            }
        }
        Ok(true)
    }

    fn release_list(&mut self) -> Result<usize> {
        let mut slots = Vec::new();
        let released = self.list.release_all_with(|slot, _| slots.push(slot));

        if self.config.menu.allocation_trace {
            if released == 0 {
                writeln!(self.output, "** list was empty -> released **")?;
            }
            for slot in slots {
                writeln!(self.output, "** released slot {slot} **")?;
            }
        }
        Ok(released)
    }

    /// Read one line without its line ending. Bytes that are not UTF-8 are
    /// replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write_banner(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "{PROGRAM_TITLE} v {PROGRAM_VERSION} (c) {PROGRAM_AUTHORS}\n\
             \"H\" for help, \"E\" to exit."
        )?;
        Ok(())
    }

    fn write_help(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n\
             You are in the help system of the customer list manager\n\
             by {PROGRAM_AUTHORS}.\n\
             Available choices:\n\
             A ....... Add a (further) customer\n\
             E ....... Exit the program\n\
             L ....... List the whole customer list\n\
             H ....... Show this help\n"
        )?;
        Ok(())
    }
}

/// Append every name to a fresh list, print it, and release it.
///
/// Returns the number of customers appended.
///
/// # Errors
///
/// Returns an error if a node cannot be allocated or writing fails.
pub fn run_batch<S, W>(config: &Config, names: &[S], out: &mut W) -> Result<usize>
where
    S: AsRef<str>,
    W: Write,
{
    let mut list = RecordList::new();
    for name in names {
        list.append(Record::new(config.truncate_last_name(name.as_ref())))?;
    }
    list.print_all(out)?;
    Ok(list.release_all())
}
