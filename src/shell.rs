//! Interactive text menu over a [`Registry`].
//!
//! The shell is generic over its input and output so the same loop serves
//! stdin/stdout in the binary and in-memory buffers in tests. Input parsing
//! and validation live here; the registry only ever sees well-typed values.

use crate::compute::validation::{parse_coordinate, validate_coordinate};
use crate::error::{Result, RosterError};
use crate::registry::Registry;
use kdroster_types::record::Record;
use std::io::{BufRead, Write};

/// How records are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Display` line per record
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Register,
    Search,
    Nearest,
    List,
    Remove,
    Exit,
}

impl MenuOption {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Register),
            "2" => Some(Self::Search),
            "3" => Some(Self::Nearest),
            "4" => Some(Self::List),
            "5" => Some(Self::Remove),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
=========================================
   RECORD REGISTRY
=========================================
1. Register record
2. Search record (by name or external id)
3. Find nearest record
4. List all records
5. Remove record
6. Exit
Select an option: ";

/// Menu loop reading commands from `R` and writing results to `W`.
pub struct Shell<R, W> {
    registry: Registry,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let keep_going = match MenuOption::parse(&line) {
                Some(MenuOption::Exit) => false,
                Some(option) => {
                    self.dispatch(option)?;
                    true
                }
                None => {
                    writeln!(self.output, "\nInvalid option: {:?}", line.trim())?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "\nGoodbye!")?;
        Ok(())
    }

    /// Consume the shell, returning the registry with all changes applied.
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<()> {
        let outcome = match option {
            MenuOption::Register => self.register(),
            MenuOption::Search => self.search(),
            MenuOption::Nearest => self.nearest(),
            MenuOption::List => self.list(),
            MenuOption::Remove => self.remove(),
            MenuOption::Exit => Ok(()),
        };

        match outcome {
            Err(RosterError::InvalidInput(msg)) => {
                log::debug!("Rejected input: {}", msg);
                writeln!(self.output, "\n{}", msg)?;
                Ok(())
            }
            other => other,
        }
    }

    fn register(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Register Record ===")?;
        let name = self.prompt("Name: ")?;
        let external_id = self.prompt("External ID: ")?;
        let category = self.prompt("Category: ")?;
        let x = parse_coordinate("X", &self.prompt("X: ")?)?;
        let y = parse_coordinate("Y", &self.prompt("Y: ")?)?;
        validate_coordinate(x, y)?;

        let record = self.registry.register(name, external_id, category, x, y);
        writeln!(self.output, "\nRecord registered with ID {}.", record.id)?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Search Record ===")?;
        writeln!(self.output, "1. By name\n2. By external ID")?;
        let kind = self.prompt("Select an option: ")?;

        let (results, field) = match kind.trim() {
            "1" => {
                let query = self.prompt("Enter name or part of it: ")?;
                (self.registry.search_by_name(&query), "name")
            }
            "2" => {
                let query = self.prompt("Enter external ID or part of it: ")?;
                (self.registry.search_by_external_id(&query), "external ID")
            }
            other => {
                writeln!(self.output, "\nInvalid option: {:?}", other)?;
                return Ok(());
            }
        };

        if results.is_empty() {
            writeln!(self.output, "\nNo records found with that {}.", field)?;
        } else {
            writeln!(self.output, "\nResults found:")?;
            self.write_records(&results)?;
        }
        Ok(())
    }

    fn nearest(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Find Nearest Record ===")?;
        let x = parse_coordinate("Target X", &self.prompt("Target X: ")?)?;
        let y = parse_coordinate("Target Y", &self.prompt("Target Y: ")?)?;

        match self.registry.nearest(x, y) {
            Some(record) => {
                writeln!(self.output, "\nNearest record:")?;
                self.write_records(std::slice::from_ref(&record))?;
            }
            None => writeln!(self.output, "\nNo records registered.")?,
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== All Records ===")?;
        let records = self.registry.list();
        if records.is_empty() {
            writeln!(self.output, "No records registered.")?;
        } else {
            self.write_records(&records)?;
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Remove Record ===")?;
        let raw = self.prompt("Enter the ID of the record to remove: ")?;
        let id: u64 = raw.trim().parse().map_err(|_| {
            RosterError::InvalidInput(format!("ID must be a whole number, got: {:?}", raw.trim()))
        })?;

        if self.registry.remove(id) {
            writeln!(self.output, "\nRecord removed.")?;
        } else {
            writeln!(self.output, "\nRecord not found.")?;
        }
        Ok(())
    }

    fn write_records(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            match self.format {
                OutputFormat::Text => writeln!(self.output, "{}", record)?,
                OutputFormat::Json => {
                    writeln!(self.output, "{}", serde_json::to_string(record)?)?
                }
            }
        }
        Ok(())
    }

    /// Write `label` and read one line. End of input mid-form is an error.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()?.ok_or_else(|| {
            RosterError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input ended in the middle of a form",
            ))
        })
    }

    /// Next line without its line terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Registry, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(Registry::new(), Cursor::new(script.as_bytes()), &mut output);
        shell.run().unwrap();
        let registry = shell.into_registry();
        (registry, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (registry, output) = run_script("6\n");
        assert!(registry.is_empty());
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_eof_ends_loop() {
        let (_, output) = run_script("");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_register_then_list() {
        let (registry, output) = run_script("1\nAna Torres\n45678912\nSales\n1.5\n-2\n4\n6\n");
        assert_eq!(registry.len(), 1);
        assert!(output.contains("Record registered with ID 1."));
        assert!(output.contains(
            "ID: 1, Name: Ana Torres, External ID: 45678912, Category: Sales, Location: (1.5, -2)"
        ));
    }

    #[test]
    fn test_bad_coordinate_is_reported_and_loop_continues() {
        let (registry, output) = run_script("1\nAna\n1\nSales\nnorth\n4\n6\n");
        assert!(registry.is_empty());
        assert!(output.contains("X must be a number"));
        assert!(output.contains("No records registered."));
    }

    #[test]
    fn test_nearest_on_empty_registry() {
        let (_, output) = run_script("3\n0\n0\n6\n");
        assert!(output.contains("No records registered."));
    }

    #[test]
    fn test_search_by_external_id() {
        let script = "1\nAna\nAB-100\nSales\n0\n0\n\
                      1\nBruno\nCD-200\nOps\n5\n5\n\
                      2\n2\nab-\n6\n";
        let (_, output) = run_script(script);
        assert!(output.contains("Results found:"));
        assert!(output.contains("Name: Ana"));
        assert!(!output.contains("Name: Bruno,"));
    }

    #[test]
    fn test_search_no_results() {
        let (_, output) = run_script("2\n1\nzzz\n6\n");
        assert!(output.contains("No records found with that name."));
    }

    #[test]
    fn test_remove_known_and_unknown() {
        let script = "1\nAna\n1\nSales\n0\n0\n5\n1\n5\n1\n5\nabc\n6\n";
        let (registry, output) = run_script(script);
        assert!(registry.is_empty());
        assert!(output.contains("Record removed."));
        assert!(output.contains("Record not found."));
        assert!(output.contains("ID must be a whole number"));
    }

    #[test]
    fn test_invalid_menu_option() {
        let (_, output) = run_script("9\n6\n");
        assert!(output.contains("Invalid option: \"9\""));
    }

    #[test]
    fn test_json_output() {
        let mut output = Vec::new();
        let script = "1\nAna\n1\nSales\n3\n4\n3\n3\n4\n6\n";
        let mut shell = Shell::new(Registry::new(), Cursor::new(script.as_bytes()), &mut output)
            .with_format(OutputFormat::Json);
        shell.run().unwrap();
        drop(shell);

        let text = String::from_utf8(output).unwrap();
        let json_line = text
            .lines()
            .find(|line| line.starts_with('{'))
            .expect("a JSON record line");
        let record: Record = serde_json::from_str(json_line).unwrap();
        assert_eq!(record.name, "Ana");
        assert_eq!(record.x(), 3.0);
    }

    #[test]
    fn test_eof_mid_form_is_an_error() {
        let mut output = Vec::new();
        let mut shell = Shell::new(Registry::new(), Cursor::new(&b"1\nAna\n"[..]), &mut output);
        let err = shell.run().unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }
}
