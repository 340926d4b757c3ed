use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use taskdesk_types::{OrderDirection, OrderField, TaskFilter, TaskOrder, TaskPriority, TaskStatus};

/// Terminal prompt over arbitrary reader/writer pairs so the interactive
/// flows stay testable with in-memory buffers.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{} {msg}", "✓".green().bold())
    }

    pub fn warn(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{} {msg}", "⚠".yellow().bold())
    }

    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{} {msg}", "✖".red().bold())
    }

    /// One trimmed input line, `None` on end of input.
    pub fn line(&mut self, msg: &str) -> io::Result<Option<String>> {
        write!(self.output, "{msg}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Re-prompts until the operator enters a parseable number.
    pub fn read_number<T: FromStr>(&mut self, msg: &str) -> io::Result<Option<T>> {
        loop {
            match self.line(msg)? {
                None => return Ok(None),
                Some(raw) => match raw.parse() {
                    Ok(value) => return Ok(Some(value)),
                    Err(_) => self.warn("Enter a whole number")?,
                },
            }
        }
    }

    pub fn confirm(&mut self, msg: &str) -> io::Result<bool> {
        match self.line(msg)? {
            Some(answer) => Ok(matches!(
                answer.to_lowercase().as_str(),
                "y" | "yes"
            )),
            None => Ok(false),
        }
    }

    /// Numbered priority pick; an empty answer keeps `current`.
    pub fn read_priority(&mut self, current: TaskPriority) -> io::Result<TaskPriority> {
        let msg = format!("Priority: 1=High, 2=Medium, 3=Low [ENTER = {current}]: ");
        loop {
            match self.line(&msg)? {
                None => return Ok(current),
                Some(raw) => match raw.as_str() {
                    "" => return Ok(current),
                    "1" => return Ok(TaskPriority::High),
                    "2" => return Ok(TaskPriority::Medium),
                    "3" => return Ok(TaskPriority::Low),
                    _ => self.warn("Pick 1, 2 or 3")?,
                },
            }
        }
    }

    /// Offers the opposite status; an empty answer keeps `current`.
    pub fn read_status_toggle(&mut self, current: TaskStatus) -> io::Result<TaskStatus> {
        let next = current.toggled();
        let msg = format!("Current status: {current}. Switch to {next}? 1=yes, ENTER=keep: ");
        loop {
            match self.line(&msg)? {
                None => return Ok(current),
                Some(raw) => match raw.as_str() {
                    "" => return Ok(current),
                    "1" => return Ok(next),
                    _ => self.warn("Pick 1 or press ENTER")?,
                },
            }
        }
    }

    pub fn read_order(&mut self) -> io::Result<Option<TaskOrder>> {
        let field = loop {
            match self
                .read_number::<u32>("Order by: 1=Title, 2=Priority, 3=Status, 4=Created, 0=Cancel: ")?
            {
                None | Some(0) => return Ok(None),
                Some(1) => break OrderField::Title,
                Some(2) => break OrderField::Priority,
                Some(3) => break OrderField::Status,
                Some(4) => break OrderField::CreatedAt,
                Some(_) => self.warn("Pick one of the listed fields")?,
            }
        };

        let direction = loop {
            match self.read_number::<u32>("Direction: 1=Ascending, 2=Descending: ")? {
                None => return Ok(None),
                Some(1) => break OrderDirection::Asc,
                Some(2) => break OrderDirection::Desc,
                Some(_) => self.warn("Pick 1 or 2")?,
            }
        };

        Ok(Some(TaskOrder { field, direction }))
    }

    /// Accumulates criteria until the operator is done. Cancelling a field
    /// pick ends the selection but keeps what was already chosen.
    pub fn read_filter(&mut self) -> io::Result<TaskFilter> {
        let mut filter = TaskFilter::default();
        loop {
            let choice = match self
                .read_number::<u32>("Filter by: 1=Title, 2=Priority, 3=Status, 0=Done: ")?
            {
                None | Some(0) => break,
                Some(choice) => choice,
            };

            match choice {
                1 => {
                    let Some(value) = self.read_title_filter()? else {
                        break;
                    };
                    if filter.title_contains.is_some() {
                        self.warn("Replacing the previous title filter")?;
                    }
                    filter.title_contains = Some(value);
                }
                2 => {
                    let Some(value) = self.read_priority_filter()? else {
                        break;
                    };
                    if filter.priority.is_some() {
                        self.warn("Replacing the previous priority filter")?;
                    }
                    filter.priority = Some(value);
                }
                3 => {
                    let Some(value) = self.read_status_filter()? else {
                        break;
                    };
                    if filter.status.is_some() {
                        self.warn("Replacing the previous status filter")?;
                    }
                    filter.status = Some(value);
                }
                _ => {
                    self.warn("Pick one of the listed fields")?;
                    continue;
                }
            }

            if !self.confirm("Add another filter? (y/n): ")? {
                break;
            }
        }

        Ok(filter)
    }

    fn read_title_filter(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.line("Title contains (0=Cancel): ")? {
                None => return Ok(None),
                Some(raw) if raw == "0" => return Ok(None),
                Some(raw) if raw.is_empty() => {}
                Some(raw) => return Ok(Some(raw)),
            }
        }
    }

    fn read_priority_filter(&mut self) -> io::Result<Option<TaskPriority>> {
        loop {
            match self.line("Priority: 1=High, 2=Medium, 3=Low, 0=Cancel: ")? {
                None => return Ok(None),
                Some(raw) => match raw.as_str() {
                    "0" => return Ok(None),
                    "1" => return Ok(Some(TaskPriority::High)),
                    "2" => return Ok(Some(TaskPriority::Medium)),
                    "3" => return Ok(Some(TaskPriority::Low)),
                    _ => self.warn("Pick 1, 2, 3 or 0")?,
                },
            }
        }
    }

    fn read_status_filter(&mut self) -> io::Result<Option<TaskStatus>> {
        loop {
            match self.line("Status: 1=Done, 2=Pending, 0=Cancel: ")? {
                None => return Ok(None),
                Some(raw) => match raw.as_str() {
                    "0" => return Ok(None),
                    "1" => return Ok(Some(TaskStatus::Done)),
                    "2" => return Ok(Some(TaskStatus::Pending)),
                    _ => self.warn("Pick 1, 2 or 0")?,
                },
            }
        }
    }
}

#[cfg(test)]
impl<R: BufRead> Prompt<R, Vec<u8>> {
    pub fn output_utf8(&self) -> String {
        String::from_utf8(self.output.clone()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<String>, Vec<u8>> {
        Prompt::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(prompt: &Prompt<Cursor<String>, Vec<u8>>) -> String {
        prompt.output_utf8()
    }

    #[test]
    fn line_trims_and_detects_eof() {
        let mut p = prompt("  hello  \n");
        assert_eq!(p.line("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(p.line("> ").unwrap(), None);
    }

    #[test]
    fn read_number_retries_until_valid() {
        let mut p = prompt("abc\n\n42\n");
        assert_eq!(p.read_number::<u32>("n: ").unwrap(), Some(42));
        assert!(output(&p).contains("Enter a whole number"));
    }

    #[test]
    fn read_number_none_on_eof() {
        let mut p = prompt("");
        assert_eq!(p.read_number::<u32>("n: ").unwrap(), None);
    }

    #[test]
    fn confirm_accepts_y_and_yes_only() {
        assert!(prompt("y\n").confirm("? ").unwrap());
        assert!(prompt("YES\n").confirm("? ").unwrap());
        assert!(!prompt("n\n").confirm("? ").unwrap());
        assert!(!prompt("\n").confirm("? ").unwrap());
        assert!(!prompt("").confirm("? ").unwrap());
    }

    #[test]
    fn read_priority_keeps_current_on_empty() {
        let mut p = prompt("\n");
        assert_eq!(
            p.read_priority(TaskPriority::Low).unwrap(),
            TaskPriority::Low
        );
    }

    #[test]
    fn read_priority_picks_and_retries() {
        let mut p = prompt("9\n1\n");
        assert_eq!(
            p.read_priority(TaskPriority::Medium).unwrap(),
            TaskPriority::High
        );
        assert!(output(&p).contains("Pick 1, 2 or 3"));
    }

    #[test]
    fn read_status_toggle_switches_and_keeps() {
        let mut p = prompt("1\n");
        assert_eq!(
            p.read_status_toggle(TaskStatus::Pending).unwrap(),
            TaskStatus::Done
        );

        let mut p = prompt("\n");
        assert_eq!(
            p.read_status_toggle(TaskStatus::Done).unwrap(),
            TaskStatus::Done
        );

        let mut p = prompt("1\n");
        assert_eq!(
            p.read_status_toggle(TaskStatus::Done).unwrap(),
            TaskStatus::Pending
        );
    }

    #[test]
    fn read_order_full_pick() {
        let mut p = prompt("4\n2\n");
        assert_eq!(
            p.read_order().unwrap(),
            Some(TaskOrder {
                field: OrderField::CreatedAt,
                direction: OrderDirection::Desc,
            })
        );
    }

    #[test]
    fn read_order_cancelled() {
        let mut p = prompt("0\n");
        assert_eq!(p.read_order().unwrap(), None);
    }

    #[test]
    fn read_filter_combines_criteria() {
        let mut p = prompt("1\nmilk\ny\n2\n1\nn\n");
        let filter = p.read_filter().unwrap();
        assert_eq!(filter.title_contains.as_deref(), Some("milk"));
        assert_eq!(filter.priority, Some(TaskPriority::High));
        assert_eq!(filter.status, None);
    }

    #[test]
    fn read_filter_replaces_repeated_field() {
        let mut p = prompt("3\n1\ny\n3\n2\nn\n");
        let filter = p.read_filter().unwrap();
        assert_eq!(filter.status, Some(TaskStatus::Pending));
        assert!(output(&p).contains("Replacing the previous status filter"));
    }

    #[test]
    fn read_filter_cancelled_immediately_is_empty() {
        let mut p = prompt("0\n");
        assert!(p.read_filter().unwrap().is_empty());
    }

    #[test]
    fn read_filter_field_cancel_keeps_earlier_criteria() {
        let mut p = prompt("1\nmilk\ny\n2\n0\n");
        let filter = p.read_filter().unwrap();
        assert_eq!(filter.title_contains.as_deref(), Some("milk"));
        assert_eq!(filter.priority, None);
    }
}
