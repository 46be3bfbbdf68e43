use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};
use tracing::warn;

use crate::error::is_command_failure;
use crate::session::{Session, Step};

const PROMPT: &str = "enter a command: ";
const EMPTY_INPUT: &str = "you didn't enter anything, please try again";

/// Reads command lines until `exit`, `close`, `ex` or end of input, then
/// saves. A failing command is reported and the prompt continues. The
/// session is closed even when the prompt itself fails.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    let prompted = prompt(session, input, &mut output);
    let closed = session.close();
    if let Err(err) = &closed {
        if prompted.is_err() {
            warn!(error = %format!("{err:#}"), "save on close failed");
        }
    }
    prompted?;
    closed?;
    writeln!(output, "good bye")?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(session: &mut Session, mut input: R, output: &mut W) -> Result<()> {
    writeln!(output, "welcome to addrbook")?;
    writeln!(output, "upcoming birthdays:\n{}", session.upcoming_summary())?;
    writeln!(output, "type 'help' to see available commands")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .with_context(|| "read command")?;
        if read == 0 {
            writeln!(output)?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            writeln!(output, "{EMPTY_INPUT}")?;
            continue;
        }

        match session.execute(line) {
            Ok(Step::Reply(message)) => writeln!(output, "{message}")?,
            Ok(Step::Exit) => return Ok(()),
            Err(err) if is_command_failure(&err) => writeln!(output, "error: {err}")?,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "command failed");
                writeln!(output, "unexpected error: {err}")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::session::Session;
    use addrbook_config::AppConfig;
    use addrbook_core::AddressBook;
    use addrbook_store::Store;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn session() -> Session {
        let store = Store::open_in_memory().expect("open in memory");
        store.migrate().expect("migrate");
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).expect("date");
        Session::new(AddressBook::new(), Some(store), AppConfig::default(), today)
    }

    fn transcript(session: &mut Session, input: &str) -> String {
        let mut output = Vec::new();
        run(session, Cursor::new(input.to_string()), &mut output).expect("run");
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn prompt_runs_commands_until_exit() {
        let mut session = session();
        let out = transcript(
            &mut session,
            "addcontact ivan 0987654321\n\nshowphone ivan\nexit\nshowphone ivan\n",
        );
        assert!(out.contains("added contact Ivan"));
        assert!(out.contains("you didn't enter anything"));
        assert!(out.contains("Ivan: 0987654321"));
        assert_eq!(out.matches("Ivan: 0987654321").count(), 1);
        assert!(out.ends_with("good bye\n"));
    }

    #[test]
    fn failures_do_not_stop_the_prompt() {
        let mut session = session();
        let out = transcript(&mut session, "addphone ivan 0987654321\nhelo\nhello\n");
        assert!(out.contains("error: contact not found"));
        assert!(out.contains("did you mean one of: 'hello', 'help'?"));
        assert!(out.contains("how can I help you?"));
    }

    #[test]
    fn undecodable_bytes_do_not_end_the_prompt() {
        let store = Store::open_in_memory().expect("open in memory");
        store.migrate().expect("migrate");
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).expect("date");
        let config = AppConfig {
            autosave: false,
            ..AppConfig::default()
        };
        let mut session = Session::new(AddressBook::new(), Some(store), config, today);

        let input = b"addcontact ivan 0987654321\nsearch \xff\xfe\nshowphone ivan\r\nexit\n";
        let mut output = Vec::new();
        run(&mut session, Cursor::new(input.to_vec()), &mut output).expect("run");

        let out = String::from_utf8(output).expect("utf8");
        assert!(out.contains("Ivan: 0987654321"));
        assert!(out.ends_with("good bye\n"));
        let stored = session
            .store
            .as_ref()
            .expect("store")
            .book()
            .load()
            .expect("load");
        assert_eq!(stored.len(), 1);
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("terminal gone"))
        }
    }

    #[test]
    fn read_failure_still_saves() {
        let store = Store::open_in_memory().expect("open in memory");
        store.migrate().expect("migrate");
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).expect("date");
        let config = AppConfig {
            autosave: false,
            ..AppConfig::default()
        };
        let mut session = Session::new(AddressBook::new(), Some(store), config, today);
        session.execute("addcontact ivan 0987654321").expect("add");

        let input = std::io::BufReader::new(FailingReader);
        let err = run(&mut session, input, Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("terminal gone"));
        let stored = session
            .store
            .as_ref()
            .expect("store")
            .book()
            .load()
            .expect("load");
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn start_shows_upcoming_birthdays() {
        let mut session = session();
        session
            .execute("addcontact olena 0661234567")
            .expect("add");
        session.execute("addbday olena 11.05.1990").expect("bday");
        let out = transcript(&mut session, "");
        assert!(out.contains("upcoming birthdays:\nOlena: 12.05.2025"));
    }
}
