//! One-shot and interactive run modes.
//!
//! All decisions about when the run ends live here: lookups only return
//! errors, and [`report`] turns them into output and an exit.

use anyhow::Result;
use cwikli_acquire::normalize::normalize_word;
use cwikli_acquire::Fetcher;
use cwikli_model::notes::note_lines;
use cwikli_model::{Entry, LookupError, LookupRequest, RunMode, Session};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const WELCOME: &str = "Welcome to cwikli, the command line Wiktionary scraper.";
const LANGUAGE_PROMPT: &str =
    "Enter the two letter language code for modern languages, la for Latin, or grc for Greek: ";
const WORD_PROMPT: &str = "Enter a word, or Ctrl-c to exit or change languages: ";

/// How the process ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// A one-shot lookup finished, or a fatal error was reported.
    Done,
    /// The user interrupted a prompt.
    Interrupted,
}

impl Exit {
    pub fn code(self) -> i32 {
        match self {
            Exit::Done => 0,
            Exit::Interrupted => 1,
        }
    }
}

/// A source of answers to prompts.
pub(crate) trait Prompt {
    /// Show `prompt` and wait for a line. `None` means the user interrupted
    /// or input ended.
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompts on stdout and reads stdin; Ctrl-C at the prompt reads as `None`.
pub struct StdinPrompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Prompt for StdinPrompt {
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        // The interrupt listener only exists while waiting here, so Ctrl-C
        // during a lookup is not observed.
        tokio::select! {
            line = self.lines.next_line() => Ok(line?),
            signal = tokio::signal::ctrl_c() => {
                signal?;
                writeln!(stdout)?;
                tracing::debug!("Interrupted at prompt");
                Ok(None)
            }
        }
    }
}

/// Run the session in whichever mode its arguments call for.
pub(crate) async fn run<W: Write, P: Prompt>(
    fetcher: &Fetcher,
    session: &Session,
    out: &mut W,
    prompt: &mut P,
) -> Result<Exit> {
    match session.run_mode() {
        RunMode::OneShot(request) => one_shot(fetcher, &request, out).await,
        RunMode::Interactive {
            language_code,
            initial_word,
        } => interactive(fetcher, language_code, initial_word, out, prompt).await,
    }
}

async fn one_shot<W: Write>(fetcher: &Fetcher, request: &LookupRequest, out: &mut W) -> Result<Exit> {
    let request = LookupRequest::new(normalize_word(&request.word), &request.language_code);
    let result = cwikli_acquire::lookup(fetcher, &request).await;
    Ok(report(out, &request.language_code, result)?.unwrap_or(Exit::Done))
}

async fn interactive<W: Write, P: Prompt>(
    fetcher: &Fetcher,
    language_code: Option<String>,
    mut initial_word: Option<String>,
    out: &mut W,
    prompt: &mut P,
) -> Result<Exit> {
    let language_code = match language_code {
        Some(code) => code,
        None => {
            writeln!(out, "{WELCOME}")?;
            let Some(code) = prompt.ask(LANGUAGE_PROMPT).await? else {
                return Ok(Exit::Interrupted);
            };
            let code = code.trim().to_string();
            print_note(out, &code)?;
            code
        }
    };
    tracing::debug!(lang = %language_code, "Interactive session");

    loop {
        let input = match initial_word.take() {
            Some(word) => word,
            None => match prompt.ask(WORD_PROMPT).await? {
                Some(word) => word,
                None => return Ok(Exit::Interrupted),
            },
        };

        let word = normalize_word(&input);
        if word.is_empty() {
            continue;
        }

        let request = LookupRequest::new(word, &language_code);
        let result = cwikli_acquire::lookup(fetcher, &request).await;
        if let Some(exit) = report(out, &language_code, result)? {
            return Ok(exit);
        }
    }
}

/// Print the outcome of one lookup. Returns the exit to take when the error
/// was fatal, `None` when the run can go on.
fn report<W: Write>(
    out: &mut W,
    language_code: &str,
    result: Result<Vec<Entry>, LookupError>,
) -> Result<Option<Exit>> {
    match result {
        Ok(entries) => {
            render_entries(out, &entries)?;
            Ok(None)
        }
        Err(err) if !err.is_fatal() => {
            writeln!(out, "{err}")?;
            print_note(out, language_code)?;
            Ok(None)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Fatal lookup error");
            writeln!(out, "{err}")?;
            Ok(Some(Exit::Done))
        }
    }
}

/// Part of speech on one line, its definitions on the next.
fn render_entries<W: Write>(out: &mut W, entries: &[Entry]) -> std::io::Result<()> {
    for entry in entries {
        for line in entry.lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn print_note<W: Write>(out: &mut W, language_code: &str) -> std::io::Result<()> {
    for line in note_lines(language_code) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
