//! Line-oriented handoff session.
//!
//! # Responsibility
//! - Drive one `DraftMailbox` from stdin-style commands.
//! - Keep parsing separate from I/O so sessions are testable in memory.
//!
//! Commands (one per line):
//! - `stage <source> [--type <type>] | <content>`; everything after the
//!   first `|` is content, further `|` included
//! - `has`, `take`, `prefill`, `quit`

use anyhow::Result;
use lifeos_core::{Classifier, ComposerPrefill, DraftMailbox, DraftPayload};
use std::io::{BufRead, Write};

const STAGE_USAGE: &str = "usage: stage <source> [--type <type>] | <content>";
const TYPE_FLAG: &str = "--type";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Stage(DraftPayload),
    Has,
    Take,
    Prefill,
    Quit,
}

pub fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    match verb {
        "stage" => parse_stage(rest).map(SessionCommand::Stage),
        "has" => Ok(SessionCommand::Has),
        "take" => Ok(SessionCommand::Take),
        "prefill" => Ok(SessionCommand::Prefill),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn parse_stage(rest: &str) -> Result<DraftPayload, String> {
    let Some((head, content)) = rest.split_once('|') else {
        return Err(STAGE_USAGE.to_string());
    };
    let (source, kind) = match head.split_once(TYPE_FLAG) {
        Some((source, kind)) => (source.trim(), Some(kind.trim())),
        None => (head.trim(), None),
    };
    if source.is_empty() {
        return Err(STAGE_USAGE.to_string());
    }

    let payload = DraftPayload::new(content.trim(), source);
    match kind {
        Some("") => Err("`--type` needs a value".to_string()),
        Some(kind) => Ok(payload.with_kind(kind)),
        None => Ok(payload),
    }
}

/// Runs commands from `input` until EOF or `quit`.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    mailbox: &DraftMailbox,
    classifier: &Classifier,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(line.as_str()) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "error: {message}")?;
                continue;
            }
        };

        match command {
            SessionCommand::Stage(payload) => {
                let draft_id = mailbox.stage(payload);
                writeln!(output, "staged {draft_id}")?;
            }
            SessionCommand::Has => writeln!(output, "{}", mailbox.has_draft())?,
            SessionCommand::Take => match mailbox.get_draft() {
                Some(payload) => writeln!(
                    output,
                    "draft source={} type={} content={}",
                    payload.source,
                    payload.kind.as_deref().unwrap_or("-"),
                    payload.content
                )?,
                None => writeln!(output, "absent")?,
            },
            SessionCommand::Prefill => {
                let prefill = ComposerPrefill::from_mailbox(mailbox, classifier);
                if prefill.is_empty() {
                    writeln!(output, "prefill empty")?;
                } else {
                    writeln!(
                        output,
                        "prefill source={} tone={} length={} preview={}",
                        prefill.source.as_deref().unwrap_or("-"),
                        prefill.tone,
                        prefill.length.map(|length| length.as_str()).unwrap_or("-"),
                        prefill.preview.as_deref().unwrap_or("")
                    )?;
                }
            }
            SessionCommand::Quit => break,
        }
    }
    output.flush()?;
    Ok(())
}
