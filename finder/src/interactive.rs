//! Line-oriented session
//!
//! Each input line becomes one [`FinderEvent`]. The document is edited
//! between `:edit` and `:end`, and committed when `:end` arrives, matching
//! a commit on focus loss. Every other non-command line is the new query.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use ypf_core::{FinderEvent, FinderState};

use crate::commands::render_keys;

const HELP: &str = "\
Commands:
  :edit         start entering a new document, finish with :end
  :load PATH    replace the document with the contents of PATH
  :keys         list every key path
  :help         show this help
  :quit         leave the session
Any other line is a query: an exact dotted path, or the end or start of one.";

enum Command<'a> {
    Edit,
    Load(&'a str),
    Keys,
    Help,
    Quit,
    Query(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim_end() {
        ":edit" => Command::Edit,
        ":keys" => Command::Keys,
        ":help" => Command::Help,
        ":quit" | ":q" => Command::Quit,
        other => match other.strip_prefix(":load ") {
            Some(path) => Command::Load(path.trim()),
            None => Command::Query(line),
        },
    }
}

struct Session<W> {
    state: FinderState,
    writer: W,
}

impl<W: AsyncWrite + Unpin> Session<W> {
    async fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    fn apply(&mut self, event: FinderEvent) {
        let placeholder = FinderState::empty(self.state.config().clone());
        let state = std::mem::replace(&mut self.state, placeholder);
        self.state = state.apply(event);
    }

    async fn commit(&mut self, source: String) -> anyhow::Result<()> {
        if source.is_empty() {
            return self.say("empty document ignored").await;
        }
        self.apply(FinderEvent::SourceCommitted(source));
        match self.state.last_error() {
            Some(err) => {
                let message = format!("parse error: {err}\nkeeping the previous document");
                self.say(&message).await?;
            }
            None => {
                let message = format!("document loaded: {} keys", self.state.loaded().index().len());
                self.say(&message).await?;
                self.show_resolution().await?;
            }
        }
        Ok(())
    }

    async fn load(&mut self, path: &str) -> anyhow::Result<()> {
        match tokio::fs::read_to_string(path).await {
            Ok(source) => self.commit(source).await,
            Err(err) => {
                tracing::warn!(path, error = %err, "failed to read document");
                self.say(&format!("cannot read {path}: {err}")).await
            }
        }
    }

    async fn show_keys(&mut self) -> anyhow::Result<()> {
        let keys = render_keys(self.state.loaded().index(), self.state.config())?;
        if keys.is_empty() {
            self.say("(no keys)").await
        } else {
            self.say(&keys).await
        }
    }

    async fn show_resolution(&mut self) -> anyhow::Result<()> {
        let Some(resolution) = self.state.resolution() else {
            return Ok(());
        };
        let config = self.state.config();
        let text = ypf_resolve::render(&resolution, config.format, config.render_options())
            .context("failed to render result")?;
        self.say(&text).await
    }
}

/// Run a session until `:quit` or end of input
///
/// Returns the final state. A document still being edited when input ends
/// is committed.
///
/// # Errors
/// Fails only on I/O errors of `reader` or `writer`.
pub async fn run_session<R, W>(state: FinderState, reader: R, writer: W) -> anyhow::Result<FinderState>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session { state, writer };
    let mut lines = reader.lines();
    let mut draft: Option<Vec<String>> = None;

    let greeting = format!(
        "{} keys loaded. Type a query, or :help for commands.",
        session.state.loaded().index().len()
    );
    session.say(&greeting).await?;

    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        if let Some(buffer) = draft.as_mut() {
            if line.trim_end() == ":end" {
                let source = finish_draft(draft.take().unwrap_or_default());
                session.commit(source).await?;
            } else {
                buffer.push(line);
            }
            continue;
        }

        match parse_command(&line) {
            Command::Edit => {
                draft = Some(Vec::new());
                session.say("enter the document, finish with :end").await?;
            }
            Command::Load(path) => session.load(path).await?,
            Command::Keys => session.show_keys().await?,
            Command::Help => session.say(HELP).await?,
            Command::Quit => break,
            Command::Query(query) => {
                session.apply(FinderEvent::QueryChanged(query.to_string()));
                session.show_resolution().await?;
            }
        }
    }

    if let Some(buffer) = draft {
        session.commit(finish_draft(buffer)).await?;
    }
    Ok(session.state)
}

fn finish_draft(lines: Vec<String>) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut source = lines.join("\n");
    source.push('\n');
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert!(matches!(parse_command(":edit"), Command::Edit));
        assert!(matches!(parse_command(":keys "), Command::Keys));
        assert!(matches!(parse_command(":load a.yaml"), Command::Load("a.yaml")));
        assert!(matches!(parse_command(":q"), Command::Quit));
    }

    #[test]
    fn other_lines_are_queries() {
        assert!(matches!(parse_command("hello.from"), Command::Query("hello.from")));
        assert!(matches!(parse_command(":unknown"), Command::Query(":unknown")));
        assert!(matches!(parse_command(""), Command::Query("")));
    }

    #[test]
    fn draft_gets_trailing_newline() {
        assert_eq!(finish_draft(vec!["a: 1".into(), "b: 2".into()]), "a: 1\nb: 2\n");
        assert_eq!(finish_draft(Vec::new()), "");
    }
}
