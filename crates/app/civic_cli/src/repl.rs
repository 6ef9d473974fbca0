//! Interactive chat loop.
//!
//! Commands: `/new` starts a new chat, `/history` reprints the transcript,
//! `/quit` (or end of input) exits.

use std::io::{BufRead, Write};

use crate::Result;
use crate::client::ChatBackend;
use crate::render::render_message;
use crate::session::ChatSession;

pub fn run<R: BufRead, W: Write>(
    backend: &dyn ChatBackend,
    session: &mut ChatSession,
    language: Option<&str>,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let persona = session.persona();
    print_last(session, out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/new" => {
                session.new_chat();
                print_last(session, out)?;
                continue;
            }
            "/history" => {
                for message in session.messages() {
                    writeln!(out, "{}\n", render_message(persona, message))?;
                }
                continue;
            }
            message => {
                session.push_user(message);
                match backend.send(persona, message, language) {
                    Ok(reply) => session.push_reply(&reply),
                    Err(e) => {
                        log::error!("{persona} request failed: {e}");
                        session.push_connection_error();
                    }
                }
                print_last(session, out)?;
            }
        }
    }

    Ok(())
}

fn print_last<W: Write>(session: &ChatSession, out: &mut W) -> Result<()> {
    if let Some(message) = session.last() {
        writeln!(out, "{}\n", render_message(session.persona(), message))?;
    }
    Ok(())
}
