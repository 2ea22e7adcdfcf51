//! Chat command - interactive question and answer session over stdin

use crate::tax::{Conversation, Responder, Role};
use clap::Args;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Print the whole conversation as JSON when the session ends
    #[arg(long)]
    transcript: bool,
}

/// One chat session: the conversation so far and the pending input.
///
/// Submissions are handled one at a time; each replaces the conversation
/// with the extended one returned by the responder.
pub struct ChatSession {
    responder: Responder<'static>,
    conversation: Conversation,
    input: String,
}

impl ChatSession {
    pub fn new(responder: Responder<'static>) -> Self {
        ChatSession {
            responder,
            conversation: Conversation::seeded(),
            input: String::new(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    /// Submit the pending input. Returns the reply, or `None` if the input
    /// was blank and nothing changed.
    pub fn submit(&mut self) -> Option<&str> {
        let before = self.conversation.len();
        let turn = self.responder.respond(&self.input, &self.conversation);
        self.conversation = turn.conversation;
        self.input = turn.input;

        if self.conversation.len() == before {
            return None;
        }
        self.conversation.last().map(|m| m.content())
    }
}

impl ChatCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut session = ChatSession::new(Responder::default());
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for message in session.conversation().messages() {
            print_message(message.role(), message.content());
        }

        let mut line = String::new();
        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let question = line.trim_end_matches(['\r', '\n']);
            if matches!(question.trim(), "exit" | "quit") {
                break;
            }

            session.set_input(question);
            if let Some(reply) = session.submit() {
                print_message(Role::Assistant, reply);
            }
        }

        log::info!("Chat ended after {} messages", session.conversation().len());
        if self.transcript {
            println!("{}", serde_json::to_string_pretty(session.conversation())?);
        }
        Ok(())
    }
}

fn print_message(role: Role, content: &str) {
    match role {
        Role::Assistant => println!("assistant: {content}"),
        Role::User => println!("you: {content}"),
    }
}
