//! Ask command - answer a single question

use crate::tax::{Reply, Responder};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct AskCommand {
    /// Question text, e.g. "what documents do I need?"
    #[arg(required = true, num_args = 1..)]
    question: Vec<String>,

    /// Output as JSON, including how the question was classified
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct AnswerData<'a> {
    question: &'a str,
    reply: Reply<'static>,
    answer: String,
}

impl AskCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let question = self.question.join(" ");
        let responder = Responder::default();

        let Some(reply) = responder.classify(&question) else {
            anyhow::bail!("Question is empty.");
        };

        if self.json {
            let data = AnswerData {
                question: &question,
                answer: reply.text(),
                reply,
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            println!("{}", reply.text());
        }
        Ok(())
    }
}
