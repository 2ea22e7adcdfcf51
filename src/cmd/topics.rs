//! Topics command - list the questions the assistant has canned answers for

use crate::tax::{FaqEntry, KnowledgeBase};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct TopicsCommand {
    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct TopicRow {
    #[tabled(rename = "#")]
    precedence: usize,
    #[tabled(rename = "Keyword")]
    keyword: &'static str,
    #[tabled(rename = "Answer")]
    answer: String,
}

impl TopicsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let entries = KnowledgeBase::builtin().entries();

        if self.json {
            println!("{}", serde_json::to_string_pretty(entries)?);
            return Ok(());
        }

        let rows: Vec<TopicRow> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| TopicRow {
                precedence: i + 1,
                keyword: entry.keyword,
                answer: truncate(entry),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
        println!("Questions mentioning \"tax calculation\" or \"income\" are handled before these topics.");
        Ok(())
    }
}

fn truncate(entry: &FaqEntry) -> String {
    const MAX_CHARS: usize = 60;
    if entry.answer.chars().count() <= MAX_CHARS {
        entry.answer.to_string()
    } else {
        let head: String = entry.answer.chars().take(MAX_CHARS - 3).collect();
        format!("{head}...")
    }
}
