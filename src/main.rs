use clap::{Parser, Subcommand};

mod cmd;
mod tax;

#[derive(Parser, Debug)]
#[command(version, about = "Income tax calculator and tax FAQ assistant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate tax payable on a taxable income
    Tax(cmd::tax::TaxCommand),
    /// Suggest tax-saving investments for a total income
    Suggest(cmd::suggest::SuggestCommand),
    /// Ask the tax assistant a single question
    Ask(cmd::ask::AskCommand),
    /// Chat with the tax assistant
    Chat(cmd::chat::ChatCommand),
    /// Display a tax report with deduction breakdown
    Report(cmd::report::ReportCommand),
    /// List the topics the assistant can answer
    Topics(cmd::topics::TopicsCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Tax(tax) => tax.exec(),
        Command::Suggest(suggest) => suggest.exec(),
        Command::Ask(ask) => ask.exec(),
        Command::Chat(chat) => chat.exec(),
        Command::Report(report) => report.exec(),
        Command::Topics(topics) => topics.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
