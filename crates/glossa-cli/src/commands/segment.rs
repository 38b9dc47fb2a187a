use clap::Args;
use glossa::{Glossa, LanguageTag};

use super::parse_language;

#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Language code (zh, ja, ko, or any other for whitespace splitting)
    #[arg(short, long, value_parser = parse_language)]
    pub language: LanguageTag,

    /// Print tokens with offsets as JSON
    #[arg(long)]
    pub json: bool,

    pub text: String,
}

pub fn run(args: SegmentArgs, glossa: &Glossa) -> anyhow::Result<()> {
    let tokens = glossa.segment(&args.text, &args.language);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    let words: Vec<&str> = tokens
        .iter()
        .filter(|t| !t.is_whitespace())
        .map(|t| t.text.as_str())
        .collect();
    println!("{}", words.join(" | "));
    Ok(())
}
