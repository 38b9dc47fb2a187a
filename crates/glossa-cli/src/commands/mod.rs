//! CLI command implementations

use clap::Subcommand;
use glossa::{Glossa, LanguageTag};

pub mod build;
pub mod lookup;
pub mod segment;
pub mod speak;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into tokens
    Segment(segment::SegmentArgs),

    /// Look up words, or every token of a text
    Lookup(lookup::LookupArgs),

    /// Render numbered pinyin with tone marks
    Tone {
        pinyin: String,
    },

    /// Build a full dictionary index artifact from a source dump
    Build(build::BuildArgs),

    /// Fetch spoken audio for a text
    Speak(speak::SpeakArgs),
}

pub async fn run(command: Commands, glossa: &Glossa) -> anyhow::Result<()> {
    match command {
        Commands::Segment(args) => segment::run(args, glossa),
        Commands::Lookup(args) => lookup::run(args, glossa).await,
        Commands::Tone { pinyin } => {
            println!("{}", Glossa::render_tone(&pinyin));
            Ok(())
        }
        Commands::Build(args) => build::run(args).await,
        Commands::Speak(args) => speak::run(args, glossa).await,
    }
}

pub(crate) fn parse_language(code: &str) -> Result<LanguageTag, String> {
    let code = code.trim();
    if code.is_empty() {
        return Err("language code is empty".to_string());
    }
    Ok(LanguageTag::from_code(code))
}
