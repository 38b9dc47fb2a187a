use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use glossa::{Glossa, LanguageTag};

use super::parse_language;

#[derive(Debug, Args)]
pub struct SpeakArgs {
    #[arg(short, long, value_parser = parse_language)]
    pub language: LanguageTag,

    /// Where to write the audio
    #[arg(short, long)]
    pub output: PathBuf,

    pub text: String,
}

pub async fn run(args: SpeakArgs, glossa: &Glossa) -> anyhow::Result<()> {
    let audio = glossa.synthesize(&args.text, &args.language).await?;
    if audio.is_empty() {
        tracing::warn!("Nothing to speak");
        return Ok(());
    }

    tokio::fs::write(&args.output, &audio)
        .await
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!("Wrote {} bytes to {}", audio.len(), args.output.display());
    Ok(())
}
