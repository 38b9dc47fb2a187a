use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use glossa::LanguageTag;
use glossa_dictionary::{BuildProgress, SourceFormat, build_artifact};

use super::parse_language;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Language whose source format to read (zh: CC-CEDICT, ja: JMdict, ko: JSONL)
    #[arg(short, long, value_parser = parse_language)]
    pub language: LanguageTag,

    /// Raw dictionary dump
    #[arg(short, long)]
    pub source: PathBuf,

    /// Index artifact to write
    #[arg(short, long)]
    pub output: PathBuf,
}

pub async fn run(args: BuildArgs) -> anyhow::Result<()> {
    let format = SourceFormat::for_language(&args.language)?;
    tracing::info!(
        "Building {} index from {} into {}",
        format.name(),
        args.source.display(),
        args.output.display()
    );

    let (progress_tx, progress_rx) = kanal::bounded_async::<BuildProgress>(64);
    let progress_tx = progress_tx.to_sync();

    let logger = tokio::spawn(async move {
        while let Ok(progress) = progress_rx.recv().await {
            if progress.done {
                tracing::debug!("Source fully read");
            } else {
                tracing::info!(
                    "{} lines read, {} indexed, {} skipped",
                    progress.processed,
                    progress.indexed,
                    progress.skipped
                );
            }
        }
    });

    let source = args.source.clone();
    let output = args.output.clone();
    let report = tokio::task::spawn_blocking(move || {
        build_artifact(format, &source, &output, |progress| {
            if progress_tx.send(progress).is_err() {
                tracing::debug!("Progress logger gone");
            }
        })
    })
    .await
    .context("build task panicked")??;

    // the sender was dropped with the build closure, so the logger drains and ends
    logger.await.context("progress logger panicked")?;

    tracing::info!(
        "Wrote {}: {} keys from {} lines ({} indexed, {} skipped)",
        args.output.display(),
        report.keys,
        report.processed,
        report.indexed,
        report.skipped
    );
    Ok(())
}
