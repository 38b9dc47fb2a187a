use clap::Args;
use glossa::{Glossa, LanguageTag, LookupResult, NO_DEFINITION};

use super::parse_language;

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(short, long, value_parser = parse_language)]
    pub language: LanguageTag,

    /// Segment each argument first and look up every token
    #[arg(long)]
    pub text: bool,

    #[arg(long)]
    pub json: bool,

    #[arg(required = true)]
    pub words: Vec<String>,
}

pub async fn run(args: LookupArgs, glossa: &Glossa) -> anyhow::Result<()> {
    if args.text {
        for text in &args.words {
            let annotated = glossa.annotate(text, &args.language).await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&annotated)?);
                continue;
            }
            for item in annotated.iter().filter(|a| !a.token.is_whitespace()) {
                print_result(&item.token.text, item.lookup.as_ref(), item.hint);
            }
        }
        return Ok(());
    }

    for word in &args.words {
        let result = glossa.resolve(word, &args.language).await;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            let hint = glossa.miss_hint(word, &args.language);
            print_result(word, result.as_ref(), hint);
        }
    }
    Ok(())
}

fn print_result(surface: &str, result: Option<&LookupResult>, hint: Option<&str>) {
    let Some(result) = result else {
        match hint {
            Some(hint) => println!("{surface}: not found. {hint}"),
            None => println!("{surface}: not found"),
        }
        return;
    };

    if result.reading.is_empty() {
        println!("{} ({})", result.word, result.source.as_str());
    } else {
        println!("{} [{}] ({})", result.word, result.reading, result.source.as_str());
    }
    if result.definition.is_empty() {
        println!("  {NO_DEFINITION}");
    } else {
        println!("  {}", result.definition);
    }

    if let Some(conjugation) = &result.conjugation {
        println!("  {} = {} + {} ({})", surface, conjugation.stem, conjugation.ending, conjugation.kind);
    }
    if let Some(level) = result.jlpt {
        println!("  JLPT N{level}");
    }
    for note in &result.notes {
        println!("  note: {note}");
    }
    for example in &result.examples {
        println!("  e.g. {example}");
    }
    for component in &result.components {
        println!("  {} [{}] {}", component.character, component.reading, component.definition);
    }
}
