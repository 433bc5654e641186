use clap::Parser;
use colored::*;
use log::LevelFilter;
use medz::api::MedzApi;
use medz::commands::{CmdMessage, CmdResult, MessageLevel};
use medz::dispatch::dispatch;
use medz::error::{MedzError, Result};
use medz::model::{EpisodeDetails, ItemDetails};
use medz::provider::catalog::CatalogProvider;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let provider = CatalogProvider::load(&cli.catalog)?;
    let mut api = MedzApi::new(provider);

    // Show the source's settings up front, then drop into the loop.
    print_result(&api.settings()?);

    let mut rl = DefaultEditor::new().map_err(|e| MedzError::Io(std::io::Error::other(e)))?;
    loop {
        match rl.readline("medz> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match dispatch(&mut api, &line) {
                    Ok(Some(result)) => print_result(&result),
                    Ok(None) => {}
                    Err(e) => println!("{}", format!("** {}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(MedzError::Io(std::io::Error::other(e))),
        }
    }
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);

    for (i, r) in result.results.iter().enumerate() {
        println!("{:02}: {}", i + 1, r.title);
    }
    for (i, ep) in result.episodes.iter().enumerate() {
        println!("{:02} Episode: {}", i + 1, ep);
    }
    for setting in &result.settings {
        println!(
            "Setting: {}({}): {}",
            setting.label,
            setting.id.dimmed(),
            setting.value
        );
    }
    if let Some(details) = &result.details {
        print_details(details);
    }
    if let Some(episode) = &result.episode {
        print_episode(episode);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_details(details: &ItemDetails) {
    println!("{} ({})", details.title.bold(), details.kind);
    println!("--------------------------------");
    if let Some(premiered) = details.premiered {
        println!("  Premiered: {}", premiered);
    }
    if let Some(rating) = details.rating {
        println!("  Rating: {}", rating);
    }
    if let Some(plot) = &details.plot {
        println!("  Plot: {}", plot);
    }
}

fn print_episode(ep: &EpisodeDetails) {
    println!("{}", ep.title.bold());
    if let Some(plot) = &ep.plot {
        println!("  Plot: {}", plot);
    }
    if let Some(aired) = ep.aired {
        println!("  Aired: {}", aired);
    }
    if let Some(director) = &ep.director {
        println!("  Director: {}", director);
    }
    if let Some(rating) = ep.rating {
        println!("  Rating: {}", rating);
    }
    if let Some(thumbnail) = &ep.thumbnail {
        println!("  Thumbnail url: {}", thumbnail);
    }
    if !ep.credits.is_empty() {
        println!("  Credits:");
        for credit in &ep.credits {
            println!("    {}", credit);
        }
    }
    if !ep.actors.is_empty() {
        println!("  Actors:");
        for actor in &ep.actors {
            println!("    {}", actor);
        }
    }
}
