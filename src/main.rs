use clap::Parser;
use std::io::Read;
use tagtype::application::{InitService, ProcessTagService};
use tagtype::cli::{format_tag_report, format_type_list, Cli, Commands};
use tagtype::domain::types::{flatten, JsDocGrammar};
use tagtype::error::TagTypeError;
use tagtype::infrastructure::{decode_type_tree, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tagtype=error")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagTypeError> {
    match cli.command {
        Commands::Extract { tag, value, json } => {
            let config = match &cli.config {
                Some(path) => Config::load_from_file(path)?,
                None => Config::load_from_dir(&std::env::current_dir()?)?,
            };
            let service = ProcessTagService::new(&config)?;

            if json {
                let processed = service.process_whole(&tag, &value)?;
                println!("{}", serde_json::to_string_pretty(&processed.value)?);
            } else {
                let processed = service.process(&tag, &value)?;
                print!("{}", format_tag_report(&processed.tag, &processed.value));
            }
            Ok(())
        }
        Commands::Flatten { file } => {
            let contents = if file == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&file)?
            };

            let tree: serde_json::Value = serde_json::from_str(&contents)?;
            let node = decode_type_tree(&tree)?;
            print!("{}", format_type_list(&flatten(&node, &JsDocGrammar)));
            Ok(())
        }
        Commands::Init { path } => {
            let written = InitService::execute(&path)?;
            println!("Wrote {}", written.display());
            Ok(())
        }
    }
}
