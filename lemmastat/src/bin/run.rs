use clap::Parser;
use lemmastat::{
    models::{ChainedModels, LocalModels},
    Analyzer, AnalyzerConfig, PipelineRegistry,
};
use std::{
    io::{self, Read},
    path::PathBuf,
    process,
    sync::Arc,
};

#[derive(Parser)]
#[command(version, about = "Prints lemma, bigram and trigram statistics of a text as JSON.")]
struct Opts {
    /// The text to analyze. Read from stdin if not given.
    text: Option<String>,
    /// Directory with `<lang>_lemmas.bin` or `<lang>_lemmas.tsv` models.
    #[arg(long, short)]
    model_dir: Option<PathBuf>,
    /// Base URL to download missing models from.
    #[cfg(feature = "download")]
    #[arg(long)]
    model_url: Option<String>,
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let text = match opts.text {
        Some(text) => text,
        None => {
            let mut text = String::new();
            if let Err(error) = io::stdin().read_to_string(&mut text) {
                eprintln!("could not read stdin: {}", error);
                process::exit(1);
            }
            text
        }
    };

    let mut models = ChainedModels::new();
    if let Some(dir) = opts.model_dir {
        models = models.with(LocalModels::new(dir));
    }
    #[cfg(feature = "download")]
    if let Some(url) = opts.model_url {
        models = models.with(lemmastat::models::RemoteModels::new(url, None));
    }

    let analyzer = Analyzer::new(
        AnalyzerConfig::default(),
        Arc::new(PipelineRegistry::new(models)),
    );

    let response = match analyzer.analyze(&text) {
        Ok(response) => response,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    };

    let json = if opts.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}
