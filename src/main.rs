use actix_web::{web, App, HttpServer};
use chrono::{SecondsFormat, Utc};
use clap::{Arg, ArgAction, Command};
use log::{error, info};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use wordscore::handlers::config::get_config;
use wordscore::handlers::score::top_words;
use wordscore::handlers::validation::{check_word, validate_word};
use wordscore::models::{AppState, Report, Strategy};
use wordscore::services::pipeline::{Pipeline, DEFAULT_TOP};
use wordscore::services::tables::ScoringConfig;
use wordscore::services::word_loader::{load_corpus, load_dictionary};

// Function to initialize logging
fn init_logging(log_file: Option<&String>) {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .expect("Failed to open log file");

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
}

fn load_state(
    corpus_path: &str,
    dictionary_path: &str,
    config_path: Option<&String>,
) -> wordscore::Result<AppState> {
    let config = match config_path {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    let dictionary = load_dictionary(Path::new(dictionary_path))?;
    let corpus = load_corpus(Path::new(corpus_path))?;

    Ok(AppState {
        corpus: Arc::new(corpus),
        dictionary: Arc::new(dictionary),
        config: Arc::new(config),
    })
}

fn report(state: &AppState, strategy: Strategy, top: usize) -> io::Result<()> {
    let groups = Pipeline::new(&*state.dictionary, &state.config)
        .strategy(strategy)
        .group(&state.corpus);

    let report = Report {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        strategy,
        corpus_words: state.corpus.len(),
        playable_words: groups.word_count(),
        groups: groups.top(top),
    };

    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let matches = Command::new("wordscore")
        .version("0.1")
        .about("Scores the words of a text as Scrabble plays and reports the best ones")
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .num_args(1)
                .required(true)
                .help("Text file whose words are scored"),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .num_args(1)
                .required(true)
                .help("Word list, one word per line"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .num_args(1)
                .help("JSON file with letterScores and availableLetters (26 entries each)"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Score the corpus on all cores"),
        )
        .arg(
            Arg::new("top")
                .long("top")
                .num_args(1)
                .value_parser(clap::value_parser!(usize))
                .default_value("3")
                .help("Number of score groups to report"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("serve")
                .long("serve")
                .action(ArgAction::SetTrue)
                .help("Serve scores over HTTP instead of printing a report"),
        )
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:2345")
                .help("Specify the listen address (e.g., 0.0.0.0:2345)"),
        )
        .get_matches();

    let corpus_path = matches
        .get_one::<String>("corpus")
        .expect("corpus is a required argument");
    let dictionary_path = matches
        .get_one::<String>("dictionary")
        .expect("dictionary is a required argument");
    let config_path = matches.get_one::<String>("config");
    let log_file = matches.get_one::<String>("log-file");
    let top = matches.get_one::<usize>("top").copied().unwrap_or(DEFAULT_TOP);
    let strategy = if matches.get_flag("parallel") {
        Strategy::Parallel
    } else {
        Strategy::Sequential
    };

    init_logging(log_file);

    let state = match load_state(corpus_path, dictionary_path, config_path) {
        Ok(state) => state,
        Err(e) => {
            error!("{}", e);
            eprintln!("wordscore: {}", e);
            std::process::exit(1);
        }
    };

    if !matches.get_flag("serve") {
        return report(&state, strategy, top);
    }

    let listen_host = matches
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    info!("Listening on {}", listen_host);

    let shared_state = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .service(get_config)
            .service(check_word)
            .service(validate_word)
            .service(top_words)
    })
    .bind(&listen_host)?
    .run()
    .await
}
