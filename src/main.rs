//! Comanche Word Game - CLI
//!
//! Daily word game with TUI and plain CLI modes, plus a few helper commands.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use comanche_word_game::{
    commands::{analyze_word, daily_word_for, run_simple, score_words},
    game::{GameConfig, Session, daily},
    output::{print_analysis_result, print_daily_result, print_score_result},
    wordlists::{Dictionary, WordlistSource},
};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "comanche_word_game",
    about = "Guess the daily four-symbol word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordlistSource,

    /// Use the word of this day instead of today (YYYY-MM-DD)
    #[arg(short, long, global = true, value_parser = daily::parse_date)]
    date: Option<NaiveDate>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Random secret instead of the daily word
        #[arg(short, long)]
        practice: bool,
    },

    /// Simple CLI game (type whole words, no TUI)
    Simple {
        /// Random secret instead of the daily word
        #[arg(short, long)]
        practice: bool,
    },

    /// Score a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Show which word of the list belongs to the day
    Daily {
        /// Print the word itself
        #[arg(long)]
        reveal: bool,
    },

    /// Analyze how a guess splits the word list
    Analyze {
        /// Word to analyze
        word: String,
    },
}

impl Commands {
    const fn practice(&self) -> bool {
        match self {
            Self::Play { practice } | Self::Simple { practice } => *practice,
            _ => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { practice: false });

    // The TUI owns the terminal, so stay quiet there unless asked
    setup_logging(cli.verbose, matches!(command, Commands::Play { .. }));

    let config = GameConfig {
        date: cli.date.unwrap_or_else(daily::today),
        wordlist: cli.wordlist,
        practice: command.practice(),
        ..GameConfig::default()
    };

    let dictionary = config
        .wordlist
        .load()
        .with_context(|| format!("failed to load word list {:?}", config.wordlist))?;

    match command {
        Commands::Play { .. } => run_play_command(&config, &dictionary),
        Commands::Simple { .. } => run_simple_command(&config, &dictionary),
        Commands::Score { guess, answer } => {
            let result = score_words(&guess, &answer).map_err(|e| anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Daily { reveal } => {
            let result = daily_word_for(&config, &dictionary).map_err(|e| anyhow!(e))?;
            print_daily_result(&result, reveal);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary).map_err(|e| anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn setup_logging(verbosity: u8, quiet_by_default: bool) {
    let level = match verbosity {
        0 if quiet_by_default => "off",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn new_session<'a>(config: &GameConfig, dictionary: &'a Dictionary) -> Result<Session<'a>> {
    let secret = config
        .choose_secret(dictionary)
        .context("word list is empty")?
        .clone();
    tracing::info!(practice = config.practice, date = %config.date, "starting game");
    Ok(Session::new(dictionary, secret).with_title(&config.title))
}

fn run_play_command(config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    use comanche_word_game::interactive::{App, run_tui};

    let app = App::new(new_session(config, dictionary)?, config);
    if let Some(share) = run_tui(app)? {
        println!("{share}");
    }
    Ok(())
}

fn run_simple_command(config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    let mut session = new_session(config, dictionary)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}
