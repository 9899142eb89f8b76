//! Secret Digits CLI
//!
//! Interactive game session plus one-shot classification and statistics.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use secret_digits::{
    classify, digits, ResultDistribution, Secret, SessionController, SubmitOutcome,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Parser, Debug)]
#[command(name = "secret-digits", version, about = "Secret number guessing game")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive session (default)
    Play {
        #[arg(long, help = "Start with this secret instead of asking for one")]
        secret: Option<String>,
    },
    /// Classify a single guess against a secret
    Classify { secret: String, guess: String },
    /// Tally the results of every possible guess against a secret
    Stats {
        secret: String,
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Progress indicator on stderr that also times the work it covers.
///
/// Nothing is drawn when stderr is not a terminal.
struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    started: Instant,
}

impl Spinner {
    fn start(message: impl Into<String>) -> Self {
        let message = message.into();
        let running = Arc::new(AtomicBool::new(true));

        let handle = io::stderr().is_terminal().then(|| {
            let running = Arc::clone(&running);
            thread::spawn(move || {
                let mut stderr = io::stderr();
                for frame in SPINNER_FRAMES.iter().cycle() {
                    if !running.load(Ordering::Relaxed) {
                        break;
                    }
                    let _ = write!(stderr, "\r{} {}", frame, message);
                    let _ = stderr.flush();
                    thread::sleep(SPINNER_INTERVAL);
                }
                let width = message.chars().count() + 2;
                let _ = write!(stderr, "\r{:width$}\r", "", width = width);
                let _ = stderr.flush();
            })
        });

        Self { running, handle, started: Instant::now() }
    }

    /// Stop drawing and return how long the spinner ran.
    fn finish(mut self) -> Duration {
        let elapsed = self.started.elapsed();
        self.halt();
        elapsed
    }

    fn halt(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.halt();
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(8) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_prompt(session: &SessionController) {
    match session.secret() {
        Some(secret) => println!("Your secret number: {}", secret),
        None => println!("Enter your secret number"),
    }
}

fn print_history(session: &SessionController) {
    if session.history().is_empty() {
        println!("No guesses yet.");
        return;
    }
    for entry in session.history() {
        println!("{}: {}", entry.guess, entry.result);
    }
}

fn run_interactive(initial_secret: Option<String>) -> io::Result<()> {
    print_banner();

    let mut session = SessionController::new();
    if let Some(secret) = initial_secret {
        if let SubmitOutcome::Rejected(reason) = session.submit_text(&secret) {
            log::warn!("Ignoring --secret {:?}: {:?}", secret, reason);
        }
    }
    print_prompt(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            ":help" | ":h" | "?" => print_help(),
            ":quit" | ":q" | ":exit" => {
                println!("Goodbye!");
                break;
            }
            ":history" => print_history(&session),
            ":reset" | "nuevo" => {
                session.request_reset();
                print_prompt(&session);
            }
            input => match session.submit_text(input) {
                SubmitOutcome::SecretAccepted => print_prompt(&session),
                SubmitOutcome::Classified(entry) => {
                    println!("{}: {}", entry.guess, entry.result);
                    let solved = entry.result.is_win();
                    if solved {
                        println!("Solved in {} guesses.", session.history().len());
                    }
                }
                SubmitOutcome::Rejected(_) | SubmitOutcome::Reset => {}
            },
        }
    }

    Ok(())
}

fn run_classify(secret: &str, guess: &str) -> anyhow::Result<()> {
    let secret = Secret::parse(secret.trim()).context("Invalid secret")?;
    let guess = digits::parse(guess.trim()).context("Invalid guess")?;
    let result = classify(&secret, &guess)?;
    println!("{}", result);
    Ok(())
}

fn run_stats(secret: &str, top: usize) -> anyhow::Result<()> {
    let secret = Secret::parse(secret.trim()).context("Invalid secret")?;

    let spinner = Spinner::start(format!("Classifying every {}-digit guess...", secret.len()));
    let distribution = ResultDistribution::for_secret(&secret);
    let elapsed = spinner.finish();
    let distribution = distribution?;

    println!();
    println!("Secret: {}", distribution.secret());
    println!("Guesses surveyed: {}", distribution.total());
    println!("Distinct results: {}", distribution.distinct_results());
    println!("Expected guesses sharing a result: {:.1}", distribution.expected_bucket_size());
    println!();
    println!("{:>4} {:>10} {:>10} {:>8}", "#", "Result", "Guesses", "Share");
    println!("{}", "-".repeat(36));
    for (i, (result, count)) in distribution.top(top).iter().enumerate() {
        let pct = *count as f64 / distribution.total() as f64 * 100.0;
        println!("{:>4} {:>10} {:>10} {:>7.2}%", i + 1, result.to_string(), count, pct);
    }
    println!();
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { secret: None }) {
        Commands::Play { secret } => run_interactive(secret).context("Terminal I/O failed"),
        Commands::Classify { secret, guess } => run_classify(&secret, &guess),
        Commands::Stats { secret, top } => run_stats(&secret, top),
    }
}
