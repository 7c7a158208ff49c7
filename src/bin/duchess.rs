//! Play Duchess at the terminal.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use duchess::{DuchessBuilder, DuchessError, InteractionSurface, MatchOutcome, Options, Result};

/// Hot-seat Duchess for two or more players.
#[derive(Debug, Parser)]
#[command(name = "duchess", version, about = "Play Duchess at the terminal")]
struct Cli {
    /// Player names, in seat order.
    #[arg(value_name = "NAME", num_args = 2.., required = true)]
    players: Vec<String>,

    /// Seed for the shuffles. Omit for a random match.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Do not wait for Enter after each message.
    #[arg(long)]
    no_pause: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Prompts on a writer, answers from a reader.
struct Console<R, W> {
    input: R,
    output: W,
    pause: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Err(DuchessError::Interaction("input closed".to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").map_err(io_error)?;
        self.output.flush().map_err(io_error)
    }
}

impl<R: BufRead, W: Write> InteractionSurface for Console<R, W> {
    fn ask_choice(&mut self, prompt: &str, options: &Options, rejection: Option<&str>) -> Result<String> {
        if options.is_empty() {
            return Err(DuchessError::Interaction("prompt offers no options".to_string()));
        }
        loop {
            self.write(prompt)?;
            let answer = self.read_line()?;
            if options.contains(&answer) {
                return Ok(answer);
            }
            if let Some(note) = rejection {
                self.write(&format!("{note}\n"))?;
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.write(&format!("{message}\n"))?;
        if self.pause {
            self.write("\nPress Enter to continue")?;
            self.read_line()?;
        }
        Ok(())
    }
}

fn io_error(err: io::Error) -> DuchessError {
    DuchessError::Interaction(err.to_string())
}

fn init_logging(verbosity: u8) {
    let directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("DUCHESS_LOG").unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut builder = DuchessBuilder::new().players(cli.players);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }

    let mut game = match builder.build() {
        Ok(game) => game,
        Err(err) => {
            eprintln!("duchess: {err}");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let mut console = Console {
        input: stdin.lock(),
        output: io::stdout(),
        pause: !cli.no_pause,
    };

    match game.run(&mut console) {
        Ok(MatchOutcome::Winner(_)) => ExitCode::SUCCESS,
        Ok(MatchOutcome::Draw) => {
            println!("Nobody is left standing.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(seed = game.seed(), turn = game.turn_number(), "match aborted: {err}");
            eprintln!("duchess: {err}");
            ExitCode::FAILURE
        }
    }
}
