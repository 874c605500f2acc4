//! `freecell`: play a numbered FreeCell deal at the terminal.
//!
//! ```text
//! freecell [SEED] [--random] [--verbose] [--load PATH] [--save PATH]
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use rand::Rng;
use tracing::Level;

use freecell_engine::{
    render, GameConfig, GameRecord, Outcome, ReplayReport, Session, DEFAULT_SEED,
};

const USAGE: &str = "usage: freecell [SEED] [--random] [--verbose] [--load PATH] [--save PATH]";

/// Highest deal number offered by `--random`.
const MAX_RANDOM_SEED: i64 = 32000;

#[derive(Debug, Default)]
struct Args {
    seed: Option<i64>,
    random: bool,
    verbose: bool,
    load: Option<PathBuf>,
    save: Option<PathBuf>,
}

impl Args {
    fn parse(mut argv: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut args = Args::default();

        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "--random" => args.random = true,
                "--verbose" | "-v" => args.verbose = true,
                "--load" => {
                    let path = argv.next().ok_or("--load needs a path")?;
                    args.load = Some(path.into());
                }
                "--save" => {
                    let path = argv.next().ok_or("--save needs a path")?;
                    args.save = Some(path.into());
                }
                other if args.seed.is_none() => {
                    let seed = other
                        .parse()
                        .map_err(|_| format!("not a deal number: {}", other))?;
                    args.seed = Some(seed);
                }
                other => return Err(format!("unexpected argument: {}", other)),
            }
        }

        Ok(args)
    }

    fn seed(&self) -> i64 {
        if self.random {
            rand::thread_rng().gen_range(1..=MAX_RANDOM_SEED)
        } else {
            self.seed.unwrap_or(DEFAULT_SEED)
        }
    }
}

fn report_failures(report: &ReplayReport) {
    for failure in &report.failures {
        println!("{}: {}", failure.entry, failure.error);
    }
}

fn start(args: &Args) -> Result<Session, String> {
    let config = GameConfig::default()
        .with_seed(args.seed())
        .with_trace_win(args.verbose);

    let Some(path) = &args.load else {
        return Ok(Session::with_config(config));
    };

    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let record = GameRecord::from_log_line(config.seed, &text).map_err(|e| e.to_string())?;
    let (session, report) = record.restore(config);
    report_failures(&report);
    Ok(session)
}

fn repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        print!("{}", render(session.state()));

        if session.is_won() {
            println!("#WINNING");
            break;
        }

        print!("\n? ");
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };

        match session.execute(&line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Played(mv)) => println!("play {} to {}", mv.card, mv.dest),
            Ok(Outcome::Replayed(report)) => report_failures(&report),
            Ok(Outcome::NothingToUndo) => println!("nothing to undo"),
            Ok(Outcome::Idle | Outcome::Undone | Outcome::Zapped) => {}
            Err(err) => println!("{}", err),
        }
    }

    println!("bye.");
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            return ExitCode::from(2);
        }
    };

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let mut session = match start(&args) {
        Ok(session) => session,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = repl(&mut session) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    if let Some(path) = &args.save {
        let line = GameRecord::from_state(session.state()).to_log_line();
        if let Err(err) = fs::write(path, line + "\n") {
            eprintln!("{}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
