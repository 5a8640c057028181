use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use env_logger::Env;
use log::{error, info};

use tap_chess::chess_errors::ChessResult;
use tap_chess::config::{Config, CONFIG_PATH_ENV};
use tap_chess::game_state::board::Board;
use tap_chess::interface::tap_loop::run_stdio_loop;
use tap_chess::session::GameSession;
use tap_chess::utils::random_taps::RandomTapper;
use tap_chess::utils::render_board::{render_board, render_turn};

const LOG_LEVEL_ENV: &str = "TAP_CHESS_LOG";

#[derive(Parser)]
#[command(name = "tap_chess", version, about = "Tap-driven chess rules engine")]
struct Cli {
    /// YAML config file (falls back to $TAP_CHESS_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively by typing squares.
    Play,
    /// Print the starting board.
    Show,
    /// Drive a game with seeded random taps.
    Demo {
        #[arg(long)]
        taps: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

    let cfg = match Config::load(cfg_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    init_logger(&cfg.log_level);

    match run(cli.command, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(default_level: &str) {
    let env = Env::default().filter_or(LOG_LEVEL_ENV, default_level);
    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn run(command: Option<Commands>, cfg: &Config) -> ChessResult<()> {
    let options = cfg.render_options();

    match command {
        Some(Commands::Play) => run_stdio_loop(options)?,
        Some(Commands::Show) => {
            print!("{}", render_board(&Board::setup().snapshot(), &options));
        }
        Some(Commands::Demo { taps, seed }) => {
            let taps = taps.unwrap_or(cfg.demo_taps);
            let seed = seed.unwrap_or(cfg.demo_seed);
            info!("demo: {taps} taps, seed {seed}");

            let mut session = GameSession::new();
            let stats = RandomTapper::new(seed).drive(&mut session, taps);

            print!("{}", render_board(&session.current_board(), &options));
            println!("{}", render_turn(session.current_turn()));
            println!("{}", stats.report());
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
