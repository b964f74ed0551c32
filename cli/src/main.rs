use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use fadetoe_core::{
    CELL_COUNT, Cell, GameMode, HeuristicStrategy, MoveOutcome, Pacing, Session, TurnReport,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

mod render;
mod settings;

use render::{FadeMarks, render_board};
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about = "Tic-tac-toe where only your last three marks stay on the board", long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Skip the menu: `computer` or `player`
    #[arg(short, long)]
    mode: Option<GameMode>,

    /// Force a seed for the computer instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds to wait before the computer picks its cell
    #[arg(long)]
    think_ms: Option<u64>,

    /// Milliseconds to wait before the computer's mark is placed
    #[arg(long)]
    reply_ms: Option<u64>,

    /// JSON settings file, command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Play(Cell),
    Restart,
    Menu,
    Quit,
}

impl Command {
    /// Cells are typed as shown on the board, 1-9.
    fn parse(line: &str) -> Option<Self> {
        use Command::*;
        match line.trim() {
            "r" | "restart" => Some(Restart),
            "m" | "menu" => Some(Menu),
            "q" | "quit" | "exit" => Some(Quit),
            other => other
                .parse::<Cell>()
                .ok()
                .filter(|&n| (1..=CELL_COUNT as Cell).contains(&n))
                .map(|n| Play(n - 1)),
        }
    }
}

fn init_logger(args: &Args) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        args.verbose.log_level_filter(),
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

struct Game<R, W> {
    session: Session,
    fades: FadeMarks,
    pacing: Pacing,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Game<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn choose_mode(&mut self) -> Result<Option<GameMode>> {
        loop {
            writeln!(self.out, "{}: [c]omputer, [p]layer or [q]uit", self.session.status_line())?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim() {
                "q" | "quit" => return Ok(None),
                "c" => return Ok(Some(GameMode::HumanVsComputer)),
                "p" => return Ok(Some(GameMode::HumanVsHuman)),
                other => match other.parse() {
                    Ok(mode) => return Ok(Some(mode)),
                    Err(err) => log::warn!("{err}"),
                },
            }
        }
    }

    fn start(&mut self, mode: GameMode) {
        self.session.start(mode);
        self.fades.clear();
    }

    fn show(&mut self) -> Result<()> {
        if let Some(engine) = self.session.engine() {
            writeln!(self.out, "\n{}", render_board(engine.board(), &self.fades))?;
        }
        writeln!(self.out, "{}", self.session.status_line())?;
        Ok(())
    }

    fn record(&mut self, report: &TurnReport) {
        match report.outcome {
            MoveOutcome::Placed(placement) => self.fades.apply(&placement),
            MoveOutcome::Rejected(err) => log::info!("move ignored: {err}"),
        }
    }

    fn computer_turn(&mut self) -> Result<()> {
        std::thread::sleep(self.pacing.think_delay());
        let cell = self.session.request_computer_move()?;
        std::thread::sleep(self.pacing.reply_delay());
        let report = self.session.commit_computer_move()?;
        log::debug!("computer played {}", cell + 1);
        self.record(&report);
        Ok(())
    }

    /// Plays until the player quits, returning to the menu when asked.
    fn run(&mut self, mut mode: Option<GameMode>) -> Result<()> {
        loop {
            if !self.session.is_playing() {
                let chosen = match mode.take() {
                    Some(mode) => Some(mode),
                    None => self.choose_mode()?,
                };
                let Some(chosen) = chosen else {
                    return Ok(());
                };
                self.start(chosen);
            }

            self.show()?;
            if self.session.awaiting_computer() {
                self.computer_turn()?;
                continue;
            }

            writeln!(self.out, "cell 1-9, [r]estart, [m]enu or [q]uit")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match Command::parse(&line) {
                Some(Command::Play(cell)) => match self.session.play_human(cell) {
                    Ok(report) => self.record(&report),
                    Err(err) => log::warn!("{err}"),
                },
                Some(Command::Restart) => {
                    self.session.restart();
                    self.fades.clear();
                }
                Some(Command::Menu) => self.session.back_to_menu(),
                Some(Command::Quit) => return Ok(()),
                None => log::warn!("unrecognized input {:?}", line.trim()),
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args)?;

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.merge(&args);
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");

    let stdin = std::io::stdin();
    let mut game = Game {
        session: Session::new(HeuristicStrategy::seeded(seed)),
        fades: FadeMarks::default(),
        pacing: settings.pacing,
        input: stdin.lock(),
        out: std::io::stdout(),
    };
    game.run(settings.mode)
}
