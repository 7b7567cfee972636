//! Text interface for playing Lines of Action against the LOA engine.

mod command;

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use loa_engine::coretypes::{Move, MoveCount, PlyKind, Side, DEFAULT_MOVE_LIMIT};
use loa_engine::error;
use loa_engine::{Board, DepthPolicy, Engine, EngineBuilder, Game, Magnitude};

use command::{Command, HELP};

/// Who chooses the moves for a side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Player {
    /// Moves are read from standard input.
    Manual,
    /// Moves are chosen by the engine.
    Auto,
}

/// Play Lines of Action on the terminal against a minimax engine.
#[derive(Debug, Parser)]
#[command(name = "loa", version, about)]
struct Args {
    /// Player for the white pieces.
    #[arg(long, value_enum, default_value_t = Player::Auto)]
    white: Player,

    /// Player for the black pieces, who moves first.
    #[arg(long, value_enum, default_value_t = Player::Manual)]
    black: Player,

    /// Seed for random evaluation. Implies --random-eval.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of moves after which the game is drawn.
    #[arg(long, default_value_t = DEFAULT_MOVE_LIMIT)]
    limit: MoveCount,

    /// Search every move to this depth instead of deepening as the game progresses.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    depth: Option<PlyKind>,

    /// Score uneven positions with random magnitudes instead of 1.
    #[arg(long)]
    random_eval: bool,
}

/// State of the game loop: the game in progress and which sides the engine plays.
struct Session {
    game: Game,
    move_limit: MoveCount,
    engines: [Option<Engine>; 2],
    depth_policy: DepthPolicy,
    random_eval: bool,
    seed: Option<u64>,
    reported: bool,
}

impl Session {
    fn new(args: &Args) -> error::Result<Self> {
        let depth_policy = match args.depth {
            Some(depth) => DepthPolicy::fixed(depth)?,
            None => DepthPolicy::Schedule,
        };
        let mut session = Self {
            game: Game::start_position(),
            move_limit: args.limit,
            engines: [None, None],
            depth_policy,
            random_eval: args.random_eval || args.seed.is_some(),
            seed: args.seed,
            reported: false,
        };
        session.new_game()?;
        for (side, player) in [(Side::Black, args.black), (Side::White, args.white)] {
            if player == Player::Auto {
                session.set_auto(side);
            }
        }
        Ok(session)
    }

    fn new_game(&mut self) -> error::Result<()> {
        let mut board = Board::start_position();
        board.set_move_limit(self.move_limit)?;
        self.game = Game::from(board);
        self.reported = false;
        info!(move_limit = self.move_limit, "new game");
        Ok(())
    }

    /// Magnitude for the engine playing `side`. Each side draws from its own seeded stream.
    fn magnitude(&self, side: Side) -> Magnitude {
        match (self.random_eval, self.seed) {
            (false, _) => Magnitude::default(),
            (true, Some(seed)) => Magnitude::random(seed.wrapping_add(side.index() as u64)),
            (true, None) => Magnitude::random_from_entropy(),
        }
    }

    fn set_auto(&mut self, side: Side) {
        let engine = EngineBuilder::new()
            .side(side)
            .depth_policy(self.depth_policy)
            .magnitude(self.magnitude(side))
            .build();
        self.engines[side.index()] = Some(engine);
        debug!(%side, depth_policy = %self.depth_policy, "engine plays side");
    }

    fn set_manual(&mut self, side: Side) {
        self.engines[side.index()] = None;
        debug!(%side, "manual player for side");
    }

    fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
        self.random_eval = true;
        for side in Side::iter() {
            let magnitude = self.magnitude(side);
            if let Some(engine) = self.engines[side.index()].as_mut() {
                engine.set_magnitude(magnitude);
            }
        }
        debug!(seed, "random evaluation seeded");
    }

    fn set_limit(&mut self, move_limit: MoveCount) -> error::Result<()> {
        self.game.set_move_limit(move_limit)?;
        self.move_limit = move_limit;
        self.reported = false;
        debug!(move_limit, "move limit changed");
        Ok(())
    }

    fn is_auto(&self, side: Side) -> bool {
        self.engines[side.index()].is_some()
    }

    fn play(&mut self, move_: Move) -> error::Result<()> {
        self.game.do_move(move_)
    }

    /// Takes back moves until a manual player is to move, or no moves remain.
    fn undo(&mut self) -> error::Result<()> {
        self.game.undo()?;
        while self.is_auto(self.game.board.turn()) && !self.game.moves.is_empty() {
            self.game.undo()?;
        }
        self.reported = false;
        Ok(())
    }

    /// Lets the engine move if it plays the side to move. Returns the move made.
    fn engine_move(&mut self) -> error::Result<Option<Move>> {
        let board = self.game.board;
        let Some(engine) = self.engines[board.turn().index()].as_mut() else {
            return Ok(None);
        };
        let result = engine.choose_move(&board)?;
        self.game.do_move(result.best_move)?;
        Ok(Some(result.best_move))
    }

    /// Prints the result once per finished game.
    fn report_outcome(&mut self) {
        if let Some(outcome) = self.game.winner() {
            if !self.reported {
                println!("{outcome}");
                info!(%outcome, moves = self.game.moves.len(), "game over");
                self.reported = true;
            }
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut session = match Session::new(&args) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    println!("Lines of Action {}\n", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        session.report_outcome();

        if !session.game.game_over() {
            match session.engine_move() {
                Ok(Some(move_)) => {
                    println!("* {move_}");
                    continue;
                }
                Ok(None) => (),
                Err(err) => {
                    warn!(%err, "engine failed to move");
                    println!("Error: {err}");
                    let side = session.game.board.turn();
                    session.set_manual(side);
                }
            }
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match Command::from(line.as_str()) {
            Command::GameMove(move_) => {
                if let Err(err) = session.play(move_) {
                    println!("Error: {err}");
                }
            }
            Command::New => {
                if let Err(err) = session.new_game() {
                    println!("Error: {err}");
                }
            }
            Command::Undo => {
                if let Err(err) = session.undo() {
                    println!("Error: {err}");
                }
            }
            Command::Auto(side) => session.set_auto(side),
            Command::Manual(side) => session.set_manual(side),
            Command::Seed(seed) => session.set_seed(seed),
            Command::Limit(move_limit) => {
                if let Err(err) = session.set_limit(move_limit) {
                    println!("Error: {err}");
                }
            }
            Command::Dump => println!("{}", session.game),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Nothing => (),
            Command::Invalid(message) => println!("Error: {message}"),
        }
    }
    Ok(())
}
