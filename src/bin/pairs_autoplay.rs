//! Headless autoplay: plays sessions with a simple remembering player.
//!
//! Useful for exercising the engine end to end and for filling a history
//! file. Flip animations are simulated with `TimedPresentation`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rustc_hash::FxHashMap;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rust_pairs::{
    AudioEvent, AudioLog, Board, EntityId, FaceId, GameRng, JsonFileStore, MatchStore, MemoryStore,
    RecordLine, Session, SessionConfig, SessionError, SessionStatus, TimedPresentation,
};

type AutoSession = Session<TimedPresentation, AudioLog, Box<dyn MatchStore>>;

#[derive(Parser)]
#[command(name = "pairs-autoplay")]
#[command(about = "Play matching-pairs sessions headlessly")]
struct Args {
    /// Session configuration (JSON). Defaults to a 4x4 board, 60 seconds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of sessions to play
    #[arg(short, long, default_value = "1")]
    sessions: u32,

    /// Override the deal seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the time limit, in seconds
    #[arg(long)]
    time_limit: Option<f32>,

    /// Store won sessions in this JSON file instead of in memory
    #[arg(long)]
    history: Option<PathBuf>,

    /// Wipe the history before playing
    #[arg(long)]
    clear_history: bool,

    /// Simulated frame time, in seconds
    #[arg(long, default_value = "0.016")]
    tick: f32,

    /// Seconds the player waits between picks
    #[arg(long, default_value = "0.35")]
    think: f32,

    /// Chance (0-1) that the player forgets a card it has seen
    #[arg(long, default_value = "0.1")]
    forget: f64,
}

/// Remembers faces it has seen and picks known pairs first.
struct Player {
    rng: GameRng,
    seen: FxHashMap<EntityId, FaceId>,
    holding: Option<EntityId>,
    forget: f64,
}

impl Player {
    fn new(seed: u64, forget: f64) -> Self {
        Self {
            rng: GameRng::new(seed),
            seen: FxHashMap::default(),
            holding: None,
            forget: forget.clamp(0.0, 1.0),
        }
    }

    fn reset(&mut self) {
        self.seen.clear();
        self.holding = None;
    }

    fn observe(&mut self, board: &Board) {
        for card in board.cards() {
            if card.is_matched() {
                self.seen.remove(&card.entity_id());
            } else if card.is_revealed() {
                self.seen.insert(card.entity_id(), card.face());
            }
        }
    }

    fn forgets(&mut self) -> bool {
        let roll = self.rng.gen_range_usize(0..1000) as f64 / 1000.0;
        roll < self.forget
    }

    fn choose(&mut self, board: &Board) -> Option<EntityId> {
        let open: Vec<EntityId> = board
            .cards()
            .filter(|c| c.ineligibility().is_none())
            .map(|c| c.entity_id())
            .collect();
        if open.is_empty() {
            return None;
        }

        let remembered = |id: &EntityId, face: FaceId, seen: &FxHashMap<EntityId, FaceId>| {
            seen.get(id) == Some(&face)
        };

        if let Some(first) = self.holding.take() {
            let face = board.get(first)?.face();
            if !self.forgets() {
                let partner = open
                    .iter()
                    .find(|&&id| id != first && remembered(&id, face, &self.seen));
                if let Some(&partner) = partner {
                    return Some(partner);
                }
            }
            return self.pick_unseen(&open);
        }

        let known_pair = open.iter().find_map(|&a| {
            let face = *self.seen.get(&a)?;
            open.iter()
                .any(|&b| b != a && remembered(&b, face, &self.seen))
                .then_some(a)
        });
        let pick = known_pair.or_else(|| self.pick_unseen(&open))?;
        self.holding = Some(pick);
        Some(pick)
    }

    fn pick_unseen(&mut self, open: &[EntityId]) -> Option<EntityId> {
        let unseen: Vec<EntityId> = open
            .iter()
            .copied()
            .filter(|id| !self.seen.contains_key(id))
            .collect();
        let pool = if unseen.is_empty() { open } else { &unseen[..] };
        let index = self.rng.gen_range_usize(0..pool.len());
        Some(pool[index])
    }
}

fn load_config(args: &Args) -> anyhow::Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SessionConfig::from_json_str(&json)?
        }
        None => SessionConfig::new(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(limit) = args.time_limit {
        config = config.with_time_limit(limit);
    }
    config.validate()?;
    Ok(config)
}

fn play_one(
    session: &mut AutoSession,
    player: &mut Player,
    first: bool,
    tick: f32,
    think: f32,
) -> Result<SessionStatus, SessionError> {
    if first {
        session.start()?;
    } else {
        session.restart()?;
    }
    player.reset();

    let mut waited = 0.0;
    loop {
        for signal in session.presentation_mut().advance(tick) {
            session.complete_transition(signal);
        }

        waited += tick;
        if waited >= think {
            waited = 0.0;
            let pick = session.board().and_then(|board| {
                player.observe(board);
                player.choose(board)
            });
            if let Some(card) = pick {
                session.select(card);
            }
        }

        // A failed save does not undo the win; report it and keep playing.
        let status = session.tick(tick).unwrap_or_else(|e| {
            warn!(error = %e, "won session was not recorded");
            session.status()
        });
        if status.is_terminal() {
            return Ok(status);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    anyhow::ensure!(args.tick > 0.0, "--tick must be positive");

    let config = load_config(&args)?;
    let mut store: Box<dyn MatchStore> = match &args.history {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    if args.clear_history {
        store.clear()?;
    }

    info!(sessions = args.sessions, seed = config.seed, "starting autoplay");

    let mut player = Player::new(config.seed ^ 0x5EED, args.forget);
    let mut session: AutoSession =
        Session::new(config, TimedPresentation::default(), AudioLog::new(), store);

    let mut won = 0;
    for i in 0..args.sessions {
        let status = play_one(&mut session, &mut player, i == 0, args.tick, args.think)?;
        if status == SessionStatus::Won {
            won += 1;
        }
        println!("session {}: {}", i + 1, session.hud());
    }

    let audio = session.audio();
    info!(
        won,
        played = args.sessions,
        flips = audio.count(AudioEvent::Flip),
        matches = audio.count(AudioEvent::Match),
        mismatches = audio.count(AudioEvent::Mismatch),
        "autoplay finished"
    );

    let history = session.store().load_all()?;
    println!("history ({} records):", history.len());
    for record in &history {
        println!("  {}", RecordLine::from(record));
    }
    Ok(())
}
