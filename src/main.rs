use angler::build_info;
use angler::core::constants::{MAX_FRAME_DT_MS, TICK_INTERVAL_MS};
use angler::fishing::{
    start_session, DifficultyConfig, FishingDifficulty, MiniGameSession, SessionStatus,
    SkillCheckSnapshot,
};
use angler::input::{closes_result, map_key, ReelControls};
use angler::ui::{render_fishing_scene, SceneInfo};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Parsed command line.
struct Options {
    difficulty: FishingDifficulty,
    config_path: Option<PathBuf>,
    goal: Option<f64>,
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    init_logging();

    let (mut session, label) = match build_session(&options) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Could not start the skill check: {}", e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &label);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result? {
        SessionStatus::Success => println!("Landed the fish in {} ticks.", session.tick_count()),
        SessionStatus::Failure => println!("The fish got away."),
        SessionStatus::Aborted => println!("Line cut."),
        SessionStatus::Ongoing => println!("Left the water."),
    }
    Ok(())
}

/// Main loop: poll keys, step the session in fixed ticks, draw. Returns the
/// final status (`Ongoing` if the player quit mid-attempt).
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut MiniGameSession,
    label: &str,
) -> io::Result<SessionStatus> {
    let mut controls = ReelControls::new();
    let mut snapshot: SkillCheckSnapshot = session.snapshot();
    let goal = session.progress().goal();
    let mut last_frame = Instant::now();
    let mut accumulated_ms: u64 = 0;

    loop {
        terminal.draw(|frame| {
            let info = SceneInfo {
                label,
                goal,
                pull_active: controls.pull_active(),
                forfeit_pending: controls.forfeit_pending,
            };
            render_fishing_scene(frame, frame.size(), &snapshot, &info);
        })?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS / 2))? {
            if let Event::Key(key) = event::read()? {
                if session.is_finished() {
                    if closes_result(key) {
                        return Ok(session.status());
                    }
                } else if let Some(action) = map_key(key) {
                    controls.process(action);
                }
            }
        }

        if controls.quit_requested() {
            return Ok(session.status());
        }

        let now = Instant::now();
        let dt_ms = (now - last_frame).as_millis() as u64;
        last_frame = now;
        if session.is_finished() {
            continue;
        }

        // Clamp dt so a stalled terminal does not replay a burst of ticks
        accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);
        while accumulated_ms >= TICK_INTERVAL_MS {
            accumulated_ms -= TICK_INTERVAL_MS;
            snapshot = session
                .tick(controls.sample())
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            if session.is_finished() {
                break;
            }
        }
    }
}

fn build_session(
    options: &Options,
) -> Result<(MiniGameSession, String), angler::fishing::SkillCheckError> {
    if let Some(path) = &options.config_path {
        let config = DifficultyConfig::load(path)?;
        let goal = options
            .goal
            .unwrap_or_else(|| options.difficulty.distance_goal());
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Custom".to_string());
        return Ok((MiniGameSession::new(config, goal)?, label));
    }

    let session = match options.seed {
        Some(seed) => {
            use rand::SeedableRng;
            let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
            start_session(options.difficulty, &mut rng)?
        }
        None => start_session(options.difficulty, &mut rand::thread_rng())?,
    };

    match options.goal {
        // A custom goal rebuilds the session on the same pattern
        Some(goal) => {
            let config = session.config().clone();
            Ok((
                MiniGameSession::new(config, goal)?,
                options.difficulty.name().to_string(),
            ))
        }
        None => Ok((session, options.difficulty.name().to_string())),
    }
}

/// Logs go to the file named by `ANGLER_LOG`; stderr would corrupt the
/// alternate screen, so without it logging stays off.
fn init_logging() {
    let Ok(path) = std::env::var("ANGLER_LOG") else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("Warning: could not open log file {}: {}", path, e),
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        difficulty: FishingDifficulty::Novice,
        config_path: None,
        goal: None,
        seed: None,
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--version" | "-v", _) => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            ("--help" | "-h", _) => {
                print_help();
                std::process::exit(0);
            }
            ("-d" | "--difficulty", Some(v)) => {
                options.difficulty = FishingDifficulty::from_name(v).unwrap_or_else(|| {
                    eprintln!("Unknown difficulty: {} (novice, apprentice, journeyman, master)", v);
                    std::process::exit(1);
                });
                i += 1;
            }
            ("-c" | "--config", Some(v)) => {
                options.config_path = Some(PathBuf::from(v));
                i += 1;
            }
            ("-g" | "--goal", Some(v)) => {
                options.goal = Some(v.parse().unwrap_or_else(|_| {
                    eprintln!("Goal must be a number, got {}", v);
                    std::process::exit(1);
                }));
                i += 1;
            }
            ("--seed", Some(v)) => {
                options.seed = v.parse().ok();
                i += 1;
            }
            (other, _) => {
                eprintln!("Unknown or incomplete option: {}", other);
                eprintln!("Run 'angler --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Angler - fishing skill check\n");
    println!("Usage: angler [options]\n");
    println!("Options:");
    println!("  -d, --difficulty <D>  novice, apprentice, journeyman or master");
    println!("  -c, --config <FILE>   Play a zone pattern from a JSON file");
    println!("  -g, --goal <N>        Distance to reel in");
    println!("      --seed <N>        Seed the pattern roll");
    println!("  -v, --version         Show version information");
    println!("  -h, --help            Show this help message\n");
    println!("Hold Space to pull the fish right; release to let it drift left.");
    println!("Set ANGLER_LOG=<file> (and optionally RUST_LOG) to write a debug log.");
}
