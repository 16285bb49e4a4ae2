//! Space Dodge entry point
//!
//! Terminal host: owns the window (alternate screen), delivers key events to
//! the session, runs the fixed-timestep loop and draws each frame.

mod display;

use std::collections::HashMap;
use std::io::{BufWriter, Write, stdout};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use space_dodge::consts::{MAX_SUBSTEPS, SIM_DT};
use space_dodge::sim::{DEFAULT_SEED, GameSession, InputOutcome, Key, key_down, key_up, tick};
use space_dodge::{Config, ConfigError};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Key-hold emulation ────────────────────────────────────────────────────────

/// Frames a freshly pressed key stays held without a repeat event.
/// Covers the OS key-repeat delay (typically 250-500 ms).
const FIRST_HOLD_WINDOW: u64 = 36;

/// Frames a repeating key stays held between repeat events.
const REPEAT_HOLD_WINDOW: u64 = 6;

/// Tracks held keys so release events can be synthesized on terminals that
/// only report presses (OS key-repeat shows up as repeated presses).
#[derive(Default)]
struct HeldKeys {
    /// key → (frame last seen, has repeated)
    keys: HashMap<Key, (u64, bool)>,
}

impl HeldKeys {
    /// Record a press/repeat. Returns true for the initial press.
    fn press(&mut self, key: Key, frame: u64) -> bool {
        match self.keys.get_mut(&key) {
            Some(entry) => {
                *entry = (frame, true);
                false
            }
            None => {
                self.keys.insert(key, (frame, false));
                true
            }
        }
    }

    /// Returns true if the key was held
    fn release(&mut self, key: Key) -> bool {
        self.keys.remove(&key).is_some()
    }

    /// Remove and return keys not refreshed within their hold window
    fn expire(&mut self, frame: u64) -> Vec<Key> {
        let expired: Vec<Key> = self
            .keys
            .iter()
            .filter(|(_, (last, repeated))| {
                let window = if *repeated {
                    REPEAT_HOLD_WINDOW
                } else {
                    FIRST_HOLD_WINDOW
                };
                frame.saturating_sub(*last) > window
            })
            .map(|(key, _)| *key)
            .collect();
        for key in &expired {
            self.keys.remove(key);
        }
        expired
    }
}

/// Forward a press or repeat to the session.
///
/// Direction keys reach `key_down` on every press, so tapping a key again
/// retakes its axis. Other keys fire on the initial press only.
fn dispatch_press(
    held: &mut HeldKeys,
    session: &mut GameSession,
    key: Key,
    frame: u64,
) -> InputOutcome {
    let fresh = held.press(key, frame);
    if fresh || key.is_direction() {
        key_down(session, key)
    } else {
        InputOutcome::Continue
    }
}

/// Host keymap: I/J/K/L and arrows move, P pauses, Q/Esc quits, Enter confirms
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('i') | KeyCode::Char('I') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('K') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('J') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Key::Right),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Enter => Some(Key::Confirm),
        _ => None,
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// `space-dodge [--vertical | --horizontal | CONFIG.json]`
fn load_config() -> Result<Config, ConfigError> {
    let mut config = Config::default();
    for arg in std::env::args().skip(1) {
        config = match arg.as_str() {
            "--vertical" => Config::space_shootout(),
            "--horizontal" => Config::sky_patrol(),
            path => Config::load(path)?,
        };
    }
    Ok(config)
}

fn clock_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_nanos() as u64,
        Err(e) => {
            log::warn!("Clock before epoch ({e}), using default seed");
            DEFAULT_SEED
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Key events are drained every frame and forwarded as key-down/key-up.
/// The simulation advances in fixed `SIM_DT` steps from an accumulator,
/// capped at `MAX_SUBSTEPS` per frame.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let mut held = HeldKeys::default();
    let mut frame: u64 = 0;
    let mut accumulator: f32 = 0.0;
    let mut last_time = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            let Some(key) = map_key(code) else {
                continue;
            };
            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if dispatch_press(&mut held, session, key, frame) == InputOutcome::Quit {
                        return Ok(());
                    }
                }
                KeyEventKind::Release => {
                    if held.release(key) {
                        key_up(session, key);
                    }
                }
            }
        }

        if !keyboard_enhanced {
            for key in held.expire(frame) {
                key_up(session, key);
            }
        }

        // ── Fixed-timestep simulation ─────────────────────────────────────────
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f32().min(0.1);
        last_time = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(session, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            accumulator = 0.0;
        }

        display::render(out, session)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("space-dodge: {e}");
            return ExitCode::FAILURE;
        }
    };
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut session = match GameSession::with_seed(config, seed) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("space-dodge: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&mut session);

    match result {
        Ok(()) => {
            println!("{}", session.score_text());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal error: {e}");
            eprintln!("space-dodge: {e}");
            ExitCode::FAILURE
        }
    }
}

fn set_title<W: Write>(out: &mut W, config: &Config) -> std::io::Result<()> {
    out.execute(terminal::SetTitle(&config.title))?;
    Ok(())
}

fn run(session: &mut GameSession) -> std::io::Result<()> {
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    set_title(&mut out, session.config())?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back to hold expiry.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok()
        && terminal::supports_keyboard_enhancement().unwrap_or(false);
    log::info!("Keyboard release events: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, session, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
