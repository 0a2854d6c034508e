//! Interactive session: one live registry driven by typed commands.
//!
//! The session stands in for an open page. Stopwatches keep running between
//! commands, `watch` runs the redraw loop, and leaving (`quit`, EOF, Ctrl-C or
//! a broken stdin) saves the live elapsed times.

use crate::cli::commands::{Registry, audit, open_registry};
use crate::config::Config;
use crate::core::redraw::{RedrawLoop, compose_frame};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::render::{TerminalSink, stopwatch_table};
use crate::utils::time::{TIME_FORMAT_HINT, format_duration_ms};

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

const MIN_FRAME_MS: u64 = 16;
const INPUT_POLL: Duration = Duration::from_millis(100);

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

const HELP: &str = "\
Commands:
  add [name]              add a paused stopwatch
  list                    show all stopwatches
  start <sel>             start a paused stopwatch
  pause <sel>             pause a running stopwatch
  toggle <sel>            start or pause
  reset <sel>             back to 00:00:00 (keeps running if running)
  set <sel> <time>        set elapsed time (90, 2:03, 1:02:03)
  rename <sel> <name>     rename
  remove <sel>            remove
  watch [secs]            redraw running stopwatches live
  save                    save now
  help                    this text
  quit                    save and leave
<sel> is a stopwatch id or its position in the list.";

enum Flow {
    Continue,
    Quit,
}

enum Input {
    Line(String),
    Failed(io::Error),
}

/// Read stdin on its own thread so the session can keep polling for Ctrl-C.
/// The channel closes on EOF.
fn spawn_reader() -> Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        loop {
            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(Input::Line(line)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.send(Input::Failed(e));
                    break;
                }
            }
        }
    });
    rx
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut registry = open_registry(cfg)?;
    let mut redraw = RedrawLoop::new();

    if let Err(e) = ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst)) {
        warning(format!("Ctrl-C will not save the session: {}", e));
    }

    header("rStopwatch session");
    println!("Type 'help' for commands.\n");
    print_list(&registry);

    let input = spawn_reader();
    let mut prompt = true;

    loop {
        if interrupted() {
            println!();
            warning("Interrupted.");
            break;
        }

        if prompt {
            print!("> ");
            let _ = io::stdout().flush();
            prompt = false;
        }

        let line = match input.recv_timeout(INPUT_POLL) {
            Ok(Input::Line(line)) => line,
            Ok(Input::Failed(e)) => {
                println!();
                error(AppError::from(e));
                break;
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                println!();
                break;
            }
        };
        prompt = true;

        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        match run_command(&mut registry, &mut redraw, cfg, cmd) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => error(e),
        }

        redraw.update(&registry);
    }

    registry.on_teardown();
    info("Session saved.");
    Ok(())
}

fn print_list(registry: &Registry) {
    print!("{}", stopwatch_table(&compose_frame(registry)));
}

fn require<'a>(arg: Option<&'a str>, usage: &str) -> AppResult<&'a str> {
    arg.ok_or_else(|| AppError::Other(format!("usage: {}", usage)))
}

fn status_line(registry: &Registry, sel: &str) -> AppResult<String> {
    let sw = registry.get(sel)?;
    let now = registry.now_ms();
    Ok(format!(
        "'{}' {} at {}",
        sw.name,
        sw.status_label().to_lowercase(),
        format_duration_ms(sw.elapsed(now))
    ))
}

fn run_command(
    registry: &mut Registry,
    redraw: &mut RedrawLoop,
    cfg: &Config,
    line: &str,
) -> AppResult<Flow> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    match word.to_lowercase().as_str() {
        "help" | "?" => println!("{}", HELP),

        "list" | "ls" => print_list(registry),

        "add" => {
            let name = if rest.is_empty() { None } else { Some(rest) };
            let sw = registry.add(name, 0).clone();
            audit(registry, "add", &sw.id, &format!("Added '{}'", sw.name));
            success(format!("#{} '{}' added", registry.len(), sw.name));
        }

        "start" => {
            let sel = require(args.next(), "start <sel>")?;
            if !registry.start(sel)? {
                warning("Already running.");
            }
            info(status_line(registry, sel)?);
        }

        "pause" => {
            let sel = require(args.next(), "pause <sel>")?;
            if !registry.pause(sel)? {
                warning("Already paused.");
            }
            info(status_line(registry, sel)?);
        }

        "toggle" => {
            let sel = require(args.next(), "toggle <sel>")?;
            registry.toggle(sel)?;
            info(status_line(registry, sel)?);
        }

        "reset" => {
            let sel = require(args.next(), "reset <sel>")?;
            registry.reset(sel)?;
            let id = registry.get(sel)?.id.clone();
            audit(registry, "reset", &id, "reset");
            info(status_line(registry, sel)?);
        }

        "set" => {
            let sel = require(args.next(), "set <sel> <time>")?;
            let text = args.next().unwrap_or("");
            match registry.apply_time(sel, text) {
                Ok(ms) => {
                    let id = registry.get(sel)?.id.clone();
                    audit(registry, "set", &id, &format!("set to {}", format_duration_ms(ms)));
                    info(status_line(registry, sel)?);
                }
                Err(AppError::InvalidTime(_)) => error(TIME_FORMAT_HINT),
                Err(e) => return Err(e),
            }
        }

        "rename" => {
            let (sel, name) = match rest.split_once(char::is_whitespace) {
                Some((s, n)) => (s, n),
                None => (require(args.next(), "rename <sel> <name>")?, ""),
            };
            registry.rename(sel, name)?;
            let sw = registry.get(sel)?;
            audit(registry, "rename", &sw.id, &format!("renamed to '{}'", sw.name));
            success(format!("Renamed to '{}'", sw.name));
        }

        "remove" | "rm" => {
            let sel = require(args.next(), "remove <sel>")?;
            let removed = registry.remove(sel)?;
            audit(
                registry,
                "remove",
                &removed.id,
                &format!("Removed '{}'", removed.name),
            );
            success(format!("'{}' removed.", removed.name));
        }

        "watch" => {
            let secs = match args.next() {
                Some(s) => s
                    .parse::<u64>()
                    .map_err(|_| AppError::Other(format!("invalid duration '{}'", s)))?,
                None => cfg.watch_seconds,
            };
            watch(registry, redraw, cfg.frame_interval_ms, secs);
        }

        "save" => {
            if registry.on_hidden() {
                success("Saved.");
            } else {
                warning("Could not save; will retry on the next change.");
            }
        }

        "quit" | "exit" | "q" => return Ok(Flow::Quit),

        other => warning(format!("Unknown command '{}'. Type 'help'.", other)),
    }

    Ok(Flow::Continue)
}

/// Drive the redraw loop for up to `secs` seconds, until nothing runs, or
/// until Ctrl-C.
fn watch(registry: &Registry, redraw: &mut RedrawLoop, frame_interval_ms: u64, secs: u64) {
    redraw.update(registry);
    if !redraw.is_scheduled() {
        info("No stopwatch is running.");
        return;
    }

    let frame = Duration::from_millis(frame_interval_ms.max(MIN_FRAME_MS));
    let deadline = Instant::now() + Duration::from_secs(secs);
    let mut sink = TerminalSink::new();

    while !interrupted() && redraw.tick(registry, &mut sink) && Instant::now() < deadline {
        thread::sleep(frame);
    }
}
