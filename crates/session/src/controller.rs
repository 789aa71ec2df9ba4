//! Session controller: one owner for the game, three activities around it.
//!
//! - The **game task** owns the [`GameState`]. It applies submitted characters
//!   one full turn at a time and publishes a snapshot after every turn.
//! - The **render task** redraws the latest snapshot on a fixed tick. It never
//!   waits on the game task.
//! - The **input thread** blocks on one character at a time and waits for each
//!   turn to resolve before reading the next.
//! - An optional **signal task** forwards the OS Ctrl-C as an interrupt.
//!
//! Snapshots are published only between turns, so the renderer never sees a
//! drone that moved before collisions were resolved.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::ChaseConfig;
use crate::core::{GameSnapshot, GameState};
use crate::error::SessionError;
use crate::input::{CharSource, InputEvent};
use crate::term::{FrameBuffer, GameView, Surface};
use crate::turn_log::{TurnLog, TurnRecord};
use crate::types::{Command, TurnOutcome};

/// Pending characters are few: the input thread waits for every reply.
const COMMAND_BUFFER: usize = 8;

/// Message to the game task.
#[derive(Debug)]
pub enum SessionCommand {
    /// Run the turn for one raw character and report how it went.
    Submit {
        ch: char,
        reply: oneshot::Sender<TurnOutcome>,
    },
    /// Force the game-over overlay and end the session.
    Interrupt,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// Ctrl-C, from the keyboard or the OS.
    Interrupted,
    /// Every command sender went away. Only finite input sources do this.
    InputClosed,
}

/// What a finished session hands back.
#[derive(Debug)]
pub struct SessionReport<S> {
    pub exit: SessionExit,
    /// State as of the last published snapshot.
    pub snapshot: GameSnapshot,
    /// The surface, for the caller to restore.
    pub surface: S,
}

/// A game plus everything needed to play it.
pub struct Session<S, I> {
    game: GameState,
    surface: S,
    input: I,
    view: GameView,
    render_tick: Duration,
    handle_signals: bool,
    turn_log_path: Option<std::path::PathBuf>,
}

impl<S: Surface, I: CharSource> Session<S, I> {
    pub fn new(game: GameState, surface: S, input: I, config: &ChaseConfig) -> Self {
        Self {
            game,
            surface,
            input,
            view: GameView::default(),
            render_tick: config.render_tick,
            handle_signals: config.handle_signals,
            turn_log_path: config.turn_log_path.clone(),
        }
    }

    /// Play until interrupted (or until a finite input source runs dry).
    ///
    /// On error the surface is dropped, which restores a real terminal.
    pub async fn run(self) -> Result<SessionReport<S>, SessionError> {
        let Self {
            game,
            surface,
            input,
            view,
            render_tick,
            handle_signals,
            turn_log_path,
        } = self;

        let (log, log_task) = match turn_log_path {
            Some(path) => {
                let (log, handle) = TurnLog::spawn(path);
                (log, Some(handle))
            }
            None => (TurnLog::disabled(), None),
        };

        info!(
            width = game.board().width(),
            height = game.board().height(),
            seed = game.seed(),
            player = ?game.player(),
            "session started"
        );

        let (cmd_tx, cmd_rx) = mpsc::channel::<SessionCommand>(COMMAND_BUFFER);
        let (snap_tx, snap_rx) = watch::channel(game.snapshot());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut game_task = tokio::spawn(run_game(game, cmd_rx, snap_tx, log));
        let mut render_task =
            tokio::spawn(run_render(surface, view, snap_rx, shutdown_rx, render_tick));

        if handle_signals {
            let tx = cmd_tx.clone();
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        let _ = tx.send(SessionCommand::Interrupt).await;
                    }
                    Err(e) => warn!(error = %e, "ctrl-c handler unavailable"),
                }
            });
        }

        let input_tx = cmd_tx;
        let mut input_task = tokio::task::spawn_blocking(move || run_input(input, input_tx));

        // The input thread is joined only once it has finished: a pending
        // blocking read cannot be cancelled, and the caller shuts the runtime
        // down instead.
        let mut input_joined = false;
        let mut render_joined = false;
        let ended = tokio::select! {
            joined = &mut game_task => joined.map_err(SessionError::from),
            joined = &mut input_task => {
                input_joined = true;
                match input_result(joined) {
                    Ok(()) => (&mut game_task).await.map_err(SessionError::from),
                    Err(e) => Err(e),
                }
            }
            joined = &mut render_task => {
                render_joined = true;
                Err(match joined {
                    Ok(Err(e)) => SessionError::Render(e),
                    Ok(Ok(_)) => SessionError::Render(anyhow::anyhow!("render loop stopped early")),
                    Err(e) => SessionError::Join(e),
                })
            }
        };

        // A closed command channel also means the input thread returned, maybe
        // with a read failure.
        let ended = match ended {
            Ok(end) if end.exit == SessionExit::InputClosed && !input_joined => {
                input_result(input_task.await).map(|()| end)
            }
            other => other,
        };

        if let Err(e) = &ended {
            warn!(error = %e, "session failed");
            // Dropping the game task drops its turn-log sender.
            game_task.abort();
        }

        let _ = shutdown_tx.send(true);
        let rendered = if render_joined {
            None
        } else {
            Some(render_task.await)
        };

        if let Some(handle) = log_task {
            let _ = handle.await;
        }

        let game_end = ended?;
        let surface = match rendered {
            Some(joined) => joined?.map_err(SessionError::Render)?,
            None => return Err(SessionError::Render(anyhow::anyhow!("render loop stopped early"))),
        };

        Ok(SessionReport {
            exit: game_end.exit,
            snapshot: game_end.snapshot,
            surface,
        })
    }
}

fn input_result(
    joined: Result<anyhow::Result<()>, tokio::task::JoinError>,
) -> Result<(), SessionError> {
    joined?.map_err(SessionError::Input)
}

struct GameEnd {
    exit: SessionExit,
    snapshot: GameSnapshot,
}

async fn run_game(
    mut game: GameState,
    mut commands: mpsc::Receiver<SessionCommand>,
    snapshots: watch::Sender<GameSnapshot>,
    log: TurnLog,
) -> GameEnd {
    while let Some(cmd) = commands.recv().await {
        match cmd {
            SessionCommand::Submit { ch, reply } => {
                let outcome = game.submit_char(ch);
                if let (true, Some(command)) = (outcome.ran_turn(), Command::from_char(ch)) {
                    snapshots.send_replace(game.snapshot());
                    log.record(TurnRecord::turn(&game, command, outcome));
                    debug!(
                        turn = game.turn(),
                        command = command.as_str(),
                        player = ?game.player(),
                        alive = game.alive_count(),
                        "turn resolved"
                    );
                    if outcome.is_won() {
                        info!(turns = game.turn(), "all drones destroyed");
                    }
                }
                let _ = reply.send(outcome);
            }
            SessionCommand::Interrupt => {
                game.force_game_over();
                snapshots.send_replace(game.snapshot());
                log.record(TurnRecord::interrupt(&game));
                info!(turn = game.turn(), alive = game.alive_count(), "interrupted");
                return GameEnd {
                    exit: SessionExit::Interrupted,
                    snapshot: game.snapshot(),
                };
            }
        }
    }

    debug!("command channel closed");
    GameEnd {
        exit: SessionExit::InputClosed,
        snapshot: game.snapshot(),
    }
}

async fn run_render<S: Surface>(
    mut surface: S,
    view: GameView,
    mut snapshots: watch::Receiver<GameSnapshot>,
    mut shutdown: watch::Receiver<bool>,
    tick: Duration,
) -> anyhow::Result<S> {
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snap = *snapshots.borrow_and_update();
                view.render_into(&snap, &mut fb);
                surface.present(&mut fb)?;
            }
            _ = shutdown.changed() => break,
        }
    }

    // One last frame so a forced overlay is on screen at teardown.
    let snap = *snapshots.borrow();
    view.render_into(&snap, &mut fb);
    surface.present(&mut fb)?;
    Ok(surface)
}

/// Blocking input loop.
///
/// After the win, characters no longer drive turns; the loop stays attached
/// only so a raw-mode Ctrl-C can still end the session.
fn run_input<I: CharSource>(
    mut input: I,
    commands: mpsc::Sender<SessionCommand>,
) -> anyhow::Result<()> {
    let mut won = false;
    while let Some(event) = input.next_event()? {
        match event {
            InputEvent::Interrupt => {
                let _ = commands.blocking_send(SessionCommand::Interrupt);
                return Ok(());
            }
            InputEvent::Char(_) if won => {}
            InputEvent::Char(ch) => {
                let (reply, outcome) = oneshot::channel();
                if commands
                    .blocking_send(SessionCommand::Submit { ch, reply })
                    .is_err()
                {
                    return Ok(());
                }
                match outcome.blocking_recv() {
                    Ok(outcome) => won = outcome.is_won(),
                    Err(_) => return Ok(()),
                }
            }
        }
    }
    Ok(())
}
