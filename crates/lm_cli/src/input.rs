//! Non-blocking keyboard input for the watch loop.
//!
//! A background thread reads stdin line by line and forwards commands
//! over a channel; the match loop polls it once per iteration, so the
//! engine itself never blocks on an input device.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use lm_core::InputCommand;

pub struct InputChannel {
    rx: Receiver<InputCommand>,
}

impl InputChannel {
    /// Spawn the stdin reader. Empty line confirms, `p` toggles pause,
    /// `q` quits.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let command = match line.trim() {
                    "" => InputCommand::Confirm,
                    "p" | "P" => InputCommand::TogglePause,
                    "q" | "Q" => InputCommand::Quit,
                    _ => InputCommand::None,
                };
                if tx.send(command).is_err() {
                    break;
                }
            }
        });
        Self { rx }
    }

    /// One command per loop iteration; `None` when the user typed nothing.
    pub fn poll(&self) -> InputCommand {
        match self.rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => InputCommand::None,
            Err(TryRecvError::Disconnected) => InputCommand::Quit,
        }
    }
}
