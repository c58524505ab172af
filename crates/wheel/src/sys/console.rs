use crate::events::AppEvent;
use async_channel::Sender;
use std::io::BufRead;
use std::str::FromStr;
use std::thread;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Commands accepted on the console, standing in for the page's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ConsoleCommand {
    /// Spin the wheel.
    Spin,
    /// Close the winner overlay.
    Dismiss,
    /// Toggle sound cues.
    Mute,
    /// List the commands.
    Help,
    /// Leave.
    Quit,
}

impl ConsoleCommand {
    fn event(self) -> Option<AppEvent> {
        match self {
            Self::Spin => Some(AppEvent::Spin),
            Self::Dismiss => Some(AppEvent::Dismiss),
            Self::Mute => Some(AppEvent::ToggleMute),
            Self::Quit => Some(AppEvent::Quit),
            Self::Help => None,
        }
    }
}

fn print_help() {
    let commands: Vec<String> = ConsoleCommand::iter().map(|c| c.to_string()).collect();
    println!("commands: {}", commands.join(", "));
}

/// Reads commands on a detached thread and feeds the session. A plain
/// thread, not an async read: a parked stdin read must never hold runtime
/// shutdown hostage to the next keystroke once the session quits.
pub fn spawn_reader(tx: Sender<AppEvent>) {
    thread::spawn(move || read_loop(tx));
}

fn read_loop(tx: Sender<AppEvent>) {
    print_help();

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match ConsoleCommand::from_str(line) {
            Ok(command) => match command.event() {
                Some(event) => {
                    if tx.send_blocking(event).is_err() {
                        return;
                    }
                }
                None => print_help(),
            },
            Err(_) => {
                log::warn!("Unknown command: {line}");
                print_help();
            }
        }
    }

    // stdin closed; take the session down with it.
    let _ = tx.send_blocking(AppEvent::Quit);
}
