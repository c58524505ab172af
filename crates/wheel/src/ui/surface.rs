use spindle::entry::{Entry, Verse};
use spindle::{SPIN_DURATION, geometry};

/// What a surface needs to lay the wheel out radially.
#[derive(Debug, Clone, Copy)]
pub struct WheelFrame<'a> {
    pub rotation: f64,
    pub is_spinning: bool,
    pub entries: &'a [Entry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Render seam. The session emits values; how they become pixels (or text)
/// is entirely the surface's business.
pub trait Surface {
    fn wheel(&mut self, frame: &WheelFrame<'_>);
    fn winner(&mut self, winner: Option<&Entry>);
    fn verse(&mut self, side: Side, verse: Option<&Verse>);
}

/// Line-oriented surface for running the wheel in a terminal.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for ConsoleSurface {
    fn wheel(&mut self, frame: &WheelFrame<'_>) {
        if frame.is_spinning {
            println!(
                "The wheel spins to {:.1}° over {}s...",
                frame.rotation,
                SPIN_DURATION.as_secs()
            );
            return;
        }
        let n = frame.entries.len();
        println!("The wheel rests at {:.1}°:", frame.rotation);
        for (i, entry) in frame.entries.iter().enumerate() {
            let marker = if geometry::pointed_entry(frame.rotation, n) == i {
                ">"
            } else {
                " "
            };
            println!(
                "  {marker} {:6.1}°  {} [{}]",
                geometry::slice_midpoint(i, n),
                entry.name,
                entry.color
            );
        }
    }

    fn winner(&mut self, winner: Option<&Entry>) {
        match winner {
            Some(entry) => {
                println!();
                println!("  *** {} ***", entry.name);
                println!("  (type `dismiss` to close)");
                println!();
            }
            None => println!("(winner dismissed)"),
        }
    }

    fn verse(&mut self, side: Side, verse: Option<&Verse>) {
        let label = match side {
            Side::Left => "left",
            Side::Right => "right",
        };
        match verse {
            Some(v) => println!("[{label}] \"{}\" ({})", v.text, v.reference),
            None => println!("[{label}] (no verse)"),
        }
    }
}
