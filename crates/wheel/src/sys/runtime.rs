use crate::events::AppEvent;
use crate::session::{Followup, Session};
use crate::sys::{console, scheduler};
use async_channel::{Receiver, Sender};
use chrono::Local;
use spindle::Hour;
use tokio::runtime::Runtime;

/// Owns the tokio runtime and drives the session until it asks to shut
/// down. Background services feed the single event channel: the console
/// command reader and the daily verse rotation.
pub fn run(mut session: Session, rotation_hour: Hour) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    rt.block_on(async {
        let (tx, rx) = async_channel::bounded(32);

        console::spawn_reader(tx.clone());

        // The first pair shows right away; the scheduler owns every later
        // rotation.
        let _ = tx.send(AppEvent::RotateVerses).await;
        let delay = spindle::delay_until(Local::now(), rotation_hour);
        log::info!(
            "Next verse rotation at {} (in {}s)",
            rotation_hour,
            delay.as_secs()
        );
        let mut rotation =
            scheduler::VerseRotation::start(tx.clone(), delay, scheduler::ROTATION_PERIOD);

        drive(&mut session, tx, rx).await;

        rotation.stop();
    });

    Ok(())
}

/// Pumps events into the session, arming a reveal timer per spin. Returns
/// the moment `Quit` is handled, regardless of who still holds a sender.
async fn drive(session: &mut Session, tx: Sender<AppEvent>, rx: Receiver<AppEvent>) {
    while let Ok(event) = rx.recv().await {
        match session.handle(event) {
            Some(Followup::RevealAfter(delay)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppEvent::Reveal).await;
                });
            }
            Some(Followup::Shutdown) => break,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::store::FileStore;
    use crate::ui::audio::NullAudio;
    use crate::ui::surface::{Side, Surface, WheelFrame};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use spindle::SPIN_DURATION;
    use spindle::entry::{ColorToken, Entry, Verse};
    use std::time::Duration;

    struct BlindSurface;

    impl Surface for BlindSurface {
        fn wheel(&mut self, _: &WheelFrame<'_>) {}
        fn winner(&mut self, _: Option<&Entry>) {}
        fn verse(&mut self, _: Side, _: Option<&Verse>) {}
    }

    fn session(name: &str) -> Session {
        let store = FileStore::open(
            std::env::temp_dir().join(format!("wheel-runtime-{name}-{}", std::process::id())),
        );
        let entries = (0..4)
            .map(|i| Entry::new(format!("p{i}"), ColorToken::from_palette(i)))
            .collect();
        Session::new(
            entries,
            Vec::new(),
            Box::new(BlindSurface),
            Box::new(NullAudio),
            Box::new(store),
            StdRng::seed_from_u64(1),
        )
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn quit_ends_the_loop_even_while_other_senders_stay_open() {
        let (tx, rx) = async_channel::bounded(8);
        let mut session = session("quit");
        tx.send(AppEvent::Quit).await.unwrap();

        // tx is still held here, exactly like the console reader holds its
        // sender; the loop must return anyway.
        let done =
            tokio::time::timeout(Duration::from_secs(60), drive(&mut session, tx.clone(), rx))
                .await;
        assert!(done.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn spin_is_revealed_through_the_loop_after_the_animation() {
        let (tx, rx) = async_channel::bounded(8);
        let mut session = session("reveal");
        tx.send(AppEvent::Spin).await.unwrap();

        let quitter = tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SPIN_DURATION + Duration::from_secs(1)).await;
            let _ = quitter.send(AppEvent::Quit).await;
        });

        drive(&mut session, tx, rx).await;
        assert!(!session.is_spinning());
        assert!(session.winner().is_some());
    }
}
