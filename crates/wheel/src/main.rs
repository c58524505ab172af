use rand::SeedableRng;
use rand::rngs::StdRng;
use wheel::config;
use wheel::session::Session;
use wheel::sys::runtime;
use wheel::sys::store::FileStore;
use wheel::ui::audio::PlayerAudio;
use wheel::ui::surface::ConsoleSurface;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_setup();
    let entries = config.entries();
    let pool = config.verse_pool();

    let audio = PlayerAudio::cues(&config.sounds);
    let store = FileStore::open_default()
        .ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))?;

    let session = Session::new(
        entries,
        pool,
        Box::new(ConsoleSurface::new()),
        audio,
        Box::new(store),
        StdRng::from_entropy(),
    )?;

    runtime::run(session, config.rotation_hour)
}
