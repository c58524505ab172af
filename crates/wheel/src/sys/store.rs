use directories::ProjectDirs;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Store key for the persisted mute flag.
pub const MUTE_KEY: &str = "muted";

/// Opaque key-value preference store, durable until cleared. The session
/// never interprets values; collaborator failures stay on this side of the
/// seam.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `key=value` lines in a file under the project data directory, cached in
/// memory and written through on every set.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: PathBuf) -> Self {
        let cache = match fs_err::read_to_string(&path) {
            Ok(contents) => contents
                .lines()
                .filter_map(|line| {
                    let (key, value) = line.split_once('=')?;
                    Some((key.trim().to_string(), value.trim().to_string()))
                })
                .collect(),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path,
            cache: Mutex::new(cache),
        }
    }

    pub fn open_default() -> Option<Self> {
        let proj_dirs = ProjectDirs::from("org", "prayerwheel", "wheel")?;
        Some(Self::open(proj_dirs.data_dir().join("prefs")))
    }

    fn flush(&self, cache: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs_err::create_dir_all(parent)
        {
            log::error!("Failed to create preference directory: {e}");
            return;
        }
        let contents: String = cache
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect();
        if let Err(e) = fs_err::write(&self.path, contents) {
            log::error!("Failed to persist preferences: {e}");
        }
    }
}

impl PrefStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut cache = self.cache.lock();
        cache.insert(key.to_string(), value.to_string());
        self.flush(&cache);
    }
}
