use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Display name of one wheel participant.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct EntryName(String);

crate::impl_string_newtype!(EntryName);

/// Presentation color for a slice, e.g. `#ef4444`. Opaque to the selection
/// logic; render surfaces interpret it.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ColorToken(String);

crate::impl_string_newtype!(ColorToken);

impl ColorToken {
    /// Default palette color for slice `index`, cycling when the wheel has
    /// more entries than the palette.
    pub fn from_palette(index: usize) -> Self {
        Self(PALETTE[index % PALETTE.len()].to_string())
    }
}

/// One selectable participant. The entry set is fixed at startup and never
/// mutated while the wheel is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: EntryName,
    pub color: ColorToken,
}

impl Entry {
    pub fn new(name: impl Into<String>, color: ColorToken) -> Self {
        Self {
            name: EntryName::new(name),
            color,
        }
    }
}

/// One quote from the static daily-display pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub text: String,
    pub reference: String,
}

/// Tailwind-500 hues, one full lap of the hue circle.
pub const PALETTE: [&str; 16] = [
    "#ef4444", "#f97316", "#eab308", "#84cc16", "#22c55e", "#10b981", "#14b8a6", "#06b6d4",
    "#0ea5e9", "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899", "#f59e0b",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_past_its_length() {
        assert_eq!(ColorToken::from_palette(0), ColorToken::from_palette(16));
        assert_eq!(ColorToken::from_palette(3).as_ref(), "#84cc16");
    }

    #[test]
    fn newtypes_serialize_transparently() {
        let entry = Entry::new("Ngan", ColorToken::from_palette(0));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r##"{"name":"Ngan","color":"#ef4444"}"##);
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
