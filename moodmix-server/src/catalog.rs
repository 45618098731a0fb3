//! Curated fallback song catalog
//!
//! Static two-level table: mood → genre → 5 songs. Built once on first
//! access and never mutated. Order of moods and genres is the declaration
//! order below, and the resolver's mood-aggregate tier depends on it.

use moodmix_common::Song;
use once_cell::sync::Lazy;

type SongRow = (&'static str, &'static str, &'static str);
type MoodTable = &'static [(&'static str, &'static [(&'static str, [SongRow; 5])])];

const CATALOG_DATA: MoodTable = &[
    (
        "chill",
        &[
            (
                "lofi",
                [
                    ("Moonlight Sonata Lo-Fi", "ChillBeats Collective", "Classical meets modern chill vibes"),
                    ("Study Session", "Lo-Fi Dreams", "Perfect background music for focus"),
                    ("Rainy Window", "Mellow Sounds", "Cozy vibes for introspective moments"),
                    ("Coffee Shop Ambience", "Urban Chill", "Warm lo-fi beats with vinyl crackle"),
                    ("Late Night Drive", "Nostalgic Sounds", "Dreamy lo-fi for peaceful moments"),
                ],
            ),
            (
                "jazz",
                [
                    ("Smooth Evening", "Jazz Lounge Collective", "Sophisticated and relaxing jazz"),
                    ("Coffee House Blues", "Urban Jazz Trio", "Perfect for a quiet evening"),
                    ("Midnight Sax", "Cool Jazz Masters", "Smooth saxophone melodies"),
                    ("City Lights", "Modern Jazz Ensemble", "Contemporary jazz with classic vibes"),
                    ("Sunday Morning", "Chill Jazz Society", "Laid-back jazz for lazy mornings"),
                ],
            ),
            (
                "indie",
                [
                    ("Golden Hour", "Indie Collective", "Dreamy indie with soft vocals"),
                    ("Coastal Drive", "Beach House Vibes", "Ethereal sounds for peaceful moments"),
                    ("Paper Planes", "Bedroom Pop", "Gentle indie with nostalgic feel"),
                    ("Fading Polaroids", "Soft Focus", "Melancholic indie for reflection"),
                    ("Sunday Afternoon", "Lazy Sunday", "Relaxing indie with acoustic elements"),
                ],
            ),
        ],
    ),
    (
        "energetic",
        &[
            (
                "rock",
                [
                    ("Thunder Road", "Electric Storm", "High-energy rock with powerful drums"),
                    ("Break Free", "Neon Lightning", "Motivational rock anthem"),
                    ("Rise Up", "Steel Phoenix", "Empowering guitar-driven track"),
                    ("Fire Within", "Rebel Hearts", "Explosive rock with driving bass"),
                    ("Never Give Up", "Victory Lane", "Inspirational rock with soaring vocals"),
                ],
            ),
            (
                "pop",
                [
                    ("Dance All Night", "Pop Stars", "Upbeat pop with infectious energy"),
                    ("Feel Good Vibes", "Sunshine Music", "Happy, danceable pop hit"),
                    ("Electric Dreams", "Neon Pop", "Synth-heavy energetic pop"),
                    ("Summer Anthem", "Party Wave", "High-energy pop perfect for parties"),
                    ("Unstoppable", "Pop Revolution", "Empowering pop with catchy hooks"),
                ],
            ),
            (
                "electronic",
                [
                    ("Digital Dreams", "Synth Masters", "High-energy electronic with great beats"),
                    ("Neon Nights", "EDM Collective", "Pumping electronic dance music"),
                    ("Cyber Rush", "Future Bass", "Intense electronic with heavy drops"),
                    ("Electric Pulse", "Bass Brigade", "Driving electronic with powerful rhythm"),
                    ("Laser Show", "Rave Nation", "Festival-ready electronic dance track"),
                ],
            ),
        ],
    ),
    (
        "sad",
        &[
            (
                "indie",
                [
                    ("Midnight Thoughts", "Melancholy Moon", "Introspective indie for emotional moments"),
                    ("Empty Streets", "Quiet Storm", "Haunting vocals with gentle instrumentation"),
                    ("Rainy Days", "Solitude", "Melancholic indie with piano elements"),
                    ("Lost Letters", "Broken Hearts Club", "Emotional indie about lost love"),
                    ("Grey Skies", "Sad Sunday", "Atmospheric indie for contemplation"),
                ],
            ),
            (
                "alternative",
                [
                    ("Fading Light", "Echo Valley", "Emotional alternative rock ballad"),
                    ("Lost in Time", "Shadow Hearts", "Melancholic alternative with deep lyrics"),
                    ("Silent Screams", "Inner Demons", "Powerful alternative about inner struggles"),
                    ("Broken Glass", "Shattered Dreams", "Raw alternative with emotional vocals"),
                    ("End of Days", "Final Chapter", "Dark alternative with haunting melodies"),
                ],
            ),
        ],
    ),
    (
        "happy",
        &[
            (
                "pop",
                [
                    ("Sunshine Day", "Happy Collective", "Uplifting pop with bright melodies"),
                    ("Good Vibes Only", "Positive Energy", "Feel-good pop anthem"),
                    ("Dancing Queen", "Joy Factory", "Celebratory pop with infectious rhythm"),
                    ("Best Day Ever", "Smile Brigade", "Optimistic pop about good times"),
                    ("Pure Joy", "Happy Hearts", "Upbeat pop that makes you smile"),
                ],
            ),
            (
                "folk",
                [
                    ("Country Road", "Folk Tales", "Cheerful acoustic folk song"),
                    ("Summer Breeze", "Acoustic Dreams", "Light-hearted folk with storytelling"),
                    ("Sunshine Folk", "Happy Trails", "Uplifting folk with harmonica"),
                    ("Mountain Song", "Nature's Call", "Joyful folk celebrating the outdoors"),
                    ("Campfire Stories", "Wandering Souls", "Feel-good folk with group vocals"),
                ],
            ),
        ],
    ),
];

static CATALOG: Lazy<SongCatalog> = Lazy::new(|| {
    SongCatalog::new(
        CATALOG_DATA
            .iter()
            .map(|(mood, genres)| MoodSection {
                mood: mood.to_string(),
                genres: genres
                    .iter()
                    .map(|(genre, rows)| GenreSection {
                        genre: genre.to_string(),
                        songs: rows
                            .iter()
                            .map(|(title, artist, description)| {
                                Song::new(*title, *artist, *description)
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    )
});

/// All genres listed under one mood, in declaration order
#[derive(Debug, Clone)]
pub struct MoodSection {
    pub mood: String,
    pub genres: Vec<GenreSection>,
}

/// Songs for one mood/genre pair
#[derive(Debug, Clone)]
pub struct GenreSection {
    pub genre: String,
    pub songs: Vec<Song>,
}

/// Ordered, read-only mood → genre → songs lookup table
#[derive(Debug, Clone)]
pub struct SongCatalog {
    moods: Vec<MoodSection>,
}

impl SongCatalog {
    /// Build a catalog from sections; keys are expected lower-case
    pub fn new(moods: Vec<MoodSection>) -> Self {
        Self { moods }
    }

    /// The process-wide curated catalog
    pub fn global() -> &'static SongCatalog {
        &CATALOG
    }

    /// Mood keys in declaration order
    pub fn moods(&self) -> impl Iterator<Item = &str> {
        self.moods.iter().map(|m| m.mood.as_str())
    }

    /// Genre keys under `mood_key`, in declaration order
    pub fn genres(&self, mood_key: &str) -> Option<impl Iterator<Item = &str>> {
        self.section(mood_key)
            .map(|m| m.genres.iter().map(|g| g.genre.as_str()))
    }

    /// Exact mood/genre lookup. Keys must already be lower-cased.
    pub fn exact(&self, mood_key: &str, genre_key: &str) -> Option<&[Song]> {
        self.section(mood_key)?
            .genres
            .iter()
            .find(|g| g.genre == genre_key)
            .map(|g| g.songs.as_slice())
    }

    /// Every song under `mood_key`, genre lists concatenated in declaration order
    pub fn mood_songs(&self, mood_key: &str) -> Option<impl Iterator<Item = &Song>> {
        self.section(mood_key)
            .map(|m| m.genres.iter().flat_map(|g| g.songs.iter()))
    }

    fn section(&self, mood_key: &str) -> Option<&MoodSection> {
        self.moods.iter().find(|m| m.mood == mood_key)
    }
}
