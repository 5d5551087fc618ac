use rand::Rng;

/// An immutable, ordered list of candidate phrases for one template slot.
///
/// Sets are built from static slices and must not be empty; the check runs
/// at compile time for the `const` vocabularies below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularySet(&'static [&'static str]);

impl VocabularySet {
    pub const fn new(entries: &'static [&'static str]) -> Self {
        assert!(!entries.is_empty(), "vocabulary set must not be empty");
        Self(entries)
    }

    pub fn entries(&self) -> &'static [&'static str] {
        self.0
    }

    /// Draw one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.0[rng.gen_range(0..self.0.len())]
    }
}

/// The slot vocabularies for one note flavor.
///
/// `notes` is only used by flavors whose template has a drawn
/// implementation-note bullet.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub themes: VocabularySet,
    pub genres: VocabularySet,
    pub actions: VocabularySet,
    pub constraints: VocabularySet,
    pub twists: VocabularySet,
    pub notes: Option<VocabularySet>,
}

pub const STANDARD_VOCABULARY: Vocabulary = Vocabulary {
    themes: VocabularySet::new(&[
        "cyberpunk city",
        "post-apocalyptic wasteland",
        "orbital station",
        "ancient ruins with futuristic tech",
        "neon dungeon",
        "AI training arena",
    ]),
    genres: VocabularySet::new(&[
        "roguelike",
        "tactical card game",
        "platformer",
        "puzzle game",
        "tower defense",
        "real-time tactics",
    ]),
    actions: VocabularySet::new(&[
        "pause time",
        "invert gravity",
        "clone the player",
        "rewrite enemy behavior",
        "corrupt the game rules",
        "scramble the map layout",
    ]),
    constraints: VocabularySet::new(&[
        "player only sees partial information",
        "you can only act every third turn",
        "resources decay over time",
        "controls randomly remap under stress",
        "you must sacrifice a power to gain another",
        "the level layout changes every time you fail",
    ]),
    twists: VocabularySet::new(&[
        "an on-device model predicts the next enemy move",
        "a simple RL agent controls an ally with its own agenda",
        "a tiny classifier labels player decisions as “risky” or “safe” and changes rewards",
        "procedural levels are generated using weighted prompts",
        "NPC dialogue is blended from a Markov chain over past matches",
        "enemy spawning adapts to your failure patterns",
    ]),
    notes: Some(VocabularySet::new(&[
        "Prototype state transitions as a pure function so it’s easy to plug in different AI policies.",
        "Log every decision to a JSONL file so you can replay and train simple agents later.",
        "Keep the AI very small (heuristics or shallow models) so it’s easy to reason about in code.",
        "Expose all tuning knobs (weights, thresholds) via a config file rather than hard-coding.",
        "Separate the simulation core from rendering so you can run experiments headless.",
    ])),
};

pub const JS_VOCABULARY: Vocabulary = Vocabulary {
    themes: VocabularySet::new(&[
        "neural forest",
        "floating islands",
        "glitched arcade",
        "underwater data center",
    ]),
    genres: VocabularySet::new(&[
        "deckbuilder",
        "arena brawler",
        "grid puzzle",
        "stealth platformer",
    ]),
    actions: VocabularySet::new(&[
        "splice enemy behaviors",
        "rewind only projectiles",
        "swap health with enemies",
        "compress time into bursts",
    ]),
    constraints: VocabularySet::new(&[
        "input latency randomly spikes",
        "vision cone is very narrow",
        "only one resource can be maxed at a time",
        "any upgrade also buffs enemies",
    ]),
    twists: VocabularySet::new(&[
        "log player mistakes and replay them as ghost enemies",
        "cluster player paths and surface the rarest ones as bonus routes",
        "use a simple score model to decide when to trigger harder waves",
        "track player hesitation time and adapt difficulty in real-time",
    ]),
    notes: None,
};

pub const GO_VOCABULARY: Vocabulary = Vocabulary {
    themes: VocabularySet::new(&[
        "procedural labyrinth",
        "AI-run gladiator arena",
        "virtual petri dish",
        "signal-jammed battlefield",
    ]),
    genres: VocabularySet::new(&[
        "top-down shooter",
        "resource management sim",
        "co-op puzzler",
        "survival arena",
    ]),
    actions: VocabularySet::new(&[
        "redirect projectiles mid-flight",
        "hack enemy squads as temporary allies",
        "scrub your own footprints from the map",
        "record and replay your past runs as clones",
    ]),
    constraints: VocabularySet::new(&[
        "fog of war hides everything but sound cues",
        "ammo is shared across all weapons",
        "healing always has a delayed effect",
        "every ability has a visible cooldown arc",
    ]),
    twists: VocabularySet::new(&[
        "a small heuristic bot auto-plays for a few seconds when you freeze",
        "the game tracks your common mistakes and surfaces them as hints",
        "enemy patterns are shuffled based on a simple Markov chain",
        "the map spawns extra cover when you’re low on health",
    ]),
    notes: None,
};
