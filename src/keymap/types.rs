//! Core types for the keymap system: Os, Modifiers, KeyChord, Shortcut

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Host operating system a keymap was authored for or is targeted at
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    #[value(alias = "win")]
    Windows,
    #[serde(alias = "mac", alias = "osx")]
    #[value(name = "macos", alias = "mac", alias = "osx")]
    MacOs,
    Linux,
}

impl Os {
    pub const ALL: [Os; 3] = [Os::Windows, Os::MacOs, Os::Linux];

    /// The platform this binary was compiled for
    pub fn current() -> Os {
        if cfg!(target_os = "macos") {
            Os::MacOs
        } else if cfg!(target_os = "windows") {
            Os::Windows
        } else {
            Os::Linux
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::MacOs => "macos",
            Os::Linux => "linux",
        }
    }

    /// The token VS Code uses for the platform's "super" key
    pub fn meta_modifier(self) -> Modifier {
        match self {
            Os::Windows => Modifier::Win,
            Os::MacOs => Modifier::Cmd,
            Os::Linux => Modifier::Meta,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Os {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win" => Ok(Os::Windows),
            "macos" | "mac" | "osx" => Ok(Os::MacOs),
            "linux" => Ok(Os::Linux),
            other => Err(other.to_string()),
        }
    }
}

/// Source and destination platform of one import run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OsPair {
    pub source: Os,
    pub destination: Os,
}

impl OsPair {
    pub const fn new(source: Os, destination: Os) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl fmt::Display for OsPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// A single modifier token
///
/// The vocabulary is shared by both schemas. Declaration order is the
/// canonical emit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Shift,
    Alt,
    AltGraph,
    Meta,
    Cmd,
    Win,
}

impl Modifier {
    pub const ALL: [Modifier; 7] = [
        Modifier::Ctrl,
        Modifier::Shift,
        Modifier::Alt,
        Modifier::AltGraph,
        Modifier::Meta,
        Modifier::Cmd,
        Modifier::Win,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Shift => "shift",
            Modifier::Alt => "alt",
            Modifier::AltGraph => "altgraph",
            Modifier::Meta => "meta",
            Modifier::Cmd => "cmd",
            Modifier::Win => "win",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Modifier keys as a bitfield for efficient storage and comparison
///
/// Insertion order is not recorded, so two chords holding the same tokens
/// compare equal however they were written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(Modifier::Ctrl.bit());
    pub const SHIFT: Modifiers = Modifiers(Modifier::Shift.bit());
    pub const ALT: Modifiers = Modifiers(Modifier::Alt.bit());
    pub const ALT_GRAPH: Modifiers = Modifiers(Modifier::AltGraph.bit());
    pub const META: Modifiers = Modifiers(Modifier::Meta.bit());
    pub const CMD: Modifiers = Modifiers(Modifier::Cmd.bit());
    pub const WIN: Modifiers = Modifiers(Modifier::Win.bit());

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    #[inline]
    pub const fn has(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Held modifiers in canonical order
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL.into_iter().filter(move |m| self.has(*m))
    }
}

impl From<Modifier> for Modifiers {
    fn from(modifier: Modifier) -> Self {
        Modifiers(modifier.bit())
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut mods = Modifiers::NONE;
        for modifier in iter {
            mods.insert(modifier);
        }
        mods
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOr<Modifier> for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifier) -> Self::Output {
        self.union(rhs.into())
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.iter().map(Modifier::token).collect();
        write!(f, "{}", parts.join("+"))
    }
}

/// A key combination: modifiers plus exactly one base key
///
/// Base keys are stored lowercase (`a`, `f12`, `back_space`, `[`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub mods: Modifiers,
    pub key: String,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, mods: Modifiers) -> Self {
        Self {
            key: key.into().to_lowercase(),
            mods,
        }
    }

    /// Create a chord with no modifiers
    pub fn key(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// One shortcut: a chord, or two chords pressed in sequence
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub chords: Vec<KeyChord>,
}

impl Shortcut {
    /// Both schemas stop at a first and a second keystroke
    pub const MAX_CHORDS: usize = 2;

    pub fn new(chord: KeyChord) -> Self {
        Self {
            chords: vec![chord],
        }
    }

    pub fn sequence(first: KeyChord, second: KeyChord) -> Self {
        Self {
            chords: vec![first, second],
        }
    }

    pub fn is_sequence(&self) -> bool {
        self.chords.len() > 1
    }
}

impl From<KeyChord> for Shortcut {
    fn from(chord: KeyChord) -> Self {
        Shortcut::new(chord)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.chords.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}
