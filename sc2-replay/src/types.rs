//! Typed vocabulary for replay attribute codes
//!
//! Attribute values travel as four-character codes (`"Terr"`, `"tc03"`,
//! `"Fasr"`). Each enum here names the codes one attribute can carry;
//! `from_code` returns `None` for codes added after this list was
//! written, so callers decide whether that is tolerable.

use std::fmt;

/// How a player's game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The replay does not record a result for this player
    Unknown,
    /// Won the match
    Win,
    /// Lost the match
    Loss,
}

impl Outcome {
    /// Map the numeric outcome slot from the details section.
    ///
    /// Out-of-range numbers collapse to `Unknown`; replays of drawn or
    /// abandoned games write values outside the documented pair.
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => Outcome::Win,
            2 => Outcome::Loss,
            _ => Outcome::Unknown,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Unknown => "unknown",
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        };
        write!(f, "{name}")
    }
}

/// Whether a slot was occupied by a person or the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// A human player
    Human,
    /// An AI player
    Computer,
}

impl PlayerKind {
    /// Decode the attribute code for this enum.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Humn" => Some(PlayerKind::Human),
            "Comp" => Some(PlayerKind::Computer),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        };
        write!(f, "{name}")
    }
}

/// The race a player queued as.
///
/// `Random` is the lobby selection; the race actually played is only
/// discoverable from localized text elsewhere in the replay, so the
/// attribute is the reliable cross-locale source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Race {
    /// Random selection in the lobby
    Random,
    /// Terran
    Terran,
    /// Protoss
    Protoss,
    /// Zerg
    Zerg,
}

impl Race {
    /// Decode the attribute code for this enum.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RAND" => Some(Race::Random),
            "Terr" => Some(Race::Terran),
            "Prot" => Some(Race::Protoss),
            "Zerg" => Some(Race::Zerg),
            _ => None,
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Race::Random => "Random",
            Race::Terran => "Terran",
            Race::Protoss => "Protoss",
            Race::Zerg => "Zerg",
        };
        write!(f, "{name}")
    }
}

/// Team color assigned to a slot, `tc01` through `tc15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamColor {
    /// tc01
    Red,
    /// tc02
    Blue,
    /// tc03
    Teal,
    /// tc04
    Purple,
    /// tc05
    Yellow,
    /// tc06
    Orange,
    /// tc07
    Green,
    /// tc08
    LightPink,
    /// tc09
    Violet,
    /// tc10
    LightGrey,
    /// tc11
    DarkGreen,
    /// tc12
    Brown,
    /// tc13
    LightGreen,
    /// tc14
    DarkGrey,
    /// tc15
    Pink,
}

impl TeamColor {
    /// Decode the attribute code for this enum.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tc01" => Some(TeamColor::Red),
            "tc02" => Some(TeamColor::Blue),
            "tc03" => Some(TeamColor::Teal),
            "tc04" => Some(TeamColor::Purple),
            "tc05" => Some(TeamColor::Yellow),
            "tc06" => Some(TeamColor::Orange),
            "tc07" => Some(TeamColor::Green),
            "tc08" => Some(TeamColor::LightPink),
            "tc09" => Some(TeamColor::Violet),
            "tc10" => Some(TeamColor::LightGrey),
            "tc11" => Some(TeamColor::DarkGreen),
            "tc12" => Some(TeamColor::Brown),
            "tc13" => Some(TeamColor::LightGreen),
            "tc14" => Some(TeamColor::DarkGrey),
            "tc15" => Some(TeamColor::Pink),
            _ => None,
        }
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TeamColor::Red => "red",
            TeamColor::Blue => "blue",
            TeamColor::Teal => "teal",
            TeamColor::Purple => "purple",
            TeamColor::Yellow => "yellow",
            TeamColor::Orange => "orange",
            TeamColor::Green => "green",
            TeamColor::LightPink => "light pink",
            TeamColor::Violet => "violet",
            TeamColor::LightGrey => "light grey",
            TeamColor::DarkGreen => "dark green",
            TeamColor::Brown => "brown",
            TeamColor::LightGreen => "light green",
            TeamColor::DarkGrey => "dark grey",
            TeamColor::Pink => "pink",
        };
        write!(f, "{name}")
    }
}

/// Game speed the lobby was locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSpeed {
    /// Slor
    Slower,
    /// Slow
    Slow,
    /// Norm
    Normal,
    /// Fast
    Fast,
    /// Fasr; the ladder default
    Faster,
}

impl GameSpeed {
    /// Decode the attribute code for this enum.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Slor" => Some(GameSpeed::Slower),
            "Slow" => Some(GameSpeed::Slow),
            "Norm" => Some(GameSpeed::Normal),
            "Fast" => Some(GameSpeed::Fast),
            "Fasr" => Some(GameSpeed::Faster),
            _ => None,
        }
    }
}

impl fmt::Display for GameSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameSpeed::Slower => "slower",
            GameSpeed::Slow => "slow",
            GameSpeed::Normal => "normal",
            GameSpeed::Fast => "fast",
            GameSpeed::Faster => "faster",
        };
        write!(f, "{name}")
    }
}

/// How the match was arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Private custom game
    Private,
    /// Automatic matchmaker, i.e. ladder
    Ladder,
    /// Public custom game
    Public,
}

impl Category {
    /// Decode the attribute code for this enum.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Priv" => Some(Category::Private),
            "Amm" => Some(Category::Ladder),
            "Pub" => Some(Category::Public),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Private => "private",
            Category::Ladder => "ladder",
            Category::Public => "public",
        };
        write!(f, "{name}")
    }
}

/// Team arrangement of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameType {
    /// 1v1
    OneVersusOne,
    /// 2v2
    TwoVersusTwo,
    /// 3v3
    ThreeVersusThree,
    /// 4v4
    FourVersusFour,
    /// Free for all
    FreeForAll,
    /// Custom game with hand-picked teams
    Custom,
}

impl GameType {
    /// Decode the attribute code for this enum.
    ///
    /// Team codes arrive either bare (`"1v1"`) or with the leading pad
    /// character still attached; the pad is stripped before matching.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim_start_matches(['\0', ' ']) {
            "1v1" => Some(GameType::OneVersusOne),
            "2v2" => Some(GameType::TwoVersusTwo),
            "3v3" => Some(GameType::ThreeVersusThree),
            "4v4" => Some(GameType::FourVersusFour),
            "FFA" => Some(GameType::FreeForAll),
            "Cust" => Some(GameType::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameType::OneVersusOne => "1v1",
            GameType::TwoVersusTwo => "2v2",
            GameType::ThreeVersusThree => "3v3",
            GameType::FourVersusFour => "4v4",
            GameType::FreeForAll => "FFA",
            GameType::Custom => "custom",
        };
        write!(f, "{name}")
    }
}
