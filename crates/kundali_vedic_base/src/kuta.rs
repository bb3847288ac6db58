//! Ashtakoot (8-kuta) compatibility tables.
//!
//! Every kuta compares the two natal Moons only: their rashi and their
//! nakshatra. Maxima are 1, 2, 3, 4, 5, 6, 7, 8 for a total of 36.
//! Varna, Vashya, Yoni, Graha Maitri, Gana and Nadi are symmetric in their
//! arguments; Tara counts from the first Moon to the second.

use serde::{Deserialize, Serialize};

use crate::graha_relationships::{MutualRelation, mutual_relation};
use crate::nakshatra::{Gana, Nakshatra};
use crate::rashi::Rashi;

/// Total available points.
pub const MAX_KUTA_POINTS: f64 = 36.0;

/// The eight kutas in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kuta {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KUTAS: [Kuta; 8] = [
    Kuta::Varna,
    Kuta::Vashya,
    Kuta::Tara,
    Kuta::Yoni,
    Kuta::GrahaMaitri,
    Kuta::Gana,
    Kuta::Bhakoot,
    Kuta::Nadi,
];

impl Kuta {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Maximum points; equals the 1-based position in [`ALL_KUTAS`].
    pub const fn max_points(self) -> f64 {
        (self as u8 + 1) as f64
    }

    /// Whether swapping the two charts can change the score.
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Tara | Self::Bhakoot)
    }
}

/// Score for one kuta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KutaScore {
    pub kuta: Kuta,
    pub points: f64,
    pub max_points: f64,
    pub detail: String,
}

impl KutaScore {
    fn new(kuta: Kuta, points: f64, detail: String) -> Self {
        Self {
            kuta,
            points,
            max_points: kuta.max_points(),
            detail,
        }
    }
}

/// The Moon placement a compatibility check reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoonSign {
    pub rashi: Rashi,
    pub nakshatra: Nakshatra,
}

// ---------------------------------------------------------------------------
// Varna
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

impl Varna {
    pub const fn of(rashi: Rashi) -> Self {
        use Rashi::*;
        match rashi {
            Karka | Vrischika | Meena => Self::Brahmin,
            Mesha | Simha | Dhanu => Self::Kshatriya,
            Vrishabha | Kanya | Makara => Self::Vaishya,
            Mithuna | Tula | Kumbha => Self::Shudra,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Brahmin => "Brahmin",
            Self::Kshatriya => "Kshatriya",
            Self::Vaishya => "Vaishya",
            Self::Shudra => "Shudra",
        }
    }

    const fn rank(self) -> i8 {
        match self {
            Self::Brahmin => 4,
            Self::Kshatriya => 3,
            Self::Vaishya => 2,
            Self::Shudra => 1,
        }
    }
}

/// Same varna 1, adjacent rank 0.5, otherwise 0.
pub fn varna_points(a: Rashi, b: Rashi) -> f64 {
    match (Varna::of(a).rank() - Varna::of(b).rank()).abs() {
        0 => 1.0,
        1 => 0.5,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Vashya
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VashyaGroup {
    /// Quadruped.
    Chatushpada,
    /// Human.
    Manava,
    /// Water-dwelling.
    Jalachara,
    /// Insect.
    Keeta,
}

impl VashyaGroup {
    pub const fn of(rashi: Rashi) -> Self {
        use Rashi::*;
        match rashi {
            Mesha | Vrishabha | Simha | Dhanu | Makara => Self::Chatushpada,
            Mithuna | Kanya | Tula | Kumbha => Self::Manava,
            Karka | Meena => Self::Jalachara,
            Vrischika => Self::Keeta,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Chatushpada => "Chatushpada",
            Self::Manava => "Manava",
            Self::Jalachara => "Jalachara",
            Self::Keeta => "Keeta",
        }
    }
}

/// Same group 2, otherwise 0.
pub fn vashya_points(a: Rashi, b: Rashi) -> f64 {
    if VashyaGroup::of(a) == VashyaGroup::of(b) { 2.0 } else { 0.0 }
}

// ---------------------------------------------------------------------------
// Tara
// ---------------------------------------------------------------------------

/// Points by `(n2 − n1 + 27) mod 9`.
pub const TARA_POINTS: [f64; 9] = [1.5, 3.0, 0.0, 3.0, 0.0, 3.0, 0.0, 3.0, 3.0];

pub const TARA_NAMES: [&str; 9] = [
    "Janma",
    "Sampat",
    "Vipat",
    "Kshema",
    "Pratyari",
    "Sadhaka",
    "Vadha",
    "Mitra",
    "Parama Mitra",
];

/// Tara position (0-8) of `b` counted from `a`.
pub const fn tara_index(a: Nakshatra, b: Nakshatra) -> usize {
    ((b.index() as usize + 27 - a.index() as usize) % 27) % 9
}

pub fn tara_points(a: Nakshatra, b: Nakshatra) -> f64 {
    TARA_POINTS[tara_index(a, b)]
}

// ---------------------------------------------------------------------------
// Yoni
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

const ALL_YONIS: [Yoni; 14] = [
    Yoni::Horse,
    Yoni::Elephant,
    Yoni::Sheep,
    Yoni::Serpent,
    Yoni::Dog,
    Yoni::Cat,
    Yoni::Rat,
    Yoni::Cow,
    Yoni::Buffalo,
    Yoni::Tiger,
    Yoni::Deer,
    Yoni::Monkey,
    Yoni::Mongoose,
    Yoni::Lion,
];

/// Animal pairs that count as friendly (unordered).
#[rustfmt::skip]
const FRIENDLY_YONIS: [(Yoni, Yoni); 10] = [
    (Yoni::Horse,    Yoni::Serpent),
    (Yoni::Horse,    Yoni::Deer),
    (Yoni::Horse,    Yoni::Monkey),
    (Yoni::Elephant, Yoni::Sheep),
    (Yoni::Elephant, Yoni::Serpent),
    (Yoni::Elephant, Yoni::Buffalo),
    (Yoni::Elephant, Yoni::Monkey),
    (Yoni::Sheep,    Yoni::Deer),
    (Yoni::Cow,      Yoni::Buffalo),
    (Yoni::Cow,      Yoni::Deer),
];

impl Yoni {
    /// Animal symbol: `nakshatra index mod 14`.
    pub const fn of(nakshatra: Nakshatra) -> Self {
        ALL_YONIS[(nakshatra.index() % 14) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Horse => "Horse",
            Self::Elephant => "Elephant",
            Self::Sheep => "Sheep",
            Self::Serpent => "Serpent",
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rat => "Rat",
            Self::Cow => "Cow",
            Self::Buffalo => "Buffalo",
            Self::Tiger => "Tiger",
            Self::Deer => "Deer",
            Self::Monkey => "Monkey",
            Self::Mongoose => "Mongoose",
            Self::Lion => "Lion",
        }
    }

    pub fn is_friendly_with(self, other: Yoni) -> bool {
        FRIENDLY_YONIS
            .iter()
            .any(|&(x, y)| (x == self && y == other) || (x == other && y == self))
    }
}

/// Same animal 4, friendly pair 3, otherwise 2.
pub fn yoni_points(a: Nakshatra, b: Nakshatra) -> f64 {
    let (ya, yb) = (Yoni::of(a), Yoni::of(b));
    if ya == yb {
        4.0
    } else if ya.is_friendly_with(yb) {
        3.0
    } else {
        2.0
    }
}

// ---------------------------------------------------------------------------
// Graha Maitri, Gana, Bhakoot, Nadi
// ---------------------------------------------------------------------------

/// Friendship of the two rashi lords.
pub fn graha_maitri_points(a: Rashi, b: Rashi) -> f64 {
    match mutual_relation(a.lord(), b.lord()) {
        MutualRelation::SameGraha => 5.0,
        MutualRelation::MutualFriends => 4.0,
        MutualRelation::OneWayFriend => 3.0,
        MutualRelation::NoFriendship => 0.0,
    }
}

pub fn gana_points(a: Nakshatra, b: Nakshatra) -> f64 {
    match (a.gana(), b.gana()) {
        (x, y) if x == y => 6.0,
        (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva) => 5.0,
        (Gana::Manushya, Gana::Rakshasa) | (Gana::Rakshasa, Gana::Manushya) => 5.0,
        _ => 0.0,
    }
}

/// Signs counted forward from `a` to `b`: `(b − a + 12) mod 12`, 0-11.
pub const fn bhakoot_distance(a: Rashi, b: Rashi) -> u8 {
    (b.index() + 12 - a.index()) % 12
}

/// Sign distance of 0 or 6 scores 0, anything else 7.
pub fn bhakoot_points(a: Rashi, b: Rashi) -> f64 {
    match bhakoot_distance(a, b) {
        0 | 6 => 0.0,
        _ => 7.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

impl Nadi {
    /// `rashi index mod 3`.
    pub const fn of(rashi: Rashi) -> Self {
        match rashi.index() % 3 {
            0 => Self::Adi,
            1 => Self::Madhya,
            _ => Self::Antya,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Adi => "Adi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }
}

/// Same nadi 0, different 8.
pub fn nadi_points(a: Rashi, b: Rashi) -> f64 {
    if Nadi::of(a) == Nadi::of(b) { 0.0 } else { 8.0 }
}

// ---------------------------------------------------------------------------
// All eight
// ---------------------------------------------------------------------------

/// Score all eight kutas for Moon `a` against Moon `b`.
pub fn score_kutas(a: MoonSign, b: MoonSign) -> [KutaScore; 8] {
    [
        KutaScore::new(
            Kuta::Varna,
            varna_points(a.rashi, b.rashi),
            format!("{} / {}", Varna::of(a.rashi).name(), Varna::of(b.rashi).name()),
        ),
        KutaScore::new(
            Kuta::Vashya,
            vashya_points(a.rashi, b.rashi),
            format!(
                "{} / {}",
                VashyaGroup::of(a.rashi).name(),
                VashyaGroup::of(b.rashi).name()
            ),
        ),
        KutaScore::new(
            Kuta::Tara,
            tara_points(a.nakshatra, b.nakshatra),
            format!("{} tara", TARA_NAMES[tara_index(a.nakshatra, b.nakshatra)]),
        ),
        KutaScore::new(
            Kuta::Yoni,
            yoni_points(a.nakshatra, b.nakshatra),
            format!("{} / {}", Yoni::of(a.nakshatra).name(), Yoni::of(b.nakshatra).name()),
        ),
        KutaScore::new(
            Kuta::GrahaMaitri,
            graha_maitri_points(a.rashi, b.rashi),
            format!("{} / {}", a.rashi.lord().english_name(), b.rashi.lord().english_name()),
        ),
        KutaScore::new(
            Kuta::Gana,
            gana_points(a.nakshatra, b.nakshatra),
            format!("{} / {}", a.nakshatra.gana().name(), b.nakshatra.gana().name()),
        ),
        KutaScore::new(
            Kuta::Bhakoot,
            bhakoot_points(a.rashi, b.rashi),
            format!("{} signs apart", bhakoot_distance(a.rashi, b.rashi)),
        ),
        KutaScore::new(
            Kuta::Nadi,
            nadi_points(a.rashi, b.rashi),
            format!("{} / {}", Nadi::of(a.rashi).name(), Nadi::of(b.rashi).name()),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

/// Qualitative verdict on a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl CompatibilityBand {
    /// ≥75 % excellent, ≥60 good, ≥45 average, ≥30 below average, else poor.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Good
        } else if percentage >= 45.0 {
            Self::Average
        } else if percentage >= 30.0 {
            Self::BelowAverage
        } else {
            Self::Poor
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Poor => "Poor",
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            Self::Excellent => "Highly compatible match. Strongly recommended.",
            Self::Good => "Good compatibility. The match is recommended.",
            Self::Average => "Average compatibility. Consider the individual kutas carefully.",
            Self::BelowAverage => {
                "Below average compatibility. Consult an astrologer before proceeding."
            }
            Self::Poor => "Poor compatibility. The match is not recommended.",
        }
    }
}
