//! Natural (naisargika) friendship between grahas.
//!
//! The permanent friend/neutral/enemy table of BPHS. The relation is not
//! symmetric: the Moon counts Mercury a friend while Mercury counts the
//! Moon an enemy.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural (naisargika) friendship of `graha` towards `other` (BPHS table).
/// Returns Neutral for any pairing involving Rahu/Ketu.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn; neutral=Mercury
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemies=Mercury; neutral=Venus,Saturn
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        // Mercury: friends=Sun,Venus; enemies=Moon; neutral=Mars,Jupiter,Saturn
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus; neutral=Saturn
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon; neutral=Mars,Jupiter
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars; neutral=Jupiter
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

/// Friendship as seen from both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutualRelation {
    SameGraha,
    MutualFriends,
    /// Exactly one side regards the other as a friend.
    OneWayFriend,
    /// Neither is a friend of the other.
    NoFriendship,
}

/// Combine the two directed relations between `a` and `b`.
pub const fn mutual_relation(a: Graha, b: Graha) -> MutualRelation {
    if a as u8 == b as u8 {
        return MutualRelation::SameGraha;
    }
    let ab = matches!(naisargika_maitri(a, b), NaisargikaMaitri::Friend);
    let ba = matches!(naisargika_maitri(b, a), NaisargikaMaitri::Friend);
    match (ab, ba) {
        (true, true) => MutualRelation::MutualFriends,
        (true, false) | (false, true) => MutualRelation::OneWayFriend,
        (false, false) => MutualRelation::NoFriendship,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::{ALL_GRAHAS, SAPTA_GRAHAS};

    #[test]
    fn sun_relations() {
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Chandra), NaisargikaMaitri::Friend);
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Shukra), NaisargikaMaitri::Enemy);
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Buddh), NaisargikaMaitri::Neutral);
    }

    #[test]
    fn moon_has_no_enemies() {
        for g in SAPTA_GRAHAS {
            assert_ne!(naisargika_maitri(Graha::Chandra, g), NaisargikaMaitri::Enemy);
        }
    }

    #[test]
    fn moon_mercury_asymmetric() {
        assert_eq!(naisargika_maitri(Graha::Chandra, Graha::Buddh), NaisargikaMaitri::Friend);
        assert_eq!(naisargika_maitri(Graha::Buddh, Graha::Chandra), NaisargikaMaitri::Enemy);
        assert_eq!(mutual_relation(Graha::Chandra, Graha::Buddh), MutualRelation::OneWayFriend);
    }

    #[test]
    fn saturn_venus_mutual() {
        assert_eq!(mutual_relation(Graha::Shani, Graha::Shukra), MutualRelation::MutualFriends);
    }

    #[test]
    fn sun_saturn_no_friendship() {
        assert_eq!(mutual_relation(Graha::Surya, Graha::Shani), MutualRelation::NoFriendship);
    }

    #[test]
    fn nodes_neutral() {
        for g in ALL_GRAHAS {
            assert_eq!(naisargika_maitri(Graha::Rahu, g), NaisargikaMaitri::Neutral);
            assert_eq!(naisargika_maitri(g, Graha::Ketu), NaisargikaMaitri::Neutral);
        }
    }

    #[test]
    fn mutual_relation_is_symmetric() {
        for a in ALL_GRAHAS {
            for b in ALL_GRAHAS {
                assert_eq!(mutual_relation(a, b), mutual_relation(b, a), "{a:?}/{b:?}");
            }
        }
    }
}
