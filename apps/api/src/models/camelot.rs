//! Camelot wheel notation
//!
//! The Camelot wheel arranges the 24 major/minor keys on 12 positions so that
//! harmonically compatible keys sit next to each other. Minor keys carry the
//! letter `A`, major keys the letter `B`.

use std::fmt;

/// Camelot wheel position for major keys
/// Index corresponds to pitch class (0=C, 1=C#, etc.)
const CAMELOT_MAJOR: [u8; 12] = [
    8,  // C major
    3,  // C# major
    10, // D major
    5,  // D# major
    12, // E major
    7,  // F major
    2,  // F# major
    9,  // G major
    4,  // G# major
    11, // A major
    6,  // A# major
    1,  // B major
];

/// Camelot wheel position for minor keys
/// Index corresponds to pitch class (0=C, 1=C#, etc.)
const CAMELOT_MINOR: [u8; 12] = [
    5,  // C minor
    12, // C# minor
    7,  // D minor
    2,  // D# minor
    9,  // E minor
    4,  // F minor
    11, // F# minor
    6,  // G minor
    1,  // G# minor
    8,  // A minor
    3,  // A# minor
    10, // B minor
];

/// Key mode on the Camelot wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMode {
    /// `A` ring
    Minor,
    /// `B` ring
    Major,
}

impl KeyMode {
    fn letter(self) -> char {
        match self {
            Self::Minor => 'A',
            Self::Major => 'B',
        }
    }
}

/// A position on the Camelot wheel (1A..12B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CamelotKey {
    number: u8,
    mode: KeyMode,
}

impl CamelotKey {
    /// Build a key from a wheel number (1-12) and mode
    pub fn new(number: u8, mode: KeyMode) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self { number, mode })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Parse either Camelot notation ("8A", "12b") or standard notation
    /// ("C", "Am", "F# minor", "Bb major").
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_camelot(raw).or_else(|| Self::parse_standard(raw))
    }

    /// Parse Camelot notation only
    pub fn parse_camelot(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().to_ascii_uppercase();
        if trimmed.len() < 2 || !trimmed.is_ascii() {
            return None;
        }
        let (number, letter) = trimmed.split_at(trimmed.len() - 1);
        let mode = match letter {
            "A" => KeyMode::Minor,
            "B" => KeyMode::Major,
            _ => return None,
        };
        Self::new(number.parse().ok()?, mode)
    }

    /// Parse standard key notation and map it onto the wheel
    pub fn parse_standard(raw: &str) -> Option<Self> {
        let normalized = raw
            .trim()
            .replace('\u{266F}', "#")
            .replace('\u{266D}', "b");
        let mut chars = normalized.chars();

        let base: i32 = match chars.next()?.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let rest = chars.as_str();
        let (offset, rest) = match rest.chars().next() {
            Some('#') => (1, &rest[1..]),
            Some('b') => (-1, &rest[1..]),
            _ => (0, rest),
        };

        let mode = match rest.trim().to_ascii_lowercase().as_str() {
            "" | "maj" | "major" => KeyMode::Major,
            "m" | "min" | "minor" => KeyMode::Minor,
            _ => return None,
        };

        let pitch_class = (base + offset).rem_euclid(12) as usize;
        let number = match mode {
            KeyMode::Major => CAMELOT_MAJOR[pitch_class],
            KeyMode::Minor => CAMELOT_MINOR[pitch_class],
        };
        Self::new(number, mode)
    }

    /// Clockwise distance around the wheel from `self` to `other` (0-11)
    pub fn clockwise_steps(&self, other: &Self) -> u8 {
        ((other.number as i16 - self.number as i16).rem_euclid(12)) as u8
    }
}

impl fmt::Display for CamelotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.mode.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camelot_notation() {
        let key = CamelotKey::parse("8A").unwrap();
        assert_eq!(key.number(), 8);
        assert_eq!(key.mode(), KeyMode::Minor);

        let key = CamelotKey::parse(" 12b ").unwrap();
        assert_eq!(key.number(), 12);
        assert_eq!(key.mode(), KeyMode::Major);

        assert!(CamelotKey::parse("13A").is_none());
        assert!(CamelotKey::parse("0B").is_none());
        assert!(CamelotKey::parse("7C").is_none());
    }

    #[test]
    fn test_parse_standard_notation() {
        assert_eq!(CamelotKey::parse("C").unwrap().to_string(), "8B");
        assert_eq!(CamelotKey::parse("Am").unwrap().to_string(), "8A");
        assert_eq!(CamelotKey::parse("A minor").unwrap().to_string(), "8A");
        assert_eq!(CamelotKey::parse("F# minor").unwrap().to_string(), "11A");
        assert_eq!(CamelotKey::parse("Gb minor").unwrap().to_string(), "11A");
        assert_eq!(CamelotKey::parse("Bb major").unwrap().to_string(), "6B");
        assert_eq!(CamelotKey::parse("D\u{266D}").unwrap().to_string(), "3B");
        assert_eq!(CamelotKey::parse("Cb").unwrap().to_string(), "1B");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CamelotKey::parse("").is_none());
        assert!(CamelotKey::parse("H minor").is_none());
        assert!(CamelotKey::parse("C dorian").is_none());
    }

    #[test]
    fn test_clockwise_steps_wraps() {
        let twelve = CamelotKey::new(12, KeyMode::Minor).unwrap();
        let one = CamelotKey::new(1, KeyMode::Minor).unwrap();
        assert_eq!(twelve.clockwise_steps(&one), 1);
        assert_eq!(one.clockwise_steps(&twelve), 11);
        assert_eq!(one.clockwise_steps(&one), 0);
    }
}
