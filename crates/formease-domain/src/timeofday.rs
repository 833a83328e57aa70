//! TimeOfDay module - the enumeration behind the qualitative preference field

/// Qualitative time-of-day preference
///
/// The one inferential field of the extraction contract. The backend must
/// produce one of these four values (or nothing at all) even when the source
/// document never states a time of day literally - "I love sunrises" implies
/// Morning. Any other string is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// Early part of the day
    Morning,

    /// Middle of the day
    Afternoon,

    /// Late part of the day
    Evening,

    /// After dark
    Night,
}

impl TimeOfDay {
    /// All four allowed values, in contract order
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Get the contract literal for this value
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }

    /// Parse a contract literal
    ///
    /// Exact match only. The contract enumerates the literal strings
    /// "Morning", "Afternoon", "Evening", "Night"; case variants and
    /// synonyms ("dawn", "MORNING") are not contract values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Morning" => Some(TimeOfDay::Morning),
            "Afternoon" => Some(TimeOfDay::Afternoon),
            "Evening" => Some(TimeOfDay::Evening),
            "Night" => Some(TimeOfDay::Night),
            _ => None,
        }
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid time of day: {}", s))
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
