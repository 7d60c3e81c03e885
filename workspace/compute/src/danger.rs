use std::fmt;

/// Avalanche danger rating as published in the artifacts.
///
/// The pipeline emits the closed set {-1, 1, 2, 3, 4}: danger 0 and 5 were
/// never issued in the training data, so any code outside the set is read
/// as [`DangerLevel::Unknown`]. That keeps rendering total over a sparse
/// label space instead of failing on a level the vocabulary lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DangerLevel {
    #[default]
    Unknown,
    Low,
    Moderate,
    Considerable,
    High,
}

impl DangerLevel {
    /// Total mapping from the integer code in the artifacts.
    pub fn from_code(code: i8) -> Self {
        match code {
            1 => DangerLevel::Low,
            2 => DangerLevel::Moderate,
            3 => DangerLevel::Considerable,
            4 => DangerLevel::High,
            _ => DangerLevel::Unknown,
        }
    }

    pub fn code(self) -> i8 {
        match self {
            DangerLevel::Unknown => -1,
            DangerLevel::Low => 1,
            DangerLevel::Moderate => 2,
            DangerLevel::Considerable => 3,
            DangerLevel::High => 4,
        }
    }

    /// Color token used by the stylesheet (`--danger-<token>` variables).
    pub fn color_token(self) -> &'static str {
        match self {
            DangerLevel::Unknown => "unknown",
            DangerLevel::Low => "low",
            DangerLevel::Moderate => "mod",
            DangerLevel::Considerable => "con",
            DangerLevel::High => "hig",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DangerLevel::Unknown => "Unknown",
            DangerLevel::Low => "Low",
            DangerLevel::Moderate => "Moderate",
            DangerLevel::Considerable => "Considerable",
            DangerLevel::High => "High",
        }
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
