//! Grade and risk-level to visual class mappings.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    DarkRed,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Blue => "blue",
            Tone::Yellow => "yellow",
            Tone::Orange => "orange",
            Tone::Red => "red",
            Tone::DarkRed => "dark-red",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Single-letter grades only; anything else (including `A+`) is unrecognised.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "A" | "a" => Some(Grade::A),
            "B" | "b" => Some(Grade::B),
            "C" | "c" => Some(Grade::C),
            "D" | "d" => Some(Grade::D),
            "F" | "f" => Some(Grade::F),
            _ => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Grade::A => Tone::Green,
            Grade::B => Tone::Blue,
            Grade::C => Tone::Yellow,
            Grade::D => Tone::Orange,
            Grade::F => Tone::Red,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Grade::A => "grade-a",
            Grade::B => "grade-b",
            Grade::C => "grade-c",
            Grade::D => "grade-d",
            Grade::F => "grade-f",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Case-insensitive; the service is inconsistent between endpoints.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "critical" => Some(RiskLevel::Critical),
            _ => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RiskLevel::Low => Tone::Green,
            RiskLevel::Medium => Tone::Yellow,
            RiskLevel::High => Tone::Red,
            RiskLevel::Critical => Tone::DarkRed,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
            RiskLevel::Critical => "risk-critical",
        }
    }
}

/// Classes for a grade badge, e.g. `grade-a tone-green`.
pub fn grade_classes(raw: &str) -> String {
    match Grade::parse(raw) {
        Some(grade) => format!("{} tone-{}", grade.css_class(), grade.tone().as_str()),
        None => format!("grade-unknown tone-{}", Tone::Neutral.as_str()),
    }
}

/// Classes for a risk badge, e.g. `risk-high tone-red`.
pub fn risk_classes(raw: &str) -> String {
    match RiskLevel::parse(raw) {
        Some(level) => format!("{} tone-{}", level.css_class(), level.tone().as_str()),
        None => format!("risk-unknown tone-{}", Tone::Neutral.as_str()),
    }
}
