//! Closed category sets used by the rental records.
//!
//! Each category parses from either the numeric code used by the bike
//! sharing dataset or a case-insensitive name. Codes must be bare digits.
//! Punctuation and spacing in names are ignored, so "Light_rainsnow",
//! "light rain/snow" and "LightRainSnow" are the same value.

use serde::Serialize;
use std::fmt;

fn normalize(value: &str) -> String {
    let value = value.trim();
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return value.to_string();
    }
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Season of the year, ordered as coded in the dataset (1-4).
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn parse(value: &str) -> Option<Season> {
        match normalize(value).as_str() {
            "1" | "spring" => Some(Season::Spring),
            "2" | "summer" => Some(Season::Summer),
            "3" | "fall" | "autumn" => Some(Season::Fall),
            "4" | "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Weather situation, from clear (1) to heavy rain or snow (4).
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize)]
pub enum WeatherSituation {
    Clear,
    Misty,
    LightRainSnow,
    HeavyRainSnow,
}

impl WeatherSituation {
    pub fn parse(value: &str) -> Option<WeatherSituation> {
        match normalize(value).as_str() {
            "1" | "clear" | "clearpartlycloudy" | "partlycloudy" => Some(WeatherSituation::Clear),
            "2" | "misty" | "mist" | "mistcloudy" | "mistycloudy" | "cloudy" => {
                Some(WeatherSituation::Misty)
            }
            "3" | "lightrainsnow" | "lightsnowrain" | "lightrain" | "lightsnow" => {
                Some(WeatherSituation::LightRainSnow)
            }
            "4" | "heavyrainsnow" | "heavyrain" | "heavysnow" | "severeweather" => {
                Some(WeatherSituation::HeavyRainSnow)
            }
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherSituation::Clear => "Clear",
            WeatherSituation::Misty => "Misty",
            WeatherSituation::LightRainSnow => "Light Rain/Snow",
            WeatherSituation::HeavyRainSnow => "Heavy Rain/Snow",
        }
    }
}

/// Day of the week, numbered 0-6 starting from Sunday.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn parse(value: &str) -> Option<Weekday> {
        match normalize(value).as_str() {
            "0" | "sun" | "sunday" => Some(Weekday::Sunday),
            "1" | "mon" | "monday" => Some(Weekday::Monday),
            "2" | "tue" | "tues" | "tuesday" => Some(Weekday::Tuesday),
            "3" | "wed" | "wednesday" => Some(Weekday::Wednesday),
            "4" | "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thursday),
            "5" | "fri" | "friday" => Some(Weekday::Friday),
            "6" | "sat" | "saturday" => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Index 0-6, Sunday first.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        Weekday::ALL[value.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for WeatherSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.short_name())
    }
}
