//! Weather condition code to icon kind.
//!
//! Codes follow the provider's taxonomy: 2xx thunderstorm, 5xx rain,
//! 6xx snow, 7xx atmosphere, 800 clear, 80x clouds. Drizzle (3xx) has no
//! icon of its own and falls through to [`WeatherIcon::Unknown`].

/// Icon a rendering collaborator should draw for a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherIcon {
    Sun,
    Moon,
    FewCloudsDay,
    FewCloudsNight,
    Clouds,
    Overcast,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl WeatherIcon {
    /// Icon for `code`. `night` only affects clear and few-clouds skies.
    pub const fn from_code(
        code: i32,
        night: bool,
    ) -> Self {
        match code {
            800 if night => Self::Moon,
            800 => Self::Sun,
            801 if night => Self::FewCloudsNight,
            801 => Self::FewCloudsDay,
            802..=803 => Self::Clouds,
            804 => Self::Overcast,
            500..=531 => Self::Rain,
            200..=232 => Self::Thunderstorm,
            600..=622 => Self::Snow,
            701..=781 => Self::Mist,
            _ => Self::Unknown,
        }
    }
}
