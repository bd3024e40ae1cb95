//! Static month -> bar color table.

use chrono::Month;

/// Bar fill color for each calendar month. January and July share a color.
pub static MONTH_COLORS: [(Month, &str); 12] = [
    (Month::January, "#9B111E"),
    (Month::February, "#9966CC"),
    (Month::March, "#7FFFD4"),
    (Month::April, "#FFFFFF"),
    (Month::May, "#50C787"),
    (Month::June, "#5D3FD3"),
    (Month::July, "#9B111E"),
    (Month::August, "#b4E1B1"),
    (Month::September, "#0F52BA"),
    (Month::October, "#A8C3BC"),
    (Month::November, "#fFFCC00"),
    (Month::December, "#40E0D0"),
];

/// Look up the bar color for a month name.
///
/// Only full English month names match, case-sensitively ("January", not
/// "january" or "Jan"). Anything else has no color.
pub fn color_for_month(name: &str) -> Option<&'static str> {
    MONTH_COLORS
        .iter()
        .find(|(month, _)| month.name() == name)
        .map(|(_, color)| *color)
}
