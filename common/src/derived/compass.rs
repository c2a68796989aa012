//! 16-point compass labels for wind direction.

/// Compass points clockwise from north, 22.5° apart.
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Nearest 16-point compass label for a bearing in degrees.
///
/// Any integer is accepted and folded into `0..360` first. Each sector is
/// centred on its point and a bearing exactly halfway between two points
/// rounds clockwise, so `compass(11)` is `"N"` and `compass(12)` is `"NNE"`.
///
/// This intentionally replaces the firmware's `(deg + 11) / 22` index, which
/// puts `compass(11)` in `"NNE"` and whose 22° sectors drift away from the
/// 22.5° compass points around the circle.
pub fn compass(deg: i32) -> &'static str {
    let deg = deg.rem_euclid(360);
    // round(deg / 22.5) in integer arithmetic
    let index = ((2 * deg + 22) / 45) % 16;
    COMPASS_POINTS[index as usize]
}
