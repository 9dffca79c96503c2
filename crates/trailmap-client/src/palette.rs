//! Stable trajectory colors for the render layer.

const PALETTE: [&str; 10] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4",
    "#46f0f0", "#f032e6", "#bcf60c", "#008080", "#9a6324",
];

/// Color for the trajectory at the given catalog position.
///
/// Stable for a given position, so a trajectory keeps its color across
/// selection changes.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
