//! Static named-color table
//!
//! A small fixed set of CSS-style color names. This is deliberately not a
//! full X11/CSS table; the names here are the ones accepted by the string
//! parser, nothing more.

/// Name -> hex literal, lowercase on both sides. `gray` and `grey`, and
/// the `cyan`/`aqua` and `green`/`lime` aliases, map to identical values.
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#00ff00"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("pink", "#ffc0cb"),
    ("brown", "#a52a2a"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("olive", "#808000"),
    ("maroon", "#800000"),
    ("aqua", "#00ffff"),
    ("lime", "#00ff00"),
    ("silver", "#c0c0c0"),
];

/// Resolve a (lowercase, trimmed) color name to its hex literal.
///
/// Linear scan; the table is small and fixed so anything fancier would
/// not pay for itself.
pub fn lookup(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, hex)| *hex)
}
