//! Strongly-typed primitives for isocube.
//!
//! - Numeric inputs are validated at the boundary via `try_new`
//! - Colors keep the caller's text until a shading operation needs channels

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

/// A point in canvas space (pixels, y grows downward)
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinite values.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Size of the drawing surface in pixels.
///
/// Zero dimensions are allowed and simply produce zero-size cubes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport (unchecked).
    pub const fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    /// Create a viewport with validation (rejects NaN, infinite, negative)
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        for v in [width, height] {
            check_finite(v)?;
            if v < 0.0 {
                return Err(NumericError::Negative);
            }
        }
        Ok(Viewport { width, height })
    }

    /// The smaller of the two dimensions
    #[inline]
    pub fn min_dim(self) -> f64 {
        self.width.min(self.height)
    }

    /// Center of the surface
    pub fn center(self) -> Point {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(1000.0, 800.0)
    }
}

/// Unclamped RGB channels.
///
/// Shading may push channels past 255; clamping happens on output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    fn scale(self, k: f64) -> Rgb {
        Rgb::new(self.r * k, self.g * k, self.b * k)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn channel(v: f64) -> u8 {
            v.round().clamp(0.0, 255.0) as u8
        }
        write!(f, "rgb({},{},{})", channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Per-step factor for `darker`/`brighter`.
const SHADE_STEP: f64 = 0.7;

/// A fill color.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// No paint
    None,
    /// A recognized CSS color, printed as the caller wrote it
    Css { text: String, rgb: Rgb },
    /// Computed channels (the result of shading)
    Rgb(Rgb),
    /// Unrecognized text, passed through untouched
    Raw(String),
}

impl Color {
    /// Channels, when known
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            Color::Css { rgb, .. } | Color::Rgb(rgb) => Some(*rgb),
            Color::None | Color::Raw(_) => None,
        }
    }

    /// Darken by `k` steps. Colors without known channels are returned as-is.
    pub fn darker(&self, k: f64) -> Color {
        match self.rgb() {
            Some(rgb) => Color::Rgb(rgb.scale(SHADE_STEP.powf(k))),
            None => self.clone(),
        }
    }

    /// Brighten by `k` steps. Colors without known channels are returned as-is.
    pub fn brighter(&self, k: f64) -> Color {
        match self.rgb() {
            Some(rgb) => Color::Rgb(rgb.scale(1.0 / SHADE_STEP.powf(k))),
            None => self.clone(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }
}

impl FromStr for Color {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("none") {
            return Ok(Color::None);
        }
        Ok(match parse_rgb(text) {
            Some(rgb) => Color::Css {
                text: text.to_string(),
                rgb,
            },
            None => Color::Raw(s.to_string()),
        })
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(c) => c,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Css { text, .. } => write!(f, "{}", text),
            Color::Rgb(rgb) => write!(f, "{}", rgb),
            Color::Raw(s) => write!(f, "{}", s),
        }
    }
}

fn parse_rgb(s: &str) -> Option<Rgb> {
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            return None;
        }
        let mut ch = [0.0; 3];
        for (slot, part) in ch.iter_mut().zip(&parts) {
            *slot = part.trim().parse::<u8>().ok()? as f64;
        }
        return Some(Rgb::new(ch[0], ch[1], ch[2]));
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let digit = |i: usize, n: usize| u8::from_str_radix(hex.get(i..i + n)?, 16).ok();
        return match hex.len() {
            6 => Some(Rgb::new(
                digit(0, 2)? as f64,
                digit(2, 2)? as f64,
                digit(4, 2)? as f64,
            )),
            // #abc -> #aabbcc
            3 => Some(Rgb::new(
                (digit(0, 1)? * 17) as f64,
                (digit(1, 1)? * 17) as f64,
                (digit(2, 1)? * 17) as f64,
            )),
            _ => None,
        };
    }

    let name = s.to_ascii_lowercase();
    let idx = NAMED_COLORS
        .binary_search_by(|(n, _)| (*n).cmp(name.as_str()))
        .ok()?;
    let value = NAMED_COLORS[idx].1;
    Some(Rgb::new(
        ((value >> 16) & 0xff) as f64,
        ((value >> 8) & 0xff) as f64,
        (value & 0xff) as f64,
    ))
}

/// CSS named colors as 24-bit values, sorted by name
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Viewport tests ====================

    #[test]
    fn viewport_try_new_valid() {
        assert!(Viewport::try_new(1000.0, 800.0).is_ok());
        assert!(Viewport::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn viewport_try_new_rejects_nan() {
        assert_eq!(Viewport::try_new(f64::NAN, 1.0), Err(NumericError::NaN));
    }

    #[test]
    fn viewport_try_new_rejects_infinity() {
        assert_eq!(
            Viewport::try_new(1.0, f64::INFINITY),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn viewport_try_new_rejects_negative() {
        assert_eq!(Viewport::try_new(-1.0, 1.0), Err(NumericError::Negative));
    }

    #[test]
    fn viewport_min_dim_and_center() {
        let vp = Viewport::new(1000.0, 800.0);
        assert_eq!(vp.min_dim(), 800.0);
        assert_eq!(vp.center(), DVec2::new(500.0, 400.0));
    }

    // ==================== Color tests ====================

    #[test]
    fn color_named_keeps_text() {
        let c = Color::from("red");
        assert_eq!(c.to_string(), "red");
        assert_eq!(c.rgb(), Some(Rgb::new(255.0, 0.0, 0.0)));
    }

    #[test]
    fn color_hex_forms() {
        assert_eq!(Color::from("#ff8000").rgb(), Some(Rgb::new(255.0, 128.0, 0.0)));
        assert_eq!(Color::from("#abc").rgb(), Some(Rgb::new(170.0, 187.0, 204.0)));
    }

    #[test]
    fn color_rgb_function() {
        assert_eq!(
            Color::from("rgb(10, 20, 30)").rgb(),
            Some(Rgb::new(10.0, 20.0, 30.0))
        );
    }

    #[test]
    fn color_none() {
        assert!(Color::from("none").is_none());
        assert!(Color::from("NONE").is_none());
        assert_eq!(Color::None.to_string(), "none");
    }

    #[test]
    fn color_full_css_name_set() {
        assert_eq!(Color::from("coral").rgb(), Some(Rgb::new(255.0, 127.0, 80.0)));
        assert_eq!(Color::from("DarkRed").rgb(), Some(Rgb::new(139.0, 0.0, 0.0)));
        assert_eq!(Color::from("rebeccapurple").rgb(), Some(Rgb::new(102.0, 51.0, 153.0)));
        assert_eq!(Color::from("yellowgreen").rgb(), Some(Rgb::new(154.0, 205.0, 50.0)));
        assert_eq!(Color::from("tomato").to_string(), "tomato");
    }

    #[test]
    fn named_color_table_is_sorted() {
        assert_eq!(NAMED_COLORS.len(), 148);
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn color_hex_rejects_signs() {
        assert_eq!(Color::from("#+f+f+f"), Color::Raw("#+f+f+f".to_string()));
        assert_eq!(Color::from("#+ff"), Color::Raw("#+ff".to_string()));
        assert!(Color::from("#12345g").rgb().is_none());
    }

    #[test]
    fn color_unknown_passes_through() {
        let c = Color::from("not-a-color");
        assert_eq!(c, Color::Raw("not-a-color".to_string()));
        assert_eq!(c.darker(1.2), c);
        assert_eq!(c.brighter(1.2), c);
        assert_eq!(c.to_string(), "not-a-color");
    }

    #[test]
    fn color_darker_scales_channels() {
        // 255 * 0.7^1.2 = 166.2
        let c = Color::from("red").darker(1.2);
        assert_eq!(c.to_string(), "rgb(166,0,0)");
    }

    #[test]
    fn color_brighter_clamps_on_output() {
        let c = Color::from("red").brighter(1.2);
        assert_eq!(c.to_string(), "rgb(255,0,0)");
        let rgb = c.rgb().unwrap();
        assert!(rgb.r > 255.0, "channels stay unclamped until printed");
    }

    #[test]
    fn color_darker_then_brighter_round_trips() {
        let base = Color::from("steelblue");
        let back = base.darker(1.0).brighter(1.0);
        assert_eq!(back.to_string(), "rgb(70,130,180)");
    }
}
