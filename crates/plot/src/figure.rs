use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` hex string.
    ///
    /// Returns `None` if the string is not exactly a `#` followed by six hex
    /// digits.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Relative luminance in `[0, 1]`, using the Rec. 709 weights.
    #[must_use]
    pub fn luminance(self) -> f64 {
        (0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b))
            / 255.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Page colors shared by every figure in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Style {
    /// Returns `true` when the background is closer to black than to white.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.background.luminance() < 0.5
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            foreground: Rgb::BLACK,
        }
    }
}

/// A single line drawn through a sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    name: Option<String>,
    color: Rgb,
    points: Vec<[f64; 2]>,
}

impl Trace {
    /// Creates an unnamed trace from `[x, y]` points.
    pub fn new(color: Rgb, points: impl IntoIterator<Item = [f64; 2]>) -> Self {
        Self {
            name: None,
            color,
            points: points.into_iter().collect(),
        }
    }

    /// Sets the legend name of the trace.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Iterates over the points whose coordinates are both finite.
    ///
    /// Diverged runs produce infinities and NaNs; a renderer has nothing to
    /// draw for those.
    pub fn finite_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|&[x, y]| x.is_finite() && y.is_finite())
    }
}

/// A titled chart with labeled axes and any number of traces.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    x_label: String,
    y_label: String,
    traces: Vec<Trace>,
}

impl Figure {
    /// Creates an empty figure with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            traces: Vec::new(),
        }
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Appends a trace. Traces are drawn in insertion order.
    #[must_use]
    pub fn trace(mut self, trace: Trace) -> Self {
        self.traces.push(trace);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn x_axis(&self) -> &str {
        &self.x_label
    }

    #[must_use]
    pub fn y_axis(&self) -> &str {
        &self.y_label
    }

    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }
}
