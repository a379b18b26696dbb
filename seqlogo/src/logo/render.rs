//! Geometry of a sequence logo in a fixed drawing area.
//!
//! The [`Scene`] computed here only contains rectangles and anchor points:
//! the painter (SVG, canvas, PDF, ...) is free to fill each [`Placement`]
//! with a letter outline of its choice.

use generic_array::GenericArray;

use super::Logo;
use crate::abc::Alphabet;
use crate::abc::Dna;
use crate::abc::Symbol;

/// The colour of the box drawn around the highlighted column.
pub const MARKER_COLOR: &str = "#C13B42";

// --- Dimensions --------------------------------------------------------------

/// The size of the drawing area of a logo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width of the whole drawing, including the endpoint labels.
    pub full_width: f64,
    /// Width of the area holding the letters.
    pub letter_width: f64,
    /// Height of the whole drawing, including the position labels.
    pub full_height: f64,
    /// Height of the view box, with some margin below the drawing.
    pub viewbox_height: f64,
    /// Height of the area holding the letters.
    pub letter_height: f64,
    /// Font size of the endpoint and position labels.
    pub font_size: f64,
}

impl Dimensions {
    /// The horizontal space left on each side of the letters.
    #[inline]
    pub fn gutter(&self) -> f64 {
        (self.full_width - self.letter_width) / 2.0
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            full_width: 550.0,
            letter_width: 500.0,
            full_height: 180.0,
            viewbox_height: 200.0,
            letter_height: 150.0,
            font_size: 20.0,
        }
    }
}

// --- LinearScale -------------------------------------------------------------

/// A linear mapping from a data domain to a drawing range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a new scale mapping `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// The domain of the scale.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The range of the scale.
    #[inline]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a value from the domain to the range.
    ///
    /// A collapsed domain maps everything to the middle of the range.
    pub fn scale(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 != d0 { (x - d0) / (d1 - d0) } else { 0.5 };
        r0 + t * (r1 - r0)
    }
}

// --- Palette -----------------------------------------------------------------

/// The fill colour of each symbol of an alphabet.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette<A: Alphabet = Dna> {
    colors: GenericArray<&'static str, A::K>,
}

impl<A: Alphabet> Palette<A> {
    /// Create a new palette from one colour per symbol, in column order.
    pub fn new<C>(colors: C) -> Self
    where
        C: Into<GenericArray<&'static str, A::K>>,
    {
        Self {
            colors: colors.into(),
        }
    }

    /// Get the colour of a symbol.
    #[inline]
    pub fn color(&self, symbol: A::Symbol) -> &'static str {
        self.colors[symbol.as_index()]
    }
}

impl Default for Palette<Dna> {
    fn default() -> Self {
        Self::new(["#489655", "#335C95", "#EFB549", "#C13B42"])
    }
}

// --- Scene -------------------------------------------------------------------

/// An axis-aligned rectangle, with `y` growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The box a single glyph must be drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<A: Alphabet = Dna> {
    /// The column of the logo the glyph belongs to.
    pub column: usize,
    /// The bounding box of the glyph.
    pub rect: Rect,
    /// The symbol to draw.
    pub symbol: A::Symbol,
    /// The fill colour of the symbol.
    pub color: &'static str,
}

/// A text label anchored at a point.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Everything needed to paint a logo in a drawing area.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<A: Alphabet = Dna> {
    /// The dimensions the scene was computed for.
    pub dimensions: Dimensions,
    /// Maps a column index to its left edge.
    pub xscale: LinearScale,
    /// Maps count units to a height in the drawing.
    pub yscale: LinearScale,
    /// Maps bits to the information axis on the left of the logo.
    pub bits: LinearScale,
    /// The glyph boxes, column by column.
    pub placements: Vec<Placement<A>>,
    /// The box around the highlighted column, if any.
    pub marker: Option<Rect>,
    /// The 5' and 3' labels at both ends of the logo.
    pub endpoints: (Label, Label),
    /// The one-based position labels below each column.
    pub positions: Vec<Label>,
}

impl<A: Alphabet> Scene<A> {
    /// The width of one column of the logo.
    #[inline]
    pub fn column_width(&self) -> f64 {
        self.xscale.scale(1.0) - self.xscale.scale(0.0)
    }
}

impl<A: Alphabet> Logo<A> {
    /// Compute the geometry of the logo in the given drawing area.
    ///
    /// Glyphs without a strictly positive height are not placed.
    pub fn scene(&self, dimensions: &Dimensions, palette: &Palette<A>) -> Scene<A> {
        let m = self.len() as f64;
        let gutter = dimensions.gutter();
        let xscale = LinearScale::new((0.0, m), (gutter, gutter + dimensions.letter_width));
        let yscale = LinearScale::new((0.0, self.max_count()), (0.0, dimensions.letter_height));
        let bits = LinearScale::new(self.bits_domain(), (dimensions.letter_height, 0.0));
        let column_width = xscale.scale(1.0) - xscale.scale(0.0);

        let placements = self
            .columns()
            .iter()
            .enumerate()
            .flat_map(|(i, column)| column.iter().map(move |glyph| (i, glyph)))
            .filter(|(_, glyph)| glyph.height() > 0.0)
            .map(|(i, glyph)| Placement {
                column: i,
                rect: Rect {
                    x: xscale.scale(i as f64),
                    y: yscale.scale(glyph.start()),
                    width: column_width,
                    height: yscale.scale(glyph.height()),
                },
                symbol: glyph.symbol(),
                color: palette.color(glyph.symbol()),
            })
            .collect();

        let marker = self.marker().map(|i| Rect {
            x: xscale.scale(i as f64) - 1.0,
            y: -1.0,
            width: dimensions.letter_width / m,
            height: dimensions.full_height + 2.0,
        });

        let endpoint_y = (dimensions.full_height + dimensions.letter_height) / 2.0 + 10.0;
        let endpoints = (
            Label {
                text: String::from("5'"),
                x: 0.0,
                y: endpoint_y,
            },
            Label {
                text: String::from("3'"),
                x: dimensions.full_width,
                y: endpoint_y,
            },
        );

        let positions = (0..self.len())
            .map(|i| Label {
                text: (i + 1).to_string(),
                x: xscale.scale(i as f64) + column_width / 2.0 + dimensions.font_size / 3.0,
                y: dimensions.letter_height + 10.0,
            })
            .collect();

        Scene {
            dimensions: *dimensions,
            xscale,
            yscale,
            bits,
            placements,
            marker,
            endpoints,
            positions,
        }
    }
}
