use csscolorparser::Color as CssColor;
use geo::bounding_rect::BoundingRect;
use geo_types::{coord, LineString, MultiPoint, Point, Rect};

use crate::pendulum::LinkSegment;
use crate::trail::GlyphPlacement;

/// A single drawing instruction for whatever renders the sketch.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// The recorded stroke, as a polyline.
    Path(LineString<f64>),
    /// One pendulum link.
    Link(LinkSegment),
    /// Marker at the end of a link.
    Joint(Point<f64>),
    /// A character of the source text laid on a trail.
    Glyph {
        placement: GlyphPlacement,
        color: CssColor,
    },
}

/// Everything to draw for one frame, in painter's order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphPlacement> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Glyph { placement, .. } => Some(placement),
            _ => None,
        })
    }

    /// Bounds of everything in the frame, grown by `margin` on every side.
    /// Glyphs are padded by their own size so rotated text is not cut off.
    pub fn bounds(&self, margin: f64) -> Option<Rect<f64>> {
        let mut points: Vec<Point<f64>> = vec![];
        let mut pad: f64 = 0.0;
        for command in &self.commands {
            match command {
                DrawCommand::Path(line) => points.extend(line.points()),
                DrawCommand::Link(segment) => {
                    points.push(segment.start);
                    points.push(segment.end);
                }
                DrawCommand::Joint(point) => points.push(*point),
                DrawCommand::Glyph { placement, .. } => {
                    points.push(placement.position);
                    pad = pad.max(placement.size);
                }
            }
        }
        let bounds = MultiPoint::from(points).bounding_rect()?;
        let grow = margin + pad;
        Some(Rect::new(
            coord! {x: bounds.min().x - grow, y: bounds.min().y - grow},
            coord! {x: bounds.max().x + grow, y: bounds.max().y + grow},
        ))
    }
}
