use std::path::Path as FsPath;

use svg::node::element::{Circle, Group, Path, Text};
use svg::Document;
use tracing::info;

use crate::errors::ExportError;
use crate::geo_types::matrix::{rotate_matrix, svg_matrix, translate_matrix};
use crate::geo_types::svg::ToSvg;
use crate::sketch::frame::{DrawCommand, Frame};

const PATH_STROKE: &str = "rgba(0,0,0,0.1)";
const PENDULUM_STROKE: &str = "rgba(0,0,0,0.4)";
const JOINT_FILL: &str = "rgba(0,0,0,0.2)";

/// Convert a frame into a standalone SVG document, with the viewbox fitted
/// to its content.
pub fn frame_to_svg(frame: &Frame, font_family: &str) -> Result<Document, ExportError> {
    let bounds = frame.bounds(10.0).ok_or(ExportError::EmptyFrame)?;
    let mut paths = Group::new()
        .set("fill", "none")
        .set("stroke", PATH_STROKE)
        .set("stroke-width", 0.8);
    let mut pendulums = Group::new()
        .set("stroke", PENDULUM_STROKE)
        .set("stroke-width", 0.8);
    let mut glyphs = Group::new().set("font-family", font_family.to_string());

    for command in &frame.commands {
        match command {
            DrawCommand::Path(line) => {
                paths = paths.add(line.to_path());
            }
            DrawCommand::Link(segment) => {
                let data = svg::node::element::path::Data::new()
                    .move_to((segment.start.x(), segment.start.y()))
                    .line_to((segment.end.x(), segment.end.y()));
                pendulums = pendulums.add(Path::new().set("d", data));
            }
            DrawCommand::Joint(point) => {
                pendulums = pendulums.add(
                    Circle::new()
                        .set("cx", point.x())
                        .set("cy", point.y())
                        .set("r", 1.0)
                        .set("stroke", "none")
                        .set("fill", JOINT_FILL),
                );
            }
            DrawCommand::Glyph { placement, color } => {
                let [r, g, b, _] = color.to_rgba8();
                let tx = translate_matrix(placement.position.x(), placement.position.y())
                    * rotate_matrix(placement.rotation);
                glyphs = glyphs.add(
                    Text::new(placement.glyph.to_string())
                        .set("transform", svg_matrix(&tx))
                        .set("font-size", placement.size)
                        .set("fill", format!("rgb({},{},{})", r, g, b)),
                );
            }
        }
    }

    Ok(Document::new()
        .set(
            "viewBox",
            (bounds.min().x, bounds.min().y, bounds.width(), bounds.height()),
        )
        .set("width", bounds.width())
        .set("height", bounds.height())
        .add(paths)
        .add(glyphs)
        .add(pendulums))
}

/// Write the frame to `path` as SVG. Nothing about the simulation changes,
/// whether or not the write succeeds.
pub fn save_frame<P: AsRef<FsPath>>(frame: &Frame, font_family: &str, path: P) -> Result<(), ExportError> {
    let document = frame_to_svg(frame, font_family)?;
    svg::save(path.as_ref(), &document)?;
    info!("Saved snapshot to {}", path.as_ref().display());
    Ok(())
}
