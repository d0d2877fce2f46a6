use geo_types::{CoordNum, LineString};
use num_traits::ToPrimitive;
use svg::node::element::path::Data;
use svg::node::element::Path;

pub trait ToSvg<T>
    where T: CoordNum {
    /// Convert the Geometry into an SVG PathData item
    fn to_path_data(&self) -> Data;

    /// Convert the Geometry into an unstyled SVG Path
    fn to_path(&self) -> Path {
        Path::new().set("d", self.to_path_data())
    }
}

impl<T> ToSvg<T> for LineString<T>
    where T: CoordNum,
          T: ToPrimitive {
    fn to_path_data(&self) -> Data {
        let mut coords = self.coords().filter_map(|c| Some((c.x.to_f64()?, c.y.to_f64()?)));
        let mut svg_data = Data::new();
        if let Some(first) = coords.next() {
            svg_data = svg_data.move_to(first);
            for point in coords {
                svg_data = svg_data.line_to(point);
            }
        }
        svg_data
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_path_data_commands() {
        let line = LineString::new(vec![
            coord! {x: 0.0f64, y: 0.0f64},
            coord! {x: 0.0f64, y: 100.0f64},
            coord! {x: 100.0f64, y: 100.0f64},
        ]);
        let data = line.to_path_data();
        // One move_to and two line_to commands.
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_path_attribute() {
        let line = LineString::from(vec![(1.0f64, 2.0f64), (3.0, 4.0)]);
        let path = line.to_path().to_string();
        assert!(path.starts_with("<path"));
        assert!(path.contains("M1,2"));
        assert!(path.contains("L3,4"));
    }

    #[test]
    fn test_empty_line_has_no_commands() {
        let line = LineString::<f64>::new(vec![]);
        assert!(line.to_path_data().is_empty());
    }
}
