//! Reading and writing palettes as CSV, one swatch per row with columns `index`, `r`, `g`, `b` and
//! `hex`. The float channels are what round-trips; the hex code is there for people and for tools
//! that want it, and is ignored when reading.

use std::io::{Read, Write};

use crate::color::RGBColor;

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    index: usize,
    r: f32,
    g: f32,
    b: f32,
    hex: String,
}

/// Writes a palette to `writer` as CSV with a header row.
/// # Errors
/// Returns any error from the underlying writer.
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// # use colorjourney::export::write_csv;
/// let mut out = vec![];
/// write_csv(&[RGBColor::BLACK, RGBColor::WHITE], &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text, "index,r,g,b,hex\n0,0.0,0.0,0.0,#000000\n1,1.0,1.0,1.0,#FFFFFF\n");
/// ```
pub fn write_csv<W: Write>(colors: &[RGBColor], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (index, color) in colors.iter().enumerate() {
        wtr.serialize(Record {
            index,
            r: color.r,
            g: color.g,
            b: color.b,
            hex: color.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads a palette written by [`write_csv`]. Rows come back in file order; the `index` column
/// isn't checked.
/// # Errors
/// Returns an error if the data can't be read or a row doesn't have the expected columns.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RGBColor>, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut colors = vec![];
    for result in rdr.deserialize() {
        let record: Record = result?;
        colors.push(RGBColor {
            r: record.r,
            g: record.g,
            b: record.b,
        });
    }
    Ok(colors)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::config::Configuration;
    use crate::journey::Journey;

    #[test]
    fn test_palette_survives_csv() {
        let journey = Journey::new(Configuration::new(vec![
            RGBColor{r: 0.8, g: 0.3, b: 0.1},
            RGBColor{r: 0.1, g: 0.4, b: 0.7},
        ]))
        .unwrap();
        let palette = journey.discrete(12);
        let mut buf = vec![];
        write_csv(&palette, &mut buf).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert_eq!(text.lines().count(), 13);
        assert!(text.lines().nth(4).unwrap().ends_with(&palette[3].to_string()));
        assert_eq!(read_csv(&buf[..]).unwrap(), palette);
    }
    #[test]
    fn test_bad_rows() {
        let data = "index,r,g,b,hex\n0,0.5,oops,0.5,#808080\n";
        assert!(read_csv(data.as_bytes()).is_err());
    }
    #[test]
    fn test_empty_palette() {
        let mut buf = vec![];
        write_csv(&[], &mut buf).unwrap();
        assert!(read_csv(&buf[..]).unwrap().is_empty());
    }
}
