//! CSV export of a location set

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::types::LocationSet;

/// Column order of the export
pub const CSV_HEADER: [&str; 7] =
    ["id", "name", "latitude", "longitude", "capacity", "install_year", "status"];

#[derive(Serialize)]
struct CsvRow {
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
    capacity: String,
    install_year: String,
    status: String,
}

/// Writes one row per turbine, in upload order
pub fn write_csv<W: Write>(set: &LocationSet, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in set {
        let props = &record.properties;
        csv_writer.serialize(CsvRow {
            id: props.id.to_string(),
            name: props.name.to_string(),
            latitude: record.position.lat,
            longitude: record.position.lon,
            capacity: props.capacity.to_string(),
            install_year: props.install_year.to_string(),
            status: props.status.to_string(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Convenience wrapper returning the export as a string
pub fn to_csv_string(set: &LocationSet) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(set, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::validate;

    #[test]
    fn test_csv_export() {
        let set = validate(
            br#"{"type":"FeatureCollection","features":[
                {"geometry":{"type":"Point","coordinates":[126.0,34.0]},
                 "properties":{"id":"T1","capacity":8,"status":"operating"}},
                {"geometry":{"type":"Point","coordinates":[126.2,34.5]}}
            ]}"#,
        )
        .unwrap();

        let csv = to_csv_string(&set).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert_eq!(lines[1], "T1,N/A,34.0,126.0,8,N/A,operating");
        assert_eq!(lines[2], "N/A,N/A,34.5,126.2,N/A,N/A,N/A");
        assert_eq!(lines.len(), 3);
    }
}
