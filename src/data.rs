use crate::error::SessionError;
use crate::termite::Termite;
use std::fs;
use std::path::Path;
use tracing::info;

/*------------------------------------------------------------------------------
Trail output
------------------------------------------------------------------------------*/

/// Write one `{label}-trail.csv` per termite under `dir`, creating the
/// directory if needed. Columns: frame, x, y, interacting_with, distances.
/// Interaction sets and distance vectors are rendered as `;`-joined fields so
/// a row stays one CSV record regardless of colony size.
pub fn write_trails<H, P: AsRef<Path>>(
    termites: &[Termite<H>],
    dir: P,
) -> Result<(), SessionError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    for termite in termites {
        let path = dir.join(format!("{}-trail.csv", termite.label()));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(["frame", "x", "y", "interacting_with", "distances"])?;

        for record in termite.trail().records() {
            let interacting = record
                .interacting_with
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(";");
            let distances = record
                .distances
                .iter()
                .map(|(id, d)| format!("{}:{:.2}", id, d))
                .collect::<Vec<_>>()
                .join(";");
            writer.write_record([
                record.frame_index.to_string(),
                format!("{:.1}", record.x),
                format!("{:.1}", record.y),
                interacting,
                distances,
            ])?;
        }
        writer.flush()?;
        info!(
            termite = %termite.label(),
            records = termite.trail().len(),
            path = %path.display(),
            "trail written"
        );
    }
    Ok(())
}
