//! Static film-development timing lookup.
//!
//! Maps a (film, developer, ISO) triple to a development time and
//! dilution for 35mm film at 20°C. The table is keyed on the display
//! names the clients send (e.g. `"Tri-X 400"`, `"Rodinal"`).

use serde::Serialize;

use crate::error::CoreError;

/// A single development-time recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevelopmentTime {
    /// Development time in minutes.
    pub time: f64,
    /// Developer dilution, e.g. `"1+50"`.
    pub dilution: &'static str,
}

/// Films known to the lookup table.
const FILMS: &[&str] = &[
    "Tri-X 400",
    "T-MAX 400",
    "FOMAPAN 400",
    "RPX 400",
    "HP5+ 400",
];

/// Developers known to the lookup table.
const DEVELOPERS: &[&str] = &[
    "T-MAX Dev",
    "Rodinal",
    "Ilfosol 3",
    "HC-110",
    "Ilfotec LC-29",
];

/// (film, developer, iso, minutes, dilution)
const TABLE: &[(&str, &str, u32, f64, &'static str)] = &[
    // Tri-X 400
    ("Tri-X 400", "T-MAX Dev", 400, 5.5, "1+4"),
    ("Tri-X 400", "T-MAX Dev", 800, 7.0, "1+4"),
    ("Tri-X 400", "T-MAX Dev", 1600, 9.5, "1+4"),
    ("Tri-X 400", "Rodinal", 200, 9.0, "1+50"),
    ("Tri-X 400", "Rodinal", 400, 13.0, "1+50"),
    ("Tri-X 400", "Rodinal", 800, 17.0, "1+50"),
    ("Tri-X 400", "HC-110", 400, 6.0, "1+31"),
    ("Tri-X 400", "HC-110", 800, 8.0, "1+31"),
    ("Tri-X 400", "HC-110", 1600, 11.0, "1+31"),
    ("Tri-X 400", "Ilfosol 3", 400, 9.0, "1+9"),
    ("Tri-X 400", "Ilfotec LC-29", 400, 8.5, "1+19"),
    // T-MAX 400
    ("T-MAX 400", "T-MAX Dev", 200, 5.5, "1+4"),
    ("T-MAX 400", "T-MAX Dev", 400, 6.5, "1+4"),
    ("T-MAX 400", "T-MAX Dev", 800, 8.0, "1+4"),
    ("T-MAX 400", "T-MAX Dev", 1600, 10.5, "1+4"),
    ("T-MAX 400", "Rodinal", 400, 14.0, "1+50"),
    ("T-MAX 400", "HC-110", 400, 6.5, "1+31"),
    ("T-MAX 400", "HC-110", 800, 9.0, "1+31"),
    ("T-MAX 400", "Ilfosol 3", 400, 8.5, "1+9"),
    ("T-MAX 400", "Ilfotec LC-29", 400, 9.0, "1+19"),
    // FOMAPAN 400
    ("FOMAPAN 400", "Rodinal", 200, 9.0, "1+50"),
    ("FOMAPAN 400", "Rodinal", 400, 14.0, "1+50"),
    ("FOMAPAN 400", "HC-110", 400, 7.5, "1+31"),
    ("FOMAPAN 400", "Ilfosol 3", 400, 10.0, "1+9"),
    ("FOMAPAN 400", "T-MAX Dev", 400, 7.0, "1+4"),
    // RPX 400
    ("RPX 400", "Rodinal", 400, 15.0, "1+50"),
    ("RPX 400", "HC-110", 400, 7.0, "1+31"),
    ("RPX 400", "Ilfosol 3", 400, 11.0, "1+9"),
    ("RPX 400", "Ilfotec LC-29", 400, 10.0, "1+19"),
    // HP5+ 400
    ("HP5+ 400", "Ilfosol 3", 400, 6.5, "1+9"),
    ("HP5+ 400", "Ilfosol 3", 800, 12.0, "1+9"),
    ("HP5+ 400", "Rodinal", 400, 11.0, "1+50"),
    ("HP5+ 400", "Rodinal", 1600, 20.0, "1+50"),
    ("HP5+ 400", "HC-110", 400, 5.0, "1+31"),
    ("HP5+ 400", "HC-110", 800, 7.5, "1+31"),
    ("HP5+ 400", "Ilfotec LC-29", 400, 6.5, "1+19"),
    ("HP5+ 400", "T-MAX Dev", 400, 6.5, "1+4"),
];

/// Look up the development time for a (film, developer, ISO) triple.
///
/// An unknown film or developer name is a validation error; a known pair
/// with no entry at the requested ISO is a not-found.
pub fn lookup(film: &str, developer: &str, iso: u32) -> Result<DevelopmentTime, CoreError> {
    if !FILMS.contains(&film) {
        return Err(CoreError::Validation(format!("Unknown film: {film}")));
    }
    if !DEVELOPERS.contains(&developer) {
        return Err(CoreError::Validation(format!(
            "Unknown developer: {developer}"
        )));
    }

    TABLE
        .iter()
        .find(|(f, d, i, _, _)| *f == film && *d == developer && *i == iso)
        .map(|(_, _, _, time, dilution)| DevelopmentTime {
            time: *time,
            dilution,
        })
        .ok_or_else(|| CoreError::NotFound {
            entity: "Development time",
            key: format!("{film} / {developer} @ {iso}"),
        })
}
