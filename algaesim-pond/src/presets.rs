//! Built-in reference data
//!
//! Species parameters for *Chlorella vulgaris* and a monthly climate profile
//! for Surat, Gujarat (India). Surat has three distinct seasons: a dry winter
//! (October-February), a hot pre-monsoon (March-May) and the south-west
//! monsoon (June-September).
//!
//! PAR values are daylight-hour means at the pond surface after typical
//! atmospheric and cloud losses, not clear-sky peaks.

use algaesim_core::parameters::{
    CityClimate, ClimateParams, MonthlyClimate, Season, SpeciesParams,
};
use algaesim_core::FloatValue;

/// `(season, temp_day, temp_night, par, photoperiod, rainfall, cloud_cover)` per month.
type MonthRow = (Season, FloatValue, FloatValue, FloatValue, FloatValue, FloatValue, FloatValue);

#[rustfmt::skip]
const SURAT_MONTHS: [MonthRow; 12] = [
    (Season::Dry,     30.0, 15.0, 118.0, 11.0,   2.0, 0.10),
    (Season::Dry,     32.0, 17.0, 126.0, 11.5,   1.0, 0.10),
    (Season::Hot,     35.0, 21.0, 134.0, 12.0,   1.0, 0.10),
    (Season::Hot,     38.0, 25.0, 140.0, 12.6,   2.0, 0.15),
    (Season::Hot,     37.0, 28.0, 138.0, 13.1,   8.0, 0.25),
    (Season::Monsoon, 33.0, 27.0,  96.0, 13.3, 290.0, 0.60),
    (Season::Monsoon, 30.0, 26.0,  78.0, 13.2, 600.0, 0.85),
    (Season::Monsoon, 30.0, 26.0,  82.0, 12.8, 380.0, 0.80),
    (Season::Monsoon, 31.0, 25.0, 100.0, 12.2, 230.0, 0.60),
    (Season::Dry,     34.0, 23.0, 124.0, 11.6,  35.0, 0.25),
    (Season::Dry,     33.0, 19.0, 120.0, 11.1,   8.0, 0.15),
    (Season::Dry,     31.0, 16.0, 115.0, 10.9,   2.0, 0.10),
];

/// *Chlorella vulgaris* in an open raceway.
pub fn chlorella_vulgaris() -> SpeciesParams {
    SpeciesParams::default()
}

/// Surat, India (21.17°N, 72.83°E) with mesophilic cardinal temperatures.
pub fn surat_climate() -> CityClimate {
    let months = SURAT_MONTHS
        .iter()
        .map(
            |&(season, temp_day, temp_night, par, photoperiod, rainfall, cloud_cover_fraction)| {
                MonthlyClimate {
                    season,
                    temp_day,
                    temp_night,
                    par,
                    photoperiod,
                    rainfall,
                    cloud_cover_fraction,
                }
            },
        )
        .collect();

    CityClimate {
        city: "Surat".to_string(),
        country: "India".to_string(),
        latitude: 21.17,
        longitude: 72.83,
        climate_params: ClimateParams::default(),
        months,
    }
}
