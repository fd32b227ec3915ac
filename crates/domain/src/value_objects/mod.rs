//! Value objects - Immutable, validated domain primitives

mod business_window;
mod forecast_source;
mod geo_location;
mod sky_code;

pub use business_window::BusinessWindow;
pub use forecast_source::ForecastSource;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use sky_code::SkyCode;
