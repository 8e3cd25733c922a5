pub mod lat_lng;
pub mod language;
pub mod prediction;
pub mod request_config;
pub mod response_status;

pub use lat_lng::LatLng;
pub use language::Language;
pub use prediction::{PredictionSubstring, PredictionTerm, StructuredFormatting};
pub use request_config::{ParamsSerializer, RequestConfig};
pub use response_status::ResponseStatus;
