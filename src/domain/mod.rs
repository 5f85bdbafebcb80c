pub mod lat_lng;

pub use lat_lng::LatLng;
