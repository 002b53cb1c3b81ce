pub mod cartesian;
pub mod spherical;

pub use cartesian::{Cartesian3, PlanePoint};
pub use spherical::{
    euclidean_distance, latitude_longitude, project_to_unit_sphere, to_cartesian, LatLon,
};
