pub mod constants;
pub mod edit_error;
pub mod raster;
pub mod region;
