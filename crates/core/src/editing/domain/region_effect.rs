use crate::shared::edit_error::EditError;
use crate::shared::raster::Raster;

/// Domain interface for a destructive effect applied to an extracted region.
///
/// Implementations rewrite `patch` in place and must keep its dimensions.
pub trait RegionEffect: Send {
    fn apply(&self, patch: &mut Raster) -> Result<(), EditError>;
}
