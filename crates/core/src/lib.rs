pub mod editing;
pub mod image_io;
pub mod selection;
pub mod session;
pub mod shared;

pub use session::edit_command::EditCommand;
pub use session::edit_session::EditSession;
pub use shared::edit_error::EditError;
pub use shared::raster::Raster;
pub use shared::region::Region;
