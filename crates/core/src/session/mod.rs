pub mod edit_command;
pub mod edit_session;
