pub mod clear_credential;
pub mod create_session;
pub mod delete_session;
pub mod get_session;
pub mod set_credential;
