// CineShelf manager modules
// Managers own the client-side consistency logic between the external
// streams and the rest of the application.

pub mod bookmark_manager;
pub mod session_synchronizer;
