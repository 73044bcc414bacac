pub mod backend;
pub mod messages;
pub mod supervisor;
pub mod traits;
