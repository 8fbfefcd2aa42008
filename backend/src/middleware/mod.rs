pub mod access_gate;
pub mod logging;
pub mod request_id;

pub use access_gate::*;
pub use logging::*;
pub use request_id::*;
