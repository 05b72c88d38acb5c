pub mod entities;
pub mod errors_service;
pub mod memory;
pub mod paging;
pub mod service;

pub use entities::*;
pub use errors_service::*;
pub use memory::*;
pub use paging::*;
pub use service::*;
