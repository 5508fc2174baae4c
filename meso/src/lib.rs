mod error;
mod opt;
pub mod par;
mod path_read;
mod process;
pub mod seq;
mod stage;

pub use error::Error;
pub use opt::Opt;
pub use path_read::PathRead;
pub use process::process;
pub use stage::Stage;
