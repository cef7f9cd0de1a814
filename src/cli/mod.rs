pub mod decrypt;
pub mod encrypt;
pub mod keyfile;
pub mod keygen;
pub mod textfile;

pub use decrypt::*;
pub use encrypt::*;
pub use keyfile::*;
pub use keygen::*;
pub use textfile::*;
