pub mod enctype;
pub mod options;

pub use enctype::{BuiltinRegistry, Enctype, EnctypeRegistry, UnknownEnctypeName};
pub use options::{ChecksumType, KdcOptions, LibraryOptions};
