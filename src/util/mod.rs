#[cfg(test)]
pub mod alloc;
pub mod fmt;
#[cfg(test)]
pub mod panic;
pub mod result;
