mod reflect;

pub use reflect::{Object, Reflect};
