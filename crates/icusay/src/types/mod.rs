mod value;

pub use value::{Value, Values};
