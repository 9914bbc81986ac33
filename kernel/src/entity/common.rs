mod affected;

pub use self::affected::*;
