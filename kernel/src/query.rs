mod record;

pub use self::record::*;
