mod rowset;

pub use self::rowset::RowSet;
