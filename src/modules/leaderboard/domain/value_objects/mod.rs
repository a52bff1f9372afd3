pub mod ranked_row;

pub use ranked_row::RankedRow;
