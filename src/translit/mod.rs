mod convert;
mod segment;
mod table;

pub use convert::{convert, VowelSign};
pub use segment::{split_clusters, trim_clusters};
pub use table::PhonemeTable;
