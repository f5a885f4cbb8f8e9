pub mod bins_csv;
pub mod dataset;
pub mod parser;
pub mod synthetic;
pub mod zones_csv;

mod table;
