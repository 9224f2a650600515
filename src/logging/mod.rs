pub mod csv_logger;

pub use csv_logger::CsvLogger;
