pub mod reader;
pub mod writer;

pub use reader::{read_matrix, read_tableau, ParseError, Position};
pub use writer::{format_solution, format_tableau, Report, ReportStatus};
