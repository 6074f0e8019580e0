mod render_reports;
mod run;

pub mod result;

pub use render_reports::render_error_line;
pub use result::{DriverError, Error};
pub use run::run;
