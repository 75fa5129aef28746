pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{empty, error, header, is_quiet, success, usage, warn};
pub use table::student_table;
pub use theme::{theme, Theme};
