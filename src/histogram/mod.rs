pub mod aggregate;
pub mod exec;
pub mod output;
pub mod render;

pub use aggregate::ALL_AUTHORS;
pub use exec::exec;
pub use output::{output_json, output_summary};
pub use render::render;
