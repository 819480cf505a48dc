mod filter_vm;
mod table_vm;

pub use filter_vm::{FilterOptionVm, difficulty_options, format_progress, map_tag_options};
pub use table_vm::TableBuffer;
