mod embed;
mod toc;

pub use embed::handle_embed_command;
pub use toc::handle_toc_command;
