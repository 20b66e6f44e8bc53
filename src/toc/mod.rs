mod generator;
mod parser;

pub use generator::{generate_toc, remove_existing_toc, render_toc, TAG_TOC_END, TAG_TOC_START};
pub use parser::{parse_headings, Heading};
