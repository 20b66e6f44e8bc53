use log::{debug, info};
use std::path::Path;

use crate::toc::parser::{parse_headings, Heading};
use crate::utils::error::{BoxResult, DoctoolError};
use crate::utils::fs;

/// Marker opening a generated TOC block
pub const TAG_TOC_START: &str = "<!-- TOC -->";
/// Marker closing a generated TOC block
pub const TAG_TOC_END: &str = "<!-- /TOC -->";

/// Remove a previously generated TOC block from the document lines
///
/// Drops the span from the line containing the start marker through the line
/// containing the end marker, inclusive; everything else is kept in order.
/// A start marker without a matching end marker is malformed input.
pub fn remove_existing_toc(lines: &[String]) -> BoxResult<Vec<String>> {
    let (filtered, in_toc) = lines
        .iter()
        .fold((Vec::new(), false), |(mut kept, in_toc), line| {
            if in_toc {
                if line.contains(TAG_TOC_END) {
                    debug!("Removed existing TOC block");
                    (kept, false)
                } else {
                    (kept, true)
                }
            } else if line.contains(TAG_TOC_START) {
                (kept, true)
            } else {
                kept.push(line.clone());
                (kept, false)
            }
        });

    if in_toc {
        return Err(DoctoolError::Toc(
            "start marker without matching end marker".to_string(),
        )
        .into());
    }

    Ok(filtered)
}

/// Render headings as a marker-delimited list of anchor links
///
/// Each entry is indented four spaces per depth level. Anchors are derived
/// from the title by replacing spaces with hyphens, removing commas and
/// lowercasing; no other characters are normalized.
pub fn render_toc(headings: &[Heading]) -> Vec<String> {
    let entries = headings.iter().map(|heading| {
        let anchor = format!(
            "#{}",
            heading.title.replace(' ', "-").replace(',', "").to_lowercase()
        );
        format!(
            "{}- [{}]({})",
            "    ".repeat(heading.depth),
            heading.title,
            anchor
        )
    });

    std::iter::once(String::new())
        .chain(std::iter::once(TAG_TOC_START.to_string()))
        .chain(entries)
        .chain(std::iter::once(TAG_TOC_END.to_string()))
        .collect()
}

/// Regenerate the table of contents of a Markdown file
///
/// Reads `source`, strips any existing TOC block, parses headings and splices
/// a freshly rendered block in immediately below the first heading, then
/// writes the result to `destination` with `\n` line endings. A document with
/// no headings leaves the destination untouched.
pub fn generate_toc<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> BoxResult<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    info!("Reading {}", source.display());
    let text = fs::read_file(source)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    let lines = remove_existing_toc(&lines)?;
    let headings = parse_headings(&lines);

    if headings.is_empty() {
        info!("No headings found in {}, nothing to do", source.display());
        return Ok(());
    }

    let toc_lines = render_toc(&headings);

    // The block goes in one line below the first heading's marker line and
    // consumes exactly one existing line at that offset
    let splice_index = headings[0].line_index + 1;
    let final_text = lines[..splice_index]
        .iter()
        .chain(toc_lines.iter())
        .chain(lines.iter().skip(splice_index + 1))
        .map(String::as_str)
        .collect::<Vec<&str>>()
        .join("\n");

    info!("Writing {}", destination.display());
    fs::write_file(destination, &final_text)?;

    info!("Done");
    Ok(())
}
