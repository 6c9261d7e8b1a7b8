//! Writing solutions to a flat text file.
//!
//! ```text
//! 272 total solutions discovered
//! sequential,1,2,4,7,5,8,3,6,9
//! standard,1,2,6,4,7,8,3,5,9
//! ```

use crate::error::SearchError;
use crate::search::{SearchResult, Solution};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// How the formula is named at the start of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagStyle {
    /// `sequential` / `standard`
    #[default]
    Long,
    /// `S` / `O`
    Short,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub tag_style: TagStyle,
    /// Write the `<N> total solutions discovered` line first.
    pub write_header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tag_style: TagStyle::Long,
            write_header: true,
        }
    }
}

impl OutputConfig {
    pub fn with_tag_style(mut self, tag_style: TagStyle) -> Self {
        self.tag_style = tag_style;
        self
    }

    pub fn with_header(mut self, write_header: bool) -> Self {
        self.write_header = write_header;
        self
    }
}

pub fn format_solution(solution: &Solution, tag_style: TagStyle) -> String {
    match tag_style {
        TagStyle::Long => solution.to_string(),
        TagStyle::Short => format!("{},{}", solution.formula.short_tag(), solution.assignment),
    }
}

/// Write the solution listing to any writer.
pub fn write_solutions<W: Write>(
    writer: &mut W,
    result: &SearchResult,
    config: &OutputConfig,
) -> io::Result<()> {
    if config.write_header {
        writeln!(writer, "{} total solutions discovered", result.total_matches)?;
    }
    for solution in &result.solutions {
        writeln!(writer, "{}", format_solution(solution, config.tag_style))?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write the listing to it, flushing before
/// returning.
pub fn write_solutions_file(
    path: &Path,
    result: &SearchResult,
    config: &OutputConfig,
) -> Result<(), SearchError> {
    let to_error = |source| SearchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_solutions(&mut writer, result, config).map_err(to_error)?;
    writer
        .into_inner()
        .map_err(|e| to_error(e.into_error()))?
        .sync_all()
        .map_err(to_error)
}
