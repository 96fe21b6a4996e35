use std::io::{self, Write};

use crate::category::CategoryMap;
use crate::query::SearchResult;

pub const RESULT_LIMIT: usize = 20;
pub const LIST_ALL_LIMIT: usize = 50;
pub const CATEGORY_PREVIEW: usize = 5;

const WIDTH: usize = 100;

pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

pub fn display_results<W: Write>(
    out: &mut W,
    results: &[SearchResult<'_>],
    limit: usize,
) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "\nNo courses found matching your query.")?;
        return Ok(());
    }

    writeln!(out, "\n{}", rule('=', WIDTH))?;
    writeln!(
        out,
        "Found {} courses (showing top {})",
        results.len(),
        limit.min(results.len())
    )?;
    writeln!(out, "{}\n", rule('=', WIDTH))?;

    for (i, result) in results.iter().take(limit).enumerate() {
        let course = result.course;
        writeln!(out, "{}. {}", i + 1, course.title)?;
        writeln!(out, "   Match: {:.1}% | Date: {}", result.score * 100.0, course.date)?;
        writeln!(out, "   URL: {}", course.url)?;
        writeln!(out, "   {}\n", rule('-', WIDTH - 2))?;
    }
    Ok(())
}

pub fn display_categories<W: Write>(out: &mut W, categories: &CategoryMap<'_>) -> io::Result<()> {
    writeln!(out, "\n{}", rule('=', WIDTH))?;
    writeln!(out, "COURSES BY CATEGORY")?;
    writeln!(out, "{}\n", rule('=', WIDTH))?;

    for bucket in categories.by_size() {
        writeln!(out, "\n{} ({} courses)", bucket.label, bucket.courses.len())?;
        writeln!(out, "{}", rule('-', WIDTH))?;
        for (i, course) in bucket.courses.iter().take(CATEGORY_PREVIEW).enumerate() {
            writeln!(out, "  {}. {}", i + 1, course.title)?;
        }
        if bucket.courses.len() > CATEGORY_PREVIEW {
            writeln!(out, "  ... and {} more", bucket.courses.len() - CATEGORY_PREVIEW)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
