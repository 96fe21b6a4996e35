use std::io;

use tracing::{error, info};

use course_search::config::Config;
use course_search::course::load_courses;
use course_search::{logging, repl, SearchEngine};

fn main() -> anyhow::Result<()> {
    logging::init("warn");

    let config = Config::from_env()?;
    info!(courses_file = %config.courses_file.display(), "configuration loaded");

    // ! no partial load: without the record file there is nothing to search
    let courses = match load_courses(&config.courses_file) {
        Ok(courses) => courses,
        Err(e) => {
            error!(error = %e, "failed to load courses");
            println!("Error: {e}");
            std::process::exit(1);
        }
    };
    println!("✓ Loaded {} courses", courses.len());

    let search_engine = SearchEngine::new(courses);
    repl::run(&search_engine, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
