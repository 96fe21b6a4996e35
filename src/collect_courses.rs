use scraper::Html;
use tracing::info;

use course_search::collector::{fetch_page, CourseCollector};
use course_search::config::Config;
use course_search::course::{save_courses, Course};
use course_search::logging;

fn main() -> anyhow::Result<()> {
    logging::init("info");

    let config = Config::from_env()?;
    info!(
        start_url = %config.start_url,
        courses_file = %config.courses_file.display(),
        "configuration loaded"
    );

    let html = fetch_page(&config.start_url)?;
    let document = Html::parse_document(&html);
    let courses: Vec<Course> = CourseCollector::new().collect(&document).collect();

    save_courses(&config.courses_file, &courses)?;
    info!(
        count = courses.len(),
        courses_file = %config.courses_file.display(),
        "courses written"
    );
    Ok(())
}
