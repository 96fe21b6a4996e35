use crate::course::Course;

pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub label: &'static str,
    // lowercase substrings, any one of them puts a title in this category
    pub triggers: &'static [&'static str],
}

impl Category {
    pub fn matches(&self, title_lower: &str) -> bool {
        self.triggers.iter().any(|t| title_lower.contains(t))
    }
}

/// Checked top to bottom, the first hit wins.
pub const CATEGORY_TABLE: &[Category] = &[
    Category { label: "Python", triggers: &["python"] },
    Category { label: "JavaScript", triggers: &["javascript", "js", "node", "react", "vue"] },
    Category { label: "Excel", triggers: &["excel", "spreadsheet"] },
    Category {
        label: "Design",
        triggers: &["photoshop", "illustrator", "canva", "figma", "design"],
    },
    Category {
        label: "Video Editing",
        triggers: &["premiere", "after effects", "filmora", "capcut", "video editing"],
    },
    Category {
        label: "AI & Machine Learning",
        triggers: &["ai", "machine learning", "chatgpt", "deep learning", "neural"],
    },
    Category {
        label: "Business",
        triggers: &["business", "management", "leadership", "marketing"],
    },
    Category {
        label: "Finance",
        triggers: &["financial", "accounting", "finance", "investment"],
    },
    Category { label: "Web Development", triggers: &["web", "html", "css", "php", "wordpress"] },
    Category { label: "Database", triggers: &["sql", "mysql", "database", "mongodb"] },
    Category { label: "Cloud", triggers: &["aws", "azure", "cloud", "gcp"] },
    Category {
        label: "Cybersecurity",
        triggers: &["security", "ethical hacking", "penetration", "cybersecurity"],
    },
];

#[derive(Debug, Clone)]
pub struct CategoryBucket<'a> {
    pub label: String,
    pub courses: Vec<&'a Course>,
}

/// Buckets in the order their first course was seen.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap<'a> {
    buckets: Vec<CategoryBucket<'a>>,
}

impl<'a> CategoryMap<'a> {
    fn push(&mut self, label: &str, course: &'a Course) {
        match self.buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.courses.push(course),
            None => self.buckets.push(CategoryBucket {
                label: label.to_string(),
                courses: vec![course],
            }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[&'a Course]> {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.courses.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryBucket<'a>> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Largest bucket first; equal sizes stay in first-seen order.
    pub fn by_size(&self) -> Vec<&CategoryBucket<'a>> {
        let mut buckets: Vec<&CategoryBucket<'a>> = self.buckets.iter().collect();
        buckets.sort_by(|a, b| b.courses.len().cmp(&a.courses.len()));
        buckets
    }
}

pub fn categorize<'a>(courses: &'a [Course], table: &[Category]) -> CategoryMap<'a> {
    let mut map = CategoryMap::default();
    for course in courses {
        let title_lower = course.title.to_lowercase();
        let label = table
            .iter()
            .find(|category| category.matches(&title_lower))
            .map_or(OTHER_CATEGORY, |category| category.label);
        map.push(label, course);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses(titles: &[&str]) -> Vec<Course> {
        titles
            .iter()
            .map(|t| Course::new(*t, "https://example.com", "Unknown"))
            .collect()
    }

    #[test]
    fn every_course_lands_in_exactly_one_bucket() {
        let courses = courses(&[
            "Python and SQL for Data Analysis",
            "Advanced SQL Queries",
            "Knitting for Fun",
            "React Native Apps",
            "AWS Cloud Practitioner",
        ]);
        let map = categorize(&courses, CATEGORY_TABLE);
        let total: usize = map.iter().map(|b| b.courses.len()).sum();
        assert_eq!(total, courses.len());
        for course in &courses {
            let owners = map
                .iter()
                .filter(|b| b.courses.iter().any(|c| std::ptr::eq(*c, course)))
                .count();
            assert_eq!(owners, 1);
        }
    }

    #[test]
    fn first_category_in_table_wins() {
        let courses = courses(&["Python and SQL for Data Analysis", "Advanced SQL Queries"]);
        let map = categorize(&courses, CATEGORY_TABLE);
        assert_eq!(map.get("Python").unwrap()[0].title, "Python and SQL for Data Analysis");
        let database = map.get("Database").unwrap();
        assert_eq!(database.len(), 1);
        assert_eq!(database[0].title, "Advanced SQL Queries");
    }

    #[test]
    fn unmatched_titles_go_to_other() {
        let courses = courses(&["Knitting for Fun"]);
        let map = categorize(&courses, CATEGORY_TABLE);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(OTHER_CATEGORY).unwrap()[0].title, "Knitting for Fun");
    }

    #[test]
    fn buckets_keep_first_seen_order() {
        let courses = courses(&["Knitting", "Excel Charts", "Baking", "Excel Pivot Tables"]);
        let map = categorize(&courses, CATEGORY_TABLE);
        let labels: Vec<&str> = map.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec![OTHER_CATEGORY, "Excel"]);
        let excel: Vec<&str> = map.get("Excel").unwrap().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(excel, vec!["Excel Charts", "Excel Pivot Tables"]);
    }

    #[test]
    fn by_size_sorts_descending_and_keeps_ties_stable() {
        let courses = courses(&[
            "Figma Basics",
            "Python 101",
            "Python 201",
            "Excel Charts",
            "Python 301",
        ]);
        let map = categorize(&courses, CATEGORY_TABLE);
        let labels: Vec<&str> = map.by_size().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Python", "Design", "Excel"]);
    }

    #[test]
    fn custom_table_is_honoured() {
        const TABLE: &[Category] = &[Category { label: "Rust", triggers: &["rust", "cargo"] }];
        let courses = courses(&["Cargo Workspaces", "Python 101"]);
        let map = categorize(&courses, TABLE);
        assert_eq!(map.get("Rust").unwrap().len(), 1);
        assert_eq!(map.get(OTHER_CATEGORY).unwrap()[0].title, "Python 101");
    }
}
