//! Common topics offered for each well-known subject.

/// Subjects with a curated topic list, in display order.
pub const CATALOG: &[(&str, &[&str])] = &[
    (
        "Mathematics",
        &["Algebra", "Calculus", "Geometry", "Statistics", "Trigonometry"],
    ),
    (
        "Physics",
        &[
            "Mechanics",
            "Thermodynamics",
            "Electromagnetism",
            "Optics",
            "Modern Physics",
        ],
    ),
    (
        "Chemistry",
        &[
            "Organic Chemistry",
            "Inorganic Chemistry",
            "Physical Chemistry",
            "Analytical Chemistry",
        ],
    ),
    (
        "Biology",
        &["Cell Biology", "Genetics", "Ecology", "Evolution", "Physiology"],
    ),
    (
        "Computer Science",
        &[
            "Programming",
            "Data Structures",
            "Algorithms",
            "Database Systems",
            "Operating Systems",
        ],
    ),
];

/// Names of the subjects in the catalog.
pub fn known_subjects() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(subject, _)| *subject)
}

/// Topics for `subject`, matched case-insensitively.
pub fn common_topics(subject: &str) -> Option<&'static [&'static str]> {
    let subject = subject.trim();
    CATALOG
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(subject))
        .map(|(_, topics)| *topics)
}

/// Add `topic` to the selection if absent, otherwise remove it.
///
/// For interactive front ends that build a selection one click at a time;
/// the CLI takes the whole list up front.
pub fn toggle_topic(selection: &mut Vec<String>, topic: &str) {
    if let Some(pos) = selection.iter().position(|t| t == topic) {
        selection.remove(pos);
    } else {
        selection.push(topic.to_string());
    }
}

/// Selected topics that are not in the catalog for `subject`.
///
/// Empty when the subject itself is not in the catalog, since any topic is
/// acceptable there.
pub fn unknown_topics<'a>(subject: &str, selection: &'a [String]) -> Vec<&'a str> {
    let Some(known) = common_topics(subject) else {
        return Vec::new();
    };
    selection
        .iter()
        .filter(|t| !known.iter().any(|k| k.eq_ignore_ascii_case(t.trim())))
        .map(String::as_str)
        .collect()
}
