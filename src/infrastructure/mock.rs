//! In-memory dataset backing every page of the portal.
//!
//! Everything a real deployment would fetch from a backend is generated
//! here from a seed, so the same seed always produces the same catalog.

use crate::domain::assessment::{AnswerOption, AssessmentKind, QuestionDraft};
use crate::domain::library::{AssessmentFolder, FileKind, MaterialFile};
use crate::domain::paper::{ReviewedOption, ReviewedPaper, ReviewedQuestion};
use crate::domain::records::{
    MonthlyTrend, PaperStatus, SavedPaper, SkillCategory, SkillScore, StudentReport, TestResult,
};
use crate::domain::school::{Gender, Student};
use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Science",
    "English",
    "Social Studies",
    "Computer Science",
    "General Knowledge",
];

const CLASS_NAMES: &[&str] = &[
    "Class 6 - A",
    "Class 6 - B",
    "Class 7 - A",
    "Class 7 - B",
    "Class 8 - A",
];

const GROUP_NAMES: &[&str] = &["Group A", "Group B", "Group C"];

const BATCHES: &[&str] = &["Batch 2024", "Batch 2025", "Batch 2026"];

const UNIT_TOPICS: &[&str] = &[
    "Fractions and Decimals",
    "Algebraic Expressions",
    "Linear Equations",
    "Photosynthesis",
    "The Solar System",
    "States of Matter",
    "Reading Comprehension",
    "Grammar and Tenses",
    "Essay Writing",
    "Maps and Globes",
    "The Indian Constitution",
    "Basic Programming",
];

const FIRST_NAMES: &[&str] = &[
    "Aisha", "Rahul", "Priya", "Arjun", "Meera", "Vikram", "Sneha", "Karan", "Divya", "Rohan",
    "Ananya", "Aditya",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Verma", "Nair", "Patel", "Iyer", "Reddy", "Khan", "Das", "Mehta", "Joshi",
];

const STATES: &[&str] = &[
    "Kerala",
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Delhi",
    "Gujarat",
];

const FOCUS_AREAS: &[&str] = &[
    "Time Management",
    "Logical Reasoning",
    "Creative Writing",
    "Public Speaking",
    "Visual Memory",
    "Numerical Ability",
];

const PAPER_TITLES: &[&str] = &[
    "Midterm Mathematics",
    "Science Unit Test",
    "English Comprehension",
    "Algebra Checkpoint",
    "GK Rapid Round",
    "History Timeline Review",
    "Geometry Fundamentals",
    "Grammar Assessment",
    "Solar System Quiz",
    "Logical Reasoning Drill",
];

const FOLDER_NAMES: &[&str] = &[
    "Algebra Basics",
    "Geometry Drills",
    "Grammar Practice",
    "Science Lab Notes",
    "History Timelines",
    "Reading Passages",
    "Mental Maths",
    "Essay Prompts",
    "Map Work Sheets",
];

const FOLDER_CATEGORIES: &[&str] = &[
    "Mathematics",
    "Science",
    "English",
    "Social Studies",
    "General",
];

const RING_SKILLS: &[&str] = &["Observation", "Retention", "Focus", "Application"];

const CATEGORY_SKILLS: &[(&str, &[&str])] = &[
    (
        "Basic Skills",
        &["Reading", "Writing", "Arithmetic", "Vocabulary"],
    ),
    (
        "Critical Thinking",
        &["Analysis", "Problem Solving", "Pattern Recognition"],
    ),
    (
        "Personality Development",
        &["Teamwork", "Communication", "Self Discipline"],
    ),
];

// (text, options, correct index, points)
const QUESTION_BANK: &[(&str, &[&str], usize, u32)] = &[
    (
        "What is the largest planet in the Solar System?",
        &["Earth", "Jupiter", "Mars", "Venus"],
        1,
        2,
    ),
    (
        "Which gas do plants absorb during photosynthesis?",
        &["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
        2,
        2,
    ),
    (
        "What is 3/4 expressed as a decimal?",
        &["0.25", "0.5", "0.75", "1.25"],
        2,
        1,
    ),
    (
        "Which of these is a proper noun?",
        &["city", "Ganga", "river", "mountain"],
        1,
        1,
    ),
    (
        "Solve: 2x + 6 = 14. What is x?",
        &["2", "3", "4", "5"],
        2,
        3,
    ),
    (
        "Which state of matter has a fixed volume but no fixed shape?",
        &["Solid", "Liquid", "Gas", "Plasma"],
        1,
        2,
    ),
    (
        "Who wrote the Indian national anthem?",
        &[
            "Rabindranath Tagore",
            "Bankim Chandra Chatterjee",
            "Sarojini Naidu",
            "Subhas Chandra Bose",
        ],
        0,
        2,
    ),
    (
        "Which device is used to measure temperature?",
        &["Barometer", "Thermometer", "Hygrometer", "Altimeter"],
        1,
        1,
    ),
    (
        "What is the perimeter of a square with side 6 cm?",
        &["12 cm", "18 cm", "24 cm", "36 cm"],
        2,
        2,
    ),
    (
        "Which punctuation mark ends an interrogative sentence?",
        &["Full stop", "Comma", "Question mark", "Colon"],
        2,
        1,
    ),
];

/// The full mock dataset. Same seed, same catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCatalog {
    pub seed: u64,
    pub subjects: Vec<String>,
    pub class_names: Vec<String>,
    pub group_names: Vec<String>,
    pub batches: Vec<String>,
    pub unit_topics: Vec<String>,
    pub students: Vec<Student>,
    pub saved_papers: Vec<SavedPaper>,
    pub folder_categories: Vec<String>,
    pub folders: Vec<AssessmentFolder>,
    pub materials_folder_name: String,
    pub material_files: Vec<MaterialFile>,
    pub reports: Vec<StudentReport>,
    pub reviewed_papers: Vec<ReviewedPaper>,
    pub question_pool: Vec<QuestionDraft>,
}

impl MockCatalog {
    /// Catalog anchored to today's date.
    pub fn generate(seed: u64) -> Self {
        Self::generate_at(seed, Utc::now().date_naive())
    }

    /// Catalog anchored to an explicit date (tests pin this).
    pub fn generate_at(seed: u64, anchor: NaiveDate) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let students = gen_students(&mut rng);
        let saved_papers = gen_saved_papers(&mut rng, anchor);
        let folders = gen_folders(&mut rng);
        let material_files = gen_material_files(&mut rng);
        let reports = students
            .iter()
            .map(|s| gen_report(&mut rng, s.clone(), anchor))
            .collect();
        let question_pool = gen_question_pool(&mut rng);
        let reviewed_papers = gen_reviewed_papers(&mut rng, &students);

        Self {
            seed,
            subjects: to_strings(SUBJECTS),
            class_names: to_strings(CLASS_NAMES),
            group_names: to_strings(GROUP_NAMES),
            batches: to_strings(BATCHES),
            unit_topics: to_strings(UNIT_TOPICS),
            students,
            saved_papers,
            folder_categories: to_strings(FOLDER_CATEGORIES),
            folders,
            materials_folder_name: "Algebra Basics".to_string(),
            material_files,
            reports,
            reviewed_papers,
            question_pool,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seeded_id(rng: &mut StdRng) -> Uuid {
    Uuid::from_u128(rng.random())
}

fn pick<'a>(rng: &mut StdRng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

fn gen_students(rng: &mut StdRng) -> Vec<Student> {
    (0..24)
        .map(|i| {
            let first = pick(rng, FIRST_NAMES);
            let last = pick(rng, LAST_NAMES);
            let gender = match rng.random_range(0..10) {
                0..=4 => Gender::Male,
                5..=8 => Gender::Female,
                _ => Gender::Other,
            };
            let dob = NaiveDate::from_ymd_opt(
                2010 + rng.random_range(0..5),
                rng.random_range(1..=12),
                rng.random_range(1..=28),
            )
            .unwrap_or_default();

            let focus_count = rng.random_range(2..=3);
            let focus_start = rng.random_range(0..FOCUS_AREAS.len());
            let focus_areas = (0..focus_count)
                .map(|k| FOCUS_AREAS[(focus_start + k) % FOCUS_AREAS.len()].to_string())
                .collect();

            Student {
                id: seeded_id(rng),
                full_name: format!("{} {}", first, last),
                class_name: pick(rng, CLASS_NAMES).to_string(),
                group_name: pick(rng, GROUP_NAMES).to_string(),
                gender,
                date_of_birth: dob,
                email: format!(
                    "{}.{}{}@example.edu",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    i
                ),
                contact_number: format!(
                    "+91 9{:04} {:05}",
                    rng.random_range(0..10_000u32),
                    rng.random_range(0..100_000u32)
                ),
                state: pick(rng, STATES).to_string(),
                focus_areas,
            }
        })
        .collect()
}

fn gen_saved_papers(rng: &mut StdRng, anchor: NaiveDate) -> Vec<SavedPaper> {
    let mut papers = Vec::new();

    for kind in [AssessmentKind::Assessment, AssessmentKind::Quiz] {
        for i in 0..16 {
            let status = match i % 3 {
                0 => PaperStatus::Scheduled,
                1 => PaperStatus::Completed,
                _ => PaperStatus::Saved,
            };

            // Scheduled papers sit ahead of the anchor, the rest behind it,
            // dense enough that the current and previous months have rows.
            let scheduled_on = match status {
                PaperStatus::Scheduled => anchor + Duration::days(rng.random_range(0..45)),
                _ => anchor - Duration::days(rng.random_range(0..75)),
            };

            papers.push(SavedPaper {
                id: seeded_id(rng),
                kind,
                title: PAPER_TITLES[i % PAPER_TITLES.len()].to_string(),
                batch: pick(rng, BATCHES).to_string(),
                scheduled_on,
                status,
            });
        }
    }

    papers
}

fn gen_folders(rng: &mut StdRng) -> Vec<AssessmentFolder> {
    FOLDER_NAMES
        .iter()
        .map(|name| AssessmentFolder {
            id: seeded_id(rng),
            name: name.to_string(),
            file_count: rng.random_range(3..=24),
            category: pick(rng, FOLDER_CATEGORIES).to_string(),
        })
        .collect()
}

fn gen_material_files(rng: &mut StdRng) -> Vec<MaterialFile> {
    let names = [
        ("Worksheet - Linear Equations.pdf", FileKind::Pdf),
        ("Practice Set 2.pdf", FileKind::Pdf),
        ("Chapter Summary.pdf", FileKind::Pdf),
        ("Formula Chart.png", FileKind::Image),
        ("Graph Paper Scan.png", FileKind::Image),
        ("Class Notes Week 12.doc", FileKind::Document),
        ("Revision Plan.doc", FileKind::Document),
        ("Sample Question Paper.pdf", FileKind::Pdf),
        ("Diagram - Number Line.png", FileKind::Image),
        ("Homework Tracker.doc", FileKind::Document),
    ];

    names
        .iter()
        .map(|(name, kind)| MaterialFile {
            id: seeded_id(rng),
            name: name.to_string(),
            kind: *kind,
            size_kb: rng.random_range(120..=4096),
        })
        .collect()
}

fn gen_report(rng: &mut StdRng, student: Student, anchor: NaiveDate) -> StudentReport {
    // Three series drifting gently upward over the year, clamped to 1..=5.
    let mut basic = 1.5 + rng.random_range(0.0..1.0);
    let mut critical = 1.5 + rng.random_range(0.0..1.0);
    let mut personality = 1.5 + rng.random_range(0.0..1.0);
    let mut drift = |value: &mut f32, rng: &mut StdRng| {
        *value = (*value + rng.random_range(-0.3..0.5)).clamp(1.0, 5.0);
        *value
    };

    let trends = (1..=12)
        .map(|month| MonthlyTrend {
            month,
            basic: drift(&mut basic, rng),
            critical: drift(&mut critical, rng),
            personality: drift(&mut personality, rng),
        })
        .collect();

    let skill_rings = RING_SKILLS
        .iter()
        .map(|name| {
            let out_of = if rng.random_bool(0.5) { 4 } else { 5 };
            SkillScore {
                name: name.to_string(),
                achieved: rng.random_range(1..=out_of),
                out_of,
            }
        })
        .collect();

    let categories = CATEGORY_SKILLS
        .iter()
        .map(|(title, skills)| SkillCategory {
            title: title.to_string(),
            overall: SkillScore {
                name: "Overall".to_string(),
                achieved: rng.random_range(2..=5),
                out_of: 5,
            },
            skills: skills
                .iter()
                .map(|skill| SkillScore {
                    name: skill.to_string(),
                    achieved: rng.random_range(1..=5),
                    out_of: 5,
                })
                .collect(),
        })
        .collect();

    let results = (0..rng.random_range(6..=8))
        .map(|i| {
            let total = rng.random_range(8..=20) * 5;
            let passing = total * 2 / 5;
            let started_on = anchor - Duration::days(rng.random_range(5..150));
            TestResult {
                id: seeded_id(rng),
                // Alternate so both report tabs have rows for every student
                kind: if i % 2 == 0 {
                    AssessmentKind::Assessment
                } else {
                    AssessmentKind::Quiz
                },
                test_name: PAPER_TITLES[i % PAPER_TITLES.len()].to_string(),
                started_on,
                ended_at: started_on.and_hms_opt(11, 30, 0).unwrap_or_default(),
                total_marks: total,
                passing_marks: passing,
                marks_scored: rng.random_range(0..=total),
            }
        })
        .collect();

    StudentReport {
        student,
        trends,
        skill_rings,
        categories,
        results,
    }
}

fn gen_question_pool(rng: &mut StdRng) -> Vec<QuestionDraft> {
    QUESTION_BANK
        .iter()
        .map(|(text, options, correct_idx, points)| {
            let options: Vec<AnswerOption> = options
                .iter()
                .map(|o| AnswerOption {
                    id: seeded_id(rng),
                    text: o.to_string(),
                })
                .collect();
            let correct_option_id = options.get(*correct_idx).map(|o| o.id);

            QuestionDraft {
                id: seeded_id(rng),
                text: text.to_string(),
                points: *points,
                options,
                correct_option_id,
            }
        })
        .collect()
}

fn gen_reviewed_papers(rng: &mut StdRng, students: &[Student]) -> Vec<ReviewedPaper> {
    students
        .iter()
        .take(6)
        .map(|student| {
            let questions: Vec<ReviewedQuestion> = QUESTION_BANK
                .iter()
                .take(5)
                .enumerate()
                .map(|(i, (text, options, correct_idx, points))| {
                    let selected_idx = rng.random_range(0..options.len());
                    ReviewedQuestion {
                        number: i + 1,
                        text: text.to_string(),
                        points: *points,
                        options: options
                            .iter()
                            .enumerate()
                            .map(|(k, o)| ReviewedOption {
                                text: o.to_string(),
                                selected: k == selected_idx,
                                correct: k == *correct_idx,
                            })
                            .collect(),
                    }
                })
                .collect();

            let max_score: u32 = questions.iter().map(|q| q.points).sum();
            let score: u32 = questions
                .iter()
                .filter(|q| q.options.iter().any(|o| o.selected && o.correct))
                .map(|q| q.points)
                .sum();
            let star_rating = if max_score == 0 {
                0
            } else {
                ((score as f32 / max_score as f32) * 5.0).round() as u8
            };

            ReviewedPaper {
                student_name: student.full_name.clone(),
                assessment_title: "General Aptitude Assessment".to_string(),
                score,
                max_score,
                skill_percentages: RING_SKILLS
                    .iter()
                    .map(|name| (name.to_string(), rng.random_range(55..=95)))
                    .collect(),
                star_rating,
                questions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = MockCatalog::generate_at(7, anchor());
        let b = MockCatalog::generate_at(7, anchor());
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = MockCatalog::generate_at(7, anchor());
        let b = MockCatalog::generate_at(8, anchor());
        assert_ne!(a.students, b.students);
    }

    #[test]
    fn test_catalog_is_populated() {
        let catalog = MockCatalog::generate_at(7, anchor());

        assert_eq!(catalog.students.len(), 24);
        assert!(!catalog.saved_papers.is_empty());
        assert!(!catalog.folders.is_empty());
        assert!(!catalog.material_files.is_empty());
        assert_eq!(catalog.reports.len(), catalog.students.len());
        assert_eq!(catalog.reviewed_papers.len(), 6);
        assert_eq!(catalog.question_pool.len(), QUESTION_BANK.len());
    }

    #[test]
    fn test_both_paper_kinds_and_all_statuses_present() {
        let catalog = MockCatalog::generate_at(7, anchor());

        for kind in [AssessmentKind::Assessment, AssessmentKind::Quiz] {
            for status in [
                PaperStatus::Scheduled,
                PaperStatus::Completed,
                PaperStatus::Saved,
            ] {
                assert!(
                    catalog
                        .saved_papers
                        .iter()
                        .any(|p| p.kind == kind && p.status == status),
                    "missing papers for {:?}/{:?}",
                    kind,
                    status
                );
            }
        }
    }

    #[test]
    fn test_question_pool_has_valid_correct_ids() {
        let catalog = MockCatalog::generate_at(7, anchor());

        for q in &catalog.question_pool {
            let correct = q.correct_option_id.expect("pool questions are keyed");
            assert!(q.options.iter().any(|o| o.id == correct));
        }
    }

    #[test]
    fn test_report_trends_cover_twelve_months() {
        let catalog = MockCatalog::generate_at(7, anchor());
        let report = &catalog.reports[0];

        assert_eq!(report.trends.len(), 12);
        for (i, t) in report.trends.iter().enumerate() {
            assert_eq!(t.month, i as u32 + 1);
            assert!(t.basic >= 1.0 && t.basic <= 5.0);
        }
    }

    #[test]
    fn test_reviewed_paper_score_matches_selected_correct_options() {
        let catalog = MockCatalog::generate_at(7, anchor());

        for paper in &catalog.reviewed_papers {
            let expected: u32 = paper
                .questions
                .iter()
                .filter(|q| q.options.iter().any(|o| o.selected && o.correct))
                .map(|q| q.points)
                .sum();
            assert_eq!(paper.score, expected);
            assert!(paper.score <= paper.max_score);
            assert!(paper.star_rating <= 5);
        }
    }
}
