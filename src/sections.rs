//! Section renderer – walks a [`ResumeData`] and produces the ordered block
//! list shared by every emitter.
//!
//! Sections always appear in [`Section::ORDER`]. A section is emitted only
//! when its backing data is present and non-empty; the header is always
//! emitted. Nothing here can fail.

use crate::block::{Block, HeadingLevel, Run};
use crate::model::{Education, Experience, PersonalInfo, Project, ResumeData};

/// Delimiter between fields sharing one line.
pub const FIELD_DELIMITER: &str = " | ";

/// Delimiter between items of an inline list (skills, technologies).
pub const LIST_DELIMITER: &str = ", ";

/// An optional field counts only when it holds a non-empty value.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// The conditionally-included body sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

impl Section {
    pub const ORDER: [Section; 6] = [
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Certifications,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Section::Summary => "PROFESSIONAL SUMMARY",
            Section::Skills => "SKILLS",
            Section::Experience => "PROFESSIONAL EXPERIENCE",
            Section::Projects => "PROJECTS",
            Section::Education => "EDUCATION",
            Section::Certifications => "CERTIFICATIONS",
        }
    }

    /// Whether `data` has anything to show for this section.
    pub fn is_present(self, data: &ResumeData) -> bool {
        match self {
            Section::Summary => present(&data.summary).is_some(),
            Section::Skills => !data.skills.is_empty(),
            Section::Experience => !data.experience.is_empty(),
            Section::Projects => !data.projects.is_empty(),
            Section::Education => !data.education.is_empty(),
            Section::Certifications => !data.certifications.is_empty(),
        }
    }
}

/// Render `data` into its block sequence.
pub fn render_sections(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();
    push_header(&mut blocks, &data.personal_info);

    for section in Section::ORDER {
        if !section.is_present(data) {
            continue;
        }
        blocks.push(Block::heading(HeadingLevel::Section, section.heading()));
        match section {
            Section::Summary => {
                if let Some(summary) = present(&data.summary) {
                    blocks.push(Block::paragraph(vec![Run::plain(summary)]));
                }
                blocks.push(Block::blank());
            }
            Section::Skills => {
                blocks.push(Block::paragraph(vec![Run::plain(
                    data.skills.join(LIST_DELIMITER),
                )]));
                blocks.push(Block::blank());
            }
            Section::Experience => {
                for exp in &data.experience {
                    push_experience(&mut blocks, exp);
                }
            }
            Section::Projects => {
                for proj in &data.projects {
                    push_project(&mut blocks, proj);
                }
            }
            Section::Education => {
                for edu in &data.education {
                    push_education(&mut blocks, edu);
                }
            }
            Section::Certifications => {
                blocks.extend(data.certifications.iter().map(Block::list_item));
                blocks.push(Block::blank());
            }
        }
    }

    log::debug!("Rendered {} blocks for '{}'", blocks.len(), data.personal_info.name);
    blocks
}

fn push_header(blocks: &mut Vec<Block>, pi: &PersonalInfo) {
    blocks.push(Block::heading(HeadingLevel::Title, pi.name.to_uppercase()));

    let mut contact = vec![pi.email.as_str(), pi.phone.as_str()];
    if let Some(location) = present(&pi.location) {
        contact.push(location);
    }
    blocks.push(Block::heading(
        HeadingLevel::Subtitle,
        contact.join(FIELD_DELIMITER),
    ));

    let links: Vec<String> = [
        ("LinkedIn", &pi.linkedin),
        ("GitHub", &pi.github),
        ("Website", &pi.website),
    ]
    .into_iter()
    .filter_map(|(label, value)| present(value).map(|v| format!("{label}: {v}")))
    .collect();
    if !links.is_empty() {
        blocks.push(Block::heading(
            HeadingLevel::Subtitle,
            links.join(FIELD_DELIMITER),
        ));
    }

    blocks.push(Block::header_end());
}

fn push_experience(blocks: &mut Vec<Block>, exp: &Experience) {
    blocks.push(Block::paragraph(vec![
        Run::strong(exp.title.clone()),
        Run::plain(format!("{FIELD_DELIMITER}{}", exp.company)),
    ]));
    blocks.push(Block::paragraph(vec![Run::plain(format!(
        "{}{FIELD_DELIMITER}{} - {}",
        exp.location, exp.start_date, exp.end_date
    ))]));
    blocks.extend(exp.responsibilities.iter().map(Block::list_item));
    blocks.push(Block::blank());
}

fn push_project(blocks: &mut Vec<Block>, proj: &Project) {
    blocks.push(Block::paragraph(vec![Run::strong(proj.name.clone())]));
    blocks.push(Block::detail(proj.description.clone()));
    blocks.push(Block::detail(format!(
        "Technologies: {}",
        proj.technologies.join(LIST_DELIMITER)
    )));
    if let Some(url) = present(&proj.url) {
        blocks.push(Block::detail(format!("URL: {url}")));
    }
    blocks.push(Block::blank());
}

fn push_education(blocks: &mut Vec<Block>, edu: &Education) {
    blocks.push(Block::paragraph(vec![
        Run::strong(edu.degree.clone()),
        Run::plain(format!("{FIELD_DELIMITER}{}", edu.institution)),
    ]));
    blocks.push(Block::paragraph(vec![Run::plain(format!(
        "{}{FIELD_DELIMITER}{}",
        edu.location, edu.graduation_date
    ))]));
    if let Some(gpa) = present(&edu.gpa) {
        blocks.push(Block::detail(format!("GPA: {gpa}")));
    }
    if let Some(honors) = present(&edu.honors) {
        blocks.push(Block::detail(honors));
    }
    blocks.push(Block::blank());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Separator;

    fn minimal() -> ResumeData {
        ResumeData::new(PersonalInfo::new("Minimal User", "min@test.com", "555-0000"))
    }

    fn headings(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading {
                    level: HeadingLevel::Section,
                    text,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn minimal_record_renders_header_only() {
        let blocks = render_sections(&minimal());
        assert_eq!(
            blocks,
            vec![
                Block::heading(HeadingLevel::Title, "MINIMAL USER"),
                Block::heading(HeadingLevel::Subtitle, "min@test.com | 555-0000"),
                Block::header_end(),
            ]
        );
    }

    #[test]
    fn location_joins_contact_line() {
        let mut data = minimal();
        data.personal_info.location = Some("Boston, MA".into());
        let blocks = render_sections(&data);
        assert_eq!(
            blocks[1],
            Block::heading(HeadingLevel::Subtitle, "min@test.com | 555-0000 | Boston, MA")
        );
    }

    #[test]
    fn single_link_yields_single_labelled_value() {
        let mut data = minimal();
        data.personal_info.github = Some("github.com/min".into());
        let blocks = render_sections(&data);
        assert_eq!(
            blocks[2],
            Block::heading(HeadingLevel::Subtitle, "GitHub: github.com/min")
        );
    }

    #[test]
    fn links_keep_check_order() {
        let mut data = minimal();
        data.personal_info.website = Some("min.dev".into());
        data.personal_info.linkedin = Some("in/min".into());
        data.personal_info.github = Some("gh/min".into());
        let blocks = render_sections(&data);
        assert_eq!(
            blocks[2].content().as_deref(),
            Some("LinkedIn: in/min | GitHub: gh/min | Website: min.dev")
        );
    }

    #[test]
    fn sections_follow_fixed_order() {
        let data = crate::sample::sample_resume();
        let blocks = render_sections(&data);
        let expected: Vec<&str> = Section::ORDER.iter().map(|s| s.heading()).collect();
        assert_eq!(headings(&blocks), expected);
    }

    #[test]
    fn empty_sequences_are_omitted() {
        let mut data = minimal();
        data.certifications = vec!["CKA".into()];
        let blocks = render_sections(&data);
        assert_eq!(headings(&blocks), vec!["CERTIFICATIONS"]);
        assert_eq!(
            blocks.last(),
            Some(&Block::Separator {
                separator: Separator::Blank
            })
        );
    }

    #[test]
    fn empty_optionals_are_omitted() {
        let mut data = minimal();
        data.summary = Some(String::new());
        data.personal_info.location = Some(String::new());
        data.personal_info.linkedin = Some(String::new());
        data.education.push(Education {
            gpa: Some(String::new()),
            honors: Some(String::new()),
            ..Education::new("BS", "Uni", "Boston", "May 2019")
        });
        data.projects.push(Project {
            name: "Tool".into(),
            description: "Does things".into(),
            technologies: vec!["Rust".into()],
            url: Some(String::new()),
        });

        let blocks = render_sections(&data);
        assert_eq!(headings(&blocks), vec!["PROJECTS", "EDUCATION"]);
        assert_eq!(
            blocks[1],
            Block::heading(HeadingLevel::Subtitle, "min@test.com | 555-0000")
        );
        assert_eq!(blocks[2], Block::header_end());
        let contents: Vec<String> = blocks.iter().filter_map(Block::content).collect();
        for label in ["LinkedIn:", "URL:", "GPA:"] {
            assert!(
                !contents.iter().any(|c| c.starts_with(label)),
                "unexpected '{label}' in {contents:?}"
            );
        }
        assert!(!contents.iter().any(String::is_empty));
    }

    #[test]
    fn experience_entry_layout() {
        let mut data = minimal();
        data.experience.push(Experience {
            title: "Engineer".into(),
            company: "Test Corp".into(),
            location: "NYC".into(),
            start_date: "Jan 2020".into(),
            end_date: "Dec 2020".into(),
            responsibilities: vec!["Task 1".into(), "Task 2".into()],
        });
        let blocks = render_sections(&data);
        assert_eq!(
            &blocks[4..],
            &[
                Block::paragraph(vec![Run::strong("Engineer"), Run::plain(" | Test Corp")]),
                Block::paragraph(vec![Run::plain("NYC | Jan 2020 - Dec 2020")]),
                Block::list_item("Task 1"),
                Block::list_item("Task 2"),
                Block::blank(),
            ]
        );
    }

    #[test]
    fn optional_entry_fields_are_skipped() {
        let mut data = minimal();
        data.projects.push(Project {
            name: "Tool".into(),
            description: "Does things".into(),
            technologies: vec![],
            url: None,
        });
        data.education.push(Education::new("BS", "Uni", "Boston", "May 2019"));
        let contents: Vec<String> = render_sections(&data)
            .iter()
            .filter_map(Block::content)
            .collect();
        assert!(contents.contains(&"Technologies: ".to_string()));
        assert!(!contents.iter().any(|c| c.starts_with("URL:")));
        assert!(!contents.iter().any(|c| c.starts_with("GPA:")));
    }

    #[test]
    fn rendering_is_repeatable() {
        let data = crate::sample::sample_resume();
        assert_eq!(render_sections(&data), render_sections(&data));
    }
}
