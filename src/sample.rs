//! Sample resume data for testing and demonstration.

use crate::model::{Education, Experience, PersonalInfo, Project, ResumeData};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A fully populated record exercising every section and most optional fields.
pub fn sample_resume() -> ResumeData {
    let personal_info = PersonalInfo {
        location: Some("San Francisco, CA".into()),
        linkedin: Some("linkedin.com/in/johndoe".into()),
        github: Some("github.com/johndoe".into()),
        ..PersonalInfo::new("John Doe", "john.doe@email.com", "(555) 123-4567")
    };

    let summary = "Experienced Software Engineer with 5+ years of expertise in full-stack \
                   development, cloud architecture, and agile methodologies. Proven track \
                   record of delivering scalable solutions and leading cross-functional teams \
                   to achieve business objectives.";

    let experience = vec![
        Experience {
            title: "Senior Software Engineer".into(),
            company: "Tech Corp".into(),
            location: "San Francisco, CA".into(),
            start_date: "Jan 2021".into(),
            end_date: "Present".into(),
            responsibilities: strings(&[
                "Led development of microservices architecture serving 1M+ users",
                "Reduced API response time by 40% through optimization and caching",
                "Mentored team of 5 junior developers in best practices",
                "Implemented CI/CD pipeline reducing deployment time by 60%",
            ]),
        },
        Experience {
            title: "Software Engineer".into(),
            company: "StartUp Inc".into(),
            location: "San Francisco, CA".into(),
            start_date: "Jun 2019".into(),
            end_date: "Dec 2020".into(),
            responsibilities: strings(&[
                "Developed RESTful APIs using Python and FastAPI",
                "Built responsive web applications with React and TypeScript",
                "Collaborated with product team to define technical requirements",
                "Improved test coverage from 60% to 95%",
            ]),
        },
    ];

    let education = vec![Education {
        gpa: Some("3.8/4.0".into()),
        honors: Some("Summa Cum Laude".into()),
        ..Education::new(
            "Bachelor of Science in Computer Science",
            "University of Technology",
            "Boston, MA",
            "May 2019",
        )
    }];

    let skills = strings(&[
        "Python",
        "JavaScript",
        "TypeScript",
        "React",
        "Node.js",
        "FastAPI",
        "Django",
        "PostgreSQL",
        "MongoDB",
        "Docker",
        "Kubernetes",
        "AWS",
        "Git",
        "CI/CD",
        "Agile/Scrum",
    ]);

    let projects = vec![Project {
        name: "Open Source Library".into(),
        description: "Created a Python library for data validation with 500+ GitHub stars".into(),
        technologies: strings(&["Python", "pytest", "GitHub Actions"]),
        url: Some("github.com/johndoe/project".into()),
    }];

    let certifications = strings(&[
        "AWS Certified Solutions Architect - Associate",
        "Certified Scrum Master (CSM)",
    ]);

    ResumeData {
        summary: Some(summary.to_string()),
        skills,
        experience,
        projects,
        education,
        certifications,
        ..ResumeData::new(personal_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_fills_every_section() {
        let resume = sample_resume();
        assert_eq!(resume.personal_info.name, "John Doe");
        assert!(resume.summary.is_some());
        assert!(!resume.skills.is_empty());
        assert_eq!(resume.experience.len(), 2);
        assert_eq!(resume.projects.len(), 1);
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.certifications.len(), 2);
        assert!(resume.personal_info.website.is_none());
    }
}
