//! Resume data model – the plain records a caller fills in before rendering.
//!
//! Optional values are `Option<String>`; an empty string is *not* treated as
//! absent. Sequences are rendered in the order the caller supplies them.

/// Name and contact details shown in the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: Option<String>,
    /// Professional-network handle, rendered as `LinkedIn: …`.
    pub linkedin: Option<String>,
    /// Code-hosting handle, rendered as `GitHub: …`.
    pub github: Option<String>,
    pub website: Option<String>,
}

impl PersonalInfo {
    /// Required fields only; every optional field starts out absent.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            location: None,
            linkedin: None,
            github: None,
            website: None,
        }
    }
}

/// One position held. Dates are free-form strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: Option<String>,
    pub honors: Option<String>,
}

impl Education {
    pub fn new(
        degree: impl Into<String>,
        institution: impl Into<String>,
        location: impl Into<String>,
        graduation_date: impl Into<String>,
    ) -> Self {
        Self {
            degree: degree.into(),
            institution: institution.into(),
            location: location.into(),
            graduation_date: graduation_date.into(),
            gpa: None,
            honors: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
}

/// A complete resume. Only `personal_info` is required; a record with every
/// other field empty renders a header-only document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
}

impl ResumeData {
    pub fn new(personal_info: PersonalInfo) -> Self {
        Self {
            personal_info,
            summary: None,
            skills: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
        }
    }
}
