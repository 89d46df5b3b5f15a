//! Profile view model

use serde::Serialize;

use crate::data::StudentRecord;
use crate::icon::Icon;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileDetail {
    pub label: &'static str,
    pub value: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileView {
    pub initial: char,
    pub name: String,
    pub branch: String,
    pub badge: String,
    pub details: Vec<ProfileDetail>,
}

impl ProfileView {
    pub fn build(record: &StudentRecord) -> Self {
        let p = &record.profile;
        let detail = |label, value: String, icon| ProfileDetail { label, value, icon };

        Self {
            initial: p.initial(),
            name: p.name.clone(),
            branch: p.branch.clone(),
            badge: format!("High Performer (CGPA {:.1})", p.cgpa),
            details: vec![
                detail("Full Name", p.name.clone(), Icon::User),
                detail("Roll Number", p.roll_no.clone(), Icon::BookOpen),
                detail("Branch", p.branch.clone(), Icon::GraduationCap),
                detail("Email ID", p.email.clone(), Icon::Message),
                detail("College", p.college.clone(), Icon::Briefcase),
                detail("Current Semester", p.current_sem.to_string(), Icon::Clock),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_details() {
        let view = ProfileView::build(&StudentRecord::load_default().unwrap());
        assert_eq!(view.initial, 'P');
        assert_eq!(view.badge, "High Performer (CGPA 9.7)");

        let labels: Vec<_> = view.details.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            vec!["Full Name", "Roll Number", "Branch", "Email ID", "College", "Current Semester"]
        );
        assert_eq!(view.details[5].value, "7");
    }
}
