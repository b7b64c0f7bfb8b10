//! Example meetings shown on first launch.

use crate::model::note::{Importance, Note};

/// Returns the startup example notes, newest first.
pub fn example_notes() -> Vec<Note> {
    vec![
        Note {
            id: 1,
            title: "Product Team Sync".to_string(),
            date: "Dec 15, 2024".to_string(),
            duration: "45 min".to_string(),
            importance: Importance::High,
            summary: "Discussed Q1 roadmap and feature prioritization.".to_string(),
            action_items: to_items(&[
                "Review competitor analysis by Friday",
                "Schedule user interviews",
                "Update project timeline",
            ]),
            key_decisions: to_items(&[
                "Moving forward with mobile app redesign",
                "Postponing API migration to Q2",
            ]),
        },
        Note {
            id: 2,
            title: "Marketing Strategy".to_string(),
            date: "Dec 14, 2024".to_string(),
            duration: "30 min".to_string(),
            importance: Importance::Medium,
            summary: "Planned social media campaign for product launch.".to_string(),
            action_items: to_items(&[
                "Create content calendar",
                "Design social media assets",
                "Brief influencer partners",
            ]),
            key_decisions: to_items(&[
                "Launch date set for January 15th",
                "Budget approved for paid promotion",
            ]),
        },
    ]
}

fn to_items(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
