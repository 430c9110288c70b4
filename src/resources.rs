use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrisisLine {
    pub name: &'static str,
    pub number: &'static str,
    pub instructions: &'static str,
    pub availability: &'static str,
}

pub const CRISIS_LINES: [CrisisLine; 2] = [
    CrisisLine {
        name: "Crisis Text Line",
        number: "741741",
        instructions: "Text HOME to 741741",
        availability: "Free, 24/7 crisis support via text",
    },
    CrisisLine {
        name: "Suicide & Crisis Lifeline",
        number: "988",
        instructions: "Call or text 988",
        availability: "Free, confidential support 24/7",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum ResourceKind {
    Article,
    Video,
    Audio,
}

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub kind: ResourceKind,
    pub category: &'static str,
    pub description: &'static str,
    pub read_time: &'static str,
}

pub const CATEGORIES: [&str; 7] = [
    "All",
    "Anxiety",
    "Depression",
    "Stress",
    "Mindfulness",
    "Sleep",
    "Relationships",
];

pub const RESOURCES: [Resource; 6] = [
    Resource {
        id: 1,
        title: "Understanding Anxiety in Young Adults",
        kind: ResourceKind::Article,
        category: "Anxiety",
        description: "Learn about common anxiety symptoms and coping strategies specifically for young people.",
        read_time: "5 min read",
    },
    Resource {
        id: 2,
        title: "Mindfulness for Beginners",
        kind: ResourceKind::Video,
        category: "Mindfulness",
        description: "A gentle introduction to mindfulness practices that can help reduce stress and improve focus.",
        read_time: "12 min watch",
    },
    Resource {
        id: 3,
        title: "Sleep Hygiene for Better Mental Health",
        kind: ResourceKind::Article,
        category: "Sleep",
        description: "Discover how improving your sleep can significantly impact your mental wellness.",
        read_time: "7 min read",
    },
    Resource {
        id: 4,
        title: "Guided Meditation for Stress Relief",
        kind: ResourceKind::Audio,
        category: "Meditation",
        description: "A 10-minute guided meditation to help you relax and manage daily stress.",
        read_time: "10 min listen",
    },
    Resource {
        id: 5,
        title: "Building Healthy Relationships",
        kind: ResourceKind::Video,
        category: "Relationships",
        description: "Tips for maintaining healthy friendships and family relationships during challenging times.",
        read_time: "15 min watch",
    },
    Resource {
        id: 6,
        title: "Coping with Academic Pressure",
        kind: ResourceKind::Article,
        category: "Stress",
        description: "Strategies for managing school or work stress without compromising your mental health.",
        read_time: "6 min read",
    },
];

/// Resources in `category` (case-insensitive, "All" or absent matches
/// everything) whose title or description contains `query`.
pub fn search_resources(category: Option<&str>, query: Option<&str>) -> Vec<Resource> {
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));
    let query = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    RESOURCES
        .iter()
        .filter(|resource| {
            category.map_or(true, |c| resource.category.eq_ignore_ascii_case(c))
        })
        .filter(|resource| {
            query.as_deref().map_or(true, |q| {
                resource.title.to_lowercase().contains(q)
                    || resource.description.to_lowercase().contains(q)
            })
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_returns_everything() {
        assert_eq!(search_resources(None, None).len(), RESOURCES.len());
        assert_eq!(search_resources(Some("All"), Some("  ")).len(), RESOURCES.len());
    }

    #[test]
    fn category_filter_ignores_case() {
        let found = search_resources(Some("sleep"), None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn query_searches_title_and_description() {
        let ids: Vec<u32> = search_resources(None, Some("STRESS"))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn category_and_query_combine() {
        assert!(search_resources(Some("Anxiety"), Some("sleep")).is_empty());
    }
}
