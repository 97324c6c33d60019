use super::category::ConsentCategory;

/// One row of the category catalog rendered by the preferences editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: ConsentCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub examples: &'static [&'static str],
}

impl CategoryInfo {
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.category.as_str()
    }
}

const CATALOG: [CategoryInfo; 4] = [
    CategoryInfo {
        category: ConsentCategory::Necessary,
        name: "Necessary",
        description: "Required for the site to work. These cookies remember your consent choice \
                      and keep the site secure. They cannot be switched off.",
        required: true,
        examples: &["Consent choice", "Security tokens", "Load balancing"],
    },
    CategoryInfo {
        category: ConsentCategory::Preferences,
        name: "Preferences",
        description: "Remember settings you choose on this site, such as the colour theme, \
                      so they persist between visits.",
        required: false,
        examples: &["Theme (light/dark)", "Language"],
    },
    CategoryInfo {
        category: ConsentCategory::Analytics,
        name: "Analytics",
        description: "Help us understand how visitors use the site through anonymous, \
                      aggregated statistics.",
        required: false,
        examples: &["Google Analytics", "Page views", "Session duration"],
    },
    CategoryInfo {
        category: ConsentCategory::Marketing,
        name: "Marketing",
        description: "Used to measure campaigns and show relevant content on other sites.",
        required: false,
        examples: &["Ad personalisation", "Conversion tracking", "Remarketing"],
    },
];

/// The fixed category catalog, one entry per category in display order.
#[must_use]
pub fn catalog() -> &'static [CategoryInfo] {
    &CATALOG
}

#[must_use]
pub fn category_info(category: ConsentCategory) -> &'static CategoryInfo {
    match category {
        ConsentCategory::Necessary => &CATALOG[0],
        ConsentCategory::Preferences => &CATALOG[1],
        ConsentCategory::Analytics => &CATALOG[2],
        ConsentCategory::Marketing => &CATALOG[3],
    }
}
