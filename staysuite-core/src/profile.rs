//! Preference profiles: the ordered interest tags a user declared.
//!
//! Tags overlap informally with category names and amenity labels. The
//! profile never validates them; unknown tags simply match nothing.

/// Tags the booking front end offers when a user picks preferences.
pub const PREFERENCE_OPTIONS: [&str; 8] = [
    "Luxury", "Business", "Resort", "Boutique", "Spa", "Nature", "Nightlife", "Family",
];

/// Preferences of the signed-in demo user.
const DEMO_PREFERENCES: [&str; 2] = ["Business", "Luxury"];

/// A user's declared preference tags, in the order they were chosen.
///
/// # Examples
/// ```
/// use staysuite_core::PreferenceProfile;
///
/// let profile = PreferenceProfile::new()
///     .with_tag("Business")
///     .with_tag("Luxury");
/// assert!(profile.contains("Luxury"));
/// assert!(!profile.contains("luxury"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PreferenceProfile {
    tags: Vec<String>,
}

impl PreferenceProfile {
    /// Construct an empty profile.
    ///
    /// # Examples
    /// ```
    /// use staysuite_core::PreferenceProfile;
    ///
    /// assert!(PreferenceProfile::new().is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Profile of the demo user, used when no preferences are supplied.
    ///
    /// # Examples
    /// ```
    /// use staysuite_core::PreferenceProfile;
    ///
    /// assert_eq!(PreferenceProfile::demo().tags(), ["Business", "Luxury"]);
    /// ```
    #[must_use]
    pub fn demo() -> Self {
        Self::from_tags(DEMO_PREFERENCES)
    }

    /// Build a profile from any sequence of tags.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated tag list, trimming whitespace and skipping
    /// empty entries.
    ///
    /// # Examples
    /// ```
    /// use staysuite_core::PreferenceProfile;
    ///
    /// let profile = PreferenceProfile::parse_list(" Business, ,Luxury ");
    /// assert_eq!(profile.tags(), ["Business", "Luxury"]);
    /// ```
    #[must_use]
    pub fn parse_list(raw: &str) -> Self {
        Self::from_tags(
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty()),
        )
    }

    /// Report whether the profile holds exactly `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Append a tag.
    pub fn push(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Append a tag while returning `self` for chaining.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.push(tag);
        self
    }

    /// Borrow the tags in declaration order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Report whether no tags were declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
