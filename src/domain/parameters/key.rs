use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Recognized macro parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterKey {
    PageTitle,
    SpaceKey,
    Width,
    Height,
    Border,
    Children,
    MaxResult,
    Sut,
    ShowIgnored,
    Title,
    SubTitle,
    SubTitle2,
    Labels,
    PopupWidth,
    PopupHeight,
}

impl ParameterKey {
    /// All recognized keys in declaration order.
    pub const ALL: [ParameterKey; 15] = [
        ParameterKey::PageTitle,
        ParameterKey::SpaceKey,
        ParameterKey::Width,
        ParameterKey::Height,
        ParameterKey::Border,
        ParameterKey::Children,
        ParameterKey::MaxResult,
        ParameterKey::Sut,
        ParameterKey::ShowIgnored,
        ParameterKey::Title,
        ParameterKey::SubTitle,
        ParameterKey::SubTitle2,
        ParameterKey::Labels,
        ParameterKey::PopupWidth,
        ParameterKey::PopupHeight,
    ];

    /// Name as written in macro markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKey::PageTitle => "pagetitle",
            ParameterKey::SpaceKey => "spacekey",
            ParameterKey::Width => "width",
            ParameterKey::Height => "height",
            ParameterKey::Border => "border",
            ParameterKey::Children => "children",
            ParameterKey::MaxResult => "maxresult",
            ParameterKey::Sut => "sut",
            ParameterKey::ShowIgnored => "showignored",
            ParameterKey::Title => "title",
            ParameterKey::SubTitle => "subtitle",
            ParameterKey::SubTitle2 => "subtitle2",
            ParameterKey::Labels => "labels",
            ParameterKey::PopupWidth => "popupwidth",
            ParameterKey::PopupHeight => "popupheight",
        }
    }

    /// Short help line shown by `historic-params keys`.
    pub fn description(&self) -> &'static str {
        match self {
            ParameterKey::PageTitle => "Page the report is attached to (taken from context)",
            ParameterKey::SpaceKey => "Wiki space of the page (taken from context)",
            ParameterKey::Width => "Chart width in pixels",
            ParameterKey::Height => "Chart height in pixels",
            ParameterKey::Border => "Draw a border around the chart",
            ParameterKey::Children => "Include child pages: first or all",
            ParameterKey::MaxResult => "Maximum number of executions shown",
            ParameterKey::Sut => "System under test to report on",
            ParameterKey::ShowIgnored => "Show ignored executions",
            ParameterKey::Title => "Chart title",
            ParameterKey::SubTitle => "Chart subtitle",
            ParameterKey::SubTitle2 => "Second chart subtitle",
            ParameterKey::Labels => "Restrict to pages carrying these labels",
            ParameterKey::PopupWidth => "Popup width in pixels",
            ParameterKey::PopupHeight => "Popup height in pixels",
        }
    }

    fn expected_list() -> String {
        Self::ALL.iter().map(ParameterKey::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterKey {
    type Err = AppError;

    /// Case-sensitive, matching how the wiki hands parameters over.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|key| key.as_str() == s).ok_or_else(|| {
            AppError::UnknownParameter { name: s.to_string(), expected: Self::expected_list() }
        })
    }
}
