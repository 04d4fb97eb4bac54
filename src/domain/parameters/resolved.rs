use serde::Serialize;

use super::{Children, text_keys};
use crate::domain::{Page, SystemUnderTest};
use crate::ports::TextProvider;

/// Validated parameters of one historic report macro invocation.
///
/// Built once by [`crate::services::ParameterResolver`] and never mutated.
/// Title fields keep only what the macro supplied; defaults are computed on
/// access from the immutable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParameters {
    pub(crate) space_key: String,
    pub(crate) page: Page,
    pub(crate) execution_id: String,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) border: bool,
    pub(crate) children: Children,
    pub(crate) max_result: i32,
    pub(crate) target_system: SystemUnderTest,
    pub(crate) show_ignored: bool,
    pub(crate) title: Option<String>,
    pub(crate) sub_title: Option<String>,
    pub(crate) sub_title2: Option<String>,
    pub(crate) labels: Option<String>,
    pub(crate) popup_width: i32,
    pub(crate) popup_height: i32,
}

/// Headings with defaults already applied, for templating layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeading {
    pub title: String,
    pub sub_title: String,
    pub sub_title2: String,
}

impl ResolvedParameters {
    pub fn space_key(&self) -> &str {
        &self.space_key
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn execution_id(&self) -> &str {
        &self.execution_id
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn border(&self) -> bool {
        self.border
    }

    pub fn children(&self) -> Children {
        self.children
    }

    pub fn is_no_children(&self) -> bool {
        self.children == Children::None
    }

    pub fn is_first_children(&self) -> bool {
        self.children == Children::First
    }

    pub fn is_all_children(&self) -> bool {
        self.children == Children::All
    }

    pub fn max_result(&self) -> i32 {
        self.max_result
    }

    pub fn target_system(&self) -> &SystemUnderTest {
        &self.target_system
    }

    /// Name of the resolved system under test.
    pub fn sut(&self) -> &str {
        &self.target_system.name
    }

    pub fn show_ignored(&self) -> bool {
        self.show_ignored
    }

    pub fn labels(&self) -> Option<&str> {
        self.labels.as_deref()
    }

    pub fn popup_width(&self) -> i32 {
        self.popup_width
    }

    pub fn popup_height(&self) -> i32 {
        self.popup_height
    }

    /// Title as supplied by the macro, if any.
    pub fn raw_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn raw_sub_title(&self) -> Option<&str> {
        self.sub_title.as_deref()
    }

    pub fn raw_sub_title2(&self) -> Option<&str> {
        self.sub_title2.as_deref()
    }

    pub fn title(&self, texts: &impl TextProvider) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => texts.text(text_keys::CHART_TITLE),
        }
    }

    pub fn sub_title(&self, texts: &impl TextProvider) -> String {
        match &self.sub_title {
            Some(sub_title) => sub_title.clone(),
            None => self.default_sub_title(texts),
        }
    }

    pub fn sub_title2(&self, texts: &impl TextProvider) -> String {
        match &self.sub_title2 {
            Some(sub_title2) => sub_title2.clone(),
            None => texts.format(
                text_keys::CHART_SUBTITLE2,
                &[self.sut().to_string(), self.max_result.to_string()],
            ),
        }
    }

    /// All three headings at once.
    pub fn heading(&self, texts: &impl TextProvider) -> ReportHeading {
        ReportHeading {
            title: self.title(texts),
            sub_title: self.sub_title(texts),
            sub_title2: self.sub_title2(texts),
        }
    }

    // Token order and single spaces are part of the rendered output.
    fn default_sub_title(&self, texts: &impl TextProvider) -> String {
        let open = texts.text(text_keys::OPEN_BRACKET);
        let close = texts.text(text_keys::CLOSE_BRACKET);
        let mut out = String::new();

        if let Some(labels) = &self.labels {
            out.push_str(&format!(
                "{} {open} {labels} {close} {} ",
                texts.text(text_keys::FOR_LABELS),
                texts.text(text_keys::AND)
            ));
        }

        out.push_str(&texts.text(text_keys::FOR));

        if !self.is_no_children() {
            let depth = if self.is_all_children() {
                texts.text(text_keys::CHILDREN_ALL)
            } else {
                texts.text(text_keys::CHILDREN_FIRST_LEVEL)
            };
            out.push_str(&format!("{depth} {} ", texts.text(text_keys::CHILDREN_OF)));
        }

        out.push_str(&format!("{open} {} {close}", self.page.title.trim()));
        out.push_str(&format!(
            " {} {} {}",
            texts.text(text_keys::ON),
            self.space_key,
            texts.text(text_keys::SPACE)
        ));

        out
    }
}
