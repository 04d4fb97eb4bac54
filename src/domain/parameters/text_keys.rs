//! Message keys used to build default headings.

pub const CHART_TITLE: &str = "historic.chart.title";
pub const CHART_SUBTITLE2: &str = "historic.chart.subtitle2";
pub const FOR_LABELS: &str = "execution.for_labels";
pub const OPEN_BRACKET: &str = "execution.open_bracket";
pub const CLOSE_BRACKET: &str = "execution.close_bracket";
pub const AND: &str = "execution.and";
pub const FOR: &str = "execution.for";
pub const ON: &str = "execution.on";
pub const SPACE: &str = "execution.space";
pub const CHILDREN_ALL: &str = "children.all";
pub const CHILDREN_FIRST_LEVEL: &str = "children.first_level";
pub const CHILDREN_OF: &str = "children.children_of";
pub const SUT_NOT_IN_SELECTION: &str = "historic.sut_not_in_selection";

/// Every key a message catalog must provide.
pub const ALL: [&str; 13] = [
    CHART_TITLE,
    CHART_SUBTITLE2,
    FOR_LABELS,
    OPEN_BRACKET,
    CLOSE_BRACKET,
    AND,
    FOR,
    ON,
    SPACE,
    CHILDREN_ALL,
    CHILDREN_FIRST_LEVEL,
    CHILDREN_OF,
    SUT_NOT_IN_SELECTION,
];
