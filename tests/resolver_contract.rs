mod common;

use std::collections::HashMap;

use historic_params::{
    AppError, CatalogFile, Children, MessageBundle, Page, ParameterDefaults, ParameterResolver,
    RawParameters, TextProvider, resolve,
};

/// Renders keys as `<key>` and brackets as parentheses.
struct KeyText;

impl TextProvider for KeyText {
    fn text(&self, key: &str) -> String {
        match key {
            "execution.open_bracket" => "(".to_string(),
            "execution.close_bracket" => ")".to_string(),
            other => format!("<{other}>"),
        }
    }

    fn format(&self, key: &str, args: &[String]) -> String {
        format!("{}{:?}", self.text(key), args)
    }
}

fn catalog() -> CatalogFile {
    CatalogFile::parse(common::DEMO_CATALOG).unwrap()
}

fn raw(pairs: &[(&str, &str)]) -> RawParameters {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>()
}

#[test]
fn golden_sub_title_with_labels_and_all_children() {
    let resolved = resolve(
        &catalog(),
        &raw(&[("children", "all"), ("labels", "smoke")]),
        "DEMO",
        &Page::new("Demo Page"),
        "exec-1",
    )
    .unwrap();

    assert_eq!(
        resolved.sub_title(&KeyText),
        "<execution.for_labels> ( smoke ) <execution.and> <execution.for><children.all> \
         <children.children_of> ( Demo Page ) <execution.on> DEMO <execution.space>"
    );
}

#[test]
fn defaults_without_parameters() {
    let resolved =
        resolve(&catalog(), &raw(&[]), "DEMO", &Page::new("Demo Page"), "exec-1").unwrap();

    assert_eq!(resolved.width(), 500);
    assert_eq!(resolved.height(), 500);
    assert_eq!(resolved.max_result(), 30);
    assert_eq!(resolved.children(), Children::None);
    assert_eq!((resolved.popup_width(), resolved.popup_height()), (800, 600));
    assert_eq!(resolved.sut(), "dotnet");
}

#[test]
fn explicit_sut_returns_that_entry() {
    let resolved =
        resolve(&catalog(), &raw(&[("sut", "java")]), "DEMO", &Page::new("Demo Page"), "e")
            .unwrap();

    assert_eq!(resolved.sut(), "java");
    assert!(!resolved.target_system().is_default);
}

#[test]
fn no_default_and_not_executable_is_sut_not_found() {
    let err = resolve(&catalog(), &raw(&[]), "EMPTY", &Page::new("Demo Page"), "e").unwrap_err();
    assert!(matches!(err, AppError::SutNotFound { key: None }));
}

#[test]
fn malformed_number_never_falls_back() {
    let page = Page::new("Demo Page");
    let params = raw(&[("maxresult", "thirty")]);
    let err = resolve(&catalog(), &params, "DEMO", &page, "e").unwrap_err();
    assert!(matches!(err, AppError::InvalidParameterFormat { ref name, ref value }
        if name == "maxresult" && value == "thirty"));
}

#[test]
fn english_heading_from_bundle() {
    let texts = MessageBundle::english().unwrap();
    let resolved = resolve(
        &catalog(),
        &raw(&[("children", "first"), ("maxresult", "5")]),
        "DEMO",
        &Page::new(" Demo Page "),
        "e",
    )
    .unwrap();

    let heading = resolved.heading(&texts);
    assert_eq!(heading.title, "Execution history");
    assert_eq!(heading.sub_title, "for first-level children of ( Demo Page ) on DEMO space");
    assert_eq!(heading.sub_title2, "dotnet - last 5 executions");
}

#[test]
fn resolver_with_separate_collaborators_and_defaults() {
    let directory = catalog();
    let pages = catalog();
    let defaults = ParameterDefaults { popup_width: 1200, popup_height: 900, ..Default::default() };

    let resolved = ParameterResolver::new(&directory, &pages)
        .with_defaults(defaults)
        .resolve(&raw(&[]), "DEMO", &Page::new("Runner Page"), "e")
        .unwrap();

    assert_eq!(resolved.sut(), "java");
    assert_eq!((resolved.popup_width(), resolved.popup_height()), (1200, 900));
}
