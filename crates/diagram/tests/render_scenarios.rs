//! End-to-end rendering scenarios over in-memory catalogs

use depmap_catalog::{Catalog, SourceUnit};
use depmap_diagram::render_plantuml;
use depmap_graph::{ModuleGraph, PackageTree};
use pretty_assertions::assert_eq;

fn make_unit(name: &str, dependencies: &[&str]) -> SourceUnit {
    let rel = name.replace('.', "/");
    let mut unit = SourceUnit::new(name, format!("/proj/{rel}.py"));
    unit.set_dependencies(dependencies.iter().map(|d| (*d).to_string()).collect());
    unit
}

fn render(units: Vec<SourceUnit>) -> String {
    let catalog = Catalog::from_units("/proj", units).expect("unique names");
    let graph = ModuleGraph::from_catalog(&catalog).expect("graph");
    let tree = PackageTree::build(&catalog);
    render_plantuml(&catalog, &tree, &graph)
}

#[test]
fn package_with_one_edge() {
    let text = render(vec![make_unit("pkg.a", &["pkg.b"]), make_unit("pkg.b", &[])]);

    assert_eq!(
        text,
        "@startuml\n\
         skinparam linetype ortho\n\
         frame pkg as pkg {\n\
         [a] as pkg.a\n\
         [b] as pkg.b\n\
         }\n\
         [pkg.a] --> [pkg.b]\n\
         @enduml\n"
    );
}

#[test]
fn deep_hierarchy_nests_frames_in_prefix_order() {
    let text = render(vec![make_unit("a.b.c", &[])]);

    assert_eq!(
        text,
        "@startuml\n\
         skinparam linetype ortho\n\
         frame a as a {\n\
         frame b as a.b {\n\
         [c] as a.b.c\n\
         }\n\
         }\n\
         @enduml\n"
    );
}

#[test]
fn top_level_unit_has_no_frame() {
    let text = render(vec![make_unit("main", &[])]);

    assert_eq!(
        text,
        "@startuml\n\
         skinparam linetype ortho\n\
         [main] as main\n\
         @enduml\n"
    );
}

#[test]
fn shared_package_frame_is_emitted_once() {
    let text = render(vec![
        make_unit("pkg.a", &[]),
        make_unit("pkg.b", &[]),
        make_unit("pkg.sub.c", &[]),
    ]);

    assert_eq!(text.matches("frame pkg as pkg {").count(), 1);
    assert_eq!(text.matches("frame sub as pkg.sub {").count(), 1);
}

#[test]
fn lone_initializer_is_omitted_entirely() {
    let text = render(vec![make_unit("pkg.__init__", &[])]);

    assert_eq!(
        text,
        "@startuml\n\
         skinparam linetype ortho\n\
         @enduml\n"
    );
}

#[test]
fn imported_initializer_is_rendered() {
    let text = render(vec![
        make_unit("pkg.__init__", &[]),
        make_unit("pkg.a", &["pkg.__init__"]),
    ]);

    assert!(text.contains("[__init__] as pkg.__init__"));
    assert!(text.contains("[pkg.a] --> [pkg.__init__]"));
}

#[test]
fn importing_initializer_is_rendered() {
    let text = render(vec![
        make_unit("pkg.__init__", &["pkg.a"]),
        make_unit("pkg.a", &[]),
    ]);

    assert!(text.contains("[__init__] as pkg.__init__"));
    assert!(text.contains("[pkg.__init__] --> [pkg.a]"));
}

#[test]
fn edges_follow_all_declarations() {
    let text = render(vec![
        make_unit("pkg.a", &["pkg.b"]),
        make_unit("pkg.b", &[]),
        make_unit("other.c", &["pkg.a"]),
    ]);

    let last_declaration = text.rfind("] as ").expect("declarations");
    let first_edge = text.find("] --> [").expect("edges");
    assert!(first_edge > last_declaration);
}

#[test]
fn edges_are_importer_major_then_dependency_minor() {
    let text = render(vec![
        make_unit("z", &["a", "m"]),
        make_unit("m", &["a"]),
        make_unit("a", &[]),
    ]);

    let edge_lines: Vec<&str> = text
        .lines()
        .filter(|line| line.contains("-->"))
        .collect();
    assert_eq!(
        edge_lines,
        vec!["[m] --> [a]", "[z] --> [a]", "[z] --> [m]"]
    );
}

#[test]
fn rendering_is_deterministic() {
    let units = || {
        vec![
            make_unit("pkg.a", &["pkg.b", "other.c"]),
            make_unit("pkg.b", &[]),
            make_unit("other.c", &[]),
            make_unit("main", &["pkg.a"]),
        ]
    };

    assert_eq!(render(units()), render(units()));
}
