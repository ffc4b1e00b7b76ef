#![cfg(feature = "ssr")]

use super::*;

#[test]
fn route_list_covers_every_tool_page() {
    let routes = leptos_axum::generate_route_list(App);
    let paths: Vec<String> = routes.iter().map(|r| r.path().to_owned()).collect();
    for fragment in ["crop-doctor", "weather", "market", "schemes", "profit"] {
        assert!(
            paths.iter().any(|p| p.contains(fragment)),
            "no route for {fragment}: {paths:?}"
        );
    }
}
